//! Shunting-Yard conversion from infix tokens to reverse-Polish form.
//!
//! Precedence: NOT (3) over AND (2) over OR (1). NOT is right-associative
//! so `!!a` parses as `!(!a)`; AND and OR are left-associative. The output
//! is a flat token list the evaluator consumes with an operand stack.

use super::lexer::QueryToken;
use super::QueryError;

fn precedence(token: &QueryToken) -> u8 {
    match token {
        QueryToken::Not => 3,
        QueryToken::And => 2,
        QueryToken::Or => 1,
        _ => 0,
    }
}

fn is_operator(token: &QueryToken) -> bool {
    matches!(
        token,
        QueryToken::And | QueryToken::Or | QueryToken::Not
    )
}

fn is_right_assoc(token: &QueryToken) -> bool {
    matches!(token, QueryToken::Not)
}

/// Convert an infix token stream (implicit ANDs already inserted) to RPN.
pub fn to_rpn(tokens: Vec<QueryToken>) -> Result<Vec<QueryToken>, QueryError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut ops: Vec<QueryToken> = Vec::new();

    for token in tokens {
        match token {
            QueryToken::Term(_) => output.push(token),
            QueryToken::And | QueryToken::Or | QueryToken::Not => {
                let p_cur = precedence(&token);
                while let Some(top) = ops.last() {
                    let p_top = precedence(top);
                    let pop = is_operator(top)
                        && (p_top > p_cur || (p_top == p_cur && !is_right_assoc(&token)));
                    if !pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        output.push(op);
                    }
                }
                ops.push(token);
            }
            QueryToken::LParen => ops.push(token),
            QueryToken::RParen => loop {
                match ops.pop() {
                    Some(QueryToken::LParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(QueryError::UnbalancedParens),
                }
            },
        }
    }

    while let Some(op) = ops.pop() {
        if matches!(op, QueryToken::LParen | QueryToken::RParen) {
            return Err(QueryError::UnbalancedParens);
        }
        output.push(op);
    }
    Ok(output)
}
