// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stage 1: raw corpus TSV → one line of lowercased tokens per document.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use talpa::run_tokenizer;

#[derive(Parser)]
#[command(
    name = "tokenizer",
    about = "Tokenize a raw corpus TSV into one line of terms per document"
)]
struct Args {
    /// Input corpus: doc_id \t source \t url \t title \t text
    raw_text: PathBuf,

    /// Output file: doc_id \t tok1 tok2 ...
    tokenized: PathBuf,
}

fn main() {
    let args = Args::parse();
    match run_tokenizer(&args.raw_text, &args.tokenized) {
        Ok(stats) => {
            println!("Tokenizer finished");
            print!("{}", stats);
        }
        Err(e) => {
            eprintln!("tokenizer: {}", e);
            process::exit(1);
        }
    }
}
