// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stage 2: tokenized lines → suffix-stemmed lines, same shape.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use talpa::run_stemmer;

#[derive(Parser)]
#[command(
    name = "stemmer",
    about = "Apply light suffix stemming to a tokenized corpus"
)]
struct Args {
    /// Input file produced by the tokenizer
    tokenized: PathBuf,

    /// Output file with stemmed tokens
    stemmed: PathBuf,
}

fn main() {
    let args = Args::parse();
    match run_stemmer(&args.tokenized, &args.stemmed) {
        Ok(stats) => {
            println!("Stemmer finished");
            print!("{}", stats);
        }
        Err(e) => {
            eprintln!("stemmer: {}", e);
            process::exit(1);
        }
    }
}
