/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     src/main.rs
 * Purpose:  The `sprig` command-line checker.
 *
 * License:
 * This file is part of the Sprig programming language project.
 *
 * Sprig is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use sprig::diagnostics::DiagnosticPrinter;
use sprig::{parse_with_options, tokenize, ParserOptions, Token};
use std::{env, fs, process};
use tracing_subscriber::EnvFilter;

/// Thin entry point around the library.
///
/// Accepts a `.spg` source file (lexed here) or a `.json` token-stream
/// file produced by an external classifier, validates it, and exits
/// non-zero on rejection. `RUST_LOG=trace` shows the grammar productions
/// as they fire.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut options = ParserOptions::default();
    let mut path: Option<String> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--strict-concat" => options.strict_concatenation = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                if path.replace(arg).is_some() {
                    eprintln!("error: more than one input file given");
                    process::exit(2);
                }
            }
        }
    }

    let Some(path) = path else {
        print_usage();
        process::exit(2);
    };

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("error: cannot read {}: {}", path, err);
            process::exit(2);
        }
    };

    let result = if path.ends_with(".json") {
        // Pre-classified token stream from an external producer.
        let tokens: Vec<Token> = match serde_json::from_str(&contents) {
            Ok(tokens) => tokens,
            Err(err) => {
                eprintln!("error: invalid token stream in {}: {}", path, err);
                process::exit(2);
            }
        };
        parse_with_options(tokens, options)
    } else {
        let printer = DiagnosticPrinter::new(path.as_str(), contents.as_str());
        let tokens = match tokenize(&contents) {
            Ok(tokens) => tokens,
            Err(err) => {
                printer.print(&err);
                process::exit(1);
            }
        };
        parse_with_options(tokens, options)
    };

    match result {
        Ok(()) => println!("{}: ok", path),
        Err(err) => {
            DiagnosticPrinter::new(path.as_str(), contents.as_str()).print(&err);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("usage: sprig [--strict-concat] <file.spg | tokens.json>");
}
