/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     src/lib.rs
 * Purpose:  Crate root wiring the Sprig checker together.
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

//! Sprig is a syntax validator and minimal static checker for a small
//! imperative scripting language: C-like control flow, labeled `goto`,
//! typed and untyped declarations, string concatenation, and basic I/O
//! statements.
//!
//! The pipeline is deliberately short:
//!
//! ```text
//! Source → Lexer → Tokens → Parser → accept / reject
//! ```
//!
//! The parser is a recursive-descent engine over an `Eof`-terminated
//! token stream. While traversing the grammar it tracks declared symbols
//! and declared/referenced labels, rejects the first violation it meets,
//! and reconciles `goto` targets against `label` declarations once the
//! whole stream is consumed. It never materializes an AST; acceptance is
//! simply `Ok(())`.
//!
//! Token streams usually come from [`lexer::tokenize`], but any external
//! producer can hand the parser a pre-classified stream (the token model
//! serializes through serde for exactly that purpose).
//!
//! ```
//! use sprig::{parse, tokenize};
//!
//! let tokens = tokenize("let x = 5 print(x)").unwrap();
//! assert!(parse(tokens).is_ok());
//! ```

/// Typed fatal diagnostics.
pub mod error;

/// Compiler-style diagnostic rendering.
pub mod diagnostics;

/// Lexical analysis: source text to classified tokens.
pub mod lexer;

/// The recursive-descent parser and its bookkeeping.
pub mod parser;

/// Source positions.
pub mod span;

pub use error::{ErrorKind, SprigError};
pub use lexer::token::{Token, TokenKind, TokenValue};
pub use lexer::tokenize;
pub use parser::{parse, parse_with_options, Parser, ParserOptions};
pub use span::Span;
