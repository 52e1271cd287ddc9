/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     src/lexer/mod.rs
 * Purpose:  Root module for lexical analysis.
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

/// The scanner itself: source text in, classified tokens out.
pub mod lexer;

/// Reserved-word classification.
pub mod keywords;

/// The token model shared with the parser and with external token
/// producers.
pub mod token;

/// Re-export the public scanning entry point so callers can use
/// `crate::lexer::tokenize(...)`.
pub use lexer::{tokenize, Lexer};
