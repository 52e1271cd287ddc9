/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     src/span.rs
 * Purpose:  Source location tracking for tokens and diagnostics.
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

use serde::{Deserialize, Serialize};

/// A source position attached to every token.
///
/// Spans exist purely for diagnostics: the parser never branches on them,
/// it only threads them through into error values so the diagnostic
/// printer can point at the offending source line.
///
/// Externally supplied token streams (see `lexer::token`) may omit spans
/// entirely, in which case they default to `0:0` and diagnostics fall back
/// to message-only output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// 1-based line number. `0` means "unknown".
    pub line: usize,

    /// 1-based column number. `0` means "unknown".
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}
