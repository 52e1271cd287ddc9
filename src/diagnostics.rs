/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     src/diagnostics.rs
 * Purpose:  Compiler-style rendering of fatal diagnostics.
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

use crate::error::SprigError;
use crate::span::Span;

/// Renders human-friendly, compiler-style diagnostics for Sprig errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified and designed to remain readable without color. When the
/// error carries no usable span (token streams supplied without
/// positions), the printer degrades to the header line alone.
pub struct DiagnosticPrinter {
    /// Full source code of the file being checked, kept as one string so
    /// individual lines can be extracted for display.
    source: String,

    /// Name of the source file, used only for display.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    ///
    /// # Output Example
    /// ```text
    /// error[E_REFERENCE]: Referencing variable before assignment: y
    ///   --> example.spg:3:7
    ///    |
    ///  3 | print(y)
    ///    |       ^
    /// ```
    pub fn print(&self, error: &SprigError) {
        let Span { line, column } = error.span;

        eprintln!("error[{}]: {}", error.code(), error.message);

        if line == 0 {
            if let Some(help) = &error.help {
                eprintln!("help: {}", help);
            }
            return;
        }

        eprintln!("  --> {}:{}:{}", self.file_name, line, column);

        let lines: Vec<&str> = self.source.lines().collect();
        let src_line = lines.get(line.saturating_sub(1)).unwrap_or(&"");

        eprintln!("   |");
        eprintln!("{:>3} | {}", line, src_line);
        eprintln!("   | {}^", " ".repeat(column.saturating_sub(1)));

        if let Some(help) = &error.help {
            eprintln!("help: {}", help);
        }
    }
}
