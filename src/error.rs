/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     src/error.rs
 * Purpose:  The typed fatal diagnostic produced by the lexer and parser.
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

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use std::fmt;

/// The category of a fatal diagnostic.
///
/// Every rejection the checker can produce falls into exactly one of
/// these. The first two are lexical, the rest come out of the parser and
/// its bookkeeping (symbol table and label registry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unrecognized character in raw source.
    UnknownCharacter,

    /// A string literal left open at end of input.
    UnterminatedString,

    /// The current token does not match the kind the grammar requires.
    UnexpectedToken,

    /// The current token does not begin any known statement.
    InvalidStatement,

    /// A `label` statement redeclares an existing label name.
    DuplicateLabel,

    /// End-of-program reconciliation found a `goto` target with no
    /// matching `label` declaration.
    UndeclaredLabel,

    /// A `let` statement declares a name that already exists.
    DuplicateDeclaration,

    /// An identifier used before any declaring statement for it.
    UndeclaredReference,

    /// A value position holds none of string, number or identifier.
    MalformedValue,
}

impl ErrorKind {
    /// Stable error code, printed in brackets by the diagnostic printer.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::UnknownCharacter | ErrorKind::UnterminatedString => "E_LEX",
            ErrorKind::UnexpectedToken => "E_SYNTAX",
            ErrorKind::InvalidStatement => "E_STATEMENT",
            ErrorKind::DuplicateLabel => "E_LABEL_DUP",
            ErrorKind::UndeclaredLabel => "E_LABEL_UNDECLARED",
            ErrorKind::DuplicateDeclaration => "E_REDECLARED",
            ErrorKind::UndeclaredReference => "E_REFERENCE",
            ErrorKind::MalformedValue => "E_VALUE",
        }
    }
}

/// A fatal Sprig diagnostic.
///
/// The checker is fail-fast: the first violation becomes one of these and
/// aborts the whole run. There is no collection, resynchronization or
/// partial output. Callers decide how to present it; `DiagnosticPrinter`
/// renders it compiler-style when source text is available.
#[derive(Debug, Clone)]
pub struct SprigError {
    /// Typed category, see `ErrorKind`.
    pub kind: ErrorKind,

    /// Human-readable error message.
    pub message: String,

    /// Primary source location. The unknown position (`0:0`) when the
    /// offending token came from a stream without spans.
    pub span: Span,

    /// Optional note / help text.
    pub help: Option<String>,
}

impl SprigError {
    /// Generic constructor.
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// Stable error code for this diagnostic.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// A `match` point failed: the grammar required `expected` but the
    /// stream holds `found`.
    pub fn unexpected_token(expected: TokenKind, found: &Token) -> Self {
        Self::new(
            ErrorKind::UnexpectedToken,
            format!("Expected {}, got {}", expected, found.describe()),
            found.span,
        )
    }

    /// No statement production begins with `found`.
    pub fn invalid_statement(found: &Token) -> Self {
        Self::new(
            ErrorKind::InvalidStatement,
            format!("Invalid statement at {}", found.describe()),
            found.span,
        )
    }

    /// A `label` statement names an already-declared label.
    pub fn duplicate_label(name: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::DuplicateLabel,
            format!("Label already exists: {}", name),
            span,
        )
    }

    /// Reconciliation found a `goto` to a label never declared. The span
    /// points at the goto site, since the declaration does not exist.
    pub fn undeclared_label(name: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::UndeclaredLabel,
            format!("Attempting to goto an undeclared label: {}", name),
            span,
        )
    }

    /// A `let` statement redeclares a name.
    pub fn duplicate_declaration(name: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::DuplicateDeclaration,
            format!("A variable named '{}' is already defined in this scope", name),
            span,
        )
    }

    /// An identifier was referenced with no prior declaring statement.
    pub fn undeclared_reference(name: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::UndeclaredReference,
            format!("Referencing variable before assignment: {}", name),
            span,
        )
    }

    /// A value position after `=` or `+` holds something that is neither
    /// a string, a number nor an identifier.
    pub fn malformed_value(found: &Token) -> Self {
        Self::new(
            ErrorKind::MalformedValue,
            format!("Expected string, number or an identifier, got {}", found.describe()),
            found.span,
        )
    }
}

impl fmt::Display for SprigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SprigError {}
