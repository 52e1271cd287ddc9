/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public
 * `parse()` driver used to validate a classified token stream against the
 * Sprig grammar and its static rules.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `statements.rs`   → Statement-level grammar (`if`, `while`, `let`, etc.)
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `helpers.rs`      → Token checking, consumption, and navigation
 *
 * This file serves as the **root coordinator** of the parsing process.
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
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::trace;

/// Tunable checking behavior.
///
/// The defaults replicate the language's historical semantics. The single
/// switch exists because string concatenation deliberately skips the
/// symbol-table check that numeric expressions enforce; callers who want
/// uniform strictness can opt in.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// When `true`, identifiers inside a string concatenation must already
    /// be declared, exactly like identifiers in numeric expressions.
    /// Defaults to `false`: concatenation accepts any identifier.
    pub strict_concatenation: bool,
}

/// The core Sprig recursive-descent parser.
///
/// This structure maintains:
/// - The full token stream and the current cursor position into it
/// - The symbol table: every identifier declared so far in the single,
///   flat, whole-program scope
/// - The label registry: labels declared via `label X:` and labels
///   referenced via `goto X`, reconciled once at end of program
///
/// A parser instance validates exactly one program; all bookkeeping is
/// created with the instance and discarded with it, so independent parses
/// never share state. The grammar logic lives in extension modules
/// (`statements`, `expressions`, `helpers`) via additional `impl Parser`
/// blocks.
pub struct Parser {
    /// Complete list of tokens to be parsed, always `Eof`-terminated.
    pub(crate) tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub(crate) position: usize,

    /// Names with a declaring statement (`int`, `let`, `var`, `input`)
    /// already processed in token order.
    pub(crate) symbols: HashSet<String>,

    /// Labels introduced by `label X:` statements.
    pub(crate) labels_declared: BTreeSet<String>,

    /// Labels targeted by `goto X`, mapped to the span of the first goto
    /// so the reconciliation diagnostic can point somewhere useful. An
    /// ordered map keeps the reported label deterministic.
    pub(crate) labels_referenced: BTreeMap<String, Span>,

    pub(crate) options: ParserOptions,
}

/// Public entry point for the Sprig checking phase.
///
/// Validates the token stream against the grammar and static rules, then
/// reconciles labels. Returns `Ok(())` on acceptance or the first fatal
/// diagnostic on rejection.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → accept / reject
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<(), SprigError> {
    Parser::new(tokens).parse()
}

/// Like [`parse`], with explicit [`ParserOptions`].
pub fn parse_with_options(
    tokens: Vec<Token>,
    options: ParserOptions,
) -> Result<(), SprigError> {
    Parser::with_options(tokens, options).parse()
}

impl Parser {
    /// Creates a parser over a token stream with default options.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_options(tokens, ParserOptions::default())
    }

    /// Creates a parser over a token stream.
    ///
    /// The input contract requires the stream to end with `Eof`; streams
    /// from foreign producers that omit it get one appended so the cursor
    /// invariants hold.
    pub fn with_options(mut tokens: Vec<Token>, options: ParserOptions) -> Self {
        if tokens.last().map_or(true, |t| t.kind != TokenKind::Eof) {
            tokens.push(Token::eof());
        }

        Self {
            tokens,
            position: 0,
            symbols: HashSet::new(),
            labels_declared: BTreeSet::new(),
            labels_referenced: BTreeMap::new(),
            options,
        }
    }

    /// Validates the entire token stream.
    ///
    /// This is the **main driver** of the recursive-descent parser: it
    /// consumes statements until the `Eof` sentinel, then performs the
    /// deferred label reconciliation. The first violation aborts the parse.
    pub fn parse(&mut self) -> Result<(), SprigError> {
        trace!("program");

        while !self.check(TokenKind::Eof) {
            self.statement()?;
        }

        self.reconcile_labels()
    }

    /// Whole-program label reconciliation.
    ///
    /// Every `goto`-referenced name must have a matching declaration.
    /// This check is deferred to end of program because forward references
    /// (`goto` before the matching `label`) are legal.
    fn reconcile_labels(&self) -> Result<(), SprigError> {
        for (label, span) in &self.labels_referenced {
            if !self.labels_declared.contains(label) {
                return Err(SprigError::undeclared_label(label, *span));
            }
        }

        Ok(())
    }

    /// The identifiers declared so far. Exposed for callers that want to
    /// inspect the checker's bookkeeping after a parse.
    pub fn symbols(&self) -> &HashSet<String> {
        &self.symbols
    }

    /// The labels declared so far.
    pub fn declared_labels(&self) -> &BTreeSet<String> {
        &self.labels_declared
    }
}
