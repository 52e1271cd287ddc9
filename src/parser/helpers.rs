/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     src/parser/helpers.rs
 * Purpose:  Cursor primitives: checking, consuming and advancing tokens.
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
use crate::parser::parser::Parser;

impl Parser {
    /// The token under the cursor.
    ///
    /// Always in bounds: construction guarantees an `Eof` sentinel and
    /// `advance()` never moves past it.
    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// Peek-equality: does the current token have this kind?
    ///
    /// No side effect, never fails. Every grammar decision in the parser
    /// is made through this single-token check; there is no backtracking.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Consumes a required token kind.
    ///
    /// On match, advances exactly one token and returns the consumed
    /// token (declaration sites need its literal value). On mismatch,
    /// fails with a diagnostic naming the expected and actual kinds.
    pub(crate) fn consume(&mut self, kind: TokenKind) -> Result<Token, SprigError> {
        if !self.check(kind) {
            return Err(SprigError::unexpected_token(kind, self.current()));
        }

        let token = self.current().clone();
        self.advance();
        Ok(token)
    }

    /// Advances one token forward.
    ///
    /// Once the `Eof` sentinel is current this silently no-ops, so the
    /// cursor never indexes out of bounds and `current()` keeps returning
    /// the sentinel.
    pub(crate) fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Whether the current token is one of the six comparison operators.
    pub(crate) fn is_comparison_operator(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::Greater
                | TokenKind::GreaterEquals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::EqualsEquals
                | TokenKind::BangEquals
        )
    }
}
