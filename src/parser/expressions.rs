/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     src/parser/expressions.rs
 * Purpose:  The expression precedence chain.
 *
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire Sprig expression grammar**.
 *
 * Parsing order follows strict mathematical precedence:
 *
 *   comparison → expression → term → unary → primary
 *
 * Each layer delegates to the next and loops on its own operators
 * left-to-right, which guarantees correct precedence, left associativity
 * and zero ambiguity without any backtracking.
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

use crate::error::{ErrorKind, SprigError};
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use tracing::trace;

impl Parser {
    /// comparison → expression ( ( ">" | ">=" | "<" | "<=" | "==" | "!=" ) expression )*
    ///
    /// Used by `if`, `while` and `for` conditions. A bare expression with
    /// no comparison operator is accepted, so conditions degrade
    /// gracefully to a single truthy expression.
    pub(crate) fn comparison(&mut self) -> Result<(), SprigError> {
        trace!("comparison");

        self.expression()?;

        while self.is_comparison_operator() {
            self.advance();
            self.expression()?;
        }

        Ok(())
    }

    /// expression → term ( ( "+" | "-" ) term )*
    pub(crate) fn expression(&mut self) -> Result<(), SprigError> {
        trace!("expression");

        self.term()?;

        while self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            self.advance();
            self.term()?;
        }

        Ok(())
    }

    /// term → unary ( ( "*" | "/" ) unary )*
    fn term(&mut self) -> Result<(), SprigError> {
        trace!("term");

        self.unary()?;

        while self.check(TokenKind::Star) || self.check(TokenKind::Slash) {
            self.advance();
            self.unary()?;
        }

        Ok(())
    }

    /// unary → ( "+" | "-" | "!" | "~" | "++" | "--" )? primary ( "++" | "--" )?
    ///
    /// At most one prefix operator and, independently, at most one postfix
    /// increment/decrement; both may be present at once.
    fn unary(&mut self) -> Result<(), SprigError> {
        if matches!(
            self.current().kind,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Bang
                | TokenKind::Tilde
                | TokenKind::PlusPlus
                | TokenKind::MinusMinus
        ) {
            trace!("unary: prefix {}", self.current().kind);
            self.advance();
        }

        self.primary()?;

        if matches!(
            self.current().kind,
            TokenKind::PlusPlus | TokenKind::MinusMinus
        ) {
            trace!("unary: postfix {}", self.current().kind);
            self.advance();
        }

        Ok(())
    }

    /// primary → number | string | identifier | "(" expression ")"
    ///
    /// The numeric path's use-before-declare enforcement lives here: an
    /// identifier in primary position must already be a declared symbol.
    /// This is deliberately stricter than the concatenation path.
    fn primary(&mut self) -> Result<(), SprigError> {
        trace!("primary: {}", self.current().describe());

        match self.current().kind {
            TokenKind::Number | TokenKind::StringLit => {
                self.advance();
                Ok(())
            }

            TokenKind::Identifier => {
                if !self.symbols.contains(self.current().text()) {
                    let found = self.current();
                    return Err(SprigError::undeclared_reference(
                        found.text(),
                        found.span,
                    ));
                }
                self.advance();
                Ok(())
            }

            TokenKind::OpenParen => {
                self.advance();
                self.expression()?;
                self.consume(TokenKind::CloseParen)?;
                Ok(())
            }

            _ => {
                let found = self.current();
                Err(SprigError::new(
                    ErrorKind::UnexpectedToken,
                    format!("Unexpected token at {}", found.describe()),
                    found.span,
                ))
            }
        }
    }
}
