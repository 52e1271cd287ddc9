/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     src/parser/statements.rs
 * Purpose:  Statement-level grammar and the declaration bookkeeping it
 *           performs while recognizing statements.
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
    /// Parses a single Sprig statement.
    ///
    /// This is the **main dispatcher** for all statement grammar forms:
    /// one decision on the current token's kind, no lookahead. Each branch
    /// leaves the cursor at the first token after the recognized
    /// statement.
    ///
    /// # Responsibilities
    /// - I/O statements (`print`, `input`)
    /// - Control flow (`if`/`else`, `while`, `for`)
    /// - Labels and jumps (`label`, `goto`)
    /// - Declarations (`int`, `let`, `var`) and assignment
    /// - Rejecting anything else as an invalid statement
    pub(crate) fn statement(&mut self) -> Result<(), SprigError> {
        match self.current().kind {
            TokenKind::Print => self.print_statement(),
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::For => self.for_statement(),
            TokenKind::Label => self.label_statement(),
            TokenKind::Goto => self.goto_statement(),
            TokenKind::Int => self.int_declaration(),
            TokenKind::Let => self.let_declaration(),
            TokenKind::Var => self.var_declaration(),
            TokenKind::Input => self.input_statement(),
            TokenKind::Identifier => self.assignment(),
            _ => Err(SprigError::invalid_statement(self.current())),
        }
    }

    /// print '(' ( string | expression ) ')'
    fn print_statement(&mut self) -> Result<(), SprigError> {
        trace!("statement: print");
        self.advance();

        self.consume(TokenKind::OpenParen)?;

        if self.check(TokenKind::StringLit) {
            self.advance();
        } else {
            self.expression()?;
        }

        self.consume(TokenKind::CloseParen)?;
        Ok(())
    }

    /// if '(' comparison ')' block ( else-chain )?
    ///
    /// The else-chain is the one place the grammar needs a second token of
    /// context: after consuming `else`, the next token selects between
    /// another conditional arm (`if`) and the terminal `{` block. A
    /// terminal block ends the chain outright, so a further `else` behind
    /// it is *not* part of this statement and surfaces as an invalid
    /// statement in the enclosing block.
    fn if_statement(&mut self) -> Result<(), SprigError> {
        trace!("statement: if");
        self.advance();

        self.consume(TokenKind::OpenParen)?;
        self.comparison()?;
        self.consume(TokenKind::CloseParen)?;
        self.block()?;

        while self.check(TokenKind::Else) {
            self.advance();

            if self.check(TokenKind::If) {
                trace!("statement: else-if");
                self.advance();

                self.consume(TokenKind::OpenParen)?;
                self.comparison()?;
                self.consume(TokenKind::CloseParen)?;
                self.block()?;
            } else if self.check(TokenKind::OpenBrace) {
                trace!("statement: else");
                self.block()?;
                break;
            } else {
                let found = self.current();
                return Err(SprigError::new(
                    ErrorKind::UnexpectedToken,
                    format!("Expected 'if' or '{{' after 'else', got {}", found.describe()),
                    found.span,
                )
                .with_help("an else arm is either another 'if' condition or a '{' block"));
            }
        }

        Ok(())
    }

    /// while '(' comparison ')' block
    fn while_statement(&mut self) -> Result<(), SprigError> {
        trace!("statement: while");
        self.advance();

        self.consume(TokenKind::OpenParen)?;
        self.comparison()?;
        self.consume(TokenKind::CloseParen)?;
        self.block()
    }

    /// for '(' statement ';' comparison ';' expression ')' block
    ///
    /// The initializer is a full statement, so a `for` may declare the
    /// symbol it iterates on.
    fn for_statement(&mut self) -> Result<(), SprigError> {
        trace!("statement: for");
        self.advance();

        self.consume(TokenKind::OpenParen)?;
        self.statement()?;
        self.consume(TokenKind::Semicolon)?;
        self.comparison()?;
        self.consume(TokenKind::Semicolon)?;
        self.expression()?;
        self.consume(TokenKind::CloseParen)?;
        self.block()
    }

    /// label identifier ':'
    ///
    /// Declaring the same label twice is rejected immediately, at the
    /// second declaration site.
    fn label_statement(&mut self) -> Result<(), SprigError> {
        trace!("statement: label");
        self.advance();

        let token = self.consume(TokenKind::Identifier)?;
        let name = token.text().to_string();

        if self.labels_declared.contains(&name) {
            return Err(SprigError::duplicate_label(&name, token.span));
        }
        self.labels_declared.insert(name);

        self.consume(TokenKind::Colon)?;
        Ok(())
    }

    /// goto identifier
    ///
    /// No existence check here: forward references are legal, so the name
    /// is only recorded and reconciled once the whole stream is consumed.
    /// The span of the first goto to a name is kept for the diagnostic.
    fn goto_statement(&mut self) -> Result<(), SprigError> {
        trace!("statement: goto");
        self.advance();

        let token = self.consume(TokenKind::Identifier)?;
        self.labels_referenced
            .entry(token.text().to_string())
            .or_insert(token.span);

        Ok(())
    }

    /// int identifier '=' expression
    ///
    /// Declaration is idempotent: redeclaring an existing `int` name is
    /// not an error, unlike `let`. The name is declared before the
    /// initializer is parsed, so the initializer may reference it.
    fn int_declaration(&mut self) -> Result<(), SprigError> {
        trace!("statement: int");
        self.advance();

        let token = self.consume(TokenKind::Identifier)?;
        self.symbols.insert(token.text().to_string());

        self.consume(TokenKind::Equals)?;
        self.expression()
    }

    /// let identifier '=' ( concatenation | expression )
    ///
    /// Strict one-time declaration: a `let` for a name that is already in
    /// the symbol table is rejected.
    fn let_declaration(&mut self) -> Result<(), SprigError> {
        trace!("statement: let");
        self.advance();

        let token = self.consume(TokenKind::Identifier)?;
        let name = token.text().to_string();

        if !self.symbols.insert(name.clone()) {
            return Err(SprigError::duplicate_declaration(&name, token.span));
        }

        self.consume(TokenKind::Equals)?;
        self.value()
    }

    /// var identifier '=' ( concatenation | expression )
    ///
    /// Idempotent, like `int`.
    fn var_declaration(&mut self) -> Result<(), SprigError> {
        trace!("statement: var");
        self.advance();

        let token = self.consume(TokenKind::Identifier)?;
        self.symbols.insert(token.text().to_string());

        self.consume(TokenKind::Equals)?;
        self.value()
    }

    /// input identifier
    ///
    /// Reading into a name declares it if it is not declared already.
    fn input_statement(&mut self) -> Result<(), SprigError> {
        trace!("statement: input");
        self.advance();

        let token = self.consume(TokenKind::Identifier)?;
        self.symbols.insert(token.text().to_string());
        Ok(())
    }

    /// identifier '=' ( concatenation | expression )
    ///
    /// Plain assignment requires the target to already be a declared
    /// symbol; assigning to an undeclared name is rejected at the
    /// identifier.
    fn assignment(&mut self) -> Result<(), SprigError> {
        trace!("statement: assignment");

        let token = self.current().clone();
        let name = token.text().to_string();

        if !self.symbols.contains(&name) {
            return Err(SprigError::undeclared_reference(&name, token.span));
        }

        self.advance();
        self.consume(TokenKind::Equals)?;
        self.value()
    }

    /// The right-hand side of `let`, `var` and assignment: a value that
    /// starts with a string literal is a concatenation, anything else is
    /// a numeric expression.
    fn value(&mut self) -> Result<(), SprigError> {
        if self.check(TokenKind::StringLit) {
            self.concatenation()
        } else {
            self.expression()
        }
    }

    /// string ( '+' ( string | identifier | number ) )*
    ///
    /// A dedicated, looser grammar distinct from `expression`: it does not
    /// recurse through `term`/`unary`, and identifiers appearing here are
    /// by default **not** checked against the symbol table. That asymmetry
    /// with the numeric path is historical behavior;
    /// `ParserOptions::strict_concatenation` makes this path check too.
    fn concatenation(&mut self) -> Result<(), SprigError> {
        trace!("concatenation");

        self.consume(TokenKind::StringLit)?;

        while self.check(TokenKind::Plus) {
            self.advance();

            match self.current().kind {
                TokenKind::StringLit | TokenKind::Number => self.advance(),
                TokenKind::Identifier => {
                    if self.options.strict_concatenation
                        && !self.symbols.contains(self.current().text())
                    {
                        let found = self.current();
                        return Err(SprigError::undeclared_reference(
                            found.text(),
                            found.span,
                        ));
                    }
                    self.advance();
                }
                _ => return Err(SprigError::malformed_value(self.current())),
            }
        }

        Ok(())
    }

    /// '{' statement* '}'
    ///
    /// Shared body parser for `if`, `else`, `while` and `for`. Stops the
    /// statement loop at `Eof` so an unterminated block reports the
    /// missing `'}'` instead of an invalid statement at end of file.
    fn block(&mut self) -> Result<(), SprigError> {
        self.consume(TokenKind::OpenBrace)?;

        while !self.check(TokenKind::CloseBrace) && !self.check(TokenKind::Eof) {
            self.statement()?;
        }

        self.consume(TokenKind::CloseBrace)?;
        Ok(())
    }
}
