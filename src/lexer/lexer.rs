/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     src/lexer/lexer.rs
 * Purpose:  Hand-written scanner turning raw source into classified tokens.
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
use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Turns a Sprig source string into a classified, `Eof`-terminated token
/// stream, or fails on the first lexical violation.
///
/// This is the conventional entry point; `Lexer` itself is public for
/// callers that want to drive scanning manually.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SprigError> {
    Lexer::new(source).scan_tokens()
}

/// The Sprig scanner.
///
/// Walks the source character by character, classifying each token fully
/// (keywords and operators get their own `TokenKind`, never a generic
/// bucket) and recording a line/column span for diagnostics.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new lexer over UTF-8 source text with the cursor at the
    /// start, line counter at 1 and an empty token buffer.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// Scans tokens until the end of input, then appends the terminating
    /// `Eof` token. Whitespace and comments are skipped; any lexical
    /// violation aborts scanning with the first error.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, SprigError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        let span = self.here();
        self.tokens.push(Token::eof().at(span));
        Ok(self.tokens)
    }

    /// Scans and emits a single token from the source stream.
    ///
    /// Handles `//` and `/* */` comments, the multi-character operators
    /// (`++`, `--`, `==`, `!=`, `<=`, `>=`), string and number literals,
    /// and keyword/identifier classification.
    fn scan_token(&mut self) -> Result<(), SprigError> {
        let span = self.here();
        let ch = self.advance();

        match ch {
            // Whitespace
            ' ' | '\r' | '\t' | '\n' => {}

            // Single-line or block comment, else division
            '/' => {
                if self.match_char('/') {
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                } else if self.match_char('*') {
                    self.block_comment();
                } else {
                    self.push(TokenKind::Slash, span);
                }
            }

            '+' => {
                if self.match_char('+') {
                    self.push(TokenKind::PlusPlus, span);
                } else {
                    self.push(TokenKind::Plus, span);
                }
            }

            '-' => {
                if self.match_char('-') {
                    self.push(TokenKind::MinusMinus, span);
                } else {
                    self.push(TokenKind::Minus, span);
                }
            }

            '*' => self.push(TokenKind::Star, span),
            '~' => self.push(TokenKind::Tilde, span),

            '=' => {
                if self.match_char('=') {
                    self.push(TokenKind::EqualsEquals, span);
                } else {
                    self.push(TokenKind::Equals, span);
                }
            }

            '!' => {
                if self.match_char('=') {
                    self.push(TokenKind::BangEquals, span);
                } else {
                    self.push(TokenKind::Bang, span);
                }
            }

            '<' => {
                if self.match_char('=') {
                    self.push(TokenKind::LessEquals, span);
                } else {
                    self.push(TokenKind::Less, span);
                }
            }

            '>' => {
                if self.match_char('=') {
                    self.push(TokenKind::GreaterEquals, span);
                } else {
                    self.push(TokenKind::Greater, span);
                }
            }

            '(' => self.push(TokenKind::OpenParen, span),
            ')' => self.push(TokenKind::CloseParen, span),
            '{' => self.push(TokenKind::OpenBrace, span),
            '}' => self.push(TokenKind::CloseBrace, span),
            ';' => self.push(TokenKind::Semicolon, span),
            ':' => self.push(TokenKind::Colon, span),

            // Strings
            '"' => self.string(span)?,

            // Numbers
            '0'..='9' => self.number(ch, span),

            // Identifiers / keywords
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(ch, span),

            other => {
                return Err(SprigError::new(
                    ErrorKind::UnknownCharacter,
                    format!("Unexpected character '{}'", other),
                    span,
                ));
            }
        }

        Ok(())
    }

    /// Scans a double-quoted string literal. Escapes are not part of the
    /// language; the literal runs verbatim to the closing quote.
    fn string(&mut self, span: Span) -> Result<(), SprigError> {
        let mut text = String::new();

        while !self.is_at_end() && self.peek() != '"' {
            text.push(self.advance());
        }

        if self.is_at_end() {
            return Err(SprigError::new(
                ErrorKind::UnterminatedString,
                "Unterminated string literal",
                span,
            ));
        }

        self.advance(); // closing quote
        self.tokens.push(Token::string(text).at(span));
        Ok(())
    }

    /// Scans an integer or decimal number literal.
    ///
    /// A `.` is only consumed when a digit follows, so `5.` lexes as the
    /// number `5` followed by an unknown-character error on the dot.
    fn number(&mut self, first: char, span: Span) {
        let mut lexeme = String::from(first);

        while self.peek().is_ascii_digit() {
            lexeme.push(self.advance());
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            lexeme.push(self.advance());
            while self.peek().is_ascii_digit() {
                lexeme.push(self.advance());
            }
        }

        // The collected lexeme is digits with at most one interior dot,
        // which always parses as f64.
        let value: f64 = lexeme.parse().unwrap_or_default();
        self.tokens.push(Token::number(value).at(span));
    }

    /// Scans an identifier and classifies it through the keyword table.
    fn identifier(&mut self, first: char, span: Span) {
        let mut word = String::from(first);

        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            word.push(self.advance());
        }

        match keyword_kind(&word) {
            Some(kind) => self.push(kind, span),
            None => self.tokens.push(Token::identifier(word).at(span)),
        }
    }

    /// Consumes a `/* */` comment. An unclosed comment simply runs to end
    /// of input.
    fn block_comment(&mut self) {
        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }
    }

    fn push(&mut self, kind: TokenKind, span: Span) {
        self.tokens.push(Token::new(kind).at(span));
    }

    fn here(&self) -> Span {
        Span::new(self.line, self.column)
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.advance();
        true
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::TokenValue;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("lexing should succeed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn classifies_keywords_and_identifiers() {
        assert_eq!(
            kinds("let total = 5"),
            vec![
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn scans_multi_char_operators() {
        assert_eq!(
            kinds("++ -- >= <= == != > <"),
            vec![
                TokenKind::PlusPlus,
                TokenKind::MinusMinus,
                TokenKind::GreaterEquals,
                TokenKind::LessEquals,
                TokenKind::EqualsEquals,
                TokenKind::BangEquals,
                TokenKind::Greater,
                TokenKind::Less,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn scans_decimal_numbers() {
        let tokens = tokenize("3.14").expect("lexing should succeed");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].value, Some(TokenValue::Number(3.14)));
    }

    #[test]
    fn skips_comments() {
        assert_eq!(
            kinds("// nothing here\nprint /* inline */ ( )"),
            vec![
                TokenKind::Print,
                TokenKind::OpenParen,
                TokenKind::CloseParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn reports_unterminated_string() {
        let err = tokenize("let s = \"oops").expect_err("lexing should fail");
        assert_eq!(err.kind, ErrorKind::UnterminatedString);
    }

    #[test]
    fn reports_unknown_character() {
        let err = tokenize("let x = 5 @").expect_err("lexing should fail");
        assert_eq!(err.kind, ErrorKind::UnknownCharacter);
        assert_eq!(err.span.line, 1);
    }

    #[test]
    fn tracks_line_numbers() {
        let tokens = tokenize("print\nwhile").expect("lexing should succeed");
        assert_eq!(tokens[0].span.line, 1);
        assert_eq!(tokens[1].span.line, 2);
    }
}
