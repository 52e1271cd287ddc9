/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     src/lexer/token.rs
 * Purpose:  The classified token model consumed by the parser.
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

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The **closed set of token categories** in the Sprig language.
///
/// Unlike lexers that emit generic `Keyword`/`Symbol` buckets and force the
/// parser to compare lexemes, Sprig classifies every token fully at lex
/// time. The parser then makes all of its grammar decisions by comparing
/// `TokenKind` values alone, which is what keeps the grammar LL(1).
///
/// # Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → accept / reject
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    // ------------------------------------------------------------
    // LITERALS
    // ------------------------------------------------------------
    /// A numeric literal: `42`, `3.14`.
    Number,

    /// A double-quoted string literal.
    StringLit,

    /// A user-defined name: variables and labels.
    Identifier,

    // ------------------------------------------------------------
    // KEYWORDS
    // ------------------------------------------------------------
    If,
    Else,
    While,
    For,
    Foreach,
    Goto,
    Label,
    Let,
    Var,
    Int,
    Print,
    Input,
    In,

    /// The `char` type keyword.
    CharType,
    /// The `float` type keyword.
    FloatType,
    /// The `string` type keyword.
    StringType,

    // ------------------------------------------------------------
    // PUNCTUATION
    // ------------------------------------------------------------
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Semicolon,
    Colon,

    // ------------------------------------------------------------
    // OPERATORS
    // ------------------------------------------------------------
    Equals,
    Plus,
    Minus,
    Star,
    Slash,
    PlusPlus,
    MinusMinus,
    Bang,
    Tilde,
    Greater,
    GreaterEquals,
    Less,
    LessEquals,
    EqualsEquals,
    BangEquals,

    /// End-of-stream sentinel.
    ///
    /// Always the **final token** of a well-formed stream. The parser uses
    /// it to decide when the program is fully consumed, and `advance()`
    /// refuses to move past it.
    Eof,
}

impl fmt::Display for TokenKind {
    /// Human-readable names used in diagnostics.
    ///
    /// Keywords and operators render as the source text a user actually
    /// wrote (`'while'`, `'>='`), literal categories render as prose.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "number",
            TokenKind::StringLit => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::While => "'while'",
            TokenKind::For => "'for'",
            TokenKind::Foreach => "'foreach'",
            TokenKind::Goto => "'goto'",
            TokenKind::Label => "'label'",
            TokenKind::Let => "'let'",
            TokenKind::Var => "'var'",
            TokenKind::Int => "'int'",
            TokenKind::Print => "'print'",
            TokenKind::Input => "'input'",
            TokenKind::In => "'in'",
            TokenKind::CharType => "'char'",
            TokenKind::FloatType => "'float'",
            TokenKind::StringType => "'string'",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::OpenBrace => "'{'",
            TokenKind::CloseBrace => "'}'",
            TokenKind::Semicolon => "';'",
            TokenKind::Colon => "':'",
            TokenKind::Equals => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::PlusPlus => "'++'",
            TokenKind::MinusMinus => "'--'",
            TokenKind::Bang => "'!'",
            TokenKind::Tilde => "'~'",
            TokenKind::Greater => "'>'",
            TokenKind::GreaterEquals => "'>='",
            TokenKind::Less => "'<'",
            TokenKind::LessEquals => "'<='",
            TokenKind::EqualsEquals => "'=='",
            TokenKind::BangEquals => "'!='",
            TokenKind::Eof => "end of file",
        };
        write!(f, "{}", name)
    }
}

/// The literal payload carried by `Number`, `StringLit` and `Identifier`
/// tokens. Keyword, punctuation and operator tokens carry no value.
///
/// The untagged serde representation lets external token producers write
/// plain JSON scalars:
/// ```json
/// { "kind": "Number", "value": 42.0 }
/// { "kind": "Identifier", "value": "total" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A **single classified token**, the unit of input to the parser.
///
/// Tokens are produced either by the bundled lexer or by an external
/// producer handing the parser a pre-classified stream (for example a JSON
/// file deserialized through serde). Either way the stream must be finite
/// and end with a `TokenKind::Eof` token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The literal payload, present only for numbers, strings and
    /// identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<TokenValue>,

    /// Where the token appeared in the source. Optional in serialized
    /// streams; defaults to the unknown position.
    #[serde(default)]
    pub span: Span,
}

impl Token {
    /// A value-less token at the unknown position. Used for keywords,
    /// punctuation and operators.
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            value: None,
            span: Span::default(),
        }
    }

    /// An identifier token carrying its name.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Identifier,
            value: Some(TokenValue::Text(name.into())),
            span: Span::default(),
        }
    }

    /// A numeric literal token.
    pub fn number(value: f64) -> Self {
        Self {
            kind: TokenKind::Number,
            value: Some(TokenValue::Number(value)),
            span: Span::default(),
        }
    }

    /// A string literal token.
    pub fn string(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::StringLit,
            value: Some(TokenValue::Text(text.into())),
            span: Span::default(),
        }
    }

    /// The end-of-stream sentinel.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof)
    }

    /// Attaches a source position (builder-style).
    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The textual payload of an identifier or string token.
    ///
    /// Returns the empty string when no textual value is present, which
    /// only happens for malformed externally supplied streams.
    pub fn text(&self) -> &str {
        match &self.value {
            Some(TokenValue::Text(s)) => s,
            _ => "",
        }
    }

    /// Renders the token the way diagnostics refer to it: the category
    /// plus the literal value when one is present.
    ///
    /// ```text
    /// identifier 'total'
    /// number 42
    /// string "hello"
    /// ')'
    /// ```
    pub fn describe(&self) -> String {
        match (&self.kind, &self.value) {
            (TokenKind::Identifier, Some(v)) => format!("identifier '{}'", v),
            (TokenKind::StringLit, Some(v)) => format!("string \"{}\"", v),
            (TokenKind::Number, Some(v)) => format!("number {}", v),
            (kind, _) => kind.to_string(),
        }
    }
}

impl fmt::Display for Token {
    /// User-facing rendering: the literal value when present, otherwise
    /// the kind name. Diagnostics care about *what the user wrote*, not
    /// the internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "{}", self.kind),
        }
    }
}
