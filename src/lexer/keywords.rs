/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     src/lexer/keywords.rs
 * Purpose:  Reserved-word classification for the lexer.
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

use crate::lexer::token::TokenKind;

/// Classifies a scanned word as a **reserved Sprig keyword**.
///
/// Used exclusively by the lexer during tokenization to distinguish
/// user-defined identifiers from language keywords. Each keyword maps
/// straight to its dedicated `TokenKind`, so the parser never has to
/// inspect lexemes.
///
/// # Returns
/// - `Some(kind)` if the word is reserved
/// - `None` if the word is an ordinary identifier
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "char" => TokenKind::CharType,
        "else" => TokenKind::Else,
        "float" => TokenKind::FloatType,
        "for" => TokenKind::For,
        "foreach" => TokenKind::Foreach,
        "goto" => TokenKind::Goto,
        "if" => TokenKind::If,
        "in" => TokenKind::In,
        "input" => TokenKind::Input,
        "int" => TokenKind::Int,
        "label" => TokenKind::Label,
        "let" => TokenKind::Let,
        "print" => TokenKind::Print,
        "string" => TokenKind::StringType,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };

    Some(kind)
}
