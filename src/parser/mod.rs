/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     src/parser/mod.rs
 * Purpose:  Root module for the Sprig recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic and label reconciliation
 *   - Statement parsing and declaration bookkeeping
 *   - Expression parsing
 *   - Shared cursor helpers
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

/// Core parser orchestration:
/// - Owns the `Parser` struct and its bookkeeping
/// - Exposes the `parse(tokens)` entry points
/// - Runs end-of-program label reconciliation
pub mod parser;

/// Statement-level parsing:
/// - print / input
/// - if / else / while / for
/// - label / goto
/// - int / let / var declarations and assignment
pub mod statements;

/// Expression-level parsing:
/// - comparison → expression → term → unary → primary
pub mod expressions;

/// Shared cursor helpers:
/// - token checking
/// - strict consumption
/// - single-token advancement
pub mod helpers;

/// Re-export the public entry points so callers can use
/// `crate::parser::parse(...)`.
pub use parser::{parse, parse_with_options, Parser, ParserOptions};
