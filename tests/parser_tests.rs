/*
 * ==========================================================================
 * SPRIG - Little Language, Sharp Checks
 * ==========================================================================
 *
 * File:     tests/parser_tests.rs
 * Purpose:  End-to-end checker behavior over lexed and externally
 *           supplied token streams.
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

use sprig::{
    parse, parse_with_options, tokenize, ErrorKind, Parser, ParserOptions, SprigError, Token,
    TokenKind,
};

/// Lex and parse a source string with default options.
fn check(source: &str) -> Result<(), SprigError> {
    parse(tokenize(source).expect("lexing should succeed"))
}

fn check_strict(source: &str) -> Result<(), SprigError> {
    let options = ParserOptions {
        strict_concatenation: true,
    };
    parse_with_options(tokenize(source).expect("lexing should succeed"), options)
}

// ----------------------------------------------------------------
// ACCEPTANCE
// ----------------------------------------------------------------

#[test]
fn accepts_declaration_then_print() {
    let tokens = tokenize("let x = 5 print(x)").expect("lexing should succeed");
    let mut parser = Parser::new(tokens);

    assert!(parser.parse().is_ok());
    assert!(parser.symbols().contains("x"));
    assert_eq!(parser.symbols().len(), 1);
}

#[test]
fn accepts_print_of_string_literal() {
    assert!(check("print(\"hello\")").is_ok());
}

#[test]
fn accepts_full_control_flow() {
    let source = r#"
        int total = 0
        while (total < 10) {
            total = total + 1
            if (total == 5) {
                print("halfway")
            } else if (total > 8) {
                print(total)
            } else {
                print("counting")
            }
        }
        for (int i = 0; i < 3; i++) {
            print(i * total)
        }
    "#;
    assert!(check(source).is_ok());
}

#[test]
fn accepts_parenthesized_and_unary_expressions() {
    assert!(check("let x = (1 + 2) * 3").is_ok());
    assert!(check("int y = 0 let z = ~1 + -2 print(++y--)").is_ok());
}

#[test]
fn for_initializer_declares_its_symbol() {
    // `i` is first declared inside the for-clause and used in the body.
    assert!(check("for (int i = 0; i < 10; i++) { print(i) }").is_ok());
}

// ----------------------------------------------------------------
// DECLARATION STRICTNESS
// ----------------------------------------------------------------

#[test]
fn int_var_and_input_declarations_are_idempotent() {
    assert!(check("int x = 1 int x = 2").is_ok());
    assert!(check("var y = 1 var y = 2").is_ok());
    assert!(check("input n input n").is_ok());
}

#[test]
fn let_redeclaration_is_rejected() {
    let err = check("let x = 1 let x = 2").expect_err("second let should fail");
    assert_eq!(err.kind, ErrorKind::DuplicateDeclaration);
    assert!(err.message.contains("'x'"));
}

#[test]
fn initializer_may_reference_the_name_it_declares() {
    // The name enters the symbol table before its initializer is parsed.
    assert!(check("int x = x + 1").is_ok());
}

// ----------------------------------------------------------------
// USE BEFORE DECLARE
// ----------------------------------------------------------------

#[test]
fn undeclared_identifier_in_expression_is_rejected() {
    let err = check("print(y)").expect_err("undeclared y should fail");
    assert_eq!(err.kind, ErrorKind::UndeclaredReference);
    assert!(err.message.contains("y"));
}

#[test]
fn declared_identifier_in_expression_is_accepted() {
    assert!(check("input y print(y)").is_ok());
}

#[test]
fn assignment_to_undeclared_name_is_rejected() {
    let err = check("x = 5").expect_err("assignment should fail");
    assert_eq!(err.kind, ErrorKind::UndeclaredReference);
}

#[test]
fn assignment_after_declaration_is_accepted() {
    assert!(check("var x = 1 x = 2").is_ok());
}

// ----------------------------------------------------------------
// LABELS
// ----------------------------------------------------------------

#[test]
fn forward_goto_is_accepted() {
    assert!(check("goto end print(\"body\") label end:").is_ok());
}

#[test]
fn goto_without_declaration_is_rejected_at_end_of_program() {
    // The goto itself parses; later statements are still reached, which
    // shows the existence check really is deferred.
    let err = check("goto missing print(\"after\")").expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::UndeclaredLabel);
    assert!(err.message.contains("missing"));
}

#[test]
fn statement_errors_take_precedence_over_reconciliation() {
    // A bad statement after the goto fails first, so reconciliation for
    // the dangling label never runs.
    let err = check("goto missing )").expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::InvalidStatement);
}

#[test]
fn duplicate_label_is_rejected_at_the_second_site() {
    let err = check("label a: print(\"x\") label a: goto nowhere").expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::DuplicateLabel);
    assert!(err.message.contains("a"));
}

#[test]
fn reconciliation_reports_a_deterministic_label() {
    // Two dangling labels: the lexicographically first one is reported.
    let err = check("goto zebra goto apple").expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::UndeclaredLabel);
    assert!(err.message.contains("apple"));
}

// ----------------------------------------------------------------
// CONDITIONS AND THE ELSE CHAIN
// ----------------------------------------------------------------

#[test]
fn condition_degrades_to_a_single_expression() {
    assert!(check("if (5) { }").is_ok());
}

#[test]
fn dangling_comparison_operator_is_rejected() {
    let err = check("if (5 >) { }").expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::UnexpectedToken);
}

#[test]
fn chained_comparisons_are_accepted() {
    assert!(check("if (1 < 2 == 3) { }").is_ok());
}

#[test]
fn second_else_after_terminal_block_is_rejected() {
    let err = check("if (1) { } else { } else { }").expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::InvalidStatement);
}

#[test]
fn else_must_be_followed_by_if_or_block() {
    let err = check("if (1) { } else print(1)").expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::UnexpectedToken);
}

// ----------------------------------------------------------------
// CONCATENATION
// ----------------------------------------------------------------

#[test]
fn concatenation_accepts_strings_numbers_and_identifiers() {
    assert!(check("let s = \"total: \" + 5 + \" units\"").is_ok());
}

#[test]
fn concatenation_skips_the_symbol_check_by_default() {
    // Deliberate asymmetry with the numeric path: `who` is undeclared
    // but legal inside a concatenation.
    assert!(check("let s = \"hello \" + who").is_ok());
}

#[test]
fn strict_concatenation_checks_identifiers() {
    let err = check_strict("let s = \"hello \" + who").expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::UndeclaredReference);

    assert!(check_strict("input who let s = \"hello \" + who").is_ok());
}

#[test]
fn malformed_concatenation_value_is_rejected() {
    let err = check("let s = \"a\" + *").expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::MalformedValue);
}

// ----------------------------------------------------------------
// STRUCTURAL ERRORS
// ----------------------------------------------------------------

#[test]
fn invalid_statement_start_is_rejected() {
    let err = check("+ 1").expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::InvalidStatement);
}

#[test]
fn reserved_keywords_without_a_production_are_rejected() {
    // `foreach`, `in` and the type keywords are lexed but no statement
    // begins with them.
    let err = check("foreach x in y { }").expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::InvalidStatement);
}

#[test]
fn missing_close_paren_is_rejected() {
    let err = check("print(5").expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::UnexpectedToken);
    assert!(err.message.contains("')'"));
}

#[test]
fn unterminated_block_reports_missing_brace() {
    let err = check("while (1) { print(2)").expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::UnexpectedToken);
    assert!(err.message.contains("'}'"));
}

// ----------------------------------------------------------------
// DETERMINISM
// ----------------------------------------------------------------

#[test]
fn repeated_parses_agree() {
    let source = "let x = 1 let x = 2";
    let first = check(source).expect_err("should fail");
    let second = check(source).expect_err("should fail");

    assert_eq!(first.kind, second.kind);
    assert_eq!(first.message, second.message);
    assert_eq!(first.span, second.span);
}

#[test]
fn fresh_parsers_share_no_state() {
    // Declaring `x` in one parse must not leak into the next.
    assert!(check("let x = 1").is_ok());
    let err = check("print(x)").expect_err("x should be unknown here");
    assert_eq!(err.kind, ErrorKind::UndeclaredReference);
}

// ----------------------------------------------------------------
// EXTERNALLY SUPPLIED TOKEN STREAMS
// ----------------------------------------------------------------

#[test]
fn parses_a_json_token_stream() {
    let json = r#"[
        { "kind": "Let" },
        { "kind": "Identifier", "value": "x" },
        { "kind": "Equals" },
        { "kind": "Number", "value": 5.0 },
        { "kind": "Print" },
        { "kind": "OpenParen" },
        { "kind": "Identifier", "value": "x" },
        { "kind": "CloseParen" },
        { "kind": "Eof" }
    ]"#;

    let tokens: Vec<Token> = serde_json::from_str(json).expect("stream should deserialize");
    assert!(parse(tokens).is_ok());
}

#[test]
fn appends_the_missing_eof_sentinel() {
    // A foreign stream without the sentinel still parses.
    let tokens = vec![
        Token::new(TokenKind::Var),
        Token::identifier("x"),
        Token::new(TokenKind::Equals),
        Token::number(1.0),
    ];
    assert!(parse(tokens).is_ok());
}

#[test]
fn hand_built_stream_matches_lexed_stream() {
    let built = vec![
        Token::new(TokenKind::Goto),
        Token::identifier("end"),
        Token::new(TokenKind::Label),
        Token::identifier("end"),
        Token::new(TokenKind::Colon),
        Token::eof(),
    ];
    let lexed = tokenize("goto end label end:").expect("lexing should succeed");

    assert!(parse(built).is_ok());
    assert!(parse(lexed).is_ok());
}
