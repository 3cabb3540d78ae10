//! Integration tests for end-to-end parsing.
//!
//! These tests run whole programs through the public entry points, from
//! source text through tokenization and parsing to the printed listing and
//! the rendered diagnostics.

use pseudocode::{
    ast::ast::Stmt,
    errors::errors::ErrorImpl,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    render_error,
};

const PROGRAM: &str = "\
// Average of a list of marks
CONSTANT count = 5
DECLARE marks : ARRAY[1:count] OF INTEGER
DECLARE total : INTEGER
DECLARE name : STRING

INPUT name
total <- 0
marks[1] <- 72
total <- total + marks[1]
OUTPUT \"Average for \" & name & \": \", total / count
";

#[test]
fn test_parse_full_program() {
    let program = parse(PROGRAM);
    assert!(!program.has_errors(), "unexpected errors: {:?}", program.errors);

    let names: Vec<&str> = program.statements.iter().map(Stmt::name).collect();
    assert_eq!(
        names,
        vec![
            "CONSTANT",
            "DECLARE ARRAY",
            "DECLARE",
            "DECLARE",
            "INPUT",
            "ASSIGNMENT",
            "ASSIGNMENT ARRAY",
            "ASSIGNMENT",
            "OUTPUT",
        ]
    );
}

#[test]
fn test_program_listing() {
    let program = parse(PROGRAM);

    let expected = "\
[CONSTANT] CONSTANT count = 5
[DECLARE ARRAY] DECLARE marks : ARRAY[1:count] OF INTEGER
[DECLARE] DECLARE total : INTEGER
[DECLARE] DECLARE name : STRING
[INPUT] INPUT name
[ASSIGNMENT] total <- 0
[ASSIGNMENT ARRAY] marks[1] <- 72
[ASSIGNMENT] total <- (total + marks[1])
[OUTPUT] OUTPUT ((\"Average for \" & name) & \": \"), (total / count)
";
    assert_eq!(program.to_string(), expected);
}

#[test]
fn test_tokens_of_program_line() {
    let tokens = tokenize("marks[1] <- 72\n");
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::OpenBracket,
            TokenKind::Integer,
            TokenKind::CloseBracket,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::EOL,
            TokenKind::EOF,
        ]
    );
    assert!(tokens[2].is_literal);
    assert!(!tokens[0].is_literal);
}

#[test]
fn test_program_with_errors_keeps_good_statements() {
    let source = "\
DECLARE x : INTEGER
x = 5
DECLARE y : ARRAY[0:3] OF REAL
x <- \"unterminated
OUTPUT x
";
    let program = parse(source);

    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.statements[0].to_string(), "DECLARE x : INTEGER");
    assert_eq!(program.statements[1].to_string(), "OUTPUT x");

    assert_eq!(program.errors.len(), 3);
    assert!(matches!(
        program.errors[0].get_kind(),
        ErrorImpl::UnexpectedToken { .. }
    ));
    assert!(matches!(
        program.errors[1].get_kind(),
        ErrorImpl::InvalidLowerBound { .. }
    ));
    assert!(matches!(
        program.errors[2].get_kind(),
        ErrorImpl::IllegalToken { .. }
    ));

    let lines: Vec<u32> = program.errors.iter().map(|error| error.line()).collect();
    assert_eq!(lines, vec![2, 3, 4]);

    let listing = program.to_string();
    assert!(listing.contains("[ParseError] line 2, col 3; expected `<-`, got =\n"));
}

#[test]
fn test_rendered_diagnostic() {
    let source = "DECLARE x : INTEGER\n    x <- (1 + 2\n";
    let program = parse(source);
    assert_eq!(program.errors.len(), 1);

    let error = &program.errors[0];
    assert_eq!((error.line(), error.column()), (2, 16));

    let rendered = render_error(error, source, "main.pseudo");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Error: UnexpectedToken (Expected `)`, found `end of line`)");
    assert_eq!(lines[1], "-> main.pseudo:2:16");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "2 | x <- (1 + 2");
    assert_eq!(lines[4], format!("  | {}^", "-".repeat(11)));
}
