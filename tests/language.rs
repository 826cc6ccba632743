use std::{fs, io::Cursor};

use tauscript::{
    error::{ParseError, RuntimeError},
    interpreter::lexer::{scan, tokenize, TokenKind},
    run_script_with_io,
};
use walkdir::WalkDir;

fn run_with_input(source: &str, input: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    run_script_with_io(source, Cursor::new(input), &mut output)?;
    Ok(String::from_utf8(output).expect("script output was not UTF-8"))
}

fn assert_output(source: &str, expected: &str) {
    match run_with_input(source, "") {
        Ok(output) => assert_eq!(output, expected, "unexpected output for {source:?}"),
        Err(e) => panic!("Script {source:?} failed: {e}"),
    }
}

fn runtime_error(source: &str) -> RuntimeError {
    let error = run_with_input(source, "").expect_err("script succeeded but was expected to fail");
    *error.downcast::<RuntimeError>().expect("expected a runtime error")
}

fn parse_error(source: &str) -> ParseError {
    let error = run_with_input(source, "").expect_err("script succeeded but was expected to fail");
    *error.downcast::<ParseError>().expect("expected a parse error")
}

#[test]
fn assign_then_read() {
    assert_output("#a=5; stdout #a;", "5");
    assert_output("#a = 5; #b = #a; stdout #b;", "5");
}

#[test]
fn chains_are_flat_and_left_associative() {
    // No precedence: (2+3)*4, not 2+(3*4).
    assert_output("stdout 2+3*4;", "20");
    assert_output("stdout 10-2-3;", "5");
    assert_output("stdout 2+3*4==20;", "true");
    assert_output("stdout (2)+((3)*(4));", "14");
}

#[test]
fn string_literals_are_unwrapped() {
    assert_output(r#"stdout "hi";"#, "hi");
    assert_output(r#"stdout "";"#, "");
}

#[test]
fn string_concatenation() {
    assert_output(r#"stdout "foo"+"bar";"#, "foobar");
    assert_output(r#"#a="x"; stdout #a+#a;"#, "xx");
}

#[test]
fn undefined_variable_fails() {
    match runtime_error("stdout #x;") {
        RuntimeError::UndefinedVariable { name, .. } => assert_eq!(name, "#x"),
        other => panic!("expected UndefinedVariable, got: {other}"),
    }
}

#[test]
fn undefined_variable_produces_no_output() {
    let mut output = Vec::new();
    let result = run_script_with_io("stdout #x;", Cursor::new(""), &mut output);

    assert!(result.is_err());
    assert!(output.is_empty());
}

#[test]
fn comments_and_whitespace_are_transparent() {
    assert_output("%note% #a=1;stdout#a;", "1");
    assert_output("#a=1; stdout #a;", "1");
    assert_output("#a\t=\n1; %x% stdout %y% #a;", "1");
}

#[test]
fn stdin_round_trip() {
    let output = run_with_input("stdin #a; stdout #a;", "42\n").unwrap();
    assert_eq!(output, "42");

    // A missing trailing newline is tolerated.
    let output = run_with_input("stdin #a; stdout #a;", "42").unwrap();
    assert_eq!(output, "42");
}

#[test]
fn stdin_stores_strings_not_numbers() {
    let output = run_with_input("stdin #a; stdout #a==42;", "42\n").unwrap();
    assert_eq!(output, "false");

    let output = run_with_input(r#"stdin #a; stdout #a=="42";"#, "42\n").unwrap();
    assert_eq!(output, "true");
}

#[test]
fn stdin_at_end_of_input_reads_empty() {
    let output = run_with_input(r#"stdin #a; stdout "["+#a+"]";"#, "").unwrap();
    assert_eq!(output, "[]");
}

#[test]
fn comparison_chains_are_flat() {
    // (1<2) is a boolean, and booleans never equal integers.
    assert_output("stdout (1<2)==1;", "false");
    assert_output("stdout (1<2)==(0<1);", "true");
    assert_output("stdout 1<2==(0<1);", "true");
}

#[test]
fn string_ordering_is_lexicographic() {
    assert_output(r#"stdout "abc"<"abd";"#, "true");
    assert_output(r#"stdout "b">="ba";"#, "false");
}

#[test]
fn division() {
    assert_output("stdout 7/2;", "3");

    match runtime_error("stdout 1/0;") {
        RuntimeError::ArithmeticFault { .. } => {},
        other => panic!("expected ArithmeticFault, got: {other}"),
    }
}

#[test]
fn exponentiation() {
    assert_output("stdout 2^10;", "1024");

    match runtime_error("stdout 2^(0-1);") {
        RuntimeError::ArithmeticFault { .. } => {},
        other => panic!("expected ArithmeticFault, got: {other}"),
    }
}

#[test]
fn arithmetic_overflow_faults() {
    match runtime_error("stdout 9223372036854775807+1;") {
        RuntimeError::ArithmeticFault { .. } => {},
        other => panic!("expected ArithmeticFault, got: {other}"),
    }

    match runtime_error("stdout 99999999999999999999;") {
        RuntimeError::ArithmeticFault { .. } => {},
        other => panic!("expected ArithmeticFault, got: {other}"),
    }
}

#[test]
fn mixed_type_operands_fail() {
    match runtime_error(r#"stdout 1+"a";"#) {
        RuntimeError::TypeMismatch { operator, left, right, .. } => {
            assert_eq!(operator, "+");
            assert_eq!(left, "integer");
            assert_eq!(right, "string");
        },
        other => panic!("expected TypeMismatch, got: {other}"),
    }

    match runtime_error(r#"stdout 1<"a";"#) {
        RuntimeError::TypeMismatch { .. } => {},
        other => panic!("expected TypeMismatch, got: {other}"),
    }
}

#[test]
fn round_trip_tokenization() {
    let source = "%note% #a = 5;\nstdout #a;";
    let rebuilt: String = scan(source).unwrap()
                                      .iter()
                                      .map(|token| token.text.as_str())
                                      .collect();

    assert_eq!(rebuilt, source);
}

#[test]
fn multi_character_operators_lex_whole() {
    let kinds: Vec<TokenKind> = tokenize("= == > >= < <=").unwrap()
                                                          .iter()
                                                          .map(|token| token.kind)
                                                          .collect();

    assert_eq!(kinds,
               vec![TokenKind::Equals,
                    TokenKind::EqualEqual,
                    TokenKind::Greater,
                    TokenKind::GreaterEqual,
                    TokenKind::Less,
                    TokenKind::LessEqual]);
}

#[test]
fn unexpected_character_carries_offset() {
    match parse_error("stdout $;") {
        ParseError::UnexpectedCharacter { offset } => assert_eq!(offset, 7),
        other => panic!("expected UnexpectedCharacter, got: {other}"),
    }
}

#[test]
fn missing_semicolon_is_a_parse_error() {
    match parse_error("stdout 1") {
        ParseError::ExpectedToken { expected, .. } => assert_eq!(expected, ";"),
        other => panic!("expected ExpectedToken, got: {other}"),
    }
}

#[test]
fn assignment_requires_the_assign_operator() {
    match parse_error("#a 5;") {
        ParseError::ExpectedToken { expected, .. } => assert_eq!(expected, "="),
        other => panic!("expected ExpectedToken, got: {other}"),
    }
}

#[test]
fn stdout_requires_an_operand() {
    match parse_error("stdout ;") {
        ParseError::UnexpectedToken { token, .. } => assert_eq!(token, ";"),
        other => panic!("expected UnexpectedToken, got: {other}"),
    }
}

#[test]
fn loops_parse_but_never_execute() {
    assert_output("loop(#i;(#i)<(5)){}; stdout 1;", "1");
    assert_output("loop(#i;(#i)<(5)){#x=7; stdout #x;}; stdout 2;", "2");

    // Body statements are consumed, not evaluated: they bind nothing.
    match runtime_error("loop(#i;(#i)<(5)){#x=7;}; stdout #x;") {
        RuntimeError::UndefinedVariable { name, .. } => assert_eq!(name, "#x"),
        other => panic!("expected UndefinedVariable, got: {other}"),
    }
}

#[test]
fn loop_header_is_still_validated() {
    match parse_error("loop(#i (#i)<(5)){};") {
        ParseError::ExpectedToken { expected, .. } => assert_eq!(expected, ";"),
        other => panic!("expected ExpectedToken, got: {other}"),
    }

    match parse_error("loop(#i;(#i)<(5)){ #x=1;") {
        ParseError::ExpectedToken { expected, .. } => assert_eq!(expected, "}"),
        other => panic!("expected ExpectedToken, got: {other}"),
    }
}

#[test]
fn statements_run_in_source_order() {
    assert_output("#a=1; #a=#a+1; stdout #a; #a=0; stdout #a;", "20");
}

#[test]
fn cyrillic_variable_names() {
    assert_output("#имя=3; stdout #имя;", "3");
}

#[test]
fn demo_scripts_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "tau"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut output = Vec::new();
        if let Err(e) = run_script_with_io(&source, Cursor::new(""), &mut output) {
            panic!("Demo script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
