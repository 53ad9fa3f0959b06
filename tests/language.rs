use std::fs;

use evalml::{
    derive, derive_with_limit,
    error::{DecodeError, Error, ParseError, RuntimeError},
    get_result,
    interpreter::{
        evaluator::core::DEFAULT_MAX_DEPTH,
        lexer::{Token, Tokenizer},
        parser::core::MAX_NESTING,
    },
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```evalml") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: &str) {
    match get_result(src) {
        Ok((value, _)) => assert_eq!(value, expected, "wrong value for {src}"),
        Err(e) => panic!("Judgment {src} failed: {e}"),
    }
}

fn error_of(src: &str) -> Error {
    match derive(src) {
        Ok(evaluation) => panic!("{src} succeeded with {} but was expected to fail",
                                 evaluation.value),
        Err(e) => e,
    }
}

#[test]
fn literals_evaluate_to_themselves() {
    assert_value("|- 42", "42");
    assert_value("|- true", "true");
    assert_value("|- false", "false");
}

#[test]
fn shadowing_picks_most_recent_binding() {
    assert_value("x = 1, x = 2 |- x", "2");
    assert_value("x = 1, y = 2 |- x", "1");
    assert_value("x = 1 |- let x = 5 in x", "5");
}

#[test]
fn subtraction_is_left_associative() {
    assert_value("|- 1 - 2 - 3", "-4");
    assert_value("|- 10 - 2 + 3", "11");
}

#[test]
fn precedence_of_operators() {
    assert_value("|- 1 + 2 * 3", "7");
    assert_value("|- 2 * 3 + 1", "7");
    assert_value("|- (1 + 2) * 3", "9");
    assert_value("|- 1 < 2 + 3", "true");
    assert_value("|- 1 + 2 < 2 * 2", "true");
    assert_value("|- let f = fun x -> x + 1 in f 2 * 3", "9");
}

#[test]
fn comparison_is_loosest_for_application_operands() {
    assert_value("|- let f = fun x -> x in f 1 < f 2", "true");
    assert_value("|- let f = fun x -> x * 10 in f 3 < f 2 + 11", "true");
}

#[test]
fn conditionals_take_one_branch() {
    assert_value("|- if 1 < 2 then 3 else 4", "3");
    assert_value("|- if 2 < 1 then 3 else 4", "4");
    assert_value("|- if true then 1 else z", "1");
}

#[test]
fn closures_capture_defining_environment() {
    assert_value("x = 1 |- let f = fun y -> x in let x = 2 in f 99", "1");
}

#[test]
fn curried_functions() {
    assert_value("|- let twice = fun f -> fun x -> f (f x) in twice (fun x -> x * x) 2",
                 "16");
    assert_value("|- let add = fun x -> fun y -> x + y in add 3 4", "7");
}

#[test]
fn recursion() {
    let fact = "let rec fact = fun n -> if n < 1 then 1 else n * fact (n - 1) in";
    assert_value(&format!("|- {fact} fact 3"), "6");
    assert_value(&format!("|- {fact} fact 10"), "3628800");
    assert_value("|- let rec fib = fun n -> if n < 2 then n else fib (n - 1) + fib (n - 2) in fib 10",
                 "55");
}

#[test]
fn functions_are_values() {
    assert_value("|- fun x -> x", "()[fun x -> x]");
    assert_value("y = 3 |- fun x -> x + y", "(y = 3)[fun x -> x + y]");
    assert_value("|- let rec f = fun x -> f x in f",
                 "()[rec f = fun x -> f x]");
}

#[test]
fn closure_values_in_the_input_environment_can_be_applied() {
    assert_value("f = (x = 10)[fun y -> x + y] |- f 5", "15");
    assert_value("f = ()[rec f = fun n -> if n < 1 then 0 else n + f (n - 1)] |- f 4", "10");
}

#[test]
fn input_without_turnstile_uses_empty_environment() {
    assert_value("let x = 3 in x * x", "9");
}

#[test]
fn newlines_are_whitespace() {
    assert_value("|- let x = 1 in\n  let y = 2 in\n  x + y", "3");
}

#[test]
fn unbound_variable_is_reported() {
    assert_eq!(error_of("|- z"),
               Error::Runtime(RuntimeError::UnboundVariable { name: "z".to_string() }));
    assert_eq!(error_of("x = 1 |- y"),
               Error::Runtime(RuntimeError::UnboundVariable { name: "y".to_string() }));
    assert_eq!(error_of("|- (fun x -> 1) z"),
               Error::Runtime(RuntimeError::UnboundVariable { name: "z".to_string() }));
}

#[test]
fn type_errors_are_reported() {
    assert_eq!(error_of("|- if 1 then 2 else 3"),
               Error::Runtime(RuntimeError::ExpectedBoolean { value: "1".to_string() }));
    assert_eq!(error_of("|- true + 1"),
               Error::Runtime(RuntimeError::ExpectedInteger { value: "true".to_string() }));
    assert_eq!(error_of("|- 1 2"),
               Error::Runtime(RuntimeError::NotAClosure { value: "1".to_string() }));
}

#[test]
fn overflow_is_reported() {
    assert!(matches!(error_of("|- 9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn lexical_errors_carry_character_and_position() {
    assert_eq!(error_of("|- x @ 1"),
               Error::Parse(ParseError::UnexpectedCharacter { character: '@',
                                                              position:  2, }));
}

#[test]
fn syntax_errors_report_expected_and_found() {
    assert_eq!(error_of("|- let x = 1"),
               Error::Parse(ParseError::UnexpectedToken { expected: "IN".to_string(),
                                                          found:    "EOF".to_string(),
                                                          position: 9, }));
    assert!(matches!(error_of("|- (1 + 2"),
                     Error::Parse(ParseError::UnexpectedToken { ref expected, .. })
                     if expected == "CLOSE_PAREN"));
    assert!(matches!(error_of("|- 1 +"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(error_of("|- let rec f = 1 in f"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(error_of("|- 1 + 2 )"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(error_of("|- 99999999999999999999"),
                     Error::Parse(ParseError::LiteralTooLarge { .. })));
}

#[test]
fn malformed_environment_is_a_decode_error() {
    assert!(matches!(error_of("x = oops |- 1"),
                     Error::Decode(DecodeError::InvalidValue { .. })));
    assert!(matches!(error_of("f = ()[fun -> x] |- 1"),
                     Error::Decode(DecodeError::MalformedClosure { .. })));
}

#[test]
fn tokenizer_keeps_returning_eof() {
    let mut tokenizer = Tokenizer::new("rec");
    assert_eq!(tokenizer.next_token().unwrap(), (Token::Rec, 0));
    assert_eq!(tokenizer.next_token().unwrap(), (Token::Eof, 3));
    assert_eq!(tokenizer.next_token().unwrap(), (Token::Eof, 3));
}

#[test]
fn tokenizer_classifies_keywords_and_booleans() {
    let mut tokenizer = Tokenizer::new("funny fun true trueish");
    let mut kinds = Vec::new();
    loop {
        let (token, _) = tokenizer.next_token().unwrap();
        if token == Token::Eof {
            break;
        }
        kinds.push(token);
    }
    assert_eq!(kinds,
               vec![Token::Identifier("funny".to_string()),
                    Token::Fun,
                    Token::Bool(true),
                    Token::Identifier("trueish".to_string())]);
}

#[test]
fn deep_recursion_stops_with_an_error() {
    let sum = "let rec sum = fun n -> if n < 1 then 0 else n + sum (n - 1) in";
    assert_value(&format!("|- {sum} sum 10"), "55");

    for n in [100, 1000, 100_000] {
        assert_eq!(error_of(&format!("|- {sum} sum {n}")),
                   Error::Runtime(RuntimeError::RecursionLimit { depth: DEFAULT_MAX_DEPTH }));
    }
}

#[test]
fn recursion_limit_can_be_chosen() {
    let src = "|- let rec sum = fun n -> if n < 1 then 0 else n + sum (n - 1) in sum 10";
    assert_eq!(derive_with_limit(src, 64).unwrap().value_text(), "55");
    assert_eq!(derive_with_limit(src, 16),
               Err(Error::Runtime(RuntimeError::RecursionLimit { depth: 16 })));
}

#[test]
fn deeply_nested_input_is_a_syntax_error() {
    let nested = |n: usize| format!("|- {}1{}", "(".repeat(n), ")".repeat(n));
    assert_value(&nested(100), "1");
    assert_eq!(error_of(&nested(3000)),
               Error::Parse(ParseError::NestingTooDeep { position: MAX_NESTING + 1 }));

    let functions = format!("|- {}a", "fun a -> ".repeat(3000));
    assert!(matches!(error_of(&functions),
                     Error::Parse(ParseError::NestingTooDeep { .. })));

    let conditionals = format!("|- {}1{}", "if true then ".repeat(3000), " else 0".repeat(3000));
    assert!(matches!(error_of(&conditionals),
                     Error::Parse(ParseError::NestingTooDeep { .. })));
}
