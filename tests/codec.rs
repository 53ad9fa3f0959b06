use evalml::{
    derive,
    error::DecodeError,
    interpreter::{
        parser::core::MAX_NESTING,
        value::{
            codec::{decode_env, decode_value},
            core::Value,
        },
    },
};

fn value_of(src: &str) -> Value {
    derive(src).unwrap_or_else(|e| panic!("Judgment {src} failed: {e}"))
               .value
}

fn assert_round_trip(value: &Value) {
    let text = value.to_string();
    let decoded = decode_value(&text).unwrap_or_else(|e| panic!("{text} did not decode: {e}"));
    assert_eq!(&decoded, value);
    assert_eq!(decoded.to_string(), text);
}

#[test]
fn closures_round_trip() {
    let closure = value_of("x = 1 |- let y = 2 in fun z -> x + y * z");
    assert_eq!(closure.to_string(), "(x = 1, y = 2)[fun z -> x + y * z]");
    assert_round_trip(&closure);

    let nested = value_of("|- let g = fun a -> a in fun b -> g (b - 1)");
    assert_eq!(nested.to_string(), "(g = ()[fun a -> a])[fun b -> g (b - 1)]");
    assert_round_trip(&nested);

    let curried = value_of("|- (fun x -> fun y -> if x < y then (fun z -> z) else fun z -> x) 1");
    assert_eq!(curried.to_string(),
               "(x = 1)[fun y -> if x < y then fun z -> z else fun z -> x]");
    assert_round_trip(&curried);
}

#[test]
fn recursive_closures_round_trip() {
    let rec = value_of("n = -3 |- let rec f = fun n -> if n < 1 then 0 else f (n - 1) in f");
    assert_eq!(rec.to_string(),
               "(n = -3)[rec f = fun n -> if n < 1 then 0 else f (n - 1)]");
    assert_round_trip(&rec);
}

#[test]
fn environment_text_round_trips() {
    let text = "a = 1, b = true, c = (d = (e = 2)[fun x -> e])[fun y -> d y], e = -7";
    let env = decode_env(text).unwrap();
    assert_eq!(env.len(), 4);
    assert_eq!(env.to_string(), text);
    assert_eq!(env.lookup("e"), Some(&Value::Integer(-7)));
}

#[test]
fn blank_environment_is_empty() {
    assert!(decode_env("").unwrap().is_empty());
    assert!(decode_env("   ").unwrap().is_empty());
}

#[test]
fn malformed_text_is_rejected() {
    assert!(matches!(decode_env("x = (1"),
                     Err(DecodeError::UnbalancedDelimiter { .. })));
    assert!(matches!(decode_env("x 1"), Err(DecodeError::MalformedBinding { .. })));
    assert!(matches!(decode_env("1 = 2"), Err(DecodeError::MalformedBinding { .. })));
    assert!(matches!(decode_env("let = 2"), Err(DecodeError::MalformedBinding { .. })));
    assert!(matches!(decode_env("x = 1,"), Err(DecodeError::MalformedBinding { .. })));
    assert!(matches!(decode_value("foo"), Err(DecodeError::InvalidValue { .. })));
    assert!(matches!(decode_value("()"), Err(DecodeError::MalformedClosure { .. })));
    assert!(matches!(decode_value("()[fun x -> x] 1"),
                     Err(DecodeError::MalformedClosure { .. })));
    assert!(matches!(decode_value("()[rec f = fun x -> x x"),
                     Err(DecodeError::UnbalancedDelimiter { .. })));
    assert!(matches!(decode_value("()[fun x -> 1 + ]"),
                     Err(DecodeError::MalformedClosure { .. })));
}

#[test]
fn deeply_nested_closure_text_is_rejected() {
    let nested = |n: usize| {
        (0..n).fold("()[fun x -> x]".to_string(),
                    |inner, _| format!("(f = {inner})[fun x -> f x]"))
    };

    let shallow = decode_value(&nested(20)).unwrap();
    assert_eq!(shallow.to_string(), nested(20));
    assert_eq!(decode_value(&nested(3000)),
               Err(DecodeError::NestingTooDeep { depth: MAX_NESTING }));
    assert_eq!(decode_env(&format!("g = {}", nested(3000))).map(|env| env.len()),
               Err(DecodeError::NestingTooDeep { depth: MAX_NESTING }));
}
