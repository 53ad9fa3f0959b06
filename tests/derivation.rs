use evalml::{derive, get_result, interpreter::derivation::Rule};

fn derivation_of(src: &str) -> String {
    get_result(src).unwrap_or_else(|e| panic!("Judgment {src} failed: {e}")).1
}

#[test]
fn addition_nests_primitive_judgment() {
    let text = derivation_of("|- 1 + 2");
    assert_eq!(text,
               "|- 1 + 2 evalto 3 by E-Plus {\n    |- 1 evalto 1 by E-Int {};\n    |- 2 evalto 2 \
                by E-Int {};\n    1 plus 2 is 3 by B-Plus {};\n};\n");
    assert!(text.contains("E-Plus"));
    assert!(text.lines().any(|line| line.starts_with("    ") && line.contains("B-Plus")));
}

#[test]
fn variable_lookup_skips_newer_bindings() {
    assert_eq!(derivation_of("x = 1, y = 2 |- x"),
               "x = 1, y = 2 |- x evalto 1 by E-Var2 {
    x = 1 |- x evalto 1 by E-Var1 {};
};
");
    assert_eq!(derivation_of("x = 1, x = 2 |- x"),
               "x = 1, x = 2 |- x evalto 2 by E-Var1 {};\n");
}

#[test]
fn conditional_with_comparison() {
    assert_eq!(derivation_of("|- if 1 < 2 then 3 else 4"),
               "|- if 1 < 2 then 3 else 4 evalto 3 by E-IfT {
    |- 1 < 2 evalto true by E-Lt {
        |- 1 evalto 1 by E-Int {};
        |- 2 evalto 2 by E-Int {};
        1 less than 2 is true by B-Lt {};
    };
    |- 3 evalto 3 by E-Int {};
};
");
}

#[test]
fn let_extends_environment_for_body() {
    assert_eq!(derivation_of("|- let x = 1 in x"),
               "|- let x = 1 in x evalto 1 by E-Let {
    |- 1 evalto 1 by E-Int {};
    x = 1 |- x evalto 1 by E-Var1 {};
};
");
}

#[test]
fn application_of_anonymous_function() {
    assert_eq!(derivation_of("|- (fun x -> x + 1) 2"),
               "|- (fun x -> x + 1) 2 evalto 3 by E-App {
    |- fun x -> x + 1 evalto ()[fun x -> x + 1] by E-Fun {};
    |- 2 evalto 2 by E-Int {};
    x = 2 |- x + 1 evalto 3 by E-Plus {
        x = 2 |- x evalto 2 by E-Var1 {};
        x = 2 |- 1 evalto 1 by E-Int {};
        2 plus 1 is 3 by B-Plus {};
    };
};
");
}

#[test]
fn recursive_application_rebinds_function_name() {
    assert_eq!(derivation_of("|- let rec f = fun n -> n in f 5"),
               "|- let rec f = fun n -> n in f 5 evalto 5 by E-LetRec {
    f = ()[rec f = fun n -> n] |- f 5 evalto 5 by E-AppRec {
        f = ()[rec f = fun n -> n] |- f evalto ()[rec f = fun n -> n] by E-Var1 {};
        f = ()[rec f = fun n -> n] |- 5 evalto 5 by E-Int {};
        f = ()[rec f = fun n -> n], n = 5 |- n evalto 5 by E-Var1 {};
    };
};
");
}

#[test]
fn recursive_closure_captures_defining_environment() {
    let text = derivation_of("k = 7 |- let rec f = fun n -> k in f 0");
    assert!(text.contains("k = 7, f = (k = 7)[rec f = fun n -> k] |- f 0 evalto 7 by E-AppRec {"));
    assert!(text.contains("k = 7, f = (k = 7)[rec f = fun n -> k], n = 0 |- k evalto 7 by E-Var2 {"));
}

#[test]
fn evaluation_is_deterministic() {
    let src = "|- let rec fact = fun n -> if n < 1 then 1 else n * fact (n - 1) in fact 3";
    assert_eq!(get_result(src).unwrap(), get_result(src).unwrap());
}

#[test]
fn every_line_is_terminated_and_indented_in_steps_of_four() {
    let text = derivation_of("|- let rec fact = fun n -> if n < 1 then 1 else n * fact (n - 1) in fact 3");
    assert!(text.ends_with("};\n"));
    for line in text.lines() {
        let indent = line.len() - line.trim_start().len();
        assert_eq!(indent % 4, 0, "bad indentation: {line:?}");
        assert!(line.ends_with('{') || line.ends_with(';'), "bad line end: {line:?}");
    }
    assert!(text.contains("by E-AppRec {"));
    assert!(text.contains("3 times 2 is 6 by B-Times {};"));
}

#[test]
fn steps_count_evaluation_rules() {
    let evaluation = derive("|- if 1 < 2 then 3 else 4").unwrap();
    assert_eq!(evaluation.steps, 5);
    assert_eq!(evaluation.derivation.size(), 6);
    assert_eq!(evaluation.derivation.rule, Rule::EIfT);
    assert_eq!(evaluation.derivation.value(), Some(&evaluation.value));
}
