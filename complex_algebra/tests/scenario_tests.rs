//! Fixture-driven scenarios from `tests/fixtures/scenarios.toml`

mod common;

use complex_algebra::prelude::*;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct Manifest {
    scenarios: Vec<Scenario>,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    op: String,
    lhs: Operand,
    rhs: Operand,
    expected: Number,
}

fn load_manifest() -> Manifest {
    toml::from_str(include_str!("fixtures/scenarios.toml")).expect("invalid scenarios.toml")
}

fn parse_op(op: &str) -> BinOp {
    match op {
        "add" => BinOp::Add,
        "mul" => BinOp::Mul,
        other => panic!("unknown op {other:?} in scenarios.toml"),
    }
}

#[test]
fn test_fixture_scenarios() {
    let manifest = load_manifest();
    assert!(!manifest.scenarios.is_empty());

    for scenario in &manifest.scenarios {
        let op = parse_op(&scenario.op);
        let result = binop(op, scenario.lhs, scenario.rhs);
        assert_eq!(result, scenario.expected, "scenario {}", scenario.name);

        let swapped = binop(op, scenario.rhs, scenario.lhs);
        assert_eq!(swapped, scenario.expected, "scenario {} (swapped)", scenario.name);
    }
}

#[test]
fn test_scenario_parts() {
    let c1 = construct_complex(construct_real(5), construct_imaginary(4));
    let c2 = construct_complex(construct_real(0), construct_imaginary(7));
    let c3 = construct_complex(construct_real(3), construct_imaginary(0));

    let r1 = add(c1, c2).as_complex().expect("c1 + c2 is complex");
    assert_eq!(scalar_value(&real_part(&r1)), 5.0);
    assert_eq!(scalar_value(&imaginary_part(&r1)), 11.0);

    let r3 = add(c2, c3).as_complex().expect("c2 + c3 is complex");
    assert_eq!(scalar_value(&real_part(&r3)), 3.0);
    assert_eq!(scalar_value(&imaginary_part(&r3)), 7.0);

    let p = multiply(c2, c3);
    assert_eq!(p.kind_name(), "Imaginary");
    assert_eq!(p.real_part().value(), 0.0);
    assert_eq!(p.imaginary_part().value(), 21.0);
}

#[test]
fn test_rendered_results() {
    let c1 = common::complex(5.0, 4.0);
    let c2 = common::complex(0.0, 7.0);
    insta::assert_snapshot!(add(c1, c2).to_string(), @"5.0 + 11.0im");
    insta::assert_snapshot!(multiply(c1, c2).to_string(), @"-28.0 + 35.0im");
    insta::assert_snapshot!(multiply(common::imag(3.0), common::imag(3.0)).to_string(), @"-9.0");
}

#[test]
fn test_dynamic_operands_match_typed() {
    let typed = multiply(common::complex(5.0, 4.0), common::complex(3.0, 0.0));
    let dynamic = dynamic_multiply(
        &json!({"complex": {"real": 5, "imaginary": 4}}),
        &json!({"complex": {"real": 3, "imaginary": 0}}),
    )
    .unwrap();
    assert_eq!(typed, dynamic);
}

#[test]
fn test_invalid_operand() {
    let err = dynamic_add(&json!({"real": 1}), &json!("not a number")).unwrap_err();
    assert!(matches!(err, ArithmeticError::InvalidOperand(_)));

    let err = dynamic_binop(BinOp::Mul, &json!(true), &json!(2)).unwrap_err();
    assert!(matches!(err, ArithmeticError::InvalidOperand(_)));
}
