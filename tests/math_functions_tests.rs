use approx::assert_relative_eq;
use dashcalc::core::functions::{
    E_LITERAL, PI_LITERAL, cos_deg, factorial, ln, log, power, sin_deg, sqrt, tan_deg,
};
use dashcalc::core::MathFunction;

#[test]
fn trigonometry_uses_degrees() {
    assert_relative_eq!(sin_deg(30.0), 0.5, epsilon = 1e-12);
    assert_relative_eq!(cos_deg(60.0), 0.5, epsilon = 1e-12);
    assert_relative_eq!(tan_deg(45.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(sin_deg(0.0), 0.0);
}

#[test]
fn logarithms_and_roots() {
    assert_relative_eq!(log(100.0), 2.0, epsilon = 1e-12);
    assert_relative_eq!(ln(std::f64::consts::E), 1.0, epsilon = 1e-12);
    assert_relative_eq!(sqrt(2.0) * sqrt(2.0), 2.0, epsilon = 1e-12);
    assert_eq!(power(2.0, -1.0), 0.5);
    assert!(sqrt(-1.0).is_nan());
    assert_eq!(log(0.0), f64::NEG_INFINITY);
}

#[test]
fn factorial_values() {
    assert_eq!(factorial(0), 1.0);
    assert_eq!(factorial(1), 1.0);
    assert_eq!(factorial(5), 120.0);
    assert_eq!(factorial(10), 3_628_800.0);
    assert_eq!(factorial(-3), 0.0);
}

#[test]
fn constant_literals_round_to_eight_decimals() {
    let pi: f64 = PI_LITERAL.parse().expect("pi literal");
    let e: f64 = E_LITERAL.parse().expect("e literal");
    assert_relative_eq!(pi, std::f64::consts::PI, epsilon = 1e-8);
    assert_relative_eq!(e, std::f64::consts::E, epsilon = 1e-8);
}

#[test]
fn domain_checks_match_real_domains() {
    assert!(MathFunction::Sqrt.accepts(0.0));
    assert!(!MathFunction::Sqrt.accepts(-0.5));
    assert!(!MathFunction::Log.accepts(0.0));
    assert!(!MathFunction::Ln.accepts(-1.0));
    assert!(MathFunction::Sin.accepts(1e9));
    assert!(!MathFunction::Cos.accepts(f64::INFINITY));
}
