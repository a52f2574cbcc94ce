//! End-to-end checks through the public API, mirroring how the demo binary uses the crate.

use pretty_assertions::assert_eq;
use ratiokit::{frac, Fraction, FractionError, IntoFraction, ParsePolicy};

#[test]
fn test_constructors_agree() {
    let from_pair = Fraction::new(3, 4).unwrap();
    let from_text = Fraction::parse("30/40").unwrap();
    let from_float = Fraction::from_float(0.75).unwrap();
    let from_trait = "-3/-4".into_fraction().unwrap();

    assert_eq!(from_pair, from_text);
    assert_eq!(from_pair, from_float);
    assert_eq!(from_pair, from_trait);
    assert_eq!(Fraction::from(3).to_string(), "3/1");
}

#[test]
fn test_errors() {
    assert_eq!(Fraction::new(1, 0), Err(FractionError::DivisionByZero));
    assert_eq!(Fraction::parse(" 7 / 0 "), Err(FractionError::DivisionByZero));
    assert_eq!(
        Fraction::parse("1/2/3"),
        Err(FractionError::InvalidFormat("1/2/3".to_owned()))
    );
    assert!(matches!(
        Fraction::from_float(f64::INFINITY),
        Err(FractionError::InvalidValue(v)) if v.is_infinite()
    ));
    assert_eq!(
        FractionError::DivisionByZero.to_string(),
        "Denominator cannot be zero"
    );
}

#[test]
fn test_parse_policies() {
    assert!(Fraction::parse("12abc/4").is_err());
    assert_eq!(
        Fraction::parse_with("12abc/4", ParsePolicy::Lenient).unwrap(),
        frac!(3)
    );
    assert_eq!(
        Fraction::parse_with(" 3/4", ParsePolicy::default()).unwrap(),
        frac!(3 / 4)
    );
}

#[test]
fn test_sum_sequence() {
    let f1 = frac!(5 / 10);
    assert_eq!(f1.add_integer(2).to_string(), "5/2");
    assert_eq!(f1.try_add(2).unwrap().to_string(), "5/2");
    assert_eq!(f1.try_add(0.5).unwrap().to_string(), "1/1");

    let mut f3 = Fraction::parse("30/40").unwrap();
    let returned = f3.add_in_place("7/8").unwrap();
    assert_eq!(returned, f3);
    assert_eq!(f3.to_string(), "13/8");

    let _ = f3 + frac!(1);
    assert_eq!(f3.to_string(), "13/8");
}

#[test]
fn test_sorting_uses_value_order() {
    let mut fs = vec![frac!(9 / 10), frac!(2 / 12), frac!(-1 / 2), frac!(3 / 4), frac!(24 / 18)];
    fs.sort();
    let rendered: Vec<String> = fs.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["-1/2", "1/6", "3/4", "9/10", "4/3"]);
}
