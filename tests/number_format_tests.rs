use dashcalc::core::number_format::{parse_numeric_prefix, parse_whole_number};
use dashcalc::core::{format_display, format_significant};

#[test]
fn display_uses_eight_significant_digits() {
    assert_eq!(format_display(5.0), "5");
    assert_eq!(format_display(14.0), "14");
    assert_eq!(format_display(-2.5), "-2.5");
    assert_eq!(format_display(0.1 + 0.2), "0.3");
    assert_eq!(format_display(1.0 / 3.0), "0.33333333");
    assert_eq!(format_display(3.14159265), "3.1415927");
}

#[test]
fn display_switches_to_scientific_outside_range() {
    assert_eq!(format_display(123_456_789.0), "1.2345679e+08");
    assert_eq!(format_display(12_345_678.0), "12345678");
    assert_eq!(format_display(0.0001), "0.0001");
    assert_eq!(format_display(0.00001), "1e-05");
    assert_eq!(format_display(99_999_999.5), "1e+08");
}

#[test]
fn display_spells_non_finite_values() {
    assert_eq!(format_display(0.0), "0");
    assert_eq!(format_display(f64::NAN), "nan");
    assert_eq!(format_display(f64::INFINITY), "inf");
    assert_eq!(format_display(f64::NEG_INFINITY), "-inf");
}

#[test]
fn significant_digits_are_configurable() {
    assert_eq!(format_significant(3.14159265, 3), "3.14");
    assert_eq!(format_significant(1234.0, 2), "1.2e+03");
}

#[test]
fn numeric_prefix_stops_at_first_non_numeric_byte() {
    assert_eq!(parse_numeric_prefix("12abc"), (12.0, 2));
    assert_eq!(parse_numeric_prefix("-3.5e2x"), (-350.0, 6));
    assert_eq!(parse_numeric_prefix("abc"), (0.0, 0));
    let (value, consumed) = parse_numeric_prefix("inf+1");
    assert_eq!((value, consumed), (f64::INFINITY, 3));
}

#[test]
fn whole_number_requires_full_consumption() {
    assert_eq!(parse_whole_number("2.5"), Some(2.5));
    assert_eq!(parse_whole_number(""), Some(0.0));
    assert_eq!(parse_whole_number("2+3"), None);
}
