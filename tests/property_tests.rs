//! Property-based tests covering the guarantees shared by every notation.

use coordsparser::{gps, parse_d, parse_hd, parse_hdm, parse_hdms};
use proptest::prelude::*;

fn sign(letter: &str) -> f64 {
    match letter {
        "S" | "s" | "W" | "w" => -1.,
        _ => 1.,
    }
}

proptest! {
    #[test]
    fn prop_decimal_roundtrip(lat in -90.0..=90.0f64, lng in -180.0..=180.0f64) {
        let c = parse_d(&format!("{}, {}", lat, lng)).unwrap();
        prop_assert_eq!((c.latitude(), c.longitude()), (lat, lng));
    }

    #[test]
    fn prop_decimal_whitespace_and_separators(
        lat in -90.0..=90.0f64,
        lng in -180.0..=180.0f64,
        before in "[ \t\x0c]{0,4}",
        sep in prop_oneof!["[ \t\x0c]{1,4}", "[ \t\x0c]{0,3}[,:;][ \t\x0c]{0,3}"],
        after in "[ \t\r\n\x0c]{0,4}",
    ) {
        let c = parse_d(&format!("{}{}{}{}{}", before, lat, sep, lng, after)).unwrap();
        prop_assert_eq!((c.latitude(), c.longitude()), (lat, lng));
    }

    #[test]
    fn prop_decimal_out_of_range(lat in 90.001..1000.0f64, lng in 180.001..1000.0f64) {
        let (s1, s2, s3, s4) = (format!("{} 0", lat), format!("-{} 0", lat), format!("0 {}", lng), format!("0 -{}", lng));
        prop_assert!(parse_d(&s1).unwrap_err().is_range_error());
        prop_assert!(parse_d(&s2).unwrap_err().is_range_error());
        prop_assert!(parse_d(&s3).unwrap_err().is_range_error());
        prop_assert!(parse_d(&s4).unwrap_err().is_range_error());
    }

    #[test]
    fn prop_decimal_rejects_other_separators(sep in "[#/|_=&*!]") {
        let input = format!("42.0{}23.123", sep);
        prop_assert!(parse_d(&input).unwrap_err().is_grammar_mismatch());
    }

    #[test]
    fn prop_hemisphere_sign(
        lat in 0.0..=90.0f64,
        lng in 0.0..=180.0f64,
        ns in "[NnSs]",
        ew in "[EeWw]",
    ) {
        let c = parse_hd(&format!("{} {} {} {}", ns, lat, ew, lng)).unwrap();
        prop_assert_eq!(c.latitude(), sign(&ns) * lat);
        prop_assert_eq!(c.longitude(), sign(&ew) * lng);

        let upper = parse_hd(&format!(
            "{} {} {} {}",
            ns.to_uppercase(),
            lat,
            ew.to_uppercase(),
            lng
        ))
        .unwrap();
        prop_assert_eq!(upper, c);
    }

    #[test]
    fn prop_minutes_below_sixty(deg in 0u32..90, min in 0.0..60.0f64) {
        let c = parse_hdm(&format!("N {} {} E {} {}", deg, min, deg, min)).unwrap();
        let expected = gps::degrees_to_decimal(deg as f64, min, 0.);
        prop_assert_eq!((c.latitude(), c.longitude()), (expected, expected));
    }

    #[test]
    fn prop_minutes_sixty_or_more(deg in 0u32..90, min in 60.0..1000.0f64) {
        let err = parse_hdm(&format!("N {} {} E 0 0", deg, min)).unwrap_err();
        prop_assert!(err.is_grammar_mismatch());
        let err = parse_hdm(&format!("N 0 0 E {} {}", deg, min)).unwrap_err();
        prop_assert!(err.is_grammar_mismatch());
    }

    #[test]
    fn prop_minutes_seconds_below_sixty(deg in 0u32..90, min in 0u32..60, sec in 0.0..60.0f64) {
        let c = parse_hdms(&format!(
            "S {} {} {} W {} {} {}",
            deg, min, sec, deg, min, sec
        ))
        .unwrap();
        let expected = -gps::degrees_to_decimal(deg as f64, min as f64, sec);
        prop_assert_eq!((c.latitude(), c.longitude()), (expected, expected));
    }

    #[test]
    fn prop_minutes_seconds_sixty_or_more(min in 60u32..1000, sec in 60.0..1000.0f64) {
        let err = parse_hdms(&format!("N 1 {} 0 E 0 0 0", min)).unwrap_err();
        prop_assert!(err.is_grammar_mismatch());
        let err = parse_hdms(&format!("N 1 0 {} E 0 0 0", sec)).unwrap_err();
        prop_assert!(err.is_grammar_mismatch());
    }
}
