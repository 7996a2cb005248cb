use punchsheet::core::normalizer::{normalize, try_normalize};
use punchsheet::errors::AppError;

#[test]
fn test_accepts_formatted_times() {
    assert_eq!(normalize("08:30").map(|t| t.to_string()), Some("08:30".into()));
    assert_eq!(normalize("8:05").map(|t| t.to_string()), Some("08:05".into()));
    assert_eq!(normalize(" 23:59 ").map(|t| t.to_string()), Some("23:59".into()));
}

#[test]
fn test_accepts_compact_times() {
    assert_eq!(normalize("830").map(|t| t.to_string()), Some("08:30".into()));
    assert_eq!(normalize("1730").map(|t| t.to_string()), Some("17:30".into()));
}

#[test]
fn test_absent_markers_are_not_errors() {
    for raw in ["", "nan", "NaN", "00:00", "0:00", "0000", "000", "   "] {
        assert!(matches!(try_normalize(raw), Ok(None)), "{raw:?}");
    }
}

#[test]
fn test_out_of_range_is_rejected() {
    assert!(matches!(try_normalize("24:00"), Err(AppError::InvalidTime(_))));
    assert!(matches!(try_normalize("12:60"), Err(AppError::InvalidTime(_))));
    assert!(matches!(try_normalize("2575"), Err(AppError::InvalidTime(_))));
    assert!(matches!(try_normalize("abc"), Err(AppError::InvalidTime(_))));
    assert_eq!(normalize("24:00"), None);
    assert_eq!(normalize("8h30"), None);
}
