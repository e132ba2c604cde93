//! Tests for error types

use ringneck_incubator::Error;

#[test]
fn test_index_out_of_range_error() {
    let error = Error::IndexOutOfRange { index: 7, len: 5 };
    let error_str = format!("{error}");
    assert!(error_str.contains("Index out of range"));
    assert!(error_str.contains('7'));
    assert!(error_str.contains('5'));
}

#[test]
fn test_persistence_error() {
    let error = Error::Persistence("quota exceeded".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Persistence failed"));
    assert!(error_str.contains("quota exceeded"));
    assert!(error_str.contains("kept in memory"));
}

#[test]
fn test_corrupt_state_error() {
    let error = Error::CorruptState("ringNeckEggs: expected value".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Corrupt persisted state"));
    assert!(error_str.contains("ringneck reset"));
}

#[test]
fn test_invalid_value_error() {
    let error = Error::InvalidValue {
        field: "layDate".to_string(),
        value: "ontem".to_string(),
    };
    let error_str = format!("{error}");
    assert_eq!(error_str, "Invalid value for layDate: \"ontem\"");
}

#[test]
fn test_field_errors() {
    assert_eq!(format!("{}", Error::UnknownField("cor".to_string())), "Unknown field: cor");
    assert_eq!(format!("{}", Error::ReadOnlyField("id".to_string())), "Field is read-only: id");
}

#[test]
fn test_missing_surface_error() {
    let error = Error::MissingSurface("weightChart".to_string());
    assert!(format!("{error}").contains("Render surface missing"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_error.into();
    assert!(format!("{error}").starts_with("JSON error"));
}

#[test]
fn test_error_debug() {
    let error = Error::IndexOutOfRange { index: 1, len: 0 };
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("IndexOutOfRange"));
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> ringneck_incubator::Result<i32> {
        Err(Error::Persistence("disabled".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
