//! Basic tests for neat-engine

use neat_engine::*;

fn column(values: &[&str]) -> Column {
    values.iter().copied().collect()
}

#[test]
fn test_engine_config_creation() {
    let config = EngineConfig::default();
    assert_eq!(config.parallel_threshold, 10_000);

    let sequential = EngineConfig::sequential();
    assert_eq!(sequential.threads, Some(1));
    assert_eq!(sequential.execution_mode, ExecutionMode::Sequential);
}

#[test]
fn test_hello_world_examples() {
    let cleaner = Cleaner::new().unwrap();

    let config = FilterConfig::builder().keep(["o"]).keep_num(1).build().unwrap();
    let output = cleaner.to_text(&column(&["Hello, 123!"]), &config).unwrap();
    assert_eq!(output.values, vec!["Hello 1"]);

    let config = FilterConfig::builder()
        .remove_punctuation(false)
        .build()
        .unwrap();
    let output = cleaner.to_text(&column(&["World456"]), &config).unwrap();
    assert_eq!(output.values, vec!["World"]);

    let output = cleaner
        .to_text(&column(&[""]), &FilterConfig::default())
        .unwrap();
    assert_eq!(output.values, vec![""]);
}

#[test]
fn test_negative_keep_num_fails_fast() {
    let config = FilterConfig {
        remove_punctuation: false,
        keep_num: -1,
        ..Default::default()
    };
    let err = Cleaner::new()
        .unwrap()
        .to_text(&column(&["x"]), &config)
        .unwrap_err();

    match err {
        EngineError::Core(CoreError::InvalidConfiguration { field, .. }) => {
            assert_eq!(field, "keep_num")
        }
        other => panic!("Expected InvalidConfiguration, got {other:?}"),
    }
}

#[test]
fn test_non_string_element_names_position() {
    let column = Column::new(vec![Cell::from("a"), Cell::from("b"), Cell::Float(1.5)]);
    let err = Cleaner::new()
        .unwrap()
        .to_text(&column, &FilterConfig::default())
        .unwrap_err();

    assert_eq!(err.position(), Some(2));
    assert!(err.to_string().contains("float"));
}

#[test]
fn test_null_element_is_rejected() {
    let column = Column::from(vec![Some("a"), None]);
    let err = Cleaner::new().unwrap().to_special_chars(&column).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidElementType {
            position: 1,
            found: "null"
        }
    ));
}

#[test]
fn test_empty_column() {
    let cleaner = Cleaner::new().unwrap();
    let output = cleaner
        .to_text(&Column::default(), &FilterConfig::default())
        .unwrap();
    assert!(output.values.is_empty());
    assert_eq!(output.metadata.elements, 0);
}

#[test]
fn test_to_integer_sample_column() {
    let output = Cleaner::new()
        .unwrap()
        .to_integer(&column(&["123.45", "456.78", "789.0"]), None)
        .unwrap();
    assert_eq!(output.values, vec![12345, 45678, 7890]);
}

#[test]
fn test_to_special_chars_sample_column() {
    let output = Cleaner::new()
        .unwrap()
        .to_special_chars(&column(&["Hello123", "World456", "Python#"]))
        .unwrap();
    assert_eq!(output.values, vec!["", "", "#"]);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_column_round_trip_through_cleaner() {
    let column = Column::from_json(r#"["a-1", "b.2"]"#).unwrap();
    let output = Cleaner::new()
        .unwrap()
        .to_text(&column, &FilterConfig::default())
        .unwrap();
    assert_eq!(output.values, vec!["a", "b"]);
}
