use cube_core::errors::{CubeError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("path", "/tmp/tables/t.bin")
        .with_context("reason", "example")
}

#[test]
fn facelet_error_surface() {
    let err = CubeError::Facelet(sample_info("facelet-symbol", "unknown symbol"));
    assert_eq!(err.info().code, "facelet-symbol");
    assert!(!err.is_storage_fault());
}

#[test]
fn storage_error_surface() {
    let err = CubeError::Storage(sample_info("table-open", "no such file"));
    assert_eq!(err.info().code, "table-open");
    assert!(err.info().context.contains_key("path"));
    assert!(err.is_storage_fault());
}

#[test]
fn table_error_counts_as_storage_fault() {
    let err = CubeError::Table(sample_info("table-truncated", "short payload"));
    assert!(err.is_storage_fault());
}

#[test]
fn display_includes_context_and_hint() {
    let info = ErrorInfo::new("storage-mkdir", "permission denied")
        .with_context("path", "/root/x")
        .with_hint("check directory permissions");
    let rendered = CubeError::Storage(info).to_string();
    assert_eq!(
        rendered,
        "storage error: permission denied (code: storage-mkdir) | context: [path=/root/x] | hint: check directory permissions"
    );
}

#[test]
fn error_round_trips_through_json() {
    let err = CubeError::Config(sample_info("config-parse", "bad yaml").with_hint("fix it"));
    let json = serde_json::to_string(&err).expect("serialize");
    let decoded: CubeError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn context_can_be_added_after_construction() {
    let err = CubeError::Table(ErrorInfo::new("table-shape", "negative dimension"))
        .with_context("name", "twist_move");
    assert!(matches!(err, CubeError::Table(_)));
    assert_eq!(err.info().context.get("name").map(String::as_str), Some("twist_move"));
}
