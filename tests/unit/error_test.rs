//! Tests for error types

use attack_orchestrator::core::SchedulerError;

#[test]
fn test_invalid_time_error() {
    let err = SchedulerError::InvalidTime(-1.5);
    assert_eq!(format!("{}", err), "invalid time: -1.5");
}

#[test]
fn test_config_error() {
    let err = SchedulerError::Config("bad field".to_string());
    assert_eq!(format!("{}", err), "config error: bad field");
}

#[test]
fn test_plane_store_error() {
    let err = SchedulerError::PlaneStore("truncated".to_string());
    assert_eq!(format!("{}", err), "plane store error: truncated");
}

#[test]
fn test_io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: SchedulerError = io.into();
    assert_eq!(format!("{}", err), "io error: missing");
}
