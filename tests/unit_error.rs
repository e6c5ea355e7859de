use std::path::PathBuf;

use taskdash::error::{exit_codes, Error, JsonError};

#[test]
fn exit_codes_map_correctly() {
    let user = Error::InvalidConfig("store.seed_text cannot be empty".to_string());
    assert_eq!(user.exit_code(), exit_codes::USER_ERROR);

    let user = Error::ConfigNotFound(PathBuf::from("/tmp/missing.toml"));
    assert_eq!(user.exit_code(), exit_codes::USER_ERROR);

    let user = Error::NoDataDir;
    assert_eq!(user.exit_code(), exit_codes::USER_ERROR);

    let op = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
    assert_eq!(op.exit_code(), exit_codes::OPERATION_FAILED);
}

#[test]
fn json_error_includes_code() {
    let err = Error::ConfigNotFound(PathBuf::from("/tmp/missing.toml"));
    let json = JsonError::from(&err);
    assert_eq!(json.code, exit_codes::USER_ERROR);
    assert!(json.error.contains("Config file not found"));
}
