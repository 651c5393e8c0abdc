use std::process::Command;

const SFX: &str = env!("CARGO_BIN_EXE_sfx");

fn payload_embedded() -> bool {
    option_env!("SFX_PAYLOAD_DIR").is_some()
}

#[test]
fn test_missing_payload_exits_with_error() {
    if payload_embedded() {
        return;
    }
    let dir = tempfile::Builder::new()
        .prefix("sfx-test-bin-")
        .tempdir()
        .unwrap();
    let dest = dir.path().join("dest");

    let output = Command::new(SFX)
        .arg("--no-shortcut")
        .arg(&dest)
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("ERROR: Install failed"), "stdout: {stdout}");
    assert!(stdout.contains(".zip"));
    assert!(!dest.exists());
}

#[test]
fn test_go_style_flags_are_accepted() {
    if payload_embedded() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(SFX)
        .args(["-no-shortcut", "-console=false", "."])
        .current_dir(dir.path())
        .output()
        .unwrap();

    // Parsing succeeded; failure comes from the empty payload table.
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("ERROR: Install failed"));
}

#[test]
fn test_version_flag() {
    let output = Command::new(SFX).arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let output = Command::new(SFX).arg("--bogus").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}
