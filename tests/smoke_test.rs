/// Smoke tests to verify the binary runs without panicking
use std::process::Command;

#[test]
fn binary_shows_help() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("tutorterm"),
        "Help output should mention tutorterm"
    );
}

#[test]
fn binary_shows_version() {
    let output = Command::new("cargo")
        .args(["run", "--", "--version"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn invalid_subcommand_fails_gracefully() {
    let output = Command::new("cargo")
        .args(["run", "--", "nonexistent-command"])
        .output()
        .expect("Failed to execute cargo run");

    // Should fail with error, not panic
    assert!(
        !output.status.success(),
        "Invalid subcommand should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("panicked at"),
        "Invalid subcommand should not cause panic"
    );
}

#[test]
fn booking_requires_its_flags() {
    let output = Command::new("cargo")
        .args(["run", "--", "book", "--name", "Ada"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        !output.status.success(),
        "Missing required flags should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked at"));
    assert!(
        stderr.contains("--email"),
        "clap should name the missing flags"
    );
}

#[test]
fn empty_referral_fields_are_reported_inline() {
    let output = Command::new("cargo")
        .args([
            "run", "--", "refer", "--referrer", "", "--referred", "Howard", "--contact", "",
        ])
        .output()
        .expect("Failed to execute cargo run");

    assert!(
        !output.status.success(),
        "Invalid referral should exit non-zero"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Your name: This field is required."));
    assert!(stderr.contains("Contact details: This field is required."));
}
