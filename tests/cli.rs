//! End-to-end runs of the `genpass` binary.

use std::process::{Command, Output};

const SYMBOLS: &str = "#?!@$ %^&*-";

fn genpass(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_genpass"))
        .args(args)
        .output()
        .expect("failed to run genpass")
}

/// Stdout of a successful run, without the trailing newline.
fn password(args: &[&str]) -> String {
    let out = genpass(args);
    assert!(
        out.status.success(),
        "genpass {:?} failed: {}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.ends_with('\n'));
    stdout.trim_end_matches('\n').to_string()
}

fn assert_fails(args: &[&str], code: i32, message: &str) {
    let out = genpass(args);
    assert_eq!(out.status.code(), Some(code), "args: {args:?}");
    assert!(out.stdout.is_empty(), "no output expected on failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains(message), "stderr was: {stderr}");
}

#[test]
fn letters_and_digits_default_length() {
    for _ in 0..20 {
        let pass = password(&["-l", "16", "-a", "-n"]);
        assert_eq!(pass.len(), 16);
        assert!(pass.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(pass.chars().any(|c| c.is_ascii_lowercase()));
        assert!(pass.chars().any(|c| c.is_ascii_uppercase()));
        assert!(pass.chars().any(|c| c.is_ascii_digit()));
    }
}

#[test]
fn length_defaults_to_sixteen() {
    assert_eq!(password(&["-a"]).len(), 16);
}

#[test]
fn letters_without_vowels() {
    for _ in 0..20 {
        let pass = password(&["-l", "8", "-a", "-d", "aeiouAEIOU"]);
        assert_eq!(pass.len(), 8);
        assert!(pass.chars().all(|c| c.is_ascii_alphabetic()));
        assert!(!pass.chars().any(|c| "aeiouAEIOU".contains(c)));
        assert!(pass.chars().any(|c| c.is_ascii_lowercase()));
        assert!(pass.chars().any(|c| c.is_ascii_uppercase()));
    }
}

#[test]
fn every_class() {
    for _ in 0..20 {
        let pass = password(&["-l", "20", "-a", "-n", "-s"]);
        assert_eq!(pass.len(), 20);
        assert!(pass.chars().any(|c| c.is_ascii_lowercase()));
        assert!(pass.chars().any(|c| c.is_ascii_uppercase()));
        assert!(pass.chars().any(|c| c.is_ascii_digit()));
        assert!(pass.chars().any(|c| SYMBOLS.contains(c)));
    }
}

#[test]
fn symbols_only_respects_partial_deny() {
    let pass = password(&["-l", "12", "-s", "-d", "# -"]);
    assert_eq!(pass.len(), 12);
    assert!(pass.chars().all(|c| "?!@$%^&*".contains(c)));
}

#[test]
fn no_classes_fails() {
    assert_fails(&["-l", "5"], 1, "no character classes enabled");
}

#[test]
fn all_symbols_denied_fails() {
    assert_fails(
        &["-l", "10", "-s", "-d", SYMBOLS],
        1,
        "every symbol character is denied",
    );
}

#[test]
fn non_positive_length_fails() {
    assert_fails(&["-l", "0", "-a"], 1, "must be a positive integer");
    assert_fails(&["-l", "-4", "-a"], 1, "must be a positive integer");
}

#[test]
fn huge_length_fails_cleanly() {
    assert_fails(
        &["-l", "9223372036854775807", "-a"],
        1,
        "length 9223372036854775807 is too large to allocate",
    );
}

#[test]
fn too_short_for_classes_fails() {
    assert_fails(&["-l", "2", "-a", "-n"], 1, "cannot fit one character");
}

#[test]
fn usage_errors() {
    assert_fails(&["-x"], 2, "unknown argument: -x");
    assert_fails(&["-a", "-l"], 2, "flag -l needs a value");
    assert_fails(&["-l", "many"], 2, "invalid number for -l");
}

#[test]
fn seed_reproduces_password() {
    let args = ["-l", "24", "-a", "-n", "-s", "--seed", "99"];
    assert_eq!(password(&args), password(&args));
}

#[test]
fn help_and_version() {
    let help = genpass(&["--help"]);
    assert!(help.status.success());
    assert!(String::from_utf8_lossy(&help.stdout).contains("USAGE:"));

    let version = genpass(&["-v"]);
    assert!(version.status.success());
    assert_eq!(
        String::from_utf8_lossy(&version.stdout),
        format!("genpass {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn verbose_logs_to_stderr_only() {
    let out = genpass(&["-a", "-n", "--verbose", "--seed", "7"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert_eq!(stdout.trim_end().len(), 16);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("candidate accepted"));
}
