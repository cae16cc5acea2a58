// e2e/cli_integration.rs — CLI integration tests.
//
// Drives the `rz` binary as a black box with std::process::Command: argument
// parsing, output-name derivation, directory recursion, the overwrite
// policy, and exit codes.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Locate the `rz` binary produced by Cargo.
fn rz_bin() -> PathBuf {
    // CARGO_BIN_EXE_rz is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_rz") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("rz");
    p
}

fn rz(args: &[&str]) -> std::process::Output {
    Command::new(rz_bin())
        .args(args)
        .output()
        .expect("failed to run rz")
}

fn make_input(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ── 1. Compress / decompress roundtrip with derived names ───────────────────

#[test]
fn roundtrip_with_derived_output_names() {
    let dir = TempDir::new().unwrap();
    let input = make_input(&dir, "input.txt", "hello hello hello hello\n".repeat(64).as_bytes());
    let original = fs::read(&input).unwrap();

    let out = rz(&["compress", input.to_str().unwrap()]);
    assert!(out.status.success(), "compress should exit 0");
    let packed = dir.path().join("input.txt.rz");
    assert!(packed.exists(), "compress should create <name>.rz");

    // Decompressing would recreate input.txt, which still exists.
    fs::remove_file(&input).unwrap();
    let out = rz(&["decompress", packed.to_str().unwrap()]);
    assert!(out.status.success(), "decompress should exit 0");
    assert_eq!(fs::read(&input).unwrap(), original);
}

// ── 2. Explicit --algo and -o ────────────────────────────────────────────────

#[test]
fn explicit_algo_and_output_path() {
    let dir = TempDir::new().unwrap();
    let input = make_input(&dir, "runs.xyz", &[7u8; 600]);
    let packed = dir.path().join("runs.packed");
    let restored = dir.path().join("runs.restored");

    let out = rz(&[
        "compress",
        "--algo",
        "rle",
        "-o",
        packed.to_str().unwrap(),
        input.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    // 600 identical bytes → three RLE records.
    assert_eq!(fs::read(&packed).unwrap(), vec![7, 255, 7, 255, 7, 90]);

    let out = rz(&[
        "decompress",
        "--algo",
        "rle",
        "-o",
        restored.to_str().unwrap(),
        packed.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    assert_eq!(fs::read(&restored).unwrap(), vec![7u8; 600]);
}

// ── 3. Directory trees are walked recursively ────────────────────────────────

#[test]
fn directory_tree_is_processed_recursively() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("tree/sub")).unwrap();
    fs::write(dir.path().join("tree/a.txt"), b"alpha alpha alpha").unwrap();
    fs::write(dir.path().join("tree/sub/b.bin"), [0u8; 128]).unwrap();

    let out = rz(&["compress", dir.path().join("tree").to_str().unwrap()]);
    assert!(out.status.success());
    assert!(dir.path().join("tree/a.txt.rz").exists());
    assert!(dir.path().join("tree/sub/b.bin.rz").exists());
}

// ── 4. Overwrite policy ───────────────────────────────────────────────────────

#[test]
fn refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let input = make_input(&dir, "data.txt", b"some repeated data data data");
    let packed = dir.path().join("data.txt.rz");
    fs::write(&packed, b"pre-existing").unwrap();

    let out = rz(&["compress", input.to_str().unwrap()]);
    assert!(!out.status.success(), "should refuse to clobber");
    assert_eq!(fs::read(&packed).unwrap(), b"pre-existing");

    let out = rz(&["compress", "-f", input.to_str().unwrap()]);
    assert!(out.status.success(), "--force should overwrite");
    assert_ne!(fs::read(&packed).unwrap(), b"pre-existing");
}

// ── 5. Exit codes and bad usage ──────────────────────────────────────────────

#[test]
fn missing_file_fails_but_batch_continues() {
    let dir = TempDir::new().unwrap();
    let good = make_input(&dir, "good.txt", b"xxxxxxxxxxxxxxxx");

    let out = rz(&[
        "compress",
        good.to_str().unwrap(),
        dir.path().join("absent.txt").to_str().unwrap(),
    ]);
    assert!(!out.status.success(), "a missed file must fail the run");
    assert!(
        dir.path().join("good.txt.rz").exists(),
        "remaining files are still processed"
    );
}

#[test]
fn output_with_multiple_inputs_is_rejected() {
    let dir = TempDir::new().unwrap();
    let a = make_input(&dir, "a.txt", b"aaa");
    let b = make_input(&dir, "b.txt", b"bbb");

    let out = rz(&[
        "compress",
        "-o",
        dir.path().join("out.rz").to_str().unwrap(),
        a.to_str().unwrap(),
        b.to_str().unwrap(),
    ]);
    assert!(!out.status.success());
}

#[test]
fn unknown_algo_is_a_usage_error() {
    let out = rz(&["compress", "--algo", "huffman", "whatever.txt"]);
    assert!(!out.status.success());
}

#[test]
fn quiet_mode_silences_per_file_reporting() {
    let dir = TempDir::new().unwrap();
    let input = make_input(&dir, "q.txt", b"quiet quiet quiet quiet");

    let out = rz(&["-q", "compress", input.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(
        out.stderr.is_empty(),
        "quiet run should print nothing, got: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}
