// Integration tests for the docsort binary

use std::fs;
use std::process::Command;

fn docsort(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_docsort"))
        .args(args)
        .output()
        .expect("Failed to run docsort")
}

#[test]
fn test_version_display() {
    let output = docsort(&["--version"]);
    assert!(output.status.success(), "Version command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("docsort"), "Expected 'docsort' in version output");
}

#[test]
fn test_help_display() {
    let output = docsort(&["--help"]);
    assert!(output.status.success(), "Help command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("organize") && stdout.contains("extract"),
            "Expected organize and extract in help output");
}

#[test]
fn test_organize_empty_corpus_exits_cleanly() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let text_dir = dir.path().join("texts");
    let docx_dir = dir.path().join("docx");
    let output_dir = dir.path().join("sorted");
    fs::create_dir(&text_dir).unwrap();
    fs::create_dir(&docx_dir).unwrap();

    // only degenerate content, so zero usable documents
    fs::write(text_dir.join("scan.txt"), "a1 b2 c3").unwrap();

    let output = docsort(&[
        "organize",
        "-t", text_dir.to_str().unwrap(),
        "-x", docx_dir.to_str().unwrap(),
        "-o", output_dir.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "Empty corpus must not be an error");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No usable documents"),
            "Expected empty-corpus report, got:\n{}", stdout);
    assert!(!output_dir.exists(), "No output folders should be created");
}

#[test]
fn test_extract_reports_missing_pdfs() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let pdf_dir = dir.path().join("pdfs");
    fs::create_dir(&pdf_dir).unwrap();

    let output = docsort(&[
        "extract",
        "-p", pdf_dir.to_str().unwrap(),
        "-t", dir.path().join("texts").to_str().unwrap(),
    ]);

    assert!(output.status.success(), "Empty PDF dir must not be an error");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No PDF files found"),
            "Expected missing-PDF report, got:\n{}", stdout);
}

#[test]
fn test_info_lists_files() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("lease.pdf"), b"%PDF-1.4").unwrap();

    let output = docsort(&["info", "-d", dir.path().to_str().unwrap()]);
    assert!(output.status.success(), "Info command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lease.pdf") && stdout.contains("bytes"),
            "Expected file metadata in output:\n{}", stdout);
}
