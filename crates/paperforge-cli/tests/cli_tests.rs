//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn paperforge() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("paperforge").unwrap()
}

#[test]
fn validate_unit_review_paper() {
    paperforge()
        .arg("validate")
        .arg("--quiz")
        .arg("../../quiz-sets/unit3-review.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unit 3 Review (4 blocks)"))
        .stdout(predicate::str::contains("All quiz papers valid"));
}

#[test]
fn validate_listening_paper() {
    paperforge()
        .arg("validate")
        .arg("--quiz")
        .arg("../../quiz-sets/listening-practice.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Listening Practice 7 (2 blocks)"));
}

#[test]
fn validate_directory() {
    paperforge()
        .arg("validate")
        .arg("--quiz")
        .arg("../../quiz-sets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unit 3 Review"))
        .stdout(predicate::str::contains("Listening Practice 7"))
        .stdout(predicate::str::contains("Placement Final"))
        .stdout(predicate::str::contains("All quiz papers valid"));
}

#[test]
fn validate_nonexistent_file() {
    paperforge()
        .arg("validate")
        .arg("--quiz")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_reports_authoring_mistakes() {
    let dir = TempDir::new().unwrap();
    let quiz = dir.path().join("broken.toml");
    std::fs::write(
        &quiz,
        r#"
[paper]
name = "Broken"

[[blocks]]
type = "fishing"
id = "empty"
text = "<p>no blanks here</p>"
"#,
    )
    .unwrap();

    paperforge()
        .arg("validate")
        .arg("--quiz")
        .arg(&quiz)
        .assert()
        .success()
        .stdout(predicate::str::contains("[empty] WARNING"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn list_shows_block_table() {
    paperforge()
        .arg("list")
        .arg("--quiz")
        .arg("../../quiz-sets/unit3-review.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unit 3 Review"))
        .stdout(predicate::str::contains("8 questions"))
        .stdout(predicate::str::contains("vocabulary"))
        .stdout(predicate::str::contains("fishing"))
        .stdout(predicate::str::contains("sentence_choice"));
}

#[test]
fn render_writes_all_formats() {
    let out = TempDir::new().unwrap();

    paperforge()
        .arg("render")
        .arg("--quiz")
        .arg("../../quiz-sets/unit3-review.toml")
        .arg("--out")
        .arg(out.path())
        .arg("--format")
        .arg("all")
        .assert()
        .success();

    for name in [
        "unit3-review-paper.html",
        "unit3-review-key.html",
        "unit3-review-paper.json",
        "unit3-review-key.json",
        "unit3-review-manifest.json",
    ] {
        assert!(out.path().join(name).exists(), "missing {name}");
    }
}

#[test]
fn repeated_renders_are_byte_identical() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    for out in [&first, &second] {
        paperforge()
            .arg("render")
            .arg("--quiz")
            .arg("../../quiz-sets/unit3-review.toml")
            .arg("--out")
            .arg(out.path())
            .assert()
            .success();
    }

    // The manifest carries a fresh run id and timestamp, but the rendered
    // documents themselves must not change between runs.
    for name in ["unit3-review-paper.html", "unit3-review-key.html"] {
        let a = std::fs::read(first.path().join(name)).unwrap();
        let b = std::fs::read(second.path().join(name)).unwrap();
        assert_eq!(a, b, "{name} differs between renders");
    }
}

#[test]
fn start_flag_offsets_numbering() {
    let out = TempDir::new().unwrap();

    paperforge()
        .arg("render")
        .arg("--quiz")
        .arg("../../quiz-sets/unit3-review.toml")
        .arg("--out")
        .arg(out.path())
        .arg("--start")
        .arg("41")
        .assert()
        .success();

    let paper = std::fs::read_to_string(out.path().join("unit3-review-paper.html")).unwrap();
    assert!(paper.contains("(41)"));
    assert!(!paper.contains("(1) "));
}

#[test]
fn render_accepts_comma_separated_formats() {
    let out = TempDir::new().unwrap();

    paperforge()
        .arg("render")
        .arg("--quiz")
        .arg("../../quiz-sets/unit3-review.toml")
        .arg("--out")
        .arg(out.path())
        .arg("--format")
        .arg("html,json")
        .assert()
        .success();

    for name in [
        "unit3-review-paper.html",
        "unit3-review-key.html",
        "unit3-review-paper.json",
        "unit3-review-key.json",
    ] {
        assert!(out.path().join(name).exists(), "missing {name}");
    }
}

#[test]
fn render_rejects_unknown_format() {
    paperforge()
        .arg("render")
        .arg("--quiz")
        .arg("../../quiz-sets/unit3-review.toml")
        .arg("--format")
        .arg("pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    paperforge()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created paperforge.toml"))
        .stdout(predicate::str::contains("Created quiz-sets/example.toml"));

    assert!(dir.path().join("paperforge.toml").exists());
    assert!(dir.path().join("quiz-sets/example.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    paperforge()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    paperforge()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    paperforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exam paper and answer-key generator"));
}

#[test]
fn version_output() {
    paperforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("paperforge"));
}
