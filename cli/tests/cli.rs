use assert_cmd::Command;
use tempfile::TempDir;

fn fanfold() -> Command {
    Command::cargo_bin("fanfold").unwrap()
}

fn seed_frames(dir: &TempDir, count: usize) {
    for i in 1..=count {
        std::fs::write(dir.path().join(format!("frame-{i:04}.png")), b"png").unwrap();
    }
}

#[test]
fn test_writes_index_html_into_the_directory() {
    let dir = TempDir::new().unwrap();
    seed_frames(&dir, 18);

    fanfold()
        .args(["--directory", dir.path().to_str().unwrap()])
        .assert()
        .success();

    let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("frame-0001.png"));
    assert_eq!(html.matches("class=\"page\"").count(), 3);
}

#[test]
fn test_overwrites_existing_index_html() {
    let dir = TempDir::new().unwrap();
    seed_frames(&dir, 1);
    std::fs::write(dir.path().join("index.html"), "stale").unwrap();

    fanfold()
        .args(["--directory", dir.path().to_str().unwrap()])
        .assert()
        .success();

    let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert_ne!(html, "stale");
}

#[test]
fn test_missing_directory_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    fanfold()
        .args(["--directory", missing.to_str().unwrap()])
        .assert()
        .failure();

    assert!(!missing.exists());
    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn test_invalid_orientation_fails() {
    let dir = TempDir::new().unwrap();
    seed_frames(&dir, 1);

    fanfold()
        .args([
            "--directory",
            dir.path().to_str().unwrap(),
            "--orientation",
            "diagonal",
        ])
        .assert()
        .failure();

    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn test_degenerate_capacity_fails() {
    let dir = TempDir::new().unwrap();
    seed_frames(&dir, 1);

    fanfold()
        .args(["--directory", dir.path().to_str().unwrap(), "--rows", "0"])
        .assert()
        .failure();

    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn test_custom_template_is_used() {
    let dir = TempDir::new().unwrap();
    seed_frames(&dir, 2);
    let template = dir.path().join("custom.hbs");
    std::fs::write(&template, "pages={{page_count}}").unwrap();

    fanfold()
        .args([
            "--directory",
            dir.path().to_str().unwrap(),
            "--template",
            template.to_str().unwrap(),
        ])
        .assert()
        .success();

    let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert_eq!(html, "pages=1");
}
