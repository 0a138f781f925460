//! Fixture-driven tests: each `<name>.yaml` under `tests/fixtures/` is
//! validated and compared line by line with `<name>.expected` (absent for
//! valid manifests).

use podlint::parse::parse;
use podlint::validate::validate;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    std::env::var("PODLINT_FIXTURES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

fn run_fixture(name: &str) -> Vec<String> {
    let file = format!("{}.yaml", name);
    let path = fixtures_dir().join(&file);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {:?}: {}", path, e));
    let node = parse(&content).expect("fixture should be well-formed YAML");
    validate(&file, &node)
        .errors
        .iter()
        .map(|e| e.to_string())
        .collect()
}

fn expected(name: &str) -> Vec<String> {
    let path = fixtures_dir().join(format!("{}.expected", name));
    match std::fs::read_to_string(&path) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

#[test]
fn fixture_suite() {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(fixtures_dir())
        .expect("fixtures directory should exist")
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
        .collect();
    entries.sort();
    assert!(!entries.is_empty(), "no fixtures found");

    let mut failed = Vec::new();
    for path in &entries {
        let name = path.file_stem().unwrap().to_string_lossy().into_owned();
        let actual = run_fixture(&name);
        let want = expected(&name);
        if actual != want {
            eprintln!("  FAIL {}:\n    expected: {:#?}\n    actual:   {:#?}", name, want, actual);
            failed.push(name);
        }
    }

    assert!(failed.is_empty(), "fixtures failed: {:?}", failed);
}

#[test]
fn valid_fixture_has_no_errors() {
    assert!(run_fixture("valid_pod").is_empty());
}
