use std::error::Error;
use std::fs;
use std::path::Path;

use promptproof_metrics::MetricsReport;
use promptproof_snapshot::SnapshotManager;

const EXAMPLE_TEST: &str = r#"use promptproof::{expect, LengthUnit, SnapshotManager};

#[test]
fn greeting_stays_stable() -> Result<(), Box<dyn std::error::Error>> {
    // Swap this for a real provider call once API keys are configured.
    let output = "Hello from your provider";

    expect(output)
        .to_contain("Hello")?
        .to_be_shorter_than(100, LengthUnit::Chars)?;

    let update = std::env::var_os("UPDATE_SNAPSHOTS").is_some();
    let snapshots = SnapshotManager::new(".snapshots", update)?;
    let outcome = snapshots.compare("greeting", output)?;
    assert!(outcome.matched, "{}", outcome.diff.unwrap_or_default());
    Ok(())
}
"#;

/// `run` prepares the snapshot store for the requested mode and reports
/// the effective configuration. Test discovery and execution live with
/// the host test runner, not here.
pub fn run(
    path: &Path,
    update: bool,
    verbose: bool,
    suite: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("test path '{}' does not exist", path.display()).into());
    }

    let store = path.join(".snapshots");
    let manager = SnapshotManager::new(&store, update)?;

    println!("Running tests from: {}", path.display());
    println!("  update mode: {}", manager.update_mode());
    if let Some(suite) = suite {
        println!("  suite: {suite}");
    }
    if verbose {
        let mut names = manager.list_snapshots()?;
        names.sort();
        println!("  snapshot store: {}", manager.snapshot_dir().display());
        println!("  baselines: {}", names.len());
        for name in names {
            println!("    {name}");
        }
    }

    // TODO: drive discovered tests through here once the runner exists;
    // until then tests execute under `cargo test` against this store.
    Ok(())
}

pub fn metrics(file: &Path) -> Result<(), Box<dyn Error>> {
    let report = MetricsReport::load(file)?;
    println!("{}", report.render());
    Ok(())
}

pub fn init(path: &Path) -> Result<(), Box<dyn Error>> {
    let tests_dir = path.join("tests");
    let snapshots_dir = path.join(".snapshots");
    fs::create_dir_all(&tests_dir)?;
    fs::create_dir_all(&snapshots_dir)?;

    let example = tests_dir.join("greeting_test.rs");
    if !example.exists() {
        fs::write(&example, EXAMPLE_TEST)?;
    }

    println!("Initialized promptproof project in {}", path.display());
    println!("  created: tests/");
    println!("  created: .snapshots/");
    println!("  created: tests/greeting_test.rs");
    println!("Next: set your provider API keys, then run `promptproof run tests/`");
    Ok(())
}
