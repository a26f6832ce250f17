//! Generate source file fixtures for benchmarking.
//!
//! Usage: cargo run --release --bin generate-fixtures --features generate -- [output_dir]
//!
//! Writes one repository per preset, deterministic across runs.

use copyright_header_core::generate::{GeneratorConfig, generate};
use std::{fs, io, path::Path, path::PathBuf, process::ExitCode};

/// Type alias for fixture preset entries.
type PresetEntry = (&'static str, fn() -> GeneratorConfig);

/// Fixture presets - keep in sync with benches/fixtures.rs
const PRESETS: &[PresetEntry] = &[
    ("small", GeneratorConfig::small),
    ("medium", GeneratorConfig::medium),
    ("large", GeneratorConfig::large),
    ("xlarge", GeneratorConfig::xlarge),
];

fn main() -> ExitCode {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("benches/cli/fixtures"));

    if let Err(e) = run(&output_dir) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(output_dir: &Path) -> io::Result<()> {
    for (name, config_fn) in PRESETS {
        let config = config_fn();
        let root = output_dir.join(name);
        let files = generate(&config);

        let mut bytes = 0;
        let mut failing = 0;
        for file in &files {
            let path = root.join(&file.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &file.content)?;
            bytes += file.content.len();
            if !file.kind.passes() {
                failing += 1;
            }
        }

        println!(
            "Generated {} ({} files, {} bytes, {} expected failures, company '{}')",
            root.display(),
            files.len(),
            bytes,
            failing,
            config.company_name
        );
    }

    Ok(())
}
