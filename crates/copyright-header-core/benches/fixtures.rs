//! Benchmark fixtures - generated at runtime.
//!
//! Fixtures are generated lazily on first access and cached for the
//! duration of the benchmark run. All generation is deterministic.
//!
//! For the file walker, a temporary directory is populated with the medium
//! fixture.

use copyright_header_core::generate::{GeneratedFile, GeneratorConfig, generate};
use std::path::PathBuf;
use std::sync::LazyLock;
use tempfile::TempDir;

static SMALL: LazyLock<Vec<GeneratedFile>> = LazyLock::new(|| generate(&GeneratorConfig::small()));
static MEDIUM: LazyLock<Vec<GeneratedFile>> = LazyLock::new(|| generate(&GeneratorConfig::medium()));
static LARGE: LazyLock<Vec<GeneratedFile>> = LazyLock::new(|| generate(&GeneratorConfig::large()));

/// Standard fixtures for regular benchmarks.
pub fn fixtures() -> &'static [(&'static str, &'static [GeneratedFile])] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static [GeneratedFile])>> =
        LazyLock::new(|| {
            vec![
                ("small", SMALL.as_slice()),
                ("medium", MEDIUM.as_slice()),
                ("large", LARGE.as_slice()),
            ]
        });
    FIXTURES.as_slice()
}

/// Total size of a fixture in bytes.
pub fn total_bytes(files: &[GeneratedFile]) -> u64 {
    files.iter().map(|f| f.content.len() as u64).sum()
}

/// A benchmark repository populated with generated source files.
///
/// The temp directory is kept alive as long as this struct exists.
pub struct BenchmarkRepo {
    #[allow(dead_code)] // Kept to maintain temp directory lifetime
    temp_dir: TempDir,
    /// Path to the repository root.
    pub path: PathBuf,
}

impl BenchmarkRepo {
    /// Creates a repository containing the medium fixture plus a few
    /// non-source files the walker must skip.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().to_path_buf();

        for file in MEDIUM.iter() {
            let target = path.join(&file.path);
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).ok();
            }
            std::fs::write(&target, &file.content).ok();
        }

        std::fs::write(path.join("README.md"), "# bench\n").ok();
        std::fs::create_dir_all(path.join("docs")).ok();
        std::fs::write(path.join("docs/guide.md"), "guide\n").ok();

        BenchmarkRepo { temp_dir, path }
    }
}

static BENCHMARK_REPO: LazyLock<BenchmarkRepo> = LazyLock::new(BenchmarkRepo::new);

/// Returns the path to the benchmark repository.
pub fn repo_path() -> &'static PathBuf {
    &BENCHMARK_REPO.path
}
