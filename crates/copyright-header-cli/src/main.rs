//! Copyright Header Validator CLI
//!
//! A command-line tool that checks source files for a copyright header.

use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode as StdExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::signal;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, ValidatedConfig};
use cli::output::{HumanOutput, ValidationResults};
use copyright_header_core::validate::file_walker::list_files;
use copyright_header_core::{CheckRunner, SourceUnit};

#[tokio::main]
async fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json);

    // Set up signal handling for graceful shutdown
    let terminated = Arc::new(AtomicBool::new(false));
    let terminated_clone = terminated.clone();

    tokio::spawn(async move {
        let ctrl_c = signal::ctrl_c();
        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                }
                Err(e) => {
                    warn!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };
        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received SIGINT, shutting down...");
            }
            _ = terminate => {
                info!("Received SIGTERM, shutting down...");
            }
        }

        terminated_clone.store(true, Ordering::SeqCst);
    });

    // Files are read and checked on a blocking thread so the signal task keeps running.
    let worker_flag = terminated.clone();
    let exit_code = match tokio::task::spawn_blocking(move || run(args, &worker_flag)).await {
        Ok(code) => code,
        Err(e) => {
            error!("Validation task failed: {}", e);
            ExitCode::StartupFailure
        }
    };

    // Check if we were terminated by signal
    if terminated.load(Ordering::SeqCst) {
        return StdExitCode::from(ExitCode::Terminated as u8);
    }

    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the validator with the given arguments.
fn run(args: Args, terminated: &AtomicBool) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    // Validate configuration
    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            let use_colors = !args.json && io::stderr().is_terminal();
            let _ = HumanOutput::new(&mut stderr, use_colors).write_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    let use_colors = !config.json_output && io::stdout().is_terminal();

    debug!("Validated configuration: {:?}", config);
    info!("Repository path: {}", config.repo_path.display());

    let files = list_files(&config.repo_path, &config.walker_config);
    info!("Checking {} file(s)", files.len());

    let runner = CheckRunner::with_all_checks();
    let mut results = ValidationResults::new();

    for file in &files {
        if terminated.load(Ordering::SeqCst) {
            return ExitCode::Terminated;
        }

        let path = config.repo_path.join(file);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping '{}': {}", file, e);
                continue;
            }
        };

        let unit = SourceUnit::new(file.as_str(), &text);
        let result = runner.run(&unit, &config.check_config);
        debug!("'{}': {} issue(s)", file, result.errors.len());
        results.add(file.as_str(), result);
    }

    info!(
        "Checked {} file(s): {} error(s), {} warning(s)",
        results.files_checked(),
        results.total_errors(),
        results.total_warnings()
    );

    // Output results
    if config.json_output {
        if let Err(e) = results.write_json(&mut stdout) {
            error!("Failed to write JSON output: {}", e);
            return ExitCode::StartupFailure;
        }
    } else if let Err(e) = results.write_human(&mut stdout, use_colors) {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    // Determine exit code
    config.exit_code_for_results(results.has_errors(), results.has_warnings())
}
