use clap::{Args, Parser, Subcommand};
use orikaeshi::error::FormatResult;
use orikaeshi::files::collect_source_files;
use orikaeshi::{FormatSettings, check_source, fix_source, load_settings};
use std::fs;
use std::path::PathBuf;

/// Structure-aware line length fixer for Clojure sources
#[derive(Parser)]
#[command(name = "orikaeshi")]
#[command(version)]
#[command(about = "Structure-aware line length fixer for Clojure sources")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report lines exceeding the configured width
    Check {
        #[command(flatten)]
        options: SharedOptions,
    },
    /// Rewrite files so no line exceeds the configured width
    Fix {
        #[command(flatten)]
        options: SharedOptions,

        /// Print results to stdout instead of rewriting files
        #[arg(long)]
        stdout: bool,
    },
}

#[derive(Args)]
struct SharedOptions {
    /// Files or directories to process (default: current directory)
    paths: Vec<PathBuf>,

    /// Maximum line width, overriding the configuration file
    #[arg(long)]
    line_length: Option<usize>,

    /// Configuration file (default: .orikaeshi.toml in the current directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Exit status: 0 clean, 1 violations in check mode, 2 error.
const EXIT_CLEAN: i32 = 0;
const EXIT_VIOLATIONS: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn main() {
    // Logging goes to stderr; configure via RUST_LOG, e.g. RUST_LOG=orikaeshi=debug
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Check { options } => run_check(&options),
        Commands::Fix { options, stdout } => run_fix(&options, stdout),
    };
    std::process::exit(code);
}

/// Resolve settings from the config file and CLI overrides, or exit.
fn resolve_settings(options: &SharedOptions) -> Result<FormatSettings, i32> {
    let mut settings = match load_settings(options.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(EXIT_ERROR);
        }
    };
    if let Some(line_length) = options.line_length {
        if line_length == 0 {
            eprintln!("Error: --line-length must be a positive integer");
            return Err(EXIT_ERROR);
        }
        settings.line_length = line_length;
    }
    Ok(settings)
}

fn resolve_files(options: &SharedOptions) -> Result<Vec<PathBuf>, i32> {
    let paths = if options.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        options.paths.clone()
    };
    match collect_source_files(&paths) {
        Ok(files) => Ok(files),
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(EXIT_ERROR)
        }
    }
}

fn run_check(options: &SharedOptions) -> i32 {
    let settings = match resolve_settings(options) {
        Ok(settings) => settings,
        Err(code) => return code,
    };
    let files = match resolve_files(options) {
        Ok(files) => files,
        Err(code) => return code,
    };

    let mut violation_count = 0usize;
    let mut failed = false;
    for path in &files {
        let result: FormatResult<_> =
            fs::read_to_string(path)
                .map_err(Into::into)
                .and_then(|source| check_source(&source, &settings));
        match result {
            Ok(found) => {
                for violation in &found {
                    println!(
                        "{}:{}: {} characters (limit {})",
                        path.display(),
                        violation.line,
                        violation.length,
                        settings.line_length
                    );
                }
                violation_count += found.len();
            }
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                failed = true;
            }
        }
    }

    if failed {
        EXIT_ERROR
    } else if violation_count > 0 {
        log::info!("{} violation(s) in {} file(s)", violation_count, files.len());
        EXIT_VIOLATIONS
    } else {
        EXIT_CLEAN
    }
}

fn run_fix(options: &SharedOptions, to_stdout: bool) -> i32 {
    let settings = match resolve_settings(options) {
        Ok(settings) => settings,
        Err(code) => return code,
    };
    let files = match resolve_files(options) {
        Ok(files) => files,
        Err(code) => return code,
    };

    let print_headers = to_stdout && files.len() > 1;
    let mut failed = false;
    for path in &files {
        let result: FormatResult<()> = fs::read_to_string(path)
            .map_err(Into::into)
            .and_then(|source| {
                let fixed = fix_source(&source, &settings)?;
                if to_stdout {
                    if print_headers {
                        println!(";; {}", path.display());
                    }
                    print!("{}", fixed);
                } else if fixed != source {
                    fs::write(path, &fixed)?;
                    log::info!("rewrote {}", path.display());
                }
                Ok(())
            });
        if let Err(e) = result {
            eprintln!("Error: {}: {}", path.display(), e);
            failed = true;
        }
    }

    if failed { EXIT_ERROR } else { EXIT_CLEAN }
}
