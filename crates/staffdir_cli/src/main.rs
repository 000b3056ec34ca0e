//! CLI entry point.
//!
//! # Responsibility
//! - Provide a smoke probe for `staffdir_core` linkage.
//! - Render one directory page from a JSON list or card listing file.

use clap::{Parser, Subcommand};
use staffdir_core::{
    bootstrap_store, default_log_level, init_logging, BootstrapError, DirectoryService,
    EmployeeFilter, InMemoryEmployeeRepository, SortKey,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "staffdir", version, about = "Staff directory listing tool")]
struct Cli {
    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<String>,
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the core health-check response.
    Ping,
    /// Print the core crate version.
    Version,
    /// Render one page of a directory file.
    List(ListArgs),
}

#[derive(Debug, clap::Args)]
struct ListArgs {
    /// JSON employee array or rendered card listing.
    file: PathBuf,
    /// Free-text search over first name, last name and email.
    #[arg(long, default_value = "")]
    search: String,
    /// First-name substring filter.
    #[arg(long, default_value = "")]
    first_name: String,
    /// Exact department filter.
    #[arg(long, default_value = "")]
    department: String,
    /// Exact role filter.
    #[arg(long, default_value = "")]
    role: String,
    /// Sort key: firstName, department or role.
    #[arg(long, default_value = "firstName")]
    sort: String,
    /// 1-based page to show; clamped to the last page.
    #[arg(long, default_value_t = 1)]
    page: usize,
    #[arg(long, default_value_t = 10)]
    page_size: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("staffdir: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    match cli.command {
        Command::Ping => println!("staffdir_core ping={}", staffdir_core::ping()),
        Command::Version => println!("staffdir_core version={}", staffdir_core::core_version()),
        Command::List(args) => println!("{}", list(&args)?),
    }
    Ok(())
}

fn list(args: &ListArgs) -> Result<String, Box<dyn Error>> {
    let raw = std::fs::read_to_string(&args.file)?;
    let repo = load_repo(raw.as_str())?;

    let mut service = DirectoryService::new(repo);
    service.set_page_size(args.page_size)?;
    service.set_search(args.search.as_str());
    service.set_filter(EmployeeFilter {
        first_name: args.first_name.clone(),
        department: args.department.clone(),
        role: args.role.clone(),
    });
    let view = service.set_sort(SortKey::parse(args.sort.as_str()));

    let target = args.page.clamp(1, view.total_pages);
    Ok(service.go_to_page(target as i64 - 1).render())
}

/// Reads a directory file as a JSON employee array or a card listing.
fn load_repo(raw: &str) -> Result<InMemoryEmployeeRepository, BootstrapError> {
    if raw.trim_start().starts_with('[') {
        bootstrap_store(Some(raw), "")
    } else {
        bootstrap_store(None, raw)
    }
}
