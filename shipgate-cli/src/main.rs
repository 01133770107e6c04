//! shipgate — deploy-readiness quality gate for containerized projects.
//!
//! Exit codes: 0 = success (warnings allowed), 1 = at least one check
//! failed, 2 = operational error (unreadable root, invalid config).

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::error;

use shipgate_analysis::gate::{GateRunner, Verdict};
use shipgate_analysis::report::{ConsoleReporter, JsonReporter, Reporter};
use shipgate_analysis::scanner::ProjectTree;
use shipgate_analysis::tools::ToolAdapter;
use shipgate_core::config::GateConfig;
use shipgate_core::errors::{ErrorCode, RunError};
use shipgate_core::tracing::init_tracing;

const EXIT_OPERATIONAL: u8 = 2;

#[derive(Parser)]
#[command(name = "shipgate", version, about = "Deploy-readiness quality gate")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full check battery against a project tree.
    Run {
        /// Project root to evaluate.
        #[arg(long, default_value = ".")]
        project_root: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value = "console")]
        format: Format,
        /// Disable colorized output.
        #[arg(long)]
        no_color: bool,
    },
    /// Print the check catalog.
    Checks,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Console,
    Json,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            project_root,
            format,
            no_color,
        } => match run_gate(&project_root, format, no_color) {
            Ok(verdict) => ExitCode::from(verdict.exit_code() as u8),
            Err(e) => {
                error!(code = e.error_code(), "{e}");
                eprintln!("shipgate: {}", e.tagged());
                ExitCode::from(EXIT_OPERATIONAL)
            }
        },
        Command::Checks => {
            print_catalog();
            ExitCode::SUCCESS
        }
    }
}

fn run_gate(root: &Path, format: Format, no_color: bool) -> Result<Verdict, RunError> {
    let config = GateConfig::load(root)?;
    let tree = ProjectTree::scan(root, &config)?;
    let tools = ToolAdapter::from_env();
    let runner = GateRunner::new();

    let report = match format {
        Format::Console => {
            let color = !no_color && std::io::stdout().is_terminal();
            let console = ConsoleReporter::new(color);
            let report = runner.run_with(&tree, &tools, |result| {
                println!("{}", console.format_result(result));
            });
            println!("{}", console.format_summary(&report));
            report
        }
        Format::Json => {
            let report = runner.run(&tree, &tools);
            match JsonReporter.generate(&report) {
                Ok(text) => println!("{text}"),
                Err(e) => error!("json report generation failed: {e}"),
            }
            report
        }
    };

    Ok(Verdict::classify(&report))
}

fn print_catalog() {
    for check in GateRunner::new().battery() {
        println!("{:<32} {}", check.id().to_string(), check.description());
    }
}
