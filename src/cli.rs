use clap::{ArgAction, Parser};
use std::path::PathBuf;
use uv_why::application::dto::{AnalysisMode, OutputFormat};
use uv_why::shared::error::ExitCode;

/// Explain why a package is part of a uv project or Python environment
#[derive(Parser, Debug)]
#[command(name = "uv-why")]
#[command(version)]
#[command(
    about = "Show which packages depend on a given package, and through which chains",
    long_about = None
)]
pub struct Args {
    /// Package to explain (matched case-insensitively)
    #[arg(value_name = "PACKAGE")]
    pub package: String,

    /// Show only packages that depend on PACKAGE directly (takes priority over --tree)
    #[arg(short, long)]
    pub direct: bool,

    /// Show the dependency chains merged into a tree per root package
    #[arg(short, long)]
    pub tree: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to the project directory containing uv.lock (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Read installed distributions from this site-packages directory instead of uv.lock
    #[arg(short, long, value_name = "DIR")]
    pub site_packages: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to uv-why.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parses the process arguments, exiting on `--help`, `--version` or a usage error
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(e) => {
                let code = exit_code_for(&e);
                let _ = e.print();
                std::process::exit(code.as_i32());
            }
        }
    }

    /// Target name as searched: trimmed and lowercased
    pub fn target(&self) -> String {
        self.package.trim().to_lowercase()
    }

    /// Mode selected by flags, if any; `--direct` wins over `--tree`
    pub fn mode_flag(&self) -> Option<AnalysisMode> {
        if self.direct {
            Some(AnalysisMode::Direct)
        } else if self.tree {
            Some(AnalysisMode::Tree)
        } else {
            None
        }
    }

    /// Format selected by flags, if any
    pub fn format_flag(&self) -> Option<OutputFormat> {
        self.json.then_some(OutputFormat::Json)
    }
}

/// Help and version output are successful runs; anything else is a usage error
pub fn exit_code_for(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}
