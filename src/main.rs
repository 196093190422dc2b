mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;
use uv_why::adapters::outbound::catalog::{LockfileCatalogReader, SitePackagesCatalogReader};
use uv_why::adapters::outbound::console::StderrProgressReporter;
use uv_why::application::dto::{AnalysisMode, OutputFormat, WhyRequest, WhyResponse};
use uv_why::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use uv_why::application::read_models::WhyReadModelBuilder;
use uv_why::application::use_cases::ExplainDependencyUseCase;
use uv_why::ports::outbound::CatalogReader;
use uv_why::shared::error::{ExitCode, WhyError};
use uv_why::shared::Result;

fn main() {
    // Parse command-line arguments (usage errors exit with code 2)
    let args = Args::parse_args();

    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    // Validate project directory
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    // CLI flags > config file > defaults
    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(&project_path)?.unwrap_or_default(),
    };
    let settings = Settings::resolve(&args, config, &project_path);
    tracing::debug!(?settings, "resolved settings");

    let presenter_type = PresenterType::from_output(args.output.clone());
    let colorize = settings.format == OutputFormat::Text
        && !settings.no_color
        && !presenter_type.is_file()
        && std::io::stdout().is_terminal();

    // Execute use case with the catalog reader for the selected source
    let response = match settings.site_packages.clone() {
        Some(dir) => explain(SitePackagesCatalogReader::new(), &args, &settings, dir)?,
        None => explain(LockfileCatalogReader::new(), &args, &settings, project_path)?,
    };

    let model = WhyReadModelBuilder::build(&response);
    let formatter = FormatterFactory::create(settings.format, colorize);
    let formatted_output = formatter.format(&model)?;

    let presenter = PresenterFactory::create(presenter_type);
    presenter.present(&formatted_output)?;

    Ok(())
}

fn explain<CR: CatalogReader>(
    catalog_reader: CR,
    args: &Args,
    settings: &Settings,
    catalog_path: PathBuf,
) -> Result<WhyResponse> {
    let request = WhyRequest::builder()
        .target(args.target())
        .mode(settings.mode)
        .catalog_path(catalog_path)
        .build()?;

    let use_case = ExplainDependencyUseCase::new(catalog_reader, StderrProgressReporter::new());
    use_case.execute(request)
}

/// Effective options after merging flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    mode: AnalysisMode,
    format: OutputFormat,
    no_color: bool,
    site_packages: Option<PathBuf>,
}

impl Settings {
    fn resolve(args: &Args, config: ConfigFile, project_path: &Path) -> Self {
        let mode = args
            .mode_flag()
            .or_else(|| config.analysis_mode())
            .unwrap_or_default();
        let format = args
            .format_flag()
            .or_else(|| config.output_format())
            .unwrap_or_default();
        let no_color = args.no_color || config.no_color.unwrap_or(false);
        // config paths are relative to the project directory
        let site_packages = args.site_packages.clone().or_else(|| {
            config.site_packages.map(|dir| {
                if dir.is_relative() {
                    project_path.join(dir)
                } else {
                    dir
                }
            })
        });

        Self {
            mode,
            format,
            no_color,
            site_packages,
        }
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(WhyError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| WhyError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(WhyError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(WhyError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
