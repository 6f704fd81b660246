use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use package_author::config::{Config, config_path, data_dir, log_path};
use package_author::manifest::read_package_json;
use package_author::registry::{AuthorRegistry, NpmRegistry, fetch_many};
use package_author::render::{OutputFormat, PackageReport, render_reports};

#[derive(Parser)]
#[command(name = "package-author")]
#[command(version, about = "Show who is behind a package")]
struct Cli {
    /// Show contact cards as avatar only, with details on hover
    #[arg(long, global = true)]
    compact: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Config file (defaults to $XDG_CONFIG_HOME/package-author/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show people listed in a local package.json
    Show {
        #[arg(default_value = "package.json")]
        path: PathBuf,
    },
    /// Look up people of packages on the npm registry
    Fetch {
        #[arg(required = true)]
        packages: Vec<String>,

        /// Registry base URL, overriding the config file
        #[arg(long)]
        registry: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging();

    let config_file = cli.config.clone().unwrap_or_else(config_path);
    let config = Config::load(&config_file)?;
    let compact = cli.compact || config.display.compact;

    let reports = match cli.command {
        Command::Show { path } => {
            let authors = read_package_json(&path)?;
            if authors.is_empty() {
                warn!("{} lists no author, contributors or maintainers", path.display());
            }
            let package = authors
                .name
                .clone()
                .unwrap_or_else(|| path.display().to_string());
            vec![PackageReport::new(&package, &authors, compact)]
        }
        Command::Fetch { packages, registry } => {
            let base_url = registry.unwrap_or(config.registry.url);
            let registry =
                NpmRegistry::with_timeout(&base_url, Duration::from_millis(config.registry.timeout_ms));
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(fetch_reports(&registry, &packages, compact))?
        }
    };

    println!("{}", render_reports(&reports, cli.format)?);
    Ok(())
}

async fn fetch_reports(
    registry: &dyn AuthorRegistry,
    packages: &[String],
    compact: bool,
) -> anyhow::Result<Vec<PackageReport>> {
    let results = fetch_many(registry, packages).await;

    packages
        .iter()
        .zip(results)
        .map(|(name, result)| {
            let authors = result.with_context(|| format!("Failed to fetch {}", name))?;
            if authors.is_empty() {
                warn!("{} lists no author, contributors or maintainers", name);
            } else {
                info!("Fetched people of {}", name);
            }
            Ok(PackageReport::new(name, &authors, compact))
        })
        .collect()
}

/// Logs go to a file so stdout only carries rendered output.
/// Returns `None` (logging disabled) when the data directory is unusable.
fn init_logging() -> Option<WorkerGuard> {
    let dir = data_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Failed to create data directory {:?}: {}", dir, e);
        return None;
    }

    let log_file = log_path();
    let file_name = log_file.file_name()?;
    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("PACKAGE_AUTHOR_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .is_err()
    {
        warn!("Global tracing subscriber already set");
    }

    Some(guard)
}
