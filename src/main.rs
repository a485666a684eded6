mod error;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use antdv_cache::{Database, Repository};
use antdv_config::Config;
use antdv_crawl::{CrawlOptions, HttpFetcher};
use antdv_extract::models::{DocVersion, VersionFilter};
use antdv_indexer::Indexer;
use antdv_query::{DEFAULT_SEARCH_LIMIT, QueryService};
use clap::{Parser, Subcommand};
use exn::ResultExt;
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::error::{ErrorKind, Result};

#[derive(Parser, Debug)]
#[command(name = "antdv-docs", version, about = "Index and query Ant Design Vue component documentation")]
struct Cli {
    /// Config file (TOML, YAML or JSON)
    #[arg(long, global = true, env = "ANTDV_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite database, overriding the configured path
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the documentation site and refresh the index
    Index {
        /// v3, v4 or all
        #[arg(value_parser = parse_filter)]
        version: VersionFilter,
    },
    /// Full-text search over pages and API items
    Search {
        query: String,
        /// v3, v4 or all
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        version: VersionFilter,
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: u32,
    },
    /// List indexed components
    Components {
        #[arg(value_parser = parse_version)]
        version: DocVersion,
    },
    /// Show the full API of a component
    Api {
        /// Tag (a-button), name (button) or title
        component: String,
        #[arg(value_parser = parse_version)]
        version: DocVersion,
    },
    /// Look up a single prop, event, slot or method
    Prop {
        component: String,
        prop: String,
        #[arg(value_parser = parse_version)]
        version: DocVersion,
    },
}

fn parse_version(value: &str) -> std::result::Result<DocVersion, String> {
    value.parse::<DocVersion>().map_err(|err| (*err).to_string())
}

fn parse_filter(value: &str) -> std::result::Result<VersionFilter, String> {
    value.parse::<VersionFilter>().map_err(|err| (*err).to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr, stdout is reserved for JSON output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            error!("{err:?}");
            eprintln!("Error: {}", *err);
            ExitCode::FAILURE
        },
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    let database = cli.db.unwrap_or(config.database);
    debug!(database = %database.display(), "opening database");
    let db = Database::connect(&database).await.or_raise(|| ErrorKind::Database)?;
    let repo = Repository::from(&db);

    let code = match cli.command {
        Command::Index { version } => {
            let fetcher = HttpFetcher::new(CrawlOptions::from(&config.crawler)).or_raise(|| ErrorKind::Crawler)?;
            index(Indexer::new(Arc::new(fetcher), repo), version).await
        },
        Command::Search { query, version, limit } => {
            print_json(QueryService::new(repo).search(&query, version, limit).await)?
        },
        Command::Components { version } => print_json(QueryService::new(repo).list_components(version).await)?,
        Command::Api { component, version } => {
            print_json(QueryService::new(repo).get_component_api(&component, version).await)?
        },
        Command::Prop { component, prop, version } => {
            print_json(QueryService::new(repo).find_prop(&component, &prop, version).await)?
        },
    };
    db.close().await;
    Ok(code)
}

/// Indexes each selected version in turn. A version that can't be indexed at
/// all doesn't stop the next one, but does fail the run. Individual component
/// failures are only reported in the summary.
async fn index(indexer: Indexer, filter: VersionFilter) -> ExitCode {
    let mut code = ExitCode::SUCCESS;
    for version in filter.versions() {
        match indexer.index_version(version).await {
            Ok(summary) => {
                println!("{summary}");
            },
            Err(err) => {
                error!(%version, "indexing failed: {err:?}");
                eprintln!("Error: {}", *err);
                code = ExitCode::FAILURE;
            },
        }
    }
    code
}

/// Pretty-prints a lookup result on stdout, or its error on stderr.
fn print_json<T: Serialize>(result: antdv_query::error::Result<T>) -> Result<ExitCode> {
    match result {
        Ok(value) => {
            let json = serde_json::to_string_pretty(&value).or_raise(|| ErrorKind::Output)?;
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => {
            debug!("{err:?}");
            eprintln!("Error: {}", *err);
            Ok(ExitCode::FAILURE)
        },
    }
}
