mod cli;

use cinematch::{
    config::{self, Config},
    OmdbProvider, PhraseBook, Query, Reply, Resolver, ResolverSettings, TracingSink,
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use futures::stream::{self, StreamExt};
use serde::Deserialize;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

/// Queries read by the `batch` command.
#[derive(Debug, Deserialize)]
struct BatchFile {
    #[serde(default, rename = "query")]
    queries: Vec<Query>,
}

fn build_resolver(config: &Config) -> Resolver {
    let settings = ResolverSettings {
        default_language: config.omdb.default_language.clone(),
        ..ResolverSettings::default()
    };

    Resolver::with_settings(
        Arc::new(OmdbProvider::new(&config.omdb)),
        Arc::new(PhraseBook::from_config(&config.translation)),
        Arc::new(TracingSink),
        settings,
    )
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "cinematch=trace,cinematch_match=trace,reqwest=debug".to_string()
        } else {
            "cinematch=info".to_string()
        }
    });

    // Logs go to stderr so stdout carries only the JSON record
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve {
            title,
            imdb_id,
            year,
            language,
            pretty,
        } => {
            let query = Query {
                title,
                imdb_id,
                year,
                language,
            };
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(resolve(query, cli.config.as_deref(), pretty))
        }
        Commands::Batch { file, concurrency } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(batch(&file, cli.config.as_deref(), concurrency))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Version => {
            println!("cinematch {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn resolve(query: Query, config_path: Option<&Path>, pretty: bool) -> Result<ExitCode> {
    let config = config::load_config_or_default(config_path)?;
    let resolver = build_resolver(&config);

    tracing::debug!("Resolving {}", query);
    let reply = resolver.respond(&query).await;

    match &reply {
        Reply::Movie(json) if pretty => {
            let value: serde_json::Value = serde_json::from_str(&json)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        other => println!("{}", other),
    }

    Ok(exit_code(&reply))
}

async fn batch(file: &Path, config_path: Option<&Path>, concurrency: usize) -> Result<ExitCode> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read batch file: {:?}", file))?;
    let listed: BatchFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse batch file: {:?}", file))?;

    let config = config::load_config_or_default(config_path)?;
    let resolver = build_resolver(&config);
    let resolver = &resolver;

    tracing::info!("Resolving {} queries", listed.queries.len());

    // Resolutions are independent; run several at once but report in input order
    let replies: Vec<(Query, Reply)> = stream::iter(listed.queries)
        .map(|query| async move {
            let reply = resolver.respond(&query).await;
            (query, reply)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut failures = 0usize;
    for (query, reply) in &replies {
        println!("\n{}:", query);
        println!("{}", reply);
        if !reply.is_success() {
            failures += 1;
        }
    }

    println!(
        "\n{} resolved, {} failed",
        replies.len() - failures,
        failures
    );

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn exit_code(reply: &Reply) -> ExitCode {
    if reply.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::load_config_or_default(None)?
        }
    };

    println!("  OMDb endpoint: {}", config.omdb.base_url);
    println!(
        "  API key: {}",
        if config.omdb.api_key().is_some() {
            "configured"
        } else {
            "missing"
        }
    );
    println!("  Timeout: {}s", config.omdb.timeout_secs);
    println!("  Default language: {}", config.omdb.default_language);
    println!(
        "  Extra translations: {}",
        config.translation.titles.len()
    );

    Ok(())
}
