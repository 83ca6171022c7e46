//! CLI entrypoint for Super Agent
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use super_agent_application::{
    Coordinator, ExecutionParams, HandlerRegistry, KeywordRouter, ModelRouter, NoProgress,
    QueryRouter,
};
use super_agent_domain::{KeywordTable, OutputFormat, Query, RouterStrategy, ToolCall};
use super_agent_infrastructure::{
    ConfigLoader, DataHandler, FileConfig, FinanceHandler, HttpLlmGateway, InformationHandler,
    ToolServer, ToolServerSession, WeatherHandler,
};
use super_agent_presentation::{
    Cli, ConsoleFormatter, InteractiveRepl, OutputConfig, ProgressReporter, ReplConfig, RunMode,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(&cli)?;

    info!("Starting Super Agent");

    let Some(mode) = cli.mode() else {
        bail!("A query is required. Use --interactive for an interactive session.");
    };

    if mode == RunMode::ShowConfig {
        return show_config(&cli);
    }

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let (coordinator, tools) = build(&config)?;

    coordinator
        .start()
        .await
        .context("Failed to start the coordinator")?;

    let outcome = run(&cli, &config, mode, format, &coordinator, &tools).await;

    // Always release the connection, also when the run failed
    if let Err(e) = coordinator.stop().await {
        warn!("Failed to stop the coordinator cleanly: {}", e);
    }

    outcome
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let Some(path) = &cli.log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("--log-file must name a file: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
    Ok(Some(guard))
}

/// Print the config sources and the merged result, without validating it
fn show_config(cli: &Cli) -> Result<()> {
    for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
        println!("{}", line);
    }

    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::figment(cli.config.as_deref())
            .extract()
            .context("Failed to load configuration")?
    };
    println!();
    println!("Effective configuration:");
    println!("{}", config.to_toml_redacted()?);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if let Some(router) = cli.router {
        config.router.strategy = router.into();
    }
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

fn build(config: &FileConfig) -> Result<(Arc<Coordinator>, Arc<ToolServerSession>)> {
    let params = config.execution_params();
    let tables = &config.tables;

    let client = reqwest::Client::builder()
        .timeout(params.handler_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let weather = Arc::new(
        WeatherHandler::new(client)
            .with_api_url(config.handlers.weather_api_url.clone())
            .with_timezone(config.handlers.weather_timezone.clone())
            .with_cities(tables.cities())
            .with_conditions(tables.weather_conditions()),
    );
    let data = Arc::new(DataHandler::new(&config.handlers.database_path)?);
    let finance = Arc::new(FinanceHandler::new(tables.exchange_rates())?);
    let information = Arc::new(InformationHandler::new(tables.knowledge_base()));

    let mut session = ToolServerSession::new(Arc::new(ToolServer::new(
        weather.clone(),
        data.clone(),
        finance.clone(),
    )));
    if config.tool_server.probe {
        session = session.with_probe(
            config.tool_server.endpoint(),
            Duration::from_secs(config.tool_server.connect_timeout_seconds),
        );
    }
    let session = Arc::new(session);

    let registry = HandlerRegistry::new()
        .with_handler(weather)
        .with_handler(data)
        .with_handler(finance)
        .with_handler(information);

    let router = build_router(config, &params)?;
    info!(
        "Router: {}, handlers: {}",
        router.strategy(),
        registry.len()
    );

    let coordinator = Coordinator::new(router, registry, session.clone()).with_params(params);
    Ok((Arc::new(coordinator), session))
}

fn build_router(config: &FileConfig, params: &ExecutionParams) -> Result<Arc<dyn QueryRouter>> {
    Ok(match config.router.strategy {
        RouterStrategy::Keyword => Arc::new(KeywordRouter::new(KeywordTable::default())),
        RouterStrategy::Model => {
            let gateway = HttpLlmGateway::from_config(&config.llm, params.classifier_timeout)?;
            Arc::new(ModelRouter::new(
                Arc::new(gateway),
                params.classifier_timeout,
            ))
        }
    })
}

async fn run(
    cli: &Cli,
    config: &FileConfig,
    mode: RunMode,
    format: OutputFormat,
    coordinator: &Arc<Coordinator>,
    tools: &ToolServerSession,
) -> Result<()> {
    match mode {
        RunMode::ShowConfig => show_config(cli),
        RunMode::ListTools => {
            let definitions = tools.list_tools()?;
            if format == OutputFormat::Json {
                println!("{}", ConsoleFormatter::format_tools_json(&definitions));
            } else {
                print!("{}", ConsoleFormatter::format_tools(&definitions));
            }
            Ok(())
        }
        RunMode::CallTool { tool, args } => {
            let args: Value = serde_json::from_str(&args).context("--args must be valid JSON")?;
            if !args.is_object() {
                bail!("--args must be a JSON object");
            }
            let result = tools.call_tool(&ToolCall::from_json(tool, args)).await?;
            println!("{}", ConsoleFormatter::format_value(&result));
            Ok(())
        }
        RunMode::Interactive => {
            let repl_config = ReplConfig {
                show_progress: config.repl.show_progress && !cli.quiet,
                history_file: config.repl.history_file.as_ref().map(PathBuf::from),
                prompt: config.repl.prompt.clone(),
            };
            InteractiveRepl::new(Arc::clone(coordinator))
                .with_config(repl_config)
                .with_output(OutputConfig {
                    format,
                    color: config.output.color,
                })
                .run()
                .await?;
            Ok(())
        }
        RunMode::Single(text) => {
            let query = Query::new(text);
            let outcome = if cli.quiet {
                coordinator.process_with_progress(&query, &NoProgress).await?
            } else {
                let progress = ProgressReporter::new();
                coordinator.process_with_progress(&query, &progress).await?
            };
            println!("{}", ConsoleFormatter::format(&outcome, format));
            Ok(())
        }
    }
}
