//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use super_agent_domain::{OutputFormat, RouterStrategy};

/// Output format for processed queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Only the synthesized answer
    Answer,
    /// Routing decision, handler results and the answer
    Full,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Answer => OutputFormat::Answer,
            OutputFormatArg::Full => OutputFormat::Full,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Routing strategy selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RouterArg {
    /// Fixed keyword table (offline, deterministic)
    Keyword,
    /// Ask the configured LLM to classify the query
    Model,
}

impl From<RouterArg> for RouterStrategy {
    fn from(arg: RouterArg) -> Self {
        match arg {
            RouterArg::Keyword => RouterStrategy::Keyword,
            RouterArg::Model => RouterStrategy::Model,
        }
    }
}

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    ShowConfig,
    ListTools,
    CallTool { tool: String, args: String },
    Interactive,
    Single(String),
}

/// CLI arguments for super-agent
#[derive(Parser, Debug)]
#[command(name = "super-agent")]
#[command(author, version, about = "Route a question to the right specialist and answer it")]
#[command(long_about = r#"
Super Agent classifies a free-text question into one domain (weather, data,
finance or information), runs that domain's handler and prints the answer.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./super-agent.toml  Project-level config
3. ~/.config/super-agent/config.toml   Global config

Example:
  super-agent "Como está o clima em São Paulo?"
  super-agent --output full "Converta 1000 USD para BRL"
  super-agent --router model "quantas reservas temos?"
  super-agent -i
  super-agent --call convert_currency --args '{"amount": 10, "from_currency": "USD", "to_currency": "EUR"}'
"#)]
pub struct Cli {
    /// The question to answer (not required in interactive mode)
    pub query: Option<String>,

    /// Start an interactive session
    #[arg(short, long)]
    pub interactive: bool,

    /// Routing strategy (overrides [router] strategy)
    #[arg(long, value_enum)]
    pub router: Option<RouterArg>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Print the tool catalogue and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Invoke one tool directly
    #[arg(long, value_name = "TOOL")]
    pub call: Option<String>,

    /// JSON object of tool arguments (used with --call)
    #[arg(long, value_name = "JSON", requires = "call")]
    pub args: Option<String>,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The run mode selected by the flags, or `None` when there is nothing to do
    pub fn mode(&self) -> Option<RunMode> {
        if self.show_config {
            return Some(RunMode::ShowConfig);
        }
        if self.list_tools {
            return Some(RunMode::ListTools);
        }
        if let Some(tool) = &self.call {
            return Some(RunMode::CallTool {
                tool: tool.clone(),
                args: self.args.clone().unwrap_or_else(|| "{}".to_string()),
            });
        }
        if self.interactive {
            return Some(RunMode::Interactive);
        }
        self.query.clone().map(RunMode::Single)
    }

    /// Default log filter for the verbosity count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
