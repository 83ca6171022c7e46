//! REPL (Read-Eval-Print Loop) for interactive queries

use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::Arc;
use super_agent_application::{Coordinator, NoProgress};
use super_agent_domain::Query;
use tracing::warn;

const HISTORY_SIZE: usize = 1000;
const EXIT_COMMANDS: [&str; 4] = ["sair", "exit", "quit", "q"];

/// Whether a line ends the session (case-insensitive)
pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    EXIT_COMMANDS.iter().any(|c| line.eq_ignore_ascii_case(c))
}

/// Interactive query REPL
pub struct InteractiveRepl {
    coordinator: Arc<Coordinator>,
    config: ReplConfig,
    output: OutputConfig,
}

impl InteractiveRepl {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self {
            coordinator,
            config: ReplConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();

        let Some(path) = self.config.history_path() else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_SIZE, path) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("History disabled: {}", e);
                editor
            }
        }
    }

    /// Run the interactive REPL until an exit keyword, Ctrl-C or Ctrl-D
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(self.config.prompt.clone()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }
                    if is_exit_command(line) {
                        println!("Bye!");
                        break;
                    }

                    self.process_line(line).await;
                }
                _ => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Super Agent - Interactive          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Domains: {}",
            self.coordinator
                .registry()
                .domains()
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Router:  {}", self.coordinator.router().strategy());
        println!();
        println!("Type a question, or one of {} to leave.", EXIT_COMMANDS.join(", "));
        println!();
    }

    async fn process_line(&self, line: &str) {
        let query = Query::new(line);

        let result = if self.config.show_progress {
            let progress = ProgressReporter::new();
            self.coordinator
                .process_with_progress(&query, &progress)
                .await
        } else {
            self.coordinator
                .process_with_progress(&query, &NoProgress)
                .await
        };

        match result {
            Ok(outcome) => println!("{}", ConsoleFormatter::format(&outcome, self.output.format)),
            Err(e) => eprintln!("{}", ConsoleFormatter::format_error(&e.to_string())),
        }
        println!();
    }
}
