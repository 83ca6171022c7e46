//! Progress reporting while a query is processed

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use super_agent_application::ports::progress::ProgressNotifier;
use super_agent_domain::{Domain, RoutingDecision};

/// Spinner shown from routing until the handler completes.
///
/// The spinner is cleared when the reporter is dropped, so an aborted query
/// never leaves it on screen.
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message("Routing query...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }

    /// A reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            spinner: ProgressBar::hidden(),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn message(&self) -> String {
        self.spinner.message()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_routed(&self, decision: &RoutingDecision) {
        self.spinner.set_prefix(decision.domain.to_string());
        self.spinner.set_message("routed");
    }

    fn on_handler_start(&self, domain: Domain) {
        self.spinner.set_message(format!("Running {} handler...", domain));
    }

    fn on_handler_complete(&self, domain: Domain, success: bool) {
        let status = if success {
            format!("{} {}", "v".green(), domain)
        } else {
            format!("{} {} (failed)", "x".red(), domain)
        };
        self.spinner.set_message(status);
        self.spinner.finish_and_clear();
    }
}
