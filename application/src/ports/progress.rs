//! Progress notification port
//!
//! Defines the interface for reporting progress while a query is processed.

use super_agent_domain::{Domain, RoutingDecision};

/// Callback for progress updates during query processing
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, log lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once the router has picked a domain
    fn on_routed(&self, decision: &RoutingDecision);

    /// Called right before the handler runs
    fn on_handler_start(&self, domain: Domain);

    /// Called when the handler has produced a result
    fn on_handler_complete(&self, domain: Domain, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_routed(&self, _decision: &RoutingDecision) {}
    fn on_handler_start(&self, _domain: Domain) {}
    fn on_handler_complete(&self, _domain: Domain, _success: bool) {}
}
