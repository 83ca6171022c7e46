//! Registry of domain handlers, keyed by the domain they serve

use crate::ports::domain_handler::DomainHandler;
use std::collections::BTreeMap;
use std::sync::Arc;
use super_agent_domain::Domain;

/// Domain → handler map, closed once handed to the coordinator
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: BTreeMap<Domain, Arc<dyn DomainHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its own domain, replacing any previous one
    pub fn with_handler(mut self, handler: Arc<dyn DomainHandler>) -> Self {
        self.handlers.insert(handler.domain(), handler);
        self
    }

    pub fn get(&self, domain: Domain) -> Option<Arc<dyn DomainHandler>> {
        self.handlers.get(&domain).cloned()
    }

    pub fn contains(&self, domain: Domain) -> bool {
        self.handlers.contains_key(&domain)
    }

    /// Registered domains, in declaration order
    pub fn domains(&self) -> Vec<Domain> {
        self.handlers.keys().copied().collect()
    }

    /// Domains of the closed set that have no handler
    pub fn missing(&self) -> Vec<Domain> {
        Domain::ALL
            .into_iter()
            .filter(|d| !self.contains(*d))
            .collect()
    }

    /// Capabilities of every handler, grouped by domain
    pub fn capabilities(&self) -> Vec<(Domain, Vec<String>)> {
        self.handlers
            .iter()
            .map(|(domain, handler)| (*domain, handler.capabilities()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("domains", &self.domains())
            .finish()
    }
}
