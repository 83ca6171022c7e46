//! Static knowledge base for the information domain

use serde::{Deserialize, Serialize};

/// One topic the information handler can explain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Canonical topic name
    pub name: String,
    /// Phrases that identify the topic inside a query (case-insensitive)
    #[serde(default)]
    pub aliases: Vec<String>,
    pub definition: String,
    #[serde(default)]
    pub key_concepts: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl Topic {
    fn matches(&self, lowered: &str) -> bool {
        std::iter::once(&self.name)
            .chain(self.aliases.iter())
            .any(|alias| lowered.contains(&alias.to_lowercase()))
    }
}

/// Ordered list of topics; the first topic mentioned in a query wins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase(Vec<Topic>);

impl KnowledgeBase {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self(topics)
    }

    pub fn lookup(&self, text: &str) -> Option<&Topic> {
        let lowered = text.to_lowercase();
        self.0.iter().find(|t| t.matches(&lowered))
    }

    pub fn topic_names(&self) -> Vec<&str> {
        self.0.iter().map(|t| t.name.as_str()).collect()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self(vec![
            Topic {
                name: "hexagonal architecture".to_string(),
                aliases: strings(&["arquitetura hexagonal", "ports and adapters"]),
                definition: "Hexagonal architecture (ports and adapters) isolates the application \
                             core from external dependencies behind explicit interfaces."
                    .to_string(),
                key_concepts: strings(&[
                    "Isolated application core",
                    "Ports (interfaces) for communication",
                    "Adapters implement the ports",
                    "Easy testing and maintenance",
                ]),
                benefits: strings(&[
                    "Testability",
                    "Simpler maintenance",
                    "Framework independence",
                    "Flexibility",
                ]),
            },
            Topic {
                name: "mcp".to_string(),
                aliases: strings(&["model context protocol"]),
                definition: "The Model Context Protocol (MCP) is an open protocol that standardises \
                             how applications provide context and tools to LLMs."
                    .to_string(),
                key_concepts: strings(&[
                    "Standardised protocol",
                    "LLM-application integration",
                    "Tools and resources",
                    "Client-server",
                ]),
                benefits: strings(&[
                    "Interoperability",
                    "Reusability",
                    "Security",
                    "Scalability",
                ]),
            },
            Topic {
                name: "langgraph".to_string(),
                aliases: Vec::new(),
                definition: "LangGraph is a library for building multi-agent LLM applications as \
                             state graphs."
                    .to_string(),
                key_concepts: strings(&[
                    "State graphs",
                    "Nodes (agents)",
                    "Edges (transitions)",
                    "Agent orchestration",
                ]),
                benefits: strings(&[
                    "Complex workflows",
                    "Agent coordination",
                    "Persistent state",
                    "Extensible",
                ]),
            },
            Topic {
                name: "multi-agent".to_string(),
                aliases: strings(&["multi-agente", "multiagente", "multi agent"]),
                definition: "A multi-agent system is an architecture in which several autonomous, \
                             specialised agents collaborate to solve a problem."
                    .to_string(),
                key_concepts: strings(&[
                    "Specialised agents",
                    "Communication between agents",
                    "Central orchestrator",
                    "Domain specialisation",
                ]),
                benefits: strings(&[
                    "Modularity",
                    "Specialisation",
                    "Scalability",
                    "Easier maintenance",
                ]),
            },
        ])
    }
}
