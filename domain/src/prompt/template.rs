//! Prompt templates for query classification

use crate::core::domain::Domain;

/// Templates for asking a model which domain should handle a query
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the classifier
    pub fn classifier_system() -> &'static str {
        r#"You are a supervisor coordinating specialised agents.
Your only task is to decide which agent should handle the user's query.
Answer with exactly one identifier from the list you are given and nothing else."#
    }

    /// User prompt enumerating the query and every valid identifier
    pub fn classifier_prompt(query: &str) -> String {
        let mut prompt = format!(
            r#"User query: {}

Available agents:
"#,
            query
        );

        for domain in Domain::ALL {
            prompt.push_str(&format!("- {}: {}\n", domain.as_str(), domain.description()));
        }

        prompt.push_str(
            r#"
Reply with ONLY the identifier of the most appropriate agent.
Identifier:"#,
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_prompt_lists_every_domain() {
        let prompt = PromptTemplate::classifier_prompt("Como está o clima?");
        assert!(prompt.contains("User query: Como está o clima?"));
        for domain in Domain::ALL {
            assert!(prompt.contains(&format!("- {}:", domain.as_str())));
        }
    }

    #[test]
    fn test_classifier_system_demands_single_identifier() {
        assert!(PromptTemplate::classifier_system().contains("exactly one identifier"));
    }
}
