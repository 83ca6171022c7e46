//! Console output formatter for processed queries

use colored::Colorize;
use serde_json::Value;
use super_agent_application::ProcessOutcome;
use super_agent_domain::{AnswerFormatter, OutputFormat, ToolDefinition};

/// Formats query outcomes and tool output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an outcome in the requested style
    pub fn format(outcome: &ProcessOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Answer => Self::format_answer(outcome),
            OutputFormat::Full => Self::format_full(outcome),
            OutputFormat::Json => Self::format_json(outcome),
        }
    }

    /// The answer in a titled block
    pub fn format_answer(outcome: &ProcessOutcome) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Super Agent ===".cyan().bold()));
        output.push_str(&format!("{} {}\n\n", "Q:".bold(), outcome.query.text()));
        output.push_str(&outcome.answer);
        output.push('\n');

        output
    }

    /// Routing decision, every handler result and the answer
    pub fn format_full(outcome: &ProcessOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Super Agent Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Query:".cyan().bold(),
            outcome.query.text()
        ));

        // Routing
        output.push_str(&Self::section_header("Routing"));
        output.push_str(&format!(
            "{} {}\n",
            "Domain:".yellow().bold(),
            outcome.decision.domain
        ));
        if let Some(rationale) = &outcome.decision.rationale {
            output.push_str(&format!("{} {}\n", "Rationale:".yellow().bold(), rationale));
        }

        // Handler results
        output.push_str(&Self::section_header("Handler Results"));
        for result in &outcome.results {
            let title = format!("── {} ──", result.agent());
            let title = if result.is_success() {
                title.green().bold()
            } else {
                title.red().bold()
            };
            output.push_str(&format!(
                "\n{}\n{}\n",
                title,
                Self::indent(&AnswerFormatter::format(result), "  ")
            ));
        }

        // Answer
        output.push_str(&Self::section_header("Answer"));
        output.push_str(&format!("\n{}\n", outcome.answer));
        output.push_str(&format!(
            "\n{}\n",
            format!("Processed in {} ms", outcome.elapsed.as_millis()).dimmed()
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &ProcessOutcome) -> String {
        Self::format_value(&outcome.to_json())
    }

    /// Pretty-printed JSON value (tool results)
    pub fn format_value(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// The tool catalogue with each tool's parameters
    pub fn format_tools(tools: &[&ToolDefinition]) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Available tools:".cyan().bold()));
        for tool in tools {
            output.push_str(&format!(
                "\n  {} - {}\n",
                tool.name.yellow().bold(),
                tool.description
            ));
            for param in &tool.parameters {
                let required = if param.required { "" } else { ", optional" };
                output.push_str(&format!(
                    "      {} ({}{}): {}\n",
                    param.name, param.param_type, required, param.description
                ));
            }
        }

        output
    }

    /// The tool catalogue as JSON, one entry per tool with its input schema
    pub fn format_tools_json(tools: &[&ToolDefinition]) -> String {
        let entries: Vec<Value> = tools
            .iter()
            .map(|tool| {
                serde_json::json!({
                    "name": tool.name,
                    "description": tool.description,
                    "input_schema": tool.input_schema(),
                })
            })
            .collect();
        Self::format_value(&Value::Array(entries))
    }

    /// A user-facing error line
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use super_agent_domain::tool::catalog::default_tools;
    use super_agent_domain::{Domain, HandlerResult, Query, RoutingDecision};

    fn outcome() -> ProcessOutcome {
        colored::control::set_override(false);
        ProcessOutcome {
            query: Query::new("Converta 1000 USD para BRL"),
            decision: RoutingDecision::new(Domain::Finance).with_rationale("keyword match"),
            results: vec![HandlerResult::success_json(
                Domain::Finance,
                json!({
                    "operation": "currency_conversion",
                    "original_amount": 1000,
                    "converted_amount": 5000.0,
                    "from_currency": "USD",
                    "to_currency": "BRL",
                }),
            )],
            answer: "1000 USD = 5000.0 BRL".to_string(),
            elapsed: Duration::from_millis(3),
        }
    }

    #[test]
    fn test_format_answer() {
        let text = ConsoleFormatter::format(&outcome(), OutputFormat::Answer);
        assert!(text.contains("Q: Converta 1000 USD para BRL"));
        assert!(text.ends_with("1000 USD = 5000.0 BRL\n"));
    }

    #[test]
    fn test_format_full() {
        let text = ConsoleFormatter::format(&outcome(), OutputFormat::Full);
        assert!(text.contains("Domain: finance"));
        assert!(text.contains("Rationale: keyword match"));
        assert!(text.contains("── finance ──"));
        assert!(text.contains("  1000 USD = 5000.0 BRL"));
        assert!(text.contains("Processed in 3 ms"));
    }

    #[test]
    fn test_format_json() {
        let text = ConsoleFormatter::format(&outcome(), OutputFormat::Json);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["domain"], "finance");
        assert_eq!(value["answer"], "1000 USD = 5000.0 BRL");
        assert_eq!(value["elapsed_ms"], 3);
    }

    #[test]
    fn test_format_tools() {
        colored::control::set_override(false);
        let tools = default_tools();
        let defs: Vec<&ToolDefinition> = tools.iter().map(|(_, t)| t).collect();
        let text = ConsoleFormatter::format_tools(&defs);
        assert!(text.contains("get_weather - "));
        assert!(text.contains("compound (boolean, optional)"));
    }

    #[test]
    fn test_format_tools_json() {
        let tools = default_tools();
        let defs: Vec<&ToolDefinition> = tools.iter().map(|(_, t)| t).collect();
        let value: Value = serde_json::from_str(&ConsoleFormatter::format_tools_json(&defs)).unwrap();
        assert_eq!(value[0]["name"], "get_weather");
        assert_eq!(value[0]["input_schema"]["required"], serde_json::json!(["city"]));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
