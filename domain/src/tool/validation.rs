//! Tool call validation
//!
//! Pure checks of a [`ToolCall`] against its [`ToolDefinition`]; no I/O.
//! Range checks that depend on what a tool does live with the tool server.

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Checks presence of required parameters, rejects unknown ones and
/// verifies each argument's JSON type
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        for param in &definition.parameters {
            if param.required && !call.arguments.contains_key(&param.name) {
                return Err(format!(
                    "Missing required parameter '{}' for tool '{}'",
                    param.name, definition.name
                ));
            }
        }

        for (arg_name, value) in &call.arguments {
            let Some(param) = definition.parameter(arg_name) else {
                return Err(format!(
                    "Unknown parameter '{}' for tool '{}'",
                    arg_name, definition.name
                ));
            };
            if !param.param_type.accepts(value) {
                return Err(format!(
                    "Parameter '{}' for tool '{}' must be a {}",
                    arg_name, definition.name, param.param_type
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::{ParamType, ToolParameter};

    fn definition() -> ToolDefinition {
        ToolDefinition::new("test", "test tool")
            .with_parameter(ToolParameter::new("amount", "Amount", true, ParamType::Number))
            .with_parameter(ToolParameter::new("note", "Note", false, ParamType::String))
    }

    #[test]
    fn test_validator_missing_required() {
        let result = DefaultToolValidator.validate(&ToolCall::new("test"), &definition());
        assert!(result.unwrap_err().contains("Missing required parameter 'amount'"));
    }

    #[test]
    fn test_validator_unknown_param() {
        let call = ToolCall::new("test").with_arg("amount", 1).with_arg("extra", "x");
        let result = DefaultToolValidator.validate(&call, &definition());
        assert!(result.unwrap_err().contains("Unknown parameter 'extra'"));
    }

    #[test]
    fn test_validator_wrong_type() {
        let call = ToolCall::new("test").with_arg("amount", "ten");
        let result = DefaultToolValidator.validate(&call, &definition());
        assert!(result.unwrap_err().contains("must be a number"));
    }

    #[test]
    fn test_validator_valid_call() {
        let call = ToolCall::new("test").with_arg("amount", 10.5).with_arg("note", "ok");
        assert!(DefaultToolValidator.validate(&call, &definition()).is_ok());
    }
}
