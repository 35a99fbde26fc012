//! Prompt definition loading.
//!
//! The built-in definition covers the ask flow; a YAML file can override
//! it for deployments that want different wording.

use crate::types::PromptDefinition;
use faqdex_core::{AppError, AppResult};
use std::path::Path;

/// Identifier of the built-in ask prompt.
pub const DEFAULT_PROMPT_ID: &str = "faq.answer.default";

/// Built-in template rendering the matched FAQ entry and the user
/// question into a generation prompt.
const DEFAULT_TEMPLATE: &str = "\
Question: {{canonical_question}}
{{#if notes}}Notes: {{notes}}
{{/if}}Answer: {{answer}}

User Question: {{question}}
";

const DEFAULT_SYSTEM: &str = "\
You answer user questions using the FAQ entry provided. \
Reply with the answer in your own words; if the entry does not cover \
the question, say so plainly.";

/// Load a prompt definition.
///
/// With `path` set, the definition is read from that YAML file; without
/// it, the built-in definition is returned.
pub fn load_prompt(path: Option<&Path>) -> AppResult<PromptDefinition> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                AppError::Prompt(format!("Failed to read prompt file {:?}: {}", path, e))
            })?;

            let definition: PromptDefinition = serde_yaml::from_str(&contents).map_err(|e| {
                AppError::Prompt(format!("Failed to parse prompt file {:?}: {}", path, e))
            })?;

            tracing::debug!("Loaded prompt definition '{}' from {:?}", definition.id, path);
            Ok(definition)
        }
        None => Ok(default_prompt()),
    }
}

/// The built-in prompt definition.
pub fn default_prompt() -> PromptDefinition {
    PromptDefinition {
        id: DEFAULT_PROMPT_ID.to_string(),
        system: Some(DEFAULT_SYSTEM.to_string()),
        template: DEFAULT_TEMPLATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_prompt() {
        let def = load_prompt(None).unwrap();
        assert_eq!(def.id, DEFAULT_PROMPT_ID);
        assert!(def.template.contains("{{question}}"));
        assert!(def.template.contains("{{answer}}"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "id: faq.answer.custom\ntemplate: \"Q: {{{{question}}}}\"\n"
        )
        .unwrap();

        let def = load_prompt(Some(file.path())).unwrap();
        assert_eq!(def.id, "faq.answer.custom");
        assert_eq!(def.template, "Q: {{question}}");
    }

    #[test]
    fn test_missing_file_is_prompt_error() {
        let err = load_prompt(Some(Path::new("/nonexistent/prompt.yaml"))).unwrap_err();
        assert!(matches!(err, AppError::Prompt(_)));
    }

    #[test]
    fn test_malformed_file_is_prompt_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "template: [not, a, string, mapping").unwrap();

        let err = load_prompt(Some(file.path())).unwrap_err();
        assert!(matches!(err, AppError::Prompt(_)));
    }
}
