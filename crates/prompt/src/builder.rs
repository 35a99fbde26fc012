//! Prompt rendering.

use crate::types::{BuiltPrompt, BuiltPromptMetadata, PromptDefinition};
use faqdex_core::{AppError, AppResult};
use handlebars::Handlebars;
use std::collections::HashMap;

/// Build a prompt from a definition and resolved variables.
///
/// Renders the template with Handlebars and carries the definition's
/// system message through unchanged.
pub fn build_prompt(
    definition: &PromptDefinition,
    variables: HashMap<String, String>,
) -> AppResult<BuiltPrompt> {
    tracing::debug!("Building prompt: {}", definition.id);

    let user = render_template(&definition.template, &variables)?;

    Ok(BuiltPrompt {
        system: definition.system.clone(),
        user,
        metadata: BuiltPromptMetadata {
            source_prompt_id: definition.id.clone(),
            resolved_variables: variables,
        },
    })
}

/// Variables for the ask flow: the user question plus the matched FAQ
/// entry's canonical question, notes, and answer text.
pub fn match_variables(
    question: &str,
    canonical_question: &str,
    notes: &str,
    answer: &str,
) -> HashMap<String, String> {
    let mut variables = HashMap::new();
    variables.insert("question".to_string(), question.to_string());
    variables.insert(
        "canonical_question".to_string(),
        canonical_question.to_string(),
    );
    variables.insert("notes".to_string(), notes.to_string());
    variables.insert("answer".to_string(), answer.to_string());
    variables
}

/// Render a Handlebars template with variables.
fn render_template(template: &str, variables: &HashMap<String, String>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Plain text output, no HTML escaping
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    let rendered = handlebars
        .render("prompt", &variables)
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))?;

    Ok(rendered)
}
