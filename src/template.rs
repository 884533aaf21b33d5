//! Template interpolation for profile files
//!
//! Handles `{{ env.NAME }}` interpolation in profile values so that
//! credentials live in the environment rather than on disk.

use crate::error::{Error, Result};
use crate::types::StringMap;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Regex for matching template variables: {{ env.NAME }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*env\.([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}").unwrap()
});

/// Context for template interpolation
///
/// Lookups check the explicit overrides first, then fall back to the
/// process environment. Overrides exist so tests stay deterministic
/// without mutating the environment.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    overrides: StringMap,
}

impl TemplateContext {
    /// Create a context that resolves against the process environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override value (checked before the process environment)
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), value.into());
        self
    }

    /// Look up a variable by name
    pub fn get(&self, name: &str) -> Option<String> {
        if let Some(value) = self.overrides.get(name) {
            return Some(value.clone());
        }
        std::env::var(name).ok()
    }
}

/// Render a template string with the given context
pub fn render(template: &str, ctx: &TemplateContext) -> Result<String> {
    let mut result = template.to_string();
    let mut missing = Vec::new();

    for cap in TEMPLATE_REGEX.captures_iter(template) {
        let full_match = cap.get(0).unwrap().as_str();
        let var_name = cap.get(1).unwrap().as_str();

        match ctx.get(var_name) {
            Some(value) => {
                result = result.replace(full_match, &value);
            }
            None => {
                missing.push(format!("env.{var_name}"));
            }
        }
    }

    if missing.is_empty() {
        Ok(result)
    } else {
        Err(Error::undefined_var(missing.join(", ")))
    }
}

/// Check if a string contains template variables
pub fn has_templates(s: &str) -> bool {
    TEMPLATE_REGEX.is_match(s)
}

/// Extract all variable names from a template
pub fn extract_variables(template: &str) -> Vec<String> {
    TEMPLATE_REGEX
        .captures_iter(template)
        .map(|cap| cap.get(1).unwrap().as_str().to_string())
        .collect()
}

/// Render all string values in a JSON object/value
pub fn render_value(value: &Value, ctx: &TemplateContext) -> Result<Value> {
    match value {
        Value::String(s) => {
            if has_templates(s) {
                Ok(Value::String(render(s, ctx)?))
            } else {
                Ok(value.clone())
            }
        }
        Value::Object(map) => {
            let mut new_map = serde_json::Map::new();
            for (k, v) in map {
                new_map.insert(k.clone(), render_value(v, ctx)?);
            }
            Ok(Value::Object(new_map))
        }
        Value::Array(arr) => {
            let new_arr: Result<Vec<Value>> = arr.iter().map(|v| render_value(v, ctx)).collect();
            Ok(Value::Array(new_arr?))
        }
        _ => Ok(value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_substitution() {
        let ctx = TemplateContext::new().with_var("SCRAPER_USERNAME", "alice");
        let result = render("{{ env.SCRAPER_USERNAME }}", &ctx).unwrap();
        assert_eq!(result, "alice");
    }

    #[test]
    fn test_multiple_substitutions() {
        let ctx = TemplateContext::new()
            .with_var("API_HOST", "realtime.example.io")
            .with_var("API_VERSION", "v1");

        let result = render(
            "https://{{ env.API_HOST }}/{{ env.API_VERSION }}/queries",
            &ctx,
        )
        .unwrap();
        assert_eq!(result, "https://realtime.example.io/v1/queries");
    }

    #[test]
    fn test_undefined_variable() {
        let ctx = TemplateContext::new();
        let result = render("{{ env.PAGEFETCH_DEFINITELY_UNSET_VAR }}", &ctx);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("env.PAGEFETCH_DEFINITELY_UNSET_VAR"));
    }

    #[test]
    fn test_no_templates() {
        let ctx = TemplateContext::new();
        let result = render("plain string without templates", &ctx).unwrap();
        assert_eq!(result, "plain string without templates");
    }

    #[test]
    fn test_has_templates() {
        assert!(has_templates("{{ env.KEY }}"));
        assert!(has_templates("prefix {{ env.VAR }} suffix"));
        assert!(!has_templates("no templates here"));
        assert!(!has_templates("{ not a template }"));
        // Only env.* names are recognized
        assert!(!has_templates("{{ config.key }}"));
    }

    #[test]
    fn test_extract_variables() {
        let vars = extract_variables("{{ env.USER_A }} and {{ env.USER_B }}");
        assert_eq!(vars, vec!["USER_A", "USER_B"]);
    }

    #[test]
    fn test_render_value_object() {
        let ctx = TemplateContext::new().with_var("SECRET", "value123");

        let input = json!({
            "username": "scraper",
            "password": "{{ env.SECRET }}",
            "nested": { "token": "{{ env.SECRET }}" }
        });

        let result = render_value(&input, &ctx).unwrap();
        assert_eq!(
            result,
            json!({
                "username": "scraper",
                "password": "value123",
                "nested": { "token": "value123" }
            })
        );
    }

    #[test]
    fn test_render_value_array() {
        let ctx = TemplateContext::new().with_var("BRAND", "zara");
        let input = json!(["{{ env.BRAND }}", "plain"]);
        let result = render_value(&input, &ctx).unwrap();
        assert_eq!(result, json!(["zara", "plain"]));
    }

    #[test]
    fn test_whitespace_in_template() {
        let ctx = TemplateContext::new().with_var("KEY", "value");

        assert_eq!(render("{{env.KEY}}", &ctx).unwrap(), "value");
        assert_eq!(render("{{ env.KEY }}", &ctx).unwrap(), "value");
        assert_eq!(render("{{  env.KEY  }}", &ctx).unwrap(), "value");
    }
}
