//! Template renderer used for file contents.
//! Contents go through MiniJinja first, then `[key]` placeholders are resolved
//! against the scalar members of the rendering context.
//!
//! Templates use `<% %>` blocks, `<%= %>` expressions and `<%# %>` comments so
//! that GitHub Actions `${{ ... }}` expressions pass through untouched. The data
//! is available both at the top level and as `it`.
use crate::error::Result;
use crate::path::{placeholder_map, resolve_placeholders};
use cruet::Inflector;
use minijinja::syntax::SyntaxConfig;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with the case-conversion filters registered.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the delimiter configuration is rejected
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_syntax(
            SyntaxConfig::builder()
                .block_delimiters("<%", "%>")
                .variable_delimiters("<%=", "%>")
                .comment_delimiters("<%#", "%>")
                .build()?,
        );
        env.set_keep_trailing_newline(true);
        env.add_filter("snake_case", |value: String| value.to_snake_case());
        env.add_filter("kebab_case", |value: String| value.to_kebab_case());
        env.add_filter("camel_case", |value: String| value.to_camel_case());
        env.add_filter("pascal_case", |value: String| value.to_pascal_case());
        env.add_filter("screaming_snake_case", |value: String| {
            value.to_screaming_snake_case()
        });
        Ok(Self { env })
    }
}

/// Exposes the data under `it` as well as at the top level.
fn with_alias(context: &serde_json::Value) -> serde_json::Value {
    let mut aliased = context.clone();
    if let Some(object) = aliased.as_object_mut() {
        object.insert("it".to_string(), context.clone());
    }
    aliased
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja, then resolves placeholders.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` on syntax or evaluation errors
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let rendered = self.env.render_str(template, with_alias(context))?;
        Ok(resolve_placeholders(&rendered, &placeholder_map(context)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn renderer() -> MiniJinjaRenderer {
        MiniJinjaRenderer::new().unwrap()
    }

    #[test]
    fn test_renders_expressions_and_placeholders() {
        let context = json!({"name": "demo", "port": 8080});

        let result = renderer().render("<%= name %> [name]:[port] [unknown]", &context).unwrap();
        assert_eq!(result, "demo demo:8080 [unknown]");
    }

    #[test]
    fn test_data_is_also_available_as_it() {
        let context = json!({"name": "demo"});
        assert_eq!(renderer().render("<%= it.name %>", &context).unwrap(), "demo");
    }

    #[test]
    fn test_github_expressions_pass_through() {
        let template = "token: ${{ secrets.GITHUB_TOKEN }}\nname: [name]\n";
        let result = renderer().render(template, &json!({"name": "demo"})).unwrap();
        assert_eq!(result, "token: ${{ secrets.GITHUB_TOKEN }}\nname: demo\n");
    }

    #[test]
    fn test_blocks() {
        let context = json!({"environments": [{"name": "dev"}, {"name": "ci"}]});
        let template = "<% for env in environments %><%= env.name %>;<% endfor %>";
        assert_eq!(renderer().render(template, &context).unwrap(), "dev;ci;");
    }

    #[test]
    fn test_case_filters() {
        let context = json!({"name": "My Service"});

        assert_eq!(renderer().render("<%= name | kebab_case %>", &context).unwrap(), "my-service");
        assert_eq!(renderer().render("<%= name | snake_case %>", &context).unwrap(), "my_service");
    }

    #[test]
    fn test_keeps_trailing_newline() {
        assert_eq!(renderer().render("a\n", &json!({})).unwrap(), "a\n");
    }

    #[test]
    fn test_syntax_error_is_reported() {
        assert!(renderer().render("<% if %>", &json!({})).is_err());
    }
}
