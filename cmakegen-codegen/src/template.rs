//! Named-placeholder text templates.
//!
//! Placeholders use the `@NAME@` form known from CMake's `configure_file`,
//! so they never clash with `${VAR}` references in the template text.

use eyre::{Result, bail};
use indexmap::IndexMap;

/// Values substituted into a [`Template`], in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TemplateVars {
    values: IndexMap<&'static str, String>,
}

impl TemplateVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// An immutable template with `@NAME@` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    name: &'static str,
    text: &'static str,
}

impl Template {
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }

    /// Substitute every placeholder. A placeholder without a value is an error.
    pub fn render(&self, vars: &TemplateVars) -> Result<String> {
        let mut out = String::with_capacity(self.text.len());
        for segment in segments(self.text) {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder(name) => match vars.get(name) {
                    Some(value) => out.push_str(value),
                    None => bail!("template '{}' has no value for @{}@", self.name, name),
                },
            }
        }
        Ok(out)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

/// Split template text into literal runs and placeholders.
fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find('@') {
        let after = &rest[start + 1..];
        let placeholder = after
            .find('@')
            .map(|end| &after[..end])
            .filter(|name| is_placeholder_name(name));

        match placeholder {
            Some(name) => {
                if start > 0 {
                    out.push(Segment::Text(&rest[..start]));
                }
                out.push(Segment::Placeholder(name));
                rest = &after[name.len() + 1..];
            }
            None => {
                // Lone '@': keep it as text
                out.push(Segment::Text(&rest[..=start]));
                rest = after;
            }
        }
    }

    if !rest.is_empty() {
        out.push(Segment::Text(rest));
    }
    out
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: Template =
        Template::new("greeting", "project(@PROJECT@)\n# @PROJECT@ v@VERSION@\n");

    #[test]
    fn test_render_substitutes_all() {
        let vars = TemplateVars::new()
            .set("PROJECT", "Limbo")
            .set("VERSION", "3.5");
        assert_eq!(
            GREETING.render(&vars).unwrap(),
            "project(Limbo)\n# Limbo v3.5\n"
        );
    }

    #[test]
    fn test_render_missing_value() {
        let vars = TemplateVars::new().set("PROJECT", "Limbo");
        let err = GREETING.render(&vars).unwrap_err();
        assert_eq!(err.to_string(), "template 'greeting' has no value for @VERSION@");
    }

    #[test]
    fn test_cmake_references_untouched() {
        let template = Template::new("t", "add_library(@module@ STATIC ${@MODULE@_SOURCES})");
        let vars = TemplateVars::new()
            .set("module", "hpwl")
            .set("MODULE", "HPWL");
        assert_eq!(
            template.render(&vars).unwrap(),
            "add_library(hpwl STATIC ${HPWL_SOURCES})"
        );
    }

    #[test]
    fn test_lone_at_sign_is_text() {
        let template = Template::new("t", "mail me@ home @X@ and @ done");
        let vars = TemplateVars::new().set("X", "1");
        assert_eq!(template.render(&vars).unwrap(), "mail me@ home 1 and @ done");
    }

    #[test]
    fn test_set_replaces_binding() {
        let vars = TemplateVars::new().set("A", "1").set("A", "2");
        assert_eq!(vars.get("A"), Some("2"));
    }
}
