//! Strict `{variable}` substitution for the embedded document templates.
//!
//! - `{name}` is replaced by the bound value of `name`
//! - `{{` and `}}` render as literal braces
//! - a placeholder with no binding is an error, never an empty string

use std::collections::BTreeMap;
use thiserror::Error;

/// Error raised when a template cannot be rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder names a variable with no binding.
    #[error("template '{template}': unbound variable '{name}' at byte {position}")]
    Unbound {
        template: &'static str,
        name: String,
        position: usize,
    },

    /// A `{` has no closing `}` on the same line.
    #[error("template '{template}': unclosed '{{' at byte {position}")]
    Unclosed {
        template: &'static str,
        position: usize,
    },

    /// A placeholder whose name is not a plain identifier (e.g. `{}` or `{a b}`).
    #[error("template '{template}': malformed placeholder '{{{text}}}' at byte {position}")]
    Malformed {
        template: &'static str,
        text: String,
        position: usize,
    },
}

/// Variable bindings for one render.
#[derive(Debug, Default, Clone)]
pub struct Bindings {
    values: BTreeMap<&'static str, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    pub fn bind(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Render `source` (identified as `template` in errors) against `bindings`.
pub fn render(
    template: &'static str,
    source: &str,
    bindings: &Bindings,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(source.len() + 256);
    let mut rest = source;
    let mut offset = 0;

    while let Some(idx) = rest.find(['{', '}']) {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];
        let position = offset + idx;

        let consumed = if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            tail.len() - after.len()
        } else if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            tail.len() - after.len()
        } else if tail.starts_with('}') {
            out.push('}');
            1
        } else {
            let close = tail[1..]
                .find(['}', '\n'])
                .filter(|&end| tail.as_bytes()[end + 1] == b'}')
                .ok_or(TemplateError::Unclosed { template, position })?;
            let name = &tail[1..close + 1];
            if !is_identifier(name) {
                return Err(TemplateError::Malformed {
                    template,
                    text: name.to_string(),
                    position,
                });
            }
            let value = bindings.get(name).ok_or_else(|| TemplateError::Unbound {
                template,
                name: name.to_string(),
                position,
            })?;
            out.push_str(value);
            close + 2
        };

        rest = &tail[consumed..];
        offset = position + consumed;
    }

    out.push_str(rest);
    Ok(out)
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_str(source: &str, bindings: &Bindings) -> Result<String, TemplateError> {
        render("test", source, bindings)
    }

    #[test]
    fn substitutes_bound_variables() {
        let b = Bindings::new()
            .bind("step_id", "STEP-02")
            .bind("step_name", "Infrastructure Baseline");
        let out = render_str("# {step_id} — {step_name}", &b).unwrap();
        assert_eq!(out, "# STEP-02 — Infrastructure Baseline");
    }

    #[test]
    fn plain_text_passes_through() {
        let out = render_str("no placeholders here\n", &Bindings::new()).unwrap();
        assert_eq!(out, "no placeholders here\n");
        assert_eq!(render_str("", &Bindings::new()).unwrap(), "");
    }

    #[test]
    fn doubled_braces_are_literals() {
        let b = Bindings::new().bind("x", "value");
        let out = render_str("{{x}} is {x}, a }} b", &b).unwrap();
        assert_eq!(out, "{x} is value, a } b");
    }

    #[test]
    fn lone_closing_brace_is_literal() {
        let out = render_str("a } b", &Bindings::new()).unwrap();
        assert_eq!(out, "a } b");
    }

    #[test]
    fn repeated_and_adjacent_placeholders() {
        let b = Bindings::new().bind("a", "A").bind("b", "B");
        assert_eq!(render_str("{a}{b}-{a}", &b).unwrap(), "AB-A");
    }

    #[test]
    fn values_are_not_reinterpreted() {
        let b = Bindings::new().bind("code", "{not_a_var}");
        assert_eq!(render_str("<{code}>", &b).unwrap(), "<{not_a_var}>");
    }

    #[test]
    fn unbound_variable_is_an_error() {
        let err = render_str("Hello {name}", &Bindings::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::Unbound {
                template: "test",
                name: "name".to_string(),
                position: 6,
            }
        );
    }

    #[test]
    fn unclosed_brace_is_an_error() {
        let err = render_str("Hello {name", &Bindings::new()).unwrap_err();
        assert!(matches!(err, TemplateError::Unclosed { position: 6, .. }));

        let err = render_str("{name\n}", &Bindings::new()).unwrap_err();
        assert!(matches!(err, TemplateError::Unclosed { position: 0, .. }));
    }

    #[test]
    fn malformed_placeholders_are_errors() {
        let err = render_str("x {} y", &Bindings::new()).unwrap_err();
        assert!(matches!(err, TemplateError::Malformed { position: 2, .. }));

        let err = render_str("{two words}", &Bindings::new()).unwrap_err();
        assert!(matches!(err, TemplateError::Malformed { .. }));
    }

    #[test]
    fn positions_account_for_multibyte_text() {
        let err = render_str("— {x}", &Bindings::new()).unwrap_err();
        // the em dash is three bytes, followed by a space
        assert!(matches!(err, TemplateError::Unbound { position: 4, .. }));
    }

    #[test]
    fn error_messages_name_the_template() {
        let err = render("operations", "{missing}", &Bindings::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "template 'operations': unbound variable 'missing' at byte 0"
        );
    }
}
