//! Placeholder scanning for `{{name}}` / `{{name:arg1,arg2}}` templates.

use std::ops::Range;
use std::sync::LazyLock;

use fakesmith_core::FakeValue;
use regex::Regex;

use crate::errors::GenerationError;

// Braces never appear inside a token, so `{{` without a matching `}}` (or a
// token whose name is not an identifier) is left as literal text.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s?([A-Za-z_][A-Za-z0-9_]*)(?::([^{}]*?))?\s?\}\}")
        .expect("placeholder pattern is valid")
});

/// A placeholder located in a template.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder<'a> {
    /// Byte range of the whole token, braces included.
    pub span: Range<usize>,
    pub name: &'a str,
    pub args: Vec<FakeValue>,
}

/// Finds every placeholder in `template`, left to right.
///
/// Fails with `InvalidArgument` when an argument list has an empty entry.
pub fn placeholders(template: &str) -> Result<Vec<Placeholder<'_>>, GenerationError> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| Some((caps.get(0)?, caps.get(1)?, caps.get(2))))
        .map(|(whole, name, raw_args)| {
            let args = split_args(name.as_str(), raw_args.map(|m| m.as_str()))?;
            Ok(Placeholder {
                span: whole.range(),
                name: name.as_str(),
                args,
            })
        })
        .collect()
}

fn split_args(name: &str, raw: Option<&str>) -> Result<Vec<FakeValue>, GenerationError> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(Vec::new());
    };
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|arg| {
            let arg = arg.trim();
            if arg.is_empty() {
                Err(GenerationError::InvalidArgument(format!(
                    "{name}: empty entry in template argument list '{raw}'"
                )))
            } else {
                Ok(FakeValue::from(arg))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_names_and_arguments() {
        let found = placeholders("{{a}} and {{ b:1, two }}").expect("scan");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "a");
        assert!(found[0].args.is_empty());
        assert_eq!(found[0].span, 0..5);
        assert_eq!(found[1].name, "b");
        assert_eq!(
            found[1].args,
            vec![FakeValue::from("1"), FakeValue::from("two")]
        );
    }

    #[test]
    fn ignores_unterminated_and_non_identifier_tokens() {
        assert_eq!(placeholders("{{name").expect("scan"), vec![]);
        assert_eq!(placeholders("{{ not a name }}").expect("scan"), vec![]);
        assert_eq!(placeholders("{{}}").expect("scan"), vec![]);
        assert_eq!(placeholders("{name}} {{x").expect("scan"), vec![]);
    }

    #[test]
    fn trailing_colon_means_no_arguments() {
        let found = placeholders("{{a:}}").expect("scan");
        assert_eq!(found.len(), 1);
        assert!(found[0].args.is_empty());
    }

    #[test]
    fn empty_argument_entry_is_rejected() {
        assert!(matches!(
            placeholders("{{a:x,,y}}"),
            Err(GenerationError::InvalidArgument(_))
        ));
    }
}
