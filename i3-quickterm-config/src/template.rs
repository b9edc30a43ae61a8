//! Command templates with `{name}` placeholders.
//!
//! Every configurable command line (menu, shells, terminal launch, history
//! path) is a template. Placeholders are filled from a [`Substitutions`] map
//! that always carries the process environment under `$NAME` keys, plus any
//! caller-supplied keys such as `title`, `expanded` or `string`. The result is
//! then split into argv tokens with POSIX shell-word rules, so quoted segments
//! stay single tokens.
//!
//! Brace handling follows the usual format-string conventions: `{{` and `}}`
//! produce literal braces, a lone `{` or `}` is an error, and a placeholder
//! whose key is not in the map is an error.

use crate::error::ConfigError;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Matches escaped braces, a `{key}` placeholder, or a stray brace.
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|[{}]")
        .expect("placeholder regex is a compile-time constant and must be valid")
});

/// Values available to a template.
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    values: HashMap<String, String>,
}

impl Substitutions {
    /// An empty map. Mostly useful in tests; real callers start from
    /// [`Substitutions::from_env`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The current process environment, each variable keyed as `$NAME`.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Build from an explicit list of environment variables (keyed as `$NAME`).
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values = vars
            .into_iter()
            .map(|(k, v)| (format!("${}", k.as_ref()), v.into()))
            .collect();
        Self { values }
    }

    /// Add or replace a caller-supplied key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

fn template_error(template: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Template {
        template: template.to_string(),
        reason: reason.into(),
    }
}

/// Fill every placeholder in `template`, without tokenizing.
pub fn format_template(template: &str, subs: &Substitutions) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER_PATTERN.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);
        match whole.as_str() {
            "{{" => out.push('{'),
            "}}" => out.push('}'),
            "{" | "}" => {
                return Err(template_error(
                    template,
                    format!("single '{}' encountered", whole.as_str()),
                ));
            }
            _ => {
                let key = caps.get(1).map_or("", |m| m.as_str());
                match subs.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(template_error(template, format!("unknown key '{key}'")));
                    }
                }
            }
        }
        last = whole.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}

/// Fill `template` from `subs` and split the result into argv tokens.
pub fn expand_with(template: &str, subs: &Substitutions) -> Result<Vec<String>, ConfigError> {
    let formatted = format_template(template, subs)?;
    shell_words::split(&formatted).map_err(|e| template_error(template, e.to_string()))
}

/// Expand `template` against the process environment only.
pub fn expand_command(template: &str) -> Result<Vec<String>, ConfigError> {
    expand_with(template, &Substitutions::from_env())
}

/// Wrap `s` in single quotes so it survives shell-word splitting as one token.
///
/// Embedded single quotes are not escaped: a value containing `'` will split
/// unexpectedly. Shell names and paths with quotes are not supported.
pub fn quoted(s: &str) -> String {
    format!("'{s}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Substitutions {
        Substitutions::from_vars([("HOME", "/home/user"), ("SHELL", "/bin/zsh")])
    }

    #[test]
    fn test_env_placeholders_use_dollar_keys() {
        let argv = expand_with("{$HOME}/.cache/i3-quickterm/shells.order", &env()).unwrap();
        assert_eq!(argv, vec!["/home/user/.cache/i3-quickterm/shells.order"]);

        let argv = expand_with("{$SHELL}", &env()).unwrap();
        assert_eq!(argv, vec!["/bin/zsh"]);
    }

    #[test]
    fn test_caller_keys_override_env() {
        let subs = env().with("$HOME", "/override");
        assert_eq!(expand_with("{$HOME}", &subs).unwrap(), vec!["/override"]);
    }

    #[test]
    fn test_quoted_segments_stay_single_tokens() {
        let argv = expand_with(
            "rofi -dmenu -p 'quickterm: ' -no-custom -auto-select",
            &Substitutions::new(),
        )
        .unwrap();
        assert_eq!(
            argv,
            vec!["rofi", "-dmenu", "-p", "quickterm: ", "-no-custom", "-auto-select"]
        );

        let subs = Substitutions::new().with("title", quoted("shell - i3-quickterm"));
        let argv = expand_with("xterm -T {title} -e bash", &subs).unwrap();
        assert_eq!(argv, vec!["xterm", "-T", "shell - i3-quickterm", "-e", "bash"]);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let err = expand_with("xterm -T {title}", &env()).unwrap_err();
        assert!(matches!(err, ConfigError::Template { .. }));
        assert!(err.to_string().contains("unknown key 'title'"));
    }

    #[test]
    fn test_escaped_and_stray_braces() {
        assert_eq!(
            format_template("awk '{{print $1}}'", &Substitutions::new()).unwrap(),
            "awk '{print $1}'"
        );
        assert!(format_template("broken {", &Substitutions::new()).is_err());
        assert!(format_template("broken }", &Substitutions::new()).is_err());
    }

    #[test]
    fn test_unbalanced_quote_is_an_error() {
        let err = expand_with("echo 'unterminated", &Substitutions::new()).unwrap_err();
        assert!(matches!(err, ConfigError::Template { .. }));
    }

    #[test]
    fn test_quoted_does_not_escape_inner_quotes() {
        assert_eq!(quoted("a b"), "'a b'");
        assert_eq!(quoted("it's"), "'it's'");
    }
}
