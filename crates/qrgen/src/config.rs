//! Settings resolution: environment first, interactive prompt second,
//! default last. First non-empty source wins.

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::GenerateError;

/// Default output filename.
pub const DEFAULT_FILENAME: &str = "qr.png";

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "/output";

/// Resolved settings for one generator run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Text to encode. Non-empty.
    pub text: String,
    /// Output filename, always ending in `.png`.
    pub filename: String,
    /// Destination directory; created on demand when the image is written.
    pub output_dir: PathBuf,
}

impl Settings {
    /// Resolve all settings from the process environment, prompting on
    /// the terminal for anything unset.
    pub fn resolve() -> Result<Self, GenerateError> {
        let interactive = std::io::stdin().is_terminal();
        let mut input = std::io::stdin().lock();
        Self::resolve_from(env_value, &mut input, interactive)
    }

    /// Resolution core with the environment and prompt channel injected.
    fn resolve_from(
        env: impl Fn(&str) -> Option<String>,
        input: &mut dyn BufRead,
        interactive: bool,
    ) -> Result<Self, GenerateError> {
        let text = lookup(&env, input, interactive, "TEXT", "Text to encode: ")
            .ok_or(GenerateError::MissingText)?;
        let filename = lookup(&env, input, interactive, "FILENAME", "Output filename: ")
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        let output_dir = lookup(&env, input, interactive, "OUTPUT_DIR", "Output directory: ")
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

        Ok(Self {
            text,
            filename: normalize_filename(&filename),
            output_dir: PathBuf::from(output_dir),
        })
    }
}

/// Ordered-source lookup for one setting: environment variable, then a
/// single prompted line when running on a terminal. `None` means every
/// source came up empty; the caller decides between default and error.
fn lookup(
    env: &impl Fn(&str) -> Option<String>,
    input: &mut dyn BufRead,
    interactive: bool,
    key: &str,
    prompt: &str,
) -> Option<String> {
    if let Some(value) = env(key) {
        debug!(key, source = "env", "Setting resolved");
        return Some(value);
    }
    if interactive {
        let value = prompt_line(input, prompt);
        if value.is_some() {
            debug!(key, source = "prompt", "Setting resolved");
        }
        return value;
    }
    None
}

/// Environment lookup; a value that is empty after trimming counts as
/// unset. Present values pass through verbatim.
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Print `prompt` and read one trimmed line. End-of-input or a read
/// failure yields `None`, never an error.
fn prompt_line(input: &mut dyn BufRead, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}

/// Append the `.png` extension unless the name already carries it.
/// Appending is idempotent; the suffix check is exact.
pub fn normalize_filename(name: &str) -> String {
    if name.ends_with(".png") {
        name.to_string()
    } else {
        format!("{name}.png")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_env_values_win() {
        let env = |key: &str| match key {
            "TEXT" => Some("hello world".to_string()),
            "FILENAME" => Some("code".to_string()),
            "OUTPUT_DIR" => Some("/tmp/codes".to_string()),
            _ => None,
        };
        let mut input = Cursor::new("prompted text\n");
        let settings = Settings::resolve_from(env, &mut input, true).unwrap();

        assert_eq!(settings.text, "hello world");
        assert_eq!(settings.filename, "code.png");
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/codes"));
        // Nothing was consumed from the prompt channel.
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_defaults_apply_without_env_or_terminal() {
        let env = |key: &str| (key == "TEXT").then(|| "hi".to_string());
        let mut input = Cursor::new("");
        let settings = Settings::resolve_from(env, &mut input, false).unwrap();

        assert_eq!(settings.filename, DEFAULT_FILENAME);
        assert_eq!(settings.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_missing_text_is_an_error() {
        let mut input = Cursor::new("");
        let err = Settings::resolve_from(no_env, &mut input, false).unwrap_err();
        assert!(matches!(err, GenerateError::MissingText));
    }

    #[test]
    fn test_whitespace_env_value_counts_as_unset() {
        let env = |key: &str| (key == "TEXT").then(|| "   ".to_string());
        let mut input = Cursor::new("");
        let err = Settings::resolve_from(env, &mut input, false).unwrap_err();
        assert!(matches!(err, GenerateError::MissingText));
    }

    #[test]
    fn test_prompt_supplies_missing_values() {
        let mut input = Cursor::new("  spaced out  \nlabel\n/data/codes\n");
        let settings = Settings::resolve_from(no_env, &mut input, true).unwrap();

        assert_eq!(settings.text, "spaced out");
        assert_eq!(settings.filename, "label.png");
        assert_eq!(settings.output_dir, PathBuf::from("/data/codes"));
    }

    #[test]
    fn test_prompt_eof_falls_back_to_defaults() {
        let env = |key: &str| (key == "TEXT").then(|| "hi".to_string());
        let mut input = Cursor::new("");
        let settings = Settings::resolve_from(env, &mut input, true).unwrap();

        assert_eq!(settings.filename, DEFAULT_FILENAME);
        assert_eq!(settings.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_prompt_eof_on_text_is_an_error() {
        let mut input = Cursor::new("");
        let err = Settings::resolve_from(no_env, &mut input, true).unwrap_err();
        assert!(matches!(err, GenerateError::MissingText));
    }

    #[test]
    fn normalize_appends_extension_once() {
        assert_eq!(normalize_filename("x"), "x.png");
        assert_eq!(normalize_filename("x.png"), "x.png");
        assert_eq!(normalize_filename("archive.tar"), "archive.tar.png");
        // Exact-suffix check: uppercase is not recognized.
        assert_eq!(normalize_filename("x.PNG"), "x.PNG.png");
    }
}
