//! pathwise configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level pathwise configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwiseConfig {
    /// Question bank TOML to score against. `None` means the shipped bank.
    #[serde(default)]
    pub question_bank: Option<PathBuf>,
    /// Recommendation rule table TOML. `None` means the shipped rules.
    #[serde(default)]
    pub rules: Option<PathBuf>,
    /// Where `pathwise score --save` writes reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Output format when `--format` is not given: text, json or markdown.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./pathwise-reports")
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for PathwiseConfig {
    fn default() -> Self {
        Self {
            question_bank: None,
            rules: None,
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut cursor = 0;
    while let Some(offset) = result[cursor..].find("${") {
        let start = cursor + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let value = std::env::var(&result[start + 2..start + end]).unwrap_or_default();
        result.replace_range(start..start + end + 1, &value);
        cursor = start + value.len();
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `path`, when given
/// 2. `pathwise.toml` in the current directory
/// 3. `~/.config/pathwise/config.toml`
///
/// Relative `question_bank` and `rules` paths in a config file are taken
/// relative to that file. Environment variable overrides
/// (`PATHWISE_QUESTION_BANK`, `PATHWISE_RULES`) are used as given.
pub fn load_config_from(path: Option<&Path>) -> Result<PathwiseConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("pathwise.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            let mut config = toml::from_str::<PathwiseConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            let base = path.parent().unwrap_or(Path::new(""));
            config.question_bank = config
                .question_bank
                .map(|p| relative_to(base, &resolve_path(&p)));
            config.rules = config.rules.map(|p| relative_to(base, &resolve_path(&p)));
            config
        }
        None => PathwiseConfig::default(),
    };

    // Apply env var overrides
    if let Ok(bank) = std::env::var("PATHWISE_QUESTION_BANK") {
        config.question_bank = Some(resolve_path(Path::new(&bank)));
    }
    if let Ok(rules) = std::env::var("PATHWISE_RULES") {
        config.rules = Some(resolve_path(Path::new(&rules)));
    }

    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

fn relative_to(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("pathwise"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_PATHWISE_TEST_VAR", "banks");
        assert_eq!(resolve_env_vars("${_PATHWISE_TEST_VAR}"), "banks");
        assert_eq!(
            resolve_env_vars("/srv/${_PATHWISE_TEST_VAR}/v2.toml"),
            "/srv/banks/v2.toml"
        );
        assert_eq!(resolve_env_vars("no-vars"), "no-vars");
        std::env::remove_var("_PATHWISE_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_rescan_values() {
        std::env::set_var("_PATHWISE_SELF_REF", "${_PATHWISE_SELF_REF}");
        assert_eq!(
            resolve_env_vars("a/${_PATHWISE_SELF_REF}/b"),
            "a/${_PATHWISE_SELF_REF}/b"
        );
        std::env::remove_var("_PATHWISE_SELF_REF");

        assert_eq!(resolve_env_vars("${_PATHWISE_UNSET_VAR}x"), "x");
        assert_eq!(resolve_env_vars("open ${brace"), "open ${brace");
    }

    #[test]
    fn default_config() {
        let config = PathwiseConfig::default();
        assert!(config.question_bank.is_none());
        assert!(config.rules.is_none());
        assert_eq!(config.default_format, "text");
        assert_eq!(config.output_dir, PathBuf::from("./pathwise-reports"));
    }

    #[test]
    fn parse_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pathwise.toml");
        std::fs::write(
            &path,
            r#"
question_bank = "banks/standard.toml"
default_format = "markdown"
"#,
        )
        .unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(
            config.question_bank,
            Some(dir.path().join("banks/standard.toml"))
        );
        assert!(config.rules.is_none());
        assert_eq!(config.default_format, "markdown");
        assert_eq!(config.output_dir, PathBuf::from("./pathwise-reports"));
    }

    #[test]
    fn config_paths_are_relative_to_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("other");
        std::fs::create_dir_all(&nested).unwrap();
        let path = nested.join("pathwise.toml");
        std::fs::write(
            &path,
            r#"
question_bank = "question-bank.toml"
rules = "/etc/pathwise/rules.toml"
"#,
        )
        .unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(
            config.question_bank,
            Some(nested.join("question-bank.toml"))
        );
        assert_eq!(config.rules, Some(PathBuf::from("/etc/pathwise/rules.toml")));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/pathwise.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
