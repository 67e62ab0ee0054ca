use std::env;
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
pub const OUTPUT_FILE: &str = "generated_tests.py";

/// Runtime configuration, resolved once at startup and passed down explicitly.
/// Nothing below `main` reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// OPENROUTER_API_KEY. A missing key is reported on first completion
    /// call, not at startup, so `run` works without one.
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    /// Zero for repeatable outputs.
    pub temperature: f32,
    /// The one file this tool owns. Fully overwritten on every generate.
    pub output_file: PathBuf,
}

impl Config {
    /// Starts from [`Config::default`] and overrides only what the
    /// environment provides, so the fallback values live in one place.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        cfg.api_key = env::var("OPENROUTER_API_KEY").ok().filter(|k| !k.is_empty());
        if let Ok(endpoint) = env::var("OPENROUTER_ENDPOINT") {
            cfg.endpoint = endpoint;
        }
        if let Ok(model) = env::var("OPENROUTER_MODEL") {
            cfg.model = model;
        }
        cfg
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            output_file: PathBuf::from(OUTPUT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_overrides_only_what_is_set() {
        env::set_var("OPENROUTER_MODEL", "anthropic/claude-3.5");
        env::remove_var("OPENROUTER_ENDPOINT");

        let cfg = Config::from_env();
        env::remove_var("OPENROUTER_MODEL");

        assert_eq!(cfg.model, "anthropic/claude-3.5");
        // Everything not set in the environment comes from Config::default.
        let defaults = Config::default();
        assert_eq!(cfg.endpoint, defaults.endpoint);
        assert_eq!(cfg.temperature, defaults.temperature);
        assert_eq!(cfg.output_file, defaults.output_file);
    }

    #[test]
    fn default_points_at_openrouter() {
        let cfg = Config::default();
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.temperature, 0.0);
        assert_eq!(cfg.output_file, PathBuf::from("generated_tests.py"));
        assert!(cfg.api_key.is_none());
    }
}
