use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between the CLI and its two external
/// collaborators (the completion endpoint and the pytest subprocess).
///
/// These never escape to the process exit code: the workflow layer renders
/// them as diagnostics and carries on, same as the original behavior.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "The environment variable OPENROUTER_API_KEY is not set.\n\
         Please export OPENROUTER_API_KEY=<your_key> and try again."
    )]
    MissingCredential,

    #[error("Request to OpenRouter failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OpenRouter responded with status {status}:\n{body}")]
    Upstream { status: u16, body: String },

    #[error("No usable content returned by the LLM. Response content:\n{0}")]
    MalformedResponse(String),

    #[error("Could not write to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not spawn test runner `{command}`: {source}")]
    ProcessSpawn {
        command: String,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_names_the_variable() {
        let msg = Error::MissingCredential.to_string();
        assert!(msg.contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn upstream_carries_status_and_body() {
        let err = Error::Upstream {
            status: 429,
            body: "rate limited".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("rate limited"));
    }
}
