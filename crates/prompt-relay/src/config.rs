use std::env;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use prompt_relay_openai_model::{OpenAIConfigBuilder, OpenAIProvider};

const API_KEY_VAR: &str = "GEMINI_API_KEY";

// The demos all talk to the same fixed endpoint; nothing besides the
// credential is runtime configurable.
const GEMINI_BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai";
const GEMINI_MODEL: &str = "gemini-2.0-flash";

/// The error raised when the process configuration is unusable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The API credential variable is absent or blank.
    MissingApiKey,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingApiKey => {
                write!(f, "{API_KEY_VAR} is not set")
            }
        }
    }
}

impl Error for ConfigError {}

/// Builds the shared model provider from the process environment.
///
/// Reads a `.env` file if one is present, then requires the
/// `GEMINI_API_KEY` variable. This runs before any relay is
/// constructed, so a missing credential fails the process without a
/// single network call being attempted.
pub fn provider_from_env() -> Result<OpenAIProvider, ConfigError> {
    dotenvy::dotenv().ok();

    let api_key = api_key_from(env::var(API_KEY_VAR).ok())?;
    debug!("building provider for {GEMINI_MODEL}");
    let config = OpenAIConfigBuilder::with_api_key(api_key)
        .with_base_url(GEMINI_BASE_URL)
        .with_model(GEMINI_MODEL)
        .build();
    Ok(OpenAIProvider::new(config))
}

fn api_key_from(value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey),
    }
}
