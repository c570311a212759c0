use anyhow::{bail, Context, Result};

/// How the fallback fills `jobMatch` for titles outside the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownRoleMatch {
    /// Uniform draw from the placeholder range.
    Random,
    /// Fixed neutral percentage.
    Fixed(u32),
}

impl Default for UnknownRoleMatch {
    fn default() -> Self {
        UnknownRoleMatch::Fixed(55)
    }
}

impl UnknownRoleMatch {
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("random") {
            return Ok(UnknownRoleMatch::Random);
        }
        let fixed = value
            .parse::<u32>()
            .with_context(|| format!("UNKNOWN_ROLE_MATCH must be 'random' or 0-100, got '{value}'"))?;
        if fixed > 100 {
            bail!("UNKNOWN_ROLE_MATCH must be between 0 and 100, got {fixed}");
        }
        Ok(UnknownRoleMatch::Fixed(fixed))
    }
}

/// Application configuration loaded from environment variables.
/// Every provider key is optional: a missing key routes that provider's
/// requests straight to the keyword fallback.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub redis_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub llm_timeout_secs: u64,
    pub unknown_role_match: UnknownRoleMatch,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            redis_url: optional_env("REDIS_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            unknown_role_match: match optional_env("UNKNOWN_ROLE_MATCH") {
                Some(v) => UnknownRoleMatch::parse(&v)?,
                None => UnknownRoleMatch::default(),
            },
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
