use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub supabase: SupabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    /// Transient-failure retries per request. 0 disables retrying.
    pub max_retries: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} is required but not set")]
    Missing { name: &'static str },
    #[error("Invalid Supabase URL format: \"{0}\"")]
    InvalidUrl(String),
    #[error("Invalid config '{name}'. Expected {expected}.")]
    Invalid {
        name: &'static str,
        expected: &'static str,
    },
}

impl ConfigError {
    /// Steps shown on the configuration error screen.
    pub fn remediation(&self) -> &'static str {
        match self {
            ConfigError::Missing { .. } => {
                "Set SUPABASE_URL and SUPABASE_ANON_KEY in the environment or in a .env file \
                 (the NEXT_PUBLIC_ prefixed names are also accepted), then reload."
            }
            ConfigError::InvalidUrl(_) => {
                "SUPABASE_URL must look like https://<project>.supabase.co. \
                 Copy it from the project's API settings, then reload."
            }
            ConfigError::Invalid { .. } => "Fix the value in the environment or .env file, then reload.",
        }
    }
}
