use crate::config::model::{Config, ConfigError, SupabaseConfig};
use std::env;
use tracing::{debug, warn};

const URL_VARS: [&str; 2] = ["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"];
const KEY_VARS: [&str; 2] = ["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"];

/// Loads `.env` if present, then reads the configuration from the environment.
pub fn load_config() -> Result<Config, ConfigError> {
    if let Err(err) = dotenv::dotenv() {
        debug!("No .env file loaded: {}", err);
    }

    load_config_from(|name| env::var(name).ok())
}

/// Same as [load_config], reading variables through `lookup`.
pub fn load_config_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let url = load_string_config(&lookup, URL_VARS)?;
    let anon_key = load_string_config(&lookup, KEY_VARS)?;
    let max_retries = load_u32_config(&lookup, "SUPABASE_MAX_RETRIES", 0)?;

    validate_url(&url)?;

    debug!("Supabase URL is {}", url);

    Ok(Config {
        supabase: SupabaseConfig {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            max_retries,
        },
    })
}

fn load_string_config<F>(lookup: &F, names: [&'static str; 2]) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .find_map(|&name| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        })
        .ok_or_else(|| {
            warn!("{} must be set", names[0]);
            ConfigError::Missing { name: names[0] }
        })
}

fn load_u32_config<F>(lookup: &F, name: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected: "a non-negative integer number",
        }),
        None => Ok(default),
    }
}

fn validate_url(url: &str) -> Result<(), ConfigError> {
    if url.starts_with("https://") && url.contains(".supabase.co") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        move |name| vars.get(name).cloned()
    }

    #[test_log::test]
    fn should_load_config() {
        let config = load_config_from(lookup(&[
            ("SUPABASE_URL", "https://abcd.supabase.co/"),
            ("SUPABASE_ANON_KEY", " anon-key "),
        ]))
        .unwrap();

        assert_eq!(config.supabase.url, "https://abcd.supabase.co");
        assert_eq!(config.supabase.anon_key, "anon-key");
        assert_eq!(config.supabase.max_retries, 0);
    }

    #[test_log::test]
    fn should_accept_prefixed_variable_names() {
        let config = load_config_from(lookup(&[
            ("NEXT_PUBLIC_SUPABASE_URL", "https://abcd.supabase.co"),
            ("NEXT_PUBLIC_SUPABASE_ANON_KEY", "anon-key"),
            ("SUPABASE_MAX_RETRIES", "3"),
        ]))
        .unwrap();

        assert_eq!(config.supabase.max_retries, 3);
    }

    #[test_log::test]
    fn when_key_is_missing_should_fail() {
        let result = load_config_from(lookup(&[("SUPABASE_URL", "https://abcd.supabase.co")]));

        assert_eq!(
            result,
            Err(ConfigError::Missing {
                name: "SUPABASE_ANON_KEY"
            })
        );
    }

    #[test_log::test]
    fn when_url_is_blank_should_fail() {
        let result = load_config_from(lookup(&[
            ("SUPABASE_URL", "   "),
            ("SUPABASE_ANON_KEY", "anon-key"),
        ]));

        assert_eq!(result, Err(ConfigError::Missing { name: "SUPABASE_URL" }));
    }

    #[test_log::test]
    fn when_url_is_not_supabase_should_fail() {
        let result = load_config_from(lookup(&[
            ("SUPABASE_URL", "http://localhost:54321"),
            ("SUPABASE_ANON_KEY", "anon-key"),
        ]));

        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test_log::test]
    fn when_retries_is_not_a_number_should_fail() {
        let result = load_config_from(lookup(&[
            ("SUPABASE_URL", "https://abcd.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon-key"),
            ("SUPABASE_MAX_RETRIES", "lots"),
        ]));

        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
