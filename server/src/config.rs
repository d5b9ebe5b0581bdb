use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use recipe_core::{DEFAULT_API_BASE, SITE_NAME};
use tracing::{info, warn};

use crate::error::{PrerenderError, PrerenderResult};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Recipe API root, always ends with '/'
    pub api_base: String,
    /// Built frontend (index.html + assets)
    pub dist_dir: PathBuf,
    pub site_name: String,
    pub api_timeout: Duration,
}

impl Config {
    pub fn load() -> PrerenderResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PrerenderResult<Self> {
        let api_base: String = try_load(&lookup, "FAST_KITCHEN_API_BASE", DEFAULT_API_BASE)?;
        if api_base.trim().is_empty() {
            return Err(PrerenderError::Config {
                key: "FAST_KITCHEN_API_BASE".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            port: try_load(&lookup, "FAST_KITCHEN_PORT", "3000")?,
            api_base: normalize_api_base(&api_base),
            dist_dir: try_load(&lookup, "FAST_KITCHEN_DIST", "dist")?,
            site_name: try_load(&lookup, "FAST_KITCHEN_SITE_NAME", SITE_NAME)?,
            api_timeout: Duration::from_secs(try_load(&lookup, "FAST_KITCHEN_API_TIMEOUT_SECS", "5")?),
        })
    }

    pub fn shell_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

/// Trim and make sure the base ends with exactly one '/'
pub fn normalize_api_base(base: &str) -> String {
    format!("{}/", base.trim().trim_end_matches('/'))
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> PrerenderResult<T>
where
    T::Err: Display,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            PrerenderError::Config { key: key.to_string(), reason: e.to_string() }
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> PrerenderResult<Config> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.api_base, "https://api.flottekueche.de/");
        assert_eq!(config.shell_path(), PathBuf::from("dist/index.html"));
        assert_eq!(config.site_name, "FastKitchen");
        assert_eq!(config.api_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("FAST_KITCHEN_PORT", "8080"),
            ("FAST_KITCHEN_API_BASE", "http://localhost:8000"),
            ("FAST_KITCHEN_API_TIMEOUT_SECS", "2"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base, "http://localhost:8000/");
        assert_eq!(config.api_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("FAST_KITCHEN_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, PrerenderError::Config { ref key, .. } if key == "FAST_KITCHEN_PORT"));

        assert!(load(&[("FAST_KITCHEN_API_BASE", "  ")]).is_err());
    }

    #[test]
    fn test_normalize_api_base() {
        assert_eq!(normalize_api_base("http://api/"), "http://api/");
        assert_eq!(normalize_api_base(" http://api// "), "http://api/");
        assert_eq!(normalize_api_base("http://api"), "http://api/");
    }
}
