use anyhow::{Context, Result};
use platform_obs::ObsConfig;
use products_hr::ClientSettings;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub obs: ObsConfig,
}

impl AppConfig {
    /// `endpoint` comes from `--endpoint` (clap already folds in
    /// `EMPLOYEE_API_URL`); without it the library default applies.
    pub fn load(endpoint: Option<&str>, verbose: bool) -> Result<Self> {
        let client = match endpoint {
            Some(url) => ClientSettings::new(url),
            None => ClientSettings::from_env(),
        }
        .context("invalid employee endpoint")?;

        let mut obs = ObsConfig::for_service("employee-form");
        if verbose {
            obs.env_filter = Some("info,products_hr=debug".into());
        }
        obs.otlp_endpoint = env_non_empty("OTLP_ENDPOINT");

        Ok(Self { client, obs })
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
