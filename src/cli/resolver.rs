use std::time::Duration;

use clap::Parser;

use crate::{api::gemini, prelude::*};

#[derive(Parser)]
pub struct ResolverArgs {
    /// Without a key, only trips with `--distance-km` can be quoted.
    #[clap(long = "api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[clap(long = "model", env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    model: String,

    #[clap(long = "resolver-timeout-secs", env = "RESOLVER_TIMEOUT_SECS", default_value = "60")]
    timeout_secs: u64,
}

impl ResolverArgs {
    pub fn new_resolver(&self) -> Result<Option<gemini::Api>> {
        match &self.api_key {
            Some(api_key) => Ok(Some(gemini::Api::try_new(api_key.clone(), self.model.clone())?)),
            None => {
                warn!("no API key, only manual distances will work");
                Ok(None)
            }
        }
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
