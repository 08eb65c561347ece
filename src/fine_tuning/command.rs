//! The `fine-tuning` subcommand
//!
//! [`FineTuningArgs`] is what the outer CLI mounts under the `fine-tuning`
//! name; [`FineTuningCommand`] is the handler it dispatches to.

use crate::error::Result;
use crate::fine_tuning::client::{FineTuningClient, display_base_model};
use crate::fine_tuning::config::{DEFAULT_CONFIG_PATH, FineTuningConfig, ServerConfig};
use crate::logging::JobLog;
use clap::Args;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::instrument;

/// Arguments of the `fine-tuning` subcommand
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct FineTuningArgs {
    /// base_model name
    #[arg(long = "base_model")]
    pub base_model: Option<String>,

    /// fine-tuning configuration (the default points into the build tree)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Handler for `fine-tuning`: load the job document and submit it once
pub struct FineTuningCommand {
    config_path: PathBuf,
    client: FineTuningClient,
    log: Arc<dyn JobLog>,
}

impl FineTuningCommand {
    /// Capture the parsed arguments and resolve the endpoint
    pub fn new(args: FineTuningArgs, server: &ServerConfig, log: Arc<dyn JobLog>) -> Result<Self> {
        let client = FineTuningClient::new(server, args.base_model, log.clone())?;

        Ok(Self {
            config_path: args.config,
            client,
            log,
        })
    }

    pub fn client(&self) -> &FineTuningClient {
        &self.client
    }

    /// Load the configuration, submit it and log the outcome
    ///
    /// A missing or malformed config file fails before any request is made.
    #[instrument(skip(self), fields(config = %self.config_path.display()))]
    pub async fn run(&self) -> Result<Option<Value>> {
        let config = FineTuningConfig::load(&self.config_path)?;

        self.log.info(&format!(
            "Start fine-tuning base model {}",
            display_base_model(self.client.base_model())
        ));

        let result = self.client.submit(&config).await?;
        self.log.info(&render_result(result.as_ref()));

        Ok(result)
    }
}

fn render_result(result: Option<&Value>) -> String {
    match result {
        Some(value) => value.to_string(),
        None => "None".to_string(),
    }
}
