//! # sllm - Fine-Tuning Job Submission
//!
//! This crate implements the `fine-tuning` subcommand of the `sllm` CLI: it
//! loads a JSON job document from disk and submits it to a model-serving
//! control plane in a single HTTP POST.
//!
//! ## Features
//!
//! - clap argument surface that can be mounted in any `Subcommand` enum
//! - Explicit server configuration (no ambient lookups inside the library)
//! - Opaque job documents forwarded field for field
//! - Injected logging interface backed by `tracing`
//!
//! ## Example
//!
//! ```rust,no_run
//! use sllm::fine_tuning::{FineTuningArgs, FineTuningCommand, ServerConfig, DEFAULT_CONFIG_PATH};
//! use sllm::logging::TracingLog;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let args = FineTuningArgs {
//!         base_model: Some("facebook/opt-125m".to_string()),
//!         config: DEFAULT_CONFIG_PATH.into(),
//!     };
//!     let command = FineTuningCommand::new(args, &ServerConfig::from_env(), Arc::new(TracingLog))?;
//!
//!     if let Some(job) = command.run().await? {
//!         println!("{}", job);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
pub mod fine_tuning;
pub mod logging;

pub use error::{Error, Result};

/// Re-export of types module for public use
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::error::Result;
    pub use crate::fine_tuning::{FineTuningArgs, FineTuningCommand, ServerConfig};
    pub use crate::logging::{JobLog, TracingLog};
}
