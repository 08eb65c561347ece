//! # Fine-Tuning Module
//!
//! Everything behind `sllm fine-tuning`: resolving where the control plane
//! lives, loading the job document and submitting it once.
//!
//! ## Key Components
//!
//! - `config`: `ServerConfig` for the endpoint and `FineTuningConfig` for the
//!   job document
//! - `client`: `FineTuningClient`, the single-shot POST and its response
//!   classification
//! - `command`: `FineTuningArgs` (the clap surface) and `FineTuningCommand`
//!   (the handler)

pub mod client;
pub mod command;
pub mod config;

pub use client::FineTuningClient;
pub use command::{FineTuningArgs, FineTuningCommand};
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_CONFIG_PATH, FineTuningConfig, SERVER_URL_ENV, ServerConfig,
    ServerConfigBuilder,
};
