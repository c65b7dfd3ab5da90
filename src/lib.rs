#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::Cli;
pub use config::{LocalStorage, MainConfig, TokenResolver};
pub use crate::core::client::{ApiClient, HttpSettings};
pub use domain::model::{Application, ApplicationList, ImportArchive, ImportOptions};
pub use utils::error::{CliError, Result};
