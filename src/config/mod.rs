#[cfg(feature = "cli")]
pub mod cli;
pub mod main_config;
pub mod storage;
pub mod token;

#[cfg(feature = "cli")]
pub use cli::Cli;
pub use main_config::MainConfig;
pub use storage::LocalStorage;
pub use token::TokenResolver;
