pub mod apps;
pub mod client;
pub mod export;
pub mod import;
pub mod render;

pub use crate::domain::model::{Application, ApplicationList, ImportArchive, ImportOptions};
pub use crate::domain::ports::{EnvironmentResolver, Storage, TokenProvider};
pub use crate::utils::error::Result;
