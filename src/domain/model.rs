use serde::{Deserialize, Serialize};

/// An application as returned by the store API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "applicationId")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subscriber: String,
    #[serde(rename = "throttlingTier", default)]
    pub tier: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationList {
    pub count: i32,
    #[serde(default)]
    pub list: Vec<Application>,
}

/// Payload of a single import upload.
#[derive(Debug, Clone)]
pub struct ImportArchive {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    pub preserve_owner: bool,
    pub add_subscriptions: bool,
}
