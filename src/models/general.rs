use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub build_date: String,
    pub commit_hash: String,
    #[serde(default)]
    pub features: String,
    pub version: String,
}
