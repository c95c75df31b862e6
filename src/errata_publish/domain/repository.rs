use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Request body for creating a repository.
///
/// Identifiers are freshly generated so repeated runs never collide with
/// leftovers from an earlier, uncleaned run.
#[derive(Debug, Clone, Serialize)]
pub struct NewRepository {
    pub id: String,
    pub importer_type_id: String,
    pub importer_config: Value,
    pub notes: Value,
}

impl NewRepository {
    pub fn generate() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            importer_type_id: "yum_importer".to_string(),
            importer_config: serde_json::json!({}),
            notes: serde_json::json!({"_repo-type": "rpm-repo"}),
        }
    }
}

/// Request body for attaching a yum distributor to a repository.
#[derive(Debug, Clone, Serialize)]
pub struct NewDistributor {
    pub distributor_id: String,
    pub distributor_type_id: String,
    pub distributor_config: DistributorConfig,
    pub auto_publish: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributorConfig {
    pub http: bool,
    pub https: bool,
    pub relative_url: String,
}

impl NewDistributor {
    pub fn generate() -> Self {
        Self {
            distributor_id: Uuid::new_v4().to_string(),
            distributor_type_id: "yum_distributor".to_string(),
            distributor_config: DistributorConfig {
                http: true,
                https: true,
                relative_url: Uuid::new_v4().to_string(),
            },
            auto_publish: false,
        }
    }
}

/// Decoded response for a created repository. Only the fields the workflow
/// consumes are modeled; everything else the server returns is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryHandle {
    #[serde(rename = "_href")]
    pub href: String,
    pub id: String,
}

/// Decoded response for an attached distributor.
#[derive(Debug, Clone, Deserialize)]
pub struct DistributorHandle {
    pub id: String,
    pub config: DistributorConfig,
}
