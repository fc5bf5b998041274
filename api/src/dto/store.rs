use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use sr_core::services::{NewStore, StoreChanges};

use super::validators::{validate_email, validate_store_address, validate_store_name};

/// Body of `POST /stores`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStoreRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_store_name"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_store_address"))]
    pub address: String,

    #[serde(alias = "ownerId")]
    pub owner_id: Uuid,
}

impl From<CreateStoreRequest> for NewStore {
    fn from(request: CreateStoreRequest) -> Self {
        NewStore {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            address: request.address.trim().to_string(),
            owner_id: request.owner_id,
        }
    }
}

/// Body of `PUT /stores/{id}`; omitted fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateStoreRequest {
    #[validate(custom(function = "validate_store_name"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_email"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_store_address"))]
    pub address: Option<String>,

    #[serde(alias = "ownerId")]
    pub owner_id: Option<Uuid>,
}

impl From<UpdateStoreRequest> for StoreChanges {
    fn from(request: UpdateStoreRequest) -> Self {
        StoreChanges {
            name: request.name.map(|n| n.trim().to_string()),
            email: request.email.map(|e| e.trim().to_string()),
            address: request.address.map(|a| a.trim().to_string()),
            owner_id: request.owner_id,
        }
    }
}
