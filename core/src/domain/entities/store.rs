//! Store entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A store that users can rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    /// Contact email, unique across stores
    pub email: String,
    pub address: String,
    /// Owning user; always a `store_owner`
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Store {
    pub fn new(name: String, email: String, address: String, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            address,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    pub fn set_address(&mut self, address: String) {
        self.address = address;
        self.updated_at = Utc::now();
    }

    pub fn set_owner(&mut self, owner_id: Uuid) {
        self.owner_id = owner_id;
        self.updated_at = Utc::now();
    }

    /// `{id, name, address}` reference embedded in rating payloads
    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            id: self.id,
            name: self.name.clone(),
            address: self.address.clone(),
        }
    }
}

/// Compact store reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSummary {
    pub id: Uuid,
    pub name: String,
    pub address: String,
}
