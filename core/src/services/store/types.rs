use uuid::Uuid;

use crate::domain::value_objects::non_blank;

/// Input for creating a store
#[derive(Debug, Clone)]
pub struct NewStore {
    pub name: String,
    pub email: String,
    pub address: String,
    pub owner_id: Uuid,
}

/// Partial store update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct StoreChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub owner_id: Option<Uuid>,
}

/// Filters for the administrator store listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminStoreSearch {
    pub name: Option<String>,
    pub address: Option<String>,
    /// Case-insensitive substring of the owner's name
    pub owner_name: Option<String>,
}

impl AdminStoreSearch {
    pub fn normalized(self) -> Self {
        Self {
            name: non_blank(self.name),
            address: non_blank(self.address),
            owner_name: non_blank(self.owner_name),
        }
    }
}
