//! Rating entity and the validated star value it carries.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

use crate::errors::ValidationError;

/// Lowest accepted star value
pub const MIN_RATING: u8 = 1;
/// Highest accepted star value
pub const MAX_RATING: u8 = 5;

/// A star value guaranteed to be a whole number in `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

impl RatingValue {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::InvalidRating)
        }
    }

    /// Accept a JSON number, rejecting fractions such as `4.5`
    pub fn from_number(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(ValidationError::InvalidRating);
        }
        Self::new(value as i64)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RatingValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// One user's rating of one store. At most one exists per (user, store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rating {
    pub id: Uuid,
    pub user_id: Uuid,
    pub store_id: Uuid,
    pub rating: RatingValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(user_id: Uuid, store_id: Uuid, rating: RatingValue) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            store_id,
            rating,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_rating(&mut self, rating: RatingValue) {
        self.rating = rating;
        self.updated_at = Utc::now();
    }

    /// Whether `user_id` created this rating
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}
