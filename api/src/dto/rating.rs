use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use sr_core::domain::entities::RatingValue;

use super::validators::validate_rating;
use crate::handlers::{ApiError, ApiResult};

/// Body of `POST /ratings`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitRatingRequest {
    #[serde(alias = "storeId")]
    pub store_id: Uuid,

    /// JSON number; must be a whole number from 1 to 5
    #[validate(custom(function = "validate_rating"))]
    pub rating: f64,
}

/// Body of `PUT /ratings/{id}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRatingRequest {
    #[validate(custom(function = "validate_rating"))]
    pub rating: f64,
}

fn to_value(rating: f64) -> ApiResult<RatingValue> {
    RatingValue::from_number(rating).map_err(|e| ApiError::Domain(e.into()))
}

impl SubmitRatingRequest {
    pub fn value(&self) -> ApiResult<RatingValue> {
        to_value(self.rating)
    }
}

impl UpdateRatingRequest {
    pub fn value(&self) -> ApiResult<RatingValue> {
        to_value(self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_rating_is_rejected() {
        let request: SubmitRatingRequest = serde_json::from_value(serde_json::json!({
            "storeId": Uuid::new_v4(),
            "rating": 3.5
        }))
        .unwrap();
        assert!(request.validate().is_err());
        assert!(request.value().is_err());
    }

    #[test]
    fn test_whole_rating_is_accepted() {
        let request: UpdateRatingRequest =
            serde_json::from_value(serde_json::json!({ "rating": 4 })).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.value().unwrap().get(), 4);
    }
}
