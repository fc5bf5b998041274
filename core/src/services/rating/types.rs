use crate::domain::entities::rating::RatingValue;
use crate::domain::value_objects::non_blank;

/// Filters for the administrator rating listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingSearch {
    /// Exact star value
    pub rating: Option<RatingValue>,
    /// Case-insensitive substring of the rater's name
    pub user_name: Option<String>,
    /// Case-insensitive substring of the store's name
    pub store_name: Option<String>,
}

impl RatingSearch {
    pub fn normalized(self) -> Self {
        Self {
            rating: self.rating,
            user_name: non_blank(self.user_name),
            store_name: non_blank(self.store_name),
        }
    }
}
