use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AuthorName, ProductName, Rating, ReviewComment, ReviewId};
use crate::listing::Listable;

/// Customer review awaiting or past moderation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub author: AuthorName,
    pub product: ProductName,
    pub rating: Rating,
    pub comment: ReviewComment,
    pub is_published: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewReview {
    pub author: AuthorName,
    pub product: ProductName,
    pub rating: Rating,
    pub comment: ReviewComment,
}

impl Listable for Review {
    fn name(&self) -> &str {
        self.product.as_str()
    }

    fn is_active(&self) -> bool {
        self.is_published
    }
}
