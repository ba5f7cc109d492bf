//! Diesel models for customer reviews.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::review::{NewReview as DomainNewReview, Review as DomainReview};
use crate::domain::types::{
    AuthorName, ProductName, Rating, ReviewComment, ReviewId, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Review {
    pub id: i32,
    pub author: String,
    pub product: String,
    pub rating: i32,
    pub comment: String,
    pub is_published: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview<'a> {
    pub author: &'a str,
    pub product: &'a str,
    pub rating: i32,
    pub comment: &'a str,
}

impl TryFrom<Review> for DomainReview {
    type Error = TypeConstraintError;

    fn try_from(review: Review) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ReviewId::try_from(review.id)?,
            author: AuthorName::new(review.author)?,
            product: ProductName::new(review.product)?,
            rating: Rating::new(review.rating)?,
            comment: ReviewComment::new(review.comment)?,
            is_published: review.is_published,
            created_at: review.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewReview> for NewReview<'a> {
    fn from(review: &'a DomainNewReview) -> Self {
        Self {
            author: review.author.as_str(),
            product: review.product.as_str(),
            rating: review.rating.into(),
            comment: review.comment.as_str(),
        }
    }
}
