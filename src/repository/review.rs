//! Repository implementation for customer reviews.

use diesel::prelude::*;

use crate::domain::review::{NewReview, Review};
use crate::domain::types::ReviewId;
use crate::models::review::{NewReview as DbNewReview, Review as DbReview};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ReviewReader, ReviewWriter};

impl ReviewReader for DieselRepository {
    fn get_review_by_id(&self, id: ReviewId) -> RepositoryResult<Option<Review>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let db_review = reviews::table
            .find(id.get())
            .first::<DbReview>(&mut conn)
            .optional()?;

        db_review
            .map(Review::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_reviews(&self) -> RepositoryResult<Vec<Review>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        reviews::table
            .order((reviews::created_at.desc(), reviews::id.desc()))
            .load::<DbReview>(&mut conn)?
            .into_iter()
            .map(|db_review| Review::try_from(db_review).map_err(RepositoryError::from))
            .collect()
    }
}

impl ReviewWriter for DieselRepository {
    fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let db_new_review: DbNewReview = new_review.into();

        let db_review = diesel::insert_into(reviews::table)
            .values(&db_new_review)
            .get_result::<DbReview>(&mut conn)?;

        Review::try_from(db_review).map_err(RepositoryError::from)
    }

    fn set_review_published(&self, id: ReviewId, is_published: bool) -> RepositoryResult<Review> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let db_review = diesel::update(reviews::table.find(id.get()))
            .set(reviews::is_published.eq(is_published))
            .get_result::<DbReview>(&mut conn)?;

        Review::try_from(db_review).map_err(RepositoryError::from)
    }
}
