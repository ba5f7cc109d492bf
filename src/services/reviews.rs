//! Review moderation.

use crate::domain::review::Review;
use crate::domain::types::ReviewId;
use crate::dto::listing::{ListPageData, ListQuery};
use crate::repository::{ReviewReader, ReviewWriter};
use crate::services::listing::build_list_page;
use crate::services::{ServiceError, ServiceResult};

/// Published reviews count as active.
pub fn load_reviews_page<R>(
    repo: &R,
    query: ListQuery,
    page_size: usize,
) -> ServiceResult<ListPageData<Review>>
where
    R: ReviewReader + ?Sized,
{
    let reviews = repo.list_reviews().map_err(|err| {
        log::error!("Failed to list reviews: {err}");
        err
    })?;

    Ok(build_list_page(reviews, query, page_size))
}

/// Publishes or hides a review. Setting the current state again is a no-op.
pub fn set_review_published<R>(repo: &R, review_id: i32, publish: bool) -> ServiceResult<Review>
where
    R: ReviewReader + ReviewWriter + ?Sized,
{
    let review_id = ReviewId::new(review_id)?;

    let review = repo
        .get_review_by_id(review_id)
        .map_err(|err| {
            log::error!("Failed to load review {review_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    if review.is_published == publish {
        return Ok(review);
    }

    repo.set_review_published(review.id, publish)
        .map_err(|err| {
            log::error!("Failed to update review {review_id}: {err}");
            ServiceError::from(err)
        })
}
