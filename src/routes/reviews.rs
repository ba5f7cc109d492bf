//! Review moderation pages.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::listing::ListQuery;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, reviews as reviews_service};
use crate::session::AdminSession;

#[get("/reviews")]
pub async fn show_reviews(
    _session: AdminSession,
    query: web::Query<ListQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = query.into_inner();
    match reviews_service::load_reviews_page(repo.get_ref(), query, server_config.page_size) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "reviews", true);
            context.insert("list", &data);
            render_template(&tera, "reviews/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render reviews page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn moderate(repo: &DieselRepository, review_id: i32, publish: bool) -> HttpResponse {
    match reviews_service::set_review_published(repo, review_id, publish) {
        Ok(review) => {
            let verb = if review.is_published { "published" } else { "hidden" };
            FlashMessage::success(format!("Review of {} {verb}.", review.product)).send();
        }
        Err(ServiceError::NotFound | ServiceError::TypeConstraint(_)) => {
            FlashMessage::error("Review not found.").send();
        }
        Err(err) => {
            log::error!("Failed to moderate review {review_id}: {err}");
            FlashMessage::error("Could not update the review.").send();
        }
    }
    redirect("/reviews")
}

#[post("/reviews/{review_id}/publish")]
pub async fn publish_review(
    _session: AdminSession,
    review_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    moderate(repo.get_ref(), review_id.into_inner(), true)
}

#[post("/reviews/{review_id}/hide")]
pub async fn hide_review(
    _session: AdminSession,
    review_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    moderate(repo.get_ref(), review_id.into_inner(), false)
}
