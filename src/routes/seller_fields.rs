//! Seller registration form settings.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::listing::ListQuery;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, seller_fields as seller_fields_service};
use crate::session::AdminSession;

#[get("/seller-fields")]
pub async fn show_seller_fields(
    _session: AdminSession,
    query: web::Query<ListQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = query.into_inner();
    match seller_fields_service::load_seller_fields_page(
        repo.get_ref(),
        query,
        server_config.page_size,
    ) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "seller_fields", true);
            context.insert("list", &data.list);
            context.insert("visible_count", &data.visible_count);
            context.insert("required_count", &data.required_count);
            render_template(&tera, "seller_fields/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render seller fields page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Checkbox pairs arrive as repeated keys, so the body is parsed by the form.
///
/// The list position travels in the action's query string and is restored
/// by the redirect.
#[post("/seller-fields")]
pub async fn save_seller_fields(
    _session: AdminSession,
    query: web::Query<ListQuery>,
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    let location = format!("/seller-fields?{}", query.to_query_string());
    match seller_fields_service::save_seller_fields(repo.get_ref(), &body) {
        Ok(_) => {
            FlashMessage::success("Seller form settings saved.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to save seller fields: {err}");
            FlashMessage::error("Could not save the seller form settings.").send();
        }
    }
    redirect(&location)
}
