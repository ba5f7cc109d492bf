//! Country management pages.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::listing::ListQuery;
use crate::forms::country::AddCountryForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, countries as countries_service};
use crate::session::AdminSession;

#[get("/countries")]
pub async fn show_countries(
    _session: AdminSession,
    query: web::Query<ListQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = query.into_inner();
    match countries_service::load_countries_page(repo.get_ref(), query, server_config.page_size) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "countries", true);
            context.insert("list", &data);
            render_template(&tera, "countries/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render countries page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/countries/add")]
pub async fn add_country(
    _session: AdminSession,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCountryForm>,
) -> impl Responder {
    match countries_service::add_country(repo.get_ref(), form) {
        Ok(country) => {
            FlashMessage::success(format!("Country {} added.", country.name)).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Conflict(_)) => {
            FlashMessage::error("This country already exists.").send();
        }
        Err(err) => {
            log::error!("Failed to add country: {err}");
            FlashMessage::error("Could not add the country.").send();
        }
    }
    redirect("/countries")
}

#[post("/countries/{country_id}/toggle")]
pub async fn toggle_country(
    _session: AdminSession,
    country_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match countries_service::toggle_country(repo.get_ref(), country_id.into_inner()) {
        Ok(country) => {
            let verb = if country.is_active { "activated" } else { "deactivated" };
            FlashMessage::success(format!("Country {} {verb}.", country.name)).send();
        }
        Err(ServiceError::NotFound | ServiceError::TypeConstraint(_)) => {
            FlashMessage::error("Country not found.").send();
        }
        Err(err) => {
            log::error!("Failed to toggle country: {err}");
            FlashMessage::error("Could not update the country.").send();
        }
    }
    redirect("/countries")
}
