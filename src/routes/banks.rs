//! Bank management pages.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::listing::ListQuery;
use crate::forms::bank::AddBankForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, banks as banks_service};
use crate::session::AdminSession;

#[get("/banks")]
pub async fn show_banks(
    _session: AdminSession,
    query: web::Query<ListQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = query.into_inner();
    match banks_service::load_banks_page(repo.get_ref(), query, server_config.page_size) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "banks", true);
            context.insert("list", &data);
            render_template(&tera, "banks/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render banks page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/banks/add")]
pub async fn add_bank(
    _session: AdminSession,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddBankForm>,
) -> impl Responder {
    match banks_service::add_bank(repo.get_ref(), form) {
        Ok(bank) => {
            FlashMessage::success(format!("Bank {} added.", bank.name)).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Conflict(_)) => {
            FlashMessage::error("This bank already exists.").send();
        }
        Err(err) => {
            log::error!("Failed to add bank: {err}");
            FlashMessage::error("Could not add the bank.").send();
        }
    }
    redirect("/banks")
}

#[post("/banks/{bank_id}/toggle")]
pub async fn toggle_bank(
    _session: AdminSession,
    bank_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match banks_service::toggle_bank(repo.get_ref(), bank_id.into_inner()) {
        Ok(bank) => {
            let verb = if bank.is_active { "activated" } else { "deactivated" };
            FlashMessage::success(format!("Bank {} {verb}.", bank.name)).send();
        }
        Err(ServiceError::NotFound | ServiceError::TypeConstraint(_)) => {
            FlashMessage::error("Bank not found.").send();
        }
        Err(err) => {
            log::error!("Failed to toggle bank: {err}");
            FlashMessage::error("Could not update the bank.").send();
        }
    }
    redirect("/banks")
}
