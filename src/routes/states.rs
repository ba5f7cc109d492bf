//! State management pages.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::listing::ListQuery;
use crate::forms::state::AddStateForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, states as states_service};
use crate::session::AdminSession;

#[get("/states")]
pub async fn show_states(
    _session: AdminSession,
    query: web::Query<ListQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = query.into_inner();
    match states_service::load_states_page(repo.get_ref(), query, server_config.page_size) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "states", true);
            context.insert("list", &data);
            render_template(&tera, "states/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render states page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/states/add")]
pub async fn add_state(
    _session: AdminSession,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddStateForm>,
) -> impl Responder {
    match states_service::add_state(repo.get_ref(), form) {
        Ok(state) => {
            FlashMessage::success(format!("State {} added.", state.name)).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Conflict(_)) => {
            FlashMessage::error("This state already exists.").send();
        }
        Err(err) => {
            log::error!("Failed to add state: {err}");
            FlashMessage::error("Could not add the state.").send();
        }
    }
    redirect("/states")
}

#[post("/states/{state_id}/toggle")]
pub async fn toggle_state(
    _session: AdminSession,
    state_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match states_service::toggle_state(repo.get_ref(), state_id.into_inner()) {
        Ok(state) => {
            let verb = if state.is_active { "activated" } else { "deactivated" };
            FlashMessage::success(format!("State {} {verb}.", state.name)).send();
        }
        Err(ServiceError::NotFound | ServiceError::TypeConstraint(_)) => {
            FlashMessage::error("State not found.").send();
        }
        Err(err) => {
            log::error!("Failed to toggle state: {err}");
            FlashMessage::error("Could not update the state.").send();
        }
    }
    redirect("/states")
}
