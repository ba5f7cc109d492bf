use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::dashboard;
use crate::session::AdminSession;

#[get("/")]
pub async fn show_index(
    _session: AdminSession,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match dashboard::load_dashboard(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index", true);
            context.insert("dashboard", &data);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
