//! Product-variant entry.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::listing::ListQuery;
use crate::forms::product_variant::AddProductVariantForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, product_variants as product_variants_service};
use crate::session::AdminSession;

#[get("/products/variants")]
pub async fn show_product_variants(
    _session: AdminSession,
    query: web::Query<ListQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = query.into_inner();
    match product_variants_service::load_product_variants_page(
        repo.get_ref(),
        query,
        server_config.page_size,
    ) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "product_variants", true);
            context.insert("list", &data);
            render_template(&tera, "product_variants/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render product variants page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/products/variants/add")]
pub async fn add_product_variant(
    _session: AdminSession,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddProductVariantForm>,
) -> impl Responder {
    match product_variants_service::add_product_variant(repo.get_ref(), form) {
        Ok(variant) => {
            FlashMessage::success(format!("Variant {} added.", variant.sku)).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add product variant: {err}");
            FlashMessage::error("Could not add the variant.").send();
        }
    }
    redirect("/products/variants")
}
