//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

pub mod auth;
pub mod banks;
pub mod countries;
pub mod main;
pub mod product_variants;
pub mod reviews;
pub mod seller_fields;
pub mod states;

/// One entry of the site header.
#[derive(Debug, Serialize)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        key: "index",
        label: "Dashboard",
        href: "/",
    },
    NavItem {
        key: "banks",
        label: "Banks",
        href: "/banks",
    },
    NavItem {
        key: "countries",
        label: "Countries",
        href: "/countries",
    },
    NavItem {
        key: "states",
        label: "States",
        href: "/states",
    },
    NavItem {
        key: "seller_fields",
        label: "Seller form",
        href: "/seller-fields",
    },
    NavItem {
        key: "product_variants",
        label: "Product variants",
        href: "/products/variants",
    },
    NavItem {
        key: "reviews",
        label: "Reviews",
        href: "/reviews",
    },
];

/// Maps a flash level to the Bootstrap alert class.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context every page starts from: alerts, header entries and session state.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    current_page: &str,
    signed_in: bool,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context.insert("nav_items", NAV_ITEMS);
    context.insert("signed_in", &signed_in);
    context
}
