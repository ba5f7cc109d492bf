//! Sign-in and sign-out.

use actix_identity::Identity;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::auth::LoginPageData;
use crate::forms::auth::LoginForm;
use crate::routes::{base_context, redirect, render_template};
use crate::services::auth::{self as auth_service, HttpAuthClient, LoginError};
use crate::session::AdminSession;

#[get("/login")]
pub async fn show_login(
    session: Option<AdminSession>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if session.is_some() {
        return redirect("/");
    }

    let mut context = base_context(&flash_messages, "login", false);
    context.insert("login", &LoginPageData::default());
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    req: HttpRequest,
    auth_client: web::Data<HttpAuthClient>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    let email = form.email.trim().to_string();

    match auth_service::login(auth_client.get_ref(), form).await {
        Ok(token) => match AdminSession::begin(&req, token) {
            Ok(_) => redirect("/"),
            Err(err) => {
                log::error!("Failed to attach identity: {err}");
                HttpResponse::InternalServerError().finish()
            }
        },
        Err(LoginError::Validation(errors)) => {
            let mut context = base_context(&flash_messages, "login", false);
            context.insert("login", &LoginPageData { email, errors });
            render_template(&tera, "auth/login.html", &context)
        }
        Err(LoginError::Request(message)) => {
            FlashMessage::error(message).send();
            redirect("/login")
        }
    }
}

#[post("/logout")]
pub async fn logout(identity: Identity) -> impl Responder {
    AdminSession::end(identity);
    FlashMessage::info("Signed out.").send();
    redirect("/login")
}
