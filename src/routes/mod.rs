use actix_web::HttpResponse;
use log::error;
use tera::{Context, Tera};

pub mod booking;
pub mod main;

/// Renders a Tera template into an HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Template rendering error for {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
