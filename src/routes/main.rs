use actix_web::{Responder, get, web};
use tera::{Context, Tera};

use crate::bridge::HandlerCall;
use crate::models::config::ServerConfig;
use crate::routes::render_template;

#[get("/")]
pub async fn show_index(
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let call = HandlerCall::insider_purchase_demo();

    let mut context = Context::new();
    context.insert("handler", &call.handler);
    context.insert("handler_args", &call.args_json());
    context.insert(
        "notification_ttl_ms",
        &(server_config.notification_ttl_secs * 1000),
    );
    context.insert(
        "bridge_timeout_ms",
        &(server_config.bridge_timeout_secs * 1000),
    );

    render_template(&tera, "index.html", &context)
}
