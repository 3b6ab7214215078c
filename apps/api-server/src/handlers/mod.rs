//! HTTP handlers and route configuration.

mod post;
mod user;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            // User routes; all but registration need a bearer token
            .route("/user", web::post().to(user::create))
            .route("/users", web::get().to(user::find_all))
            .route("/user/{uid}", web::get().to(user::find_by_uid))
            .route("/user/{uid}", web::put().to(user::update))
            .route("/user/{uid}", web::delete().to(user::delete))
            // Post routes
            .service(
                web::resource("/post")
                    // Undecodable bodies are validation failures here, not 400s
                    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                        AppError::Validation(err.to_string()).into()
                    }))
                    .route(web::post().to(post::create)),
            )
            .route("/posts", web::get().to(post::find_all)),
    );
}
