//! HTTP handlers and route configuration.

mod admin;
mod auth;
mod editor;
mod health;
mod home;
mod present;
mod views;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/health/ready", web::get().to(health::readiness))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Mounted views
            .service(
                web::scope("/views")
                    .route("", web::post().to(views::mount))
                    .service(
                        web::scope("/{view}")
                            .route("", web::delete().to(views::unmount))
                            .route("/toasts", web::get().to(views::toasts))
                            .route("/toasts/{toast}", web::delete().to(views::dismiss_toast))
                            .route("/posts/{title}", web::get().to(views::read_post))
                            .route("/home", web::get().to(home::show))
                            .route("/home", web::post().to(home::remount))
                            .route("/home/next", web::post().to(home::next))
                            .route("/home/previous", web::post().to(home::previous))
                            // Admin routes
                            .route("/dashboard", web::post().to(admin::mount))
                            .route("/dashboard", web::get().to(admin::show))
                            .route("/dashboard/next", web::post().to(admin::next))
                            .route("/dashboard/previous", web::post().to(admin::previous))
                            .route("/dashboard/search", web::post().to(admin::search))
                            .route("/dashboard/search", web::delete().to(admin::clear_search))
                            // Fixed segments before the `{id}` catch-all
                            .route("/dashboard/delete/confirm", web::post().to(admin::confirm_delete))
                            .route("/dashboard/delete/cancel", web::post().to(admin::cancel_delete))
                            .route("/dashboard/delete/{id}", web::post().to(admin::request_delete))
                            .route("/editor", web::post().to(editor::create))
                            .route("/editor/draft", web::put().to(editor::update_draft))
                            .route("/editor/submit", web::post().to(editor::submit))
                            .route("/editor/{id}", web::post().to(editor::edit)),
                    ),
            ),
    );
}
