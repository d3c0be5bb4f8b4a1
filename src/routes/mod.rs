use crate::utils::webutils::{validate_token, validation_error};
use actix_multipart::form::MultipartFormConfig;
use actix_web::web;
use std::path::Path;

pub mod auth;
pub mod fake_items;
pub mod files;
pub mod food;
pub mod items;
pub mod register;
pub mod root;
pub mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_token);

    cfg.app_data(web::JsonConfig::default().error_handler(validation_error))
        .app_data(web::FormConfig::default().error_handler(validation_error))
        .app_data(web::PathConfig::default().error_handler(validation_error))
        .app_data(web::QueryConfig::default().error_handler(validation_error))
        .app_data(
            MultipartFormConfig::default()
                .total_limit(usize::MAX)
                .memory_limit(usize::MAX)
                .error_handler(validation_error),
        );

    cfg.service(root::root_get)
        .service(root::root_post)
        .service(root::deprecated)
        .service(root::echo);
    cfg.service(
        web::scope("/auth")
            .service(auth::token::token)
            .service(
                web::scope("/users/me")
                    .service(auth::me::read_users_me)
                    .wrap(user_auth)
            )
    );
    cfg.service(
        web::scope("/files")
            .service(files::upload::upload_form)
            .service(files::upload::upload)
    );
    cfg.service(
        web::scope("/items")
            .service(items::list_items)
            .service(items::create_item)
            .service(items::get_item)
            .service(items::update_item)
    );
    cfg.service(
        web::scope("/fake_items")
            .service(fake_items::list_fake_items)
            .service(fake_items::get_fake_item)
    );
    cfg.service(
        web::scope("/users")
            .service(users::current_user_placeholder)
            .service(users::get_user)
    );
    cfg.service(web::scope("/food").service(food::get_food));
    cfg.service(web::scope("/register").service(register::register));
}

/// Serves the upload directory under `/static`.
pub fn static_files(dir: &Path) -> actix_files::Files {
    actix_files::Files::new("/static", dir)
}
