use actix_web::{middleware::Logger, web, App, HttpServer};
use sample_api::config::config;
use sample_api::db::{memory_service::MemoryService, UserStore};
use sample_api::routes::{configure_routes, static_files};
use sample_api::utils::upload::UploadStore;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = config();
    let addr = format!("{}:{}", config.host, config.port);

    let users: UserStore = Arc::new(MemoryService::with_fixture_users());
    let uploads = UploadStore::new(&config.static_dir, config.upload.collision_policy);
    uploads.ensure_root().await?;

    info!(
        "Serving {} (upload collision policy: {})",
        uploads.root().display(),
        uploads.policy()
    );
    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&users)))
            .app_data(web::Data::new(uploads.clone()))
            .configure(configure_routes)
            .service(static_files(uploads.root()))
    })
    .bind(addr)?
    .run()
    .await
}
