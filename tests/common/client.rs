use actix_web::{web, App};
use std::sync::Arc;
use sample_api::db::UserStore;
use sample_api::routes::{configure_routes, static_files};
use sample_api::utils::upload::UploadStore;

pub const BOUNDARY: &str = "----sampleapitestboundary";

pub struct TestClient {
    pub db: UserStore,
    pub uploads: UploadStore,
}

impl TestClient {
    pub fn new(db: UserStore, uploads: UploadStore) -> Self {
        TestClient { db, uploads }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.uploads.clone()))
            .configure(configure_routes)
            .service(static_files(self.uploads.root()))
    }
}

/// Builds a one-field `multipart/form-data` body. Returns the content type
/// header value and the payload.
#[allow(dead_code)]
pub fn multipart_body(field: &str, filename: &str, content: &[u8]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

/// Builds a `multipart/form-data` body of plain text fields.
#[allow(dead_code)]
pub fn multipart_fields(fields: &[(&str, &str)]) -> (String, Vec<u8>) {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    (format!("multipart/form-data; boundary={BOUNDARY}"), body.into_bytes())
}
