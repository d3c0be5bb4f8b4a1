use actix_multipart::form::{bytes::Bytes, MultipartForm};
use serde::{Deserialize, Serialize};

#[derive(MultipartForm)]
pub struct RUpload {
    pub in_file: Bytes,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UploadRes {
    pub file: String,
}
