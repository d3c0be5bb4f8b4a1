pub mod error;
pub mod food;
pub mod item;
pub mod response;
pub mod token;
pub mod upload;
pub mod user;
