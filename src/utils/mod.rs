pub mod params;
pub mod token;
pub mod upload;
pub mod webutils;
