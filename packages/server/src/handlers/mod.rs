pub mod firmware;
pub mod upload;
