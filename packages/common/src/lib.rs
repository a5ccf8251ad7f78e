pub mod backend;
pub mod objects;
pub mod sanitize;
pub mod uid;

pub use objects::{FileObject, Firmware};
pub use uid::Uid;
