mod file_object;
mod firmware;

pub use file_object::FileObject;
pub use firmware::Firmware;
