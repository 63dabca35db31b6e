pub mod classified;
pub mod image;
pub mod taxonomy;
pub mod truncate;
