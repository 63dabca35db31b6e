pub mod classified;
pub mod image;
pub mod make;
pub mod vehicle_model;

pub use classified::Entity as Classified;
pub use image::Entity as Image;
pub use make::Entity as Make;
pub use vehicle_model::Entity as VehicleModel;
