pub mod m202608250001_create_makes;
pub mod m202608250002_create_models;
pub mod m202608250003_create_classifieds;
pub mod m202608250004_create_images;
