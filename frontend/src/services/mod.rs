pub mod date_utils;
pub mod html_to_image;
pub mod local_storage;
pub mod logging;
