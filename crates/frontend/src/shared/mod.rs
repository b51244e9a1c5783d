pub mod api_utils;
pub mod booking_api;
pub mod category_colors;
pub mod components;
pub mod icons;
pub mod list_utils;
