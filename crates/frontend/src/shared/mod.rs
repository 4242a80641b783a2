pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod fetch_guard;
pub mod icons;
pub mod page_frame;
