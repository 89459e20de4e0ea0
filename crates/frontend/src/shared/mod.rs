pub mod api_utils;
pub mod components;
pub mod icons;
pub mod list_utils;
pub mod selection;
