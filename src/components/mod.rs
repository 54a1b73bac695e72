pub mod badge;
pub mod error_banner;
pub mod item;
pub mod misc;
pub mod property_table;
