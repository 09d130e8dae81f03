pub mod clipboard;
pub mod platform;
