pub mod admin;
pub mod book;
pub mod check_phone;
pub mod config;
mod console;
