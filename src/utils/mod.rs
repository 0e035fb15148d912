pub mod config;
pub mod database;
pub mod json;
pub mod pagination;
pub mod validation;
