pub mod auth;
pub mod database;
pub mod errors;
pub mod models;

pub use database::Database;
pub use errors::AppError;
