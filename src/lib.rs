pub mod config;
pub mod feed;
pub mod listings;
pub mod logger;
pub mod models;
pub mod mortgage;
pub mod web;

pub use listings::classify::{classify, Category, CategoryFilter};
pub use mortgage::calculations::compute_payment;
