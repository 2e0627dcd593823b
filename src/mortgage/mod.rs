pub mod calculations;
pub mod pdf;
pub mod submission_client;
