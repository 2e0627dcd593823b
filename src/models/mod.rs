pub mod listing;
pub mod mortgage;
