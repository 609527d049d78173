pub mod error;
pub mod genre;
