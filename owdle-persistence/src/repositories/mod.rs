pub mod daily_repository;
pub mod preferences_repository;

pub use daily_repository::*;
pub use preferences_repository::*;
