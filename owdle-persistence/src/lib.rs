pub mod errors;
pub mod repositories;
pub mod storage;

pub use errors::*;
pub use repositories::*;
pub use storage::*;
