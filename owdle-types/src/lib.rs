pub mod errors;
pub mod game;
pub mod hero;
pub mod settings;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use hero::*;
pub use settings::*;
