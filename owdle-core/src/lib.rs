pub mod comparator;
pub mod daily;
pub mod matcher;
pub mod normalize;
pub mod roster;
pub mod round;
pub mod round_events;
pub mod store;
pub mod variant;

// Re-export main components
pub use comparator::*;
pub use daily::*;
pub use matcher::*;
pub use normalize::*;
pub use roster::*;
pub use round::*;
pub use round_events::*;
pub use store::*;
pub use variant::*;
