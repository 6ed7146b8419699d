pub mod class_value;
pub mod error;
pub mod join;
pub mod lookup;
pub mod merge;
pub mod normalize;
pub mod types;

// Re-export commonly used types
pub use class_value::ClassValue;
pub use error::ConfigError;
pub use join::join_classes;
pub use lookup::ClassGroupLookup;
pub use merge::{resolve_conflicts, Claim, MergeToken};
pub use normalize::split_classes;
pub use types::{ExtendConfig, MergeConfig};
