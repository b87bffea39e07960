pub mod builder;
pub mod connector;
pub mod normalize;
pub mod operations;
pub mod rest;
pub mod types;

// Re-export main components
pub use builder::NodBuilder;
pub use connector::NodConnector;
pub use operations::{Operation, PAGE_SIZE};
pub use rest::NodRest;
pub use types::{OperationParams, ProductFilter};
