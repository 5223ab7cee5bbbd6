//! Resource types

pub mod any;
pub mod consent;
pub mod implementation_guide;
pub mod plan_definition;
pub mod structure_map;

pub use any::{AnyResource, MODELED_RESOURCES};
pub use consent::*;
pub use implementation_guide::*;
pub use plan_definition::*;
pub use structure_map::*;
