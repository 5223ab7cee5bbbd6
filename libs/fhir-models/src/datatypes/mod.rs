//! Datatypes shared across resources

pub mod general;
pub mod metadata;
pub mod special;

pub use general::*;
pub use metadata::*;
pub use special::*;
