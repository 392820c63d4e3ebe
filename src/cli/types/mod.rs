//! Validated value types for football player records.

pub mod ids;
pub mod image_ref;
pub mod name;
