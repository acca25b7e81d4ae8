//! Report module - rendering conversion outcomes

pub mod outcome;
pub mod render;

pub use outcome::*;
pub use render::*;
