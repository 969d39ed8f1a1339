//! UI primitives.

pub mod avatar;
pub mod button;

pub use avatar::*;
pub use button::*;
