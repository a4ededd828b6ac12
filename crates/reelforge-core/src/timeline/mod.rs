//! Edit Payload Module
//!
//! Serde models for the render-request payload: tracks, clips, assets,
//! soundtrack and output specification.

mod models;
pub use models::*;
