//! Template System
//!
//! Named style templates fixing every timing constant, effect cycle, luma
//! cycle and layout policy for one video style, plus the static registry
//! the edit service resolves them from.
//!
//! # Modules
//!
//! - `models`: template data structures
//! - `registry`: builtin catalog and lookup

pub mod models;
pub mod registry;

// Re-export main types
pub use models::{
    LayoutPolicy, OutputSpec, SelectionMode, Template, TextLimits, TitleStyle,
};
pub use registry::TemplateRegistry;
