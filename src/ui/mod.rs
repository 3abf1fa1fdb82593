//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw.rs` - Main draw functions
//! - `theme.rs` - Color themes and presets

mod draw;
pub mod theme;

// Re-export main draw function
pub use draw::draw;

// Re-export commonly used types
pub use theme::Theme;
