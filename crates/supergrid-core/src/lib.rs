// File: crates/supergrid-core/src/lib.rs
// Summary: Core library entry point; exports public API for grid configuration and rendering.

pub mod types;
pub mod transform;
pub mod lod;
pub mod bounds;
pub mod format;
pub mod command;
pub mod render;
pub mod pointer;
pub mod theme;

pub use types::{Point, Rgba};
pub use transform::Transform;
pub use lod::ZoomLevel;
pub use bounds::GridBounds;
pub use format::{format_coord, format_si, CoordFormatter};
pub use command::DrawCommand;
pub use render::{render, GridConfig, ViewState};
pub use pointer::{snap_to_pitch, snapshot_from_release};
pub use theme::Theme;
