//! Panel sprites (nine-slice rendering)
//!
//! # Architecture
//!
//! ```text
//! TextureProvider ──size──▶ NineSliceLayout ──slices──▶ PanelSprite
//!                                                          │
//!                                                     PanelCommand
//!                                                          │
//!                                                     SpriteBatch (renderer)
//! ```
//!
//! - `geometry`: rectangles, margins, and the panel transform
//! - `layout`: the pure nine-slice computation
//! - `sprite`: object-level state and setters that trigger re-slicing
//! - `command`: draw command handed to the renderer
//! - `texture`: texture dimension lookup

mod command;
mod error;
mod geometry;
mod layout;
mod sprite;
mod texture;

pub use command::{
    DrawCommand, PanelCommand, RecordedNode, RecordedRegion, RecordingBatch, SpriteBatch,
    compute_batch_key,
};
pub use error::PanelError;
pub use geometry::{Margins, PanelTransform, Rect};
pub use layout::{NineSliceLayout, Piece, Slice, compute_slices};
pub use sprite::{InitialInstanceData, PanelSprite, PanelSpriteData};
pub use texture::{ImageFileProvider, StaticTextureProvider, TextureProvider};
