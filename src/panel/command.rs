//! Command-based panel drawing
//!
//! A [`PanelCommand`] is a self-contained description of one panel sprite
//! draw. The renderer implements [`SpriteBatch`] and receives one node per
//! command followed by the node's non-empty region draws.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::geometry::{PanelTransform, Rect};
use super::layout::{Piece, Slice};

/// Rendering collaborator that accepts textured region draws
pub trait SpriteBatch {
    /// Starts a transform node placed at `z_order` within `layer`
    fn begin_node(&mut self, layer: &str, z_order: i32, transform: &PanelTransform);

    /// Draws `source` of `texture` into `dest` (node-local), optionally clipped
    fn draw_region(&mut self, texture: &str, source: Rect, dest: Rect, clip: Option<Rect>);

    /// Ends the current node
    fn end_node(&mut self) {}
}

/// Core trait that all drawable commands implement
pub trait DrawCommand: Send + Sync {
    /// Dispatch this command to a sprite batch
    fn dispatch(&self, batch: &mut dyn SpriteBatch);

    /// Batching key - commands with same key can be batched together
    /// Format: high 32 bits = texture hash, low 32 bits = layer/z hash
    fn batch_key(&self) -> u64;

    /// Approximate memory size for profiling (optional)
    fn size_hint(&self) -> usize {
        std::mem::size_of_val(self)
    }

    /// Debug name for render debugging
    fn debug_name(&self) -> &str;
}

/// Helper for computing batch keys
pub fn compute_batch_key(texture: &str, layer: &str, z_order: i32) -> u64 {
    let mut hasher = DefaultHasher::new();
    texture.hash(&mut hasher);
    let texture_hash = hasher.finish();

    let mut hasher = DefaultHasher::new();
    layer.hash(&mut hasher);
    z_order.hash(&mut hasher);
    let placement_hash = hasher.finish();

    (texture_hash & 0xFFFFFFFF00000000) | (placement_hash & 0x00000000FFFFFFFF)
}

/// Draw command for one panel sprite
#[derive(Clone, Debug)]
pub struct PanelCommand {
    pub texture: String,
    pub transform: PanelTransform,
    pub layer: String,
    pub z_order: i32,
    pub slices: [Slice; 9],
}

impl PanelCommand {
    /// Number of slices that would actually produce pixels
    pub fn visible_slice_count(&self) -> usize {
        self.slices.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn slice(&self, piece: Piece) -> Option<&Slice> {
        self.slices.iter().find(|s| s.piece == piece)
    }
}

impl DrawCommand for PanelCommand {
    fn dispatch(&self, batch: &mut dyn SpriteBatch) {
        batch.begin_node(&self.layer, self.z_order, &self.transform);
        for slice in self.slices.iter().filter(|s| !s.is_empty()) {
            batch.draw_region(&self.texture, slice.source, slice.dest, slice.clip);
        }
        batch.end_node();
    }

    fn batch_key(&self) -> u64 {
        compute_batch_key(&self.texture, &self.layer, self.z_order)
    }

    fn debug_name(&self) -> &str {
        "Panel sprite"
    }
}

/// One region draw captured by a [`RecordingBatch`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRegion {
    pub texture: String,
    pub source: Rect,
    pub dest: Rect,
    pub clip: Option<Rect>,
}

/// A node captured by a [`RecordingBatch`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedNode {
    pub layer: String,
    pub z_order: i32,
    pub transform: PanelTransform,
    pub regions: Vec<RecordedRegion>,
}

/// Sprite batch that records everything it receives.
///
/// Stands in for a real renderer in tests and headless health checks.
#[derive(Debug, Default)]
pub struct RecordingBatch {
    pub nodes: Vec<RecordedNode>,
}

impl RecordingBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region_count(&self) -> usize {
        self.nodes.iter().map(|n| n.regions.len()).sum()
    }
}

impl SpriteBatch for RecordingBatch {
    fn begin_node(&mut self, layer: &str, z_order: i32, transform: &PanelTransform) {
        self.nodes.push(RecordedNode {
            layer: layer.to_string(),
            z_order,
            transform: *transform,
            regions: Vec::new(),
        });
    }

    fn draw_region(&mut self, texture: &str, source: Rect, dest: Rect, clip: Option<Rect>) {
        if let Some(node) = self.nodes.last_mut() {
            node.regions.push(RecordedRegion {
                texture: texture.to_string(),
                source,
                dest,
                clip,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::geometry::Margins;
    use super::super::layout::compute_slices;
    use super::*;

    fn command(margins: Margins) -> PanelCommand {
        PanelCommand {
            texture: "frame.png".to_string(),
            transform: PanelTransform::default(),
            layer: String::new(),
            z_order: 3,
            slices: compute_slices([32.0, 32.0], margins, [64.0, 48.0]),
        }
    }

    #[test]
    fn test_dispatch_sends_all_visible_slices() {
        let cmd = command(Margins::uniform(4.0));
        let mut batch = RecordingBatch::new();
        cmd.dispatch(&mut batch);

        assert_eq!(batch.nodes.len(), 1);
        assert_eq!(batch.nodes[0].z_order, 3);
        assert_eq!(batch.region_count(), 9);
        assert!(batch.nodes[0].regions.iter().all(|r| r.texture == "frame.png"));
    }

    #[test]
    fn test_dispatch_skips_empty_slices() {
        let cmd = command(Margins::new(0.0, 0.0, 4.0, 4.0));
        let mut batch = RecordingBatch::new();
        cmd.dispatch(&mut batch);

        // Top edge, both top corners and right edge + bottom-right corner are empty.
        assert_eq!(cmd.visible_slice_count(), 4);
        assert_eq!(batch.region_count(), 4);
    }

    #[test]
    fn test_corner_draws_carry_clip() {
        let cmd = command(Margins::uniform(4.0));
        let mut batch = RecordingBatch::new();
        cmd.dispatch(&mut batch);

        let clipped = batch.nodes[0]
            .regions
            .iter()
            .filter(|r| r.clip.is_some())
            .count();
        assert_eq!(clipped, 4);
        assert_eq!(
            cmd.slice(Piece::TopLeft).and_then(|s| s.clip),
            Some(Rect::new(0.0, 0.0, 4.0, 4.0))
        );
    }

    #[test]
    fn test_batch_key_depends_on_texture_and_placement() {
        let a = command(Margins::uniform(4.0));
        let mut b = a.clone();
        assert_eq!(a.batch_key(), b.batch_key());

        b.z_order = 4;
        assert_ne!(a.batch_key(), b.batch_key());

        let mut c = a.clone();
        c.texture = "other.png".to_string();
        assert_ne!(a.batch_key() >> 32, c.batch_key() >> 32);
    }
}
