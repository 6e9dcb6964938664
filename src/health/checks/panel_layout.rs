//! Nine-slice layout health check

use crate::health::check::{CheckResult, SystemCheck};
use crate::panel::{
    DrawCommand, PanelSprite, PanelSpriteData, Piece, RecordingBatch, StaticTextureProvider,
};

/// Lays out a reference panel and checks that the pieces tile its bounds
pub struct PanelLayoutCheck {
    texture_size: (u32, u32),
    margin: f32,
    sizes: Vec<(f32, f32)>,
}

impl PanelLayoutCheck {
    pub fn new() -> Self {
        Self {
            texture_size: (48, 48),
            margin: 12.0,
            sizes: vec![(48.0, 48.0), (200.0, 100.0), (24.0, 24.0), (0.0, 0.0)],
        }
    }
}

impl Default for PanelLayoutCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for PanelLayoutCheck {
    fn name(&self) -> &'static str {
        "Panel Layout"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates nine-slice geometry and draw dispatch")
    }

    fn check(&self) -> CheckResult {
        let (tw, th) = self.texture_size;
        let textures = StaticTextureProvider::new().with_texture("health", tw, th);
        let data = PanelSpriteData {
            texture: "health".to_string(),
            width: 0.0,
            height: 0.0,
            top_margin: self.margin,
            right_margin: self.margin,
            bottom_margin: self.margin,
            left_margin: self.margin,
        };

        let mut panel = match PanelSprite::new(&data, &textures) {
            Ok(panel) => panel,
            Err(e) => return CheckResult::fail(format!("Panel creation failed: {}", e)),
        };

        let mut details = Vec::new();
        let mut failed = false;

        for &(width, height) in &self.sizes {
            panel.set_size(width, height);
            let slices = panel.slices();

            let negative = slices
                .iter()
                .any(|s| s.dest.width < 0.0 || s.dest.height < 0.0);
            let outside = slices.iter().any(|s| {
                s.source.x < 0.0
                    || s.source.y < 0.0
                    || s.source.right() > tw as f32
                    || s.source.bottom() > th as f32
            });

            // Only a panel at least as large as its margins tiles exactly
            let tiles = if width >= self.margin * 2.0 && height >= self.margin * 2.0 {
                let row = [Piece::TopLeft, Piece::Top, Piece::TopRight]
                    .iter()
                    .map(|&p| panel.layout().slice(p).dest.width)
                    .sum::<f32>();
                let column = [Piece::TopLeft, Piece::Left, Piece::BottomLeft]
                    .iter()
                    .map(|&p| panel.layout().slice(p).dest.height)
                    .sum::<f32>();
                (row - width).abs() < 1e-3 && (column - height).abs() < 1e-3
            } else {
                true
            };

            let mut batch = RecordingBatch::new();
            let command = panel.draw_command();
            command.dispatch(&mut batch);
            let dispatched = batch.region_count() == command.visible_slice_count();

            if negative || outside || !tiles || !dispatched {
                failed = true;
                details.push(format!(
                    "  ✗ {}x{}: negative={} outside_texture={} tiles={} dispatched={}",
                    width, height, negative, outside, tiles, dispatched
                ));
            } else {
                details.push(format!(
                    "  ✓ {}x{}: {} regions drawn",
                    width,
                    height,
                    batch.region_count()
                ));
            }
        }

        let details_str = details.join("\n");
        if failed {
            CheckResult::fail("Nine-slice layout violated its invariants").with_details(details_str)
        } else {
            CheckResult::pass(format!("{} panel sizes validated", self.sizes.len()))
                .with_details(details_str)
        }
    }
}
