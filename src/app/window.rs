//! Window attributes and surface helpers

use winit::dpi::LogicalSize;
use winit::window::{Fullscreen, Window, WindowAttributes};

use super::config::{GameViewConfig, WindowConfig};

/// Smallest window, as a fraction of the game view
const MIN_VIEW_FRACTION: f64 = 0.25;

/// Builds window attributes from the window and game-view configuration.
///
/// The window never shrinks below a quarter of the game view, so pointer
/// scaling stays meaningful.
pub fn window_attributes_from_config(
    window: &WindowConfig,
    game: &GameViewConfig,
) -> WindowAttributes {
    let min_size = LogicalSize::new(
        f64::from(game.width) * MIN_VIEW_FRACTION,
        f64::from(game.height) * MIN_VIEW_FRACTION,
    );

    let mut attrs = WindowAttributes::default()
        .with_title(window.title.clone())
        .with_inner_size(LogicalSize::new(window.width, window.height))
        .with_min_inner_size(min_size)
        .with_resizable(window.resizable)
        .with_decorations(window.decorated);

    if window.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    attrs
}

/// Inner size of the window in physical pixels, the space cursor events use
pub fn surface_size(window: &Window) -> [f32; 2] {
    let size = window.inner_size();
    [size.width as f32, size.height as f32]
}
