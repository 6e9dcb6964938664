//! Demo application handler
//!
//! Opens a window, tracks input, and keeps one panel sprite laid out inside
//! the game view. Draws go to a [`TracingBatch`], which logs them instead of
//! rasterizing.

use std::time::Instant;

use anyhow::Context;
use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use super::config::{PanelDemoConfig, RuntimeConfig};
use super::input::{InputCollector, InputFrame, keys};
use super::window::{surface_size, window_attributes_from_config};
use crate::panel::{
    DrawCommand, ImageFileProvider, PanelSprite, PanelTransform, Rect, SpriteBatch,
    StaticTextureProvider, TextureProvider,
};

/// Pixels the panel grows per wheel notch
const RESIZE_STEP: f32 = 16.0;
/// Pixels the panel moves per frame while an arrow key is held
const MOVE_STEP: f32 = 4.0;
/// Degrees added per press of R
const ROTATE_STEP: f32 = 15.0;

/// Sprite batch that reports draws through tracing
#[derive(Debug, Default)]
pub struct TracingBatch {
    regions: usize,
}

impl TracingBatch {
    pub fn region_count(&self) -> usize {
        self.regions
    }
}

impl SpriteBatch for TracingBatch {
    fn begin_node(&mut self, layer: &str, z_order: i32, transform: &PanelTransform) {
        self.regions = 0;
        debug!(
            layer,
            z_order,
            position = ?transform.position,
            rotation = transform.rotation,
            "Panel node"
        );
    }

    fn draw_region(&mut self, texture: &str, source: Rect, dest: Rect, clip: Option<Rect>) {
        self.regions += 1;
        debug!(texture, ?source, ?dest, ?clip, "Region draw");
    }

    fn end_node(&mut self) {
        debug!(regions = self.regions, "Panel node done");
    }
}

/// Main demo application
pub struct App {
    config: RuntimeConfig,
    window: Option<Window>,
    input: InputCollector,
    textures: StaticTextureProvider,
    panel: PanelSprite,
    batch: TracingBatch,
    last_update: Option<Instant>,
    dirty: bool,
}

impl App {
    /// Creates the demo application with the provided configuration
    pub fn new(config: RuntimeConfig) -> anyhow::Result<Self> {
        info!(profile = %config.profile, "Starting panel demo");
        info!(?config.window, "Window configuration");

        let textures = resolve_textures(&config.panel);
        let inset = config.panel.inset;
        let data = config.panel.sprite_data(
            config.game.width - inset * 2.0,
            config.game.height - inset * 2.0,
        );
        let mut panel =
            PanelSprite::new(&data, &textures).context("Failed to create demo panel")?;
        panel.set_x(inset);
        panel.set_y(inset);

        Ok(Self {
            input: InputCollector::new(&config.input, &config.game),
            config,
            window: None,
            textures,
            panel,
            batch: TracingBatch::default(),
            last_update: None,
            dirty: true,
        })
    }

    /// Creates the demo application with configuration loaded from environment
    pub fn from_env() -> anyhow::Result<Self> {
        let config = RuntimeConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            RuntimeConfig::default()
        });
        Self::new(config)
    }

    /// Runs one frame: reads input, updates the panel, advances the frame
    fn tick(&mut self, delta_time: f32) {
        // Read the frame BEFORE advancing so edges are still visible
        let frame = self.input.frame();
        if frame.current != frame.previous {
            debug!(
                delta_time,
                pointer = ?frame.current.pointer_position(),
                last_key = frame.current.last_pressed_key(),
                wheel = frame.current.wheel_delta(),
                "Input changed"
            );
        }

        // Each wheel event is applied exactly once
        let wheel = self.input.state_mut().consume_wheel_delta();
        self.update_panel(&frame, wheel);
        self.input.advance_frame();

        self.draw();
    }

    /// Applies this frame's input and wheel delta to the panel
    fn update_panel(&mut self, frame: &InputFrame, wheel: f32) {
        let input = &frame.current;

        if wheel != 0.0 {
            let notches = wheel / self.config.input.wheel_line_delta;
            let grow = notches * RESIZE_STEP;
            self.panel
                .set_size(self.panel.width() + grow, self.panel.height() + grow);
            self.dirty = true;
        }

        let dx = arrow_axis(input.is_key_pressed(keys::LEFT), input.is_key_pressed(keys::RIGHT));
        let dy = arrow_axis(input.is_key_pressed(keys::UP), input.is_key_pressed(keys::DOWN));
        if dx != 0.0 || dy != 0.0 {
            self.panel.set_x(self.panel.x() + dx * MOVE_STEP);
            self.panel.set_y(self.panel.y() + dy * MOVE_STEP);
            self.dirty = true;
        }

        if frame.key_just_pressed(keys::R) {
            self.panel.set_angle(self.panel.angle() + ROTATE_STEP);
            self.dirty = true;
        }

        if frame.key_just_pressed(keys::SPACE) {
            let texture = self.panel.texture().to_string();
            if let Err(e) = self.panel.set_texture(&texture, &self.textures) {
                warn!(error = %e, "Texture reload failed");
            }
            self.dirty = true;
        }

        if frame.button_just_pressed(0) {
            let [x, y] = input.pointer_position();
            info!(x, y, any_key = input.any_key_pressed(), "Click");
        }
    }

    fn draw(&mut self) {
        if !self.dirty {
            return;
        }
        self.panel.draw_command().dispatch(&mut self.batch);
        info!(
            width = self.panel.width(),
            height = self.panel.height(),
            angle = self.panel.angle(),
            regions = self.batch.region_count(),
            "Panel laid out"
        );
        self.dirty = false;
    }
}

fn arrow_axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Reads the demo texture's size from disk, falling back to the configured size
fn resolve_textures(panel: &PanelDemoConfig) -> StaticTextureProvider {
    let files = ImageFileProvider::new(&panel.texture_dir);
    let [width, height] = match files.texture_size(&panel.texture) {
        Ok([w, h]) => [w as u32, h as u32],
        Err(e) => {
            warn!(
                error = %e,
                width = panel.fallback_texture_width,
                height = panel.fallback_texture_height,
                "Using fallback texture size"
            );
            [panel.fallback_texture_width, panel.fallback_texture_height]
        }
    };
    StaticTextureProvider::new().with_texture(panel.texture.clone(), width, height)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes =
                window_attributes_from_config(&self.config.window, &self.config.game);

            match event_loop.create_window(window_attributes) {
                Ok(window) => {
                    let [width, height] = surface_size(&window);
                    info!(
                        window.width = width,
                        window.height = height,
                        "Window created successfully"
                    );
                    self.input.set_view_size(width, height);
                    self.window = Some(window);
                    self.last_update = Some(Instant::now());
                }
                Err(e) => {
                    error!(error = %e, "Failed to create window");
                    event_loop.exit();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(last_update) = self.last_update {
            let now = Instant::now();
            let delta_time = (now - last_update).as_secs_f32();
            self.last_update = Some(now);
            self.tick(delta_time);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.handle_window_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { .. } if self.input.state().is_key_pressed(keys::ESCAPE) => {
                info!("Escape pressed, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                debug!(
                    width = new_size.width,
                    height = new_size.height,
                    "Surface resized"
                );
            }
            _ => {}
        }
    }
}
