//! Integration tests for panel sprites and their nine-slice layout

use panel_runtime::panel::{
    DrawCommand, ImageFileProvider, InitialInstanceData, Margins, NineSliceLayout, PanelError,
    PanelSprite, PanelSpriteData, Piece, Rect, RecordingBatch, StaticTextureProvider,
    compute_slices,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPSILON: f32 = 1e-3;

fn textures() -> StaticTextureProvider {
    StaticTextureProvider::new()
        .with_texture("frame", 30, 30)
        .with_texture("wide", 64, 16)
}

fn frame_data(width: f32, height: f32) -> PanelSpriteData {
    PanelSpriteData {
        texture: "frame".to_string(),
        width,
        height,
        top_margin: 10.0,
        right_margin: 10.0,
        bottom_margin: 10.0,
        left_margin: 10.0,
    }
}

#[test]
fn test_stretched_panel_layout() {
    let panel = PanelSprite::new(&frame_data(100.0, 50.0), &textures()).expect("panel");
    let layout = panel.layout();

    assert_eq!(
        layout.slice(Piece::Center).dest,
        Rect::new(10.0, 10.0, 80.0, 30.0)
    );
    assert_eq!(
        layout.slice(Piece::Center).source,
        Rect::new(10.0, 10.0, 10.0, 10.0)
    );
    assert_eq!(layout.slice(Piece::Top).dest, Rect::new(10.0, 0.0, 80.0, 10.0));
    assert_eq!(
        layout.slice(Piece::Bottom).dest,
        Rect::new(10.0, 40.0, 80.0, 10.0)
    );
    assert_eq!(layout.slice(Piece::Left).dest, Rect::new(0.0, 10.0, 10.0, 30.0));
    assert_eq!(
        layout.slice(Piece::Right).dest,
        Rect::new(90.0, 10.0, 10.0, 30.0)
    );

    for corner in [
        Piece::TopLeft,
        Piece::TopRight,
        Piece::BottomLeft,
        Piece::BottomRight,
    ] {
        assert_eq!(layout.slice(corner).dest.size(), [10.0, 10.0], "{corner:?}");
    }
    assert_eq!(
        layout.slice(Piece::BottomRight).dest,
        Rect::new(90.0, 40.0, 10.0, 10.0)
    );
}

#[test]
fn test_initial_instance_custom_size() {
    let mut panel = PanelSprite::new(&frame_data(40.0, 40.0), &textures()).expect("panel");

    panel.apply_initial_instance(&InitialInstanceData::default());
    assert_eq!((panel.width(), panel.height()), (40.0, 40.0));

    panel.apply_initial_instance(&InitialInstanceData {
        custom_size: true,
        width: 120.0,
        height: 60.0,
    });
    assert_eq!((panel.width(), panel.height()), (120.0, 60.0));
    assert_eq!(
        panel.layout().slice(Piece::Center).dest,
        Rect::new(10.0, 10.0, 100.0, 40.0)
    );
}

#[test]
fn test_texture_swap_reslices() {
    let textures = textures();
    let mut panel = PanelSprite::new(&frame_data(100.0, 50.0), &textures).expect("panel");

    panel.set_texture("wide", &textures).expect("swap");
    assert_eq!(panel.texture(), "wide");
    assert_eq!(panel.layout().texture_size(), [64.0, 16.0]);
    // 16 px tall texture with 10 px top and bottom margins: the center row is gone
    assert!(panel.layout().slice(Piece::Center).source.is_empty());

    let err = panel
        .set_texture("missing", &textures)
        .expect_err("unknown texture");
    assert_eq!(err, PanelError::UnknownTexture("missing".to_string()));
    assert_eq!(panel.texture(), "wide");
}

#[test]
fn test_invalid_margins_rejected() {
    let mut data = frame_data(100.0, 50.0);
    data.left_margin = -1.0;
    let err = PanelSprite::new(&data, &textures()).expect_err("negative margin");
    assert!(matches!(err, PanelError::InvalidConfiguration(_)));

    data.left_margin = f32::NAN;
    assert!(PanelSprite::new(&data, &textures()).is_err());
}

#[test]
fn test_draw_command_dispatch() {
    let mut panel = PanelSprite::new(&frame_data(100.0, 50.0), &textures()).expect("panel");
    panel.set_x(5.0);
    panel.set_y(7.0);
    panel.set_layer("ui");
    panel.set_z_order(3);

    let command = panel.draw_command();
    let mut batch = RecordingBatch::new();
    command.dispatch(&mut batch);

    assert_eq!(batch.nodes.len(), 1);
    let node = &batch.nodes[0];
    assert_eq!(node.layer, "ui");
    assert_eq!(node.z_order, 3);
    assert_eq!(node.transform.position, [55.0, 32.0]);
    assert_eq!(node.regions.len(), 9);
    assert!(node.regions.iter().all(|r| r.texture == "frame"));

    // The center is the first region drawn
    assert_eq!(node.regions[0].dest, Rect::new(10.0, 10.0, 80.0, 30.0));
}

#[test]
fn test_degenerate_panel_draws_only_borders() {
    let panel = PanelSprite::new(&frame_data(20.0, 20.0), &textures()).expect("panel");
    let command = panel.draw_command();
    assert_eq!(command.visible_slice_count(), 4);

    let mut batch = RecordingBatch::new();
    command.dispatch(&mut batch);
    assert_eq!(batch.region_count(), 4);
}

#[test]
fn test_image_file_provider() {
    let dir = tempfile::tempdir().expect("tempdir");
    image::RgbaImage::new(24, 18)
        .save(dir.path().join("border.png"))
        .expect("write png");

    let files = ImageFileProvider::new(dir.path());
    let data = PanelSpriteData {
        texture: "border.png".to_string(),
        ..frame_data(60.0, 60.0)
    };
    let mut panel = PanelSprite::new(&data, &files).expect("panel");
    assert_eq!(panel.layout().texture_size(), [24.0, 18.0]);

    assert!(matches!(
        panel.set_texture("absent.png", &files),
        Err(PanelError::UnknownTexture(_))
    ));
}

fn random_margins(rng: &mut StdRng, max: f32) -> Margins {
    Margins::new(
        rng.random_range(0.0..max),
        rng.random_range(0.0..max),
        rng.random_range(0.0..max),
        rng.random_range(0.0..max),
    )
}

#[test]
fn test_random_layouts_never_produce_negative_sizes() {
    let mut rng = StdRng::seed_from_u64(0x9e37);

    for _ in 0..500 {
        let texture = [rng.random_range(0.0..64.0), rng.random_range(0.0..64.0)];
        let margins = random_margins(&mut rng, 40.0);
        let target = [rng.random_range(-20.0..300.0), rng.random_range(-20.0..300.0)];

        for slice in compute_slices(texture, margins, target) {
            assert!(slice.dest.width >= 0.0 && slice.dest.height >= 0.0, "{slice:?}");
            assert!(slice.source.width >= 0.0 && slice.source.height >= 0.0, "{slice:?}");
            assert!(slice.source.x >= 0.0 && slice.source.y >= 0.0, "{slice:?}");
            assert!(slice.source.right() <= texture[0] + EPSILON, "{slice:?}");
            assert!(slice.source.bottom() <= texture[1] + EPSILON, "{slice:?}");
        }
    }
}

#[test]
fn test_random_layouts_tile_the_panel() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let margins = random_margins(&mut rng, 20.0);
        // Texture at least as large as each margin, panel at least as large as both
        let texture = [rng.random_range(20.0..64.0), rng.random_range(20.0..64.0)];
        let width = margins.horizontal() + rng.random_range(0.0..200.0);
        let height = margins.vertical() + rng.random_range(0.0..200.0);

        let layout = NineSliceLayout::new(texture, margins, [width, height]).expect("layout");
        let width_of = |p: Piece| layout.slice(p).dest.width;
        let height_of = |p: Piece| layout.slice(p).dest.height;

        for row in [
            [Piece::TopLeft, Piece::Top, Piece::TopRight],
            [Piece::Left, Piece::Center, Piece::Right],
            [Piece::BottomLeft, Piece::Bottom, Piece::BottomRight],
        ] {
            let sum: f32 = row.iter().map(|&p| width_of(p)).sum();
            assert!((sum - width).abs() < EPSILON, "{row:?}: {sum} != {width}");
        }
        for column in [
            [Piece::TopLeft, Piece::Left, Piece::BottomLeft],
            [Piece::Top, Piece::Center, Piece::Bottom],
            [Piece::TopRight, Piece::Right, Piece::BottomRight],
        ] {
            let sum: f32 = column.iter().map(|&p| height_of(p)).sum();
            assert!((sum - height).abs() < EPSILON, "{column:?}: {sum} != {height}");
        }
    }
}

#[test]
fn test_recompute_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let margins = random_margins(&mut rng, 16.0);
        let target = [rng.random_range(0.0..256.0), rng.random_range(0.0..256.0)];
        let mut layout = NineSliceLayout::new([32.0, 32.0], margins, [1.0, 1.0]).expect("layout");

        let first = *layout.recompute(target[0], target[1]);
        let second = *layout.recompute(target[0], target[1]);
        assert_eq!(first, second);
        assert_eq!(first, compute_slices([32.0, 32.0], margins, target));
    }
}
