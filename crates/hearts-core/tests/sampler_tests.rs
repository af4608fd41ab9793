mod common;

use common::{square_image, BlockRaster};
use glam::Vec2;
use hearts_core::{
    image_gap, scan_fill, scan_outline, text_gap, AlphaMask, Error, ImageLayout, Mode,
    SceneConfig, TargetSampler, TargetSet, TargetSource, TextLayout,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn gaps_have_floors() {
    assert_eq!(text_gap(300), 8);
    assert_eq!(text_gap(1650), 15);
    assert_eq!(image_gap(300), 10);
    assert_eq!(image_gap(1640), 20);
}

#[test]
fn text_layout_scales_font_with_canvas() {
    let layout = TextLayout::for_canvas(800, 400, "serif");
    assert_eq!(layout.font.size_px, 128.0);
    assert_eq!(layout.font.css(), "700 128px serif");
    assert_eq!(layout.center_x, 400.0);
    assert!((layout.baseline_y - 232.0).abs() < 1e-3);
    assert_eq!(layout.gap, 8);

    // Small canvases never go below the minimum font size.
    let small = TextLayout::for_canvas(320, 150, "serif");
    assert_eq!(small.font.size_px, 72.0);
}

#[test]
fn image_layout_is_a_centred_square() {
    let layout = ImageLayout::for_canvas(800, 600);
    assert!((layout.dest.w - 368.0).abs() < 1e-3);
    assert_eq!(layout.dest.w, layout.dest.h);
    assert!((layout.dest.x + layout.dest.w / 2.0 - 400.0).abs() < 1e-3);
    assert!((layout.dest.y + layout.dest.h / 2.0 - 300.0).abs() < 1e-3);
    assert_eq!(layout.gap, 10);
}

#[test]
fn scan_fill_threshold_is_strict() {
    let mut mask = AlphaMask::new(32, 32);
    mask.set(0, 0, 100);
    mask.set(8, 0, 101);
    mask.set(16, 16, 255);
    mask.set(3, 3, 255); // off the grid
    let points = scan_fill(&mask, 8, 100);
    assert_eq!(points, vec![Vec2::new(8.0, 0.0), Vec2::new(16.0, 16.0)]);
}

#[test]
fn scan_fill_is_row_major() {
    let mut mask = AlphaMask::new(20, 20);
    mask.fill_rect(0.0, 0.0, 20.0, 20.0, 255);
    let points = scan_fill(&mask, 10, 100);
    assert_eq!(
        points,
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 10.0),
        ]
    );
}

#[test]
fn scan_outline_keeps_only_edges_without_interior_share() {
    let mut mask = AlphaMask::new(100, 100);
    mask.fill_rect(20.0, 20.0, 80.0, 80.0, 255);

    let edges = scan_outline(&mask, 10, 70, 0.0, &mut rng());
    // Opaque grid is 6x6 (20..=70); its border ring has 20 points.
    assert_eq!(edges.len(), 20);
    for p in &edges {
        let on_ring = p.x == 20.0 || p.x == 70.0 || p.y == 20.0 || p.y == 70.0;
        assert!(on_ring, "interior point {:?} kept", p);
    }

    let all = scan_outline(&mask, 10, 70, 1.0, &mut rng());
    assert_eq!(all.len(), 36);
}

#[test]
fn scan_outline_skips_the_outer_ring() {
    let mut mask = AlphaMask::new(50, 50);
    mask.fill_rect(0.0, 0.0, 50.0, 50.0, 255);
    let points = scan_outline(&mask, 10, 70, 1.0, &mut rng());
    assert!(points
        .iter()
        .all(|p| p.x >= 10.0 && p.x < 40.0 && p.y >= 10.0 && p.y < 40.0));
    assert_eq!(points.len(), 9);
}

#[test]
fn target_set_rejects_empty_and_wraps() {
    assert_eq!(TargetSet::new(Vec::new()), Err(Error::NoTargets));

    let set = TargetSet::new(vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.cyclic(0), Vec2::new(1.0, 2.0));
    assert_eq!(set.cyclic(5), Vec2::new(3.0, 4.0));
}

#[test]
fn text_targets_cover_the_greeting() {
    let mut sampler = TargetSampler::new(BlockRaster::new());
    let targets = sampler.sample_text(800, 400, "Chelsea", "serif").unwrap();

    assert!(targets.len() > 220, "got {}", targets.len());
    assert!(targets.len() < 1050, "got {}", targets.len());
    for p in targets.points() {
        assert_eq!(p.x as u32 % 8, 0);
        assert_eq!(p.y as u32 % 8, 0);
        assert!(p.y <= 232.0);
        assert!((p.x - 400.0).abs() < 270.0);
    }
}

#[test]
fn sampler_resizes_raster_only_on_change() {
    let mut sampler = TargetSampler::new(BlockRaster::new());
    sampler.sample_text(800, 400, "Hi", "serif").unwrap();
    sampler.sample_text(800, 400, "Hi", "serif").unwrap();
    assert_eq!(sampler.raster().resizes, 1);
    sampler.sample_text(640, 400, "Hi", "serif").unwrap();
    assert_eq!(sampler.raster().resizes, 2);
}

#[test]
fn repeated_sampling_is_stable() {
    let mut sampler = TargetSampler::new(BlockRaster::new());
    let a = sampler.sample_text(800, 400, "Hi", "serif").unwrap();
    let b = sampler.sample_text(800, 400, "Hi", "serif").unwrap();
    assert_eq!(a, b);
}

#[test]
fn degenerate_canvas_is_an_error() {
    let mut sampler = TargetSampler::new(BlockRaster::new());
    assert_eq!(
        sampler.sample_text(0, 400, "Hi", "serif"),
        Err(Error::DegenerateCanvas {
            width: 0,
            height: 400
        })
    );
}

#[test]
fn empty_greeting_yields_no_targets() {
    let mut sampler = TargetSampler::new(BlockRaster::new());
    assert_eq!(
        sampler.sample_text(800, 400, "", "serif"),
        Err(Error::NoTargets)
    );
}

#[test]
fn image_targets_trace_the_silhouette() {
    let mut sampler = TargetSampler::new(BlockRaster::new());
    let image = square_image(36, 4);
    let targets = sampler
        .sample_image(800, 600, &image, &mut rng())
        .unwrap();

    let dest = ImageLayout::for_canvas(800, 600).dest;
    assert!(targets.len() > 20);
    for p in targets.points() {
        assert_eq!(p.x as u32 % 10, 0);
        assert_eq!(p.y as u32 % 10, 0);
        assert!(p.x >= dest.x && p.x <= dest.x + dest.w);
        assert!(p.y >= dest.y && p.y <= dest.y + dest.h);
    }
}

#[test]
fn missing_image_falls_back_to_text() {
    let config = SceneConfig::default();
    let mut sampler = TargetSampler::new(BlockRaster::new());
    let text = sampler
        .sample_text(800, 600, &config.greeting, &config.font_family)
        .unwrap();

    let fallback = sampler
        .sample(800, 600, TargetSource::Image(None), &config, &mut rng())
        .unwrap();
    assert_eq!(fallback, text);

    let blank = AlphaMask::new(36, 36);
    let from_blank = sampler
        .sample(800, 600, TargetSource::Image(Some(&blank)), &config, &mut rng())
        .unwrap();
    assert_eq!(from_blank, text);
}

#[test]
fn sample_mode_picks_source_by_mode() {
    let config = SceneConfig::default();
    let image = square_image(36, 4);
    let mut sampler = TargetSampler::new(BlockRaster::new());

    let text = sampler
        .sample_mode(800, 600, Mode::Text, Some(&image), &config, &mut rng())
        .unwrap();
    let pony = sampler
        .sample_mode(800, 600, Mode::Pony, Some(&image), &config, &mut rng())
        .unwrap();
    let direct = sampler
        .sample_image(800, 600, &image, &mut rng())
        .unwrap();

    assert_ne!(text, pony);
    assert_eq!(pony, direct);
}

#[test]
fn mask_reads_alpha_from_rgba_readback() {
    let rgba = [10, 20, 30, 40, 0, 0, 0, 255, 1, 2, 3, 0, 9, 9, 9, 128];
    let mask = AlphaMask::from_rgba(2, 2, &rgba).unwrap();
    assert_eq!(mask.get(0, 0), 40);
    assert_eq!(mask.get(1, 0), 255);
    assert_eq!(mask.get(0, 1), 0);
    assert_eq!(mask.get(1, 1), 128);
    assert_eq!(mask.get(2, 0), 0);

    assert_eq!(
        AlphaMask::from_rgba(2, 2, &rgba[..12]),
        Err(Error::MaskSize {
            len: 12,
            width: 2,
            height: 2
        })
    );
}
