// Host-side tests for shell construction and HSL tinting.

use elements_core::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn hex_colors_decode_per_channel() {
    let c = Rgb::from_hex(0xFF4500);
    assert_eq!(c.r, 1.0);
    assert!(close(c.g, 69.0 / 255.0));
    assert_eq!(c.b, 0.0);
}

#[test]
fn hsl_round_trips_segment_colors() {
    for element in Element::ALL {
        let c = Rgb::from_hex(element.color_hex());
        let (h, s, l) = c.to_hsl();
        let back = Rgb::from_hsl(h, s, l);
        assert!(
            close(c.r, back.r) && close(c.g, back.g) && close(c.b, back.b),
            "{} did not round-trip: {c:?} vs {back:?}",
            element.name()
        );
    }
}

#[test]
fn hsl_offset_wraps_hue_and_clamps_the_rest() {
    let red = Rgb::new(1.0, 0.0, 0.0);
    let (h, _, _) = red.offset_hsl(1.25, 0.0, 0.0).to_hsl();
    assert!(close(h, 0.25), "hue {h}");
    let white = Rgb::new(0.5, 0.5, 0.5).offset_hsl(0.0, 0.0, 0.9);
    assert_eq!(white.to_array(), [1.0, 1.0, 1.0]);
}

#[test]
fn default_stack_is_one_ghost_around_the_core() {
    let seg = Segment::build(Element::Fire, 1, 1.0);
    assert_eq!(seg.shells.len(), 2);
    assert_eq!(seg.solid, SolidKind::Tetrahedron);

    let ghost = &seg.shells[0];
    assert_eq!(ghost.kind, ShellKind::Ghost);
    assert_eq!(ghost.scale, 1.0);
    assert_eq!(ghost.material.opacity, 0.95);
    assert_eq!(ghost.material.alpha, AlphaSource::Pattern);
    // first ghost has a zero colour offset
    let base = Rgb::from_hex(0xFF4500);
    let tint = ghost.material.color;
    assert!(close(tint.r, base.r) && close(tint.g, base.g) && close(tint.b, base.b));
    let edge = ghost.edge.as_ref().expect("ghosts are outlined");
    assert_eq!(edge.opacity, 1.0);

    let core = seg.core().expect("core present");
    assert_eq!(core.kind, ShellKind::Core);
    assert!(close(core.scale, 0.9));
    assert_eq!(core.material.opacity, 1.0);
    assert!(core.edge.is_none());
    assert_eq!(core.material.color, Rgb::from_hex(0xFF4500));
}

#[test]
fn deeper_stacks_shrink_and_tint_each_ghost() {
    let seg = Segment::build(Element::Water, 3, 2.0);
    let scales: Vec<f32> = seg.shells.iter().map(|s| s.scale).collect();
    for (got, want) in scales.iter().zip([1.0, 0.9, 0.8, 0.7]) {
        assert!(close(*got, want), "scales {scales:?}");
    }
    assert_eq!(seg.ghosts().count(), 3);
    for ghost in seg.ghosts() {
        let edge = ghost.edge.as_ref().expect("ghost edge");
        assert_eq!(edge.opacity, ghost.scale);
        assert_eq!(edge.color, ghost.material.color);
    }
    let base = Rgb::from_hex(Element::Water.color_hex());
    let second = &seg.shells[1].material.color;
    assert_eq!(*second, base.offset_hsl(0.0625, 0.0625, 0.0625));
    assert_eq!(seg.core().map(|c| c.material.texture_repeat), Some(2.0));
}

#[test]
fn shells_own_their_materials() {
    let mut seg = Segment::build(Element::Earth, 2, 1.0);
    let before = seg.shells[1].material.clone();
    seg.shells[0].material.opacity = 0.1;
    seg.shells[0].material.color = Rgb::new(0.0, 0.0, 0.0);
    assert_eq!(seg.shells[1].material, before);
}

#[test]
fn elements_map_to_distinct_solids_and_images() {
    let solids: Vec<SolidKind> = Element::ALL.iter().map(|e| e.solid()).collect();
    assert_eq!(
        solids,
        vec![
            SolidKind::Tetrahedron,
            SolidKind::Cube,
            SolidKind::Octahedron,
            SolidKind::Icosahedron,
            SolidKind::Dodecahedron,
        ]
    );
    assert_eq!(Element::Earth.image(), "earth.avif");
    assert!(Element::ALL.iter().all(|e| e.image().starts_with(e.name())));
}

#[test]
fn pattern_alpha_is_white_under_dark_overlay() {
    assert!(close(pattern_alpha(), 0.2));
}

fn encode_srgb(l: f32) -> f32 {
    if l <= 0.003_130_8 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

#[test]
fn linearised_colors_survive_srgb_store() {
    // background and the fire tint must come back as the same bytes
    for hex in [0x111111u32, 0xff4500, 0x000000, 0xffffff] {
        let src = Rgb::from_hex(hex);
        let lin = src.to_linear();
        for (s, l) in src.to_array().into_iter().zip(lin.to_array()) {
            assert!(l <= s + 1e-6, "linear {l} brighter than encoded {s}");
            assert_eq!((encode_srgb(l) * 255.0).round(), (s * 255.0).round());
        }
    }
    let bg = Rgb::from_hex(0x111111).to_linear();
    assert!(close(bg.r, 0.005_605), "bg linear {}", bg.r);
}
