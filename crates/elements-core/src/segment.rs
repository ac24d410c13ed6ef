//! The five thematic segments and their shell stacks.

use crate::color::Rgb;
use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Wind,
    Water,
    Ether,
}

impl Element {
    /// Scroll order.
    pub const ALL: [Element; SEGMENT_COUNT] = [
        Element::Fire,
        Element::Earth,
        Element::Wind,
        Element::Water,
        Element::Ether,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Wind => "wind",
            Element::Water => "water",
            Element::Ether => "ether",
        }
    }

    pub fn color_hex(self) -> u32 {
        match self {
            Element::Fire => 0xFF4500,
            Element::Earth => 0x00FF77,
            Element::Wind => 0x87CEEB,
            Element::Water => 0x00DDFF,
            Element::Ether => 0xAAAAFF,
        }
    }

    /// Image used as the core shell's alpha texture.
    pub fn image(self) -> &'static str {
        match self {
            Element::Fire => "fire.jpeg",
            Element::Earth => "earth.avif",
            Element::Wind => "wind.jpeg",
            Element::Water => "water.jpeg",
            Element::Ether => "ether.jpeg",
        }
    }

    pub fn solid(self) -> SolidKind {
        match self {
            Element::Fire => SolidKind::Tetrahedron,
            Element::Earth => SolidKind::Cube,
            Element::Wind => SolidKind::Octahedron,
            Element::Water => SolidKind::Icosahedron,
            Element::Ether => SolidKind::Dodecahedron,
        }
    }
}

/// Shared geometry of every shell in a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolidKind {
    Tetrahedron,
    Cube,
    Octahedron,
    Icosahedron,
    Dodecahedron,
}

/// Where a shell's alpha comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphaSource {
    /// Uniform translucent pattern (white under an 80% black overlay).
    Pattern,
    /// The element image; only the core shell ever switches to this.
    Image,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Loaded,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub opacity: f32,
    pub alpha: AlphaSource,
    pub texture_offset: [f32; 2],
    pub texture_repeat: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeMaterial {
    pub color: Rgb,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellKind {
    Ghost,
    Core,
}

/// One copy of the segment's solid. Owns its material outright.
#[derive(Clone, Debug, PartialEq)]
pub struct Shell {
    pub kind: ShellKind,
    pub scale: f32,
    pub material: Material,
    pub edge: Option<EdgeMaterial>,
}

#[derive(Clone, Debug)]
pub struct Segment {
    pub element: Element,
    pub solid: SolidKind,
    /// Outermost ghost first, core last.
    pub shells: Vec<Shell>,
    pub texture: TextureStatus,
    pub visible: bool,
    pub depth_offset: f32,
    pub rotation: f32,
}

impl Segment {
    /// Build the shell stack for `element` with `ghosts` ghost shells.
    ///
    /// Shell `i` of `ghosts + 1` is scaled by `1 - 0.1 i` and tinted by an
    /// HSL offset of `0.25 i / total`; the last shell is the core.
    pub fn build(element: Element, ghosts: usize, image_scale: f32) -> Self {
        let base = Rgb::from_hex(element.color_hex());
        let total = ghosts + 1;
        let shells = (0..total)
            .map(|i| {
                let scale = 1.0 - SHELL_SCALE_STEP * i as f32;
                if i == ghosts {
                    return Shell {
                        kind: ShellKind::Core,
                        scale,
                        material: Material {
                            color: base,
                            opacity: CORE_OPACITY,
                            alpha: AlphaSource::Pattern,
                            texture_offset: [0.0, 0.0],
                            texture_repeat: image_scale,
                        },
                        edge: None,
                    };
                }
                let offset = SHELL_COLOR_OFFSET_SPAN * (i as f32 / total as f32);
                let tint = base.offset_hsl(offset, offset, offset);
                Shell {
                    kind: ShellKind::Ghost,
                    scale,
                    material: Material {
                        color: tint,
                        opacity: GHOST_OPACITY,
                        alpha: AlphaSource::Pattern,
                        texture_offset: [0.0, 0.0],
                        texture_repeat: 1.0,
                    },
                    edge: Some(EdgeMaterial {
                        color: tint,
                        opacity: scale,
                    }),
                }
            })
            .collect();
        Self {
            element,
            solid: element.solid(),
            shells,
            texture: TextureStatus::Pending,
            visible: false,
            depth_offset: 0.0,
            rotation: 0.0,
        }
    }

    pub fn core(&self) -> Option<&Shell> {
        self.shells.iter().find(|s| s.kind == ShellKind::Core)
    }

    pub fn core_mut(&mut self) -> Option<&mut Shell> {
        self.shells.iter_mut().find(|s| s.kind == ShellKind::Core)
    }

    pub fn ghosts(&self) -> impl Iterator<Item = &Shell> {
        self.shells.iter().filter(|s| s.kind == ShellKind::Ghost)
    }
}

/// Effective alpha of the default pattern: white under a black overlay.
#[inline]
pub fn pattern_alpha() -> f32 {
    1.0 - ALPHA_PATTERN_DARKEN
}
