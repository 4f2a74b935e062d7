//! Particle kinds and their display properties

use serde::{Deserialize, Serialize};

/// Material held by a single grid cell
///
/// Particles carry no state besides their kind: every Sand cell behaves like
/// every other Sand cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ParticleKind {
    #[default]
    Empty = 0,
    Metal = 1,
    Sand = 2,
    Water = 3,
    Oil = 4,
    Acid = 5,
    Fire = 6,
    Steam = 7,
    Glass = 8,
}

/// Tool names offered by a paint palette, in display order
///
/// Glass is not paintable directly; it only forms when fire reaches sand.
pub const TOOL_NAMES: [&str; 8] = [
    "Empty", "Metal", "Sand", "Water", "Oil", "Acid", "Fire", "Steam",
];

impl ParticleKind {
    /// Number of distinct kinds
    pub const COUNT: usize = 9;

    /// Every kind, in discriminant order
    pub const ALL: [ParticleKind; Self::COUNT] = [
        ParticleKind::Empty,
        ParticleKind::Metal,
        ParticleKind::Sand,
        ParticleKind::Water,
        ParticleKind::Oil,
        ParticleKind::Acid,
        ParticleKind::Fire,
        ParticleKind::Steam,
        ParticleKind::Glass,
    ];

    /// Index into per-kind tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name, also accepted by [`ParticleKind::from_tool_name`]
    pub const fn name(self) -> &'static str {
        match self {
            ParticleKind::Empty => "Empty",
            ParticleKind::Metal => "Metal",
            ParticleKind::Sand => "Sand",
            ParticleKind::Water => "Water",
            ParticleKind::Oil => "Oil",
            ParticleKind::Acid => "Acid",
            ParticleKind::Fire => "Fire",
            ParticleKind::Steam => "Steam",
            ParticleKind::Glass => "Glass",
        }
    }

    /// Resolve a palette tool name. Unrecognized names paint Empty.
    pub fn from_tool_name(tool: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == tool)
            .unwrap_or_default()
    }

    /// Display color (RGBA)
    pub const fn color(self) -> [u8; 4] {
        match self {
            ParticleKind::Empty => [0, 0, 0, 255],
            ParticleKind::Metal => [128, 128, 128, 255],
            ParticleKind::Sand => [255, 255, 0, 255],
            ParticleKind::Water => [0, 0, 255, 255],
            ParticleKind::Oil => [255, 165, 0, 255],
            ParticleKind::Acid => [0, 255, 0, 255],
            ParticleKind::Fire => [255, 0, 0, 255],
            ParticleKind::Steam => [192, 192, 192, 255],
            ParticleKind::Glass => [192, 192, 255, 255],
        }
    }

    pub fn is_empty(self) -> bool {
        self == ParticleKind::Empty
    }

    /// Passive kinds never move or react on their own
    pub fn is_passive(self) -> bool {
        matches!(
            self,
            ParticleKind::Empty | ParticleKind::Metal | ParticleKind::Glass
        )
    }
}

impl std::fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
