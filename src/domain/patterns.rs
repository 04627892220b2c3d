use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::Grid;

/// An immutable rectangular mask that can be stamped onto the grid.
/// Rows are top to bottom; `'O'` marks a live cell and anything else a dead one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: &'static [&'static str],
}

impl Pattern {
    /// Mask width in cells
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    /// Mask height in cells
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Mask value at (dx, dy); positions outside the rectangle are dead
    pub fn is_alive(&self, dx: usize, dy: usize) -> bool {
        self.rows
            .get(dy)
            .and_then(|row| row.as_bytes().get(dx))
            .is_some_and(|&b| b == b'O')
    }

    /// Relative coordinates of the live cells
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (width, height) = (self.width(), self.height());
        (0..height)
            .flat_map(move |dy| (0..width).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| self.is_alive(dx, dy))
    }

    /// Overwrite the whole mask rectangle with its top-left corner at (x, y).
    /// Dead mask positions are written dead and every coordinate wraps on its own.
    pub fn stamp(&self, grid: &mut Grid, x: i64, y: i64) {
        for dy in 0..self.height() {
            for dx in 0..self.width() {
                grid.set(x + dx as i64, y + dy as i64, self.is_alive(dx, dy));
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.description)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown pattern `{0}`")]
pub struct UnknownPattern(pub String);

/// Every pattern in the library, looked up by tag rather than by number
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Block,
    Blinker,
    Glider,
    Toad,
    Tub,
    Boat,
    Ship,
    Loaf,
    Beacon,
    Pulsar,
    MiddleweightSpaceship,
    GosperGliderGun,
}

impl PatternKind {
    pub const ALL: [PatternKind; 12] = [
        PatternKind::Block,
        PatternKind::Blinker,
        PatternKind::Glider,
        PatternKind::Toad,
        PatternKind::Tub,
        PatternKind::Boat,
        PatternKind::Ship,
        PatternKind::Loaf,
        PatternKind::Beacon,
        PatternKind::Pulsar,
        PatternKind::MiddleweightSpaceship,
        PatternKind::GosperGliderGun,
    ];

    pub const fn pattern(self) -> &'static Pattern {
        match self {
            PatternKind::Block => &presets::BLOCK,
            PatternKind::Blinker => &presets::BLINKER,
            PatternKind::Glider => &presets::GLIDER,
            PatternKind::Toad => &presets::TOAD,
            PatternKind::Tub => &presets::TUB,
            PatternKind::Boat => &presets::BOAT,
            PatternKind::Ship => &presets::SHIP,
            PatternKind::Loaf => &presets::LOAF,
            PatternKind::Beacon => &presets::BEACON,
            PatternKind::Pulsar => &presets::PULSAR,
            PatternKind::MiddleweightSpaceship => &presets::MIDDLEWEIGHT_SPACESHIP,
            PatternKind::GosperGliderGun => &presets::GOSPER_GLIDER_GUN,
        }
    }

    /// Canonical lower-case name, also accepted by `FromStr`
    pub const fn name(self) -> &'static str {
        self.pattern().name
    }

    /// Stamp this pattern's mask with its top-left corner at (x, y)
    pub fn stamp(self, grid: &mut Grid, x: i64, y: i64) {
        self.pattern().stamp(grid, x, y);
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = UnknownPattern;

    /// Accepts canonical names case-insensitively, with `_` or ` ` for `-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| UnknownPattern(s.to_owned()))
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::Pattern;

    /// Still life
    pub const BLOCK: Pattern = Pattern {
        name: "block",
        description: "Still life",
        rows: &["OO", "OO"],
    };

    pub const BLINKER: Pattern = Pattern {
        name: "blinker",
        description: "Oscillator (period 2)",
        rows: &["OOO"],
    };

    /// Travels (+1, +1) every 4 generations
    pub const GLIDER: Pattern = Pattern {
        name: "glider",
        description: "Spaceship (period 4)",
        rows: &[
            ".O.",
            "..O",
            "OOO",
        ],
    };

    pub const TOAD: Pattern = Pattern {
        name: "toad",
        description: "Oscillator (period 2)",
        rows: &[
            ".OOO",
            "OOO.",
        ],
    };

    pub const TUB: Pattern = Pattern {
        name: "tub",
        description: "Still life",
        rows: &[
            ".O.",
            "O.O",
            ".O.",
        ],
    };

    pub const BOAT: Pattern = Pattern {
        name: "boat",
        description: "Still life",
        rows: &[
            "OO.",
            "O.O",
            ".O.",
        ],
    };

    // Not the 6-cell still life of the same name; this is the seed layout's mask.
    pub const SHIP: Pattern = Pattern {
        name: "ship",
        description: "Five-cell seed",
        rows: &[
            "OO.",
            ".OO",
            "O..",
        ],
    };

    pub const LOAF: Pattern = Pattern {
        name: "loaf",
        description: "Still life",
        rows: &[
            ".O..",
            "O.O.",
            "O..O",
            ".OO.",
        ],
    };

    pub const BEACON: Pattern = Pattern {
        name: "beacon",
        description: "Oscillator (period 2)",
        rows: &[
            "OO..",
            "O...",
            "...O",
            "..OO",
        ],
    };

    /// Includes a 2-cell dead border on every side
    pub const PULSAR: Pattern = Pattern {
        name: "pulsar",
        description: "Oscillator (period 3)",
        rows: &[
            ".................",
            ".................",
            "....OOO...OOO....",
            ".................",
            "..O....O.O....O..",
            "..O....O.O....O..",
            "..O....O.O....O..",
            "....OOO...OOO....",
            ".................",
            "....OOO...OOO....",
            "..O....O.O....O..",
            "..O....O.O....O..",
            "..O....O.O....O..",
            ".................",
            "....OOO...OOO....",
            ".................",
            ".................",
        ],
    };

    /// Travels +2 in x every 4 generations
    pub const MIDDLEWEIGHT_SPACESHIP: Pattern = Pattern {
        name: "middleweight-spaceship",
        description: "Spaceship (period 4)",
        rows: &[
            "..O...",
            "O...O.",
            ".....O",
            "O....O",
            ".OOOOO",
        ],
    };

    /// Emits a glider every 30 generations
    pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
        name: "gosper-glider-gun",
        description: "Glider gun (period 30)",
        rows: &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ],
    };
}
