//! Shared data types and constants.
//!
//! Everything here is plain data with no dependencies so it can be used by the
//! core rules, the terminal front end and the configuration layer alike.
//!
//! # Board
//!
//! The playfield is 10 columns by 20 rows. Cells hold a color id:
//! `0` is empty and `1..=7` identify the piece kind that filled the cell.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame loop interval of the terminal runner |
//! | `BASE_DROP_MS` | 1000 | Gravity interval for unleveled editions and level 0 |
//! | `DROP_INTERVAL_FLOOR_MS` | 120 | Gravity interval past the end of `DROP_INTERVALS` |
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{Edition, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let t = PieceKind::from_str("t").unwrap();
//! assert_eq!(t.color_id(), 3);
//! assert_eq!(PieceKind::from_color_id(3), Some(t));
//!
//! assert_eq!(Edition::from_str("Modern"), Some(Edition::Modern));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells.
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells.
pub const BOARD_HEIGHT: u8 = 20;

/// A board or tetrimino cell: `0` is empty, `1..=7` is a piece color id.
pub type Cell = u8;

/// The empty cell value.
pub const EMPTY_CELL: Cell = 0;

/// Frame loop interval in milliseconds (~60 FPS).
pub const TICK_MS: u32 = 16;

/// Gravity interval for editions without levels, and for level 0.
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval by level (milliseconds per row).
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Gravity interval once the level runs past `DROP_INTERVALS`.
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// Points for clearing 0..=4 lines at level 0.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cell of soft drop.
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per cell of hard drop.
pub const HARD_DROP_POINTS: u32 = 2;

/// Longest next-piece queue any edition can show.
pub const MAX_PREVIEW: usize = 5;

/// The seven tetrimino kinds.
///
/// The discriminant order fixes the color id stored in board cells:
/// I=1, O=2, T=3, S=4, Z=5, J=6, L=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in color id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Color id written into board cells by this kind.
    pub fn color_id(self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::color_id`]. Returns `None` for empty or unknown ids.
    pub fn from_color_id(id: Cell) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// The three successive versions of the game.
///
/// - **Prototype**: two pieces, gravity and sideways movement only.
/// - **Classic**: all seven pieces, rotation, line clears and score.
/// - **Modern**: adds levels, wall kicks, a shadow, a next queue and hard drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Edition {
    Prototype,
    Classic,
    #[default]
    Modern,
}

impl Edition {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "prototype" | "v1" => Some(Edition::Prototype),
            "classic" | "v2" => Some(Edition::Classic),
            "modern" | "v3" => Some(Edition::Modern),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Edition::Prototype => "prototype",
            Edition::Classic => "classic",
            Edition::Modern => "modern",
        }
    }
}

/// How the next piece is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Randomizer {
    /// Every piece is drawn independently and uniformly.
    #[default]
    Uniform,
    /// Pieces are dealt from shuffled bags holding one of each kind.
    Bag,
}

impl Randomizer {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "bag7" => Some(Randomizer::Bag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag => "bag",
        }
    }
}

/// Player and session commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Pause,
    Restart,
}

impl GameAction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_ids_round_trip_for_every_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_color_id(kind.color_id()), Some(kind));
        }
        assert_eq!(PieceKind::from_color_id(EMPTY_CELL), None);
        assert_eq!(PieceKind::from_color_id(8), None);
    }

    #[test]
    fn drop_table_is_strictly_decreasing_and_above_floor() {
        assert_eq!(DROP_INTERVALS[0], BASE_DROP_MS);
        for pair in DROP_INTERVALS.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        assert!(DROP_INTERVALS[DROP_INTERVALS.len() - 1] > DROP_INTERVAL_FLOOR_MS);
    }

    #[test]
    fn edition_aliases() {
        assert_eq!(Edition::from_str("v1"), Some(Edition::Prototype));
        assert_eq!(Edition::from_str("CLASSIC"), Some(Edition::Classic));
        assert_eq!(Edition::from_str("nope"), None);
        assert_eq!(Edition::default(), Edition::Modern);
    }

    #[test]
    fn action_names_parse_back() {
        let all = [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::Pause,
            GameAction::Restart,
        ];
        for action in all {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
