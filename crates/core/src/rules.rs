//! Rulesets for the three editions of the game.
//!
//! The gameplay loop is the same in every edition; a [`Ruleset`] only
//! switches features on and off.

use crate::types::{Edition, PieceKind, Randomizer, MAX_PREVIEW};

/// Column offsets tried, in order, when a rotated piece does not fit.
pub const WALL_KICKS: [i8; 5] = [0, -1, 1, -2, 2];

const NO_KICKS: [i8; 1] = [0];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    pub edition: Edition,
    pub pieces: Vec<PieceKind>,
    pub randomizer: Randomizer,
    pub rotation: bool,
    pub wall_kicks: bool,
    pub line_clears: bool,
    pub scoring: bool,
    /// Level progression and the matching gravity curve.
    pub leveled: bool,
    pub start_level: u32,
    pub shadow: bool,
    pub hard_drop: bool,
    /// Length of the visible next-piece queue (0 = hidden).
    pub preview: usize,
    /// Spawn in the middle of the board rather than at the left wall.
    pub spawn_centered: bool,
}

impl Ruleset {
    pub fn for_edition(edition: Edition) -> Self {
        match edition {
            Edition::Prototype => Self::prototype(),
            Edition::Classic => Self::classic(),
            Edition::Modern => Self::modern(),
        }
    }

    /// Two pieces that fall and slide. Nothing else.
    pub fn prototype() -> Self {
        Self {
            edition: Edition::Prototype,
            pieces: vec![PieceKind::I, PieceKind::L],
            randomizer: Randomizer::Uniform,
            rotation: false,
            wall_kicks: false,
            line_clears: false,
            scoring: false,
            leveled: false,
            start_level: 0,
            shadow: false,
            hard_drop: false,
            preview: 0,
            spawn_centered: false,
        }
    }

    pub fn classic() -> Self {
        Self {
            edition: Edition::Classic,
            pieces: PieceKind::ALL.to_vec(),
            rotation: true,
            line_clears: true,
            scoring: true,
            spawn_centered: true,
            ..Self::prototype()
        }
    }

    pub fn modern() -> Self {
        Self {
            edition: Edition::Modern,
            wall_kicks: true,
            leveled: true,
            shadow: true,
            hard_drop: true,
            preview: 3,
            ..Self::classic()
        }
    }

    pub fn with_pieces(mut self, pieces: &[PieceKind]) -> Self {
        self.pieces = pieces.to_vec();
        self
    }

    pub fn with_randomizer(mut self, randomizer: Randomizer) -> Self {
        self.randomizer = randomizer;
        self
    }

    /// Preview length, clamped to [`MAX_PREVIEW`].
    pub fn with_preview(mut self, preview: usize) -> Self {
        self.preview = preview.min(MAX_PREVIEW);
        self
    }

    pub fn with_start_level(mut self, level: u32) -> Self {
        self.start_level = level;
        self
    }

    /// Kick offsets to try for a rotation under this ruleset.
    pub fn kicks(&self) -> &'static [i8] {
        if self.wall_kicks {
            &WALL_KICKS
        } else {
            &NO_KICKS
        }
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::modern()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editions_build_on_each_other() {
        let p = Ruleset::prototype();
        let c = Ruleset::classic();
        let m = Ruleset::modern();

        assert_eq!(p.pieces, vec![PieceKind::I, PieceKind::L]);
        assert!(!p.rotation && !p.line_clears && !p.scoring);

        assert_eq!(c.pieces.len(), 7);
        assert!(c.rotation && c.line_clears && c.scoring);
        assert!(!c.wall_kicks && !c.shadow && !c.leveled);

        assert!(m.wall_kicks && m.shadow && m.leveled && m.hard_drop);
        assert_eq!(m.preview, 3);
    }

    #[test]
    fn for_edition_matches_constructors() {
        assert_eq!(Ruleset::for_edition(Edition::Classic), Ruleset::classic());
        assert_eq!(Ruleset::default().edition, Edition::Modern);
    }

    #[test]
    fn preview_is_clamped() {
        assert_eq!(Ruleset::modern().with_preview(99).preview, MAX_PREVIEW);
    }

    #[test]
    fn kicks_depend_on_edition() {
        assert_eq!(Ruleset::classic().kicks(), &[0i8]);
        assert_eq!(Ruleset::modern().kicks(), &WALL_KICKS);
    }
}
