//! Piece randomization
//!
//! A small LCG drives every random choice so a seed fully determines the
//! piece sequence. [`PieceQueue`] sits on top of it and keeps a lookahead
//! buffer, which is what the next-piece preview reads.

use std::collections::VecDeque;

use crate::types::{PieceKind, Randomizer};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`. `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift: the low bits of an LCG cycle quickly.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Source of upcoming pieces with a fixed-length lookahead.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    pieces: Vec<PieceKind>,
    randomizer: Randomizer,
    rng: SimpleRng,
    seed: u32,
    /// Remaining pieces of the current bag (Bag randomizer only).
    bag: Vec<PieceKind>,
    upcoming: VecDeque<PieceKind>,
    lookahead: usize,
}

impl PieceQueue {
    /// Create a queue over `pieces`.
    ///
    /// At least one piece is always buffered, so the next spawn is known in
    /// advance even when no preview is shown. An empty piece list falls back
    /// to all seven kinds.
    pub fn new(pieces: &[PieceKind], randomizer: Randomizer, seed: u32, lookahead: usize) -> Self {
        let pieces = if pieces.is_empty() {
            PieceKind::ALL.to_vec()
        } else {
            pieces.to_vec()
        };
        let lookahead = lookahead.max(1);
        let mut queue = Self {
            pieces,
            randomizer,
            rng: SimpleRng::new(seed),
            seed,
            bag: Vec::new(),
            upcoming: VecDeque::with_capacity(lookahead + 1),
            lookahead,
        };
        queue.fill();
        queue
    }

    fn generate(&mut self) -> PieceKind {
        match self.randomizer {
            Randomizer::Uniform => {
                let i = self.rng.next_range(self.pieces.len() as u32) as usize;
                self.pieces[i]
            }
            Randomizer::Bag => {
                if self.bag.is_empty() {
                    self.bag.extend_from_slice(&self.pieces);
                    self.rng.shuffle(&mut self.bag);
                }
                // Deal from the back; the shuffle makes the order arbitrary anyway.
                self.bag.pop().unwrap_or(self.pieces[0])
            }
        }
    }

    fn fill(&mut self) {
        while self.upcoming.len() < self.lookahead {
            let next = self.generate();
            self.upcoming.push_back(next);
        }
    }

    /// Take the next piece and top the lookahead back up.
    pub fn draw(&mut self) -> PieceKind {
        let piece = match self.upcoming.pop_front() {
            Some(p) => p,
            None => self.generate(),
        };
        self.fill();
        piece
    }

    /// The piece [`PieceQueue::draw`] will return next.
    pub fn peek(&self) -> PieceKind {
        self.upcoming.front().copied().unwrap_or(self.pieces[0])
    }

    /// Upcoming pieces, nearest first.
    pub fn upcoming(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.upcoming.iter().copied()
    }

    pub fn pieces(&self) -> &[PieceKind] {
        &self.pieces
    }

    /// The seed this queue was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}
