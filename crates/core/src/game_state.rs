//! Game state module - board, current shape, score, and the turn lifecycle.
//!
//! All mutation is routed through [`GameState::apply_intent`]: one placement
//! or restart intent is fully resolved (placement, clear resolution, scoring,
//! next-shape draw, game-over check) before the next is accepted. Invalid
//! intents are absorbed as no-ops, never reported as errors.

use crate::board::{Board, ClearedCells};
use crate::rng::ShapeDealer;
use crate::scoring::clear_score;
use crate::shapes;
use crate::snapshot::GameSnapshot;
use crate::types::{CellOffset, Coord, GameIntent, ShapeId, FLASH_FRAMES, GRID_HEIGHT, GRID_WIDTH};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    dealer: ShapeDealer,
    current: ShapeId,
    score: u32,
    game_over: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Cells vacated by the most recent clear, kept for the flash effect.
    cleared: ClearedCells,
    /// Presentation frames remaining on the clear flash.
    flash_frames: u8,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut dealer = ShapeDealer::new(seed);
        let current = dealer.draw();

        Self {
            board: Board::new(),
            dealer,
            current,
            score: 0,
            game_over: false,
            episode_id: 0,
            cleared: ClearedCells::new(),
            flash_frames: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_shape(&self) -> ShapeId {
        self.current
    }

    /// Offset list of the current shape (for rendering)
    pub fn current_offsets(&self) -> &'static [CellOffset] {
        shapes::offsets(self.current)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.dealer.seed()
    }

    /// Cells vacated by the most recent clear (empty once the flash ends)
    pub fn cleared_cells(&self) -> &[Coord] {
        &self.cleared
    }

    pub fn flash_frames(&self) -> u8 {
        self.flash_frames
    }

    /// Whether the current shape fits with its anchor at (x, y).
    ///
    /// Read-only; the presentation layer polls this for hover feedback.
    pub fn can_place_at(&self, x: i8, y: i8) -> bool {
        !self.game_over && self.board.can_place(self.current_offsets(), x, y)
    }

    /// Apply one intent from the presentation layer.
    ///
    /// Returns whether the intent changed any state.
    pub fn apply_intent(&mut self, intent: GameIntent) -> bool {
        match intent {
            GameIntent::Place { x, y } => self.attempt_placement(x, y),
            GameIntent::Restart => self.restart(),
        }
    }

    /// Resolve a placement intent for the current shape.
    ///
    /// Rejected anchors (out of bounds, overlapping, or after game over) are
    /// silent no-ops. A successful placement resolves line clears, scores
    /// them, draws the next shape, and flips to game over when that shape
    /// has no legal anchor left.
    pub fn attempt_placement(&mut self, x: i8, y: i8) -> bool {
        if self.game_over {
            return false;
        }

        let shape = self.current_offsets();
        if !self.board.can_place(shape, x, y) {
            return false;
        }
        self.board.place(shape, x, y);

        let cleared = self.board.clear_full_lines();
        if !cleared.is_empty() {
            self.score = self.score.saturating_add(clear_score(cleared.len()));
            self.cleared = cleared;
            self.flash_frames = FLASH_FRAMES;
        }

        self.current = self.dealer.draw();
        if !self.board.can_place_anywhere(self.current_offsets()) {
            self.game_over = true;
        }

        true
    }

    /// Reset the game. Only honored from the game-over state.
    pub fn restart(&mut self) -> bool {
        if !self.game_over {
            return false;
        }

        self.board.clear();
        self.score = 0;
        self.current = self.dealer.draw();
        self.game_over = false;
        self.cleared.clear();
        self.flash_frames = 0;
        self.episode_id = self.episode_id.wrapping_add(1);

        true
    }

    /// Advance the clear flash by one presentation frame.
    ///
    /// Purely cosmetic: the countdown never blocks intents or shape draws.
    pub fn tick_frame(&mut self) {
        if self.flash_frames > 0 {
            self.flash_frames -= 1;
            if self.flash_frames == 0 {
                self.cleared.clear();
            }
        }
    }

    /// Fill a snapshot for the per-frame presentation poll
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.current = self.current;
        out.score = self.score;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.seed = self.seed();
        out.flash_frames = self.flash_frames;

        out.cleared = [[false; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        for &(x, y) in self.cleared_cells() {
            if (0..GRID_WIDTH as i8).contains(&x) && (0..GRID_HEIGHT as i8).contains(&y) {
                out.cleared[y as usize][x as usize] = true;
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
