use std::time::Duration;

use rand::rngs::StdRng;
use ratatui::style::Color;

use crate::constants::{BOARD_WIDTH, INITIAL_DELAY_MS, MIN_DELAY_MS, SPEED_UP};
use crate::game::board::{Board, Cell, Point};
use crate::game::movement::{attempt_move, Movement};
use crate::game::piece::{random_piece, PIECES};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GameState {
    Playing,
    GameOver,
}

/// All mutable game state: playfield, active piece metadata, score and the
/// current gravity delay. Owned by the main worker loop and mutated only
/// between events, so spawn/move/clear steps never interleave.
pub struct Game {
    pub board: Board,
    pub game_state: GameState,
    piece_index: usize,
    score: u32,
    delay_ms: f64,
    rng: StdRng,
}

impl Game {
    pub fn new(rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            game_state: GameState::Playing,
            piece_index: 0,
            score: 0,
            delay_ms: INITIAL_DELAY_MS,
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn piece_color(&self) -> Color {
        PIECES[self.piece_index].color
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Interval until the next gravity tick.
    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms as u64)
    }

    pub fn is_running(&self) -> bool {
        self.game_state == GameState::Playing
    }

    pub fn stop(&mut self) {
        self.game_state = GameState::GameOver;
    }

    /// Pick a random shape and place it centered in the top rows. A blocked
    /// spawn (any target cell occupied or out of bounds) ends the game and
    /// leaves the board as it was.
    pub fn spawn_piece(&mut self) -> bool {
        if self.game_state != GameState::Playing {
            return false;
        }
        let (index, _) = random_piece(&mut self.rng);
        self.spawn_index(index)
    }

    pub(crate) fn spawn_index(&mut self, index: usize) -> bool {
        let shape = &PIECES[index];
        self.piece_index = index;

        let spawn_x = BOARD_WIDTH as i32 / 2 - 2;
        let targets = shape
            .offsets
            .map(|(dx, dy)| Point::new(dx + spawn_x, dy));

        // All four cells are checked before any is written, so a failed
        // spawn cannot leave a partial piece behind.
        for p in &targets {
            if !p.in_bounds() || self.board.get(p.x as usize, p.y as usize) != Cell::Empty {
                self.game_state = GameState::GameOver;
                return false;
            }
        }
        for p in &targets {
            self.board.set(p.x as usize, p.y as usize, Cell::Alive);
        }
        true
    }

    pub fn try_move(&mut self, movement: Movement) -> bool {
        if self.game_state != GameState::Playing {
            return false;
        }
        attempt_move(&mut self.board, &PIECES[self.piece_index], movement)
    }

    /// Freeze the active piece and collapse every full row, bottom-up.
    /// `highlight` runs once per full row before its collapse so the display
    /// can flash it. Returns the number of rows cleared; scoring and the
    /// speed-up are applied once with the final count.
    pub fn lock_and_clear(&mut self, mut highlight: impl FnMut(&Board, usize)) -> u32 {
        self.board.lock_active();

        let mut cleared = 0;
        while let Some(row) = self.board.find_full_row() {
            highlight(&self.board, row);
            self.board.collapse_row(row);
            cleared += 1;
        }

        if cleared > 0 {
            self.score += cleared * 100;
            self.delay_ms = (self.delay_ms * SPEED_UP).max(MIN_DELAY_MS);
        }
        cleared
    }
}
