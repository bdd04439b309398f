pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Gravity timing (in milliseconds)
pub const INITIAL_DELAY_MS: f64 = 800.0;
pub const SPEED_UP: f64 = 0.9; // delay multiplier applied once per line-clear pass
pub const MIN_DELAY_MS: f64 = 50.0;

// Line-clear highlight animation
pub const FLASH_FRAMES: u8 = 4;
pub const FLASH_FRAME_MS: u64 = 50;

// How long the final board stays on screen after game over (milliseconds)
pub const GAME_OVER_PAUSE_MS: u64 = 2000;
