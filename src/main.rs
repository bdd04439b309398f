use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, style::Color, Terminal};
use std::{
    error::Error,
    io::{self, stdout, Stdout},
    thread,
    time::{Duration, Instant},
};

mod audio;
mod constants;
mod game;
mod input;
mod ui;

use constants::{FLASH_FRAMES, FLASH_FRAME_MS, GAME_OVER_PAUSE_MS};
use game::{Board, Game, Movement};
use input::{map_key, Action};
use ui::Flash;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<(), Box<dyn Error>> {
    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, SetTitle("MINITETRIS"))?;

    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    audio::start_music();

    let mut game = Game::new(StdRng::from_entropy());
    let result = run(&mut terminal, &mut game);

    // Teardown runs on every path, including after an internal fault; the
    // fault is reported only once the terminal is usable again.
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("An error occurred: {err}");
    }
    println!("Game over! Final score: {}", game.score());

    Ok(())
}

/// The single worker that owns the game: consumes key events with a poll
/// deadline at the next gravity tick, so tick and input mutations apply
/// serially and tick rescheduling is a plain deadline reassignment.
fn run(terminal: &mut Tui, game: &mut Game) -> Result<(), Box<dyn Error>> {
    game.spawn_piece();
    terminal.draw(|f| ui::ui(f, game))?;

    let mut next_tick = Instant::now() + game.tick_delay();

    while game.is_running() {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat {
                    match map_key(&key) {
                        Some(Action::Quit) => {
                            // Immediate stop: no game-over hold, the final
                            // score is printed after terminal restore.
                            game.stop();
                            return Ok(());
                        }
                        Some(Action::Move(movement)) => {
                            if game.try_move(movement) {
                                terminal.draw(|f| ui::ui(f, game))?;
                            }
                        }
                        Some(Action::ForcedDown) => {
                            // A failed forced drop does not lock the piece;
                            // only the gravity tick locks.
                            game.try_move(Movement::Down);
                            terminal.draw(|f| ui::ui(f, game))?;
                            // Cancel the pending tick and reschedule at the
                            // current delay, otherwise the stale deadline
                            // would drop the piece again right away.
                            next_tick = Instant::now() + game.tick_delay();
                        }
                        None => {}
                    }
                }
            }
        }

        if game.is_running() && Instant::now() >= next_tick {
            tick(terminal, game)?;
            next_tick = Instant::now() + game.tick_delay();
        }
    }

    // Blocked spawn: leave the final board and score on screen briefly.
    terminal.draw(|f| ui::ui(f, game))?;
    thread::sleep(Duration::from_millis(GAME_OVER_PAUSE_MS));
    Ok(())
}

/// One gravity step: move down, or lock the piece, clear lines and spawn the
/// next one.
fn tick(terminal: &mut Tui, game: &mut Game) -> Result<(), Box<dyn Error>> {
    if !game.try_move(Movement::Down) {
        settle(terminal, game)?;
    }
    terminal.draw(|f| ui::ui(f, game))?;
    Ok(())
}

fn settle(terminal: &mut Tui, game: &mut Game) -> Result<(), Box<dyn Error>> {
    // Captured copies for the flash frames: the score advances only after
    // the clear pass, and the piece color cannot change while locking.
    let score = game.score();
    let piece_color = game.piece_color();

    let mut flash_err: Option<io::Error> = None;
    game.lock_and_clear(|board, row| {
        if flash_err.is_none() {
            if let Err(err) = flash_row(terminal, board, score, piece_color, row) {
                flash_err = Some(err);
            }
        }
    });
    if let Some(err) = flash_err {
        return Err(err.into());
    }

    game.spawn_piece();
    Ok(())
}

/// The line-clear highlight: repaint the full row through a short sequence
/// of alternating palette/black frames before it collapses.
fn flash_row(
    terminal: &mut Tui,
    board: &Board,
    score: u32,
    piece_color: Color,
    row: usize,
) -> io::Result<()> {
    for phase in 0..FLASH_FRAMES {
        terminal.draw(|f| ui::ui_with_flash(f, board, score, piece_color, Flash { row, phase }))?;
        thread::sleep(Duration::from_millis(FLASH_FRAME_MS));
    }
    Ok(())
}
