use rand::Rng;
use ratatui::style::Color;

/// Immutable catalog entry for one tetromino: four relative cell offsets in
/// its spawn orientation, its display color, and whether rotation does
/// anything.
#[derive(Clone, Copy, Debug)]
pub struct PieceShape {
    pub offsets: [(i32, i32); 4],
    pub color: Color,
    pub rotates: bool,
}

/// The seven canonical tetrominoes: I, J, L, O, S, T, Z.
///
/// The O piece (index 3) is square around its pivot choice, so rotating it is
/// a no-op by design rather than a transform.
pub const PIECES: [PieceShape; 7] = [
    // I
    PieceShape {
        offsets: [(0, 1), (1, 1), (2, 1), (3, 1)],
        color: Color::Cyan,
        rotates: true,
    },
    // J
    PieceShape {
        offsets: [(0, 0), (0, 1), (1, 1), (2, 1)],
        color: Color::Blue,
        rotates: true,
    },
    // L
    PieceShape {
        offsets: [(0, 1), (1, 1), (2, 0), (2, 1)],
        color: Color::Yellow,
        rotates: true,
    },
    // O
    PieceShape {
        offsets: [(1, 0), (2, 0), (1, 1), (2, 1)],
        color: Color::Yellow,
        rotates: false,
    },
    // S
    PieceShape {
        offsets: [(0, 1), (1, 0), (1, 1), (2, 0)],
        color: Color::Green,
        rotates: true,
    },
    // T
    PieceShape {
        offsets: [(0, 1), (1, 0), (1, 1), (2, 1)],
        color: Color::Magenta,
        rotates: true,
    },
    // Z
    PieceShape {
        offsets: [(0, 0), (1, 0), (1, 1), (2, 1)],
        color: Color::Red,
        rotates: true,
    },
];

/// Palette used for settled cells, indexed by `(x + y) % 7`.
pub const DEAD_COLORS: [Color; 7] = [
    Color::Cyan,
    Color::Blue,
    Color::Yellow,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
];

/// Uniform pick among the seven shapes. Takes the rng so callers can seed a
/// deterministic one in tests.
pub fn random_piece(rng: &mut impl Rng) -> (usize, &'static PieceShape) {
    let index = rng.gen_range(0..PIECES.len());
    (index, &PIECES[index])
}
