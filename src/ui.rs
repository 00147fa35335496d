//! Plain-text board views for the CLI. Presentation only; the core never
//! depends on this module.

use crate::board::Board;
use crate::coord::Coord;

/// Render the player's own grid: ships visible, shots overlaid.
/// `#` hit, `o` miss, `S` intact ship cell, `.` water.
pub fn render_own_board<const N: usize>(board: &Board<N>) -> String {
    render(board, true)
}

/// Render the tracking view of the opponent's grid: only shot results.
/// `#` hit, `o` miss, `.` unknown.
pub fn render_tracking_board<const N: usize>(board: &Board<N>) -> String {
    render(board, false)
}

fn render<const N: usize>(board: &Board<N>, reveal_ships: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..N {
        out.push_str(&format!("{c:2}"));
    }
    out.push('\n');
    for r in 0..N {
        out.push_str(&format!("{r:2} "));
        for c in 0..N {
            let coord = Coord::new(r as u8, c as u8);
            let cell = if board.hits().contains(coord) {
                '#'
            } else if board.misses().contains(coord) {
                'o'
            } else if reveal_ships && board.ships().contains(coord) {
                'S'
            } else {
                '.'
            };
            out.push(' ');
            out.push(cell);
        }
        out.push('\n');
    }
    out
}
