//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the board cursor on a `size`×`size` board based on arrow keys.
///
/// The cursor stops at the edges.
pub fn move_cursor(cursor: usize, size: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / size, cursor % size);

    match key {
        KeyCode::Right if col + 1 < size => cursor + 1,
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Down if row + 1 < size => cursor + size,
        KeyCode::Up if row > 0 => cursor - size,
        // No change for other keys or edge cases
        _ => cursor,
    }
}

/// Moves a list selection up or down, stopping at the ends.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Down if selected + 1 < len => selected + 1,
        KeyCode::Up => selected.saturating_sub(1),
        _ => selected,
    }
}
