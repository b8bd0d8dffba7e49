//! Text rendering of the field.

use alloc::string::String;

use crate::{cell::Cell, minefield::Minefield};

/// Glyph for a marked cell.
pub const MARKED: char = '*';
/// Glyph for an unexplored cell.
pub const UNEXPLORED: char = '.';
/// Glyph for an explored cell with no adjacent mines.
pub const EXPLORED: char = '/';

/// Glyph shown for `cell`. Marks take precedence over explored state.
pub fn glyph(cell: &Cell) -> char {
    if cell.is_marked {
        MARKED
    } else if cell.is_explored {
        if cell.adjacent_mines > 0 {
            char::from(b'0' + cell.adjacent_mines)
        } else {
            EXPLORED
        }
    } else {
        UNEXPLORED
    }
}

/// Render the field as the player sees it, framed with 1-based row and
/// column labels. Label digits wrap past 9.
pub fn render_minefield(field: &Minefield) -> String {
    let width = field.width();
    let mut out = String::new();

    out.push_str(" │");
    for c in 0..width {
        out.push(label_digit(c));
    }
    out.push_str("│\n");
    push_rule(&mut out, width);

    let mut row = usize::MAX;
    for ((r, _), cell) in field.cells() {
        if r != row {
            if row != usize::MAX {
                out.push_str("│\n");
            }
            row = r;
            out.push(label_digit(r));
            out.push('│');
        }
        out.push(glyph(&cell));
    }
    out.push_str("│\n");
    push_rule(&mut out, width);
    out
}

/// Last digit of the 1-based label for a zero-based row or column.
fn label_digit(index: usize) -> char {
    char::from(b'0' + ((index + 1) % 10) as u8)
}

fn push_rule(out: &mut String, width: usize) {
    out.push_str("—│");
    for _ in 0..width {
        out.push('—');
    }
    out.push('│');
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn renders_fresh_field() {
        let field = Minefield::from_mines(9, 9, &[(0, 0)], SmallRng::seed_from_u64(1)).unwrap();
        let text = render_minefield(&field);
        let lines: alloc::vec::Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], " │123456789│");
        assert_eq!(lines[1], "—│—————————│");
        assert_eq!(lines[2], "1│.........│");
        assert_eq!(lines[10], "9│.........│");
        assert_eq!(lines[11], "—│—————————│");
    }

    #[test]
    fn renders_numbers_blanks_and_marks() {
        let mut field =
            Minefield::from_mines(3, 2, &[(0, 0)], SmallRng::seed_from_u64(1)).unwrap();
        field.reveal_cell(1, 2, false).unwrap();
        field.mark_cell(0, 0).unwrap();
        let text = render_minefield(&field);
        let lines: alloc::vec::Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "1│*1/│");
        assert_eq!(lines[3], "2│.1/│");
    }

    #[test]
    fn labels_wrap_past_nine() {
        let field = Minefield::from_mines(12, 10, &[(0, 0)], SmallRng::seed_from_u64(1)).unwrap();
        let text = render_minefield(&field);
        let lines: alloc::vec::Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " │123456789012│");
        assert_eq!(lines[10], "9│............│");
        assert_eq!(lines[11], "0│............│");
    }
}
