//! Auto-Growing Lists
//!
//! Editor lists (ingredients, steps) that always end in exactly one blank
//! row, so a new entry can be typed without pressing an "add" button.

/// A row of an auto-growing list
pub trait AutoGrowRow {
    /// A fresh blank row
    fn blank() -> Self;
    /// Whether the row's primary field is empty
    fn is_blank(&self) -> bool;
}

/// Restore the list invariant after an edit: no two adjacent blank rows and
/// exactly one trailing blank row. Returns whether the list changed.
pub fn settle<T: AutoGrowRow>(rows: &mut Vec<T>) -> bool {
    let before = rows.len();

    let mut index = 1;
    while index < rows.len() {
        if rows[index].is_blank() && rows[index - 1].is_blank() {
            rows.remove(index);
        } else {
            index += 1;
        }
    }
    let collapsed = rows.len() != before;

    let grown = match rows.last() {
        Some(last) if last.is_blank() => false,
        _ => {
            rows.push(T::blank());
            true
        }
    };

    collapsed || grown
}

/// Whether the list already satisfies the invariant
pub fn is_settled<T: AutoGrowRow>(rows: &[T]) -> bool {
    let trailing_blank = rows.last().is_some_and(AutoGrowRow::is_blank);
    let no_adjacent_blanks = rows.windows(2).all(|pair| !(pair[0].is_blank() && pair[1].is_blank()));
    trailing_blank && no_adjacent_blanks
}

/// Edit one row, then settle
pub fn edit_row<T: AutoGrowRow>(rows: &mut Vec<T>, index: usize, edit: impl FnOnce(&mut T)) {
    if let Some(row) = rows.get_mut(index) {
        edit(row);
    }
    settle(rows);
}

/// Explicitly delete one row, then settle
pub fn remove_row<T: AutoGrowRow>(rows: &mut Vec<T>, index: usize) -> Option<T> {
    let removed = (index < rows.len()).then(|| rows.remove(index));
    settle(rows);
    removed
}
