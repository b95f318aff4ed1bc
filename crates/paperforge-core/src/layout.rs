//! Option markers and table layout.
//!
//! Markers label option positions (A, B, C…). Layout turns flat cell lists
//! into fixed-width table rows. Both are pure and allocation-only; nothing
//! here touches numbering or answers.

use paperforge_markup::{Element, Node};

/// Default marker for a zero-based position: A..Z, then AA, AB, … like
/// spreadsheet columns.
fn default_marker(mut i: usize) -> String {
    let mut out = String::new();
    loop {
        out.insert(0, (b'A' + (i % 26) as u8) as char);
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    out
}

/// Markers for `n` option positions. Positions covered by the block's
/// custom set use it; positions past its end fall back to the default
/// marker for that position, so a short custom set still yields unique
/// labels.
pub fn markers(custom: &[String], n: usize) -> Vec<String> {
    (0..n)
        .map(|i| custom.get(i).cloned().unwrap_or_else(|| default_marker(i)))
        .collect()
}

/// Groups cells into rows of `columns`, padding the tail with empty text
/// cells so every row has the same width. Zero columns means one cell per
/// row.
pub fn grid(mut cells: Vec<Node>, columns: usize) -> Vec<Vec<Node>> {
    let columns = columns.max(1);
    while cells.len() % columns != 0 {
        cells.push(Node::text(""));
    }
    let mut rows = Vec::with_capacity(cells.len() / columns);
    let mut row = Vec::with_capacity(columns);
    for cell in cells {
        row.push(cell);
        if row.len() == columns {
            rows.push(std::mem::take(&mut row));
        }
    }
    rows
}

/// Lays cells out as a `<table>` with the given class.
pub fn option_table(cells: Vec<Node>, columns: usize, class: &str) -> Node {
    let mut table = Element::new("table").attr("class", class);
    for cells_row in grid(cells, columns) {
        let mut tr = Element::new("tr");
        for cell in cells_row {
            tr = tr.child(Element::new("td").child(cell).into());
        }
        table = table.child(tr.into());
    }
    table.into()
}
