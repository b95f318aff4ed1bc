//! One generator per question archetype.
//!
//! Every generator does its work in its constructor: parse the block's own
//! private tree, replace blank markers, number questions from the given
//! start, and precompute both fragments. The shared helpers here keep blank
//! replacement and key-table rendering identical across archetypes.

pub mod cloze;
pub mod custom;
pub mod fishing;
pub mod grammar;
pub mod listening;
pub mod reading;
pub mod sentence;

pub use cloze::Cloze;
pub use custom::Custom;
pub use fishing::Fishing;
pub use grammar::Grammar;
pub use listening::Listening;
pub use reading::Reading;
pub use sentence::SentenceChoice;

use paperforge_markup::{parse, walk, Element, Node};

use crate::layout;
use crate::shuffle::shuffle;

/// Replaces each `<code>` blank in document order and collects its original
/// text. `make` receives the question number and the original content and
/// returns the replacement nodes.
///
/// Blank markers are expected to be leaves. A marker nested inside another
/// marker still consumes a number, but its replacement is discarded along
/// with the outer marker's body.
pub(crate) fn replace_blanks(
    nodes: &mut Vec<Node>,
    start: usize,
    mut make: impl FnMut(usize, &str) -> Vec<Node>,
) -> Vec<String> {
    let mut originals = Vec::new();
    walk(nodes, |node| {
        if node.is_element("code") {
            let original = node.text_content();
            let replacement = make(start + originals.len(), &original);
            originals.push(original);
            Some(replacement)
        } else {
            None
        }
    });
    originals
}

/// The standard numbered blank shown in place of removed content.
pub(crate) fn numbered_blank(number: usize) -> Node {
    Element::new("u")
        .attr("class", "blank")
        .text_child(format!(" ({number}) "))
        .into()
}

/// One rendered cell per option, labeled with its marker.
pub(crate) fn option_cells(marks: &[String], options: &[String]) -> Vec<Node> {
    marks
        .iter()
        .zip(options)
        .map(|(mark, option)| Node::text(format!("{mark}. {option}")))
        .collect()
}

/// Renders `(number, value)` answer entries as the block's key table.
pub(crate) fn key_table(entries: &[(usize, String)], key_columns: usize) -> Vec<Node> {
    if entries.is_empty() {
        return Vec::new();
    }
    let cells = entries
        .iter()
        .map(|(number, value)| Node::text(format!("{number}. {value}")))
        .collect();
    vec![layout::option_table(cells, key_columns, "key")]
}

/// Shared Fishing / SentenceChoice pipeline: replace blanks, build one
/// combined option pool (correct answers in document order, then the
/// distractors, appended once), shuffle it once, and resolve each blank's
/// key letter as the marker at the first shuffled position matching its
/// original string. Duplicate literals all resolve to the first occurrence.
pub(crate) fn pooled_block(
    text: &str,
    distractors: &[String],
    marker_set: &[String],
    start: usize,
    options_per_row: usize,
    key_columns: usize,
) -> (Vec<Node>, Vec<Node>, usize) {
    let mut paper = parse(text);
    let originals = replace_blanks(&mut paper, start, |n, _| vec![numbered_blank(n)]);

    let mut pool = originals.clone();
    pool.extend_from_slice(distractors);
    let shuffled = shuffle(&pool);
    let marks = layout::markers(marker_set, shuffled.len());

    if !shuffled.is_empty() {
        paper.push(layout::option_table(
            option_cells(&marks, &shuffled),
            options_per_row,
            "options",
        ));
    }

    let entries: Vec<(usize, String)> = originals
        .iter()
        .enumerate()
        .map(|(i, original)| {
            let letter = shuffled
                .iter()
                .position(|option| option == original)
                .map(|pos| marks[pos].clone())
                .unwrap_or_default();
            (start + i, letter)
        })
        .collect();

    let key = key_table(&entries, key_columns);
    (paper, key, originals.len())
}
