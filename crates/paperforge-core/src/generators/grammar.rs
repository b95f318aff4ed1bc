//! Grammar transformation blocks: blanks become write-in slots, one per
//! word of the removed content, and the key shows the literal answer.

use std::collections::BTreeMap;

use paperforge_markup::{parse, Element, Node};

use crate::generator::Generator;
use crate::generators::{key_table, replace_blanks};
use crate::model::PaperStyle;

pub struct Grammar {
    paper: Vec<Node>,
    key: Vec<Node>,
    count: usize,
}

impl Grammar {
    pub fn new(
        text: &str,
        hints: &BTreeMap<String, Option<String>>,
        start: usize,
        style: &PaperStyle,
    ) -> Self {
        let mut paper = parse(text);
        let originals = replace_blanks(&mut paper, start, |number, original| {
            let mut span = Element::new("span")
                .attr("class", "blank")
                .text_child(format!("({number}) "));
            // Hints are looked up by the blank's exact original content.
            // An absent key and an explicit null both mean no hint.
            match hints.get(original).and_then(|hint| hint.as_deref()) {
                Some(hint) => {
                    span = span.child(slot()).text_child(format!(" ({hint})"));
                }
                None => {
                    let words = original.split_whitespace().count().max(1);
                    for i in 0..words {
                        if i > 0 {
                            span = span.text_child(" ");
                        }
                        span = span.child(slot());
                    }
                }
            }
            vec![span.into()]
        });

        let entries: Vec<(usize, String)> = originals
            .iter()
            .enumerate()
            .map(|(i, original)| (start + i, original.clone()))
            .collect();
        let key = key_table(&entries, style.key_columns);
        Self {
            paper,
            key,
            count: originals.len(),
        }
    }
}

fn slot() -> Node {
    Element::new("u")
        .attr("class", "slot")
        .text_child("____")
        .into()
}

impl Generator for Grammar {
    fn paper(&self) -> Vec<Node> {
        self.paper.clone()
    }

    fn key(&self) -> Vec<Node> {
        self.key.clone()
    }

    fn question_count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::testutil::table_cells;
    use paperforge_markup::to_html;

    fn slot_count(nodes: &[Node]) -> usize {
        fn count(nodes: &[Node], hits: &mut usize) {
            for node in nodes {
                if let Node::Element(el) = node {
                    if el.tag == "u" && el.get_attr("class") == Some("slot") {
                        *hits += 1;
                    }
                    count(&el.children, hits);
                }
            }
        }
        let mut hits = 0;
        count(nodes, &mut hits);
        hits
    }

    #[test]
    fn single_word_blank_renders_one_slot_and_a_literal_key() {
        let gen = Grammar::new(
            "<p>He <code>goes</code> home.</p>",
            &BTreeMap::new(),
            3,
            &PaperStyle::default(),
        );
        assert_eq!(gen.question_count(), 1);

        let paper = gen.paper();
        assert_eq!(slot_count(&paper), 1);
        assert!(to_html(&paper).contains("(3) "));
        assert_eq!(table_cells(&gen.key(), "key"), vec!["3. goes"]);
    }

    #[test]
    fn multi_word_blank_renders_one_slot_per_word() {
        let gen = Grammar::new(
            "<p>It <code>is meant</code> well.</p>",
            &BTreeMap::new(),
            1,
            &PaperStyle::default(),
        );
        assert_eq!(slot_count(&gen.paper()), 2);
        assert_eq!(table_cells(&gen.key(), "key"), vec!["1. is meant"]);
    }

    #[test]
    fn hint_collapses_to_a_single_slot_with_a_label() {
        let mut hints = BTreeMap::new();
        hints.insert("is meant".to_string(), Some("mean".to_string()));
        let gen = Grammar::new(
            "<p>It <code>is meant</code> well.</p>",
            &hints,
            1,
            &PaperStyle::default(),
        );
        let html = to_html(&gen.paper());
        assert_eq!(slot_count(&gen.paper()), 1);
        assert!(html.contains(" (mean)"), "paper: {html}");
        // The key still reports the full answer, not the hint.
        assert_eq!(table_cells(&gen.key(), "key"), vec!["1. is meant"]);
    }

    #[test]
    fn null_hint_means_no_hint() {
        let mut hints = BTreeMap::new();
        hints.insert("is meant".to_string(), None);
        let gen = Grammar::new(
            "<p>It <code>is meant</code> well.</p>",
            &hints,
            1,
            &PaperStyle::default(),
        );
        assert_eq!(slot_count(&gen.paper()), 2);
        assert!(!to_html(&gen.paper()).contains("(mean)"));
    }

    #[test]
    fn blanks_number_in_document_order() {
        let gen = Grammar::new(
            "<p><code>first</code> then <code>second</code></p>",
            &BTreeMap::new(),
            10,
            &PaperStyle::default(),
        );
        let html = to_html(&gen.paper());
        let first = html.find("(10) ").unwrap();
        let second = html.find("(11) ").unwrap();
        assert!(first < second);
        assert_eq!(
            table_cells(&gen.key(), "key"),
            vec!["10. first", "11. second"]
        );
    }
}
