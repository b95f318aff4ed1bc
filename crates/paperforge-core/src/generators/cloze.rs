//! Cloze blocks: every blank carries its own short option row, shuffled
//! independently of the other blanks.

use tracing::warn;

use paperforge_markup::{parse, Element, Node};

use crate::generator::Generator;
use crate::generators::{key_table, numbered_blank, replace_blanks};
use crate::layout;
use crate::model::{ClozeQuestion, PaperStyle};
use crate::shuffle::shuffle;

pub struct Cloze {
    paper: Vec<Node>,
    key: Vec<Node>,
    count: usize,
}

impl Cloze {
    pub fn new(
        id: &str,
        text: &str,
        questions: &[ClozeQuestion],
        start: usize,
        style: &PaperStyle,
    ) -> Self {
        let mut paper = parse(text);
        let originals = replace_blanks(&mut paper, start, |n, _| vec![numbered_blank(n)]);

        let mut entries = Vec::with_capacity(originals.len());
        for (i, original) in originals.iter().enumerate() {
            let number = start + i;
            match questions.iter().find(|q| &q.original == original) {
                Some(question) => {
                    let mut pool = vec![original.clone()];
                    pool.extend_from_slice(&question.distractors);
                    let shuffled = shuffle(&pool);
                    let marks = layout::markers(&[], shuffled.len());
                    let line = marks
                        .iter()
                        .zip(&shuffled)
                        .map(|(mark, option)| format!("{mark}. {option}"))
                        .collect::<Vec<_>>()
                        .join("  ");
                    paper.push(
                        Element::new("p")
                            .attr("class", "cloze-options")
                            .text_child(format!("{number}. {line}"))
                            .into(),
                    );
                    let letter = shuffled
                        .iter()
                        .position(|option| option == original)
                        .map(|pos| marks[pos].clone())
                        .unwrap_or_default();
                    entries.push((number, letter));
                }
                None => {
                    // The blank still keeps its number; the grader gets the
                    // literal answer instead of a letter.
                    warn!(
                        block = %id,
                        blank = %original,
                        "no cloze question matches this blank; option row omitted"
                    );
                    entries.push((number, original.clone()));
                }
            }
        }

        let key = key_table(&entries, style.key_columns);
        Self {
            paper,
            key,
            count: originals.len(),
        }
    }
}

impl Generator for Cloze {
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
