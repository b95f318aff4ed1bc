//! Reading comprehension blocks: a passage followed by fixed
//! multiple-choice questions. Purely projective, no tree walk and no
//! shuffling; options appear exactly as authored.

use tracing::warn;

use paperforge_markup::{parse, Element, Node};

use crate::generator::Generator;
use crate::generators::key_table;
use crate::layout;
use crate::model::{ChoiceQuestion, PaperStyle};

pub struct Reading {
    paper: Vec<Node>,
    key: Vec<Node>,
    count: usize,
}

impl Reading {
    pub fn new(
        id: &str,
        text: &str,
        questions: &[ChoiceQuestion],
        start: usize,
        style: &PaperStyle,
    ) -> Self {
        let mut paper = parse(text);
        let entries = push_questions(&mut paper, id, questions, start);
        let key = key_table(&entries, style.key_columns);
        Self {
            paper,
            key,
            count: questions.len(),
        }
    }
}

/// Appends numbered question and choice paragraphs, returning the key
/// entries. Shared with listening blocks.
pub(crate) fn push_questions(
    paper: &mut Vec<Node>,
    id: &str,
    questions: &[ChoiceQuestion],
    start: usize,
) -> Vec<(usize, String)> {
    let mut entries = Vec::with_capacity(questions.len());
    for (i, question) in questions.iter().enumerate() {
        let number = start + i;
        paper.push(
            Element::new("p")
                .attr("class", "question")
                .text_child(format!("{number}. {}", question.q))
                .into(),
        );
        let marks = layout::markers(&[], question.a.len());
        for (mark, option) in marks.iter().zip(&question.a) {
            paper.push(
                Element::new("p")
                    .attr("class", "choice")
                    .text_child(format!("{mark}. {option}"))
                    .into(),
            );
        }
        let letter = match marks.get(question.correct) {
            Some(mark) => mark.clone(),
            None => {
                warn!(
                    block = %id,
                    question = number,
                    "correct index is out of range; key entry left empty"
                );
                String::new()
            }
        };
        entries.push((number, letter));
    }
    entries
}

impl Generator for Reading {
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
