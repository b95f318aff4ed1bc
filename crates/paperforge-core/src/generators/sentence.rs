//! Sentence-choice blocks: the Fishing pipeline with whole sentences as
//! options, laid out one per row.

use paperforge_markup::Node;

use crate::generator::Generator;
use crate::generators::pooled_block;
use crate::model::PaperStyle;

pub struct SentenceChoice {
    paper: Vec<Node>,
    key: Vec<Node>,
    count: usize,
}

impl SentenceChoice {
    pub fn new(text: &str, distractors: &[String], start: usize, style: &PaperStyle) -> Self {
        // Sentences are too long to sit side by side, so the option table
        // always has a single column.
        let (paper, key, count) =
            pooled_block(text, distractors, &[], start, 1, style.key_columns);
        Self { paper, key, count }
    }
}

impl Generator for SentenceChoice {
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
