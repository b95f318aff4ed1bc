//! Word-bank blocks: all blanks share one shuffled option pool.

use paperforge_markup::Node;

use crate::generator::Generator;
use crate::generators::pooled_block;
use crate::model::PaperStyle;

pub struct Fishing {
    paper: Vec<Node>,
    key: Vec<Node>,
    count: usize,
}

impl Fishing {
    pub fn new(
        text: &str,
        distractors: &[String],
        marker_set: &[String],
        start: usize,
        style: &PaperStyle,
    ) -> Self {
        let (paper, key, count) = pooled_block(
            text,
            distractors,
            marker_set,
            start,
            style.options_per_row,
            style.key_columns,
        );
        Self { paper, key, count }
    }
}

impl Generator for Fishing {
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
