//! Listening blocks: fixed multiple-choice questions plus the transcripts
//! read aloud, printed after the questions.

use paperforge_markup::{Element, Node};

use crate::generator::Generator;
use crate::generators::key_table;
use crate::generators::reading::push_questions;
use crate::model::{ChoiceQuestion, ListeningQuestion, PaperStyle};

pub struct Listening {
    paper: Vec<Node>,
    key: Vec<Node>,
    count: usize,
}

impl Listening {
    pub fn new(
        id: &str,
        questions: &[ListeningQuestion],
        start: usize,
        style: &PaperStyle,
    ) -> Self {
        let mut paper = Vec::new();
        let choices: Vec<ChoiceQuestion> = questions
            .iter()
            .map(|q| ChoiceQuestion {
                q: q.q.clone(),
                a: q.a.clone(),
                correct: q.correct,
            })
            .collect();
        let entries = push_questions(&mut paper, id, &choices, start);

        if !questions.is_empty() {
            let mut transcripts = Element::new("div").attr("class", "transcripts");
            for (i, question) in questions.iter().enumerate() {
                transcripts = transcripts.child(
                    Element::new("p")
                        .text_child(format!("{}. {}", start + i, question.transcript))
                        .into(),
                );
            }
            paper.push(transcripts.into());
        }

        let key = key_table(&entries, style.key_columns);
        Self {
            paper,
            key,
            count: questions.len(),
        }
    }
}

impl Generator for Listening {
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

    fn question(transcript: &str, q: &str, a: &[&str], correct: usize) -> ListeningQuestion {
        ListeningQuestion {
            transcript: transcript.to_string(),
            q: q.to_string(),
            a: a.iter().map(|s| s.to_string()).collect(),
            correct,
        }
    }

    #[test]
    fn questions_render_with_transcripts_after_them() {
        let gen = Listening::new(
            "l1",
            &[
                question("M: The bus is late.", "How does he travel?", &["Car", "Bus", "Bike", "Walk"], 1),
                question("W: Coffee, please.", "What does she order?", &["Tea", "Milk", "Coffee", "Water"], 2),
            ],
            11,
            &PaperStyle::default(),
        );
        assert_eq!(gen.question_count(), 2);
        assert_eq!(table_cells(&gen.key(), "key"), vec!["11. B", "12. C"]);

        let html = to_html(&gen.paper());
        assert!(html.contains("11. How does he travel?"));
        assert!(html.contains("<div class=\"transcripts\">"));
        assert!(html.contains("11. M: The bus is late."));
        assert!(html.contains("12. W: Coffee, please."));

        let questions_at = html.find("12. What does she order?").unwrap();
        let transcripts_at = html.find("<div class=\"transcripts\">").unwrap();
        assert!(questions_at < transcripts_at);
    }

    #[test]
    fn no_questions_means_an_empty_fragment() {
        let gen = Listening::new("l2", &[], 1, &PaperStyle::default());
        assert!(gen.paper().is_empty());
        assert!(gen.key().is_empty());
        assert_eq!(gen.question_count(), 0);
    }
}
