//! The `paperforge list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use paperforge_core::assemble;

use crate::commands::load_papers;
use crate::config::load_config_from;

pub fn execute(quiz: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let papers = load_papers(&quiz)?;

    for (path, paper) in &papers {
        let style = paper.style.or(config.style).unwrap_or_default();
        let rendered = assemble(&paper.blocks, paper.start_number, &style);

        println!(
            "{} ({}, {} questions)",
            paper.name,
            path.display(),
            rendered.question_count
        );

        let mut table = Table::new();
        table.set_header(vec!["Block", "Type", "First #", "Questions"]);

        for summary in &rendered.summaries {
            table.add_row(vec![
                Cell::new(&summary.id),
                Cell::new(&summary.kind),
                Cell::new(summary.first_number),
                Cell::new(summary.question_count),
            ]);
        }

        println!("{table}\n");
    }

    Ok(())
}
