//! The `paperforge render` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use uuid::Uuid;

use paperforge_core::assemble;
use paperforge_core::loader::validate_paper;

use crate::commands::load_papers;
use crate::config::load_config_from;
use crate::document::html_document;
use crate::manifest::RenderManifest;

pub fn execute(
    quiz: PathBuf,
    out: Option<PathBuf>,
    start: Option<usize>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let formats: Vec<&str> = if format == "all" {
        vec!["html", "json"]
    } else {
        format.split(',').map(str::trim).collect()
    };
    for fmt in &formats {
        anyhow::ensure!(
            matches!(*fmt, "html" | "json"),
            "unknown format '{fmt}': expected html, json, or all"
        );
    }

    let papers = load_papers(&quiz)?;
    anyhow::ensure!(
        !papers.is_empty(),
        "no quiz papers found in {}",
        quiz.display()
    );

    let out_dir = out.unwrap_or(config.render.output_dir);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    for (path, paper) in &papers {
        let style = paper.style.or(config.style).unwrap_or_default();
        let start_number = start.unwrap_or(paper.start_number);

        let warnings = validate_paper(paper);
        if !warnings.is_empty() {
            tracing::warn!(
                "{} authoring warning(s) in {}; run `paperforge validate` for details",
                warnings.len(),
                path.display()
            );
        }

        let rendered = assemble(&paper.blocks, start_number, &style);

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("paper");

        for fmt in &formats {
            match *fmt {
                "html" => {
                    let paper_path = out_dir.join(format!("{stem}-paper.html"));
                    std::fs::write(&paper_path, html_document(&paper.name, &rendered.paper))?;
                    let key_path = out_dir.join(format!("{stem}-key.html"));
                    let key_title = format!("{} (answer key)", paper.name);
                    std::fs::write(&key_path, html_document(&key_title, &rendered.key))?;
                    eprintln!("Wrote {}", paper_path.display());
                    eprintln!("Wrote {}", key_path.display());
                }
                "json" => {
                    let paper_path = out_dir.join(format!("{stem}-paper.json"));
                    std::fs::write(&paper_path, serde_json::to_string_pretty(&rendered.paper)?)?;
                    let key_path = out_dir.join(format!("{stem}-key.json"));
                    std::fs::write(&key_path, serde_json::to_string_pretty(&rendered.key)?)?;
                    eprintln!("Wrote {}", paper_path.display());
                    eprintln!("Wrote {}", key_path.display());
                }
                // Filtered by the ensure above.
                _ => {}
            }
        }

        let manifest = RenderManifest {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            paper_name: paper.name.clone(),
            source: path.clone(),
            question_count: rendered.question_count,
            blocks: rendered.summaries,
            warnings: warnings.len(),
        };
        manifest.save_json(&out_dir.join(format!("{stem}-manifest.json")))?;

        eprintln!(
            "Rendered \"{}\": {} question(s) across {} block(s)",
            paper.name,
            manifest.question_count,
            manifest.blocks.len()
        );
    }

    Ok(())
}
