//! The `pathwise questions` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use pathwise_core::model::Category;
use pathwise_core::parser::load_question_bank;

pub fn execute(bank_path: Option<PathBuf>, category: Option<String>) -> Result<()> {
    let bank = load_question_bank(bank_path.as_deref())?;
    let category = category
        .map(|c| c.parse::<Category>())
        .transpose()
        .context("invalid --category")?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Category", "Sub-category", "Reverse", "Question"]);

    let mut shown = 0;
    for question in bank
        .questions()
        .iter()
        .filter(|q| category.map_or(true, |c| q.category == c))
    {
        table.add_row(vec![
            Cell::new(question.id),
            Cell::new(question.category.code()),
            Cell::new(question.sub_category.map_or("-", |s| s.code())),
            Cell::new(if question.reverse_scored { "yes" } else { "" }),
            Cell::new(&question.text),
        ]);
        shown += 1;
    }

    println!("{} v{}", bank.name(), bank.version());
    println!("{table}");
    println!("{shown} of {} questions", bank.len());

    Ok(())
}
