//! The `pathwise score` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use pathwise_core::config::load_config_from;
use pathwise_core::model::{Aptitude, Category, Interest, SubCategory};
use pathwise_core::parser::{load_question_bank, load_rule_set, parse_answers};
use pathwise_core::recommend::BALANCED_PROFILE_MESSAGE;
use pathwise_core::report::{Assessment, AssessmentReport};

pub fn execute(
    answers_path: PathBuf,
    bank_path: Option<PathBuf>,
    rules_path: Option<PathBuf>,
    format: Option<String>,
    output: Option<PathBuf>,
    save: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let bank_path = bank_path.or(config.question_bank);
    let rules_path = rules_path.or(config.rules);
    let format = format.unwrap_or(config.default_format);

    let bank = load_question_bank(bank_path.as_deref())?;
    let engine = load_rule_set(rules_path.as_deref())?;
    let answers = parse_answers(&answers_path)?;

    tracing::debug!(
        bank = bank.name(),
        rules = engine.rules().len(),
        answers = answers.len(),
        "scoring answer file {}",
        answers_path.display()
    );

    let assessment = Assessment::new(Arc::new(bank), engine);
    let report = assessment.evaluate(&answers);

    match format.as_str() {
        "markdown" | "md" => {
            print!("{}", report.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => print_summary(&report),
        other => anyhow::bail!("unknown format '{other}' (expected text, json or markdown)"),
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    if save {
        let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");
        let path = config.output_dir.join(format!("report-{timestamp}.json"));
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &AssessmentReport) {
    use comfy_table::{Cell, Table};

    let scores = &report.scores;

    println!(
        "{} v{} | {} of {} answered ({})",
        report.bank.name,
        report.bank.version,
        report.answered,
        report.bank.question_count,
        report.status
    );

    let mut table = Table::new();
    table.set_header(vec!["Area", "Code", "Score", "%"]);

    let codes = Interest::ALL
        .into_iter()
        .map(SubCategory::from)
        .chain(Aptitude::ALL.into_iter().map(SubCategory::from));
    for sub in codes {
        let (score, pct) = match (
            scores.sub_category_scores.get(&sub),
            scores.max_sub_category_scores.get(&sub),
            scores.percentage(sub),
        ) {
            (Some(score), Some(max), Some(pct)) => (format!("{score}/{max}"), format!("{pct:.0}%")),
            _ => ("-".to_string(), "-".to_string()),
        };
        table.add_row(vec![
            Cell::new(sub.label()),
            Cell::new(sub.code()),
            Cell::new(score),
            Cell::new(pct),
        ]);
    }
    println!("\n{table}");

    let top_interests: Vec<&str> = scores.top_interests.iter().map(|i| i.label()).collect();
    let top_aptitudes: Vec<&str> = scores.top_aptitudes.iter().map(|a| a.label()).collect();
    println!("\nTop interests: {}", top_interests.join(", "));
    if top_aptitudes.is_empty() {
        println!("Key strengths: none above threshold");
    } else {
        println!("Key strengths: {}", top_aptitudes.join(", "));
    }

    println!("\nPersonality:");
    for (personality, level) in scores.personality_traits.iter() {
        println!("  {:<24} {level}", personality.label());
    }

    println!("\nOverall:");
    for category in [
        Category::StudyStyle,
        Category::Motivation,
        Category::Environment,
    ] {
        if let Some(pct) = scores.category_percentage(category) {
            println!("  {:<24} {pct:.0}%", category.label());
        }
    }

    println!("\nRecommended career paths:");
    if report.is_balanced_profile() {
        println!("  {BALANCED_PROFILE_MESSAGE}");
    } else {
        for career in &report.recommendations {
            println!("  - {career}");
        }
    }
}
