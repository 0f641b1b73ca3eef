//! The `pathwise recommend` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use pathwise_core::model::{Aptitude, Interest, SubCategory};
use pathwise_core::parser::load_rule_set;
use pathwise_core::recommend::BALANCED_PROFILE_MESSAGE;

pub fn execute(interests: String, aptitudes: Option<String>, rules: Option<PathBuf>) -> Result<()> {
    let engine = load_rule_set(rules.as_deref())?;

    let interests: Vec<Interest> = parse_codes(&interests, "interest", |sub| match sub {
        SubCategory::Interest(i) => Some(i),
        _ => None,
    })?;
    let aptitudes: Vec<Aptitude> = match aptitudes {
        Some(codes) => parse_codes(&codes, "aptitude", |sub| match sub {
            SubCategory::Aptitude(a) => Some(a),
            _ => None,
        })?,
        None => Vec::new(),
    };

    let careers = engine.recommend(&interests, &aptitudes);

    if careers.is_empty() {
        println!("{BALANCED_PROFILE_MESSAGE}");
    } else {
        for career in &careers {
            println!("{career}");
        }
    }

    Ok(())
}

fn parse_codes<T>(
    list: &str,
    kind: &str,
    select: impl Fn(SubCategory) -> Option<T>,
) -> Result<Vec<T>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|code| {
            let sub: SubCategory = code
                .parse()
                .with_context(|| format!("invalid {kind} code '{code}'"))?;
            select(sub).with_context(|| format!("'{code}' is not an {kind} code"))
        })
        .collect()
}
