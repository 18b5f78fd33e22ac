//! One-shot search over the built-in record set.

use anyhow::Result;

use vigil_core::search::{builtin_records, grouped_results};

/// Prints grouped matches for a query.
pub fn run(query: &str) -> Result<()> {
    let groups = grouped_results(query, builtin_records());
    if groups.is_empty() {
        println!("No records match '{query}'.");
        return Ok(());
    }

    for group in &groups {
        println!("{}", group.group.label());
        for record in &group.records {
            let mut extras = Vec::new();
            if let Some(status) = &record.status {
                extras.push(status.clone());
            }
            if let Some(severity) = &record.severity {
                extras.push(severity.clone());
            }
            if let Some(score) = record.score {
                extras.push(format!("score {score}"));
            }
            let suffix = if extras.is_empty() {
                String::new()
            } else {
                format!(" ({})", extras.join(", "))
            };
            println!("  {} - {}{}", record.title, record.path, suffix);
        }
        println!();
    }
    Ok(())
}
