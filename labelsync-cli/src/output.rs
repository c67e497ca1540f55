//! Human-readable plan and result rendering.

use std::io::{self, Write};

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use labelsync_core::{ChangeAction, ChangeRecord, ChangeResult, Outcome, Plan};

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "repository")]
    repository: String,
    #[tabled(rename = "action")]
    action: String,
    #[tabled(rename = "label")]
    label: String,
    #[tabled(rename = "detail")]
    detail: String,
}

fn row_for(change: &ChangeRecord) -> PlanRow {
    let repository = change.repository.to_string();
    match &change.action {
        ChangeAction::Create { label } => PlanRow {
            repository,
            action: "create".to_owned(),
            label: label.name.clone(),
            detail: format!("#{}", label.color),
        },
        ChangeAction::Update {
            previous_name: Some(old),
            label,
        } => PlanRow {
            repository,
            action: "rename".to_owned(),
            label: label.name.clone(),
            detail: format!("from '{old}', #{}", label.color),
        },
        ChangeAction::Update {
            previous_name: None,
            label,
        } => PlanRow {
            repository,
            action: "update".to_owned(),
            label: label.name.clone(),
            detail: format!("#{}", label.color),
        },
        ChangeAction::Delete { name } => PlanRow {
            repository,
            action: "delete".to_owned(),
            label: name.clone(),
            detail: String::new(),
        },
    }
}

/// Print the change table plus any reportable skips.
pub fn print_plan(plan: &Plan) {
    if plan.is_empty() {
        println!("Nothing to do — labels already in sync.");
        return;
    }

    if !plan.changes.is_empty() {
        let mut table = Table::new(plan.changes.iter().map(row_for));
        table.with(Style::rounded());
        println!("{table}");
    }

    for skip in &plan.skips {
        println!(
            "{} skipped '{}' on {}: {}",
            "!".yellow(),
            skip.name,
            skip.repository,
            skip.reason
        );
    }
}

/// Print per-change outcomes and a summary; returns the failure count.
pub fn print_results(results: &[ChangeResult]) -> usize {
    let mut failed = 0;
    for result in results {
        match &result.outcome {
            Outcome::Succeeded => println!("{} {}", "✓".green(), result.record),
            Outcome::Failed { message, .. } => {
                failed += 1;
                println!("{} {}: {}", "✗".red(), result.record, message);
            }
        }
    }
    println!(
        "{} applied, {} failed",
        results.len() - failed,
        failed
    );
    failed
}

/// Ask for confirmation on stdin. Anything but `y`/`yes` declines.
pub fn confirm(count: usize) -> io::Result<bool> {
    print!("Apply {count} change(s)? [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
