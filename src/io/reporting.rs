// src/io/reporting.rs

use crate::error::Result;
use crate::model::queues::Discipline;
use crate::scenario::traits::ScenarioOutcome;
use crate::simulation::engine::DispatchRecord;
use std::fmt::Write;
use std::path::Path;
use tracing::info;

const RULE_WIDTH: usize = 60;

fn banner(out: &mut String, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    let _ = writeln!(out, "\n{}\n{}\n{}", rule, title, rule);
}

/// Renders the narrative for one finished scenario.
pub fn render_outcome(index: usize, outcome: &ScenarioOutcome) -> String {
    let mut out = String::new();
    banner(
        &mut out,
        &format!("SCENARIO {}: {}", index, outcome.name.to_uppercase()),
    );

    for discipline in [Discipline::Fifo, Discipline::Lifo] {
        let _ = writeln!(out, "\nDispatched with {}:", discipline);
        let dispatched = outcome.dispatched(discipline);
        if dispatched.is_empty() {
            let _ = writeln!(out, "  (nothing to dispatch)");
        }
        for package in dispatched {
            let _ = writeln!(out, "  {}", package);
        }
    }

    if let Some(scanned_at) = outcome.scanned_at {
        let _ = writeln!(
            out,
            "\nExpiry check on LIFO stock as of {}:",
            scanned_at.format("%Y-%m-%d")
        );
        for package in &outcome.expired {
            let _ = writeln!(out, "  ALERT: expired package found in LIFO: {}", package);
        }
        let _ = writeln!(out, "  Expired packages found in LIFO: {}", outcome.expired.len());
    }

    let status = &outcome.status;
    let _ = writeln!(out, "\n=== Warehouse status: {} ===", outcome.name);
    let _ = writeln!(out, "Packages in FIFO: {}", status.fifo_count);
    let _ = writeln!(out, "Packages in LIFO: {}", status.lifo_count);
    let _ = writeln!(out, "Dispatched FIFO: {}", status.fifo_dispatched_count);
    let _ = writeln!(out, "Dispatched LIFO: {}", status.lifo_dispatched_count);

    let rec = &outcome.recommendation;
    let _ = writeln!(out, "\n--- ANALYSIS ---");
    for line in &rec.advantages {
        let _ = writeln!(out, "+ {}", line);
    }
    for line in &rec.drawbacks {
        let _ = writeln!(out, "- {}", line);
    }
    let _ = writeln!(
        out,
        "\nRecommendation: use {} for {}",
        rec.discipline, outcome.profile
    );

    out
}

/// Renders the closing summary across all scenarios.
pub fn render_conclusions(outcomes: &[ScenarioOutcome]) -> String {
    let mut out = String::new();
    banner(&mut out, "FINAL CONCLUSIONS");

    for (i, outcome) in outcomes.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {}: use {}",
            i + 1,
            outcome.profile.to_string().to_uppercase(),
            outcome.recommendation.discipline
        );
    }
    let _ = writeln!(
        out,
        "\nRunning FIFO and LIFO side by side lets each product type \
         leave the warehouse in the order that suits it."
    );
    out
}

/// Exports dispatch records as CSV, one row per package that left a structure.
///
/// The header row is always written, so a run without dispatches still
/// yields a valid file with just the column names.
pub fn write_dispatch_log(file_path: impl AsRef<Path>, data: &[DispatchRecord]) -> Result<()> {
    let path = file_path.as_ref();
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(DispatchRecord::HEADERS)?;
    for record in data {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    info!(rows = data.len(), path = %path.display(), "dispatch log exported");
    Ok(())
}
