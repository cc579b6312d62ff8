use crate::driver::RunRecord;
use knap_challenges::knapsack::{Challenge, Solution};
use knap_structs::{config::SuiteConfig, core::Outcome};
use std::io::{Result, Write};

pub const SEPARATOR: &str = "------------------------";
/// Selected items listed in a summary block.
pub const PREVIEW_ITEMS: usize = 3;

pub fn write_suite_header<W: Write + ?Sized>(out: &mut W, suite: &SuiteConfig) -> Result<()> {
    let name = if suite.name.is_empty() {
        &suite.algorithm_id
    } else {
        &suite.name
    };
    writeln!(out, "=== {} ({}) ===", name, suite.algorithm_id)
}

pub fn write_run<W: Write + ?Sized>(
    out: &mut W,
    record: &RunRecord,
    challenge: &Challenge,
) -> Result<()> {
    writeln!(out, "algorithm: {}", record.algorithm_id)?;
    writeln!(
        out,
        "items: {}, capacity: {}",
        record.num_items, record.capacity
    )?;
    match &record.outcome {
        Outcome::Solved { solution } => {
            writeln!(out, "max value: {:.2}", solution.value)?;
            writeln!(out, "total weight: {}", solution.total_weight)?;
            writeln!(out, "elapsed: {:.3} ms", record.elapsed_ms)?;
            let positions: Vec<usize> = solution.selection.positions().collect();
            writeln!(out, "selected items: {}", positions.len())?;
            for &i in positions.iter().take(PREVIEW_ITEMS) {
                let item = &challenge.items()[i];
                writeln!(
                    out,
                    "  id {}: weight {}, value {:.2}",
                    item.id(),
                    item.weight(),
                    item.value()
                )?;
            }
            if positions.len() > PREVIEW_ITEMS {
                writeln!(out, "  ...")?;
            }
        }
        Outcome::ValueOnly { value } => {
            writeln!(out, "max value: {:.2}", value)?;
            writeln!(out, "elapsed: {:.3} ms", record.elapsed_ms)?;
            writeln!(out, "selection not reconstructed")?;
        }
        Outcome::Skipped { reason } => {
            writeln!(out, "skipped: {}", reason)?;
        }
    }
    writeln!(out, "{}", SEPARATOR)
}

/// Totals of the selection followed by a tab separated per-item table, one row
/// per item in input order.
pub fn write_detail<W: Write + ?Sized>(
    out: &mut W,
    record: &RunRecord,
    challenge: &Challenge,
    solution: &Solution,
) -> Result<()> {
    writeln!(
        out,
        "# {} n={} capacity={}",
        record.algorithm_id, record.num_items, record.capacity
    )?;
    writeln!(out, "selected weight = {}", solution.total_weight)?;
    writeln!(out, "selected value = {:.2}", solution.value)?;
    writeln!(
        out,
        "unselected items = {}",
        challenge.num_items() - solution.selection.num_selected()
    )?;
    writeln!(out, "id\tweight\tvalue\tstatus")?;
    for (i, item) in challenge.items().iter().enumerate() {
        writeln!(
            out,
            "{}\t{}\t{:.2}\t{}",
            item.id(),
            item.weight(),
            item.value(),
            solution.selection.is_selected(i) as u8
        )?;
    }
    writeln!(out, "{}", SEPARATOR)
}
