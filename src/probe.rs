//! One probe run: enumerate, filter, stat, evaluate, aggregate.

use tracing::debug;

use crate::collectors::{mounts, statfs};
use crate::config::CheckConfig;
use crate::error::Result;
use crate::evaluate;
use crate::report::{self, Report};

/// Run the full pipeline once, sequentially.
///
/// Any enumeration or stat failure aborts the run: a partial report could
/// show a green aggregate while a sick mount went unmeasured.
pub fn run(config: &CheckConfig) -> Result<Report> {
    let entries = mounts::list_mounts(&config.mtab_path)?;
    let selected: Vec<_> = entries
        .iter()
        .filter(|e| config.filter.should_evaluate(e))
        .collect();
    debug!("{} of {} mounts selected", selected.len(), entries.len());

    let mut evaluated = Vec::with_capacity(selected.len());
    for entry in selected {
        let stats = statfs::stat_mount(entry)?;
        evaluated.push(evaluate::evaluate(stats, &config.thresholds));
    }

    Ok(report::aggregate(evaluated))
}
