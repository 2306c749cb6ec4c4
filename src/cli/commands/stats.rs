use crate::core::stats::StatsLogic;
use crate::dataset;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `stats` command
pub fn handle(input: &Path) -> AppResult<()> {
    let event = dataset::load(input)?;
    StatsLogic::print(&event);
    Ok(())
}
