use anyhow::{Context, Result};
use std::path::Path;

use crate::models::VisitSet;

/// Read a visit file. `.json` holds an array of date strings; anything
/// else is one date per line with `#` comments. A missing file is an
/// empty history.
pub fn load_visits(path: &Path) -> Result<VisitSet> {
    if !path.exists() {
        log::info!("No visit file at {:?}, starting with an empty history", path);
        return Ok(VisitSet::new());
    }

    let content =
        std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let visits = if is_json {
        let dates: Vec<String> = serde_json::from_str(&content)
            .with_context(|| format!("Parsing {:?} as a JSON array of dates", path))?;
        VisitSet::from_strings(dates)
    } else {
        VisitSet::from_strings(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    };

    log::debug!("Loaded {} visits from {:?}", visits.len(), path);
    Ok(visits)
}
