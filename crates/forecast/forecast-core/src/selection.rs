//! Submodel selection by position, name pattern and information criterion

use std::collections::BTreeSet;

use forecast_spi::{FittedSubmodel, ForecastError, Result, SubmodelFilter};
use regex::RegexSet;
use tracing::debug;

/// Pick the submodels described by `filter`, preserving a deterministic order.
///
/// Positional picks come first in stored order, then name matches not already
/// picked. With no picks every submodel is a candidate. A criterion ranks the
/// candidates (missing values last, ties keep their order) and `limit`, which
/// defaults to 1, truncates the ranking.
pub fn select_submodels<'a>(
    submodels: &'a [FittedSubmodel],
    filter: &SubmodelFilter,
) -> Result<Vec<&'a FittedSubmodel>> {
    let wanted: BTreeSet<usize> = filter.indices.iter().copied().collect();
    let mut picked: Vec<usize> = (0..submodels.len())
        .filter(|index| wanted.contains(index))
        .collect();

    if !filter.names.is_empty() {
        let patterns = RegexSet::new(&filter.names)
            .map_err(|e| ForecastError::invalid_argument("names", e.to_string()))?;
        for (index, submodel) in submodels.iter().enumerate() {
            if !picked.contains(&index) && patterns.is_match(&submodel.label()) {
                picked.push(index);
            }
        }
    }

    if picked.is_empty() {
        picked = (0..submodels.len()).collect();
    }

    let mut candidates: Vec<&FittedSubmodel> = picked.iter().map(|&i| &submodels[i]).collect();

    if let Some(criterion) = filter.criterion {
        let rank = |submodel: &FittedSubmodel| criterion.value_of(submodel).unwrap_or(f64::INFINITY);
        candidates.sort_by(|a, b| rank(*a).total_cmp(&rank(*b)));
        candidates.truncate(filter.limit.unwrap_or(1));
    }

    debug!(
        available = submodels.len(),
        selected = candidates.len(),
        "selected submodels"
    );
    Ok(candidates)
}
