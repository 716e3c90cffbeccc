//! Filter predicate engine: clause-conjunction matching, stable ordering, and
//! the widened "did you mean" fallback used when the strict filter is empty.

use std::cmp::Reverse;

use crate::catalog::Catalog;
use crate::domain::criteria::{BudgetRange, FilterCriteria, SortKey};
use crate::domain::vehicle::Vehicle;

/// Minimum pad applied when widening an empty-result budget window.
pub const WIDEN_MIN_PAD: u32 = 500;
/// Hard ceiling on the widened upper bound.
pub const WIDEN_PRICE_CEILING: u32 = 55_000;
/// At most this many fallback suggestions are surfaced.
pub const FALLBACK_LIMIT: usize = 5;

/// True iff the record satisfies every active clause of the criteria.
pub fn matches(vehicle: &Vehicle, criteria: &FilterCriteria) -> bool {
    criteria.budget.contains(vehicle.price)
        && criteria.accepts_fuel(vehicle.fuel_type)
        && criteria.accepts_category(vehicle.category)
        && criteria.accepts_lifestyles(vehicle)
        && criteria.accepts_brand(&vehicle.brand)
}

/// Filtered, ordered view over the catalog. Sorting is stable, so records that
/// tie keep their catalog order and repeated calls are deterministic.
pub fn filter<'a>(
    catalog: &'a Catalog,
    criteria: &FilterCriteria,
    sort: SortKey,
) -> Vec<&'a Vehicle> {
    let mut matched: Vec<&Vehicle> = catalog
        .vehicles()
        .iter()
        .filter(|vehicle| matches(vehicle, criteria))
        .collect();
    match sort {
        SortKey::Popularity => matched.sort_by_key(|vehicle| Reverse(vehicle.popularity())),
        SortKey::Price => matched.sort_by_key(|vehicle| vehicle.price),
    }
    matched
}

/// Deterministic widening: pad both bounds by `max(500, ceil(upper / 10))`,
/// clamped to `[0, 55_000]`.
pub fn widen_budget(budget: BudgetRange) -> BudgetRange {
    let pad = WIDEN_MIN_PAD.max(budget.max.div_ceil(10));
    BudgetRange {
        min: budget.min.saturating_sub(pad),
        max: budget.max.saturating_add(pad).min(WIDEN_PRICE_CEILING),
    }
}

/// Up to five suggestions from the widened budget window. Category, fuel and
/// brand clauses are reapplied; the lifestyle clause is dropped. Intended for
/// the "did you mean" strip when [`filter`] came back empty.
pub fn fallback_suggestions<'a>(
    catalog: &'a Catalog,
    criteria: &FilterCriteria,
) -> Vec<&'a Vehicle> {
    let widened = widen_budget(criteria.budget);
    catalog
        .vehicles()
        .iter()
        .filter(|vehicle| {
            widened.contains(vehicle.price)
                && criteria.accepts_category(vehicle.category)
                && criteria.accepts_fuel(vehicle.fuel_type)
                && criteria.accepts_brand(&vehicle.brand)
        })
        .take(FALLBACK_LIMIT)
        .collect()
}
