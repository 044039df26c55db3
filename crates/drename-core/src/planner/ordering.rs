//! Execution order for planned units
//!
//! Deepest units run first so that renaming a directory never invalidates
//! the path of a unit that has not been visited yet. Among units at the
//! same depth, the key `name_len * (new_parts - old_parts)` runs descending
//! so that lengthening renames go before shortening ones.

use std::cmp::Reverse;

use super::PlannedUnit;

/// Sort key for one unit; larger keys run first
#[must_use]
#[allow(clippy::cast_possible_wrap)]
fn execution_key(unit: &PlannedUnit, part_difference: isize) -> (usize, isize) {
    let name_len = unit.name().chars().count() as isize;
    (unit.depth, name_len * part_difference)
}

/// Stable sort of `units` into execution order
pub fn sort_for_execution(units: &mut [PlannedUnit], part_difference: isize) {
    units.sort_by_key(|unit| Reverse(execution_key(unit, part_difference)));
}
