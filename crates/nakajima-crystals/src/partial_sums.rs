//! Partial sums `sum_{j <= k} y_i(j)` along one row of a Y-monomial.
//!
//! Levels are scanned in ascending order. Missing levels in `[0, K)`, with
//! `K` the highest stored level of the row, count as exponent zero; stored
//! negative levels are scanned before level zero.

use nakajima_integers::Integer;
use num_traits::Zero;

use crate::exponents::{ExponentMap, Level};

/// Maximum of the partial sums of one row and where it is attained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PartialSums {
    /// `phi_i`: the largest partial sum over nonempty prefixes.
    pub phi: Integer,
    /// `k_f`: smallest level attaining `phi`.
    pub first_max: Level,
    /// `k_e`: largest level attaining `phi`.
    pub last_max: Level,
}

/// Scans row `index` of `exponents`; `None` if the row is empty.
///
/// Only stored levels are visited. A run of missing levels repeats the
/// running sum, so it is folded in as one step covering the whole run.
pub(crate) fn scan(exponents: &ExponentMap, index: usize) -> Option<PartialSums> {
    let row = exponents.row(index);
    if row.is_empty() {
        return None;
    }

    let mut running = Integer::zero();
    let mut best: Option<PartialSums> = None;
    // first level in [0, K) not yet covered
    let mut cursor: Level = 0;
    for (level, y) in row {
        if level > cursor {
            visit(&mut best, &running, cursor, level - 1);
        }
        running += &y;
        visit(&mut best, &running, level, level);
        cursor = cursor.max(level.saturating_add(1));
    }
    best
}

// Records that every prefix ending in `first..=last` sums to `value`.
fn visit(best: &mut Option<PartialSums>, value: &Integer, first: Level, last: Level) {
    match best {
        Some(b) if *value < b.phi => {}
        Some(b) if *value == b.phi => b.last_max = last,
        _ => {
            *best = Some(PartialSums {
                phi: value.clone(),
                first_max: first,
                last_max: last,
            });
        }
    }
}
