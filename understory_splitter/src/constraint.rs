// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Min/max constraint resolution for a pair of adjacent panels.
//!
//! Moving a boundary only ever trades size between the two panels that share
//! it. [`resolve_pair`] takes the pair's current sizes and a requested offset
//! and returns new sizes that keep the pair's total and honor both panels'
//! bounds, preferring the previous panel's bounds when both cannot hold.

use crate::{PanelProps, PanelSize};

/// Resolved percentage bounds of one panel within a boundary pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Smallest allowed size, in percent.
    pub min: f64,
    /// Largest allowed size, in percent.
    pub max: f64,
}

impl Bounds {
    /// Bounds that never constrain a pair totalling `pair_total`.
    #[must_use]
    pub const fn unconstrained(pair_total: f64) -> Self {
        Self {
            min: 0.0,
            max: pair_total,
        }
    }

    /// Resolves declared bounds against the container.
    ///
    /// An unset (or unresolvable) `min` becomes `0` and an unset `max` becomes
    /// `pair_total`, the combined size of the panel and its neighbor. Panels
    /// without explicit bounds therefore accept any split of the pair.
    #[must_use]
    pub fn resolve(
        min: Option<PanelSize>,
        max: Option<PanelSize>,
        pair_total: f64,
        container: f64,
    ) -> Self {
        Self {
            min: min.and_then(|m| m.resolve(container)).unwrap_or(0.0),
            max: max
                .and_then(|m| m.resolve(container))
                .unwrap_or(pair_total),
        }
    }

    /// Resolves the bounds declared on `props`.
    #[must_use]
    pub fn for_panel(props: &PanelProps, pair_total: f64, container: f64) -> Self {
        Self::resolve(props.min, props.max, pair_total, container)
    }

    /// Returns `true` if `value` lies within these bounds.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` into these bounds; `min` wins when the bounds are inverted.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        clamp_min_first(value, self.min, self.max)
    }
}

/// `value.clamp(lo, hi)` that tolerates `lo > hi` by letting `lo` win.
fn clamp_min_first(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

/// Moves the boundary between two adjacent panels by `raw_offset` percent.
///
/// A positive offset shrinks the previous panel and grows the next one. The
/// pair's total (`previous + next`) is conserved, both sizes stay within
/// their bounds whenever the bounds can hold together, and each size is kept
/// within `[0, previous + next]`.
///
/// Rather than clamping the previous panel first and deriving the next panel
/// from it, the tentative size is clamped into the range where *both* panels
/// are within bounds. This keeps the next panel's bounds too whenever that
/// range is non-empty.
///
/// When the bounds conflict (for example both minimums together exceed the
/// pair's total) the previous panel's bounds win. Only if that clamp changed
/// the previous size is the next panel recomputed and clamped to its own
/// bounds, which may change the pair's total. An unclamped move keeps the
/// total.
///
/// ```
/// use understory_splitter::{Bounds, resolve_pair};
///
/// let previous = Bounds { min: 20.0, max: 70.0 };
/// let next = Bounds::unconstrained(100.0);
/// assert_eq!(resolve_pair(50.0, 50.0, 40.0, previous, next), (20.0, 80.0));
/// ```
#[must_use]
pub fn resolve_pair(
    previous: f64,
    next: f64,
    raw_offset: f64,
    previous_bounds: Bounds,
    next_bounds: Bounds,
) -> (f64, f64) {
    debug_assert!(
        previous.is_finite() && next.is_finite() && raw_offset.is_finite(),
        "resolve_pair inputs must be finite; got {previous:?}, {next:?}, {raw_offset:?}"
    );
    let total = previous + next;
    let tentative = previous - raw_offset;

    // The range of previous sizes for which both panels are within bounds.
    let lo = previous_bounds.min.max(total - next_bounds.max);
    let hi = previous_bounds.max.min(total - next_bounds.min);

    let (new_previous, new_next) = if lo <= hi {
        let p = clamp_min_first(tentative, lo, hi);
        (p, total - p)
    } else {
        let p = previous_bounds.clamp(tentative);
        if p == tentative {
            (p, total - p)
        } else {
            (p, next_bounds.clamp(total - p))
        }
    };

    (
        clamp_min_first(new_previous, 0.0, total),
        clamp_min_first(new_next, 0.0, total),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        let d = a - b;
        d < EPSILON && d > -EPSILON
    }

    #[test]
    fn unconstrained_pair_moves_freely() {
        let b = Bounds::unconstrained(100.0);
        assert_eq!(resolve_pair(50.0, 50.0, 10.0, b, b), (40.0, 60.0));
        assert_eq!(resolve_pair(50.0, 50.0, -10.0, b, b), (60.0, 40.0));
    }

    #[test]
    fn previous_min_clamps_and_next_takes_the_rest() {
        let prev = Bounds {
            min: 20.0,
            max: 70.0,
        };
        let next = Bounds::unconstrained(100.0);
        assert_eq!(resolve_pair(50.0, 50.0, 40.0, prev, next), (20.0, 80.0));
    }

    #[test]
    fn previous_max_clamps() {
        let prev = Bounds {
            min: 20.0,
            max: 70.0,
        };
        let next = Bounds::unconstrained(100.0);
        assert_eq!(resolve_pair(50.0, 50.0, -40.0, prev, next), (70.0, 30.0));
    }

    #[test]
    fn next_bounds_hold_when_jointly_satisfiable() {
        let prev = Bounds::unconstrained(100.0);
        let next = Bounds {
            min: 40.0,
            max: 100.0,
        };
        let (p, n) = resolve_pair(50.0, 50.0, -30.0, prev, next);
        assert!(close(p, 60.0), "previous should stop at 60, got {p}");
        assert!(close(n, 40.0), "next should stop at its min, got {n}");
    }

    #[test]
    fn offset_never_pushes_past_pair_total() {
        let b = Bounds::unconstrained(60.0);
        assert_eq!(resolve_pair(30.0, 30.0, 500.0, b, b), (0.0, 60.0));
        assert_eq!(resolve_pair(30.0, 30.0, -500.0, b, b), (60.0, 0.0));
    }

    #[test]
    fn conflicting_minimums_favor_previous() {
        let prev = Bounds {
            min: 70.0,
            max: 100.0,
        };
        let next = Bounds {
            min: 50.0,
            max: 100.0,
        };
        let (p, n) = resolve_pair(50.0, 50.0, 0.0, prev, next);
        assert_eq!(p, 70.0);
        // The next panel keeps its minimum; conservation is given up.
        assert_eq!(n, 50.0);
    }

    #[test]
    fn unsatisfiable_next_bounds_keep_the_total_on_free_moves() {
        let prev = Bounds::unconstrained(50.0);
        // The next panel's minimum exceeds what the pair can hold.
        let next = Bounds {
            min: 60.0,
            max: 50.0,
        };
        assert_eq!(resolve_pair(25.0, 25.0, 0.0, prev, next), (25.0, 25.0));
        let (p, n) = resolve_pair(25.0, 25.0, -0.1, prev, next);
        assert!(close(p + n, 50.0), "pair total changed: {p} + {n}");
        assert!(close(p, 25.1), "previous should follow the pointer, got {p}");
    }

    #[test]
    fn inverted_bounds_prefer_min() {
        let prev = Bounds {
            min: 60.0,
            max: 40.0,
        };
        assert_eq!(prev.clamp(10.0), 60.0);
        assert_eq!(prev.clamp(90.0), 60.0);
    }

    #[test]
    fn resolve_defaults_to_pair_total() {
        let b = Bounds::resolve(None, None, 65.0, 800.0);
        assert_eq!(b, Bounds::unconstrained(65.0));

        let b = Bounds::resolve(
            Some(PanelSize::Pixels(80.0)),
            Some(PanelSize::Percent(50.0)),
            65.0,
            800.0,
        );
        assert_eq!(b, Bounds { min: 10.0, max: 50.0 });
        assert!(b.contains(10.0));
        assert!(!b.contains(50.5));
    }

    #[test]
    fn unmeasured_pixel_bounds_fall_back() {
        let b = Bounds::resolve(Some(PanelSize::Pixels(80.0)), None, 100.0, 0.0);
        assert_eq!(b, Bounds::unconstrained(100.0));
    }
}
