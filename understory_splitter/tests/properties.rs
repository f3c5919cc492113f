// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for size derivation and constraint resolution.

use kurbo::Point;
use proptest::prelude::*;
use understory_splitter::{
    Bounds, PanelProps, PanelSize, Splitter, SplitterConfig, initial_sizes, resolve_pair,
};

const EPSILON: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// A pair of adjacent sizes whose total stays within 100%.
fn pair() -> impl Strategy<Value = (f64, f64)> {
    (1.0..=100.0_f64).prop_flat_map(|total| (0.0..=total).prop_map(move |p| (p, total - p)))
}

/// A pair with bounds that admit at least one split of its total.
fn bounded_pair() -> impl Strategy<Value = ((f64, f64), Bounds, Bounds)> {
    pair().prop_flat_map(|(previous, next)| {
        let total = previous + next;
        (0.0..=total).prop_flat_map(move |feasible| {
            let rest = total - feasible;
            (
                Just((previous, next)),
                (0.0..=feasible, feasible..=total)
                    .prop_map(|(min, max)| Bounds { min, max }),
                (0.0..=rest, rest..=total).prop_map(|(min, max)| Bounds { min, max }),
            )
        })
    })
}

/// A pair whose next panel declares a minimum the pair cannot hold, with an
/// offset that keeps the previous panel inside `[0, total]`.
fn oversized_next_min() -> impl Strategy<Value = ((f64, f64), Bounds, f64)> {
    pair().prop_flat_map(|(previous, next)| {
        let total = previous + next;
        (
            Just((previous, next)),
            (total + 0.001..=total + 100.0, 0.0..=total).prop_map(|(min, max)| Bounds { min, max }),
            (-next..=previous),
        )
    })
}

/// Panels with optional percentage sizes that never exceed 100% together.
fn panels(max: usize) -> impl Strategy<Value = Vec<PanelProps>> {
    prop::collection::vec(
        prop::option::of(0.0..20.0_f64).prop_map(|size| PanelProps {
            size: size.map(PanelSize::Percent),
            ..PanelProps::default()
        }),
        1..max,
    )
}

proptest! {
    #[test]
    fn unconstrained_moves_conserve_the_pair((previous, next) in pair(), offset in -250.0..250.0_f64) {
        let total = previous + next;
        let b = Bounds::unconstrained(total);
        let (p, n) = resolve_pair(previous, next, offset, b, b);
        prop_assert!(close(p + n, total), "{p} + {n} != {total}");
        prop_assert!(p >= 0.0 && n >= 0.0);
    }

    #[test]
    fn satisfiable_bounds_hold(
        ((previous, next), pb, nb) in bounded_pair(),
        offset in -250.0..250.0_f64,
    ) {
        let total = previous + next;
        let (p, n) = resolve_pair(previous, next, offset, pb, nb);
        prop_assert!(close(p + n, total));
        prop_assert!(p >= pb.min - EPSILON && p <= pb.max + EPSILON, "{p} outside {pb:?}");
        prop_assert!(n >= nb.min - EPSILON && n <= nb.max + EPSILON, "{n} outside {nb:?}");
    }

    #[test]
    fn unsatisfiable_next_bounds_do_not_grow_the_pair(
        ((previous, next), nb, offset) in oversized_next_min(),
    ) {
        let total = previous + next;
        let (p, n) = resolve_pair(previous, next, offset, Bounds::unconstrained(total), nb);
        prop_assert!(close(p + n, total), "{p} + {n} != {total}");
        prop_assert!(close(p, previous - offset));
    }

    #[test]
    fn derivation_is_idempotent(panels in panels(8), container in 0.0..2000.0_f64) {
        prop_assert_eq!(initial_sizes(&panels, container), initial_sizes(&panels, container));
    }

    #[test]
    fn unsized_panels_fill_the_container(count in 1_usize..16) {
        let sizes = initial_sizes(&vec![PanelProps::default(); count], 800.0);
        prop_assert_eq!(sizes.len(), count);
        prop_assert!(close(sizes.iter().sum::<f64>(), 100.0));
    }

    #[test]
    fn partially_sized_panels_fill_the_container(mut panels in panels(6)) {
        panels.push(PanelProps::default());
        let sizes = initial_sizes(&panels, 800.0);
        prop_assert!(close(sizes.iter().sum::<f64>(), 100.0));
    }

    #[test]
    fn drags_never_change_the_total(
        count in 2_usize..6,
        bar_seed in any::<usize>(),
        moves in prop::collection::vec(-500.0..500.0_f64, 1..12),
        lazy in any::<bool>(),
    ) {
        let config = SplitterConfig::default().with_lazy(lazy);
        let mut splitter = Splitter::new(config, vec![PanelProps::default(); count]);
        splitter.set_container_size(1000.0);
        let before: f64 = splitter.sizes().iter().sum();
        let bar = bar_seed % (count - 1);

        prop_assert!(splitter.pointer_down(bar, Point::new(500.0, 0.0)));
        for dx in moves {
            splitter.pointer_move(Point::new(500.0 + dx, 0.0));
            let during: f64 = splitter.sizes().iter().sum();
            prop_assert!(close(during, before));
        }
        splitter.pointer_up();
        let after: f64 = splitter.sizes().iter().sum();
        prop_assert!(close(after, before));
    }

    #[test]
    fn lazy_commit_applies_the_last_preview(
        moves in prop::collection::vec(0.0..1000.0_f64, 1..8),
        min in 0.0..50.0_f64,
    ) {
        let panels = vec![
            PanelProps::default().with_min(PanelSize::Percent(min)),
            PanelProps::default(),
            PanelProps::default(),
        ];
        let config = SplitterConfig::default().with_lazy(true);
        let mut splitter = Splitter::new(config, panels);
        splitter.set_container_size(1004.0);
        let before = splitter.sizes().to_vec();

        prop_assert!(splitter.pointer_down(0, Point::new(333.0, 0.0)));
        let mut preview = None;
        for x in moves {
            splitter.pointer_move(Point::new(x, 0.0));
            prop_assert_eq!(splitter.sizes(), before.as_slice());
            preview = splitter.preview_sizes();
        }
        splitter.pointer_up();
        prop_assert_eq!(Some(splitter.sizes().to_vec()), preview);
    }
}
