//! Pool Invariant Tests
//!
//! Properties that must hold for any sequence of updates and queries.

use crate::common::*;
use poolstat::{Command, PoolId};
use proptest::prelude::*;

#[test]
fn queries_do_not_change_stored_order() {
    let executor = create_executor();
    update(&executor, 1, &[3.0, 1.0, 2.0]);

    query_value(&executor, 1, 50.0);
    query_value(&executor, 1, 10.0);

    assert_eq!(
        executor.store().samples(PoolId::new(1)),
        Some(vec![3.0, 1.0, 2.0])
    );
}

#[test]
fn repeated_queries_are_identical() {
    let executor = create_executor();
    update(&executor, 1, &[0.3, 9.1, -2.0, 4.4]);

    let first = query_value(&executor, 1, 37.5);
    for _ in 0..10 {
        assert_eq!(query_value(&executor, 1, 37.5), first);
    }
}

#[test]
fn pools_are_independent() {
    let executor = create_executor();
    update(&executor, 1, &[1.0]);
    update(&executor, -1, &[100.0]);

    assert_eq!(query_value(&executor, 1, 50.0), 1.0);
    assert_eq!(query_value(&executor, -1, 50.0), 100.0);
}

proptest! {
    #[test]
    fn split_updates_equal_one_update(
        values in prop::collection::vec(-1e6f64..1e6, 1..60),
        split in 0usize..60,
        p in 1.0f64..99.0,
    ) {
        let split = split.min(values.len());

        let whole = create_executor();
        update(&whole, 1, &values);

        let parts = create_executor();
        update(&parts, 1, &values[..split]);
        update(&parts, 1, &values[split..]);

        prop_assert_eq!(query_value(&whole, 1, p), query_value(&parts, 1, p));
    }

    #[test]
    fn quantile_stays_within_bounds(
        values in prop::collection::vec(-1e6f64..1e6, 1..60),
        p in 0.001f64..99.999,
    ) {
        let executor = create_executor();
        update(&executor, 1, &values);

        let q = query_value(&executor, 1, p);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(q >= min && q <= max);
    }

    #[test]
    fn failed_query_has_no_side_effects(
        values in prop::collection::vec(-1e3f64..1e3, 0..20),
        p in prop_oneof![Just(0.0f64), Just(100.0f64), 100.0f64..1e3],
    ) {
        let executor = create_executor();
        update(&executor, 1, &values);

        let result = executor.execute(Command::PoolQuery {
            pool_id: PoolId::new(1),
            percentile: p,
        });
        prop_assert!(result.is_err());
        prop_assert_eq!(executor.store().samples(PoolId::new(1)), Some(values));
    }
}
