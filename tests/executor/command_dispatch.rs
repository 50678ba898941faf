//! Command Dispatch Tests
//!
//! Tests that the Executor correctly dispatches all Command variants
//! and returns the appropriate Output types.

use crate::common::*;
use poolstat::{Command, Output, PoolId, UpsertOutcome};
use poolstat_executor::Error;

// ============================================================================
// Store Commands
// ============================================================================

#[test]
fn ping_returns_version_string() {
    let executor = create_executor();

    match executor.execute(Command::Ping).unwrap() {
        Output::Pong { version } => assert!(!version.is_empty()),
        other => panic!("Expected Pong output, got {:?}", other),
    }
}

#[test]
fn info_counts_pools_and_samples() {
    let executor = create_bounded_executor(50);
    update(&executor, 1, &[1.0, 2.0]);
    update(&executor, 2, &[3.0]);

    match executor.execute(Command::Info).unwrap() {
        Output::Info(info) => {
            assert_eq!(info.pool_count, 2);
            assert_eq!(info.total_samples, 3);
            assert_eq!(info.max_pool_size, Some(50));
        }
        other => panic!("Expected Info output, got {:?}", other),
    }
}

// ============================================================================
// Pool Commands
// ============================================================================

#[test]
fn pool_update_reports_inserted_then_appended() {
    let executor = create_executor();

    assert_eq!(
        update(&executor, 1, &[1.0, 2.0]),
        Output::Upserted(UpsertOutcome::Inserted)
    );
    assert_eq!(
        update(&executor, 1, &[3.0, 4.0]),
        Output::Upserted(UpsertOutcome::Appended)
    );
}

#[test]
fn pool_query_returns_value_and_count() {
    let executor = create_executor();
    update(&executor, 1, &[1.0, 2.0]);
    update(&executor, 1, &[3.0, 4.0]);

    let output = executor
        .execute(Command::PoolQuery {
            pool_id: PoolId::new(1),
            percentile: 25.0,
        })
        .unwrap();

    match output {
        Output::Quantile(q) => {
            assert_eq!(q.value, 1.75);
            assert_eq!(q.total_count, 4);
        }
        other => panic!("Expected Quantile output, got {:?}", other),
    }
}

#[test]
fn pool_len_known_and_unknown() {
    let executor = create_executor();
    update(&executor, 4, &[9.0, 9.0, 9.0]);

    assert_eq!(
        executor
            .execute(Command::PoolLen {
                pool_id: PoolId::new(4)
            })
            .unwrap(),
        Output::Count(Some(3))
    );
    assert_eq!(
        executor
            .execute(Command::PoolLen {
                pool_id: PoolId::new(5)
            })
            .unwrap(),
        Output::Count(None)
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn query_unknown_pool_is_not_found() {
    let executor = create_executor();

    let err = executor
        .execute(Command::PoolQuery {
            pool_id: PoolId::new(99),
            percentile: 50.0,
        })
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.code(), "NotFound");
}

#[test]
fn query_empty_pool_is_empty_pool() {
    let executor = create_executor();
    update(&executor, 2, &[]);

    let err = executor
        .execute(Command::PoolQuery {
            pool_id: PoolId::new(2),
            percentile: 50.0,
        })
        .unwrap_err();

    assert!(matches!(err, Error::EmptyPool { .. }));
}

#[test]
fn invalid_percentile_wins_over_unknown_pool() {
    let executor = create_executor();

    for percentile in [0.0, 100.0, f64::NAN, -1.0, 101.0] {
        let err = executor
            .execute(Command::PoolQuery {
                pool_id: PoolId::new(99),
                percentile,
            })
            .unwrap_err();
        assert_eq!(err.code(), "InvalidArgument", "percentile {}", percentile);
    }
}

#[test]
fn non_finite_samples_are_rejected() {
    let executor = create_executor();

    let err = executor
        .execute(Command::PoolUpdate {
            pool_id: PoolId::new(1),
            values: vec![1.0, f64::INFINITY],
        })
        .unwrap_err();

    assert_eq!(err.code(), "InvalidArgument");
    assert!(!executor.store().contains(PoolId::new(1)));
}

#[test]
fn capacity_exceeded_leaves_pool_untouched() {
    let executor = create_bounded_executor(3);
    update(&executor, 1, &[1.0, 2.0]);

    let err = executor
        .execute(Command::PoolUpdate {
            pool_id: PoolId::new(1),
            values: vec![3.0, 4.0],
        })
        .unwrap_err();

    assert!(matches!(
        err,
        Error::CapacityExceeded {
            limit: 3,
            requested: 4,
            ..
        }
    ));
    assert_eq!(executor.store().len(PoolId::new(1)), Some(2));
}

#[test]
fn execute_many_keeps_going_after_failure() {
    let executor = create_executor();

    let results = executor.execute_many(vec![
        Command::PoolQuery {
            pool_id: PoolId::new(1),
            percentile: 50.0,
        },
        Command::PoolUpdate {
            pool_id: PoolId::new(1),
            values: vec![8.0],
        },
        Command::PoolQuery {
            pool_id: PoolId::new(1),
            percentile: 50.0,
        },
    ]);

    assert_eq!(results.len(), 3);
    assert!(results[0].is_err());
    assert!(results[1].is_ok());
    assert!(matches!(&results[2], Ok(Output::Quantile(q)) if q.value == 8.0));
}
