//! Poolstat Facade Tests
//!
//! Typed methods on `Poolstat` and its builder.

use std::io::Write;

use poolstat::prelude::*;

#[test]
fn update_then_query() {
    let db = Poolstat::new();

    assert_eq!(db.update(1, vec![1.0, 2.0]).unwrap(), UpsertOutcome::Inserted);
    assert_eq!(db.update(1, vec![3.0, 4.0]).unwrap(), UpsertOutcome::Appended);

    let q = db.query(1, 25.0).unwrap();
    assert_eq!(q.value, 1.75);
    assert_eq!(q.total_count, 4);
    assert_eq!(db.len(1).unwrap(), Some(4));
}

#[test]
fn errors_convert_to_facade_error() {
    let db = Poolstat::new();

    assert!(db.query(5, 50.0).unwrap_err().is_not_found());

    db.update(6, vec![]).unwrap();
    assert!(matches!(
        db.query(6, 50.0).unwrap_err(),
        Error::EmptyPool { .. }
    ));

    assert!(matches!(
        db.query(6, 100.0).unwrap_err(),
        Error::InvalidArgument(_)
    ));
}

#[test]
fn clones_share_pools() {
    let db = Poolstat::new();
    let other = db.clone();

    db.update(1, vec![2.0]).unwrap();
    assert_eq!(other.len(1).unwrap(), Some(1));
}

#[test]
fn builder_applies_limit() {
    let db = Poolstat::builder().max_pool_size(2).open().unwrap();

    db.update(1, vec![1.0, 2.0]).unwrap();
    let err = db.update(1, vec![3.0]).unwrap_err();
    assert!(matches!(err, Error::CapacityExceeded { limit: 2, .. }));
    assert_eq!(db.info().unwrap().max_pool_size, Some(2));
}

#[test]
fn builder_reads_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_pool_size = 7").unwrap();

    let db = Poolstat::builder()
        .config_file(file.path())
        .unwrap()
        .open()
        .unwrap();
    assert_eq!(db.store().config().max_pool_size, Some(7));
}

#[test]
fn builder_rejects_bad_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_pool_size = \"lots\"").unwrap();

    let err = Poolstat::builder().config_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn ping_and_info() {
    let db = Poolstat::new();
    assert!(!db.ping().unwrap().is_empty());

    db.update(3, vec![1.0, 2.0, 3.0]).unwrap();
    let info = db.info().unwrap();
    assert_eq!(info.pool_count, 1);
    assert_eq!(info.total_samples, 3);
}
