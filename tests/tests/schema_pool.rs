use tests::*;

use pretty_assertions::assert_eq;
use rowbind::{scan, PoolConfig, Record, Schema};

use std::panic::{self, AssertUnwindSafe};

#[derive(Debug, Default, PartialEq, Record)]
struct Item {
    pub id: u64,
    pub name: String,
}

fn items(max_idle: usize) -> Schema<Item> {
    Schema::builder()
        .scanner(scan::uint().to("id"))
        .scanners([scan::string().trim_space().to("name")])
        .max_idle_runners(max_idle)
        .build()
        .unwrap()
}

#[test]
fn default_pool_config() {
    assert!(PoolConfig::default().max_idle >= 2);
    assert_eq!(PoolConfig::new().max_idle, PoolConfig::default().max_idle);
}

#[test]
fn runners_return_to_the_pool() {
    let schema = items(4);
    assert_eq!(schema.pool_config().max_idle, 4);
    assert_eq!(schema.idle_runners(), 0);

    {
        let mut a = schema.get();
        let mut b = schema.get();
        assert_eq!(a.columns(), 2);

        let read = a.all(&mut MockRows::new([row![1u64, " a "]])).unwrap();
        assert_eq!(read[0].name, "a");
        let read = b.one(&mut MockRows::new([row![2u64, "b"]])).unwrap();
        assert_eq!(read.id, 2);
    }
    assert_eq!(schema.idle_runners(), 2);

    schema.all(&mut MockRows::new([row![3u64, "c"]])).unwrap();
    assert_eq!(schema.idle_runners(), 2);
}

#[test]
fn idle_runners_are_capped() {
    let schema = items(1);
    {
        let _a = schema.get();
        let _b = schema.get();
    }
    assert_eq!(schema.idle_runners(), 1);

    let schema = items(0);
    schema.all(&mut MockRows::new([row![1u64, "a"]])).unwrap();
    assert_eq!(schema.idle_runners(), 0);
}

#[test]
fn runner_returned_on_panic() {
    let schema = items(2);

    let res = panic::catch_unwind(AssertUnwindSafe(|| {
        let _runner = schema.get();
        panic!("reader failed");
    }));

    assert!(res.is_err());
    assert_eq!(schema.idle_runners(), 1);
}

#[test]
fn shared_between_threads() {
    init_tracing();

    let schema = items(8);

    std::thread::scope(|s| {
        for t in 0..4u64 {
            let schema = &schema;
            s.spawn(move || {
                for round in 0..10u64 {
                    let id = t * 100 + round;
                    let mut rows = MockRows::new([row![id, format!("item-{}", id)], row![id + 1, "next"]]);
                    let read = schema.all(&mut rows).unwrap();

                    assert_eq!(
                        read,
                        vec![
                            Item {
                                id,
                                name: format!("item-{}", id),
                            },
                            Item {
                                id: id + 1,
                                name: "next".to_string(),
                            },
                        ]
                    );
                }
            });
        }
    });

    assert!(schema.idle_runners() <= 4);
}

#[test]
fn build_errors_surface_from_builder() {
    let err = Schema::<Item>::builder()
        .scanner(scan::string().to("id"))
        .build()
        .unwrap_err();

    assert!(err.is_type_incompatible());
}
