//! Tier 4: Concurrent access
//!
//! Stores are shared by reference across threads; every call is
//! serialised on the collection's lock.

use crate::test_utils::*;
use std::collections::HashSet;
use std::thread;

#[test]
fn concurrent_adds_get_distinct_ids() {
    let tc = TestCatalog::new();
    let catalog = &tc.catalog;

    let added: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|t| {
                s.spawn(move || {
                    (0..10)
                        .map(|i| {
                            catalog
                                .driver_groups()
                                .add(group(&format!("g{}-{}", t, i), vec![driver("", "lan")]))
                                .unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
    });

    let unique: HashSet<&String> = added.iter().collect();
    assert_eq!(unique.len(), 80);

    let groups = catalog.driver_groups().all().unwrap();
    assert_eq!(groups.len(), 80);
    let driver_ids: HashSet<String> = groups.iter().flat_map(|g| g.driver_ids()).collect();
    assert_eq!(driver_ids.len(), 80);
}

#[test]
fn concurrent_removes_and_reads_stay_consistent() {
    let tc = TestCatalog::new();
    let catalog = &tc.catalog;

    let groups: Vec<String> = (0..20)
        .map(|i| catalog.driver_groups().add(group(&format!("g{}", i), vec![])).unwrap())
        .collect();
    let refs: Vec<&str> = groups.iter().map(String::as_str).collect();
    let rs = catalog.match_rules().add(rule_set("all", &refs)).unwrap();

    thread::scope(|s| {
        for chunk in groups.chunks(5) {
            s.spawn(move || {
                for id in chunk {
                    catalog.driver_groups().remove(id).unwrap();
                }
            });
        }
        s.spawn(|| {
            for _ in 0..20 {
                catalog.match_rules().all().unwrap();
            }
        });
    });

    assert!(catalog.driver_groups().all().unwrap().is_empty());
    assert!(catalog.match_rules().get(&rs).unwrap().driver_group_ids.is_empty());
}
