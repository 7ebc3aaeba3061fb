//! Tier 2: Reordering

use crate::test_utils::*;
use installit_store::Error;

fn three_groups(tc: &TestCatalog) -> Vec<String> {
    ["A", "B", "C"]
        .iter()
        .map(|name| tc.catalog.driver_groups().add(group(name, vec![])).unwrap())
        .collect()
}

#[test]
fn move_first_behind_second_goes_last() {
    let tc = TestCatalog::new();
    let g = three_groups(&tc);

    let order = tc.catalog.driver_groups().move_behind(&g[0], 1).unwrap();

    assert_eq!(ids(&order), vec![g[1].clone(), g[2].clone(), g[0].clone()]);
}

#[test]
fn move_last_behind_first() {
    let tc = TestCatalog::new();
    let g = three_groups(&tc);

    let order = tc.catalog.driver_groups().move_behind(&g[2], 0).unwrap();

    assert_eq!(ids(&order), vec![g[0].clone(), g[2].clone(), g[1].clone()]);
}

#[test]
fn reorder_is_persisted() {
    let tc = TestCatalog::new();
    let g = three_groups(&tc);

    tc.catalog.driver_groups().move_behind(&g[2], 0).unwrap();

    let reopened = tc.reopen();
    assert_eq!(
        ids(&reopened.driver_groups().all().unwrap()),
        vec![g[0].clone(), g[2].clone(), g[1].clone()]
    );
    assert_eq!(reopened.driver_groups().index_of(&g[1]).unwrap(), 2);
}

#[test]
fn noop_targets_leave_order_unchanged() {
    let tc = TestCatalog::new();
    let g = three_groups(&tc);

    for (id, target) in [(&g[1], 0), (&g[0], -1)] {
        let order = tc.catalog.driver_groups().move_behind(id, target).unwrap();
        assert_eq!(ids(&order), g);
    }
}

#[test]
fn out_of_bounds_and_missing_source() {
    let tc = TestCatalog::new();
    let a = tc.catalog.match_rules().add(rule_set("a", &[])).unwrap();
    tc.catalog.match_rules().add(rule_set("b", &[])).unwrap();

    assert!(matches!(
        tc.catalog.match_rules().move_behind(&a, 5),
        Err(Error::OutOfBounds { index: 5, len: 2 })
    ));
    assert!(tc
        .catalog
        .match_rules()
        .move_behind("missing", 0)
        .unwrap_err()
        .is_not_found());
}

#[test]
fn single_element_ignores_target() {
    let tc = TestCatalog::new();
    let only = tc.catalog.match_rules().add(rule_set("only", &[])).unwrap();

    for target in [-1, 0, 7] {
        let order = tc.catalog.match_rules().move_behind(&only, target).unwrap();
        assert_eq!(ids(&order), vec![only.clone()]);
    }
}
