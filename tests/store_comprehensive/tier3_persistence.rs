//! Tier 3: Persistence
//!
//! Collections are plain JSON arrays on disk, reloaded when the file
//! changes and re-initialised when it disappears.

use crate::test_utils::*;
use installit_store::{
    AppSetting, DriverGroup, Error, FileStore, Store, SuccessAction, CONFIG_FILE_NAME,
};
use serde_json::Value;

#[test]
fn collections_round_trip_through_reopen() {
    let tc = TestCatalog::new();
    let mut d = driver("", "lan");
    d.flags = vec!["/s".to_string()];
    d.min_exe_time = 1.5;
    d.allow_rt_codes = vec![0, 3010];
    let g = tc.catalog.driver_groups().add(group("Net", vec![d])).unwrap();
    let r = tc.catalog.match_rules().add(rule_set("intel", &[g.as_str()])).unwrap();

    let before_groups = tc.catalog.driver_groups().all().unwrap();
    let before_rules = tc.catalog.match_rules().all().unwrap();

    let reopened = tc.reopen();
    assert_eq!(reopened.driver_groups().all().unwrap(), before_groups);
    assert_eq!(reopened.match_rules().all().unwrap(), before_rules);
    assert_eq!(reopened.match_rules().get(&r).unwrap().driver_group_ids, vec![g]);
}

#[test]
fn durable_format_is_a_json_array() {
    let tc = TestCatalog::new();
    tc.catalog
        .driver_groups()
        .add(group("Net", vec![driver("", "lan")]))
        .unwrap();

    let text = std::fs::read_to_string(tc.file("driver_groups.json")).unwrap();
    let json: Value = serde_json::from_str(&text).unwrap();
    let groups = json.as_array().expect("array of groups");
    assert_eq!(groups.len(), 1);

    let driver = &groups[0]["drivers"][0];
    assert_eq!(driver["type"], "network");
    assert!(driver.get("minExeTime").is_some());
    assert!(driver.get("allowRtCodes").is_some());
}

#[test]
fn first_access_creates_empty_files() {
    let tc = TestCatalog::new();
    assert!(tc.file(CONFIG_FILE_NAME).exists());

    assert!(tc.catalog.match_rules().all().unwrap().is_empty());

    let text = std::fs::read_to_string(tc.file("match_rules.json")).unwrap();
    assert_eq!(text.trim(), "[]");
}

#[test]
fn external_edit_is_picked_up() {
    let tc = TestCatalog::new();
    tc.catalog.driver_groups().add(group("Mine", vec![])).unwrap();

    std::fs::write(
        tc.file("driver_groups.json"),
        r#"[{"id":"ext00001","name":"External","type":"display","drivers":null}]"#,
    )
    .unwrap();

    let groups = tc.catalog.driver_groups().all().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "External");
    assert!(groups[0].drivers.is_empty());
}

#[test]
fn deleted_file_reinitialises_empty() {
    let tc = TestCatalog::new();
    tc.catalog.match_rules().add(rule_set("gone", &[])).unwrap();

    std::fs::remove_file(tc.file("match_rules.json")).unwrap();

    assert!(tc.catalog.match_rules().all().unwrap().is_empty());
    assert!(tc.file("match_rules.json").exists());
}

#[test]
fn corrupt_file_reports_decode_error() {
    let tc = TestCatalog::new();
    std::fs::write(tc.file("driver_groups.json"), "{ not json").unwrap();

    assert!(matches!(
        tc.catalog.driver_groups().all(),
        Err(Error::Decode(_))
    ));
}

#[test]
fn file_store_modified_tracks_own_writes() {
    let tc = TestCatalog::new();
    let store: FileStore<Vec<DriverGroup>> = FileStore::new(tc.file("scratch.json"));

    assert!(store.modified());

    store.write(&vec![group("x", vec![])]).unwrap();
    assert!(!store.modified());

    std::fs::write(tc.file("scratch.json"), "[]").unwrap();
    assert!(store.modified());
}

#[test]
fn app_setting_defaults_then_persists_updates() {
    let tc = TestCatalog::new();

    assert_eq!(tc.catalog.app_setting().all().unwrap(), AppSetting::default());
    assert!(tc.file("app_setting.json").exists());

    let setting = AppSetting {
        language: "zh_Hant_HK".to_string(),
        success_action: SuccessAction::Shutdown,
        success_action_delay: 30,
        ..AppSetting::default()
    };
    tc.catalog.app_setting().update(setting.clone()).unwrap();

    let reopened = tc.reopen();
    assert_eq!(reopened.app_setting().all().unwrap(), setting);
}
