//! MatchRuleStore: ordered hardware-matching rule sets
//!
//! Rule sets reference driver groups by ID. The store subscribes to
//! [`RecordKind::DriverGroup`] and drops deleted IDs from every rule set's
//! `driver_group_ids`, then persists.

use crate::collection::{Collection, SharedStore};
use installit_core::{RecordKind, Result, RuleSet};
use installit_engine::DeleteEventBus;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tracing::info;

/// Collection store for [`RuleSet`] records
pub struct MatchRuleStore {
    inner: Arc<Mutex<Collection<RuleSet>>>,
    bus: Arc<DeleteEventBus>,
}

impl MatchRuleStore {
    /// Create the store and register its driver-group cleanup on `bus`
    pub fn new(store: SharedStore<RuleSet>, bus: Arc<DeleteEventBus>) -> Self {
        let inner = Arc::new(Mutex::new(Collection::new(store)));
        let weak: Weak<Mutex<Collection<RuleSet>>> = Arc::downgrade(&inner);

        bus.subscribe(RecordKind::DriverGroup, move |deleted| {
            let Some(inner) = weak.upgrade() else {
                return Ok(());
            };
            let mut rule_sets = inner.lock();
            prune_driver_groups(&mut rule_sets, deleted)
        });

        Self { inner, bus }
    }

    /// All rule sets, in order
    pub fn all(&self) -> Result<Vec<RuleSet>> {
        self.inner.lock().all()
    }

    /// The rule set with `id`
    pub fn get(&self, id: &str) -> Result<RuleSet> {
        self.inner.lock().get(id)
    }

    /// Position of the rule set with `id`
    pub fn index_of(&self, id: &str) -> Result<usize> {
        self.inner.lock().index_of(id)
    }

    /// Append `rule_set` with a fresh ID and return it
    pub fn add(&self, rule_set: RuleSet) -> Result<String> {
        self.inner.lock().add(rule_set)
    }

    /// Replace the stored rule set with the same ID
    pub fn update(&self, rule_set: RuleSet) -> Result<RuleSet> {
        self.inner.lock().update(rule_set)
    }

    /// Remove the rule set with `id` and publish it under [`RecordKind::RuleSet`]
    pub fn remove(&self, id: &str) -> Result<()> {
        let removed = self.inner.lock().remove(id)?;
        self.bus.publish(RecordKind::RuleSet, &[removed.id])
    }

    /// Move the rule set with `id` behind position `target`. Returns the
    /// resulting order.
    pub fn move_behind(&self, id: &str, target: isize) -> Result<Vec<RuleSet>> {
        self.inner.lock().move_behind(id, target)
    }
}

fn prune_driver_groups(rule_sets: &mut Collection<RuleSet>, deleted: &[String]) -> Result<()> {
    let mut pruned = 0;
    for rule_set in rule_sets.records()?.iter_mut() {
        let before = rule_set.driver_group_ids.len();
        rule_set.driver_group_ids.retain(|id| !deleted.contains(id));
        pruned += before - rule_set.driver_group_ids.len();
    }
    if pruned > 0 {
        info!(references = pruned, "Pruned driver group references from rule sets");
    }
    rule_sets.persist()
}
