//! DriverGroupStore: ordered driver groups with nested drivers
//!
//! ## ID scopes
//!
//! Group IDs and driver IDs share one namespace: no driver carries the ID
//! of any group, and no two drivers share an ID regardless of group.
//! Both kinds travel on the same bus topic, so a deleted driver ID must
//! never be mistaken for a live group's ID.
//!
//! ## Delete propagation
//!
//! Under [`RecordKind::DriverGroup`] this store publishes:
//! - on `remove`: the removed group's driver IDs (if any), then the group
//!   ID in a second publish
//! - on `update`: IDs of drivers dropped from the group
//!
//! It subscribes to the same kind itself and strips published IDs from every
//! driver's `incompatibles`. Other collections referencing groups (rule
//! sets) subscribe alongside.

use crate::collection::{Collection, SharedStore};
use installit_core::{DriverGroup, Error, Identified, RecordKind, Result};
use installit_engine::{records, DeleteEventBus};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::{Arc, Weak};
use tracing::info;

/// Collection store for [`DriverGroup`] records
pub struct DriverGroupStore {
    inner: Arc<Mutex<Collection<DriverGroup>>>,
    bus: Arc<DeleteEventBus>,
}

impl DriverGroupStore {
    /// Create the store and register its incompatibles cleanup on `bus`
    pub fn new(store: SharedStore<DriverGroup>, bus: Arc<DeleteEventBus>) -> Self {
        let inner = Arc::new(Mutex::new(Collection::new(store)));
        let weak: Weak<Mutex<Collection<DriverGroup>>> = Arc::downgrade(&inner);

        bus.subscribe(RecordKind::DriverGroup, move |deleted| {
            let Some(inner) = weak.upgrade() else {
                return Ok(());
            };
            let mut groups = inner.lock();
            prune_incompatibles(&mut groups, deleted)
        });

        Self { inner, bus }
    }

    /// All groups, in order
    pub fn all(&self) -> Result<Vec<DriverGroup>> {
        self.inner.lock().all()
    }

    /// The group with `id`
    pub fn get(&self, id: &str) -> Result<DriverGroup> {
        self.inner.lock().get(id)
    }

    /// Position of the group with `id`
    pub fn index_of(&self, id: &str) -> Result<usize> {
        self.inner.lock().index_of(id)
    }

    /// ID of the group containing the driver with `driver_id`
    pub fn group_of(&self, driver_id: &str) -> Result<String> {
        let mut inner = self.inner.lock();
        inner
            .records()?
            .iter()
            .find(|g| g.drivers.iter().any(|d| d.id == driver_id))
            .map(|g| g.id.clone())
            .ok_or_else(|| Error::not_found(RecordKind::Driver, driver_id))
    }

    /// Append `group` with a fresh ID and return it.
    ///
    /// Nested drivers lacking an ID, or carrying one already used by
    /// another driver, get a fresh one.
    pub fn add(&self, mut group: DriverGroup) -> Result<String> {
        let mut inner = self.inner.lock();
        let groups = inner.records()?;
        let mut taken = taken_ids(groups, None);
        assign_driver_ids(&mut group, &mut taken)?;
        let id = records::create_avoiding(group, groups, |id| taken.contains(id))?;
        inner.persist()?;
        Ok(id)
    }

    /// Replace the stored group with the same ID and return the stored value.
    ///
    /// Drivers without an ID get one. Drivers removed from the group are
    /// published so references to them are cleaned up.
    pub fn update(&self, mut group: DriverGroup) -> Result<DriverGroup> {
        let dropped = {
            let mut inner = self.inner.lock();
            let groups = inner.records()?;
            let index = records::index_of(&group.id, groups)?;
            let mut taken = taken_ids(groups, Some(index));
            assign_driver_ids(&mut group, &mut taken)?;

            let kept: HashSet<&str> = group.drivers.iter().map(|d| d.id.as_str()).collect();
            let dropped: Vec<String> = groups[index]
                .drivers
                .iter()
                .filter(|d| !kept.contains(d.id.as_str()))
                .filter(|d| !groups.iter().any(|g| g.id == d.id))
                .map(|d| d.id.clone())
                .collect();

            records::update(group.clone(), groups)?;
            inner.persist()?;
            dropped
        };

        if dropped.is_empty() {
            return Ok(group);
        }

        info!(group = %group.id, drivers = dropped.len(), "Drivers dropped from group");
        self.bus.publish(RecordKind::DriverGroup, &dropped)?;
        self.get(&group.id)
    }

    /// Remove the group with `id`, then publish its driver IDs and, in a
    /// separate publish, its own ID
    pub fn remove(&self, id: &str) -> Result<()> {
        let (removed, drivers) = {
            let mut inner = self.inner.lock();
            let removed = inner.remove(id)?;
            // Files from older releases may hold drivers named like a live group.
            let groups = inner.records()?;
            let drivers: Vec<String> = removed
                .driver_ids()
                .into_iter()
                .filter(|d| !groups.iter().any(|g| &g.id == d))
                .collect();
            (removed, drivers)
        };

        info!(group = %id, drivers = drivers.len(), "Driver group removed");
        if !drivers.is_empty() {
            self.bus.publish(RecordKind::DriverGroup, &drivers)?;
        }
        self.bus.publish(RecordKind::DriverGroup, &[removed.id])
    }

    /// Move the group with `id` behind position `target`; see
    /// [`records::move_behind`]. Returns the resulting order.
    pub fn move_behind(&self, id: &str, target: isize) -> Result<Vec<DriverGroup>> {
        self.inner.lock().move_behind(id, target)
    }
}

/// Every group ID plus the driver IDs of every group except `skip`
fn taken_ids(groups: &[DriverGroup], skip: Option<usize>) -> HashSet<String> {
    let mut taken: HashSet<String> = groups.iter().map(|g| g.id.clone()).collect();
    for (i, group) in groups.iter().enumerate() {
        if Some(i) != skip {
            taken.extend(group.driver_ids());
        }
    }
    taken
}

/// Give `group`'s drivers IDs that are present and not in `taken`, nor
/// equal to the group's own ID. Assigned IDs are added to `taken`.
fn assign_driver_ids(group: &mut DriverGroup, taken: &mut HashSet<String>) -> Result<()> {
    let own: HashSet<String> = group.driver_ids().into_iter().collect();

    for driver in &mut group.drivers {
        if !driver.has_id() || driver.id == group.id || taken.contains(&driver.id) {
            driver.id = records::generate_unique_id(|id| {
                id == group.id || taken.contains(id) || own.contains(id)
            })?;
        }
        taken.insert(driver.id.clone());
    }
    Ok(())
}

fn prune_incompatibles(groups: &mut Collection<DriverGroup>, deleted: &[String]) -> Result<()> {
    let mut pruned = 0;
    for group in groups.records()?.iter_mut() {
        for driver in &mut group.drivers {
            let before = driver.incompatibles.len();
            driver.incompatibles.retain(|id| !deleted.contains(id));
            pruned += before - driver.incompatibles.len();
        }
    }
    if pruned > 0 {
        info!(references = pruned, "Pruned incompatible driver references");
    }
    groups.persist()
}
