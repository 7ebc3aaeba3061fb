//! Delete-notification bus
//!
//! Lets one collection react when another removes records it references by
//! ID. A collection holding cross-references subscribes to the referenced
//! collection's [`RecordKind`]; the referenced collection publishes the
//! removed IDs after a successful removal.
//!
//! ## Delivery
//!
//! - Subscribers run synchronously, in subscription order, on the
//!   publisher's thread.
//! - Delivery stops at the first subscriber that fails; that error is
//!   returned wrapped in `Error::CleanupHandler`. Later subscribers are not
//!   called and nothing is rolled back.
//! - `publish` works on a snapshot of the subscriber list taken under the
//!   read lock, so handlers may themselves subscribe or publish.
//!
//! The bus is an ordinary value: construct one and hand an `Arc` of it to
//! every store that needs it.

use installit_core::{Error, RecordKind, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Callback receiving the IDs removed from a collection
pub type DeleteHandler = Arc<dyn Fn(&[String]) -> Result<()> + Send + Sync>;

/// Registry mapping a record kind to its ordered delete subscribers
#[derive(Default)]
pub struct DeleteEventBus {
    subscribers: RwLock<HashMap<RecordKind, Vec<DeleteHandler>>>,
}

impl DeleteEventBus {
    /// Create a bus with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the subscribers for `kind`
    pub fn subscribe<F>(&self, kind: RecordKind, handler: F)
    where
        F: Fn(&[String]) -> Result<()> + Send + Sync + 'static,
    {
        let mut subscribers = self.subscribers.write();
        let list = subscribers.entry(kind).or_default();
        list.push(Arc::new(handler));
        info!(kind = %kind, position = list.len(), "Registered delete subscriber");
    }

    /// Deliver `ids` to every subscriber of `kind`, in order.
    ///
    /// Publishing to a kind with no subscribers succeeds without effect.
    pub fn publish(&self, kind: RecordKind, ids: &[String]) -> Result<()> {
        let handlers: Vec<DeleteHandler> = match self.subscribers.read().get(&kind) {
            Some(list) => list.clone(),
            None => return Ok(()),
        };

        debug!(kind = %kind, ids = ids.len(), subscribers = handlers.len(), "Publishing delete");
        for (position, handler) in handlers.iter().enumerate() {
            if let Err(e) = handler(ids) {
                warn!(kind = %kind, position, error = %e, "Delete subscriber failed");
                return Err(Error::CleanupHandler {
                    kind,
                    source: Box::new(e),
                });
            }
        }
        Ok(())
    }

    /// Number of subscribers registered for `kind`
    pub fn subscriber_count(&self, kind: RecordKind) -> usize {
        self.subscribers.read().get(&kind).map_or(0, Vec::len)
    }
}

impl fmt::Debug for DeleteEventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subscribers = self.subscribers.read();
        let counts: HashMap<&'static str, usize> = subscribers
            .iter()
            .map(|(kind, list)| (kind.as_str(), list.len()))
            .collect();
        f.debug_struct("DeleteEventBus")
            .field("subscribers", &counts)
            .finish()
    }
}
