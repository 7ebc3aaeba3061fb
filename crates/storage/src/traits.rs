//! The persistence contract consumed by collection stores

use installit_core::Result;

/// A backend holding one serialisable value of type `T`.
///
/// Implementations must be shareable across threads; collection stores hold
/// them behind `Arc<dyn Store<T>>`.
pub trait Store<T>: Send + Sync {
    /// Decode the durable value.
    ///
    /// Returns `Ok(None)` when no durable data exists. Fails with
    /// `Error::Decode` if the stored bytes are not valid for `T`.
    fn read(&self) -> Result<Option<T>>;

    /// Encode `value` and replace any prior content.
    ///
    /// Fails with `Error::Encode` if `value` cannot be serialised, or
    /// `Error::Persistence` on I/O failure.
    fn write(&self, value: &T) -> Result<()>;

    /// True if durable data is present.
    fn exists(&self) -> bool;

    /// True if the durable data changed since this handle last wrote or read it.
    ///
    /// Backends whose data can only change through the handle itself never
    /// report staleness.
    fn modified(&self) -> bool {
        false
    }
}
