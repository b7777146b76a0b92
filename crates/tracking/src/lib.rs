//! Transparent tracking instrumentation over namespaced action dispatch.
//!
//! [`TrackingProxy`] is a [`DispatchPlugin`] that replaces configured
//! actions with instrumented wrappers. A wrapper records a tracking event
//! (a named label routed to an [`EventRecorder`], or a custom observer
//! function) and then invokes the original action with the original
//! arguments, returning its result unmodified.
//!
//! The contract, in order of precedence:
//!
//! 1. **Tracking never fails the call.** Any tracker failure (an `Err`
//!    return or a panic) is logged and swallowed; the original action
//!    always runs and its result (success or failure) is always returned
//!    untouched.
//! 2. Namespaces absent from the [`TrackingTable`] pass through: every
//!    returned entry is the identical callable the store registered.
//! 3. The base action map is resolved exactly once per dispatch and never
//!    mutated; wrappers are installed on a local copy.
//!
//! The proxy holds only the immutable table and the recorder handle, so
//! concurrent dispatches are independent and need no locking.
//!
//! [`DispatchPlugin`]: mosaic_data::DispatchPlugin

mod proxy;
mod recorder;
mod table;

pub use proxy::TrackingProxy;
pub use recorder::{EventRecorder, LogRecorder};
pub use table::{ObserverFn, TrackerSpec, TrackingSpec, TrackingTable, TrackingTableBuilder};
