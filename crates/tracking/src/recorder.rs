//! Event-recording collaborator.

use tracing::info;

/// Sink for label-based tracking events.
///
/// Implementations are host concerns (analytics client, local queue, ...).
/// A failed `record` is reported through the diagnostic sink by the proxy
/// and never reaches the dispatching caller.
pub trait EventRecorder: Send + Sync {
	/// Records one occurrence of the named event.
	fn record(&self, label: &str) -> anyhow::Result<()>;
}

/// Recorder that writes event labels to the log stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRecorder;

impl EventRecorder for LogRecorder {
	fn record(&self, label: &str) -> anyhow::Result<()> {
		info!(label, "tracking event");
		Ok(())
	}
}
