//! Mobile application shell integration for the embedded block editor.
//!
//! Everything an application shell wires up when it hosts the block
//! editor: lifecycle hooks for the shell's pre-render and render phases,
//! starter content and a welcome title for development builds, font-weight
//! correction for the mobile text stack, capability-gated experimental
//! features, connected-service state, and installation of the action
//! tracking proxy on the editor's store registry.
//!
//! [`setup`] is the entry point; the shell calls it once at startup with
//! its [`LifecycleHooks`], the store registry, and an event recorder.

mod connection;
mod content;
mod experiments;
mod lifecycle;
mod props;
mod setup;
mod text;
mod tracking;

pub use connection::ConnectionState;
pub use content::STARTER_CONTENT;
pub use experiments::{Capabilities, ExperimentFlags};
pub use lifecycle::{LifecycleHooks, RenderProps};
pub use props::{EditorProps, WELCOME_TITLE, with_dev_defaults};
pub use setup::{MobileEditor, setup};
pub use text::{TextDefaults, corrected_font_weight};
pub use tracking::{BLOCK_EDITOR, default_tracking_table};
