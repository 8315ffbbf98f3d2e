// this_file: crates/glyphcode-gen/src/lib.rs

//! Generation pipeline for glyphcode: request snapshots, a
//! supersede-on-change scheduler, persisted settings, and the thin UI
//! action gate.

pub mod request;
pub mod scheduler;
pub mod settings;
pub mod ui;

pub use request::{GeneratedCode, GenerationRequest};
pub use scheduler::{GenerationEvent, GenerationScheduler};
pub use settings::{Settings, SettingsError, SettingsStore};
pub use ui::{Actions, InputEvent, InterfaceAction, Tab, UiState, UserAction};
