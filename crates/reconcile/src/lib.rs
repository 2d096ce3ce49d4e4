//! # Transcript Reconciliation
//!
//! Two independent streams feed one conversation view: the typed message
//! log, and the raw speech-to-text fragment stream from the voice source.
//! A recognizer restates itself (one utterance arrives as many overlapping
//! fragments), so the raw stream cannot be rendered directly.
//!
//! The pipeline, leaves first:
//!
//! 1. [`normalize`] cleans a fragment (repeats, stutters, fillers).
//! 2. [`similarity`] scores word overlap between two cleaned strings.
//! 3. [`is_continuation`] detects a refined transcription superseding an
//!    earlier one.
//! 4. [`group`] partitions fragments into speaker turns on role-change and
//!    time-gap boundaries.
//! 5. Each turn resolves to one utterance, deduplicated within the pass.
//! 6. [`reconcile`] drops utterances the typed log already contains and
//!    merges both streams chronologically.
//!
//! The whole engine is a pure function recomputed per call: callers hold
//! the streams, the engine holds nothing.

pub mod continuation;
pub mod engine;
pub mod group;
mod merge;
pub mod normalize;
mod resolve;
pub mod similarity;
pub mod types;

pub use continuation::is_continuation;
pub use engine::reconcile;
pub use group::{COMPLETION_THRESHOLD_MS, TIME_THRESHOLD_MS};
pub use normalize::normalize;
pub use similarity::similarity;
pub use types::{ChatMessage, Fragment, Sender, Speaker, Utterance};
