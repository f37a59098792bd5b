//! Transcript assembly for live speech recognition
//!
//! Owns the committed/session buffer pair and the merge policy that folds
//! a finished recognition session into the permanent transcript, plus the
//! normalization used to detect overlapping re-sends.

mod accumulator;
mod normalize;

pub use accumulator::{TranscriptAccumulator, TranscriptState, DEFAULT_PLACEHOLDER};
pub use normalize::{normalize, normalized_ends_with};
