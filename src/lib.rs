//! Slideshow playlist pairing: which images share the screen, and what a
//! reorder does to that.
//!
//! Pure decision logic. No I/O, no shared state, `no_std` compatible
//! (requires `alloc`). Every call works on its own copies of its inputs.
//!
//! # Modules
//!
//! - [`orientation`] — Landscape/portrait classification and display orientation
//! - [`image`] — Image records, ids, and the read-only [`Catalog`] seam
//! - [`sequence`] — Greedy, order-preserving pairing into single/pair entries
//! - [`validate`] — Simulate a drag move and report the change in pair count
//! - [`recommend`] — The order the sequencer itself treats as fully paired
//! - [`playlist`] — Caller-side playlist with a derived cache-staleness check
//!
//! # Features
//!
//! - `std` (default) — `HashMap` catalogs, `log/std`
//! - `serde` — wire format for entries, sequences, verdicts, and playlists

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod image;
pub mod orientation;
pub mod playlist;
pub mod recommend;
pub mod sequence;
pub mod validate;

pub use image::{Catalog, Image, ImageId, resolve};
pub use orientation::{AspectThreshold, DisplayOrientation, ImageOrientation, classify};
pub use playlist::Playlist;
pub use recommend::{Recommendation, optimal_order, recommend};
pub use sequence::{PairingEntry, Sequence, SequenceError, Sequencer, compute_sequence};
pub use validate::{
    BatchError, BatchVerdict, Move, MoveError, MoveVerdict, MoveWarning, validate_move,
    validate_moves,
};
