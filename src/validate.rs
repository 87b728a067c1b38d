//! Reorder validation: how a single drag move changes pairing.
//!
//! A move takes the id at `source` out of the order and reinserts it at
//! `destination`. The validator sequences the current and the candidate
//! order and reports the change in pair count. It never blocks a move:
//! [`MoveVerdict::is_valid`] is always `true`, and the caller decides what
//! to do with a warning.
//!
//! ```
//! use zenpair::{DisplayOrientation, Image, ImageId, Move, validate_move};
//!
//! let catalog = vec![
//!     Image::new(1, 1920, 1080),
//!     Image::new(2, 1920, 1080),
//!     Image::new(3, 1080, 1920),
//! ];
//! let order = [ImageId(1), ImageId(2), ImageId(3)];
//!
//! // Drop the portrait between the two landscapes.
//! let verdict = validate_move(Move::new(2, 1), &order, &catalog, DisplayOrientation::Portrait)
//!     .unwrap();
//! assert!(verdict.breaks_pairing);
//! assert_eq!(verdict.pair_loss, 1);
//! assert_eq!(
//!     verdict.warning.unwrap().to_string(),
//!     "reduces optimal pairing by 1 pair(s)"
//! );
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::image::{Catalog, ImageId};
use crate::orientation::DisplayOrientation;
use crate::sequence::Sequencer;

/// A single-element move, as produced by one drag gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Index of the element being moved, in the current order.
    pub source: usize,
    /// Index it ends up at, in the resulting order.
    pub destination: usize,
}

impl Move {
    /// Create a move from `source` to `destination`.
    pub const fn new(source: usize, destination: usize) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Whether the move leaves the order unchanged.
    pub const fn is_noop(&self) -> bool {
        self.source == self.destination
    }

    /// Apply the move to a copy of `order`.
    ///
    /// Both indices must be in `0..order.len()`; out-of-range indices are
    /// rejected rather than clamped.
    pub fn apply(&self, order: &[ImageId]) -> Result<Vec<ImageId>, MoveError> {
        self.check_bounds(order.len())?;
        let mut candidate = order.to_vec();
        let id = candidate.remove(self.source);
        candidate.insert(self.destination, id);
        Ok(candidate)
    }

    /// Apply the move in place.
    pub fn apply_in_place(&self, order: &mut Vec<ImageId>) -> Result<(), MoveError> {
        self.check_bounds(order.len())?;
        let id = order.remove(self.source);
        order.insert(self.destination, id);
        Ok(())
    }

    fn check_bounds(&self, len: usize) -> Result<(), MoveError> {
        if self.source >= len {
            return Err(MoveError::SourceOutOfBounds {
                index: self.source,
                len,
            });
        }
        if self.destination >= len {
            return Err(MoveError::DestinationOutOfBounds {
                index: self.destination,
                len,
            });
        }
        Ok(())
    }
}

/// A move that cannot be simulated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// `source` is not an index into the current order.
    SourceOutOfBounds {
        /// The rejected source index.
        index: usize,
        /// Length of the order the move was applied to.
        len: usize,
    },
    /// `destination` is not an index into the resulting order.
    DestinationOutOfBounds {
        /// The rejected destination index.
        index: usize,
        /// Length of the order the move was applied to.
        len: usize,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceOutOfBounds { index, len } => {
                write!(f, "source index {index} out of bounds for {len} images")
            }
            Self::DestinationOutOfBounds { index, len } => {
                write!(f, "destination index {index} out of bounds for {len} images")
            }
        }
    }
}

impl core::error::Error for MoveError {}

/// A step of a batch reorder that could not be simulated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BatchError {
    /// Index of the failing move in the batch.
    pub step: usize,
    /// Why it failed.
    pub error: MoveError,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move {}: {}", self.step, self.error)
    }
}

impl core::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Informational message attached to a move that changes the pair count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveWarning {
    /// The move loses this many pairs.
    ReducesPairing(usize),
    /// The move gains this many pairs.
    ImprovesPairing(usize),
}

impl fmt::Display for MoveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReducesPairing(n) => write!(f, "reduces optimal pairing by {n} pair(s)"),
            Self::ImprovesPairing(n) => write!(f, "improves pairing by {n} pair(s)"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MoveWarning {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of validating a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MoveVerdict {
    /// Always `true`: verdicts inform, they do not block.
    pub is_valid: bool,
    /// Set when the pair count changes.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub warning: Option<MoveWarning>,
    /// Whether the move loses at least one pair.
    pub breaks_pairing: bool,
    /// Pairs lost. Never negative; gains show up only in `warning`.
    pub pair_loss: usize,
    /// Pair count of the current order.
    pub pairs_before: usize,
    /// Pair count of the candidate order.
    pub pairs_after: usize,
}

impl MoveVerdict {
    /// Build the verdict for a pair count going from `before` to `after`.
    pub fn from_pair_counts(before: usize, after: usize) -> Self {
        let (warning, pair_loss) = if before > after {
            let loss = before - after;
            (Some(MoveWarning::ReducesPairing(loss)), loss)
        } else if after > before {
            (Some(MoveWarning::ImprovesPairing(after - before)), 0)
        } else {
            (None, 0)
        };
        Self {
            is_valid: true,
            warning,
            breaks_pairing: pair_loss > 0,
            pair_loss,
            pairs_before: before,
            pairs_after: after,
        }
    }

    /// Signed change in pair count: negative when pairs are lost.
    pub fn pair_delta(&self) -> i64 {
        self.pairs_after as i64 - self.pairs_before as i64
    }

    /// Whether the pair count is unchanged.
    pub fn is_neutral(&self) -> bool {
        self.pairs_before == self.pairs_after
    }
}

/// Per-step verdicts of a batch reorder, and the order it ends in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchVerdict {
    /// Pair count of the order before the first move.
    pub pairs_before: usize,
    /// One verdict per move, each relative to the order before that move.
    pub steps: Vec<MoveVerdict>,
    /// The order after all moves.
    pub order: Vec<ImageId>,
}

impl BatchVerdict {
    /// Verdict for the batch as a whole, first order against last.
    pub fn net(&self) -> MoveVerdict {
        let after = self
            .steps
            .last()
            .map_or(self.pairs_before, |last| last.pairs_after);
        MoveVerdict::from_pair_counts(self.pairs_before, after)
    }
}

impl Sequencer {
    /// Validate moving one element of `order`.
    ///
    /// Ids missing from `catalog` are dropped from both orders before
    /// sequencing. Neither `order` nor `catalog` is modified.
    ///
    /// An empty order has nothing to move and always yields a neutral
    /// verdict. On a non-empty order, out-of-range indices are rejected.
    pub fn validate_move<C: Catalog + ?Sized>(
        &self,
        mv: Move,
        order: &[ImageId],
        catalog: &C,
        display: DisplayOrientation,
    ) -> Result<MoveVerdict, MoveError> {
        if order.is_empty() {
            return Ok(MoveVerdict::from_pair_counts(0, 0));
        }
        let candidate = mv.apply(order)?;
        let before = self.compute_ids(order, catalog, display).pair_count();
        let after = self.compute_ids(&candidate, catalog, display).pair_count();
        let verdict = MoveVerdict::from_pair_counts(before, after);
        log::debug!(
            "move {} -> {}: pairs {} -> {}",
            mv.source,
            mv.destination,
            before,
            after
        );
        Ok(verdict)
    }

    /// Validate a batch reorder as successive single-element moves.
    ///
    /// Each move is validated against the order left by the previous one.
    /// Moves on an empty order are neutral, as in [`Sequencer::validate_move`].
    pub fn validate_moves<C: Catalog + ?Sized>(
        &self,
        moves: &[Move],
        order: &[ImageId],
        catalog: &C,
        display: DisplayOrientation,
    ) -> Result<BatchVerdict, BatchError> {
        let mut current = order.to_vec();
        let pairs_before = self.compute_ids(&current, catalog, display).pair_count();
        let mut pairs = pairs_before;
        let mut steps = Vec::with_capacity(moves.len());
        for (step, mv) in moves.iter().enumerate() {
            if current.is_empty() {
                steps.push(MoveVerdict::from_pair_counts(0, 0));
                continue;
            }
            mv.apply_in_place(&mut current)
                .map_err(|error| BatchError { step, error })?;
            let after = self.compute_ids(&current, catalog, display).pair_count();
            steps.push(MoveVerdict::from_pair_counts(pairs, after));
            pairs = after;
        }
        Ok(BatchVerdict {
            pairs_before,
            steps,
            order: current,
        })
    }
}

/// Validate one move with the default threshold.
pub fn validate_move<C: Catalog + ?Sized>(
    mv: Move,
    order: &[ImageId],
    catalog: &C,
    display: DisplayOrientation,
) -> Result<MoveVerdict, MoveError> {
    Sequencer::new().validate_move(mv, order, catalog, display)
}

/// Validate a batch of moves with the default threshold.
pub fn validate_moves<C: Catalog + ?Sized>(
    moves: &[Move],
    order: &[ImageId],
    catalog: &C,
    display: DisplayOrientation,
) -> Result<BatchVerdict, BatchError> {
    Sequencer::new().validate_moves(moves, order, catalog, display)
}
