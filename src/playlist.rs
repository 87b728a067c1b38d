//! Caller-side playlist model with a cached sequence.
//!
//! Staleness is never stored. The cached sequence is fresh for a display
//! exactly when it was computed for that display and its flattened ids equal
//! the live order, and that is rechecked on every query.
//!
//! ```
//! use zenpair::{DisplayOrientation, Image, ImageId, Move, Playlist};
//!
//! let catalog = vec![
//!     Image::new(1, 1920, 1080),
//!     Image::new(2, 1920, 1080),
//!     Image::new(3, 1080, 1920),
//! ];
//! let portrait = DisplayOrientation::Portrait;
//! let mut playlist = Playlist::new(vec![ImageId(1), ImageId(2), ImageId(3)]);
//! playlist.refresh(&catalog, portrait);
//! assert!(!playlist.is_cache_stale(portrait));
//! assert!(playlist.is_cache_stale(DisplayOrientation::Landscape));
//!
//! playlist.apply_move(Move::new(2, 0)).unwrap();
//! assert!(playlist.is_cache_stale(portrait));
//! assert!(playlist.cached_sequence(portrait).is_none());
//! ```

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::image::{Catalog, ImageId};
use crate::orientation::DisplayOrientation;
use crate::sequence::{Sequence, Sequencer};
use crate::validate::{Move, MoveError};

/// Ordered image ids plus the sequence computed when they were last saved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Playlist {
    /// Live image order.
    pub order: Vec<ImageId>,
    /// Sequence cached at the last save. Advisory only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub computed_sequence: Option<Sequence>,
    /// Display the cached sequence was computed for. A cache without one is
    /// never trusted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub computed_for: Option<DisplayOrientation>,
}

impl Playlist {
    /// Playlist with no cached sequence.
    pub fn new(order: Vec<ImageId>) -> Self {
        Self {
            order,
            computed_sequence: None,
            computed_for: None,
        }
    }

    /// Playlist with a cache loaded from storage, computed for `display`.
    pub fn with_cache(
        order: Vec<ImageId>,
        computed_sequence: Sequence,
        display: DisplayOrientation,
    ) -> Self {
        Self {
            order,
            computed_sequence: Some(computed_sequence),
            computed_for: Some(display),
        }
    }

    /// Whether the cache is missing, was computed for another display, or
    /// does not match the live order.
    pub fn is_cache_stale(&self, display: DisplayOrientation) -> bool {
        self.cached_sequence(display).is_none()
    }

    /// The cached sequence, only if it was computed for `display` and
    /// matches the live order.
    pub fn cached_sequence(&self, display: DisplayOrientation) -> Option<&Sequence> {
        if self.computed_for != Some(display) {
            return None;
        }
        self.computed_sequence
            .as_ref()
            .filter(|seq| seq.matches_order(&self.order))
    }

    /// The fresh cache, or a sequence computed for the live order.
    pub fn sequence<C: Catalog + ?Sized>(
        &self,
        catalog: &C,
        display: DisplayOrientation,
    ) -> Cow<'_, Sequence> {
        self.sequence_with(&Sequencer::new(), catalog, display)
    }

    /// [`Playlist::sequence`] with a configured sequencer.
    ///
    /// The cache is keyed on the display only; refresh with the same
    /// sequencer that reads it.
    pub fn sequence_with<C: Catalog + ?Sized>(
        &self,
        sequencer: &Sequencer,
        catalog: &C,
        display: DisplayOrientation,
    ) -> Cow<'_, Sequence> {
        match self.cached_sequence(display) {
            Some(seq) => Cow::Borrowed(seq),
            None => Cow::Owned(sequencer.compute_ids(&self.order, catalog, display)),
        }
    }

    /// Move one image. The cache is left as is and goes stale.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        mv.apply_in_place(&mut self.order)
    }

    /// Recompute the cache for the live order, as done on save.
    ///
    /// Returns the new sequence. Ids unknown to `catalog` are absent from it,
    /// so a playlist holding such ids stays stale until they are removed.
    pub fn refresh<C: Catalog + ?Sized>(
        &mut self,
        catalog: &C,
        display: DisplayOrientation,
    ) -> &Sequence {
        self.refresh_with(&Sequencer::new(), catalog, display)
    }

    /// [`Playlist::refresh`] with a configured sequencer.
    pub fn refresh_with<C: Catalog + ?Sized>(
        &mut self,
        sequencer: &Sequencer,
        catalog: &C,
        display: DisplayOrientation,
    ) -> &Sequence {
        let seq = sequencer.compute_ids(&self.order, catalog, display);
        self.computed_for = Some(display);
        self.computed_sequence.insert(seq)
    }

    /// Drop ids the catalog does not know from the live order.
    ///
    /// Returns how many were removed.
    pub fn prune<C: Catalog + ?Sized>(&mut self, catalog: &C) -> usize {
        let before = self.order.len();
        self.order.retain(|&id| catalog.image(id).is_some());
        before - self.order.len()
    }
}
