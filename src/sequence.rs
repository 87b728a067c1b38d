//! Greedy split-screen pairing over an ordered image list.
//!
//! Walks the images once, left to right, holding at most one pending
//! pairable image. Two consecutive pairable images become a [`PairingEntry::Pair`];
//! everything else is shown alone as a [`PairingEntry::Single`]. Images are
//! never reordered, and a pending image never looks past a non-pairable one
//! for a partner: pairing follows playlist order, not maximum pair count.
//!
//! ```text
//!     portrait display, pairable = landscape
//!
//!     input:    L1  L2  P1  L3  P2  L4  L5  L6
//!               └─┬─┘   │   │   │   └─┬─┘   │
//!     output:   pair  single single single pair  single
//! ```
//!
//! # Example
//!
//! ```
//! use zenpair::{DisplayOrientation, Image, PairingEntry, ImageId, compute_sequence};
//!
//! let images = [
//!     Image::new(1, 1920, 1080),
//!     Image::new(2, 1920, 1080),
//!     Image::new(3, 1080, 1920),
//! ];
//! let seq = compute_sequence(&images, DisplayOrientation::Portrait);
//!
//! assert_eq!(seq.pair_count(), 1);
//! assert_eq!(seq.entries()[0], PairingEntry::Pair([ImageId(1), ImageId(2)]));
//! assert_eq!(seq.entries()[1], PairingEntry::Single(ImageId(3)));
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::image::{Catalog, Image, ImageId};
use crate::orientation::{AspectThreshold, DisplayOrientation, ImageOrientation};

/// One unit of the display sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "wire::Entry", try_from = "wire::Entry")
)]
pub enum PairingEntry {
    /// Shown full-screen.
    Single(ImageId),
    /// Shown split-screen, in encounter order.
    Pair([ImageId; 2]),
}

impl PairingEntry {
    /// The ids in this entry, in display order.
    pub fn images(&self) -> &[ImageId] {
        match self {
            Self::Single(id) => core::slice::from_ref(id),
            Self::Pair(ids) => ids,
        }
    }

    /// Whether this is a split-screen entry.
    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair(_))
    }

    /// Number of images shown by this entry (1 or 2).
    pub fn image_count(&self) -> usize {
        self.images().len()
    }
}

/// Ordered list of single and pair entries.
///
/// Flattening the entries gives back exactly the image ids the sequence was
/// computed from, in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence {
    entries: Vec<PairingEntry>,
}

impl Sequence {
    /// Wrap entries obtained elsewhere (e.g. a cached sequence).
    ///
    /// No invariants are checked; see [`Sequence::check`].
    pub fn from_entries(entries: Vec<PairingEntry>) -> Self {
        Self { entries }
    }

    /// The entries in display order.
    pub fn entries(&self) -> &[PairingEntry] {
        &self.entries
    }

    /// Consume into the entry list.
    pub fn into_entries(self) -> Vec<PairingEntry> {
        self.entries
    }

    /// Number of entries (screens).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pair entries.
    pub fn pair_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_pair()).count()
    }

    /// Number of single entries.
    pub fn single_count(&self) -> usize {
        self.entries.len() - self.pair_count()
    }

    /// Total number of images across all entries.
    pub fn image_count(&self) -> usize {
        self.entries.iter().map(PairingEntry::image_count).sum()
    }

    /// Ids across all entries, in order.
    pub fn iter_ids(&self) -> impl Iterator<Item = ImageId> + '_ {
        self.entries.iter().flat_map(|e| e.images().iter().copied())
    }

    /// Flatten to the ordered id list.
    pub fn flatten(&self) -> Vec<ImageId> {
        self.iter_ids().collect()
    }

    /// Whether the flattened ids equal `order` element-wise.
    ///
    /// A cached sequence is only trustworthy for an order it matches.
    pub fn matches_order(&self, order: &[ImageId]) -> bool {
        self.image_count() == order.len() && self.iter_ids().eq(order.iter().copied())
    }

    /// Verify that every pair holds two images of the pairable orientation
    /// for `display`, using the default threshold.
    ///
    /// Meant for sequences that did not come from this crate, such as a
    /// deserialized cache. Ids missing from the catalog fail the check.
    pub fn check<C: Catalog + ?Sized>(
        &self,
        catalog: &C,
        display: DisplayOrientation,
    ) -> Result<(), SequenceError> {
        Sequencer::default().check(self, catalog, display)
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a PairingEntry;
    type IntoIter = core::slice::Iter<'a, PairingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Sequence {
    type Item = PairingEntry;
    type IntoIter = alloc::vec::IntoIter<PairingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A sequence entry that breaks the pairing invariants.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// The entry references an id the catalog does not know.
    UnknownImage {
        /// Index of the entry in the sequence.
        entry: usize,
        /// The unknown id.
        id: ImageId,
    },
    /// A pair contains an image that is not pairable on the display.
    UnpairableImage {
        /// Index of the entry in the sequence.
        entry: usize,
        /// The offending id.
        id: ImageId,
        /// Its classified orientation.
        orientation: ImageOrientation,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownImage { entry, id } => {
                write!(f, "entry {entry}: image {id} is not in the catalog")
            }
            Self::UnpairableImage {
                entry,
                id,
                orientation,
            } => write!(
                f,
                "entry {entry}: image {id} is {orientation:?} and cannot be paired on this display"
            ),
        }
    }
}

impl core::error::Error for SequenceError {}

/// Pairing configuration.
///
/// Carries only the classification threshold; the display orientation is
/// passed to every call.
///
/// ```
/// use zenpair::{AspectThreshold, DisplayOrientation, Image, Sequencer};
///
/// // Count anything wider than 3:2 as landscape.
/// let sequencer = Sequencer::new().threshold(AspectThreshold::new(3, 2).unwrap());
/// let images = [Image::new(1, 1400, 1000), Image::new(2, 1400, 1000)];
///
/// // 1.4 is portrait under 3:2, so both pair on a landscape display.
/// let seq = sequencer.compute(&images, DisplayOrientation::Landscape);
/// assert_eq!(seq.pair_count(), 1);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sequencer {
    pub(crate) threshold: AspectThreshold,
}

impl Sequencer {
    /// Sequencer with the default 1.1 threshold.
    pub const fn new() -> Self {
        Self {
            threshold: AspectThreshold::DEFAULT,
        }
    }

    /// Set the landscape classification threshold.
    pub const fn threshold(mut self, threshold: AspectThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// The configured threshold.
    pub const fn aspect_threshold(&self) -> AspectThreshold {
        self.threshold
    }

    /// Compute the pairing sequence for `images` in their given order.
    pub fn compute(&self, images: &[Image], display: DisplayOrientation) -> Sequence {
        let pairable = display.pairable();
        let mut entries = Vec::with_capacity(images.len());
        let mut pending: Option<ImageId> = None;

        for img in images {
            if img.orientation_with(self.threshold) == pairable {
                match pending.take() {
                    Some(first) => entries.push(PairingEntry::Pair([first, img.id])),
                    None => pending = Some(img.id),
                }
            } else {
                if let Some(first) = pending.take() {
                    entries.push(PairingEntry::Single(first));
                }
                entries.push(PairingEntry::Single(img.id));
            }
        }
        if let Some(last) = pending {
            entries.push(PairingEntry::Single(last));
        }

        let seq = Sequence { entries };
        log::trace!(
            "sequenced {} images for {:?} display: {} pairs, {} singles",
            images.len(),
            display,
            seq.pair_count(),
            seq.single_count()
        );
        seq
    }

    /// Resolve `ids` through `catalog` and compute their sequence.
    ///
    /// Unknown ids are dropped before sequencing.
    pub fn compute_ids<C: Catalog + ?Sized>(
        &self,
        ids: &[ImageId],
        catalog: &C,
        display: DisplayOrientation,
    ) -> Sequence {
        self.compute(&crate::image::resolve(ids, catalog), display)
    }

    /// See [`Sequence::check`].
    pub fn check<C: Catalog + ?Sized>(
        &self,
        sequence: &Sequence,
        catalog: &C,
        display: DisplayOrientation,
    ) -> Result<(), SequenceError> {
        let pairable = display.pairable();
        for (entry, e) in sequence.entries.iter().enumerate() {
            for &id in e.images() {
                let img = catalog
                    .image(id)
                    .ok_or(SequenceError::UnknownImage { entry, id })?;
                let orientation = img.orientation_with(self.threshold);
                if e.is_pair() && orientation != pairable {
                    return Err(SequenceError::UnpairableImage {
                        entry,
                        id,
                        orientation,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Compute the pairing sequence with the default threshold.
pub fn compute_sequence(images: &[Image], display: DisplayOrientation) -> Sequence {
    Sequencer::new().compute(images, display)
}

#[cfg(feature = "serde")]
mod wire {
    //! `{"type": "single" | "pair", "images": [...]}` form of an entry.

    use alloc::vec::Vec;
    use core::fmt;

    use super::PairingEntry;
    use crate::image::ImageId;

    #[derive(Copy, Clone, Debug, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub(super) enum Kind {
        Single,
        Pair,
    }

    #[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
    pub(super) struct Entry {
        #[serde(rename = "type")]
        kind: Kind,
        images: Vec<ImageId>,
    }

    #[derive(Debug)]
    pub(super) struct ArityError {
        kind: Kind,
        count: usize,
    }

    impl fmt::Display for ArityError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:?} entry with {} images", self.kind, self.count)
        }
    }

    impl From<PairingEntry> for Entry {
        fn from(e: PairingEntry) -> Self {
            let kind = if e.is_pair() { Kind::Pair } else { Kind::Single };
            Self {
                kind,
                images: e.images().to_vec(),
            }
        }
    }

    impl TryFrom<Entry> for PairingEntry {
        type Error = ArityError;

        fn try_from(e: Entry) -> Result<Self, Self::Error> {
            match (e.kind, e.images.as_slice()) {
                (Kind::Single, &[id]) => Ok(Self::Single(id)),
                (Kind::Pair, &[a, b]) => Ok(Self::Pair([a, b])),
                (kind, ids) => Err(ArityError {
                    kind,
                    count: ids.len(),
                }),
            }
        }
    }
}
