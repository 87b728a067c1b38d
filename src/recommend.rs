//! "Auto-fix" order: what the sequencer itself treats as fully paired.
//!
//! This is not a global reordering optimizer. The recommendation keeps the
//! existing order and only drops ids the catalog no longer knows, so the
//! result is the order the greedy pass would produce and accept unchanged.

use alloc::vec::Vec;

use crate::image::{Catalog, ImageId};
use crate::orientation::DisplayOrientation;
use crate::sequence::{Sequence, Sequencer};

/// Recommended order together with the sequence it yields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recommendation {
    /// Flattened order of `sequence`.
    pub order: Vec<ImageId>,
    /// Sequence computed for the current order.
    pub sequence: Sequence,
    /// Whether `order` differs from the order passed in.
    pub changed: bool,
}

impl Sequencer {
    /// Recommend an order for `order`, see the [module docs](self).
    pub fn recommend<C: Catalog + ?Sized>(
        &self,
        order: &[ImageId],
        catalog: &C,
        display: DisplayOrientation,
    ) -> Recommendation {
        let sequence = self.compute_ids(order, catalog, display);
        let recommended = sequence.flatten();
        let changed = recommended.as_slice() != order;
        if changed {
            log::debug!(
                "recommendation drops {} stale ids",
                order.len() - recommended.len()
            );
        }
        Recommendation {
            order: recommended,
            sequence,
            changed,
        }
    }

    /// The recommended order alone.
    pub fn optimal_order<C: Catalog + ?Sized>(
        &self,
        order: &[ImageId],
        catalog: &C,
        display: DisplayOrientation,
    ) -> Vec<ImageId> {
        self.compute_ids(order, catalog, display).flatten()
    }
}

/// Recommend an order with the default threshold.
pub fn recommend<C: Catalog + ?Sized>(
    order: &[ImageId],
    catalog: &C,
    display: DisplayOrientation,
) -> Recommendation {
    Sequencer::new().recommend(order, catalog, display)
}

/// Recommended order with the default threshold.
pub fn optimal_order<C: Catalog + ?Sized>(
    order: &[ImageId],
    catalog: &C,
    display: DisplayOrientation,
) -> Vec<ImageId> {
    Sequencer::new().optimal_order(order, catalog, display)
}
