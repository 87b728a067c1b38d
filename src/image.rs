//! Image records and the catalog they are looked up in.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use crate::orientation::{AspectThreshold, ImageOrientation};

/// Unique identifier of an image in the catalog.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImageId(pub u64);

impl From<u64> for ImageId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An image as seen by the pairing engine: identity and pixel dimensions.
///
/// `height` must be non-zero; the catalog is trusted to never hand out
/// degenerate dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    /// Catalog identity.
    pub id: ImageId,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Image {
    /// Create an image record.
    pub fn new(id: impl Into<ImageId>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }

    /// Orientation under the default 1.1 threshold.
    pub fn orientation(&self) -> ImageOrientation {
        AspectThreshold::DEFAULT.classify(self.width, self.height)
    }

    /// Orientation under a custom threshold.
    pub fn orientation_with(&self, threshold: AspectThreshold) -> ImageOrientation {
        threshold.classify(self.width, self.height)
    }
}

/// Read-only source of image records, keyed by id.
///
/// The engine only ever reads from a catalog, and only for the duration of
/// a single call.
pub trait Catalog {
    /// Look up the record for `id`, or `None` if the id is unknown.
    fn image(&self, id: ImageId) -> Option<Image>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn image(&self, id: ImageId) -> Option<Image> {
        (**self).image(id)
    }
}

impl Catalog for BTreeMap<ImageId, Image> {
    fn image(&self, id: ImageId) -> Option<Image> {
        self.get(&id).copied()
    }
}

#[cfg(feature = "std")]
impl<S: std::hash::BuildHasher> Catalog for std::collections::HashMap<ImageId, Image, S> {
    fn image(&self, id: ImageId) -> Option<Image> {
        self.get(&id).copied()
    }
}

/// Linear lookup. Fine for the small record sets a single playlist holds.
impl Catalog for [Image] {
    fn image(&self, id: ImageId) -> Option<Image> {
        self.iter().find(|img| img.id == id).copied()
    }
}

impl Catalog for Vec<Image> {
    fn image(&self, id: ImageId) -> Option<Image> {
        self.as_slice().image(id)
    }
}

/// Resolve ordered ids to image records, preserving order.
///
/// Ids with no catalog record (deleted or stale images) are dropped.
pub fn resolve<C: Catalog + ?Sized>(ids: &[ImageId], catalog: &C) -> Vec<Image> {
    let mut images = Vec::with_capacity(ids.len());
    for &id in ids {
        match catalog.image(id) {
            Some(img) => images.push(img),
            None => log::debug!("dropping image {id}: not in catalog"),
        }
    }
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn catalog() -> BTreeMap<ImageId, Image> {
        [
            Image::new(1, 1920, 1080),
            Image::new(2, 1080, 1920),
            Image::new(3, 1000, 1000),
        ]
        .into_iter()
        .map(|img| (img.id, img))
        .collect()
    }

    #[test]
    fn resolve_preserves_order() {
        let ids = [ImageId(3), ImageId(1), ImageId(2)];
        let images = resolve(&ids, &catalog());
        let got: Vec<ImageId> = images.iter().map(|i| i.id).collect();
        assert_eq!(got, ids);
    }

    #[test]
    fn resolve_drops_unknown_ids() {
        let ids = [ImageId(1), ImageId(99), ImageId(2), ImageId(42)];
        let images = resolve(&ids, &catalog());
        let got: Vec<ImageId> = images.iter().map(|i| i.id).collect();
        assert_eq!(got, vec![ImageId(1), ImageId(2)]);
    }

    #[test]
    fn resolve_keeps_repeated_ids() {
        let ids = [ImageId(1), ImageId(1)];
        assert_eq!(resolve(&ids, &catalog()).len(), 2);
    }

    #[test]
    fn resolve_empty() {
        assert!(resolve(&[], &catalog()).is_empty());
    }

    #[test]
    fn slice_catalog_lookup() {
        let records = vec![Image::new(7, 800, 600), Image::new(8, 600, 800)];
        assert_eq!(records.image(ImageId(8)), Some(Image::new(8, 600, 800)));
        assert_eq!(records.image(ImageId(9)), None);
        assert_eq!(records.as_slice().image(ImageId(7)).map(|i| i.width), Some(800));
    }

    #[cfg(feature = "std")]
    #[test]
    fn hash_map_catalog_lookup() {
        let map: std::collections::HashMap<ImageId, Image> =
            catalog().into_iter().collect();
        assert_eq!(map.image(ImageId(2)).map(|i| i.height), Some(1920));
        assert_eq!(map.image(ImageId(4)), None);
    }

    #[test]
    fn image_orientation() {
        let cat = catalog();
        assert_eq!(cat[&ImageId(1)].orientation(), ImageOrientation::Landscape);
        assert_eq!(cat[&ImageId(2)].orientation(), ImageOrientation::Portrait);
        assert_eq!(cat[&ImageId(3)].orientation(), ImageOrientation::Portrait);
        let loose = AspectThreshold::new(9, 10).unwrap();
        assert_eq!(
            cat[&ImageId(3)].orientation_with(loose),
            ImageOrientation::Landscape
        );
    }
}
