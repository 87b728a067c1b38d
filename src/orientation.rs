//! Image and display orientation, and the aspect-ratio classifier.
//!
//! Images are tagged `Landscape` or `Portrait` from their pixel dimensions.
//! Near-square images lean portrait: only an aspect ratio strictly greater
//! than the threshold (1.1 by default) counts as landscape.
//!
//! ```
//! use zenpair::{ImageOrientation, classify};
//!
//! assert_eq!(classify(1920, 1080), ImageOrientation::Landscape);
//! assert_eq!(classify(110, 100), ImageOrientation::Portrait);
//! assert_eq!(classify(100, 100), ImageOrientation::Portrait);
//! ```

/// Orientation of an image, derived from its aspect ratio.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImageOrientation {
    /// Wider than the threshold allows for portrait.
    Landscape,
    /// Tall, square, or near-square.
    Portrait,
}

impl ImageOrientation {
    /// Whether images of this orientation can share the screen on `display`.
    pub fn is_pairable_on(self, display: DisplayOrientation) -> bool {
        self == display.pairable()
    }
}

/// Physical orientation of the device a playlist targets.
///
/// Supplied by the caller on every call; nothing in this crate remembers it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DisplayOrientation {
    /// Taller than wide. Pairs landscape images stacked top/bottom.
    Portrait,
    /// Wider than tall. Pairs portrait images side by side.
    Landscape,
}

impl DisplayOrientation {
    /// The image orientation that can be paired on this display.
    ///
    /// Always the orthogonal one: two landscapes stacked fill a portrait
    /// screen, two portraits side by side fill a landscape screen.
    pub const fn pairable(self) -> ImageOrientation {
        match self {
            Self::Portrait => ImageOrientation::Landscape,
            Self::Landscape => ImageOrientation::Portrait,
        }
    }

    /// Derive the display orientation from a panel resolution.
    ///
    /// Square panels are treated as portrait.
    pub const fn from_resolution(width: u32, height: u32) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// Aspect ratio above which an image is classified as landscape.
///
/// Stored as a fraction so the comparison is exact integer arithmetic:
/// `width / height > numerator / denominator` is evaluated as
/// `width * denominator > height * numerator` in `u64`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AspectThreshold {
    numerator: u32,
    denominator: u32,
}

impl AspectThreshold {
    /// The default 1.1 threshold.
    pub const DEFAULT: Self = Self {
        numerator: 11,
        denominator: 10,
    };

    /// Create a threshold of `numerator / denominator`. Returns `None` for a
    /// zero denominator.
    pub const fn new(numerator: u32, denominator: u32) -> Option<Self> {
        if denominator == 0 {
            None
        } else {
            Some(Self {
                numerator,
                denominator,
            })
        }
    }

    /// Numerator of the threshold ratio.
    pub const fn numerator(self) -> u32 {
        self.numerator
    }

    /// Denominator of the threshold ratio.
    pub const fn denominator(self) -> u32 {
        self.denominator
    }

    /// The threshold as a float, for display.
    pub fn ratio(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Classify `width × height` against this threshold.
    ///
    /// `height` must be non-zero. A zero height is not guarded: every
    /// positive width then compares as landscape.
    pub const fn classify(self, width: u32, height: u32) -> ImageOrientation {
        let lhs = width as u64 * self.denominator as u64;
        let rhs = height as u64 * self.numerator as u64;
        if lhs > rhs {
            ImageOrientation::Landscape
        } else {
            ImageOrientation::Portrait
        }
    }
}

impl Default for AspectThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Classify image dimensions with the default 1.1 threshold.
pub const fn classify(width: u32, height: u32) -> ImageOrientation {
    AspectThreshold::DEFAULT.classify(width, height)
}
