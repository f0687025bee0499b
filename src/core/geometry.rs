// Viewport/element band geometry and the four visibility comparison modes.
//
// All values are CSS pixels in document coordinates, so results are a pure
// function of the scroll offset, viewport height and the measured element.

use super::constants::{DEFAULT_OFFSET_PX, DEFAULT_THRESHOLD};

/// The visible slice of the document: `[scroll_top, scroll_top + height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, height: f64) -> Self {
        Self { scroll_top, height }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.scroll_top + self.height
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.scroll_top + self.height * 0.5
    }
}

/// Vertical extent an element occupies in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub top: f64,
    pub bottom: f64,
}

impl Band {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    /// Build a document band from a viewport-relative bounding rect top.
    #[inline]
    pub fn from_client_rect(viewport: &Viewport, rect_top: f64, rect_height: f64) -> Self {
        Self::new(viewport.scroll_top + rect_top, rect_height)
    }
}

/// How an element band is compared against the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Any overlap between viewport and element, expanded by the offset.
    Overlap,
    /// Viewport center line falls within the element (± offset).
    Center,
    /// Threshold-shrunk inner band overlaps the element (± offset).
    InnerOverlap,
    /// Element is inside, or straddles an edge of, the threshold-shrunk band.
    #[default]
    InnerBand,
}

impl Mode {
    /// Map the legacy 1-4 numbering; anything else falls back to the default.
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => Mode::Overlap,
            2 => Mode::Center,
            3 => Mode::InnerOverlap,
            _ => Mode::InnerBand,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Mode::Overlap => 1,
            Mode::Center => 2,
            Mode::InnerOverlap => 3,
            Mode::InnerBand => 4,
        }
    }

    pub fn is_visible(
        self,
        viewport: &Viewport,
        element: &Band,
        threshold: f64,
        offset: f64,
    ) -> bool {
        match self {
            Mode::Overlap => overlap(viewport, element, offset),
            Mode::Center => center(viewport, element, offset),
            Mode::InnerOverlap => inner_overlap(viewport, element, threshold, offset),
            Mode::InnerBand => inner_band(viewport, element, threshold),
        }
    }
}

fn overlap(viewport: &Viewport, element: &Band, offset: f64) -> bool {
    viewport.bottom() > element.top - offset && viewport.scroll_top < element.bottom + offset
}

fn center(viewport: &Viewport, element: &Band, offset: f64) -> bool {
    let c = viewport.center();
    c > element.top - offset && c < element.bottom + offset
}

fn inner_overlap(viewport: &Viewport, element: &Band, threshold: f64, offset: f64) -> bool {
    let a = viewport.scroll_top + viewport.height * threshold;
    let b = viewport.scroll_top + viewport.height * (1.0 - threshold);
    b > element.top - offset && a < element.bottom + offset
}

// Offset is not applied in this mode.
fn inner_band(viewport: &Viewport, element: &Band, threshold: f64) -> bool {
    let vt = viewport.scroll_top + viewport.height * threshold;
    let vb = viewport.bottom() - viewport.height * threshold;
    let contained = element.top >= vt && element.bottom <= vb;
    let straddles_top = element.top <= vt && element.bottom >= vt;
    let straddles_bottom = element.top <= vb && element.bottom >= vb;
    contained || straddles_top || straddles_bottom
}

/// Comparison parameters attached to a watched item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rule {
    pub mode: Mode,
    pub threshold: f64,
    pub offset: f64,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            threshold: DEFAULT_THRESHOLD,
            offset: DEFAULT_OFFSET_PX,
        }
    }
}

impl Rule {
    #[inline]
    pub fn is_visible(&self, viewport: &Viewport, element: &Band) -> bool {
        self.mode
            .is_visible(viewport, element, self.threshold, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_index_maps_to_inner_band() {
        assert_eq!(Mode::from_index(0), Mode::InnerBand);
        assert_eq!(Mode::from_index(9), Mode::InnerBand);
        for i in 1..=4 {
            assert_eq!(Mode::from_index(i).index(), i);
        }
    }

    #[test]
    fn client_rect_is_shifted_by_scroll() {
        let vp = Viewport::new(300.0, 800.0);
        let band = Band::from_client_rect(&vp, 100.0, 40.0);
        assert_eq!(band, Band { top: 400.0, bottom: 440.0 });
    }
}
