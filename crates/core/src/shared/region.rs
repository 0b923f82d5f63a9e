/// An axis-aligned face rectangle in source-image pixel coordinates.
///
/// Detectors report regions inside the image, but consumers still clip
/// through [`Region::clip_to`] so a bad rectangle can never index out of
/// bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// A region clipped to image bounds, in unsigned pixel units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClippedRegion {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Intersects the region with a `width` x `height` image.
    ///
    /// Returns `None` when nothing of the region lies inside the image.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<ClippedRegion> {
        let x1 = self.x.max(0) as i64;
        let y1 = self.y.max(0) as i64;
        let x2 = (self.right() as i64).min(width as i64);
        let y2 = (self.bottom() as i64).min(height as i64);

        if x2 <= x1 || y2 <= y1 {
            return None;
        }
        Some(ClippedRegion {
            x: x1 as usize,
            y: y1 as usize,
            width: (x2 - x1) as usize,
            height: (y2 - y1) as usize,
        })
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}
