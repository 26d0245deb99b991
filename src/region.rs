use crate::color::{BLACK, Rgb};
use crate::frame::{Canvas, FrameBuffer};

/// Rectangular sub-area of the matrix owned by one producer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region covering a whole `width` x `height` matrix
    pub const fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    /// One of the four quadrants of a matrix, numbered row-major:
    /// 0 top-left, 1 top-right, 2 bottom-left, 3 bottom-right.
    ///
    /// Indices above 3 wrap around.
    pub const fn quadrant(index: usize, width: usize, height: usize) -> Self {
        let half_w = width / 2;
        let half_h = height / 2;
        let column = index % 2;
        let row = (index / 2) % 2;
        Self::new(column * half_w, row * half_h, half_w, half_h)
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check whether an absolute coordinate falls inside the region
    pub const fn contains(self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub const fn overlaps(self, other: Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Returns true when no two regions in the list overlap
    pub fn are_disjoint(regions: &[Self]) -> bool {
        regions.iter().enumerate().all(|(i, a)| {
            regions
                .iter()
                .skip(i + 1)
                .all(|b| !a.overlaps(*b))
        })
    }

    /// Cut the region down to what fits in a `width` x `height` matrix
    pub const fn clipped(self, width: usize, height: usize) -> Self {
        let x = if self.x < width { self.x } else { width };
        let y = if self.y < height { self.y } else { height };
        let max_w = width - x;
        let max_h = height - y;
        Self::new(
            x,
            y,
            if self.width < max_w { self.width } else { max_w },
            if self.height < max_h { self.height } else { max_h },
        )
    }
}

/// Bounds-checked window over a [`FrameBuffer`].
///
/// Coordinates are local to the region. Anything outside it reads as
/// black and ignores writes, so a producer holding a view cannot touch
/// pixels it does not own.
pub struct RegionView<'a, const W: usize, const H: usize> {
    frame: &'a mut FrameBuffer<W, H>,
    region: Region,
}

impl<'a, const W: usize, const H: usize> RegionView<'a, W, H> {
    pub(crate) fn new(frame: &'a mut FrameBuffer<W, H>, region: Region) -> Self {
        Self {
            frame,
            region: region.clipped(W, H),
        }
    }

    /// The region this view covers, clipped to the matrix
    pub const fn region(&self) -> Region {
        self.region
    }

    fn to_absolute(&self, x: i32, y: i32) -> Option<(i32, i32)> {
        let local_x = usize::try_from(x).ok()?;
        let local_y = usize::try_from(y).ok()?;
        if local_x >= self.region.width || local_y >= self.region.height {
            return None;
        }
        let abs_x = i32::try_from(self.region.x + local_x).ok()?;
        let abs_y = i32::try_from(self.region.y + local_y).ok()?;
        Some((abs_x, abs_y))
    }
}

impl<const W: usize, const H: usize> Canvas for RegionView<'_, W, H> {
    fn width(&self) -> usize {
        self.region.width
    }

    fn height(&self) -> usize {
        self.region.height
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some((x, y)) = self.to_absolute(x, y) {
            self.frame.set_pixel(x, y, color);
        }
    }

    fn get_pixel(&self, x: i32, y: i32) -> Rgb {
        match self.to_absolute(x, y) {
            Some((x, y)) => self.frame.get_pixel(x, y),
            None => BLACK,
        }
    }
}
