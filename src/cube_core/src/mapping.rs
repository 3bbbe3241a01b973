//! Mapping between the 2-D raster of a layer and the flat 3-D piece storage.
//!
//! Pieces are stored at `(z * N + y) * N + x` where x runs from left to
//! right, y from back to front and z from top to bottom. A layer is read as a
//! raster of `(col, row)` addresses, left to right and top to bottom as a
//! person looking at the face from outside the cube would read it. Inner
//! layers are read like the outer face on their side of the axis.

use crate::layer::{Axis, Layer};

/// A position in the cube's storage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// The flat storage index of this coordinate on a cube of `size`.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        (self.z * size + self.y) * size + self.x
    }

    /// The inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        let z = index / (size * size);
        let in_slab = index - z * size * size;
        Coord {
            x: in_slab % size,
            y: in_slab / size,
            z,
        }
    }
}

/// The raster of one layer: `begin + row * y_stride + col * x_stride` is the
/// flat index of the piece at `(col, row)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LayerMapping {
    size: usize,
    begin: usize,
    x_stride: isize,
    y_stride: isize,
}

impl LayerMapping {
    /// Compute the raster origin and strides of `layer`.
    ///
    /// Which corner the raster starts in and which way the strides run
    /// depends on the side of the axis the layer is on, so that the near and
    /// far faces (Left and Right, Bottom and Top, Front and Back) both come
    /// out the right way round.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn new(size: usize, layer: Layer) -> Self {
        debug_assert!(layer.depth < size, "{layer:?} is outside a cube of size {size}");

        let depth = layer.depth;
        let last = size - 1;
        let n = size as isize;
        let near = layer.is_near_side(size);
        let at = |x, y, z| Coord::new(x, y, z).index(size);

        let (begin, x_stride, y_stride) = match (layer.axis, near) {
            // columns run back to front, rows run top to bottom
            (Axis::X, true) => (at(depth, 0, 0), n, n * n),
            (Axis::X, false) => (at(depth, last, 0), -n, n * n),
            // columns run left to right, rows run front to back
            (Axis::Y, true) => (at(0, last, last - depth), 1, -n),
            (Axis::Y, false) => (at(0, 0, last - depth), 1, n),
            // rows run top to bottom
            (Axis::Z, true) => (at(0, last - depth, 0), 1, n * n),
            (Axis::Z, false) => (at(last, last - depth, 0), -1, n * n),
        };

        LayerMapping {
            size,
            begin,
            x_stride,
            y_stride,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The flat storage index of the piece at `(col, row)`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn index(&self, col: usize, row: usize) -> usize {
        debug_assert!(col < self.size && row < self.size);

        let offset = row as isize * self.y_stride + col as isize * self.x_stride;
        (self.begin as isize + offset) as usize
    }

    /// The storage coordinate of the piece at `(col, row)`.
    #[must_use]
    pub fn coord(&self, col: usize, row: usize) -> Coord {
        Coord::from_index(self.index(col, row), self.size)
    }

    /// Every `(col, row)` address of the layer with its flat storage index,
    /// row by row.
    pub fn indices(&self) -> impl Iterator<Item = ((usize, usize), usize)> + '_ {
        (0..self.size).flat_map(move |row| {
            (0..self.size).map(move |col| ((col, row), self.index(col, row)))
        })
    }
}
