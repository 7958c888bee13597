use crate::error::{MazeError, Result};

/// Row-major flat grid. Cells are addressed by `index = y * w + x`.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub w: usize,
    pub h: usize,
}

impl<T: Copy + Default> Grid<T> {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            data: vec![T::default(); w * h],
            w,
            h,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        y * self.w + x
    }

    /// Inverse of [`idx`](Self::idx).
    #[inline]
    pub fn coords(&self, i: usize) -> (usize, usize) {
        (i % self.w, i / self.w)
    }

    /// Bounds-checked access by coordinates. Rejects `x >= w` instead of
    /// wrapping into the next row.
    pub fn get(&self, x: usize, y: usize) -> Result<T> {
        if x < self.w && y < self.h {
            self.at(self.idx(x, y))
        } else {
            Err(MazeError::OutOfRange {
                index: y.saturating_mul(self.w).saturating_add(x),
                len: self.data.len(),
            })
        }
    }

    /// Bounds-checked access by flat index.
    pub fn at(&self, i: usize) -> Result<T> {
        self.data.get(i).copied().ok_or(MazeError::OutOfRange {
            index: i,
            len: self.data.len(),
        })
    }

    pub fn at_mut(&mut self, i: usize) -> Result<&mut T> {
        let len = self.data.len();
        self.data
            .get_mut(i)
            .ok_or(MazeError::OutOfRange { index: i, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        let g = Grid::<u8>::new(3, 3);
        assert_eq!(g.idx(2, 1), 5);
        assert_eq!(g.coords(5), (2, 1));
        assert_eq!(g.coords(8), (2, 2));
    }

    #[test]
    fn flat_access_is_checked() {
        let mut g = Grid::<u8>::new(2, 2);
        *g.at_mut(3).unwrap() = 7;
        assert_eq!(g.get(1, 1).unwrap(), 7);
        assert_eq!(g.at(3).unwrap(), 7);
        assert_eq!(g.at(4), Err(MazeError::OutOfRange { index: 4, len: 4 }));
        assert!(g.at_mut(4).is_err());
    }

    #[test]
    fn coordinates_do_not_wrap() {
        let mut g = Grid::<u8>::new(3, 3);
        *g.at_mut(3).unwrap() = 9;
        // (3, 0) would alias cell (0, 1) if only the flat index were checked.
        assert!(matches!(g.get(3, 0), Err(MazeError::OutOfRange { .. })));
        assert!(g.get(0, 3).is_err());
        assert!(g.get(usize::MAX, usize::MAX).is_err());
        assert_eq!(g.get(0, 1).unwrap(), 9);
    }
}
