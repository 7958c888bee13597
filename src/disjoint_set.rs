use std::fmt;

use crate::error::{MazeError, Result};

/// Union-find over `0..n` stored as a flat array.
///
/// A negative entry marks a root and holds the negated component size.
/// A non-negative entry is the parent index.
#[derive(Clone)]
pub struct DisjointSet {
    nodes: Vec<i32>,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        debug_assert!(n >= 1 && n <= i32::MAX as usize);
        Self { nodes: vec![-1; n] }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    fn check(&self, x: usize) -> Result<()> {
        if x < self.nodes.len() {
            Ok(())
        } else {
            Err(MazeError::OutOfRange {
                index: x,
                len: self.nodes.len(),
            })
        }
    }

    fn root_unchecked(&self, mut x: usize) -> usize {
        while self.nodes[x] >= 0 {
            x = self.nodes[x] as usize;
        }
        x
    }

    /// Representative of `x`'s component. Every node on the walked path is
    /// relinked straight to the root.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        let root = self.root_unchecked(x);

        let mut node = x;
        while self.nodes[node] >= 0 {
            let parent = self.nodes[node] as usize;
            self.nodes[node] = root as i32;
            node = parent;
        }

        Ok(root)
    }

    /// Same answer as [`find`](Self::find) without compressing, so it works on a
    /// shared reference.
    pub fn root_of(&self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.root_unchecked(x))
    }

    pub fn size_of(&self, x: usize) -> Result<usize> {
        let root = self.root_of(x)?;
        Ok((-self.nodes[root]) as usize)
    }

    pub fn connected(&self, x: usize, y: usize) -> Result<bool> {
        Ok(self.root_of(x)? == self.root_of(y)?)
    }

    /// Merge the components of `x` and `y` by size and return the surviving root.
    /// On equal sizes `y`'s root goes under `x`'s.
    pub fn union(&mut self, x: usize, y: usize) -> Result<usize> {
        self.check(x)?;
        self.check(y)?;
        let rx = self.find(x)?;
        let ry = self.find(y)?;
        if rx == ry {
            return Ok(rx);
        }

        // More negative = larger component.
        if self.nodes[ry] < self.nodes[rx] {
            self.nodes[ry] += self.nodes[rx];
            self.nodes[rx] = ry as i32;
            Ok(ry)
        } else {
            self.nodes[rx] += self.nodes[ry];
            self.nodes[ry] = rx as i32;
            Ok(rx)
        }
    }

    pub fn component_count(&self) -> usize {
        self.nodes.iter().filter(|&&v| v < 0).count()
    }

    pub fn is_fully_connected(&self) -> bool {
        self.component_count() == 1
    }
}

impl fmt::Debug for DisjointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.nodes.iter()).finish()
    }
}
