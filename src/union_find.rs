use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnionFindError {
    #[error("element {index} is out of bounds for {len} elements")]
    OutOfBounds { index: usize, len: usize },
}

/// Disjoint sets over the dense range `0..n`, union by size with path halving.
///
/// Lookups compress paths, so `find` and `connected` need `&mut self` too.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    groups: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> UnionFind {
        UnionFind {
            parent: (0..n).collect(),
            size: vec![1; n],
            groups: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.groups
    }

    /// Raw parent pointers. Only roots are guaranteed to point at themselves.
    pub fn parents(&self) -> &[usize] {
        &self.parent
    }

    fn check(&self, x: usize) -> Result<(), UnionFindError> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(UnionFindError::OutOfBounds { index: x, len: self.parent.len() })
        }
    }

    pub fn find(&mut self, x: usize) -> Result<usize, UnionFindError> {
        self.check(x)?;
        Ok(self.root(x))
    }

    fn root(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool, UnionFindError> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.root(a) == self.root(b))
    }

    /// Merges the groups of `a` and `b`. Returns `false` if they already were one group.
    ///
    /// The smaller group goes under the larger one; on a tie `b`'s root goes under `a`'s.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool, UnionFindError> {
        self.check(a)?;
        self.check(b)?;
        let ra = self.root(a);
        let rb = self.root(b);
        if ra == rb {
            return Ok(false);
        }
        let (big, small) = if self.size[ra] < self.size[rb] { (rb, ra) } else { (ra, rb) };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.groups -= 1;
        Ok(true)
    }

    pub fn group_size(&mut self, x: usize) -> Result<usize, UnionFindError> {
        let r = self.find(x)?;
        Ok(self.size[r])
    }
}
