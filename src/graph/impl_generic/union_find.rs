//! Disjoint-set forest with union by size.

/// Union-Find data structure with union by size.
///
/// `find` is a pure query; `union` halves the paths it walks, which shortens
/// later chains without changing which root `find` reports.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Root of the set containing `p`.
    ///
    /// # Panics
    /// If `p >= self.len()`.
    pub fn find(&self, mut p: usize) -> usize {
        while p != self.parent[p] {
            p = self.parent[p];
        }
        p
    }

    /// Whether `p` and `q` belong to the same set.
    pub fn connected(&self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Number of elements in the set containing `p`.
    pub fn set_size(&self, p: usize) -> usize {
        self.size[self.find(p)]
    }

    /// Merge the sets containing `p` and `q`.
    ///
    /// Returns `false` if they were already in the same set. On equal sizes
    /// the root of `q` goes under the root of `p`.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let i = self.find_halving(p);
        let j = self.find_halving(q);

        if i == j {
            return false;
        }

        if self.size[i] < self.size[j] {
            self.parent[i] = j;
            self.size[j] += self.size[i];
        } else {
            self.parent[j] = i;
            self.size[i] += self.size[j];
        }

        self.count -= 1;
        true
    }

    fn find_halving(&mut self, mut p: usize) -> usize {
        while p != self.parent[p] {
            let grandparent = self.parent[self.parent[p]];
            self.parent[p] = grandparent;
            p = grandparent;
        }
        p
    }
}
