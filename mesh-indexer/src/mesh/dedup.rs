//! Exact duplicate triangle filter

use hashbrown::HashSet;

/// Three local vertex indices in winding order
pub type Triangle = [u32; 3];

/// Drops triangles whose ordered index triple was already accepted
///
/// Comparison is winding-sensitive: `[a, b, c]` and `[b, c, a]` are distinct.
#[derive(Debug, Default)]
pub struct TriangleDeduplicator {
    known: HashSet<Triangle>,
}

impl TriangleDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the triangle; false if this exact triple was seen before
    pub fn accept(&mut self, triangle: Triangle) -> bool {
        self.known.insert(triangle)
    }

    /// Number of distinct triangles accepted
    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_duplicate_rejected() {
        let mut dedup = TriangleDeduplicator::new();
        assert!(dedup.accept([0, 1, 2]));
        assert!(!dedup.accept([0, 1, 2]));
        assert_eq!(dedup.len(), 1);
    }

    #[test]
    fn test_rotation_is_distinct() {
        let mut dedup = TriangleDeduplicator::new();
        assert!(dedup.accept([0, 1, 2]));
        assert!(dedup.accept([1, 2, 0]));
        assert!(dedup.accept([2, 0, 1]));
        assert_eq!(dedup.len(), 3);
    }

    #[test]
    fn test_reversed_winding_is_distinct() {
        let mut dedup = TriangleDeduplicator::new();
        assert!(dedup.accept([0, 1, 2]));
        assert!(dedup.accept([0, 2, 1]));
    }
}
