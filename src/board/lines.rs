//! Catalogue of winning lines
//!
//! A line is a fixed window of `size` cells: one row, one column or one of the
//! two full diagonals. The catalogue is built once per board size and shared
//! read-only between board copies.

use std::sync::Arc;

use super::Pos;

/// One line of cells, in scan order
pub type Line = Box<[Pos]>;

/// Immutable, shareable set of lines for a board size
#[derive(Debug, Clone)]
pub struct LineCatalogue {
    size: usize,
    lines: Arc<[Line]>,
}

impl LineCatalogue {
    /// Build all rows, all columns and both diagonals (`2 * size + 2` lines)
    pub fn new(size: usize) -> Self {
        let mut lines: Vec<Line> = Vec::with_capacity(2 * size + 2);

        for row in 0..size {
            lines.push((0..size).map(|col| Pos::new(row as u8, col as u8)).collect());
        }
        for col in 0..size {
            lines.push((0..size).map(|row| Pos::new(row as u8, col as u8)).collect());
        }

        // Main diagonal, then anti-diagonal starting at the top-right corner
        lines.push((0..size).map(|i| Pos::new(i as u8, i as u8)).collect());
        lines.push(
            (0..size)
                .map(|i| Pos::new(i as u8, (size - 1 - i) as u8))
                .collect(),
        );

        Self {
            size,
            lines: lines.into(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Whether two catalogues share the same storage
    #[inline]
    pub fn shares_storage(&self, other: &LineCatalogue) -> bool {
        Arc::ptr_eq(&self.lines, &other.lines)
    }
}

impl<'a> IntoIterator for &'a LineCatalogue {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_line_count() {
        for size in 1..=8 {
            let catalogue = LineCatalogue::new(size);
            assert_eq!(catalogue.len(), 2 * size + 2);
            assert!(catalogue.iter().all(|line| line.len() == size));
        }
    }

    #[test]
    fn test_diagonals() {
        let catalogue = LineCatalogue::new(5);
        let lines: Vec<_> = catalogue.iter().collect();

        let main: Vec<Pos> = (0..5).map(|i| Pos::new(i, i)).collect();
        let anti: Vec<Pos> = (0..5).map(|i| Pos::new(i, 4 - i)).collect();
        assert!(lines.iter().any(|l| l[..] == main[..]));
        assert!(lines.iter().any(|l| l[..] == anti[..]));
    }

    #[test]
    fn test_lines_are_distinct() {
        let catalogue = LineCatalogue::new(5);
        let unique: HashSet<Vec<Pos>> = catalogue.iter().map(|l| l.to_vec()).collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn test_clone_shares_storage() {
        let catalogue = LineCatalogue::new(5);
        let copy = catalogue.clone();
        assert!(catalogue.shares_storage(&copy));
        assert!(!catalogue.shares_storage(&LineCatalogue::new(5)));
    }
}
