/// Cyclic position among the overlay's markers, with an "unstarted"
/// sentinel before the first advance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationCursor {
    index: Option<usize>,
    total: usize,
}

impl NavigationCursor {
    /// Unstarted cursor over `total` markers; the first advance lands on
    /// marker 0.
    pub fn new(total: usize) -> Self {
        Self { index: None, total }
    }

    /// Step to the next marker, wrapping at the end. Returns the marker to
    /// focus, or None when there is nothing to navigate.
    pub fn advance(&mut self) -> Option<usize> {
        if self.total == 0 {
            return None;
        }
        let next = match self.index {
            None => 0,
            Some(i) => (i + 1) % self.total,
        };
        self.index = Some(next);
        Some(next)
    }

    /// Back to the unstarted sentinel with no markers; called whenever the
    /// overlay is regenerated or cleared.
    pub fn reset(&mut self) {
        self.index = None;
        self.total = 0;
    }

    pub fn current(&self) -> Option<usize> {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// One-based `(current, total)` for the status readout, once started.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.index.map(|i| (i + 1, self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_advance_lands_on_zero() {
        let mut cursor = NavigationCursor::new(3);
        assert_eq!(cursor.advance(), Some(0));
    }

    #[test]
    fn test_advance_wraps_cyclically() {
        let mut cursor = NavigationCursor::new(2);
        assert_eq!(cursor.advance(), Some(0));
        assert_eq!(cursor.advance(), Some(1));
        assert_eq!(cursor.advance(), Some(0));
    }

    #[test]
    fn test_k_advances_land_on_k_minus_one_mod_total() {
        let mut cursor = NavigationCursor::new(3);
        let mut last = None;
        for _ in 0..7 {
            last = cursor.advance();
        }
        assert_eq!(last, Some((7 - 1) % 3));
    }

    #[test]
    fn test_advance_with_no_markers_is_a_noop() {
        let mut cursor = NavigationCursor::new(0);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_reset_returns_to_sentinel() {
        let mut cursor = NavigationCursor::new(4);
        cursor.advance();
        cursor.reset();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.total(), 0);
        assert_eq!(cursor.position(), None);
    }

    #[test]
    fn test_position_is_one_based() {
        let mut cursor = NavigationCursor::new(5);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), Some((2, 5)));
    }
}
