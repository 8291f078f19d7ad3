//! Shift-click range computation

use std::ops::RangeInclusive;

/// Inclusive index range between the previous anchor and the clicked row.
///
/// Direction-symmetric: `shift_range(2, 5)` and `shift_range(5, 2)` both
/// cover `2..=5`. Indices refer to the rows rendered at click time.
pub fn shift_range(anchor: usize, target: usize) -> RangeInclusive<usize> {
    if target > anchor {
        anchor..=target
    } else {
        target..=anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_backward_are_symmetric() {
        assert_eq!(shift_range(2, 5), 2..=5);
        assert_eq!(shift_range(5, 2), 2..=5);
    }

    #[test]
    fn same_index_is_single_row() {
        let r = shift_range(3, 3);
        assert_eq!(r.clone().count(), 1);
        assert_eq!(*r.start(), 3);
    }

    #[test]
    fn length_is_delta_plus_one() {
        assert_eq!(shift_range(0, 9).count(), 10);
        assert_eq!(shift_range(9, 0).count(), 10);
    }
}
