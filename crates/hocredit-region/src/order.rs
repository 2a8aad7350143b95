//! Reading-order sort
//!
//! Boxes on one printed line rarely share an exact top edge, so a plain
//! `(y, x)` sort interleaves neighbouring lines. Boxes are instead bucketed
//! into rows: sorted by `y`, a box opens a new row when its `y` is at least
//! `row_threshold(anchor)` below the row's first box (the anchor).
//! The final order is `(row, x, y)`.
//!
//! Bucketing against a fixed anchor keeps the ordering total, which a
//! pairwise "same row if |dy| < t" comparator is not.

use hocredit_core::WordBox;

/// Sort `boxes` top-to-bottom by row, then left-to-right within a row
pub fn sort_into_rows<F>(boxes: &mut [WordBox], row_threshold: F)
where
    F: Fn(&WordBox) -> i32,
{
    if boxes.len() < 2 {
        return;
    }
    boxes.sort_by_key(|b| (b.y, b.x));

    let mut keyed: Vec<(usize, WordBox)> = Vec::with_capacity(boxes.len());
    let mut row = 0usize;
    let mut anchor = boxes[0];
    keyed.push((row, anchor));
    for b in &boxes[1..] {
        if b.y - anchor.y >= row_threshold(&anchor) {
            row += 1;
            anchor = *b;
        }
        keyed.push((row, *b));
    }
    keyed.sort_by_key(|(row, b)| (*row, b.x, b.y));

    for (slot, (_, b)) in boxes.iter_mut().zip(keyed) {
        *slot = b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_then_columns() {
        let mut boxes = vec![
            WordBox::new(100, 52, 10, 10),
            WordBox::new(0, 5, 10, 10),
            WordBox::new(50, 0, 10, 10),
            WordBox::new(10, 50, 10, 10),
        ];
        sort_into_rows(&mut boxes, |_| 10);
        let xy: Vec<_> = boxes.iter().map(|b| (b.x, b.y)).collect();
        assert_eq!(xy, vec![(0, 5), (50, 0), (10, 50), (100, 52)]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut boxes = vec![WordBox::new(50, 0, 10, 10), WordBox::new(0, 10, 10, 10)];
        sort_into_rows(&mut boxes, |_| 10);
        assert_eq!(boxes[0].y, 0);

        let mut boxes = vec![WordBox::new(50, 0, 10, 10), WordBox::new(0, 9, 10, 10)];
        sort_into_rows(&mut boxes, |_| 10);
        assert_eq!(boxes[0].x, 0);
    }

    #[test]
    fn test_zero_threshold_degrades_to_plain_sort() {
        let mut boxes = vec![
            WordBox::new(30, 4, 1, 1),
            WordBox::new(20, 4, 1, 1),
            WordBox::new(10, 5, 1, 1),
        ];
        sort_into_rows(&mut boxes, |_| 0);
        let xy: Vec<_> = boxes.iter().map(|b| (b.x, b.y)).collect();
        assert_eq!(xy, vec![(20, 4), (30, 4), (10, 5)]);
    }
}
