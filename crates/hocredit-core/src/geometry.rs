//! WordBox, LineBox, BBox - rectangle regions
//!
//! [`WordBox`] is the `{x, y, width, height}` rectangle produced by the
//! segmentation engine. [`BBox`] is the corner form `(x1, y1, x2, y2)` used
//! by hOCR `title="bbox ..."` attributes. [`LineBox`] is an ordered run of
//! words with their union rectangle.
//!
//! All coordinates are image pixels with the origin at the top-left.
//! Right and bottom edges are exclusive.

use serde::{Deserialize, Serialize};

/// An axis-aligned word rectangle
///
/// Small and frequently copied, so this is a plain `Copy` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WordBox {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl WordBox {
    /// Create a new box without validation
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a box from inclusive pixel extents, as tracked during a fill
    pub fn from_extents(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            x: min_x as i32,
            y: min_y as i32,
            width: (max_x - min_x + 1) as i32,
            height: (max_y - min_y + 1) as i32,
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Check that both dimensions are strictly positive
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Check if this box contains another box
    pub fn contains_box(&self, other: &WordBox) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Closed-interval test on the vertical spans `[y, bottom]`
    ///
    /// Boxes that merely touch (one's bottom equals the other's top) count
    /// as overlapping.
    #[inline]
    pub fn overlaps_vertically(&self, other: &WordBox) -> bool {
        other.y <= self.bottom() && other.bottom() >= self.y
    }

    /// Horizontal gap from this box's right edge to `other`'s left edge
    ///
    /// Zero when `other` starts exactly at this box's right edge; negative
    /// when `other` starts to the left of it.
    #[inline]
    pub fn horizontal_gap_to(&self, other: &WordBox) -> i32 {
        other.x - self.right()
    }

    /// Compute the union (bounding box) of two boxes
    pub fn union(&self, other: &WordBox) -> WordBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        WordBox {
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }

    /// Union of a sequence of boxes, or `None` if it is empty
    pub fn union_all<'a, I>(boxes: I) -> Option<WordBox>
    where
        I: IntoIterator<Item = &'a WordBox>,
    {
        boxes
            .into_iter()
            .fold(None, |acc: Option<WordBox>, b| match acc {
                None => Some(*b),
                Some(u) => Some(u.union(b)),
            })
    }

    /// Convert to corner form
    pub fn to_bbox(&self) -> BBox {
        BBox {
            x1: self.x,
            y1: self.y,
            x2: self.right(),
            y2: self.bottom(),
        }
    }
}

/// Corner-form rectangle, as written in hOCR `bbox x1 y1 x2 y2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BBox {
    /// Convert to a [`WordBox`], or `None` if the corners describe an empty
    /// or inverted rectangle
    pub fn to_word_box(&self) -> Option<WordBox> {
        let b = WordBox::new(self.x1, self.y1, self.x2 - self.x1, self.y2 - self.y1);
        b.is_valid().then_some(b)
    }
}

/// A text line: words ordered left-to-right plus their union rectangle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineBox {
    /// Member words, left-to-right
    pub words: Vec<WordBox>,
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl LineBox {
    /// Build a line from its words
    ///
    /// Degenerate words are dropped and the rest are ordered left-to-right
    /// (stable on ties). Returns `None` if no valid word remains.
    pub fn from_words(words: Vec<WordBox>) -> Option<LineBox> {
        let mut words: Vec<WordBox> = words.into_iter().filter(WordBox::is_valid).collect();
        words.sort_by_key(|w| w.x);
        let bounds = WordBox::union_all(&words)?;
        Some(LineBox {
            words,
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
        })
    }

    /// The line rectangle as a [`WordBox`]
    pub fn bounds(&self) -> WordBox {
        WordBox::new(self.x, self.y, self.width, self.height)
    }

    /// Number of words in the line
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the line has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extents_is_inclusive() {
        let b = WordBox::from_extents(3, 4, 3, 4);
        assert_eq!(b, WordBox::new(3, 4, 1, 1));
        let b = WordBox::from_extents(10, 20, 29, 34);
        assert_eq!((b.width, b.height), (20, 15));
    }

    #[test]
    fn test_vertical_overlap_is_closed() {
        let a = WordBox::new(0, 0, 10, 10);
        // Touching at y = 10
        assert!(a.overlaps_vertically(&WordBox::new(20, 10, 10, 10)));
        assert!(WordBox::new(20, 10, 10, 10).overlaps_vertically(&a));
        assert!(!a.overlaps_vertically(&WordBox::new(20, 11, 10, 10)));
    }

    #[test]
    fn test_horizontal_gap() {
        let a = WordBox::new(0, 0, 10, 10);
        assert_eq!(a.horizontal_gap_to(&WordBox::new(10, 0, 5, 5)), 0);
        assert_eq!(a.horizontal_gap_to(&WordBox::new(13, 0, 5, 5)), 3);
        assert_eq!(a.horizontal_gap_to(&WordBox::new(5, 0, 5, 5)), -5);
    }

    #[test]
    fn test_union_all() {
        assert_eq!(WordBox::union_all(&[]), None);
        let boxes = [WordBox::new(5, 5, 10, 10), WordBox::new(0, 8, 3, 20)];
        assert_eq!(WordBox::union_all(&boxes), Some(WordBox::new(0, 5, 15, 23)));
    }

    #[test]
    fn test_bbox_conversion() {
        let b = WordBox::new(2, 3, 10, 20);
        let bb = b.to_bbox();
        assert_eq!(
            bb,
            BBox {
                x1: 2,
                y1: 3,
                x2: 12,
                y2: 23
            }
        );
        assert_eq!(bb.to_word_box(), Some(b));
        let inverted = BBox {
            x1: 5,
            y1: 5,
            x2: 5,
            y2: 9,
        };
        assert_eq!(inverted.to_word_box(), None);
    }

    #[test]
    fn test_line_from_words_drops_degenerate() {
        let line = LineBox::from_words(vec![
            WordBox::new(0, 0, 10, 10),
            WordBox::new(50, 0, 0, 10),
            WordBox::new(20, 2, 10, 10),
        ])
        .unwrap();
        assert_eq!(line.len(), 2);
        assert_eq!(line.bounds(), WordBox::new(0, 0, 30, 12));
        for w in &line.words {
            assert!(line.bounds().contains_box(w));
        }

        assert!(LineBox::from_words(vec![WordBox::new(0, 0, -1, 4)]).is_none());

        let line = LineBox::from_words(vec![WordBox::new(40, 0, 5, 5), WordBox::new(3, 1, 5, 5)])
            .unwrap();
        assert_eq!(line.words[0].x, 3);
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&WordBox::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2,"width":3,"height":4}"#);
    }
}
