//! Connected component analysis
//!
//! Text pixels are grouped into connected components by flood fill. The
//! fill keeps pending coordinates on an explicit stack instead of
//! recursing, so a page-sized blob cannot exhaust the call stack.
//!
//! Components are reported in the row-major scan order of their first
//! (top-most, then left-most) pixel, which makes the output reproducible.

use crate::classify::{ClassifierOptions, TextMask, classify_grid};
use crate::error::{RegionError, RegionResult};
use hocredit_core::{PixelGrid, WordBox};
use serde::{Deserialize, Serialize};

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

const FOUR_WAY: [(i64, i64); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

const EIGHT_WAY: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl ConnectivityType {
    /// Neighbor offsets `(dx, dy)` for this connectivity
    pub fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            ConnectivityType::FourWay => &FOUR_WAY,
            ConnectivityType::EightWay => &EIGHT_WAY,
        }
    }
}

/// A connected component in an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Label, 1-based, in discovery order
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u32,
    /// Bounding box of this component
    pub bounds: WordBox,
}

impl ConnectedComponent {
    /// Create a new connected component
    pub fn new(label: u32, pixel_count: u32, bounds: WordBox) -> Self {
        Self {
            label,
            pixel_count,
            bounds,
        }
    }
}

/// Per-invocation record of pixels already assigned to a component
#[derive(Debug, Clone)]
pub struct VisitedMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl VisitedMask {
    /// Create an all-unvisited mask
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    /// Whether `(x, y)` has been visited
    #[inline]
    pub fn is_visited(&self, x: u32, y: u32) -> bool {
        self.bits[self.index(x, y)]
    }

    /// Mark `(x, y)`; returns `false` if it was already marked
    #[inline]
    pub fn mark(&mut self, x: u32, y: u32) -> bool {
        let i = self.index(x, y);
        !std::mem::replace(&mut self.bits[i], true)
    }
}

/// Find all connected components of text pixels in `grid`
///
/// # Errors
///
/// Returns [`RegionError::EmptyImage`] if the grid has a zero dimension.
pub fn find_connected_components<G: PixelGrid + ?Sized>(
    grid: &G,
    classifier: &ClassifierOptions,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<ConnectedComponent>> {
    if grid.is_empty() {
        return Err(RegionError::EmptyImage {
            width: grid.width(),
            height: grid.height(),
        });
    }
    let mask = classify_grid(grid, classifier);
    Ok(components_from_mask(&mask, connectivity))
}

/// Find connected components and return their bounding boxes
///
/// Unfiltered: one box per blob, in discovery order.
pub fn find_word_components<G: PixelGrid + ?Sized>(
    grid: &G,
    classifier: &ClassifierOptions,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<WordBox>> {
    Ok(find_connected_components(grid, classifier, connectivity)?
        .into_iter()
        .map(|c| c.bounds)
        .collect())
}

/// Label the components of a precomputed text mask
pub fn components_from_mask(
    mask: &TextMask,
    connectivity: ConnectivityType,
) -> Vec<ConnectedComponent> {
    let (width, height) = (mask.width(), mask.height());
    let mut visited = VisitedMask::new(width, height);
    let mut stack: Vec<(u32, u32)> = Vec::new();
    let mut components = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if !mask.is_text(x, y) || visited.is_visited(x, y) {
                continue;
            }

            visited.mark(x, y);
            stack.push((x, y));
            let (mut min_x, mut min_y, mut max_x, mut max_y) = (x, y, x, y);
            let mut pixel_count = 0u32;

            while let Some((cx, cy)) = stack.pop() {
                pixel_count += 1;
                min_x = min_x.min(cx);
                max_x = max_x.max(cx);
                min_y = min_y.min(cy);
                max_y = max_y.max(cy);

                for &(dx, dy) in connectivity.offsets() {
                    let nx = cx as i64 + dx;
                    let ny = cy as i64 + dy;
                    if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                        continue;
                    }
                    let (nx, ny) = (nx as u32, ny as u32);
                    // Marking on push keeps each pixel on the stack at most once
                    if mask.is_text(nx, ny) && visited.mark(nx, ny) {
                        stack.push((nx, ny));
                    }
                }
            }

            let label = components.len() as u32 + 1;
            let bounds = WordBox::from_extents(min_x, min_y, max_x, max_y);
            log::trace!("component {label}: {pixel_count} px, {bounds:?}");
            components.push(ConnectedComponent::new(label, pixel_count, bounds));
        }
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use hocredit_core::{Color, Raster};

    fn create_test_image(width: u32, height: u32, pixels: &[(u32, u32)]) -> Raster {
        let mut page = Raster::new_gray(width, height).unwrap();
        for &(x, y) in pixels {
            page.set(x, y, Color::BLACK).unwrap();
        }
        page
    }

    fn find(page: &Raster, connectivity: ConnectivityType) -> Vec<ConnectedComponent> {
        find_connected_components(page, &ClassifierOptions::default(), connectivity).unwrap()
    }

    #[test]
    fn test_blank_image_has_no_components() {
        let page = create_test_image(20, 20, &[]);
        assert!(find(&page, ConnectivityType::EightWay).is_empty());
    }

    #[test]
    fn test_diagonal_connectivity() {
        let page = create_test_image(10, 10, &[(1, 1), (2, 2), (3, 3)]);
        let eight = find(&page, ConnectivityType::EightWay);
        assert_eq!(eight.len(), 1);
        assert_eq!(eight[0].pixel_count, 3);
        assert_eq!(eight[0].bounds, WordBox::new(1, 1, 3, 3));

        assert_eq!(find(&page, ConnectivityType::FourWay).len(), 3);
    }

    #[test]
    fn test_discovery_order_is_row_major() {
        let page = create_test_image(10, 10, &[(8, 1), (1, 2), (1, 3), (5, 0)]);
        let comps = find(&page, ConnectivityType::EightWay);
        let origins: Vec<_> = comps.iter().map(|c| (c.bounds.x, c.bounds.y)).collect();
        assert_eq!(origins, vec![(5, 0), (8, 1), (1, 2)]);
        let labels: Vec<_> = comps.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec![1, 2, 3]);
    }

    #[test]
    fn test_u_shape_reached_through_bottom() {
        // Two arms joined only along the bottom row
        let mut pixels = Vec::new();
        for y in 0..5 {
            pixels.push((0, y));
            pixels.push((4, y));
        }
        for x in 0..5 {
            pixels.push((x, 5));
        }
        let page = create_test_image(8, 8, &pixels);
        let comps = find(&page, ConnectivityType::FourWay);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].bounds, WordBox::new(0, 0, 5, 6));
        assert_eq!(comps[0].pixel_count, 15);
    }

    #[test]
    fn test_large_solid_blob_does_not_recurse() {
        let mut page = Raster::new_gray(1500, 1500).unwrap();
        page.fill_rect(&WordBox::new(0, 0, 1500, 1500), Color::BLACK);
        let comps = find(&page, ConnectivityType::EightWay);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].pixel_count, 1500 * 1500);
    }

    #[test]
    fn test_visited_mask_mark() {
        let mut m = VisitedMask::new(3, 3);
        assert!(m.mark(2, 1));
        assert!(!m.mark(2, 1));
        assert!(m.is_visited(2, 1));
        assert!(!m.is_visited(1, 2));
    }
}
