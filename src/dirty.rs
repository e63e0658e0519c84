//! Dirty region aggregation.

use crate::rect::Rect;

/// Above this many separate rectangles, a dirty region collapses into its bounding box.
const MAX_RECTS: usize = 8;

/// A set of rectangles that need to be redrawn.
///
/// Overlapping rectangles are merged as they are added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirtyRegion {
    rects: Vec<Rect>,
}

impl DirtyRegion {
    pub fn new() -> DirtyRegion {
        DirtyRegion::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Adds a rectangle to the region.
    pub fn add(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }

        let mut rect = rect;
        // merging may produce a rect that overlaps ones we already passed, so repeat until stable
        loop {
            let before = self.rects.len();
            let mut i = 0;
            while i < self.rects.len() {
                if self.rects[i].intersects(rect) {
                    rect = rect.union(self.rects.swap_remove(i));
                } else {
                    i += 1;
                }
            }
            if self.rects.len() == before {
                break;
            }
        }
        self.rects.push(rect);

        if self.rects.len() > MAX_RECTS {
            let bounds = self.bounds();
            self.rects.clear();
            self.rects.push(bounds);
        }
    }

    /// The bounding box of the whole region.
    pub fn bounds(&self) -> Rect {
        self.rects
            .iter()
            .fold(Rect::zero(), |acc, rect| acc.union(*rect))
    }

    /// Removes and returns all rectangles.
    pub fn take(&mut self) -> Vec<Rect> {
        std::mem::replace(&mut self.rects, Vec::new())
    }
}
