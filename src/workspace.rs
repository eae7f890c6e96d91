//! # Arrangement Workspace
//!
//! Holds the padded rectangle for every picture in a gallery while a layout
//! strategy assigns coordinates, then converts the padded, rounded plane back
//! into exact wall coordinates.
//!
//! Each side of each picture carries half the margin:
//!
//! ```text
//!        w+m
//!     <------->
//!          w   m
//!       <----><->
//!     +--------+---------+
//!     | +----+ | +-----+ |
//!     | |    | | |     | |
//!     | +----+ | +-----+ |
//!     +--------+---------+
//! ```
//!
//! Padded dimensions are rounded up to whole units so the strategies never
//! track fractional gaps; the rounding slack and the half-margin inset are
//! paid back by [`Workspace::produce_placements`].

use std::collections::BTreeMap;

use crate::error::ArrangeError;
use crate::model::{ArrangeOptions, Picture, Placement};

/// Axis-aligned rectangle in the shared padded plane.
///
/// `x2`/`y2` are exclusive: a placed pic always satisfies `x2 = x1 + w` and
/// `y2 = y1 + h`, so `x2 > x1` and `y2 > y1` hold for every placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Rect {
    /// Whether two rectangles share interior area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x1 < other.x2 && other.x1 < self.x2 && self.y1 < other.y2 && other.y1 < self.y2
    }

    fn shifted(self, dx: i64, dy: i64) -> Rect {
        Rect {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }
}

/// A picture padded out to its margin envelope.
#[derive(Debug, Clone, Copy)]
pub struct Pic {
    /// Padded width: `ceil(width) + margin`.
    pub w: i64,
    /// Padded height: `ceil(height) + margin`.
    pub h: i64,
    picture: Picture,
    placed: Option<Rect>,
}

impl Pic {
    fn new(picture: Picture, margin: i64) -> Self {
        Self {
            w: picture.width.ceil() as i64 + margin,
            h: picture.height.ceil() as i64 + margin,
            picture,
            placed: None,
        }
    }

    /// Padded area, the rough size proxy the selection heuristics sort by.
    pub fn area(&self) -> i64 {
        self.w * self.h
    }

    /// The assigned rectangle, `None` until a layout strategy places it.
    pub fn rect(&self) -> Option<Rect> {
        self.placed
    }
}

/// The working set for one arrangement pass.
///
/// Created per request from a gallery's picture list and discarded once the
/// placements have been produced. Never shared between requests.
#[derive(Debug)]
pub struct Workspace {
    pics: BTreeMap<u64, Pic>,
    margin: i64,
}

impl Workspace {
    /// Build the padded rectangle for each picture.
    ///
    /// Fails with [`ArrangeError::Config`] when the margin is negative, a
    /// picture dimension is non-positive or non-finite, or a picture id
    /// appears twice.
    pub fn new(pictures: &[Picture], options: &ArrangeOptions) -> Result<Self, ArrangeError> {
        if options.margin < 0 {
            return Err(ArrangeError::Config(format!(
                "margin must be a non-negative integer, got {}",
                options.margin
            )));
        }

        let mut pics = BTreeMap::new();
        for &picture in pictures {
            if !picture.width.is_finite()
                || !picture.height.is_finite()
                || picture.width <= 0.0
                || picture.height <= 0.0
            {
                return Err(ArrangeError::Config(format!(
                    "picture {} has invalid dimensions {}x{}",
                    picture.id, picture.width, picture.height
                )));
            }
            if pics
                .insert(picture.id, Pic::new(picture, options.margin))
                .is_some()
            {
                return Err(ArrangeError::Config(format!(
                    "duplicate picture id {}",
                    picture.id
                )));
            }
        }

        Ok(Self {
            pics,
            margin: options.margin,
        })
    }

    pub fn margin(&self) -> i64 {
        self.margin
    }

    pub fn len(&self) -> usize {
        self.pics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pics.is_empty()
    }

    /// Picture ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.pics.keys().copied()
    }

    pub fn pic(&self, id: u64) -> Option<&Pic> {
        self.pics.get(&id)
    }

    /// All pics in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Pic)> {
        self.pics.iter().map(|(&id, pic)| (id, pic))
    }

    /// Assign a placement. `x2`/`y2` are always derived from the padded
    /// dimensions, never supplied by the caller.
    pub fn place(&mut self, id: u64, x1: i64, y1: i64) -> Result<(), ArrangeError> {
        let pic = self
            .pics
            .get_mut(&id)
            .ok_or_else(|| ArrangeError::State(format!("unknown picture id {}", id)))?;
        pic.placed = Some(Rect {
            x1,
            y1,
            x2: x1 + pic.w,
            y2: y1 + pic.h,
        });
        Ok(())
    }

    pub(crate) fn shift_placed(&mut self, dx: i64, dy: i64) {
        for pic in self.pics.values_mut() {
            if let Some(rect) = pic.placed {
                pic.placed = Some(rect.shifted(dx, dy));
            }
        }
    }

    /// Rectangle of every pic, or a `StateError` naming the first unplaced
    /// one. No partial results: a single unplaced pic poisons the whole wall.
    fn placed_rects(&self) -> Result<Vec<Rect>, ArrangeError> {
        self.pics
            .iter()
            .map(|(&id, pic)| {
                pic.placed
                    .ok_or_else(|| ArrangeError::State(format!("picture {} has no placement", id)))
            })
            .collect()
    }

    /// Overall wall dimensions: `max(x2) - min(x1)` by `max(y2) - min(y1)`.
    ///
    /// A pure difference, so the answer is the same before and after
    /// realignment.
    pub fn wall_size(&self) -> Result<(i64, i64), ArrangeError> {
        let rects = self.placed_rects()?;
        if rects.is_empty() {
            return Err(ArrangeError::State(
                "wall size requested for an empty workspace".to_string(),
            ));
        }

        let min_x = rects.iter().map(|r| r.x1).min().unwrap_or(0);
        let max_x = rects.iter().map(|r| r.x2).max().unwrap_or(0);
        let min_y = rects.iter().map(|r| r.y1).min().unwrap_or(0);
        let max_y = rects.iter().map(|r| r.y2).max().unwrap_or(0);

        Ok((max_x - min_x, max_y - min_y))
    }

    /// Convert placed coordinates back to the original unit system: undo the
    /// padding round-up and inset by the half margin, centering each picture
    /// inside its padded envelope.
    pub fn produce_placements(&self) -> Result<BTreeMap<u64, Placement>, ArrangeError> {
        let mut placements = BTreeMap::new();
        let half_margin = self.margin as f64 / 2.0;

        for (&id, pic) in &self.pics {
            let rect = pic
                .placed
                .ok_or_else(|| ArrangeError::State(format!("picture {} has no placement", id)))?;
            let width_fine = (pic.picture.width.ceil() - pic.picture.width) / 2.0;
            let height_fine = (pic.picture.height.ceil() - pic.picture.height) / 2.0;
            placements.insert(
                id,
                Placement {
                    x: rect.x1 as f64 + half_margin + width_fine,
                    y: rect.y1 as f64 + half_margin + height_fine,
                },
            );
        }

        Ok(placements)
    }
}
