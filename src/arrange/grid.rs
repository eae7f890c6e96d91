//! Grid strategy: pictures land in random distinct cells of a near-square
//! grid, then occupied columns and rows expand into concrete tracks.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use super::Arranger;
use crate::error::ArrangeError;

impl<R: Rng> Arranger<'_, R> {
    /// Scatter the gallery across a `ceil(sqrt(n))`-sided grid centered at
    /// the origin, one picture per cell, then expand the grid into concrete
    /// coordinates.
    ///
    /// Expansion treats occupied grid columns and rows as tracks: a column is
    /// as wide as the widest picture assigned to it, a row as tall as the
    /// tallest, and cell origins are prefix sums of the preceding tracks.
    /// Each picture is centered inside its cell. Cells are exclusive and
    /// every picture fits its own tracks, so placements cannot overlap.
    pub fn arrange_grid(&mut self) -> Result<(), ArrangeError> {
        let ids = self.pop_any_n(self.remaining())?;
        if ids.is_empty() {
            return Err(ArrangeError::EmptyPool {
                requested: 1,
                remaining: 0,
            });
        }

        let n = ids.len();
        let side = (n as f64).sqrt().ceil() as i64;
        let min_grid = -(side / 2);

        let mut cells: Vec<(i64, i64)> = (min_grid..min_grid + side)
            .flat_map(|col| (min_grid..min_grid + side).map(move |row| (col, row)))
            .collect();
        cells.shuffle(&mut self.rng);
        cells.truncate(n);

        // Ascending ids onto the sampled cells.
        let assigned: Vec<((i64, i64), u64)> = cells.into_iter().zip(ids).collect();

        let mut col_widths: BTreeMap<i64, i64> = BTreeMap::new();
        let mut row_heights: BTreeMap<i64, i64> = BTreeMap::new();
        for &((col, row), id) in &assigned {
            if let Some(pic) = self.workspace.pic(id) {
                let cw = col_widths.entry(col).or_insert(0);
                *cw = (*cw).max(pic.w);
                let rh = row_heights.entry(row).or_insert(0);
                *rh = (*rh).max(pic.h);
            }
        }

        let col_offsets = track_offsets(&col_widths);
        let row_offsets = track_offsets(&row_heights);

        for ((col, row), id) in assigned {
            let (w, h) = match self.workspace.pic(id) {
                Some(pic) => (pic.w, pic.h),
                None => {
                    return Err(ArrangeError::State(format!(
                        "unknown picture id {}",
                        id
                    )))
                }
            };
            let x1 = col_offsets[&col] + (col_widths[&col] - w) / 2;
            let y1 = row_offsets[&row] + (row_heights[&row] - h) / 2;
            self.workspace.place(id, x1, y1)?;
        }

        Ok(())
    }
}

/// Prefix-sum origins for occupied tracks; unoccupied tracks between them
/// contribute nothing, which collapses empty grid lines.
fn track_offsets(sizes: &BTreeMap<i64, i64>) -> BTreeMap<i64, i64> {
    let mut offsets = BTreeMap::new();
    let mut acc = 0;
    for (&index, &size) in sizes {
        offsets.insert(index, acc);
        acc += size;
    }
    offsets
}
