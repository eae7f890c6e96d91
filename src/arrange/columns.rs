//! Column heuristic: a few extremal picks seed vertical columns, then the
//! rest fill whichever column is currently shortest.

use rand::Rng;

use super::Arranger;
use crate::error::ArrangeError;

/// One column under construction. Entry coordinates are column-local;
/// concrete x offsets are assigned once every column is final.
struct Column {
    width: i64,
    height: i64,
    entries: Vec<Entry>,
}

struct Entry {
    id: u64,
    dx: i64,
    dy: i64,
}

impl Column {
    fn seeded(id: u64, w: i64, h: i64) -> Self {
        Self {
            width: w,
            height: h,
            entries: vec![Entry { id, dx: 0, dy: 0 }],
        }
    }

    fn push_below(&mut self, id: u64, w: i64, h: i64) {
        self.entries.push(Entry {
            id,
            dx: 0,
            dy: self.height,
        });
        self.height += h;
        self.width = self.width.max(w);
    }
}

impl<R: Rng> Arranger<'_, R> {
    /// Arrange in columns seeded by extremal picks.
    ///
    /// The single tallest picture stands alone in the first column. When at
    /// least three pictures remain, the widest goes above the two narrowest
    /// laid side by side; the pair's combined width against the single
    /// picture's width decides which of the two defines that column's width.
    /// Every other picture drops to the bottom of the currently shortest
    /// column, largest area first, growing the column to fit when needed.
    ///
    /// Columns render left to right at prefix-sum x offsets, top-aligned at
    /// `y = 0`. Entries never leave their column's x band and stack without
    /// gaps inside it, so placements cannot overlap.
    pub fn arrange_columns(&mut self) -> Result<(), ArrangeError> {
        let mut columns: Vec<Column> = Vec::new();

        let tallest = self.pop_tallest()?;
        let (w, h) = self.dims(tallest)?;
        columns.push(Column::seeded(tallest, w, h));

        if self.remaining() >= 3 {
            let widest = self.pop_widest()?;
            let narrow1 = self.pop_narrow()?;
            let narrow2 = self.pop_narrow()?;

            let (wide_w, wide_h) = self.dims(widest)?;
            let (n1_w, n1_h) = self.dims(narrow1)?;
            let (n2_w, n2_h) = self.dims(narrow2)?;

            let pair_width = n1_w + n2_w;
            let mut column = Column::seeded(widest, wide_w.max(pair_width), wide_h);
            column.entries.push(Entry {
                id: narrow1,
                dx: 0,
                dy: wide_h,
            });
            column.entries.push(Entry {
                id: narrow2,
                dx: n1_w,
                dy: wide_h,
            });
            column.height = wide_h + n1_h.max(n2_h);
            columns.push(column);
        }

        while self.remaining() > 0 {
            let id = self.pop_large()?;
            let (w, h) = self.dims(id)?;
            let shortest = columns
                .iter_mut()
                .min_by_key(|column| column.height)
                .ok_or(ArrangeError::EmptyPool {
                    requested: 1,
                    remaining: 0,
                })?;
            shortest.push_below(id, w, h);
        }

        let mut x_offset = 0;
        for column in &columns {
            for entry in &column.entries {
                self.workspace
                    .place(entry.id, x_offset + entry.dx, entry.dy)?;
            }
            x_offset += column.width;
        }

        Ok(())
    }

    fn dims(&self, id: u64) -> Result<(i64, i64), ArrangeError> {
        self.workspace
            .pic(id)
            .map(|pic| (pic.w, pic.h))
            .ok_or_else(|| ArrangeError::State(format!("unknown picture id {}", id)))
    }
}
