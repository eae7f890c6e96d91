//! Linear row strategy: one horizontal strip, vertically centered, with
//! small and large pictures alternating.

use rand::seq::SliceRandom;
use rand::Rng;

use super::Arranger;
use crate::error::ArrangeError;

impl<R: Rng> Arranger<'_, R> {
    /// Lay the gallery out in a single left-to-right row.
    ///
    /// Padded area is a rough proxy for visual weight: sorting by it and
    /// splitting at the middle yields a "smaller" and a "larger" pool, and
    /// the sweep alternates between them (even slots draw small, odd slots
    /// draw large) so heavy pictures don't clump. Each pool is shuffled
    /// independently, so two walls from the same gallery differ unless the
    /// seed is fixed.
    ///
    /// Every picture's vertical center sits on a shared baseline
    /// (`y1 = -(h/2)`), and each `x1` is the previous picture's `x2`. The
    /// x-sweep is monotonic, so placements cannot overlap.
    pub fn arrange_linear(&mut self) -> Result<(), ArrangeError> {
        let ids = self.pop_any_n(self.remaining())?;
        if ids.is_empty() {
            return Err(ArrangeError::EmptyPool {
                requested: 1,
                remaining: 0,
            });
        }

        let mut by_area: Vec<(i64, u64)> = ids
            .into_iter()
            .filter_map(|id| self.workspace.pic(id).map(|pic| (pic.area(), id)))
            .collect();
        by_area.sort_unstable();
        let ordered: Vec<u64> = by_area.into_iter().map(|(_, id)| id).collect();

        let mid = ordered.len() / 2;
        let mut smaller = ordered[..mid].to_vec();
        let mut larger = ordered[mid..].to_vec();
        smaller.shuffle(&mut self.rng);
        larger.shuffle(&mut self.rng);

        let mut row_width = 0;
        for i in 0..ordered.len() {
            // Preferred pool first; the other one covers odd-sized galleries
            // where one pool runs dry a slot early.
            let id = if i % 2 == 0 {
                smaller.pop().or_else(|| larger.pop())
            } else {
                larger.pop().or_else(|| smaller.pop())
            }
            .ok_or(ArrangeError::EmptyPool {
                requested: 1,
                remaining: 0,
            })?;

            let (w, h) = match self.workspace.pic(id) {
                Some(pic) => (pic.w, pic.h),
                None => {
                    return Err(ArrangeError::State(format!(
                        "unknown picture id {}",
                        id
                    )))
                }
            };
            self.workspace.place(id, row_width, -(h / 2))?;
            row_width += w;
        }

        Ok(())
    }
}
