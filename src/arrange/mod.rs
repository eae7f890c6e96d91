//! # Arranger
//!
//! A transient strategy object bound to one [`Workspace`]. It owns the pool
//! of pictures not yet consumed by the current layout pass, the selection
//! heuristics that drain that pool, and the post-layout normalization that
//! shifts the wall into the positive quadrant.
//!
//! One arranger runs one pass, start to finish, then is discarded; it is
//! never reused with stale pool state. Randomness is injected through the
//! `Rng` the caller supplies, so a fixed seed reproduces a wall exactly.

mod columns;
mod grid;
mod linear;

use std::cmp::Reverse;
use std::collections::BTreeSet;

use rand::Rng;

use crate::error::ArrangeError;
use crate::model::Strategy;
use crate::workspace::{Pic, Workspace};

pub struct Arranger<'a, R: Rng> {
    workspace: &'a mut Workspace,
    pics_remaining: BTreeSet<u64>,
    rng: R,
}

impl<'a, R: Rng> Arranger<'a, R> {
    pub fn new(workspace: &'a mut Workspace, rng: R) -> Self {
        let pics_remaining = workspace.ids().collect();
        Self {
            workspace,
            pics_remaining,
            rng,
        }
    }

    /// Number of pictures not yet consumed by a selection heuristic.
    pub fn remaining(&self) -> usize {
        self.pics_remaining.len()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.pics_remaining.contains(&id)
    }

    // ─── Selection heuristics ───────────────────────────────────────
    //
    // Every pop removes the returned id from the pool and nothing else.
    // Ties break toward the smallest picture id, so a given gallery always
    // drains in the same order.

    /// Remaining picture with the greatest padded height.
    pub fn pop_tallest(&mut self) -> Result<u64, ArrangeError> {
        self.pop_max_by(|pic| pic.h)
    }

    /// Remaining picture with the greatest padded width.
    pub fn pop_widest(&mut self) -> Result<u64, ArrangeError> {
        self.pop_max_by(|pic| pic.w)
    }

    /// Remaining picture with the smallest padded width.
    pub fn pop_narrow(&mut self) -> Result<u64, ArrangeError> {
        self.pop_min_by(|pic| pic.w)
    }

    /// Remaining picture with the smallest padded area.
    pub fn pop_small(&mut self) -> Result<u64, ArrangeError> {
        self.pop_min_by(|pic| pic.area())
    }

    /// Remaining picture with the greatest padded area.
    pub fn pop_large(&mut self) -> Result<u64, ArrangeError> {
        self.pop_max_by(|pic| pic.area())
    }

    /// Any `n` pictures from the pool, for callers that just need an
    /// unordered batch. This implementation hands out ascending ids.
    pub fn pop_any_n(&mut self, n: usize) -> Result<Vec<u64>, ArrangeError> {
        if n > self.pics_remaining.len() {
            return Err(ArrangeError::EmptyPool {
                requested: n,
                remaining: self.pics_remaining.len(),
            });
        }
        let ids: Vec<u64> = self.pics_remaining.iter().copied().take(n).collect();
        for id in &ids {
            self.pics_remaining.remove(id);
        }
        Ok(ids)
    }

    fn pop_min_by(&mut self, key: impl Fn(&Pic) -> i64) -> Result<u64, ArrangeError> {
        let best = self
            .pics_remaining
            .iter()
            .filter_map(|&id| self.workspace.pic(id).map(|pic| (key(pic), id)))
            .min()
            .map(|(_, id)| id);
        self.take(best)
    }

    fn pop_max_by(&mut self, key: impl Fn(&Pic) -> i64) -> Result<u64, ArrangeError> {
        let best = self
            .pics_remaining
            .iter()
            .filter_map(|&id| self.workspace.pic(id).map(|pic| (key(pic), id)))
            .max_by_key(|&(k, id)| (k, Reverse(id)))
            .map(|(_, id)| id);
        self.take(best)
    }

    fn take(&mut self, id: Option<u64>) -> Result<u64, ArrangeError> {
        let id = id.ok_or(ArrangeError::EmptyPool {
            requested: 1,
            remaining: 0,
        })?;
        self.pics_remaining.remove(&id);
        Ok(id)
    }

    // ─── Layout ─────────────────────────────────────────────────────

    /// Run the selected layout strategy. Every picture in the workspace ends
    /// up placed, or the first failure is returned with nothing committed to
    /// the caller.
    pub fn arrange(&mut self, strategy: Strategy) -> Result<(), ArrangeError> {
        match strategy {
            Strategy::Linear => self.arrange_linear(),
            Strategy::Grid => self.arrange_grid(),
            Strategy::Columns => self.arrange_columns(),
        }
    }

    // ─── Normalization ──────────────────────────────────────────────

    /// Shift all placements so the leftmost/topmost edges touch zero.
    /// Idempotent: realigning an already-realigned wall is a no-op.
    pub fn realign_to_origin(&mut self) -> Result<(), ArrangeError> {
        let mut min_x = i64::MAX;
        let mut min_y = i64::MAX;
        for (id, pic) in self.workspace.iter() {
            let rect = pic
                .rect()
                .ok_or_else(|| ArrangeError::State(format!("picture {} has no placement", id)))?;
            min_x = min_x.min(rect.x1);
            min_y = min_y.min(rect.y1);
        }
        if min_x == i64::MAX {
            return Err(ArrangeError::State(
                "realignment requested for an empty workspace".to_string(),
            ));
        }
        self.workspace.shift_placed(-min_x, -min_y);
        Ok(())
    }

    /// Overall wall dimensions. See [`Workspace::wall_size`].
    pub fn wall_size(&self) -> Result<(i64, i64), ArrangeError> {
        self.workspace.wall_size()
    }
}
