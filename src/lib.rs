//! # Wallplan
//!
//! An arrangement engine for gallery walls: given pictures with real
//! dimensions, compute non-overlapping placements on a virtual wall and
//! report the wall's overall size.
//!
//! The surrounding web service owns users, galleries, uploads, and
//! persistence; this crate is the geometric core it calls with a list of
//! picture records and reads placements back from. One arrangement request
//! is one pass over fresh state; nothing here is shared, cached, or
//! retried.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]     — Gallery document: pictures, options
//!       ↓
//!   [workspace] — Padded integer rectangles, one per picture
//!       ↓
//!   [arrange]   — Selection heuristics, layout strategies, realignment
//!       ↓
//!   placements  — Wall size + exact per-picture coordinates
//! ```
//!
//! Strategies work on a padded, rounded plane (whole units, margin baked
//! into every rectangle) so they never reason about fractional gaps. The
//! workspace pays the rounding slack and half-margin back at the end, which
//! is why output coordinates are floats while wall dimensions are integers.

pub mod arrange;
pub mod error;
pub mod measure;
pub mod model;
pub mod workspace;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use arrange::Arranger;
pub use error::ArrangeError;
pub use model::{
    ArrangeOptions, ArrangedWall, Gallery, Picture, Placement, Strategy, DEFAULT_MARGIN,
};
pub use workspace::{Pic, Rect, Workspace};

/// Arrange a set of pictures onto a wall.
///
/// This is the primary entry point: builds a fresh [`Workspace`] and
/// [`Arranger`] pair, runs the configured layout strategy, realigns the
/// result to the positive quadrant, and converts placements back to the
/// input unit system.
///
/// The RNG behind shuffling is seeded from [`ArrangeOptions::seed`] when
/// set, so a wall can be reproduced exactly; otherwise each call may hang
/// the same gallery differently.
pub fn arrange(
    pictures: &[Picture],
    options: &ArrangeOptions,
) -> Result<ArrangedWall, ArrangeError> {
    if pictures.is_empty() {
        return Err(ArrangeError::EmptyPool {
            requested: 1,
            remaining: 0,
        });
    }

    let mut workspace = Workspace::new(pictures, options)?;
    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut arranger = Arranger::new(&mut workspace, rng);
    arranger.arrange(options.strategy)?;
    arranger.realign_to_origin()?;
    let (width, height) = arranger.wall_size()?;

    let placements = workspace.produce_placements()?;
    Ok(ArrangedWall {
        width,
        height,
        placements,
    })
}

/// Arrange a gallery described as JSON, returning the wall as JSON.
pub fn arrange_json(json: &str) -> Result<String, ArrangeError> {
    let gallery: Gallery = serde_json::from_str(json)?;
    let wall = arrange(&gallery.pictures, &gallery.options)?;
    serde_json::to_string_pretty(&wall).map_err(ArrangeError::from)
}
