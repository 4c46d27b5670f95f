// sierpinski-core/src/stats.rs

use crate::Canvas;
use serde::{Deserialize, Serialize};

/// Per-iteration removal counts of a rendered canvas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasStats {
    /// Total number of cells on the canvas.
    pub total: u64,
    /// `counts[n]` is the number of cells holding value `n`. Trailing
    /// iterations that removed nothing are trimmed.
    pub counts: Vec<u64>,
}

impl CanvasStats {
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let histogram = canvas.histogram();
        let used = histogram
            .iter()
            .rposition(|&count| count > 0)
            .map_or(1, |last| last + 1);

        Self {
            total: canvas.len() as u64,
            counts: histogram[..used].to_vec(),
        }
    }

    pub fn never_removed(&self) -> u64 {
        self.counts.first().copied().unwrap_or(0)
    }

    pub fn removed_at(&self, iteration: u8) -> u64 {
        self.counts.get(iteration as usize).copied().unwrap_or(0)
    }

    /// Share of the whole canvas removed at `iteration`.
    pub fn removed_fraction(&self, iteration: u8) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.removed_at(iteration) as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_untouched_canvas() {
        let stats = CanvasStats::from_canvas(&Canvas::new(4));
        assert_eq!(stats.total, 16);
        assert_eq!(stats.counts, vec![16]);
        assert_eq!(stats.never_removed(), 16);
        assert_eq!(stats.removed_fraction(1), 0.0);
    }

    #[test]
    fn stats_trim_trailing_zero_counts() {
        let mut canvas = Canvas::new(2);
        canvas.set_index(0, 3);
        let stats = CanvasStats::from_canvas(&canvas);
        assert_eq!(stats.counts, vec![3, 0, 0, 1]);
        assert_eq!(stats.removed_at(3), 1);
        assert_eq!(stats.removed_at(200), 0);
        assert_eq!(stats.removed_fraction(3), 0.25);
    }

    #[test]
    fn stats_of_empty_canvas() {
        let stats = CanvasStats::from_canvas(&Canvas::new(0));
        assert_eq!(stats.total, 0);
        assert_eq!(stats.never_removed(), 0);
        assert_eq!(stats.removed_fraction(0), 0.0);
    }
}
