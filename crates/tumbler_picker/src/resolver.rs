//! Scroll-offset to discrete-selection resolution
//!
//! Converts the host's stream of continuous scroll-offset reports into
//! discrete, de-duplicated commit events. Reports arrive arbitrarily often
//! and carry fractional values during drags and flings; a commit fires
//! whenever a report lands exactly on a row boundary.
//!
//! Commits are deliberately NOT gated on "scroll ended": a fling that
//! passes through an exactly aligned offset emits for it. Hosts observe
//! pass-through commits, so adding end-of-scroll gating here would change
//! behavior.

use tracing::trace;

/// Tolerance, in row units, for treating a fractional offset as resting on
/// a row boundary. Scroll platforms report sub-pixel jitter at rest.
const SNAP_EPSILON: f64 = 1e-5;

/// Settle phase of one column.
///
/// The "first report is not a selection" rule is a visible transition here,
/// not an incidental boolean: the initial programmatic scroll-to-default
/// produces the first report, which positions the column without
/// committing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettlePhase {
    /// No offset report received yet; the initial programmatic scroll is
    /// still pending.
    #[default]
    Uninitialized,
    /// At least one report has arrived; commits may now be emitted.
    Positioned,
    /// Torn down; every further report is a no-op.
    Detached,
}

/// A committed selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    /// Row index the column rested on (or passed through exactly).
    pub index: usize,
}

/// De-duplicating quantizer from continuous scroll offsets to row commits.
#[derive(Debug, Clone)]
pub struct ScrollResolver {
    row_count: usize,
    item_height: f32,
    phase: SettlePhase,
    last_committed: Option<usize>,
}

impl ScrollResolver {
    pub fn new(row_count: usize, item_height: f32) -> Self {
        Self {
            row_count,
            item_height,
            phase: SettlePhase::default(),
            last_committed: None,
        }
    }

    pub fn phase(&self) -> SettlePhase {
        self.phase
    }

    /// Whether at least one offset report has positioned the column.
    pub fn is_settled(&self) -> bool {
        self.phase == SettlePhase::Positioned
    }

    pub fn last_committed(&self) -> Option<usize> {
        self.last_committed
    }

    /// Mark the column positioned without a report.
    ///
    /// Used when the default index is 0: no programmatic scroll happens, so
    /// the first report that would otherwise settle the column never fires.
    pub fn mark_positioned(&mut self) {
        if self.phase == SettlePhase::Uninitialized {
            self.phase = SettlePhase::Positioned;
            self.last_committed.get_or_insert(0);
        }
    }

    /// Permanently stop accepting reports.
    pub fn detach(&mut self) {
        self.phase = SettlePhase::Detached;
    }

    /// Feed one scroll-offset report from the host.
    ///
    /// The very first report positions the column and never emits — it is
    /// the initial programmatic scroll, not a user selection. After that, a
    /// report resting on a row boundary (within [`SNAP_EPSILON`]) emits a
    /// [`Commit`] exactly once per distinct index; repeat reports at the
    /// same rest position are suppressed. Non-integral, non-finite and
    /// out-of-bounds offsets are dropped silently — platforms over- and
    /// under-scroll transiently.
    pub fn on_offset_report(&mut self, offset_px: f32) -> Option<Commit> {
        match self.phase {
            SettlePhase::Detached => return None,
            SettlePhase::Uninitialized => {
                self.phase = SettlePhase::Positioned;
                if let Some(index) = self.quantize(offset_px) {
                    self.last_committed = Some(index);
                }
                trace!(offset_px, "column positioned by first report");
                return None;
            }
            SettlePhase::Positioned => {}
        }

        let index = self.quantize(offset_px)?;
        if self.last_committed == Some(index) {
            return None;
        }
        self.last_committed = Some(index);
        trace!(offset_px, index, "commit");
        Some(Commit { index })
    }

    /// Offset to row index, when the offset sits on a row boundary within
    /// tolerance and inside the list bounds.
    ///
    /// Quantizes in f64: row offsets a few thousand pixels in exceed f32's
    /// sub-pixel resolution.
    fn quantize(&self, offset_px: f32) -> Option<usize> {
        if !offset_px.is_finite() {
            return None;
        }
        let units = offset_px as f64 / self.item_height as f64;
        let nearest = units.round();
        if (units - nearest).abs() > SNAP_EPSILON {
            return None;
        }
        if nearest < 0.0 || nearest >= self.row_count as f64 {
            return None;
        }
        Some(nearest as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f32 = 40.0;

    fn resolver() -> ScrollResolver {
        ScrollResolver::new(24, H)
    }

    #[test]
    fn first_report_positions_without_committing() {
        let mut r = resolver();
        assert_eq!(r.phase(), SettlePhase::Uninitialized);
        assert_eq!(r.on_offset_report(0.0), None);
        assert_eq!(r.phase(), SettlePhase::Positioned);
    }

    #[test]
    fn settled_integral_offset_commits() {
        let mut r = resolver();
        r.on_offset_report(0.0);
        assert_eq!(r.on_offset_report(3.0 * H), Some(Commit { index: 3 }));
    }

    #[test]
    fn fractional_offsets_are_transient() {
        let mut r = resolver();
        r.on_offset_report(0.0);
        assert_eq!(r.on_offset_report(3.0001 * H), None);
        assert_eq!(r.on_offset_report(3.5 * H), None);
    }

    #[test]
    fn repeat_reports_at_rest_commit_once() {
        let mut r = resolver();
        r.on_offset_report(0.0);
        assert_eq!(r.on_offset_report(3.0 * H), Some(Commit { index: 3 }));
        assert_eq!(r.on_offset_report(3.0 * H), None);
        assert_eq!(r.on_offset_report(3.0 * H), None);
    }

    #[test]
    fn returning_to_a_previous_index_commits_again() {
        let mut r = resolver();
        r.on_offset_report(0.0);
        assert_eq!(r.on_offset_report(3.0 * H), Some(Commit { index: 3 }));
        assert_eq!(r.on_offset_report(0.0), Some(Commit { index: 0 }));
    }

    #[test]
    fn initial_rest_position_is_not_recommitted() {
        // The programmatic scroll lands at the default index; later rest
        // reports there are not selection changes.
        let mut r = resolver();
        r.on_offset_report(5.0 * H);
        assert_eq!(r.on_offset_report(5.0 * H), None);
        assert_eq!(r.on_offset_report(6.0 * H), Some(Commit { index: 6 }));
    }

    #[test]
    fn pass_through_alignments_commit_mid_fling() {
        let mut r = resolver();
        r.on_offset_report(0.0);
        // A fling sweeping down happens to sample exact boundaries.
        assert_eq!(r.on_offset_report(1.0 * H), Some(Commit { index: 1 }));
        assert_eq!(r.on_offset_report(1.7 * H), None);
        assert_eq!(r.on_offset_report(2.0 * H), Some(Commit { index: 2 }));
    }

    #[test]
    fn garbage_offsets_are_dropped_silently() {
        let mut r = resolver();
        r.on_offset_report(0.0);
        assert_eq!(r.on_offset_report(f32::NAN), None);
        assert_eq!(r.on_offset_report(f32::INFINITY), None);
        assert_eq!(r.on_offset_report(-2.0 * H), None);
        assert_eq!(r.on_offset_report(100.0 * H), None);
        // Still functional afterwards.
        assert_eq!(r.on_offset_report(2.0 * H), Some(Commit { index: 2 }));
    }

    #[test]
    fn first_report_settles_regardless_of_value() {
        let mut r = resolver();
        assert_eq!(r.on_offset_report(f32::NAN), None);
        assert_eq!(r.phase(), SettlePhase::Positioned);
        // Nothing was seeded, so the next integral report commits.
        assert_eq!(r.on_offset_report(0.0), Some(Commit { index: 0 }));
    }

    #[test]
    fn mark_positioned_seeds_index_zero() {
        let mut r = resolver();
        r.mark_positioned();
        assert!(r.is_settled());
        assert_eq!(r.on_offset_report(0.0), None);
        assert_eq!(r.on_offset_report(1.0 * H), Some(Commit { index: 1 }));
    }

    #[test]
    fn detached_resolver_ignores_everything() {
        let mut r = resolver();
        r.on_offset_report(0.0);
        r.detach();
        assert_eq!(r.on_offset_report(3.0 * H), None);
        assert_eq!(r.phase(), SettlePhase::Detached);
    }

    #[test]
    fn sub_pixel_jitter_at_rest_still_commits() {
        let mut r = resolver();
        r.on_offset_report(0.0);
        // 4 rows down with a tiny platform rounding residue.
        assert_eq!(r.on_offset_report(4.0 * H + 1e-4), Some(Commit { index: 4 }));
    }

    #[test]
    fn distant_rows_quantize_exactly() {
        // Year lists run past a hundred rows; exact boundaries there must
        // not be lost to float error.
        let mut r = ScrollResolver::new(130, H);
        r.on_offset_report(0.0);
        assert_eq!(r.on_offset_report(126.0 * H), Some(Commit { index: 126 }));
    }
}
