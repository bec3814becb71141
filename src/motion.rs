//! Pure motion arithmetic: scroll fractions, choreography timelines, and
//! the stat-counter easing. Nothing in here touches the DOM; the browser
//! layer feeds in measurements and interprets the outputs.

/// Progress of the page (or any tracked region) through its scrollable
/// extent, clamped to [0, 1]. An extent of zero means there is nothing to
/// scroll, which reads as no progress.
pub fn scroll_fraction(offset: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }

    (offset / extent).clamp(0.0, 1.0)
}

/// How far a region that starts at the top of the viewport has scrolled
/// out of it: 0 while its top is at or below the viewport top, 1 once a
/// full region height has passed.
pub fn region_exit_fraction(rect_top: f64, rect_height: f64) -> f64 {
    if rect_height <= 0.0 {
        return 0.0;
    }

    (-rect_top / rect_height).clamp(0.0, 1.0)
}

/// Maps a [0, 1] fraction into a caller-supplied output range.
pub fn map_fraction(fraction: f64, range: (f64, f64)) -> f64 {
    let (lo, hi) = range;
    lo + (hi - lo) * fraction.clamp(0.0, 1.0)
}

/// Per-index entrance delay for staggered children.
pub fn stagger_ms(base_ms: u32, index: usize, step_ms: u32) -> u32 {
    base_ms + (index as u32) * step_ms
}

/// Eased counter value after `elapsed_ms` of a count-up to `end` lasting
/// `duration_ms`. Ease-out cubic, monotone, lands exactly on `end`.
pub fn count_at(elapsed_ms: u32, duration_ms: u32, end: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return end;
    }

    let progress = f64::from(elapsed_ms) / f64::from(duration_ms);
    let eased = 1.0 - (1.0 - progress).powi(3);
    (f64::from(end) * eased).round() as u32
}

/// A fire-once latch. Observes intersection reports and, once set, stays
/// set for the rest of the session no matter what is reported afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting {
            self.fired = true;
        }

        self.fired
    }

    pub fn fired(self) -> bool {
        self.fired
    }
}

/// One element of a section's entrance choreography.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Step {
    pub target: &'static str,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

/// An ordered entrance choreography. Timing lives here as data; the
/// presentation layer asks for a target's inline style and the stylesheet
/// interprets it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Timeline {
    steps: &'static [Step],
}

impl Timeline {
    pub const fn new(steps: &'static [Step]) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    /// `animation-delay`/`animation-duration` declarations for `target`,
    /// or `None` when the timeline does not choreograph it.
    pub fn style_for(&self, target: &str) -> Option<String> {
        self.steps
            .iter()
            .find(|step| step.target == target)
            .map(|step| {
                format!(
                    "animation-delay:{}ms;animation-duration:{}ms;",
                    step.delay_ms, step.duration_ms
                )
            })
    }

    /// When the last choreographed entrance settles.
    pub fn settled_ms(&self) -> u32 {
        self.steps
            .iter()
            .map(|step| step.delay_ms + step.duration_ms)
            .max()
            .unwrap_or(0)
    }
}

/// Hero entrance: heading, typed subtitle hand-off, call to action, stat
/// chips, then the scroll hint. Delays mirror the splash hand-off so the
/// sequence starts as the overlay clears.
pub const HERO_ENTRANCE: Timeline = Timeline::new(&[
    Step { target: "heading", delay_ms: 500, duration_ms: 1_200 },
    Step { target: "subtitle", delay_ms: 2_000, duration_ms: 800 },
    Step { target: "cta", delay_ms: 3_500, duration_ms: 800 },
    Step { target: "stats", delay_ms: 4_000, duration_ms: 600 },
    Step { target: "hint", delay_ms: 5_000, duration_ms: 600 },
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_fraction_clamps_and_handles_flat_pages() {
        assert_eq!(scroll_fraction(0.0, 1_000.0), 0.0);
        assert_eq!(scroll_fraction(500.0, 1_000.0), 0.5);
        assert_eq!(scroll_fraction(2_000.0, 1_000.0), 1.0);
        assert_eq!(scroll_fraction(-10.0, 1_000.0), 0.0);
        assert_eq!(scroll_fraction(300.0, 0.0), 0.0);
    }

    #[test]
    fn region_exit_tracks_the_top_edge() {
        assert_eq!(region_exit_fraction(0.0, 800.0), 0.0);
        assert_eq!(region_exit_fraction(-400.0, 800.0), 0.5);
        assert_eq!(region_exit_fraction(-900.0, 800.0), 1.0);
        assert_eq!(region_exit_fraction(200.0, 800.0), 0.0);
        assert_eq!(region_exit_fraction(-10.0, 0.0), 0.0);
    }

    #[test]
    fn map_fraction_spans_the_output_range() {
        assert_eq!(map_fraction(0.0, (0.0, 50.0)), 0.0);
        assert_eq!(map_fraction(1.0, (0.0, 50.0)), 50.0);
        assert_eq!(map_fraction(0.5, (1.0, 0.0)), 0.5);
        assert_eq!(map_fraction(2.0, (0.0, 50.0)), 50.0);
    }

    #[test]
    fn stagger_grows_linearly_with_index() {
        assert_eq!(stagger_ms(200, 0, 150), 200);
        assert_eq!(stagger_ms(200, 3, 150), 650);
    }

    #[test]
    fn counter_is_monotone_and_lands_on_the_end_value() {
        let mut last = 0;
        for elapsed in (0..=2_000).step_by(40) {
            let value = count_at(elapsed, 2_000, 60);
            assert!(value >= last, "counter regressed at {elapsed}ms");
            assert!(value <= 60);
            last = value;
        }

        assert_eq!(count_at(2_000, 2_000, 60), 60);
        assert_eq!(count_at(5_000, 2_000, 60), 60);
        assert_eq!(count_at(0, 0, 60), 60);
    }

    #[test]
    fn latch_never_resets_once_fired() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.observe(false), "leaving the viewport must not reset");
        assert!(latch.observe(true));
        assert!(latch.fired());
    }

    #[test]
    fn timeline_styles_only_known_targets() {
        let style = HERO_ENTRANCE
            .style_for("heading")
            .expect("heading is choreographed");
        assert_eq!(style, "animation-delay:500ms;animation-duration:1200ms;");
        assert_eq!(HERO_ENTRANCE.style_for("unknown"), None);
    }

    #[test]
    fn hero_entrance_is_ordered_and_settles_after_the_hint() {
        let delays: Vec<u32> = HERO_ENTRANCE.steps().iter().map(|s| s.delay_ms).collect();
        let mut sorted = delays.clone();
        sorted.sort_unstable();
        assert_eq!(delays, sorted, "steps are listed in firing order");
        assert_eq!(HERO_ENTRANCE.settled_ms(), 5_600);
    }
}
