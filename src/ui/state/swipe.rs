// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state machine for the topmost card.
//!
//! Phases: `Idle → Dragging → {Leaving(decision), SnappingBack} → Idle`.
//! While dragging, the card follows the pointer directly (no easing); a
//! release strictly beyond [`SWIPE_THRESHOLD`] commits a decision and flies
//! the card off-screen, anything else snaps it back to neutral.

use crate::deck::Decision;
use std::time::{Duration, Instant};

/// Horizontal travel (px) a drag must strictly exceed to commit.
pub const SWIPE_THRESHOLD: f32 = 80.0;

/// Degrees of tilt per pixel of horizontal offset.
pub const ROTATION_FACTOR: f32 = 0.05;

/// Travel (px) at which a LIKE/NOPE label reaches full opacity.
pub const LABEL_SATURATION_DISTANCE: f32 = 100.0;

/// Horizontal travel (px) of the off-screen commit animation.
pub const OFFSCREEN_TRAVEL: f32 = 300.0;

/// Final tilt (degrees) of the off-screen commit animation.
pub const OFFSCREEN_ROTATION_DEGREES: f32 = 20.0;

/// Duration of the off-screen commit animation.
pub const COMMIT_DURATION: Duration = Duration::from_millis(250);

/// Duration of the snap-back animation after a cancelled drag.
pub const SNAP_BACK_DURATION: Duration = Duration::from_millis(300);

/// Visual placement of the card derived from the gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Horizontal translation in px.
    pub translation: f32,
    /// Tilt in degrees.
    pub rotation: f32,
    /// Whole-card opacity.
    pub opacity: f32,
}

impl CardTransform {
    pub const NEUTRAL: CardTransform = CardTransform {
        translation: 0.0,
        rotation: 0.0,
        opacity: 1.0,
    };
}

/// What a pointer release did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Travel strictly exceeded the threshold; the decision is committed
    /// once the off-screen animation completes.
    Commit(Decision),
    /// Travel was within the threshold; the card snaps back, no decision.
    Cancel,
    /// No drag was active.
    NotDragging,
}

/// A finished animation, reported by [`SwipeState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The off-screen animation ended; apply this decision to the deck.
    Commit(Decision),
    /// The snap-back ended; the card is back at neutral.
    Settled,
}

#[derive(Debug, Clone, Copy, Default)]
enum Phase {
    #[default]
    Idle,
    Dragging {
        start_x: f32,
        current_x: f32,
    },
    Leaving {
        decision: Decision,
        from_offset: f32,
        started: Instant,
    },
    SnappingBack {
        from_offset: f32,
        started: Instant,
    },
}

/// Gesture state for the current card. Exists once per app, reset whenever
/// a new card becomes topmost.
#[derive(Debug, Clone, Default)]
pub struct SwipeState {
    phase: Phase,
}

impl SwipeState {
    /// Begins a drag at pointer position `x`. Ignored unless idle, so a
    /// card mid-animation cannot be grabbed.
    pub fn press(&mut self, x: f32) {
        if matches!(self.phase, Phase::Idle) {
            self.phase = Phase::Dragging {
                start_x: x,
                current_x: x,
            };
        }
    }

    /// Updates the pointer position during a drag.
    pub fn move_to(&mut self, x: f32) {
        if let Phase::Dragging { current_x, .. } = &mut self.phase {
            *current_x = x;
        }
    }

    /// Ends a drag: commits when the travel strictly exceeds the threshold
    /// (sign decides accept vs reject), cancels otherwise. An offset of
    /// exactly [`SWIPE_THRESHOLD`] is a cancel.
    pub fn release(&mut self, now: Instant) -> ReleaseOutcome {
        let Phase::Dragging { start_x, current_x } = self.phase else {
            return ReleaseOutcome::NotDragging;
        };
        let offset = current_x - start_x;

        if offset.abs() > SWIPE_THRESHOLD {
            let decision = if offset > 0.0 {
                Decision::Accept
            } else {
                Decision::Reject
            };
            self.phase = Phase::Leaving {
                decision,
                from_offset: offset,
                started: now,
            };
            ReleaseOutcome::Commit(decision)
        } else {
            self.phase = Phase::SnappingBack {
                from_offset: offset,
                started: now,
            };
            ReleaseOutcome::Cancel
        }
    }

    /// Button path: skips dragging and starts the off-screen animation from
    /// the neutral position. Ignored unless idle.
    pub fn trigger(&mut self, decision: Decision, now: Instant) {
        if matches!(self.phase, Phase::Idle) {
            self.phase = Phase::Leaving {
                decision,
                from_offset: 0.0,
                started: now,
            };
        }
    }

    /// Resolves a finished animation, returning to `Idle`. Call on every
    /// animation tick; returns `None` while an animation is still running
    /// or nothing is animating.
    pub fn tick(&mut self, now: Instant) -> Option<Completion> {
        match self.phase {
            Phase::Leaving {
                decision, started, ..
            } if now.duration_since(started) >= COMMIT_DURATION => {
                self.phase = Phase::Idle;
                Some(Completion::Commit(decision))
            }
            Phase::SnappingBack { started, .. }
                if now.duration_since(started) >= SNAP_BACK_DURATION =>
            {
                self.phase = Phase::Idle;
                Some(Completion::Settled)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// True while an eased animation (fly-out or snap-back) is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            Phase::Leaving { .. } | Phase::SnappingBack { .. }
        )
    }

    #[must_use]
    pub fn is_snapping_back(&self) -> bool {
        matches!(self.phase, Phase::SnappingBack { .. })
    }

    /// Current horizontal drag offset; 0 outside of a drag.
    #[must_use]
    pub fn drag_offset(&self) -> f32 {
        match self.phase {
            Phase::Dragging { start_x, current_x } => current_x - start_x,
            _ => 0.0,
        }
    }

    /// Where the card should be drawn at `now`.
    #[must_use]
    pub fn transform(&self, now: Instant) -> CardTransform {
        match self.phase {
            Phase::Idle => CardTransform::NEUTRAL,
            Phase::Dragging { start_x, current_x } => {
                let offset = current_x - start_x;
                CardTransform {
                    translation: offset,
                    rotation: rotation_for(offset),
                    opacity: 1.0,
                }
            }
            Phase::Leaving {
                decision,
                from_offset,
                started,
            } => {
                let t = ease_out(progress(started, now, COMMIT_DURATION));
                let direction = match decision {
                    Decision::Accept => 1.0,
                    Decision::Reject => -1.0,
                };
                let target = direction * OFFSCREEN_TRAVEL;
                let target_rotation = direction * OFFSCREEN_ROTATION_DEGREES;
                CardTransform {
                    translation: lerp(from_offset, target, t),
                    rotation: lerp(rotation_for(from_offset), target_rotation, t),
                    opacity: 1.0 - t,
                }
            }
            Phase::SnappingBack {
                from_offset,
                started,
            } => {
                let t = ease_out(progress(started, now, SNAP_BACK_DURATION));
                let translation = lerp(from_offset, 0.0, t);
                CardTransform {
                    translation,
                    rotation: rotation_for(translation),
                    opacity: 1.0,
                }
            }
        }
    }
}

/// Tilt in degrees for a given horizontal offset.
#[must_use]
pub fn rotation_for(offset: f32) -> f32 {
    offset * ROTATION_FACTOR
}

/// Opacities of the (like, nope) labels for a horizontal offset. Only the
/// label matching the offset's sign is visible; opacity ramps linearly and
/// saturates at [`LABEL_SATURATION_DISTANCE`].
#[must_use]
pub fn label_opacities(offset: f32) -> (f32, f32) {
    if offset > 0.0 {
        ((offset / LABEL_SATURATION_DISTANCE).min(1.0), 0.0)
    } else if offset < 0.0 {
        (0.0, (-offset / LABEL_SATURATION_DISTANCE).min(1.0))
    } else {
        (0.0, 0.0)
    }
}

fn progress(started: Instant, now: Instant, duration: Duration) -> f32 {
    (now.duration_since(started).as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Cubic ease-out, approximating the CSS `ease` the card motion uses.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(offset: f32) -> SwipeState {
        let mut swipe = SwipeState::default();
        swipe.press(200.0);
        swipe.move_to(200.0 + offset);
        swipe
    }

    #[test]
    fn press_starts_drag_with_zero_offset() {
        let mut swipe = SwipeState::default();
        swipe.press(120.0);
        assert!(swipe.is_dragging());
        assert_eq!(swipe.drag_offset(), 0.0);
    }

    #[test]
    fn move_updates_offset() {
        let swipe = drag(42.0);
        assert_eq!(swipe.drag_offset(), 42.0);
        assert_eq!(swipe.transform(Instant::now()).rotation, 42.0 * 0.05);
    }

    #[test]
    fn release_at_exact_threshold_cancels() {
        let mut swipe = drag(80.0);
        assert_eq!(swipe.release(Instant::now()), ReleaseOutcome::Cancel);
        assert!(swipe.is_snapping_back());
    }

    #[test]
    fn release_just_past_threshold_accepts() {
        let mut swipe = drag(81.0);
        assert_eq!(
            swipe.release(Instant::now()),
            ReleaseOutcome::Commit(Decision::Accept)
        );
        assert!(swipe.is_animating());
    }

    #[test]
    fn release_past_negative_threshold_rejects() {
        let mut swipe = drag(-81.0);
        assert_eq!(
            swipe.release(Instant::now()),
            ReleaseOutcome::Commit(Decision::Reject)
        );
    }

    #[test]
    fn release_without_drag_is_noop() {
        let mut swipe = SwipeState::default();
        assert_eq!(swipe.release(Instant::now()), ReleaseOutcome::NotDragging);
        assert!(swipe.is_idle());
    }

    #[test]
    fn press_is_ignored_while_animating() {
        let now = Instant::now();
        let mut swipe = drag(150.0);
        swipe.release(now);
        swipe.press(10.0);
        assert!(!swipe.is_dragging());
        assert!(swipe.is_animating());
    }

    #[test]
    fn label_opacity_ramps_linearly() {
        assert_eq!(label_opacities(50.0), (0.5, 0.0));
        assert_eq!(label_opacities(-150.0), (0.0, 1.0));
        assert_eq!(label_opacities(0.0), (0.0, 0.0));
        assert_eq!(label_opacities(100.0), (1.0, 0.0));
    }

    #[test]
    fn commit_animation_reaches_offscreen_target() {
        let now = Instant::now();
        let mut swipe = drag(100.0);
        swipe.release(now);

        let start = swipe.transform(now);
        assert_eq!(start.translation, 100.0);
        assert_eq!(start.opacity, 1.0);

        let end = swipe.transform(now + COMMIT_DURATION);
        assert_eq!(end.translation, OFFSCREEN_TRAVEL);
        assert_eq!(end.rotation, OFFSCREEN_ROTATION_DEGREES);
        assert_eq!(end.opacity, 0.0);
    }

    #[test]
    fn reject_animation_flies_left() {
        let now = Instant::now();
        let mut swipe = SwipeState::default();
        swipe.trigger(Decision::Reject, now);

        let end = swipe.transform(now + COMMIT_DURATION);
        assert_eq!(end.translation, -OFFSCREEN_TRAVEL);
        assert_eq!(end.rotation, -OFFSCREEN_ROTATION_DEGREES);
    }

    #[test]
    fn snap_back_returns_to_neutral() {
        let now = Instant::now();
        let mut swipe = drag(60.0);
        swipe.release(now);

        let end = swipe.transform(now + SNAP_BACK_DURATION);
        assert_eq!(end, CardTransform::NEUTRAL);
    }

    #[test]
    fn tick_reports_commit_once_duration_elapsed() {
        let now = Instant::now();
        let mut swipe = drag(90.0);
        swipe.release(now);

        assert_eq!(swipe.tick(now + Duration::from_millis(100)), None);
        assert_eq!(
            swipe.tick(now + COMMIT_DURATION),
            Some(Completion::Commit(Decision::Accept))
        );
        assert!(swipe.is_idle());
    }

    #[test]
    fn tick_reports_settled_after_snap_back() {
        let now = Instant::now();
        let mut swipe = drag(10.0);
        swipe.release(now);

        assert_eq!(swipe.tick(now + Duration::from_millis(100)), None);
        assert_eq!(
            swipe.tick(now + SNAP_BACK_DURATION),
            Some(Completion::Settled)
        );
        assert!(swipe.is_idle());
    }

    #[test]
    fn trigger_is_ignored_mid_drag() {
        let mut swipe = drag(30.0);
        swipe.trigger(Decision::Accept, Instant::now());
        assert!(swipe.is_dragging());
    }
}
