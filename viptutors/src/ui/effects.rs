//! # Effect Manager
//!
//! Fire-and-forget visual effects: the shake on a rejected field and the
//! landing screen's staggered entrance. Effects never feed back into screen
//! state; they only answer "where should this be drawn right now".
//!
//! All functions take `now` explicitly so the curves can be tested without a
//! real clock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::app::ShakeTarget;

/// Horizontal offsets visited by a shake, starting from rest.
const SHAKE_KEYFRAMES: [f32; 5] = [8.0, -8.0, 6.0, -6.0, 0.0];

/// Time spent moving between two shake keyframes.
const SHAKE_STEP: Duration = Duration::from_millis(50);

/// Delay between the start of each entrance track.
const ENTRANCE_STAGGER: Duration = Duration::from_millis(200);

/// Duration of each entrance track.
const ENTRANCE_DURATION: Duration = Duration::from_millis(800);

/// Initial downward offset of the landing content, in points.
pub const ENTRANCE_SLIDE_FROM: f32 = 50.0;

/// Initial scale of the landing header.
pub const ENTRANCE_SCALE_FROM: f32 = 0.8;

/// Total length of one shake
pub fn shake_duration() -> Duration {
    SHAKE_STEP * SHAKE_KEYFRAMES.len() as u32
}

/// Shake offset `elapsed` after it started
pub fn shake_offset(elapsed: Duration) -> f32 {
    let step_ms = SHAKE_STEP.as_secs_f32() * 1000.0;
    let elapsed_ms = elapsed.as_secs_f32() * 1000.0;
    let index = (elapsed_ms / step_ms) as usize;
    if index >= SHAKE_KEYFRAMES.len() {
        return 0.0;
    }

    let from = if index == 0 { 0.0 } else { SHAKE_KEYFRAMES[index - 1] };
    let to = SHAKE_KEYFRAMES[index];
    let t = (elapsed_ms - index as f32 * step_ms) / step_ms;
    from + (to - from) * t
}

/// Smooth ease-in-out on `[0, 1]`
fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn track_progress(elapsed: Duration, delay: Duration) -> f32 {
    let Some(active) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    ease_in_out(active.as_secs_f32() / ENTRANCE_DURATION.as_secs_f32())
}

/// One frame of the landing entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    /// 0 = invisible, 1 = opaque
    pub opacity: f32,
    /// Downward offset in points
    pub translate_y: f32,
    /// Header scale factor
    pub scale: f32,
}

impl EntranceFrame {
    /// Resting frame once the entrance has finished
    pub const SETTLED: EntranceFrame = EntranceFrame {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Frame `elapsed` after the entrance started
    ///
    /// Fade, slide and scale start 200 ms apart and each run for 800 ms.
    pub fn at(elapsed: Duration) -> Self {
        let fade = track_progress(elapsed, Duration::ZERO);
        let slide = track_progress(elapsed, ENTRANCE_STAGGER);
        let scale = track_progress(elapsed, ENTRANCE_STAGGER * 2);
        Self {
            opacity: fade,
            translate_y: ENTRANCE_SLIDE_FROM * (1.0 - slide),
            scale: ENTRANCE_SCALE_FROM + (1.0 - ENTRANCE_SCALE_FROM) * scale,
        }
    }
}

/// Total length of the entrance
pub fn entrance_duration() -> Duration {
    ENTRANCE_STAGGER * 2 + ENTRANCE_DURATION
}

/// Effect manager for coordinating animations
#[derive(Debug, Default)]
pub struct EffectManager {
    shakes: HashMap<ShakeTarget, Instant>,
    entrance_started: Option<Instant>,
}

impl EffectManager {
    /// Create new effect manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a shake on `target`
    pub fn trigger_shake(&mut self, target: ShakeTarget, now: Instant) {
        self.shakes.insert(target, now);
    }

    /// Current horizontal offset of `target`
    pub fn shake_offset(&self, target: ShakeTarget, now: Instant) -> f32 {
        self.shakes
            .get(&target)
            .map(|started| shake_offset(now.saturating_duration_since(*started)))
            .unwrap_or(0.0)
    }

    /// Start the landing entrance from the beginning
    pub fn start_entrance(&mut self, now: Instant) {
        self.entrance_started = Some(now);
    }

    /// Current entrance frame; settled when no entrance has been started
    pub fn entrance_frame(&self, now: Instant) -> EntranceFrame {
        match self.entrance_started {
            Some(started) => EntranceFrame::at(now.saturating_duration_since(started)),
            None => EntranceFrame::SETTLED,
        }
    }

    /// Whether anything still needs repainting
    pub fn is_animating(&self, now: Instant) -> bool {
        let shaking = self
            .shakes
            .values()
            .any(|started| now.saturating_duration_since(*started) < shake_duration());
        let entering = self
            .entrance_started
            .is_some_and(|started| now.saturating_duration_since(started) < entrance_duration());
        shaking || entering
    }

    /// Drop finished effects (called every frame)
    pub fn tick(&mut self, now: Instant) {
        self.shakes
            .retain(|_, started| now.saturating_duration_since(*started) < shake_duration());
        if self
            .entrance_started
            .is_some_and(|started| now.saturating_duration_since(started) >= entrance_duration())
        {
            self.entrance_started = None;
        }
    }

    /// Clear all active effects
    pub fn clear_all(&mut self) {
        self.shakes.clear();
        self.entrance_started = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_shake_hits_keyframes() {
        assert!(close(shake_offset(ms(0)), 0.0));
        assert!(close(shake_offset(ms(50)), 8.0));
        assert!(close(shake_offset(ms(100)), -8.0));
        assert!(close(shake_offset(ms(150)), 6.0));
        assert!(close(shake_offset(ms(200)), -6.0));
        assert!(close(shake_offset(ms(250)), 0.0));
        assert!(close(shake_offset(ms(10_000)), 0.0));
    }

    #[test]
    fn test_shake_interpolates_between_keyframes() {
        assert!(close(shake_offset(ms(25)), 4.0));
        assert!(close(shake_offset(ms(75)), 0.0));
        assert_eq!(shake_duration(), ms(250));
    }

    #[test]
    fn test_entrance_starts_hidden_and_settles() {
        let first = EntranceFrame::at(Duration::ZERO);
        assert!(close(first.opacity, 0.0));
        assert!(close(first.translate_y, ENTRANCE_SLIDE_FROM));
        assert!(close(first.scale, ENTRANCE_SCALE_FROM));

        let last = EntranceFrame::at(entrance_duration());
        assert_eq!(last, EntranceFrame::SETTLED);
        assert_eq!(entrance_duration(), ms(1200));
    }

    #[test]
    fn test_entrance_tracks_are_staggered() {
        let frame = EntranceFrame::at(ms(200));
        assert!(frame.opacity > 0.0);
        assert!(close(frame.translate_y, ENTRANCE_SLIDE_FROM));
        assert!(close(frame.scale, ENTRANCE_SCALE_FROM));

        let frame = EntranceFrame::at(ms(400));
        assert!(frame.translate_y < ENTRANCE_SLIDE_FROM);
        assert!(close(frame.scale, ENTRANCE_SCALE_FROM));

        let frame = EntranceFrame::at(ms(800));
        assert!(close(frame.opacity, 1.0));
        assert!(frame.scale > ENTRANCE_SCALE_FROM);
    }

    #[test]
    fn test_entrance_is_monotonic() {
        let mut previous = EntranceFrame::at(Duration::ZERO);
        for step in 1..=60 {
            let frame = EntranceFrame::at(ms(step * 20));
            assert!(frame.opacity >= previous.opacity);
            assert!(frame.translate_y <= previous.translate_y);
            assert!(frame.scale >= previous.scale);
            previous = frame;
        }
    }

    #[test]
    fn test_manager_shake_lifecycle() {
        let start = Instant::now();
        let mut effects = EffectManager::new();
        assert!(!effects.is_animating(start));

        effects.trigger_shake(ShakeTarget::Email, start);
        assert!(close(effects.shake_offset(ShakeTarget::Email, start + ms(50)), 8.0));
        assert!(close(effects.shake_offset(ShakeTarget::Password, start + ms(50)), 0.0));
        assert!(effects.is_animating(start + ms(100)));

        effects.tick(start + ms(300));
        assert!(!effects.is_animating(start + ms(300)));
        assert!(close(effects.shake_offset(ShakeTarget::Email, start + ms(50)), 0.0));
    }

    #[test]
    fn test_manager_entrance_lifecycle() {
        let start = Instant::now();
        let mut effects = EffectManager::new();
        assert_eq!(effects.entrance_frame(start), EntranceFrame::SETTLED);

        effects.start_entrance(start);
        assert!(close(effects.entrance_frame(start).opacity, 0.0));
        assert!(effects.is_animating(start + ms(1000)));

        effects.tick(start + ms(1200));
        assert_eq!(effects.entrance_frame(start + ms(1200)), EntranceFrame::SETTLED);

        effects.start_entrance(start);
        effects.trigger_shake(ShakeTarget::Captcha, start);
        effects.clear_all();
        assert!(!effects.is_animating(start));
    }
}
