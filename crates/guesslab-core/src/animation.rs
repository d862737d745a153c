// File: crates/guesslab-core/src/animation.rs
// Summary: Eased progressive-reveal timing as an explicit state machine.
// Notes:
// - Time is supplied by the caller in milliseconds (monotonic clock or a
//   display-refresh timestamp), so the machine is deterministic under test.
// - Every `start` bumps a generation counter. A frame requested with an older
//   token is refused, which keeps a superseded animation from drawing over
//   the surface after a new render has begun.

/// Length of the reveal animation.
pub const REVEAL_DURATION_MS: f64 = 800.0;

/// Ease-out cubic: fast start, decelerating to 1.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Identifies one render request; only the latest one may draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderToken {
    generation: u64,
}

impl RenderToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationState {
    Idle,
    Animating { started_ms: f64, generation: u64 },
}

/// Timing of one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Linear elapsed fraction in `[0, 1]`.
    pub raw: f64,
    /// `ease_out_cubic(raw)`.
    pub eased: f64,
    /// True for the frame that completes the animation.
    pub last: bool,
}

#[derive(Clone, Debug)]
pub struct Animator {
    state: AnimationState,
    generation: u64,
    duration_ms: f64,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(REVEAL_DURATION_MS)
    }
}

impl Animator {
    pub fn new(duration_ms: f64) -> Self {
        Self { state: AnimationState::Idle, generation: 0, duration_ms: duration_ms.max(1.0) }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimationState::Animating { .. })
    }

    /// Begin a new animation at `now_ms`, superseding any running one.
    pub fn start(&mut self, now_ms: f64) -> RenderToken {
        if let AnimationState::Animating { generation, .. } = self.state {
            tracing::debug!(superseded = generation, "restarting reveal animation");
        }
        self.generation += 1;
        self.state = AnimationState::Animating { started_ms: now_ms, generation: self.generation };
        RenderToken { generation: self.generation }
    }

    /// Stop without drawing further frames; outstanding tokens go stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.state = AnimationState::Idle;
    }

    /// Whether `token` belongs to the animation currently running.
    pub fn is_current(&self, token: RenderToken) -> bool {
        matches!(self.state, AnimationState::Animating { generation, .. } if generation == token.generation)
    }

    /// Timing for the frame at `now_ms`, or `None` if `token` is stale or nothing runs.
    pub fn frame(&mut self, token: RenderToken, now_ms: f64) -> Option<Frame> {
        let AnimationState::Animating { started_ms, generation } = self.state else {
            return None;
        };
        if generation != token.generation {
            return None;
        }
        let elapsed = (now_ms - started_ms).max(0.0);
        let raw = (elapsed / self.duration_ms).min(1.0);
        let last = raw >= 1.0;
        if last {
            self.state = AnimationState::Idle;
            tracing::debug!(generation, "reveal animation finished");
        }
        Some(Frame { raw, eased: ease_out_cubic(raw), last })
    }
}
