use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    #[allow(dead_code)]
    Linear,
    /// Cubic ease-in-out (GSAP's `power2.inOut`).
    Power2InOut,
}

impl Easing {
    /// Map raw progress to eased progress. Input is clamped to [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Fire-and-forget rotation delta eased over a fixed duration.
///
/// Instead of writing absolute values, each step yields the increment since
/// the previous step, so the caller can add it on top of whatever else moves
/// the same rotation.
#[derive(Clone, Debug)]
pub struct RotationKick {
    pub target: usize,
    pub delta: Vec3,
    pub duration_sec: f32,
    pub easing: Easing,
    started_at: f32,
    applied: f32,
}

impl RotationKick {
    /// `now` is on the frame clock, so a kick queued between frames starts
    /// at the last tick rather than at the event itself.
    pub fn new(target: usize, delta: Vec3, duration_sec: f32, easing: Easing, now: f32) -> Self {
        Self {
            target,
            delta,
            duration_sec,
            easing,
            started_at: now,
            applied: 0.0,
        }
    }

    /// Increment to add at time `now`, and whether the kick has completed.
    pub fn step(&mut self, now: f32) -> (Vec3, bool) {
        let t = if self.duration_sec > 0.0 {
            (now - self.started_at) / self.duration_sec
        } else {
            1.0
        };
        let eased = self.easing.apply(t);
        let inc = self.delta * (eased - self.applied);
        self.applied = eased;
        (inc, t >= 1.0)
    }

    #[inline]
    #[allow(dead_code)]
    pub fn progress(&self) -> f32 {
        self.applied
    }
}

/// In-flight kicks; rarely more than one or two at once.
#[derive(Clone, Debug, Default)]
pub struct KickSet {
    active: SmallVec<[RotationKick; 4]>,
}

impl KickSet {
    pub fn push(&mut self, kick: RotationKick) {
        self.active.push(kick);
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Push every start time later by `seconds`.
    pub fn delay(&mut self, seconds: f32) {
        if !seconds.is_finite() || seconds <= 0.0 {
            return;
        }
        for kick in &mut self.active {
            kick.started_at += seconds;
        }
    }

    /// Advance every kick to `now`, handing each increment to `apply`.
    /// Completed kicks are dropped.
    pub fn advance(&mut self, now: f32, mut apply: impl FnMut(usize, Vec3)) {
        self.active.retain(|kick| {
            let (inc, done) = kick.step(now);
            apply(kick.target, inc);
            !done
        });
    }
}
