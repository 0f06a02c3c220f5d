use core::time::Duration;
use num_derive::FromPrimitive;
use std::time::Instant;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
/// The phases of a physics frame, in execution order.
pub enum Phase {
    /// Colliders of the prepare list get ready for detection.
    Prepare = 0,
    /// Moving kinematic colliders are swept against the other colliders.
    CustomDetection,
    /// Collider bounds are refreshed and pending transforms are pushed to the solver.
    PrepareForStep,
    /// The rigid-body solver advances the simulation.
    Step,
    /// Colliders pull their transforms back from their rigid bodies.
    UpdateFromBody,
    /// Colliders of the finish list complete detection.
    Finish,
    /// Touch sensors notify enter and leave events.
    TouchSensors,
    /// Collision tests are evaluated.
    PostPhysicsTests,
}

impl Phase {
    /// The number of phases.
    pub const COUNT: usize = 8;
}

/// Statistics of one phase, accumulated since the last reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PhaseStats {
    /// Wall-clock time spent in the phase.
    pub elapsed: Duration,
    /// Number of colliders or touch sensors visited by the phase.
    pub visited: usize,
    /// Number of times the phase ran.
    pub runs: usize,
}

/// Diagnostics collected while processing physics frames.
///
/// Nothing is recorded unless the context is enabled.
#[derive(Clone, Debug, Default)]
pub struct DebugContext {
    enabled: bool,
    frames: u64,
    stats: [PhaseStats; Phase::COUNT],
}

impl DebugContext {
    /// Creates a debug context, recording only if `enabled` is set.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Default::default()
        }
    }

    /// Is recording enabled?
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables recording.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The number of frames processed while recording was enabled.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// The statistics of `phase`.
    pub fn stats(&self, phase: Phase) -> &PhaseStats {
        &self.stats[phase as usize]
    }

    /// Clears every counter.
    pub fn reset(&mut self) {
        self.frames = 0;
        self.stats = Default::default();
    }

    pub(crate) fn begin_frame(&mut self) {
        if self.enabled {
            self.frames += 1;
        }
    }

    /// Starts timing a phase. Returns `None` when recording is disabled.
    pub(crate) fn begin(&self) -> Option<Instant> {
        self.enabled.then(Instant::now)
    }

    pub(crate) fn end(&mut self, phase: Phase, started: Option<Instant>, visited: usize) {
        if let Some(started) = started {
            let stats = &mut self.stats[phase as usize];
            stats.elapsed += started.elapsed();
            stats.visited += visited;
            stats.runs += 1;
        }

        log::trace!("{:?} phase done, {} visited", phase, visited);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn disabled_context_records_nothing() {
        let mut debug = DebugContext::new(false);
        let started = debug.begin();
        debug.end(Phase::Prepare, started, 3);
        assert!(started.is_none());
        assert_eq!(*debug.stats(Phase::Prepare), PhaseStats::default());

        debug.set_enabled(true);
        let started = debug.begin();
        debug.end(Phase::Prepare, started, 3);
        assert_eq!(debug.stats(Phase::Prepare).visited, 3);
        assert_eq!(debug.stats(Phase::Prepare).runs, 1);
    }
}
