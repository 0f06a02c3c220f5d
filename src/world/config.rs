use crate::math::Real;

/// Parameters of the per-frame collision detection pipeline.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// The fixed sub-step size of the rigid-body solver, in seconds.
    pub sim_time_step: Real,
    /// The maximum number of solver sub-steps per frame.
    pub max_sub_steps: usize,
    /// Frames shorter than this skip the custom detection pass, in seconds.
    pub min_detection_elapsed: Real,
    /// Should per-phase timings and counters be recorded?
    pub debug_enabled: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            sim_time_step: 1.0 / 120.0,
            max_sub_steps: 10,
            min_detection_elapsed: 1.0e-6,
            debug_enabled: false,
        }
    }
}
