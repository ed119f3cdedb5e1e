use super::constants::{
    CONSTRAINED_CONCURRENCY, PARTICLE_COUNT_FULL, PARTICLE_COUNT_REDUCED, PIXEL_RATIO_CAP_FULL,
    PIXEL_RATIO_CAP_REDUCED,
};

/// Rendering budget picked from the device's hardware concurrency hint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityProfile {
    pub particle_count: usize,
    pub pixel_ratio_cap: f64,
}

impl QualityProfile {
    pub const FULL: Self = Self {
        particle_count: PARTICLE_COUNT_FULL,
        pixel_ratio_cap: PIXEL_RATIO_CAP_FULL,
    };

    pub const REDUCED: Self = Self {
        particle_count: PARTICLE_COUNT_REDUCED,
        pixel_ratio_cap: PIXEL_RATIO_CAP_REDUCED,
    };

    /// Constrained devices get fewer particles and a lower density cap.
    /// A missing or nonsensical hint is treated as unconstrained.
    pub fn for_concurrency(hint: Option<f64>) -> Self {
        match hint {
            Some(cores) if cores.is_finite() && cores >= 1.0 => {
                if (cores as u32) < CONSTRAINED_CONCURRENCY {
                    Self::REDUCED
                } else {
                    Self::FULL
                }
            }
            _ => Self::FULL,
        }
    }

    pub fn is_reduced(&self) -> bool {
        self.particle_count < PARTICLE_COUNT_FULL
    }
}
