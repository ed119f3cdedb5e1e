use super::constants::{LOADER_FADE_MS, LOADER_HIDE_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Shown,
    Fading,
    Hidden,
}

impl LoaderPhase {
    /// Phase of the loading overlay `elapsed_ms` after boot. Depends on time
    /// alone, never on whether the 3D scene came up.
    pub fn at(elapsed_ms: u32) -> Self {
        if elapsed_ms >= LOADER_HIDE_MS {
            LoaderPhase::Hidden
        } else if elapsed_ms >= LOADER_FADE_MS {
            LoaderPhase::Fading
        } else {
            LoaderPhase::Shown
        }
    }

    /// Timer offsets at which the overlay changes phase.
    pub fn schedule() -> [(u32, LoaderPhase); 2] {
        [
            (LOADER_FADE_MS, LoaderPhase::Fading),
            (LOADER_HIDE_MS, LoaderPhase::Hidden),
        ]
    }
}
