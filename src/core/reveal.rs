use super::constants::REVEAL_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Visible,
}

impl Reveal {
    /// Apply one visibility observation. Once visible, always visible.
    #[inline]
    pub fn observe(self, is_intersecting: bool, ratio: f64) -> Self {
        match self {
            Reveal::Visible => Reveal::Visible,
            Reveal::Hidden if is_intersecting && ratio >= REVEAL_THRESHOLD => Reveal::Visible,
            Reveal::Hidden => Reveal::Hidden,
        }
    }
}

/// Reveal state for a fixed set of observed elements, by index.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    states: Vec<Reveal>,
}

impl RevealSet {
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![Reveal::Hidden; count],
        }
    }

    /// Returns `true` only on the observation that first reveals `index`.
    pub fn observe(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> bool {
        let Some(state) = self.states.get_mut(index) else {
            return false;
        };
        let before = *state;
        *state = before.observe(is_intersecting, ratio);
        before == Reveal::Hidden && *state == Reveal::Visible
    }

    pub fn is_visible(&self, index: usize) -> bool {
        matches!(self.states.get(index), Some(Reveal::Visible))
    }

    pub fn visible_count(&self) -> usize {
        self.states.iter().filter(|s| **s == Reveal::Visible).count()
    }
}
