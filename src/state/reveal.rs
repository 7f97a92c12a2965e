//! One-shot reveal bookkeeping for `.reveal` elements.
//!
//! Targets are addressed by their index in document order. Once revealed an
//! element stays revealed; later intersection reports are ignored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const TARGET_SELECTOR: &str = ".reveal";
pub const VISIBLE_CLASS: &str = "is-visible";

/// How targets get revealed on this page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealPlan {
    Observe { threshold: f64 },
    RevealAll,
    Nothing,
}

impl RevealPlan {
    pub fn choose(observer_supported: bool, target_count: usize, threshold: f64) -> Self {
        match (target_count, observer_supported) {
            (0, _) => Self::Nothing,
            (_, true) => Self::Observe { threshold },
            (_, false) => Self::RevealAll,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(target_count: usize) -> Self {
        Self { revealed: vec![false; target_count] }
    }

    /// Record an intersection report. Returns `true` exactly once per target,
    /// the first time it is reported intersecting; the caller then adds the
    /// visible class and stops observing it.
    pub fn report(&mut self, index: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if intersecting && !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }
}
