use heapless::Vec;
use l3gd20::AngularRate;

use crate::config::CAP;

/// A fixed-capacity, chronologically ordered series of angular-rate samples.
///
/// Sample `i` was taken roughly `i` sample intervals after capture start.
/// Storage is reserved up front; pushing past [`CAP`] is rejected.
#[derive(Debug, Clone, Default)]
pub struct GestureTemplate {
    samples: Vec<AngularRate, CAP>,
}

impl GestureTemplate {
    pub const fn new() -> Self {
        Self { samples: Vec::new() }
    }

    /// Build a template from the first [`CAP`] samples of `samples`.
    pub fn from_samples(samples: &[AngularRate]) -> Self {
        let mut template = Self::new();
        for &s in samples.iter().take(CAP) {
            let _ = template.push(s);
        }
        template
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Append a sample, handing it back if the template is full.
    pub fn push(&mut self, sample: AngularRate) -> Result<(), AngularRate> {
        self.samples.push(sample)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.is_full()
    }

    pub fn samples(&self) -> &[AngularRate] {
        &self.samples
    }
}
