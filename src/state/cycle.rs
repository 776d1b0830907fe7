// Generic step cycle used by the diagram widgets.
// A fixed, ordered list of named steps with a current index that wraps around.

use crate::state::visual::Tone;

/// One named step of a cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub label: &'static str,
    /// Single glyph drawn for the step.
    pub marker: &'static str,
    pub tone: Tone,
    pub title: &'static str,
    pub detail: &'static str,
    /// Code-like example string, if any.
    pub example: Option<&'static str>,
}

impl Step {
    pub const fn new(label: &'static str, marker: &'static str, tone: Tone) -> Self {
        Self {
            label,
            marker,
            tone,
            title: label,
            detail: "",
            example: None,
        }
    }

    pub const fn describe(mut self, title: &'static str, detail: &'static str) -> Self {
        self.title = title;
        self.detail = detail;
        self
    }

    pub const fn example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }
}

/// Cursor over a fixed step enumeration.
#[derive(Debug, Clone)]
pub struct StepCycle {
    steps: &'static [Step],
    current: usize,
}

#[allow(clippy::len_without_is_empty)]
impl StepCycle {
    /// Start at the first step. `steps` must be non-empty.
    pub fn new(steps: &'static [Step]) -> Self {
        assert!(!steps.is_empty(), "a step cycle needs at least one step");
        Self { steps, current: 0 }
    }

    /// Start at `index` (clamped to the last step).
    pub fn starting_at(steps: &'static [Step], index: usize) -> Self {
        let mut cycle = Self::new(steps);
        cycle.select(index);
        cycle
    }

    /// Move to the next step, wrapping to the first after the last.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.steps.len();
    }

    /// Select a step directly.
    pub fn select(&mut self, index: usize) {
        self.current = index.min(self.steps.len() - 1);
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_last(&self) -> bool {
        self.current == self.steps.len() - 1
    }

    /// Fraction of the cycle completed including the current step, in (0, 1].
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.steps.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPS: [Step; 3] = [
        Step::new("One", "1", Tone::Blue),
        Step::new("Two", "2", Tone::Red),
        Step::new("Three", "3", Tone::Green).describe("Third", "Last step"),
    ];

    #[test]
    fn test_advance_wraps() {
        let mut cycle = StepCycle::new(&STEPS);
        assert_eq!(cycle.current().label, "One");

        cycle.advance();
        cycle.advance();
        assert!(cycle.is_last());
        assert_eq!(cycle.current().title, "Third");

        cycle.advance();
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_select_clamps() {
        let mut cycle = StepCycle::starting_at(&STEPS, 1);
        assert_eq!(cycle.index(), 1);

        cycle.select(10);
        assert_eq!(cycle.index(), 2);
    }

    #[test]
    fn test_progress() {
        let mut cycle = StepCycle::new(&STEPS);
        assert!((cycle.progress() - 1.0 / 3.0).abs() < f64::EPSILON);
        cycle.select(2);
        assert_eq!(cycle.progress(), 1.0);
    }
}
