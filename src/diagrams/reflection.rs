// Agent-R reflection loop diagram.
// Five-step self-correction cycle advanced one step per press.

use crate::state::cycle::{Step, StepCycle};
use crate::state::visual::{Mark, Tone, Visual};

pub static REFLECTION_STEPS: [Step; 5] = [
    Step::new("Action", "▶", Tone::Orange)
        .describe(
            "Step 1: Agent Action",
            "The agent generates code to solve the user's task.",
        )
        .example("run_python(\"pandas.read_csv('data.csv')\")"),
    Step::new("Failure", "⚠", Tone::Red)
        .describe(
            "Step 2: Execution Failure",
            "The environment halts execution due to an error.",
        )
        .example("❌ FileNotFoundError: [Errno 2] No such file or directory: 'data.csv'"),
    Step::new("Reflection", "✎", Tone::Blue)
        .describe(
            "Step 3: Self-Reflection",
            "The agent generates a critique to understand why it failed.",
        )
        .example(
            "CRITIQUE: I assumed the file was in the root directory. I should have listed files first to verify the path.",
        ),
    Step::new("Update", "↻", Tone::Purple)
        .describe(
            "Step 4: Policy Update",
            "The agent adds a new rule to its long-term memory.",
        )
        .example(
            "Rule Added: 'Always run list_files() before reading specific files to avoid path errors.'",
        ),
    Step::new("Success", "✔", Tone::Green)
        .describe(
            "Step 5: Retry & Success",
            "The agent applies the new rule and succeeds.",
        )
        .example("✅ list_files() -> 'data/2025/data.csv' -> read_csv(...)"),
];

/// Iterative self-correction loop.
#[derive(Debug, Clone)]
pub struct ReflectionLoopDiagram {
    cycle: StepCycle,
}

impl Default for ReflectionLoopDiagram {
    fn default() -> Self {
        Self::new()
    }
}

impl ReflectionLoopDiagram {
    pub fn new() -> Self {
        Self {
            cycle: StepCycle::new(&REFLECTION_STEPS),
        }
    }

    pub fn advance(&mut self) {
        self.cycle.advance();
    }

    /// Label of the advance button.
    pub fn button_label(&self) -> &'static str {
        if self.cycle.is_last() {
            "Reset Loop"
        } else {
            "Next Step"
        }
    }

    pub fn visual(&self) -> Visual {
        let step = self.cycle.current();
        let mut visual = Visual::new()
            .with_mark(Mark::arc(50.0, 50.0, 40.0, 1.0).tone(Tone::Orange).faint())
            .with_mark(Mark::arc(50.0, 50.0, 40.0, self.cycle.progress()).tone(Tone::Orange).strong())
            .with_mark(Mark::label(50.0, 45.0, step.marker).tone(step.tone).strong())
            .with_mark(Mark::label(50.0, 55.0, step.label).tone(Tone::Ink).strong());

        // Phase dots around the ring
        for (i, s) in self.cycle.steps().iter().enumerate() {
            let angle = std::f64::consts::TAU * i as f64 / self.cycle.len() as f64;
            let x = 50.0 + 40.0 * angle.sin();
            let y = 50.0 - 40.0 * angle.cos();
            let dot = Mark::dot(x, y, 3.0).tone(s.tone);
            visual.push(if i <= self.cycle.index() { dot.strong() } else { dot.faint() });
        }

        visual
            .with_caption(format!("{}: {}", step.title, step.detail))
            .with_status(step.example.unwrap_or_default())
    }
}

#[cfg(test)]
impl ReflectionLoopDiagram {
    pub fn step(&self) -> usize {
        self.cycle.index()
    }

    pub fn current(&self) -> &Step {
        self.cycle.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_advances_reach_success_fifth_wraps() {
        let mut diagram = ReflectionLoopDiagram::new();
        assert_eq!(diagram.current().label, "Action");

        for _ in 0..4 {
            diagram.advance();
        }
        assert_eq!(diagram.step(), 4);
        assert_eq!(diagram.current().label, "Success");
        assert_eq!(diagram.button_label(), "Reset Loop");

        diagram.advance();
        assert_eq!(diagram.step(), 0);
        assert_eq!(diagram.button_label(), "Next Step");
    }

    #[test]
    fn test_visual_tracks_step() {
        let mut diagram = ReflectionLoopDiagram::new();
        diagram.advance();

        let visual = diagram.visual();
        assert!(visual.has_label("Failure"));
        assert!(visual.caption.unwrap().starts_with("Step 2: Execution Failure"));
        assert!(visual.status.unwrap().contains("FileNotFoundError"));
    }
}
