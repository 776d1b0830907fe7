// Zep bi-temporal knowledge graph diagram.
// Switching the timeline invalidates the old edge instead of deleting it.

use crate::state::cycle::{Step, StepCycle};
use crate::state::visual::{Mark, Tone, Visual};

pub static TIMELINE: [Step; 2] = [
    Step::new("T1", "●", Tone::Blue).describe("Sept 07", "\"I love Adidas\""),
    Step::new("T2", "●", Tone::Blue).describe("Oct 14", "\"I'll wear Nike\""),
];

/// Two-point timeline view of a changing preference.
#[derive(Debug, Clone)]
pub struct TemporalGraphDiagram {
    timeline: StepCycle,
}

impl Default for TemporalGraphDiagram {
    fn default() -> Self {
        Self::new()
    }
}

impl TemporalGraphDiagram {
    pub fn new() -> Self {
        Self {
            timeline: StepCycle::new(&TIMELINE),
        }
    }

    /// Flip between T1 and T2.
    pub fn advance(&mut self) {
        self.timeline.advance();
    }

    pub fn select(&mut self, index: usize) {
        self.timeline.select(index);
    }

    /// Position of the selected timeline.
    pub fn selected(&self) -> usize {
        self.timeline.index()
    }

    /// Whether the later timeline point is shown.
    pub fn is_updated(&self) -> bool {
        self.timeline.index() == 1
    }

    pub fn timeline_label(&self) -> String {
        let step = self.timeline.current();
        format!("{}: {}", step.title, step.detail)
    }

    pub fn visual(&self) -> Visual {
        let updated = self.is_updated();
        let mut visual = Visual::new()
            .with_mark(Mark::dot(15.0, 50.0, 9.0).tone(Tone::Ink).strong())
            .with_mark(Mark::label(15.0, 50.0, "Robbie").tone(Tone::Ink));

        // The Adidas edge drifts up and greys out once invalidated
        let adidas_y = if updated { 30.0 } else { 50.0 };
        let edge = Mark::line(25.0, 50.0, 75.0, adidas_y);
        let node = Mark::dot(85.0, adidas_y, 8.0);
        if updated {
            visual.push(edge.tone(Tone::Muted).faint());
            visual.push(Mark::label(50.0, 36.0, "INVALIDATED").tone(Tone::Muted).faint());
            visual.push(node.tone(Tone::Muted).faint());
            visual.push(Mark::label(85.0, adidas_y, "Adidas").tone(Tone::Muted));
        } else {
            visual.push(edge.tone(Tone::Blue));
            visual.push(Mark::label(50.0, 45.0, "LOVES").tone(Tone::Blue));
            visual.push(node.tone(Tone::Blue).strong());
            visual.push(Mark::label(85.0, adidas_y, "Adidas").tone(Tone::Ink));
        }

        if updated {
            visual.push(Mark::line(25.0, 50.0, 75.0, 70.0).tone(Tone::Blue).strong());
            visual.push(Mark::label(50.0, 66.0, "WILL_WEAR").tone(Tone::Blue));
            visual.push(Mark::dot(85.0, 70.0, 8.0).tone(Tone::Blue).strong());
            visual.push(Mark::label(85.0, 70.0, "Nike").tone(Tone::Ink));
        }

        visual
            .with_caption("Valid time: when the fact is true. Transaction time: when it was recorded.")
            .with_status(self.timeline_label())
    }
}
