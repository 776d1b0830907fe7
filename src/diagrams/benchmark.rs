// Zep efficiency comparison.
// Static latency and context-size bars against a full-context baseline.

use crate::state::visual::{Mark, Tone, Visual};

/// One comparison row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub metric: &'static str,
    pub summary: &'static str,
    /// Share of the track used by Zep, in percent.
    pub zep_share: f64,
    pub zep_tone: Tone,
}

impl Comparison {
    /// Share of the track used by the baseline.
    pub fn baseline_share(&self) -> f64 {
        100.0 - self.zep_share
    }
}

pub const COMPARISONS: [Comparison; 2] = [
    Comparison {
        metric: "Response Latency (gpt-4o)",
        summary: "2.58s vs 28.9s",
        zep_share: 9.0,
        zep_tone: Tone::Blue,
    },
    Comparison {
        metric: "Context Tokens",
        summary: "1.6k vs 115k",
        zep_share: 2.0,
        zep_tone: Tone::Green,
    },
];

/// Stateless benchmark bars.
#[derive(Debug, Clone, Copy, Default)]
pub struct EfficiencyBars;

impl EfficiencyBars {
    pub fn visual(&self) -> Visual {
        let mut visual = Visual::new();

        for (row, comparison) in COMPARISONS.iter().enumerate() {
            let y = 25.0 + row as f64 * 45.0;
            visual.push(Mark::label(0.0, y - 12.0, comparison.metric).tone(Tone::Ink));
            visual.push(Mark::label(70.0, y - 12.0, comparison.summary).tone(Tone::Ink).strong());
            visual.push(Mark::track(y, 0.0, comparison.zep_share).tone(comparison.zep_tone).strong());
            visual.push(
                Mark::track(y, comparison.zep_share, comparison.baseline_share())
                    .tone(Tone::Red)
                    .faint(),
            );
        }

        visual.with_caption("Structured at ingestion: no LLM calls at query time.")
    }
}
