// AlphaQubit transformer decoder diagram.
// Auto-cycles through four pipeline phases on a fixed interval while mounted.

use std::time::Duration;

use crate::state::cycle::{Step, StepCycle};
use crate::state::timer::Ticker;
use crate::state::visual::{Emphasis, Mark, Tone, Visual};

/// Time between automatic phase changes.
pub const PHASE_INTERVAL: Duration = Duration::from_millis(2000);

pub static DECODER_PHASES: [Step; 4] = [
    Step::new("Syndrome", "▦", Tone::Gold).describe(
        "Input",
        "Stabilizer readouts are collected into a syndrome history.",
    ),
    Step::new("Attention", "◆", Tone::Gold).describe(
        "Transformer",
        "The recurrent transformer attends across space.",
    ),
    Step::new("Recurrence", "◆", Tone::Gold).describe(
        "Transformer",
        "State is carried forward across measurement rounds.",
    ),
    Step::new("Correction", "X", Tone::Green).describe(
        "Output",
        "The decoder predicts the logical correction.",
    ),
];

/// Self-advancing architecture diagram.
#[derive(Debug)]
pub struct TransformerDecoderDiagram {
    cycle: StepCycle,
    /// Present while mounted inside a runtime; dropping it stops the cycle.
    ticker: Option<Ticker>,
}

impl TransformerDecoderDiagram {
    /// Mount the diagram and start its interval. Requires a tokio runtime.
    pub fn mount() -> Self {
        Self {
            cycle: StepCycle::new(&DECODER_PHASES),
            ticker: Some(Ticker::start(PHASE_INTERVAL)),
        }
    }

    pub fn advance(&mut self) {
        self.cycle.advance();
    }

    /// Apply elapsed interval ticks.
    pub fn poll(&mut self) {
        let ticks = self.ticker.as_mut().map_or(0, Ticker::drain);
        for _ in 0..ticks {
            self.cycle.advance();
        }
    }

    pub fn visual(&self) -> Visual {
        let phase = self.cycle.index();
        let mut visual = Visual::new();

        // Syndrome input grid
        let input_tone = if phase == 0 { Tone::Gold } else { Tone::Muted };
        visual.push(Mark::square(18.0, 50.0, 22.0).tone(input_tone).emphasis(level(phase == 0)));
        for i in 0..9 {
            let x = 11.0 + (i % 3) as f64 * 7.0;
            let y = 43.0 + (i / 3) as f64 * 7.0;
            // Fixed syndrome pattern
            let flagged = matches!(i, 1 | 5 | 6);
            let dot = Mark::dot(x, y, 1.5);
            visual.push(if flagged { dot.tone(Tone::Ink) } else { dot.tone(Tone::Muted).faint() });
        }
        visual.push(Mark::label(18.0, 70.0, "SYNDROME").tone(Tone::Muted));

        // Arrow into the transformer
        visual.push(Mark::line(31.0, 50.0, 37.0, 50.0).tone(Tone::Ink).emphasis(level(phase >= 1)));

        // Transformer block
        let busy = phase == 1 || phase == 2;
        visual.push(
            Mark::square(50.0, 50.0, 24.0)
                .tone(if busy { Tone::Ink } else { Tone::Muted })
                .emphasis(level(busy)),
        );
        visual.push(Mark::label(50.0, 50.0, "◆").tone(if busy { Tone::Gold } else { Tone::Muted }));
        if phase == 1 {
            visual.push(Mark::line(40.0, 44.0, 60.0, 44.0).tone(Tone::Gold));
            visual.push(Mark::line(40.0, 56.0, 60.0, 56.0).tone(Tone::Gold));
        }
        visual.push(Mark::label(50.0, 70.0, "TRANSFORMER").tone(Tone::Muted));

        // Arrow into the output
        visual.push(Mark::line(63.0, 50.0, 69.0, 50.0).tone(Tone::Ink).emphasis(level(phase >= 3)));

        // Correction output
        let done = phase == 3;
        visual.push(
            Mark::square(82.0, 50.0, 22.0)
                .tone(if done { Tone::Green } else { Tone::Muted })
                .emphasis(level(done)),
        );
        visual.push(
            Mark::label(82.0, 50.0, if done { "X" } else { "?" })
                .tone(if done { Tone::Green } else { Tone::Muted }),
        );
        visual.push(Mark::label(82.0, 70.0, "CORRECTION").tone(Tone::Muted));

        // Phase indicator
        for i in 0..self.cycle.len() {
            let x = 38.0 + i as f64 * 8.0;
            let mark = Mark::track(88.0, x, if i == phase { 6.0 } else { 2.0 });
            visual.push(if i == phase { mark.tone(Tone::Gold) } else { mark.tone(Tone::Muted) });
        }

        let step = self.cycle.current();
        visual
            .with_caption(step.detail)
            .with_status(format!("{} · {}", step.title, step.label))
    }
}

fn level(on: bool) -> Emphasis {
    if on { Emphasis::Strong } else { Emphasis::Faint }
}

#[cfg(test)]
impl TransformerDecoderDiagram {
    /// A diagram without a running interval; advanced only by `advance()`.
    pub fn still() -> Self {
        Self {
            cycle: StepCycle::new(&DECODER_PHASES),
            ticker: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn phase(&self) -> usize {
        self.cycle.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_cycles_every_interval() {
        let mut diagram = TransformerDecoderDiagram::mount();
        assert_eq!(diagram.phase(), 0);

        tokio::time::sleep(Duration::from_millis(2100)).await;
        diagram.poll();
        assert_eq!(diagram.phase(), 1);

        tokio::time::sleep(Duration::from_millis(6000)).await;
        diagram.poll();
        // Four periods in total wraps back to the first phase
        assert_eq!(diagram.phase(), 0);
    }

    #[test]
    fn test_still_diagram_only_moves_on_advance() {
        let mut diagram = TransformerDecoderDiagram::still();
        diagram.poll();
        assert_eq!(diagram.phase(), 0);
        assert!(!diagram.is_animating());

        for _ in 0..3 {
            diagram.advance();
        }
        let visual = diagram.visual();
        assert!(visual.has_label("X"));
        assert!(!visual.has_label("?"));
    }
}
