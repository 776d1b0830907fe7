// Deep Research just-in-time memory simulation.
// A single start schedules a fixed chain of phase changes that ends back at idle.

use std::time::Duration;

use crate::state::timer::TimerChain;
use crate::state::visual::{Mark, Tone, Visual};

/// Phase of the research simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResearchPhase {
    #[default]
    Idle,
    Planning,
    Searching,
    Synthesizing,
}

impl ResearchPhase {
    pub fn display(&self) -> &'static str {
        match self {
            ResearchPhase::Idle => "Idle",
            ResearchPhase::Planning => "Planning",
            ResearchPhase::Searching => "Searching",
            ResearchPhase::Synthesizing => "Synthesizing",
        }
    }
}

/// Transitions after `start()`, as absolute offsets from the start.
pub const SCHEDULE: [(Duration, ResearchPhase); 3] = [
    (Duration::from_millis(1500), ResearchPhase::Searching),
    (Duration::from_millis(3500), ResearchPhase::Synthesizing),
    (Duration::from_millis(5000), ResearchPhase::Idle),
];

/// Number of researcher sub-agents drawn.
const WORKERS: usize = 3;

/// Timer-driven research simulation.
#[derive(Debug, Default)]
pub struct DeepResearchDiagram {
    phase: ResearchPhase,
    chain: TimerChain<ResearchPhase>,
    /// Runs that have returned to idle.
    completed_runs: usize,
}

impl DeepResearchDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.phase == ResearchPhase::Idle
    }

    /// Start a run. Ignored (returns false) while a run is in progress.
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> bool {
        if !self.is_idle() {
            log::debug!("Research simulation already running, ignoring start");
            return false;
        }

        self.phase = ResearchPhase::Planning;
        self.chain.schedule(SCHEDULE.to_vec());
        log::debug!("Research simulation started");
        true
    }

    /// Apply delivered phase changes.
    pub fn poll(&mut self) {
        for phase in self.chain.drain() {
            self.phase = phase;
            if phase == ResearchPhase::Idle {
                self.completed_runs += 1;
                log::debug!("Research simulation finished ({} runs)", self.completed_runs);
            }
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_idle() {
            "Run Research Simulation"
        } else {
            "Simulating..."
        }
    }

    pub fn query_label(&self) -> &'static str {
        match self.phase {
            ResearchPhase::Idle => "Complex Query",
            ResearchPhase::Synthesizing => "Synthesizing Answer...",
            ResearchPhase::Planning | ResearchPhase::Searching => "Processing...",
        }
    }

    pub fn visual(&self) -> Visual {
        let active = !self.is_idle();
        let mut visual = Visual::new();

        let pill = Mark::square(50.0, 15.0, 14.0).tone(Tone::Purple);
        visual.push(if active { pill.strong() } else { pill.faint() });
        visual.push(Mark::label(50.0, 15.0, self.query_label()).tone(Tone::Purple));

        // Researchers fan out while searching and collapse while synthesizing
        if active && self.phase != ResearchPhase::Synthesizing {
            for i in 0..WORKERS {
                let offset = i as f64 - 1.0;
                let (x, y) = if self.phase == ResearchPhase::Searching {
                    (50.0 + offset * 25.0, 55.0)
                } else {
                    (50.0, 40.0)
                };
                visual.push(Mark::square(x, y, 8.0).tone(Tone::Purple));
                visual.push(Mark::label(x, y, "⌕").tone(Tone::Purple));
                if self.phase == ResearchPhase::Searching {
                    visual.push(Mark::line(x, y, 50.0, 85.0).tone(Tone::Purple).faint());
                }
            }
        }

        visual.push(Mark::track(85.0, 20.0, 60.0).tone(Tone::Muted));
        visual.push(Mark::label(50.0, 93.0, "Raw History").tone(Tone::Muted));

        visual
            .with_caption(format!("[{}]", self.button_label()))
            .with_status(format!("Phase: {}", self.phase.display()))
    }
}

#[cfg(test)]
impl DeepResearchDiagram {
    pub fn phase(&self) -> ResearchPhase {
        self.phase
    }

    pub fn completed_runs(&self) -> usize {
        self.completed_runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_full_run_returns_to_idle() {
        let mut diagram = DeepResearchDiagram::new();
        assert!(diagram.start());
        assert_eq!(diagram.phase(), ResearchPhase::Planning);

        tokio::time::sleep(Duration::from_millis(1600)).await;
        diagram.poll();
        assert_eq!(diagram.phase(), ResearchPhase::Searching);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        diagram.poll();
        assert_eq!(diagram.phase(), ResearchPhase::Synthesizing);
        assert_eq!(diagram.query_label(), "Synthesizing Answer...");

        tokio::time::sleep(Duration::from_millis(1500)).await;
        diagram.poll();
        assert!(diagram.is_idle());
        assert_eq!(diagram.completed_runs(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_is_ignored() {
        let mut diagram = DeepResearchDiagram::new();
        assert!(diagram.start());
        assert!(!diagram.start());

        tokio::time::sleep(Duration::from_millis(500)).await;
        diagram.poll();
        assert!(!diagram.start());

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        diagram.poll();
        assert!(diagram.is_idle());
        assert_eq!(diagram.completed_runs(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_completion() {
        let mut diagram = DeepResearchDiagram::new();
        diagram.start();
        tokio::time::sleep(Duration::from_millis(5100)).await;
        diagram.poll();

        assert!(diagram.start());
        tokio::time::sleep(Duration::from_millis(5100)).await;
        diagram.poll();
        assert_eq!(diagram.completed_runs(), 2);
    }

    #[test]
    fn test_idle_visual() {
        let diagram = DeepResearchDiagram::new();
        let visual = diagram.visual();
        assert!(visual.has_label("Complex Query"));
        assert!(!visual.has_label("⌕"));
        assert_eq!(diagram.button_label(), "Run Research Simulation");
    }
}
