// Interactive diagram widgets.
// Each widget owns a small state and maps it to a `Visual` on demand.

pub mod benchmark;
pub mod cluster;
pub mod network;
pub mod parity;
pub mod performance;
pub mod reflection;
pub mod research;
pub mod temporal;
pub mod transformer;

use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::state::visual::Visual;

pub use benchmark::EfficiencyBars;
pub use cluster::ZettelkastenDiagram;
pub use network::NetworkScene;
pub use parity::SurfaceCodeDiagram;
pub use performance::PerformanceChart;
pub use reflection::ReflectionLoopDiagram;
pub use research::DeepResearchDiagram;
pub use temporal::TemporalGraphDiagram;
pub use transformer::TransformerDecoderDiagram;

/// Which widget a paper page mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    SurfaceCode,
    TransformerDecoder,
    Performance,
    TemporalGraph,
    Efficiency,
    Zettelkasten,
    DeepResearch,
    ReflectionLoop,
}

impl DiagramKind {
    pub fn title(&self) -> &'static str {
        match self {
            DiagramKind::SurfaceCode => "Surface Code Detection",
            DiagramKind::TransformerDecoder => "AlphaQubit Architecture",
            DiagramKind::Performance => "Performance vs Standard",
            DiagramKind::TemporalGraph => "Bi-Temporal Knowledge Graph",
            DiagramKind::Efficiency => "Efficiency Breakthrough",
            DiagramKind::Zettelkasten => "Self-Organizing Memory",
            DiagramKind::DeepResearch => "Just-in-Time Memory Research",
            DiagramKind::ReflectionLoop => "Iterative Self-Correction",
        }
    }

    /// Short label for the focus tabs.
    pub fn tab_label(&self) -> &'static str {
        match self {
            DiagramKind::SurfaceCode => "Surface Code",
            DiagramKind::TransformerDecoder => "Decoder",
            DiagramKind::Performance => "Performance",
            DiagramKind::TemporalGraph => "Temporal Graph",
            DiagramKind::Efficiency => "Efficiency",
            DiagramKind::Zettelkasten => "Memory Map",
            DiagramKind::DeepResearch => "Research",
            DiagramKind::ReflectionLoop => "Reflection",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DiagramKind::SurfaceCode => {
                "Inject errors on the data qubits and watch the stabilizers light up when they detect an odd number of errors."
            }
            DiagramKind::TransformerDecoder => {
                "The model processes syndrome history using a recurrent transformer, attending to spatial and temporal correlations."
            }
            DiagramKind::Performance => {
                "AlphaQubit consistently achieves lower logical error rates than the standard Minimum-Weight Perfect Matching decoder."
            }
            DiagramKind::TemporalGraph => {
                "Resolving contradictions without deleting history. See how the memory evolves when the user changes their mind."
            }
            DiagramKind::Efficiency => {
                "Graphiti retrieves without re-processing raw data at query time, cutting latency and token usage compared to standard RAG."
            }
            DiagramKind::Zettelkasten => {
                "Each new note is linked into the memory network and settles next to related notes."
            }
            DiagramKind::DeepResearch => {
                "Instead of summarizing everything up front, researcher agents search raw history when a question arrives."
            }
            DiagramKind::ReflectionLoop => {
                "The agent fails, reflects on the failure, updates its plan and tries again."
            }
        }
    }
}

/// Target of a click on a diagram button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Digit-picker slot: qubit toggle, distance or timeline.
    Select(usize),
    /// The Enter/Space action.
    Action,
}

/// A control drawn in the button row under a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub control: Control,
    /// Toggled qubit or selected distance/timeline.
    pub active: bool,
}

impl Button {
    fn select(index: usize, label: impl Into<String>, active: bool) -> Self {
        Self {
            label: label.into(),
            control: Control::Select(index),
            active,
        }
    }
}

/// A mounted diagram widget.
#[derive(Debug)]
pub enum Diagram {
    SurfaceCode(SurfaceCodeDiagram),
    TransformerDecoder(TransformerDecoderDiagram),
    Performance(PerformanceChart),
    TemporalGraph(TemporalGraphDiagram),
    Efficiency(EfficiencyBars),
    Zettelkasten(ZettelkastenDiagram),
    DeepResearch(DeepResearchDiagram),
    ReflectionLoop(ReflectionLoopDiagram),
}

impl Diagram {
    /// Mount a fresh widget. Timer-driven widgets need a tokio runtime.
    pub fn mount(kind: DiagramKind) -> Self {
        log::debug!("Mounting diagram {:?}", kind);
        match kind {
            DiagramKind::SurfaceCode => Diagram::SurfaceCode(SurfaceCodeDiagram::new()),
            DiagramKind::TransformerDecoder => {
                Diagram::TransformerDecoder(TransformerDecoderDiagram::mount())
            }
            DiagramKind::Performance => Diagram::Performance(PerformanceChart::new()),
            DiagramKind::TemporalGraph => Diagram::TemporalGraph(TemporalGraphDiagram::new()),
            DiagramKind::Efficiency => Diagram::Efficiency(EfficiencyBars),
            DiagramKind::Zettelkasten => {
                Diagram::Zettelkasten(ZettelkastenDiagram::new(StdRng::from_entropy()))
            }
            DiagramKind::DeepResearch => Diagram::DeepResearch(DeepResearchDiagram::new()),
            DiagramKind::ReflectionLoop => Diagram::ReflectionLoop(ReflectionLoopDiagram::new()),
        }
    }

    pub fn kind(&self) -> DiagramKind {
        match self {
            Diagram::SurfaceCode(_) => DiagramKind::SurfaceCode,
            Diagram::TransformerDecoder(_) => DiagramKind::TransformerDecoder,
            Diagram::Performance(_) => DiagramKind::Performance,
            Diagram::TemporalGraph(_) => DiagramKind::TemporalGraph,
            Diagram::Efficiency(_) => DiagramKind::Efficiency,
            Diagram::Zettelkasten(_) => DiagramKind::Zettelkasten,
            Diagram::DeepResearch(_) => DiagramKind::DeepResearch,
            Diagram::ReflectionLoop(_) => DiagramKind::ReflectionLoop,
        }
    }

    /// Label of the Enter/Space action, if the widget has one.
    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            Diagram::SurfaceCode(_) => Some("Reset"),
            Diagram::TransformerDecoder(_) => Some("Step"),
            Diagram::Performance(_) => Some("Next Distance"),
            Diagram::TemporalGraph(_) => Some("Switch Timeline"),
            Diagram::Efficiency(_) => None,
            Diagram::Zettelkasten(_) => Some("Add Memory"),
            Diagram::DeepResearch(d) => Some(d.button_label()),
            Diagram::ReflectionLoop(d) => Some(d.button_label()),
        }
    }

    /// Run the Enter/Space action.
    pub fn primary_action(&mut self) {
        match self {
            Diagram::SurfaceCode(d) => d.reset(),
            Diagram::TransformerDecoder(d) => d.advance(),
            Diagram::Performance(d) => d.advance(),
            Diagram::TemporalGraph(d) => d.advance(),
            Diagram::Efficiency(_) => {}
            Diagram::Zettelkasten(d) => {
                d.add_memory();
            }
            Diagram::DeepResearch(d) => {
                d.start();
            }
            Diagram::ReflectionLoop(d) => d.advance(),
        }
    }

    /// Widget-specific keys. Returns true if the key was used.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.primary_action();
                true
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as u8 - b'1') as usize;
                self.select(index)
            }
            _ => false,
        }
    }

    /// Digit pickers: qubit toggles, distance and timeline selectors.
    fn select(&mut self, index: usize) -> bool {
        match self {
            Diagram::SurfaceCode(d) => d.toggle(index),
            Diagram::Performance(d) if index < performance::DISTANCES.len() => {
                d.select(index);
                true
            }
            Diagram::TemporalGraph(d) if index < temporal::TIMELINE.len() => {
                d.select(index);
                true
            }
            _ => false,
        }
    }

    /// Clickable controls, pickers first and the action last.
    pub fn buttons(&self) -> Vec<Button> {
        let mut buttons: Vec<Button> = match self {
            Diagram::SurfaceCode(d) => (0..parity::DATA_QUBITS)
                .map(|i| Button::select(i, format!("Q{}", i + 1), d.has_error(i)))
                .collect(),
            Diagram::Performance(d) => performance::DISTANCES
                .iter()
                .enumerate()
                .map(|(i, step)| Button::select(i, step.label, d.selected() == i))
                .collect(),
            Diagram::TemporalGraph(d) => temporal::TIMELINE
                .iter()
                .enumerate()
                .map(|(i, step)| Button::select(i, step.label, d.selected() == i))
                .collect(),
            _ => Vec::new(),
        };
        if let Some(label) = self.action_label() {
            buttons.push(Button {
                label: label.to_string(),
                control: Control::Action,
                active: false,
            });
        }
        buttons
    }

    /// Apply a button click. Returns true if the diagram reacted.
    pub fn click(&mut self, control: Control) -> bool {
        match control {
            Control::Select(index) => self.select(index),
            Control::Action if self.action_label().is_some() => {
                self.primary_action();
                true
            }
            Control::Action => false,
        }
    }

    /// Apply timer deliveries and settle pending animation. Called once per frame.
    pub fn poll(&mut self) {
        match self {
            Diagram::TransformerDecoder(d) => d.poll(),
            Diagram::DeepResearch(d) => d.poll(),
            Diagram::Zettelkasten(d) => d.tick(),
            _ => {}
        }
    }

    pub fn visual(&self) -> Visual {
        match self {
            Diagram::SurfaceCode(d) => d.visual(),
            Diagram::TransformerDecoder(d) => d.visual(),
            Diagram::Performance(d) => d.visual(),
            Diagram::TemporalGraph(d) => d.visual(),
            Diagram::Efficiency(d) => d.visual(),
            Diagram::Zettelkasten(d) => d.visual(),
            Diagram::DeepResearch(d) => d.visual(),
            Diagram::ReflectionLoop(d) => d.visual(),
        }
    }

    /// Key hints shown in the status bar while focused.
    pub fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = match self {
            Diagram::SurfaceCode(_) => vec![("1-5", "toggle qubit")],
            Diagram::Performance(_) => vec![("1-3", "distance")],
            Diagram::TemporalGraph(_) => vec![("1-2", "timeline")],
            _ => Vec::new(),
        };
        if let Some(label) = self.action_label() {
            hints.push(("Enter", label));
        }
        hints
    }
}
