// Surface code parity diagram.
// Data qubits can be toggled into an error state; stabilizers light up on odd parity.

use std::collections::BTreeSet;

use crate::state::visual::{Mark, Tone, Visual};

/// Number of toggleable data qubits.
pub const DATA_QUBITS: usize = 5;

/// Number of stabilizers (checkers).
pub const STABILIZERS: usize = 4;

/// Stabilizers watching each data qubit, indexed by qubit id.
pub const ADJACENCY: [&[usize]; DATA_QUBITS] = [
    &[0, 1],
    &[0, 2],
    &[1, 3],
    &[2, 3],
    // Center qubit touches every stabilizer in this compact layout
    &[0, 1, 2, 3],
];

/// Stabilizer check type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckType {
    Z,
    X,
}

impl CheckType {
    pub fn label(&self) -> &'static str {
        match self {
            CheckType::Z => "Z",
            CheckType::X => "X",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            CheckType::Z => Tone::Blue,
            CheckType::X => Tone::Red,
        }
    }
}

/// Stabilizer placement: (x%, y%, type).
const STABILIZER_LAYOUT: [(f64, f64, CheckType); STABILIZERS] = [
    (50.0, 20.0, CheckType::Z),
    (20.0, 50.0, CheckType::X),
    (80.0, 50.0, CheckType::X),
    (50.0, 80.0, CheckType::Z),
];

/// Data qubit placement by id: (x%, y%).
const QUBIT_LAYOUT: [(f64, f64); DATA_QUBITS] = [
    (20.0, 20.0),
    (80.0, 20.0),
    (20.0, 80.0),
    (80.0, 80.0),
    (50.0, 50.0),
];

/// Interactive parity-check diagram.
#[derive(Debug, Clone, Default)]
pub struct SurfaceCodeDiagram {
    errors: BTreeSet<usize>,
}

impl SurfaceCodeDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the error state of a data qubit. Ids outside the universe are
    /// rejected and leave the state unchanged.
    pub fn toggle(&mut self, id: usize) -> bool {
        if id >= DATA_QUBITS {
            return false;
        }
        if !self.errors.remove(&id) {
            self.errors.insert(id);
        }
        true
    }

    pub fn has_error(&self, id: usize) -> bool {
        self.errors.contains(&id)
    }

    /// Clear every injected error.
    pub fn reset(&mut self) {
        self.errors.clear();
    }

    /// Whether stabilizer `stabilizer` sees an odd number of errors.
    pub fn is_active(&self, stabilizer: usize) -> bool {
        let count = self
            .errors
            .iter()
            .filter(|id| ADJACENCY[**id].contains(&stabilizer))
            .count();
        count % 2 == 1
    }

    /// Ids of every active stabilizer, ascending.
    pub fn active_stabilizers(&self) -> Vec<usize> {
        (0..STABILIZERS).filter(|s| self.is_active(*s)).collect()
    }

    pub fn status(&self) -> String {
        if self.errors.is_empty() {
            "System is stable.".to_string()
        } else {
            format!(
                "Detected {} parity violations.",
                self.active_stabilizers().len()
            )
        }
    }

    pub fn visual(&self) -> Visual {
        let mut visual = Visual::new();

        // Grid lines
        visual.push(Mark::line(0.0, 50.0, 100.0, 50.0).tone(Tone::Muted).faint());
        visual.push(Mark::line(50.0, 0.0, 50.0, 100.0).tone(Tone::Muted).faint());

        for (id, (x, y, check)) in STABILIZER_LAYOUT.iter().enumerate() {
            let mark = Mark::square(*x, *y, 10.0);
            let label = Mark::label(*x, *y, check.label());
            if self.is_active(id) {
                visual.push(mark.tone(check.tone()).strong());
                visual.push(label.tone(check.tone()).strong());
            } else {
                visual.push(mark.tone(Tone::Muted).faint());
                visual.push(label.tone(Tone::Muted).faint());
            }
        }

        for (id, (x, y)) in QUBIT_LAYOUT.iter().enumerate() {
            let mark = Mark::dot(*x, *y, 6.0);
            if self.has_error(id) {
                visual.push(mark.tone(Tone::Ink).strong());
                visual.push(Mark::label(*x, *y + 10.0, format!("{}⚡", id + 1)).tone(Tone::Gold));
            } else {
                visual.push(mark.tone(Tone::Muted));
                visual.push(Mark::label(*x, *y + 10.0, format!("{}", id + 1)).tone(Tone::Muted));
            }
        }

        visual
            .with_caption("Press 1-5 to inject errors on data qubits.")
            .with_status(self.status())
    }
}

#[cfg(test)]
impl SurfaceCodeDiagram {
    pub fn errors(&self) -> impl Iterator<Item = usize> + '_ {
        self.errors.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::visual::{Emphasis, Shape};

    #[test]
    fn test_no_errors_no_active() {
        let diagram = SurfaceCodeDiagram::new();
        assert!(diagram.active_stabilizers().is_empty());
        assert_eq!(diagram.status(), "System is stable.");
    }

    #[test]
    fn test_parity_sequence() {
        let mut diagram = SurfaceCodeDiagram::new();

        diagram.toggle(0);
        assert_eq!(diagram.active_stabilizers(), vec![0, 1]);

        diagram.toggle(1);
        // Stabilizer 0 now sees two errors and goes quiet
        assert_eq!(diagram.active_stabilizers(), vec![1, 2]);
        assert_eq!(diagram.status(), "Detected 2 parity violations.");
    }

    #[test]
    fn test_double_toggle_restores_every_checker() {
        let mut diagram = SurfaceCodeDiagram::new();
        diagram.toggle(2);

        for id in 0..DATA_QUBITS {
            let before = diagram.active_stabilizers();
            diagram.toggle(id);
            diagram.toggle(id);
            assert_eq!(diagram.active_stabilizers(), before, "qubit {}", id);
        }
    }

    #[test]
    fn test_center_flips_all() {
        let mut diagram = SurfaceCodeDiagram::new();
        diagram.toggle(4);
        assert_eq!(diagram.active_stabilizers(), vec![0, 1, 2, 3]);

        // Three errors on stabilizer 0 (qubits 0, 1, 4) is odd again
        diagram.toggle(0);
        diagram.toggle(1);
        assert!(diagram.is_active(0));
        assert!(!diagram.is_active(1));
        assert!(!diagram.is_active(2));
        assert!(diagram.is_active(3));
    }

    #[test]
    fn test_out_of_universe_rejected() {
        let mut diagram = SurfaceCodeDiagram::new();
        assert!(!diagram.toggle(DATA_QUBITS));
        assert_eq!(diagram.errors().count(), 0);
    }

    #[test]
    fn test_visual_highlights_active_checks() {
        let mut diagram = SurfaceCodeDiagram::new();
        diagram.toggle(0);
        let visual = diagram.visual();

        let strong_squares = visual
            .marks
            .iter()
            .filter(|m| {
                matches!(m.shape, Shape::Square { .. })
                    && m.emphasis == Emphasis::Strong
            })
            .count();
        assert_eq!(strong_squares, 2);
        assert_eq!(visual.status.as_deref(), Some("Detected 2 parity violations."));
    }
}
