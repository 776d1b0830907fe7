// AlphaQubit performance chart.
// Compares logical error rates of the standard decoder and AlphaQubit per code distance.

use crate::state::cycle::{Step, StepCycle};
use crate::state::visual::{Mark, Tone, Visual};

pub static DISTANCES: [Step; 3] = [
    Step::new("Distance 3", "3", Tone::Gold),
    Step::new("Distance 5", "5", Tone::Gold),
    Step::new("Distance 11", "11", Tone::Gold),
];

/// Logical error rate (%) per distance: (MWPM, AlphaQubit).
const ERROR_RATES: [(f64, f64); 3] = [(3.5, 2.9), (3.6, 2.75), (0.0041, 0.0009)];

/// Headroom above the larger bar.
const HEADROOM: f64 = 1.25;

/// Distance shown first.
const DEFAULT_DISTANCE: usize = 1;

/// Format an error rate, using more decimals for very small values.
pub fn format_rate(value: f64) -> String {
    if value < 0.01 {
        format!("{:.4}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Bar chart with a distance selector.
#[derive(Debug, Clone)]
pub struct PerformanceChart {
    distance: StepCycle,
}

impl Default for PerformanceChart {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceChart {
    pub fn new() -> Self {
        Self {
            distance: StepCycle::starting_at(&DISTANCES, DEFAULT_DISTANCE),
        }
    }

    /// Cycle to the next distance.
    pub fn advance(&mut self) {
        self.distance.advance();
    }

    /// Select a distance by its position in the selector.
    pub fn select(&mut self, index: usize) {
        self.distance.select(index);
    }

    /// Position of the selected distance.
    pub fn selected(&self) -> usize {
        self.distance.index()
    }

    /// (MWPM, AlphaQubit) error rates for the selected distance.
    pub fn rates(&self) -> (f64, f64) {
        ERROR_RATES[self.distance.index()]
    }

    /// Bar heights in percent of the chart: (MWPM, AlphaQubit).
    pub fn bar_heights(&self) -> (f64, f64) {
        let (mwpm, alpha) = self.rates();
        let max = mwpm.max(alpha) * HEADROOM;
        ((mwpm / max) * 100.0, ((alpha / max) * 100.0).max(1.0))
    }

    pub fn visual(&self) -> Visual {
        let (mwpm, alpha) = self.rates();
        let (mwpm_height, alpha_height) = self.bar_heights();
        let mut visual = Visual::new();

        // Background grid
        for y in [20.0, 40.0, 60.0, 80.0] {
            visual.push(Mark::line(5.0, y, 95.0, y).tone(Tone::Muted).faint());
        }

        visual.push(Mark::bar(20.0, 22.0, mwpm_height).tone(Tone::Muted));
        visual.push(Mark::label(31.0, 95.0 - mwpm_height, format_rate(mwpm)).tone(Tone::Muted));
        visual.push(Mark::label(31.0, 99.0, "STANDARD").tone(Tone::Muted));

        visual.push(Mark::bar(58.0, 22.0, alpha_height).tone(Tone::Gold).strong());
        visual.push(Mark::label(69.0, 95.0 - alpha_height, format_rate(alpha)).tone(Tone::Gold));
        visual.push(Mark::label(69.0, 99.0, "ALPHAQUBIT").tone(Tone::Gold));

        let selector = DISTANCES
            .iter()
            .enumerate()
            .map(|(i, d)| {
                if i == self.distance.index() {
                    format!("[{}]", d.label)
                } else {
                    d.label.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ");

        visual
            .with_caption("LOGICAL ERROR RATE (LOWER IS BETTER)")
            .with_status(selector)
    }
}

#[cfg(test)]
impl PerformanceChart {
    pub fn distance_label(&self) -> &'static str {
        self.distance.current().label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_distance_is_five() {
        let chart = PerformanceChart::new();
        assert_eq!(chart.distance_label(), "Distance 5");
        assert_eq!(chart.rates(), (3.6, 2.75));
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(3.5), "3.50%");
        assert_eq!(format_rate(2.75), "2.75%");
        assert_eq!(format_rate(0.0041), "0.0041%");
        assert_eq!(format_rate(0.0009), "0.0009%");
    }

    #[test]
    fn test_bar_heights_leave_headroom() {
        let mut chart = PerformanceChart::new();
        chart.select(0);
        let (mwpm, alpha) = chart.bar_heights();
        assert!((mwpm - 80.0).abs() < 1e-9);
        assert!(alpha < mwpm);
    }

    #[test]
    fn test_tiny_bar_has_minimum_height() {
        let mut chart = PerformanceChart::new();
        chart.select(2);
        let (_, alpha) = chart.bar_heights();
        assert!(alpha >= 1.0);
    }

    #[test]
    fn test_advance_cycles_distances() {
        let mut chart = PerformanceChart::new();
        chart.advance();
        assert_eq!(chart.distance_label(), "Distance 11");
        chart.advance();
        assert_eq!(chart.distance_label(), "Distance 3");

        let visual = chart.visual();
        assert_eq!(
            visual.status.as_deref(),
            Some("[Distance 3]  Distance 5  Distance 11")
        );
        assert!(visual.has_label("3.50%"));
    }
}
