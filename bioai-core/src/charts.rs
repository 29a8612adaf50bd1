//! SVG geometry for the composition charts on the results view.
//!
//! Everything is computed in a fixed view box; the UI only emits the shapes.

use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

pub const VIEW_WIDTH: f64 = 320.0;
pub const VIEW_HEIGHT: f64 = 200.0;
/// Space reserved under the bars for the axis labels.
pub const AXIS_MARGIN: f64 = 24.0;
pub const PIE_RADIUS: f64 = 80.0;

pub const PALETTE: [&str; 6] = [
    "#3b82f6", "#2563eb", "#1d4ed8", "#1e40af", "#60a5fa", "#93c5fd",
];

/// `count / total * 100`, or zero when there is nothing to divide by.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub count: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    /// Baseline the label sits on.
    pub fn label_y(&self) -> f64 {
        VIEW_HEIGHT - AXIS_MARGIN / 3.0
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// One bar per symbol, in key order, scaled so the largest count fills the
/// plot area. All-zero counts give flat bars.
pub fn bar_layout(counts: &BTreeMap<String, u64>) -> Vec<Bar> {
    if counts.is_empty() {
        return Vec::new();
    }
    let max = counts.values().copied().max().unwrap_or(0);
    let plot_height = VIEW_HEIGHT - AXIS_MARGIN;
    let slot = VIEW_WIDTH / counts.len() as f64;
    let width = slot * 0.6;

    counts
        .iter()
        .enumerate()
        .map(|(i, (label, &count))| {
            let height = if max == 0 {
                0.0
            } else {
                count as f64 / max as f64 * plot_height
            };
            Bar {
                label: label.clone(),
                count,
                x: i as f64 * slot + (slot - width) / 2.0,
                y: plot_height - height,
                width,
                height,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: u64,
    /// Share of the total in `0.0..=1.0`.
    pub fraction: f64,
    /// SVG path data.
    pub path: String,
    pub color: &'static str,
}

impl PieSlice {
    /// Legend text such as `A: 25.0%`.
    pub fn legend(&self) -> String {
        format!("{}: {:.1}%", self.label, self.fraction * 100.0)
    }
}

/// Slices clockwise from twelve o'clock around the view box center.
/// Zero counts are skipped; a zero total yields no slices.
pub fn pie_slices(counts: &BTreeMap<String, u64>) -> Vec<PieSlice> {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }
    let (cx, cy) = (VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0);
    let mut angle = -FRAC_PI_2;

    counts
        .iter()
        .filter(|(_, &count)| count > 0)
        .enumerate()
        .map(|(i, (label, &count))| {
            let fraction = count as f64 / total as f64;
            let sweep = fraction * TAU;
            let path = if count == total {
                circle_path(cx, cy, PIE_RADIUS)
            } else {
                sector_path(cx, cy, PIE_RADIUS, angle, angle + sweep)
            };
            angle += sweep;
            PieSlice {
                label: label.clone(),
                count,
                fraction,
                path,
                color: PALETTE[i % PALETTE.len()],
            }
        })
        .collect()
}

fn sector_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (x1, y1) = (cx + r * start.cos(), cy + r * start.sin());
    let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
    let large_arc = u8::from(end - start > std::f64::consts::PI);
    format!(
        "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
    )
}

// A single arc cannot start and end on the same point, so draw two halves.
fn circle_path(cx: f64, cy: f64, r: f64) -> String {
    let top = cy - r;
    let bottom = cy + r;
    format!(
        "M {cx:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {bottom:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {top:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(3, 0), 0.0);
    }

    #[test]
    fn test_bars_scale_to_max() {
        let bars = bar_layout(&counts(&[("A", 10), ("C", 5), ("G", 0), ("T", 10)]));
        assert_eq!(bars.len(), 4);
        let plot = VIEW_HEIGHT - AXIS_MARGIN;
        assert_eq!(bars[0].height, plot);
        assert_eq!(bars[0].y, 0.0);
        assert_eq!(bars[1].height, plot / 2.0);
        assert_eq!(bars[2].height, 0.0);
        assert_eq!(bars[2].y, plot);
        assert!(bars[0].x < bars[1].x);
        assert!(bars[3].x + bars[3].width <= VIEW_WIDTH);
    }

    #[test]
    fn test_bars_all_zero_and_empty() {
        let bars = bar_layout(&counts(&[("A", 0), ("T", 0)]));
        assert!(bars.iter().all(|b| b.height == 0.0));
        assert!(bar_layout(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_pie_fractions_sum_to_one() {
        let slices = pie_slices(&counts(&[("A", 1), ("C", 1), ("G", 2), ("T", 0)]));
        assert_eq!(slices.len(), 3);
        let sum: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(slices[2].legend(), "G: 50.0%");
        assert!(slices.iter().all(|s| s.path.starts_with("M ") && s.path.ends_with('Z')));
        assert_ne!(slices[0].color, slices[1].color);
    }

    #[test]
    fn test_pie_large_arc_flag() {
        let slices = pie_slices(&counts(&[("A", 3), ("T", 1)]));
        assert!(slices[0].path.contains(" 0 1 1 "));
        assert!(slices[1].path.contains(" 0 0 1 "));
    }

    #[test]
    fn test_single_slice_is_full_circle() {
        let slices = pie_slices(&counts(&[("A", 7), ("T", 0)]));
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].fraction, 1.0);
        assert_eq!(slices[0].path.matches(" A ").count(), 2);
    }

    #[test]
    fn test_zero_total_has_no_slices() {
        assert!(pie_slices(&counts(&[("A", 0)])).is_empty());
        assert!(pie_slices(&BTreeMap::new()).is_empty());
    }
}
