//! Geometry for the adoption trajectory chart.
//!
//! Coordinates are percentages of the plot area: x runs left to right,
//! y runs top to bottom, so larger values sit higher (smaller y).

use hush_content::Milestone;
use std::time::Duration;

/// Headroom kept above the largest value.
pub const TOP_PADDING_PCT: f64 = 15.0;
/// Fraction of the chart that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.35;
/// Delay between the line drawing in and the milestone details appearing.
pub const DETAILS_DELAY: Duration = Duration::from_millis(700);
/// Stage expanded before the visitor picks one.
pub const DEFAULT_STAGE: usize = 1;
/// Milestone drawn with the emphasized marker.
pub const KEY_YEAR: &str = "2025";

const GUIDE_RATIOS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];
/// Offset keeping zero counts inside the log domain.
const LOG_OFFSET: f64 = 10.0;
const MIN_LOG_SPAN: f64 = 0.0001;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub index: usize,
    pub year: &'static str,
    pub value: u32,
    pub x: f64,
    pub y: f64,
}

/// Horizontal helper line with its axis label.
#[derive(Clone, Debug, PartialEq)]
pub struct HelperGuide {
    pub top: f64,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoadmapChart {
    pub points: Vec<ChartPoint>,
    pub guides: Vec<HelperGuide>,
}

impl RoadmapChart {
    /// Plots `metric` for every milestone on a log scale.
    pub fn build(milestones: &[Milestone], metric: impl Fn(&Milestone) -> u32) -> Self {
        let values: Vec<u32> = milestones.iter().map(&metric).collect();
        let (Some(min), Some(max)) = (values.iter().min(), values.iter().max()) else {
            return Self::default();
        };
        let log_min = log_value(f64::from(*min));
        let log_span = (log_value(f64::from(*max)) - log_min).max(MIN_LOG_SPAN);
        let plot_height = 100.0 - TOP_PADDING_PCT;

        let last = milestones.len().saturating_sub(1);
        let points = milestones
            .iter()
            .zip(values)
            .enumerate()
            .map(|(index, (milestone, value))| {
                let x = if last == 0 {
                    0.0
                } else {
                    index as f64 / last as f64 * 100.0
                };
                let normalized = (log_value(f64::from(value)) - log_min) / log_span;
                ChartPoint {
                    index,
                    year: milestone.year,
                    value,
                    x,
                    y: 100.0 - normalized * plot_height,
                }
            })
            .collect();

        let guides = GUIDE_RATIOS
            .iter()
            .map(|ratio| {
                let raw = (10f64.powf(log_min + ratio * log_span) - LOG_OFFSET).max(0.0);
                HelperGuide {
                    top: 100.0 - ratio * plot_height,
                    label: format_axis_label(raw),
                }
            })
            .collect();

        Self { points, guides }
    }

    /// SVG path data through every point.
    pub fn path(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{} {:.2} {:.2}", if i == 0 { "M" } else { "L" }, p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Closed SVG path filling the area between the line and the baseline.
    pub fn area_path(&self) -> String {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return String::new();
        };
        let line = self
            .points
            .iter()
            .map(|p| format!("{:.2} {:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" L ");
        format!("M {:.2} 100 L {line} L {:.2} 100 Z", first.x, last.x)
    }
}

/// Side a milestone popup opens towards so it stays inside the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupAlign {
    Left,
    Center,
    Right,
}

impl PopupAlign {
    pub fn for_index(index: usize, len: usize) -> Self {
        if index < 2 {
            PopupAlign::Left
        } else if index + 2 > len {
            PopupAlign::Right
        } else {
            PopupAlign::Center
        }
    }
}

fn log_value(value: f64) -> f64 {
    (value + LOG_OFFSET).log10()
}

/// Compact axis label: `1.8K`, `15K`, `2.5M`, or a rounded integer.
pub fn format_axis_label(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{}M", one_decimal(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("{}K", one_decimal(value / 1_000.0))
    } else {
        format!("{}", value.round() as i64)
    }
}

fn one_decimal(value: f64) -> String {
    let text = format!("{value:.1}");
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

/// Count with thousands separators, or `-` for zero.
pub fn format_count(value: u32) -> String {
    if value == 0 {
        return "-".to_string();
    }
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Keeps a selected stage index inside the milestone list.
pub fn clamp_stage(stage: usize, len: usize) -> usize {
    stage.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hush_content::ROADMAP;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn axis_labels_are_compact() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(12.4), "12");
        assert_eq!(format_axis_label(1_800.0), "1.8K");
        assert_eq!(format_axis_label(15_000.0), "15K");
        assert_eq!(format_axis_label(1_000_000.0), "1M");
        assert_eq!(format_axis_label(2_500_000.0), "2.5M");
    }

    #[test]
    fn points_spread_evenly_across_width() {
        let chart = RoadmapChart::build(ROADMAP, |m| m.active_users);
        let xs: Vec<f64> = chart.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(chart.points[4].year, "2050");
    }

    #[test]
    fn extremes_sit_on_baseline_and_below_padding() {
        let chart = RoadmapChart::build(ROADMAP, |m| m.active_users);
        assert!(close(chart.points[0].y, 100.0));
        assert!(close(chart.points[4].y, TOP_PADDING_PCT));
        assert!(chart.points.windows(2).all(|w| w[1].y < w[0].y));
    }

    #[test]
    fn guides_span_the_value_range() {
        let chart = RoadmapChart::build(ROADMAP, |m| m.active_users);
        assert_eq!(chart.guides.len(), 5);
        assert_eq!(chart.guides[0].label, "0");
        assert!(close(chart.guides[0].top, 100.0));
        assert_eq!(chart.guides[4].label, "1.8K");
        assert!(close(chart.guides[4].top, TOP_PADDING_PCT));
    }

    #[test]
    fn flat_series_does_not_divide_by_zero() {
        let chart = RoadmapChart::build(&ROADMAP[..1], |m| m.hospitals);
        assert_eq!(chart.points.len(), 1);
        assert!(chart.points[0].x.is_finite());
        assert!(close(chart.points[0].y, 100.0));
    }

    #[test]
    fn empty_roadmap_draws_nothing() {
        let chart = RoadmapChart::build(&[], |m| m.hospitals);
        assert!(chart.points.is_empty());
        assert!(chart.guides.is_empty());
        assert_eq!(chart.path(), "");
    }

    #[test]
    fn path_starts_with_move() {
        let chart = RoadmapChart::build(ROADMAP, |m| m.hospitals);
        let path = chart.path();
        assert!(path.starts_with("M 0.00 100.00 L 25.00"));
        assert_eq!(path.matches('L').count(), 4);
    }

    #[test]
    fn area_closes_on_the_baseline() {
        let chart = RoadmapChart::build(ROADMAP, |m| m.active_users);
        let area = chart.area_path();
        assert!(area.starts_with("M 0.00 100 L 0.00 100.00"));
        assert!(area.ends_with("L 100.00 100 Z"));
    }

    #[test]
    fn counts_use_thousands_separators() {
        assert_eq!(format_count(0), "-");
        assert_eq!(format_count(45), "45");
        assert_eq!(format_count(1_200), "1,200");
        assert_eq!(format_count(15_000), "15,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn popups_open_away_from_the_edges() {
        let aligns: Vec<PopupAlign> = (0..5).map(|i| PopupAlign::for_index(i, 5)).collect();
        assert_eq!(
            aligns,
            vec![PopupAlign::Left, PopupAlign::Left, PopupAlign::Center, PopupAlign::Center, PopupAlign::Right]
        );
    }

    #[test]
    fn stage_is_clamped() {
        assert_eq!(clamp_stage(DEFAULT_STAGE, ROADMAP.len()), 1);
        assert_eq!(clamp_stage(9, 5), 4);
        assert_eq!(clamp_stage(3, 0), 0);
    }
}
