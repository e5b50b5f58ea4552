use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ChartPoint;

/// Chart height at 1x zoom, in pixels.
pub const BASE_HEIGHT: u32 = 300;

// ============================================
// Zoom, in percent
// ============================================

const DEFAULT_ZOOM: u32 = 100;
const ZOOM_STEP: u32 = 20;
const MIN_ZOOM: u32 = 60;
const MAX_ZOOM: u32 = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Area,
    Bar,
    Line,
    Pie,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [Self::Area, Self::Bar, Self::Line, Self::Pie];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Area => "Area Chart",
            Self::Bar => "Bar Chart",
            Self::Line => "Line Chart",
            Self::Pie => "Pie Chart",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Business area tab above the chart. Every tab plots the same series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartTab {
    #[default]
    Sales,
    Marketing,
    Operations,
    Finance,
}

impl ChartTab {
    pub const ALL: [ChartTab; 4] = [
        Self::Sales,
        Self::Marketing,
        Self::Operations,
        Self::Finance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Operations => "Operations",
            Self::Finance => "Finance",
        }
    }
}

/// Chart panel selection: type, tab and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartState {
    chart_type: ChartType,
    tab: ChartTab,
    zoom_pct: u32,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            chart_type: ChartType::default(),
            tab: ChartTab::default(),
            zoom_pct: DEFAULT_ZOOM,
        }
    }
}

impl ChartState {
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn tab(&self) -> ChartTab {
        self.tab
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
    }

    pub fn set_tab(&mut self, tab: ChartTab) {
        self.tab = tab;
    }

    /// Zoom factor, 1.0 being the base height.
    pub fn zoom(&self) -> f64 {
        self.zoom_pct as f64 / 100.0
    }

    /// Step up by 0.2, capped at 2.0. Returns the new zoom factor.
    pub fn zoom_in(&mut self) -> f64 {
        self.zoom_pct = (self.zoom_pct + ZOOM_STEP).min(MAX_ZOOM);
        self.zoom()
    }

    /// Step down by 0.2, floored at 0.6. Returns the new zoom factor.
    pub fn zoom_out(&mut self) -> f64 {
        self.zoom_pct = self.zoom_pct.saturating_sub(ZOOM_STEP).max(MIN_ZOOM);
        self.zoom()
    }

    pub fn reset_zoom(&mut self) {
        self.zoom_pct = DEFAULT_ZOOM;
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom_pct < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom_pct > MIN_ZOOM
    }

    pub fn height(&self) -> u32 {
        BASE_HEIGHT * self.zoom_pct / 100
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: u64,
    /// Fraction of the sum of all slices, 0.0 when that sum is zero.
    pub share: f64,
}

/// Yearly totals for the pie chart: revenue, profit and cost.
///
/// Cost is revenue minus profit, summed per month.
pub fn pie_slices(points: &[ChartPoint]) -> [PieSlice; 3] {
    let revenue: u64 = points.iter().map(|p| p.revenue).sum();
    let profit: u64 = points.iter().map(|p| p.profit).sum();
    let cost: u64 = points
        .iter()
        .map(|p| p.revenue.saturating_sub(p.profit))
        .sum();

    let total = (revenue + profit + cost) as f64;
    let slice = |name: &'static str, value: u64| PieSlice {
        name,
        value,
        share: if total > 0.0 { value as f64 / total } else { 0.0 },
    };

    [
        slice("Revenue", revenue),
        slice("Profit", profit),
        slice("Cost", cost),
    ]
}

/// Owned view of the chart panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub chart_type: ChartType,
    pub tab: ChartTab,
    pub zoom: f64,
    pub height: u32,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    /// Monthly series plotted by the area, bar and line charts.
    pub points: Vec<ChartPoint>,
    /// Only set for the pie chart.
    pub pie: Option<[PieSlice; 3]>,
    /// Set while a load is in flight.
    pub placeholder: Option<&'static str>,
}

impl ChartView {
    pub fn build(state: &ChartState, points: &[ChartPoint], is_loading: bool) -> Self {
        let pie = match state.chart_type {
            ChartType::Pie => Some(pie_slices(points)),
            _ => None,
        };

        Self {
            chart_type: state.chart_type,
            tab: state.tab,
            zoom: state.zoom(),
            height: state.height(),
            can_zoom_in: state.can_zoom_in(),
            can_zoom_out: state.can_zoom_out(),
            points: points.to_vec(),
            pie,
            placeholder: is_loading.then_some("Loading chart data..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Jan", 100_000, 25_000, 700),
            ChartPoint::new("Feb", 80_000, 40_000, 900),
            ChartPoint::new("Mar", 120_000, 30_000, 1_100),
        ]
    }

    #[test]
    fn test_default_state() {
        let state = ChartState::default();
        assert_eq!(state.chart_type(), ChartType::Area);
        assert_eq!(state.tab(), ChartTab::Sales);
        assert_eq!(state.zoom(), 1.0);
        assert_eq!(state.height(), 300);
    }

    #[test]
    fn test_pie_totals() {
        let [revenue, profit, cost] = pie_slices(&points());

        assert_eq!((revenue.name, revenue.value), ("Revenue", 300_000));
        assert_eq!((profit.name, profit.value), ("Profit", 95_000));
        assert_eq!((cost.name, cost.value), ("Cost", 205_000));

        // Profit and cost together make up revenue, so revenue is half the pie
        assert_eq!(revenue.share, 0.5);
        assert!((profit.share + cost.share - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_pie_of_empty_series_is_zero() {
        let slices = pie_slices(&[]);
        assert!(slices.iter().all(|s| s.value == 0 && s.share == 0.0));
    }

    #[test]
    fn test_zoom_in_clamps_at_two() {
        let mut state = ChartState::default();
        let levels: Vec<f64> = (0..7).map(|_| state.zoom_in()).collect();
        assert_eq!(levels, vec![1.2, 1.4, 1.6, 1.8, 2.0, 2.0, 2.0]);
        assert!(!state.can_zoom_in());
        assert_eq!(state.height(), 600);
    }

    #[test]
    fn test_zoom_out_clamps_at_point_six() {
        let mut state = ChartState::default();
        let levels: Vec<f64> = (0..4).map(|_| state.zoom_out()).collect();
        assert_eq!(levels, vec![0.8, 0.6, 0.6, 0.6]);
        assert!(!state.can_zoom_out());
        assert_eq!(state.height(), 180);

        state.reset_zoom();
        assert_eq!(state.zoom(), 1.0);
        assert!(state.can_zoom_out());
    }

    #[test]
    fn test_view_only_aggregates_for_pie() {
        let mut state = ChartState::default();
        let view = ChartView::build(&state, &points(), false);
        assert!(view.pie.is_none());
        assert_eq!(view.points.len(), 3);
        assert!(view.placeholder.is_none());

        state.set_chart_type(ChartType::Pie);
        state.set_tab(ChartTab::Finance);
        let view = ChartView::build(&state, &points(), true);
        assert_eq!(view.pie.map(|p| p[0].value), Some(300_000));
        assert_eq!(view.tab, ChartTab::Finance);
        assert_eq!(view.placeholder, Some("Loading chart data..."));
    }
}
