//! Compiled HTML templates. Every interpolated value is HTML-escaped unless the
//! template marks it `safe`.

use askama::Template;

pub const CHART_ELEMENT_ID: &str = "readings-chart";

/// Format a reading value for display. Whole numbers keep one decimal place
/// (`70.0`), everything else uses the shortest round-trip form (`72.5`).
pub fn display_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[derive(Template)]
#[template(path = "graph.html")]
pub struct GraphPage<'a> {
    pub chart_id: &'a str,
    pub latest_temperature: String,
    pub latest_humidity: String,
    /// Output of `LineChart::to_script_json`, embedded unescaped
    pub figure_json: &'a str,
}

impl<'a> GraphPage<'a> {
    pub fn new(latest_temperature: f64, latest_humidity: f64, figure_json: &'a str) -> Self {
        Self {
            chart_id: CHART_ELEMENT_ID,
            latest_temperature: display_float(latest_temperature),
            latest_humidity: display_float(latest_humidity),
            figure_json,
        }
    }
}

#[derive(Template)]
#[template(path = "test.html")]
pub struct TestPage;
