//! Line chart of readings over time.
//!
//! The figure is serialized in Plotly's `{data, layout}` shape and drawn in the
//! browser by Plotly.js. Timestamps are shown in a fixed civil time zone; the
//! stored values are never converted, only their timestamps.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

use crate::entity::readings;

pub const CHART_TITLE: &str = "Garage Temperature and Humidity";

/// Zone used for display only. Storage keeps whatever the database clock wrote.
pub const DISPLAY_TIMEZONE: Tz = chrono_tz::America::Chicago;

pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a stored timestamp in [`DISPLAY_TIMEZONE`].
pub fn display_time<Z: TimeZone>(timestamp: &DateTime<Z>) -> String {
    timestamp
        .with_timezone(&DISPLAY_TIMEZONE)
        .format(DISPLAY_TIME_FORMAT)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: &'static str,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub mode: &'static str,
}

impl Trace {
    fn line(name: &'static str, x: Vec<String>, y: Vec<f64>) -> Self {
        Self {
            name,
            x,
            y,
            trace_type: "scatter",
            mode: "lines",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Titled {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Titled,
    pub yaxis: Titled,
    pub legend: Titled,
}

/// Two-series chart: temperature and humidity against display time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl LineChart {
    /// Build the chart from readings already sorted oldest first.
    pub fn from_readings(rows: &[readings::Model]) -> Self {
        let times: Vec<String> = rows.iter().map(|r| display_time(&r.timestamp)).collect();
        let temperatures = rows.iter().map(|r| r.temperature).collect();
        let humidities = rows.iter().map(|r| r.humidity).collect();

        Self {
            data: vec![
                Trace::line("temperature", times.clone(), temperatures),
                Trace::line("humidity", times, humidities),
            ],
            layout: Layout {
                title: Title { text: CHART_TITLE },
                xaxis: Titled {
                    title: Title { text: "timestamp" },
                },
                yaxis: Titled {
                    title: Title { text: "value" },
                },
                legend: Titled {
                    title: Title { text: "variable" },
                },
            },
        }
    }

    /// Serialize the figure for embedding in an inline `<script>`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        // `</` would end the surrounding script element
        Ok(json.replace("</", "<\\/"))
    }
}
