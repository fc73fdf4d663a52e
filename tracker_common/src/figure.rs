//! Chart descriptions exchanged between the server and its front ends.
//!
//! A `Figure` serializes to the `{ data, layout }` object Plotly.js expects, so
//! the page can hand the JSON straight to `Plotly.react`. Only the handful of
//! attributes the tracker uses are modeled; unset options are omitted from the
//! JSON and Plotly falls back to its defaults.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::history::PriceHistory;

/// Title of the chart shown before any symbol is chosen.
pub const PLACEHOLDER_TITLE: &str = "Enter a stock symbol to view the data!";
/// Instructional annotation of the placeholder chart.
pub const PLACEHOLDER_HINT: &str = "Start by typing a stock symbol above.";
/// Title of the chart shown when the data fetch fails.
pub const ERROR_TITLE: &str = "Error Fetching Data";
/// Annotation of the error chart.
pub const ERROR_MESSAGE: &str = "Unable to fetch stock data. Check the symbol and try again.";
/// X axis label of the price chart.
pub const X_AXIS_TITLE: &str = "Date";
/// Y axis label of the price chart.
pub const Y_AXIS_TITLE: &str = "Close Price (USD)";

const FONT_FAMILY: &str = "Arial, sans-serif";
const PLOT_BACKGROUND: &str = "#f9f9f9";
const PAPER_BACKGROUND: &str = "#ffffff";
const ERROR_COLOR: &str = "red";
const ANNOTATION_FONT_SIZE: u32 = 16;
const CHART_FONT_SIZE: u32 = 14;

/// The three shapes a chart response can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FigureKind {
    /// No symbol resolved yet.
    Placeholder,
    /// Closing prices of a symbol.
    Series,
    /// The market-data fetch failed.
    Error,
}

/// Plotly figure: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Data traces; empty for placeholder and error charts.
    #[serde(default)]
    pub data: Vec<Trace>,
    /// Layout options.
    pub layout: Layout,
}

/// One line series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Plotly trace type, always `scatter`.
    #[serde(rename = "type")]
    pub kind: String,
    /// ISO-8601 dates.
    pub x: Vec<String>,
    /// Closing prices.
    pub y: Vec<f64>,
    /// Drawing mode, always `lines`.
    pub mode: String,
    /// Legend name.
    pub name: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

/// Chart title, horizontally positioned in paper coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Title text.
    pub text: String,
    /// Horizontal position; `0.5` centers the title.
    pub x: f64,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub text: String,
}

/// Text drawn on the chart canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Annotation text.
    pub text: String,
    /// Horizontal reference frame (`paper` pins it to the canvas).
    pub xref: String,
    /// Vertical reference frame.
    pub yref: String,
    /// Whether Plotly draws an arrow to a data point.
    pub showarrow: bool,
    /// Font of the text.
    pub font: Font,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Axis {
    fn hidden() -> Self {
        Axis {
            visible: Some(false),
            ..Axis::default()
        }
    }

    fn titled(text: &str) -> Self {
        Axis {
            title: Some(AxisTitle {
                text: text.to_string(),
            }),
            visible: None,
            showgrid: Some(true),
        }
    }
}

impl Annotation {
    fn on_canvas(text: &str, color: Option<&str>) -> Self {
        Annotation {
            text: text.to_string(),
            xref: "paper".to_string(),
            yref: "paper".to_string(),
            showarrow: false,
            font: Font {
                family: None,
                size: ANNOTATION_FONT_SIZE,
                color: color.map(str::to_string),
            },
        }
    }
}

impl Title {
    fn centered(text: &str) -> Self {
        Title {
            text: text.to_string(),
            x: 0.5,
        }
    }
}

impl Figure {
    /// Empty chart asking the user to type a symbol.
    pub fn placeholder() -> Self {
        Self::message_only(PLACEHOLDER_TITLE, Annotation::on_canvas(PLACEHOLDER_HINT, None))
    }

    /// Empty chart with the red fetch-failure message.
    pub fn fetch_error() -> Self {
        Self::message_only(
            ERROR_TITLE,
            Annotation::on_canvas(ERROR_MESSAGE, Some(ERROR_COLOR)),
        )
    }

    /// Line chart of the closing prices in `history`.
    ///
    /// The title shows the upper-cased symbol; the trace keeps the symbol as typed.
    pub fn price_history(history: &PriceHistory) -> Self {
        let trace = Trace {
            kind: "scatter".to_string(),
            x: history
                .points
                .iter()
                .map(|p| p.date.format("%Y-%m-%d").to_string())
                .collect(),
            y: history.points.iter().map(|p| p.close).collect(),
            mode: "lines".to_string(),
            name: history.symbol.as_str().to_string(),
        };

        Figure {
            data: vec![trace],
            layout: Layout {
                title: Title::centered(&format!(
                    "{} Stock Prices (Last 1 Month)",
                    history.symbol.to_upper()
                )),
                xaxis: Axis::titled(X_AXIS_TITLE),
                yaxis: Axis::titled(Y_AXIS_TITLE),
                annotations: Vec::new(),
                plot_bgcolor: Some(PLOT_BACKGROUND.to_string()),
                paper_bgcolor: Some(PAPER_BACKGROUND.to_string()),
                font: Some(Font {
                    family: Some(FONT_FAMILY.to_string()),
                    size: CHART_FONT_SIZE,
                    color: None,
                }),
            },
        }
    }

    fn message_only(title: &str, annotation: Annotation) -> Self {
        Figure {
            data: Vec::new(),
            layout: Layout {
                title: Title::centered(title),
                xaxis: Axis::hidden(),
                yaxis: Axis::hidden(),
                annotations: vec![annotation],
                plot_bgcolor: None,
                paper_bgcolor: None,
                font: None,
            },
        }
    }

    /// Classifies a figure received over the wire.
    pub fn kind(&self) -> FigureKind {
        if !self.data.is_empty() {
            FigureKind::Series
        } else if self.layout.title.text == ERROR_TITLE {
            FigureKind::Error
        } else {
            FigureKind::Placeholder
        }
    }

    /// Text of the first on-canvas annotation, if any.
    pub fn message(&self) -> Option<&str> {
        self.layout.annotations.first().map(|a| a.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::PricePoint;
    use crate::tickers::Symbol;
    use chrono::NaiveDate;
    use serde_json::json;

    fn history(symbol: &str) -> PriceHistory {
        let date = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
        PriceHistory::new(
            Symbol::parse(symbol).unwrap(),
            vec![
                PricePoint { date: date(1), close: 170.5 },
                PricePoint { date: date(2), close: 172.25 },
            ],
        )
    }

    #[test]
    fn placeholder_has_no_series_and_an_instruction() {
        let figure = Figure::placeholder();
        assert!(figure.data.is_empty());
        assert_eq!(figure.kind(), FigureKind::Placeholder);
        assert_eq!(figure.layout.title.text, PLACEHOLDER_TITLE);
        assert_eq!(figure.message(), Some(PLACEHOLDER_HINT));
        assert_eq!(figure.layout.xaxis.visible, Some(false));
        assert_eq!(figure.layout.yaxis.visible, Some(false));
    }

    #[test]
    fn error_figure_uses_red_annotation() {
        let figure = Figure::fetch_error();
        assert_eq!(figure.kind(), FigureKind::Error);
        let annotation = &figure.layout.annotations[0];
        assert_eq!(annotation.text, ERROR_MESSAGE);
        assert_eq!(annotation.font.color.as_deref(), Some("red"));
        assert!(!annotation.showarrow);
    }

    #[test]
    fn series_title_is_upper_cased_but_trace_keeps_case() {
        let figure = Figure::price_history(&history("aapl"));
        assert_eq!(figure.kind(), FigureKind::Series);
        assert_eq!(figure.layout.title.text, "AAPL Stock Prices (Last 1 Month)");
        assert_eq!(figure.data[0].name, "aapl");
        assert_eq!(figure.data[0].x, vec!["2024-05-01", "2024-05-02"]);
        assert_eq!(figure.data[0].y, vec![170.5, 172.25]);
    }

    #[test]
    fn series_serializes_as_plotly_json() {
        let value = serde_json::to_value(Figure::price_history(&history("MSFT"))).unwrap();
        assert_eq!(value["data"][0]["type"], json!("scatter"));
        assert_eq!(value["data"][0]["mode"], json!("lines"));
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], json!("Date"));
        assert_eq!(value["layout"]["yaxis"]["showgrid"], json!(true));
        assert_eq!(value["layout"]["plot_bgcolor"], json!("#f9f9f9"));
        assert_eq!(value["layout"]["font"]["size"], json!(14));
        assert!(value["layout"].get("annotations").is_none());
        assert!(value["layout"]["xaxis"].get("visible").is_none());
    }

    #[test]
    fn kind_names_are_lowercase() {
        assert_eq!(FigureKind::Series.to_string(), "series");
        assert_eq!(FigureKind::Error.to_string(), "error");
        assert_eq!(FigureKind::Placeholder.to_string(), "placeholder");
    }
}
