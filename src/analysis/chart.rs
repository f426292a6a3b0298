// src/analysis/chart.rs
//
// Renderer-neutral chart descriptions. The GUI draws these; tests inspect them.

use chrono::NaiveDate;

#[derive(Clone, Debug, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

impl Bin {
    pub fn mid(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Solid,
    Dashed,
    Markers,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub style: Style,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<[f64; 2]>, style: Style) -> Self {
        Self { name: name.into(), points, style }
    }
}

/// Square matrix with the same labels on both axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    pub labels: Vec<String>,
    pub cells: Vec<Vec<f64>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartBody {
    Histogram(Vec<Bin>),
    /// Horizontal when there are many long labels (top-N lists).
    Bars { bars: Vec<Bar>, horizontal: bool },
    Lines(Vec<Series>),
    /// With `diagonal`, a y = x reference line spanning the data.
    Scatter { points: Vec<[f64; 2]>, diagonal: bool },
    Heatmap(Matrix),
    /// Nothing to draw; the text says why.
    Placeholder(String),
}

/// X axis scale. `Days` values are days since 1970-01-01.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum XAxis {
    #[default]
    Linear,
    Days,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_axis: XAxis,
    pub body: ChartBody,
    /// Shown under the chart, e.g. how many records had to be left out.
    pub note: Option<String>,
}

impl Chart {
    pub fn new(title: impl Into<String>, body: ChartBody) -> Self {
        Self {
            title: title.into(),
            x_label: s!(),
            y_label: s!(),
            x_axis: XAxis::Linear,
            body,
            note: None,
        }
    }

    pub fn placeholder(title: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(title, ChartBody::Placeholder(reason.into()))
    }

    pub fn axes(mut self, x: &str, y: &str) -> Self {
        self.x_label = s!(x);
        self.y_label = s!(y);
        self
    }

    pub fn dated(mut self) -> Self {
        self.x_axis = XAxis::Days;
        self
    }

    /// "N <what> omitted (<why>)" when anything was left out.
    pub fn omitted(mut self, n: usize, what: &str, why: &str) -> Self {
        if n > 0 {
            self.note = Some(format!("{n} {what} omitted ({why})"));
        }
        self
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, ChartBody::Placeholder(_))
    }
}

pub fn day_number(d: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64
}

pub fn from_day_number(x: f64) -> Option<NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    epoch.checked_add_signed(chrono::TimeDelta::try_days(x.round() as i64)?)
}
