//! Chart Geometry
//!
//! Projects the net-worth series into SVG coordinates for the home chart.

use asset_inventory::NetWorthPoint;

/// Drawing area in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    /// Left gutter reserved for y-axis labels
    pub left: f64,
    /// Bottom gutter reserved for x-axis labels
    pub bottom: f64,
    pub top: f64,
    pub right: f64,
}

impl Frame {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    pub fn plot_bottom(&self) -> f64 {
        self.top + self.plot_height()
    }
}

/// A series point placed in the frame
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedPoint {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// A horizontal grid line with its value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub points: Vec<PlottedPoint>,
    pub ticks: Vec<Tick>,
}

impl ChartLayout {
    /// `x,y` pairs for an SVG `polyline`
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Lay out `series` in `frame` with roughly `tick_count` y-axis ticks
pub fn layout(series: &[NetWorthPoint], frame: Frame, tick_count: usize) -> ChartLayout {
    if series.is_empty() {
        return ChartLayout { points: Vec::new(), ticks: Vec::new() };
    }
    let min = series.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max = series.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi, step) = domain(min, max, tick_count.max(1));

    let y_of = |value: f64| frame.plot_bottom() - (value - lo) / (hi - lo) * frame.plot_height();
    let gap = if series.len() > 1 {
        frame.plot_width() / (series.len() - 1) as f64
    } else {
        0.0
    };

    let points = series
        .iter()
        .enumerate()
        .map(|(i, p)| PlottedPoint {
            label: p.label.clone(),
            value: p.value,
            x: if series.len() > 1 { frame.left + gap * i as f64 } else { frame.left + frame.plot_width() / 2.0 },
            y: y_of(p.value),
        })
        .collect();

    let steps = ((hi - lo) / step).round() as usize;
    let ticks = (0..=steps)
        .map(|i| {
            let value = lo + step * i as f64;
            Tick { value, y: y_of(value) }
        })
        .collect();

    ChartLayout { points, ticks }
}

/// Rounded axis bounds and step covering `[min, max]`
fn domain(min: f64, max: f64, tick_count: usize) -> (f64, f64, f64) {
    let span = if max > min { max - min } else { min.abs().max(1.0) };
    let step = nice_step(span / tick_count as f64);
    let mut lo = (min / step).floor() * step;
    let mut hi = (max / step).ceil() * step;
    if hi <= lo {
        lo -= step;
        hi += step;
    }
    (lo, hi, step)
}

/// Round up to 1, 2 or 5 times a power of ten
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}
