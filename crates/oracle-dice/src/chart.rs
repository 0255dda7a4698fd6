//! SVG bar chart of the distribution.
//!
//! The chart is assembled as plain markup: one bar per `k`, the mode bar
//! highlighted, a dashed line at the mean and dashed lines one standard
//! deviation either side. Output is a pure function of its inputs.

use crate::distribution::Distribution;

/// Fill for ordinary bars.
pub const BAR_COLOR: &str = "#3b82f6";
/// Fill for the mode bar.
pub const MODE_COLOR: &str = "#9333ea";
/// Stroke for the mean line.
pub const MEAN_COLOR: &str = "green";
/// Stroke for the one-sigma lines.
pub const SIGMA_COLOR: &str = "orange";

const MARGIN_TOP: f64 = 60.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 90.0;
const MARGIN_LEFT: f64 = 80.0;
const Y_TICKS: u32 = 5;

/// Chart canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
        }
    }
}

/// Maps distribution values onto the plot area.
struct Frame {
    left: f64,
    top: f64,
    plot_width: f64,
    plot_height: f64,
    band: f64,
    y_max: f64,
}

impl Frame {
    fn new(options: &ChartOptions, bands: u32, max_probability: f64) -> Self {
        let plot_width = (options.width as f64 - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_height = (options.height as f64 - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            plot_width,
            plot_height,
            band: plot_width / bands.max(1) as f64,
            y_max: nice_ceiling(max_probability),
        }
    }

    /// X coordinate of a (possibly fractional) value of `k`; integer `k`
    /// lands on the centre of its band.
    fn x(&self, k: f64) -> f64 {
        self.left + (k - 0.5) * self.band
    }

    fn y(&self, probability: f64) -> f64 {
        self.top + self.plot_height * (1.0 - probability / self.y_max)
    }

    fn bottom(&self) -> f64 {
        self.top + self.plot_height
    }

    fn right(&self) -> f64 {
        self.left + self.plot_width
    }
}

/// Rounds up to the next multiple of 0.05 so the axis ends on a round tick.
fn nice_ceiling(value: f64) -> f64 {
    let stepped = (value / 0.05).ceil() * 0.05;
    if stepped <= 0.0 {
        0.05
    } else {
        stepped
    }
}

/// Renders the distribution as a standalone SVG document.
pub fn render_chart(distribution: &Distribution, options: &ChartOptions) -> String {
    let sides = distribution.sides.get();
    let stats = &distribution.statistics;
    let frame = Frame::new(options, sides, distribution.max_probability());
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
        w = options.width,
        h = options.height
    ));
    svg.push_str(&format!(
        "  <rect width=\"{}\" height=\"{}\" fill=\"white\"/>\n",
        options.width, options.height
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"28\" text-anchor=\"middle\" font-size=\"20\" font-weight=\"bold\">Maximum of Two {} Dice Rolls</text>\n",
        options.width as f64 / 2.0,
        distribution.sides
    ));

    // Horizontal grid and y-axis ticks.
    for i in 0..=Y_TICKS {
        let p = frame.y_max * i as f64 / Y_TICKS as f64;
        let y = frame.y(p);
        svg.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{y:.2}\" x2=\"{:.2}\" y2=\"{y:.2}\" stroke=\"#e5e7eb\" stroke-dasharray=\"3 3\"/>\n",
            frame.left,
            frame.right()
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" font-size=\"12\">{:.2}</text>\n",
            frame.left - 8.0,
            y + 4.0,
            p
        ));
    }

    for row in distribution.rows() {
        let center = frame.x(row.k as f64);
        let bar_width = frame.band * 0.8;
        let y = frame.y(row.probability);
        let fill = if row.k == stats.mode {
            MODE_COLOR
        } else {
            BAR_COLOR
        };
        svg.push_str(&format!(
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"><title>Value: {} | Probability: {:.4} | Percentage: {}%</title></rect>\n",
            center - bar_width / 2.0,
            y,
            bar_width,
            frame.bottom() - y,
            fill,
            row.k,
            row.probability,
            row.percentage
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"12\">{}</text>\n",
            center,
            frame.bottom() + 18.0,
            row.k
        ));
    }

    // Axes.
    svg.push_str(&format!(
        "  <line x1=\"{l:.2}\" y1=\"{b:.2}\" x2=\"{r:.2}\" y2=\"{b:.2}\" stroke=\"#374151\"/>\n",
        l = frame.left,
        b = frame.bottom(),
        r = frame.right()
    ));
    svg.push_str(&format!(
        "  <line x1=\"{l:.2}\" y1=\"{t:.2}\" x2=\"{l:.2}\" y2=\"{b:.2}\" stroke=\"#374151\"/>\n",
        l = frame.left,
        t = frame.top,
        b = frame.bottom()
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"14\">Maximum Value (k)</text>\n",
        frame.left + frame.plot_width / 2.0,
        frame.bottom() + 42.0
    ));
    svg.push_str(&format!(
        "  <text x=\"20\" y=\"{cy:.2}\" text-anchor=\"middle\" font-size=\"14\" transform=\"rotate(-90 20 {cy:.2})\">Probability</text>\n",
        cy = frame.top + frame.plot_height / 2.0
    ));

    push_reference_line(
        &mut svg,
        &frame,
        stats.mean,
        MEAN_COLOR,
        2.0,
        "5 5",
        &format!("μ = {:.2}", stats.mean),
    );
    push_reference_line(
        &mut svg,
        &frame,
        stats.lower_sigma(),
        SIGMA_COLOR,
        1.5,
        "3 3",
        "μ - σ",
    );
    push_reference_line(
        &mut svg,
        &frame,
        stats.upper_sigma(),
        SIGMA_COLOR,
        1.5,
        "3 3",
        "μ + σ",
    );

    svg.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"12\" fill=\"{}\">■ P(M = k)</text>\n",
        frame.left,
        frame.bottom() + 70.0,
        BAR_COLOR
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"12\" fill=\"{}\">■ Mode (most likely value)</text>\n",
        frame.left + 120.0,
        frame.bottom() + 70.0,
        MODE_COLOR
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"12\" fill=\"{}\">- - Mean (μ = {:.3})</text>\n",
        frame.left + 320.0,
        frame.bottom() + 70.0,
        MEAN_COLOR,
        stats.mean
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"12\" fill=\"{}\">- - ± One standard deviation (σ = {:.3})</text>\n",
        frame.left,
        frame.bottom() + 86.0,
        SIGMA_COLOR,
        stats.std_dev
    ));
    svg.push_str("</svg>\n");
    svg
}

fn push_reference_line(
    svg: &mut String,
    frame: &Frame,
    value: f64,
    color: &str,
    stroke_width: f64,
    dash: &str,
    label: &str,
) {
    let x = frame.x(value);
    svg.push_str(&format!(
        "  <line x1=\"{x:.2}\" y1=\"{:.2}\" x2=\"{x:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\" stroke-dasharray=\"{}\"/>\n",
        frame.top,
        frame.bottom(),
        color,
        stroke_width,
        dash
    ));
    svg.push_str(&format!(
        "  <text x=\"{x:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"11\" font-weight=\"bold\" fill=\"{}\">{}</text>\n",
        frame.top - 6.0,
        color,
        label
    ));
}
