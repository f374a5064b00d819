//! SVG pie, donut and bar charts drawn from backend `ChartSpec`s.

use std::f64::consts::{FRAC_PI_2, TAU};

use contracts::shared::charts::{ChartKind, ChartSpec};
use leptos::prelude::*;

const SIZE: f64 = 200.0;
const RADIUS: f64 = 90.0;
const DONUT_HOLE: f64 = 0.55;
const BAR_HEIGHT: f64 = 180.0;
const BAR_WIDTH: f64 = 36.0;
const BAR_GAP: f64 = 12.0;

/// Point on a circle; angle 0 is twelve o'clock, growing clockwise.
fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let a = angle - FRAC_PI_2;
    (cx + r * a.cos(), cy + r * a.sin())
}

/// `(start, end)` angle of each slice.
pub fn slice_angles(shares: &[f64]) -> Vec<(f64, f64)> {
    let mut start = 0.0;
    shares
        .iter()
        .map(|share| {
            let end = start + share * TAU;
            let slice = (start, end);
            start = end;
            slice
        })
        .collect()
}

/// SVG path of one slice; `inner > 0` cuts a donut ring.
pub fn slice_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // a full circle cannot be drawn with a single arc
    let end = if end - start >= TAU { start + TAU - 1e-4 } else { end };
    let large = if end - start > std::f64::consts::PI { 1 } else { 0 };
    let (x0, y0) = polar(cx, cy, outer, start);
    let (x1, y1) = polar(cx, cy, outer, end);

    if inner > 0.0 {
        let (x2, y2) = polar(cx, cy, inner, end);
        let (x3, y3) = polar(cx, cy, inner, start);
        format!(
            "M {x0:.2} {y0:.2} A {outer} {outer} 0 {large} 1 {x1:.2} {y1:.2} \
             L {x2:.2} {y2:.2} A {inner} {inner} 0 {large} 0 {x3:.2} {y3:.2} Z"
        )
    } else {
        format!(
            "M {cx} {cy} L {x0:.2} {y0:.2} A {outer} {outer} 0 {large} 1 {x1:.2} {y1:.2} Z"
        )
    }
}

/// Bar heights scaled to the tallest value; negatives draw as empty.
pub fn bar_heights(values: &[f64], max_height: f64) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0, f64::max);
    values
        .iter()
        .map(|v| if max > 0.0 { v.max(0.0) / max * max_height } else { 0.0 })
        .collect()
}

fn circular_chart(spec: &ChartSpec, donut: bool) -> AnyView {
    let c = SIZE / 2.0;
    let inner = if donut { RADIUS * DONUT_HOLE } else { 0.0 };
    let angles = slice_angles(&spec.shares());

    let slices = spec
        .points
        .iter()
        .zip(angles)
        .filter(|(_, (start, end))| end > start)
        .map(|(p, (start, end))| {
            let d = slice_path(c, c, RADIUS, inner, start, end);
            let title = format!("{}: {}", p.label, p.value_text);
            view! {
                <path d=d fill=p.color.clone()>
                    <title>{title}</title>
                </path>
            }
        })
        .collect_view();

    view! {
        <svg class="chart__svg" viewBox=format!("0 0 {SIZE} {SIZE}") width=SIZE height=SIZE>
            {slices}
        </svg>
    }
    .into_any()
}

fn bar_chart(spec: &ChartSpec) -> AnyView {
    let values: Vec<f64> = spec.points.iter().map(|p| p.value).collect();
    let heights = bar_heights(&values, BAR_HEIGHT);
    let width = (BAR_WIDTH + BAR_GAP) * spec.points.len().max(1) as f64 + BAR_GAP;
    let total_height = BAR_HEIGHT + 24.0;

    let bars = spec
        .points
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(i, (p, h))| {
            let x = BAR_GAP + i as f64 * (BAR_WIDTH + BAR_GAP);
            let title = format!("{}: {}", p.label, p.value_text);
            view! {
                <g>
                    <rect x=x y=BAR_HEIGHT - h width=BAR_WIDTH height=h fill=p.color.clone()>
                        <title>{title}</title>
                    </rect>
                    <text
                        x=x + BAR_WIDTH / 2.0
                        y=total_height - 6.0
                        text-anchor="middle"
                        class="chart__axis-label"
                    >
                        {p.label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg class="chart__svg" viewBox=format!("0 0 {width} {total_height}") width=width height=total_height>
            {bars}
        </svg>
    }
    .into_any()
}

#[component]
pub fn ChartView(spec: ChartSpec) -> impl IntoView {
    let drawing = match spec.kind {
        ChartKind::Pie => circular_chart(&spec, false),
        ChartKind::Donut => circular_chart(&spec, true),
        ChartKind::Bar => bar_chart(&spec),
    };
    let empty = spec.total() <= 0.0;

    let legend = spec
        .points
        .iter()
        .map(|p| {
            view! {
                <li class="chart__legend-item">
                    <span class="chart__swatch" style=format!("background: {}", p.color)></span>
                    <span>{p.label.clone()}</span>
                    <span class="chart__legend-value">{p.value_text.clone()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="chart" id=format!("chart-{}", spec.id)>
            <div class="chart__title">{spec.title.clone()}</div>
            {if empty {
                view! { <div class="chart__empty">"Sin datos para el período"</div> }.into_any()
            } else {
                drawing
            }}
            <ul class="chart__legend">{legend}</ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_slice_angles_cover_the_circle() {
        let angles = slice_angles(&[0.25, 0.25, 0.5]);
        assert!(close(angles[0].0, 0.0));
        assert!(close(angles[0].1, TAU / 4.0));
        assert!(close(angles[1].1, TAU / 2.0));
        assert!(close(angles[2].1, TAU));
    }

    #[test]
    fn test_polar_starts_at_twelve_oclock() {
        let (x, y) = polar(100.0, 100.0, 90.0, 0.0);
        assert!(close(x, 100.0));
        assert!(close(y, 10.0));
        let (x, y) = polar(100.0, 100.0, 90.0, FRAC_PI_2);
        assert!(close(x, 190.0));
        assert!(close(y, 100.0));
    }

    #[test]
    fn test_slice_path_shapes() {
        let pie = slice_path(100.0, 100.0, 90.0, 0.0, 0.0, FRAC_PI_2);
        assert!(pie.starts_with("M 100 100 L 100.00 10.00 A 90 90 0 0 1 190.00 100.00"));

        let large = slice_path(100.0, 100.0, 90.0, 0.0, 0.0, 3.0 * FRAC_PI_2);
        assert!(large.contains(" 0 1 1 "));

        let ring = slice_path(100.0, 100.0, 90.0, 50.0, 0.0, FRAC_PI_2);
        assert!(ring.starts_with("M 100.00 10.00"));
        assert!(ring.contains("A 50 50 0 0 0 100.00 50.00"));
    }

    #[test]
    fn test_bar_heights() {
        assert_eq!(bar_heights(&[50.0, 100.0, -5.0], 180.0), vec![90.0, 180.0, 0.0]);
        assert_eq!(bar_heights(&[0.0, 0.0], 180.0), vec![0.0, 0.0]);
    }
}
