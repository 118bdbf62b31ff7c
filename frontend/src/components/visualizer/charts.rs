//! SVG renderers for a projected series.
//!
//! Non-numeric y values have zero magnitude: a flat bar, a point on the
//! baseline, no pie slice.

use common::chart::{pie_slices, slice_angles, ChartPoint, LinearScale};
use yew::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 28.0;
const PALETTE: [&str; 6] = ["#111827", "#2563eb", "#059669", "#d97706", "#dc2626", "#7c3aed"];

fn plot_height() -> f64 {
    HEIGHT - MARGIN_BOTTOM
}

fn slot_width(count: usize) -> f64 {
    (WIDTH - MARGIN_LEFT) / count.max(1) as f64
}

fn fmt_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Axis ticks plus the zero baseline, shared by bar and line charts.
fn frame(scale: &LinearScale) -> Html {
    let height = plot_height();
    let baseline = height - scale.position(0.0, height);
    let ticks = scale.ticks(4).into_iter().map(|tick| {
        let y = height - scale.position(tick, height);
        html! {
            <text x={(MARGIN_LEFT - 6.0).to_string()} y={y.to_string()}
                  text-anchor="end" font-size="11" fill="#6b7280">
                { fmt_tick(tick) }
            </text>
        }
    });

    html! {
        <>
            { for ticks }
            <line x1={MARGIN_LEFT.to_string()} x2={WIDTH.to_string()}
                  y1={baseline.to_string()} y2={baseline.to_string()} stroke="#d1d5db" />
        </>
    }
}

fn x_label(index: usize, count: usize, label: String) -> Html {
    let x = MARGIN_LEFT + slot_width(count) * (index as f64 + 0.5);
    html! {
        <text x={x.to_string()} y={(HEIGHT - 8.0).to_string()}
              text-anchor="middle" font-size="11" fill="#6b7280">
            { label }
        </text>
    }
}

fn svg(content: Html) -> Html {
    html! {
        <svg viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)} width="100%">
            { content }
        </svg>
    }
}

pub fn bar_chart(points: &[ChartPoint]) -> Html {
    let scale = LinearScale::fit(points.iter().map(ChartPoint::magnitude));
    let height = plot_height();
    let baseline = height - scale.position(0.0, height);
    let slot = slot_width(points.len());
    let bar_width = slot * 0.7;

    let bars = points.iter().enumerate().map(|(i, point)| {
        let top = height - scale.position(point.magnitude(), height);
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
        html! {
            <g>
                <rect x={x.to_string()} y={top.min(baseline).to_string()}
                      width={bar_width.to_string()} height={(top - baseline).abs().to_string()}
                      fill={PALETTE[0]} rx="3" />
                { x_label(i, points.len(), point.label()) }
            </g>
        }
    });

    svg(html! {
        <>
            { frame(&scale) }
            { for bars }
        </>
    })
}

pub fn line_chart(points: &[ChartPoint]) -> Html {
    let scale = LinearScale::fit(points.iter().map(ChartPoint::magnitude));
    let height = plot_height();
    let slot = slot_width(points.len());
    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            (
                MARGIN_LEFT + slot * (i as f64 + 0.5),
                height - scale.position(point.magnitude(), height),
            )
        })
        .collect();
    let path = coords
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ");

    svg(html! {
        <>
            { frame(&scale) }
            <polyline points={path} fill="none" stroke={PALETTE[1]} stroke-width="2" />
            { for coords.iter().map(|(x, y)| html! {
                <circle cx={x.to_string()} cy={y.to_string()} r="3" fill={PALETTE[1]} />
            }) }
            { for points.iter().enumerate().map(|(i, point)| x_label(i, points.len(), point.label())) }
        </>
    })
}

pub fn pie_chart(points: &[ChartPoint]) -> Html {
    let slices = pie_slices(points);
    let angles = slice_angles(&slices);
    let (cx, cy, r) = (WIDTH / 3.0, HEIGHT / 2.0, HEIGHT / 2.0 - 16.0);

    if angles.iter().all(Option::is_none) {
        return html! { <p>{ "Nothing to draw: the y axis has no positive values." }</p> };
    }

    let wedges = slices.iter().zip(&angles).enumerate().filter_map(|(i, (slice, angle))| {
        let (start, end) = (*angle)?;
        let color = PALETTE[i % PALETTE.len()];
        Some(html! {
            <path d={wedge_path(cx, cy, r, start, end)} fill={color} stroke="#fff">
                <title>{ format!("{}: {}", slice.label, slice.value) }</title>
            </path>
        })
    });

    let legend = slices.iter().enumerate().filter(|(_, s)| s.is_drawable()).enumerate().map(
        |(row, (i, slice))| {
            let y = 24.0 + row as f64 * 18.0;
            let x = WIDTH * 2.0 / 3.0;
            html! {
                <g>
                    <rect x={x.to_string()} y={(y - 10.0).to_string()} width="12" height="12"
                          fill={PALETTE[i % PALETTE.len()]} />
                    <text x={(x + 18.0).to_string()} y={y.to_string()} font-size="12">
                        { format!("{} ({})", slice.label, slice.value) }
                    </text>
                </g>
            }
        },
    );

    svg(html! {
        <>
            { for wedges }
            { for legend }
        </>
    })
}

/// SVG path of a wedge; angles run clockwise from 12 o'clock.
fn wedge_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let point = |angle: f64| (cx + r * angle.sin(), cy - r * angle.cos());
    let (x0, y0) = point(start);
    if end - start >= std::f64::consts::TAU - 1e-9 {
        // a lone slice: two half arcs make the full circle
        let (x1, y1) = point(start + std::f64::consts::PI);
        return format!(
            "M {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 1 1 {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 1 1 {x0:.2} {y0:.2} Z"
        );
    }
    let (x1, y1) = point(end);
    let large_arc = if end - start > std::f64::consts::PI { 1 } else { 0 };
    format!(
        "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_wedge_ends_at_three_oclock() {
        let path = wedge_path(100.0, 100.0, 50.0, 0.0, std::f64::consts::FRAC_PI_2);
        assert_eq!(path, "M 100.00 100.00 L 100.00 50.00 A 50.00 50.00 0 0 1 150.00 100.00 Z");
    }

    #[test]
    fn ticks_drop_trailing_zeroes() {
        assert_eq!(fmt_tick(250.0), "250");
        assert_eq!(fmt_tick(2.5), "2.5");
    }
}
