//! Net Worth Chart
//!
//! SVG line chart with lakh ticks and a hover tooltip.

use leptos::prelude::*;

use asset_inventory::{format_inr, format_lakhs, NetWorthPoint};

use crate::chart::{self, Frame};

const FRAME: Frame = Frame {
    width: 720.0,
    height: 320.0,
    left: 48.0,
    bottom: 32.0,
    top: 16.0,
    right: 16.0,
};

const TICK_COUNT: usize = 4;
const LINE_COLOR: &str = "#1f8f5f";
const GRID_COLOR: &str = "#c8d9d0";
const LABEL_COLOR: &str = "#3f4f45";

#[component]
pub fn NetWorthChart(#[prop(into)] series: Signal<Vec<NetWorthPoint>>) -> impl IntoView {
    let layout = Memo::new(move |_| chart::layout(&series.get(), FRAME, TICK_COUNT));
    let (hovered, set_hovered) = signal::<Option<usize>>(None);

    let grid = move || {
        layout.get().ticks.into_iter().map(|tick| view! {
            <line
                x1=FRAME.left
                x2=FRAME.width - FRAME.right
                y1=tick.y
                y2=tick.y
                stroke=GRID_COLOR
                stroke-dasharray="3 3"
            />
            <text x=FRAME.left - 8.0 y=tick.y + 4.0 text-anchor="end" fill=LABEL_COLOR font-size="12">
                {format_lakhs(tick.value)}
            </text>
        }).collect_view()
    };

    let x_labels = move || {
        layout.get().points.into_iter().map(|point| view! {
            <text x=point.x y=FRAME.height - 8.0 text-anchor="middle" fill=LABEL_COLOR font-size="12">
                {point.label}
            </text>
        }).collect_view()
    };

    let dots = move || {
        layout.get().points.into_iter().enumerate().map(|(index, point)| {
            let radius = move || if hovered.get() == Some(index) { "6" } else { "4" };
            view! {
                <circle
                    cx=point.x
                    cy=point.y
                    r=radius
                    fill=LINE_COLOR
                    on:mouseenter=move |_| set_hovered.set(Some(index))
                    on:mouseleave=move |_| set_hovered.set(None)
                />
            }
        }).collect_view()
    };

    let tooltip = move || {
        let index = hovered.get()?;
        let point = layout.get().points.get(index).cloned()?;
        let left = point.x / FRAME.width * 100.0;
        let top = point.y / FRAME.height * 100.0;
        Some(view! {
            <div class="chart-tooltip" style=format!("left: {:.1}%; top: {:.1}%;", left, top)>
                <span class="muted">{point.label}</span>
                <strong>{format_inr(point.value)}</strong>
            </div>
        })
    };

    view! {
        <div class="chart-wrap">
            <svg
                viewBox=format!("0 0 {} {}", FRAME.width, FRAME.height)
                role="img"
                aria-label="Net worth over the last 12 months"
            >
                {grid}
                {x_labels}
                <polyline
                    points=move || layout.get().polyline()
                    fill="none"
                    stroke=LINE_COLOR
                    stroke-width="3"
                />
                {dots}
            </svg>
            {tooltip}
        </div>
    }
}
