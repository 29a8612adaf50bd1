use std::collections::BTreeMap;

use bioai_core::charts::{bar_layout, pie_slices, VIEW_HEIGHT, VIEW_WIDTH};
use leptos::prelude::*;

fn view_box() -> String {
    format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
}

fn coord(value: f64) -> String {
    format!("{:.2}", value)
}

#[component]
pub fn CompositionBarChart(counts: BTreeMap<String, u64>) -> impl IntoView {
    let bars = bar_layout(&counts);

    view! {
        <svg class="chart chart-bar" viewBox=view_box() role="img" aria-label="Composition bar chart">
            {bars
                .into_iter()
                .map(|bar| {
                    let center = coord(bar.center_x());
                    let label_y = coord(bar.label_y());
                    view! {
                        <g class="chart-bar-group">
                            <rect
                                class="chart-bar-rect"
                                x=coord(bar.x)
                                y=coord(bar.y)
                                width=coord(bar.width)
                                height=coord(bar.height)
                            />
                            <text class="chart-value" x=center.clone() y=coord((bar.y - 4.0).max(10.0)) text-anchor="middle">
                                {bar.count.to_string()}
                            </text>
                            <text class="chart-label" x=center y=label_y text-anchor="middle">
                                {bar.label}
                            </text>
                        </g>
                    }
                })
                .collect::<Vec<_>>()}
        </svg>
    }
}

#[component]
pub fn CompositionPieChart(counts: BTreeMap<String, u64>) -> impl IntoView {
    let slices = pie_slices(&counts);

    view! {
        <div class="chart-pie-wrapper">
            <svg class="chart chart-pie" viewBox=view_box() role="img" aria-label="Composition pie chart">
                {slices
                    .iter()
                    .map(|slice| view! { <path d=slice.path.clone() fill=slice.color /> })
                    .collect::<Vec<_>>()}
            </svg>
            <ul class="chart-legend">
                {slices
                    .iter()
                    .map(|slice| {
                        view! {
                            <li>
                                <span class="legend-swatch" style=format!("background:{}", slice.color)></span>
                                {slice.legend()}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
