//! Plain SVG charts for the dashboard. Rendered from props on every pass,
//! so they carry no state of their own and vanish with their screen.

use dioxus::prelude::*;

/// Segment colors, shared by every chart.
pub const PALETTE: [&str; 7] = [
    "#ff6384", "#36a2eb", "#ffce56", "#4bc0c0", "#9966ff", "#ff9f40", "#c7c7c7",
];

const BAR_AREA_WIDTH: f64 = 360.0;
const BAR_AREA_HEIGHT: f64 = 180.0;
const BAR_LABEL_BAND: f64 = 24.0;

#[component]
pub fn BarChart(labels: Vec<String>, values: Vec<u32>) -> Element {
    let max = values.iter().copied().max().unwrap_or(0).max(1) as f64;
    let slot = BAR_AREA_WIDTH / values.len().max(1) as f64;
    let bar_width = slot * 0.6;
    let view_height = BAR_AREA_HEIGHT + BAR_LABEL_BAND;

    rsx!(
        svg {
            class: "w-full",
            view_box: "0 0 {BAR_AREA_WIDTH} {view_height}",
            {values.iter().zip(labels.iter()).enumerate().map(|(index, (value, label))| {
                let height = (*value as f64 / max) * (BAR_AREA_HEIGHT - 16.0);
                let x = index as f64 * slot + (slot - bar_width) / 2.0;
                let y = BAR_AREA_HEIGHT - height;
                let center = x + bar_width / 2.0;
                let value_y = y - 4.0;
                let label_y = BAR_AREA_HEIGHT + 16.0;
                let color = PALETTE[index % PALETTE.len()];
                rsx!(
                    rect {
                        x: "{x}",
                        y: "{y}",
                        width: "{bar_width}",
                        height: "{height}",
                        rx: "2",
                        fill: "{color}",
                    }
                    text {
                        x: "{center}",
                        y: "{value_y}",
                        text_anchor: "middle",
                        font_size: "11",
                        class: "fill-current",
                        "{value}"
                    }
                    text {
                        x: "{center}",
                        y: "{label_y}",
                        text_anchor: "middle",
                        font_size: "11",
                        class: "fill-current",
                        "{label}"
                    }
                )
            })}
        }
    )
}

#[component]
pub fn DonutChart(labels: Vec<String>, values: Vec<u32>) -> Element {
    let total: u32 = values.iter().sum();
    let radius = 54.0;
    let circumference = 2.0 * std::f64::consts::PI * radius;

    let mut start = 0.0;
    let segments: Vec<(f64, f64, &str)> = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let length = if total == 0 {
                0.0
            } else {
                *value as f64 / total as f64 * circumference
            };
            let segment = (length, start, PALETTE[index % PALETTE.len()]);
            start += length;
            segment
        })
        .collect();

    rsx!(
        div { class: "flex items-center gap-6",
            svg {
                class: "w-40 h-40",
                view_box: "0 0 160 160",
                if total == 0 {
                    circle {
                        cx: "80",
                        cy: "80",
                        r: "{radius}",
                        fill: "none",
                        stroke: "#e5e7eb",
                        stroke_width: "20",
                    }
                }
                {segments.iter().copied().map(|(length, offset, color)| {
                    let gap = circumference - length;
                    let dash_offset = -offset;
                    rsx!(
                        circle {
                            cx: "80",
                            cy: "80",
                            r: "{radius}",
                            fill: "none",
                            stroke: "{color}",
                            stroke_width: "20",
                            stroke_dasharray: "{length} {gap}",
                            stroke_dashoffset: "{dash_offset}",
                            transform: "rotate(-90 80 80)",
                        }
                    )
                })}
            }
            ul { class: "flex flex-col gap-1",
                {labels.iter().zip(values.iter()).enumerate().map(|(index, (label, value))| {
                    let color = PALETTE[index % PALETTE.len()];
                    rsx!(
                        li { class: "flex items-center gap-2 text-sm",
                            span {
                                class: "inline-block w-3 h-3 rounded-sm",
                                style: "background-color: {color}",
                            }
                            "{label}: {value}"
                        }
                    )
                })}
            }
        }
    )
}
