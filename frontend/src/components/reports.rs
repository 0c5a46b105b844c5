//! # Spending Reports
//!
//! Two charts fed by the backend's aggregate endpoints: totals per category as
//! bars and totals per month as a line. Each series is fetched once on mount,
//! independently of the other and of the expense list. A failed fetch is
//! logged and leaves its chart empty.

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::reports::{axis_max, category_series, monthly_series};
use shared::{ChartPoint, ReportSource};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const COMPONENT: &str = "ReportsView";
const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 320;
const PRIMARY: RGBColor = RGBColor(102, 126, 234);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartKind {
    Bar,
    Line,
}

#[derive(Properties, PartialEq)]
pub struct SeriesChartProps {
    pub title: AttrValue,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
    pub loading: bool,
}

pub enum Msg {
    DrawChart,
}

pub struct SeriesChart {
    canvas_ref: NodeRef,
}

impl Component for SeriesChart {
    type Message = Msg;
    type Properties = SeriesChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DrawChart => {
                self.draw_chart(ctx.props().kind, &ctx.props().points);
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        // The canvas only exists once there is data, so draw after every render
        if !ctx.props().points.is_empty() {
            ctx.link().send_message(Msg::DrawChart);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="report-chart">
                <h3 class="chart-title">{props.title.clone()}</h3>
                {if props.points.is_empty() && props.loading {
                    html! {
                        <div class="chart-loading">
                            <div class="loading-spinner"></div>
                            <p>{"Loading chart data..."}</p>
                        </div>
                    }
                } else if props.points.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <p>{"No data available"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            class="report-chart-canvas"
                            width={CANVAS_WIDTH.to_string()}
                            height={CANVAS_HEIGHT.to_string()}
                        ></canvas>
                    }
                }}
            </div>
        }
    }
}

impl SeriesChart {
    fn draw_chart(&self, kind: ChartKind, points: &[ChartPoint]) {
        if points.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();
        let y_max = axis_max(points);

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d((0u32..points.len() as u32).into_segmented(), 0f64..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Amount ($)")
            .y_label_formatter(&|v| format!("${:.0}", v))
            .x_label_formatter(&|v| segment_label(&labels, v))
            .x_labels(labels.len())
            .label_style(("sans-serif", 12, &PRIMARY))
            .axis_style(RGBColor(230, 230, 230))
            .bold_line_style(RGBColor(245, 245, 245))
            .light_line_style(RGBColor(250, 250, 250))
            .draw()
            .is_err()
        {
            return;
        }

        let drawn = match kind {
            ChartKind::Bar => chart
                .draw_series(
                    Histogram::vertical(&chart)
                        .style(PRIMARY.mix(0.8).filled())
                        .margin(10)
                        .data(points.iter().enumerate().map(|(i, p)| (i as u32, p.value))),
                )
                .map(|_| ()),
            ChartKind::Line => {
                let line = chart
                    .draw_series(LineSeries::new(
                        points
                            .iter()
                            .enumerate()
                            .map(|(i, p)| (SegmentValue::CenterOf(i as u32), p.value)),
                        PRIMARY.stroke_width(3),
                    ))
                    .map(|_| ());
                line.and_then(|_| {
                    chart
                        .draw_series(points.iter().enumerate().map(|(i, p)| {
                            Circle::new((SegmentValue::CenterOf(i as u32), p.value), 4, PRIMARY.filled())
                        }))
                        .map(|_| ())
                })
            }
        };

        if drawn.is_err() {
            Logger::warn_with_component(COMPONENT, "Failed to draw chart series");
            return;
        }

        let _ = root.present();
    }
}

/// Axis label for a bar/point slot; gaps between slots stay unlabeled.
fn segment_label(labels: &[String], value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

#[function_component(ReportsView)]
pub fn reports_view() -> Html {
    let api_client = use_context::<ApiClient>().unwrap_or_default();
    let category_points = use_state(Vec::<ChartPoint>::new);
    let monthly_points = use_state(Vec::<ChartPoint>::new);
    let categories_loading = use_state(|| true);
    let months_loading = use_state(|| true);

    {
        let category_points = category_points.clone();
        let monthly_points = monthly_points.clone();
        let categories_loading = categories_loading.clone();
        let months_loading = months_loading.clone();

        use_effect_with((), move |_| {
            let client = api_client.clone();
            spawn_local(async move {
                match client.category_totals().await {
                    Ok(totals) => category_points.set(category_series(&totals)),
                    Err(e) => Logger::error_with_component(
                        COMPONENT,
                        &format!("Failed to fetch category totals: {}", e),
                    ),
                }
                categories_loading.set(false);
            });

            spawn_local(async move {
                match api_client.monthly_trends().await {
                    Ok(totals) => monthly_points.set(monthly_series(&totals)),
                    Err(e) => Logger::error_with_component(
                        COMPONENT,
                        &format!("Failed to fetch monthly trends: {}", e),
                    ),
                }
                months_loading.set(false);
            });
            || ()
        });
    }

    html! {
        <section class="reports-section">
            <h2>{"Reports"}</h2>
            <div class="reports-grid">
                <SeriesChart
                    title="Total Expenses per Category"
                    kind={ChartKind::Bar}
                    points={(*category_points).clone()}
                    loading={*categories_loading}
                />
                <SeriesChart
                    title="Monthly Spending Trends"
                    kind={ChartKind::Line}
                    points={(*monthly_points).clone()}
                    loading={*months_loading}
                />
            </div>
        </section>
    }
}
