//! Polar bar chart drawing on an egui painter.

use eframe::egui;
use windrose_core::{
    chart::{compass_ticks, nice_ceiling},
    Chart, ChartColor, ChartRenderer, BAR_ALPHA,
};

/// Segments used to approximate each wedge's outer arc.
const ARC_SEGMENTS: usize = 12;
const GRID_RINGS: usize = 4;
const LEGEND_ROW_HEIGHT: f32 = 18.0;

#[derive(Debug, Clone)]
struct Wedge {
    start: f32,
    end: f32,
    /// Bar length as a fraction of the outer grid ring.
    extent: f32,
    fill: egui::Color32,
    outline: egui::Color32,
}

/// Everything needed to paint one chart, precomputed in unit space so that
/// painting only scales to the available rect.
#[derive(Debug, Clone)]
pub struct PolarChartHandle {
    id: u64,
    title: String,
    wedges: Vec<Wedge>,
    legend: Vec<(&'static str, egui::Color32)>,
    ring_max: f64,
}

impl PolarChartHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Default)]
pub struct EguiChartRenderer {
    next_id: u64,
    live: usize,
}

impl EguiChartRenderer {
    pub fn live_handles(&self) -> usize {
        self.live
    }
}

pub fn color32(color: ChartColor) -> egui::Color32 {
    let (r, g, b) = color.rgb();
    egui::Color32::from_rgb(r, g, b)
}

impl ChartRenderer for EguiChartRenderer {
    type Handle = PolarChartHandle;

    fn render(&mut self, chart: &Chart) -> PolarChartHandle {
        self.next_id += 1;
        self.live += 1;

        let ring_max = nice_ceiling(chart.max_radius());
        let alpha = (BAR_ALPHA * 255.0).round() as u8;
        let wedges = chart
            .bars
            .iter()
            .map(|bar| {
                let (r, g, b) = bar.color.rgb();
                Wedge {
                    start: (bar.angle - bar.width / 2.0) as f32,
                    end: (bar.angle + bar.width / 2.0) as f32,
                    extent: (bar.radius / ring_max) as f32,
                    fill: egui::Color32::from_rgba_unmultiplied(r, g, b, alpha),
                    outline: color32(bar.color),
                }
            })
            .collect();

        tracing::debug!(id = self.next_id, title = %chart.title, "rendered chart");
        PolarChartHandle {
            id: self.next_id,
            title: chart.title.clone(),
            wedges,
            legend: chart
                .legend()
                .map(|(label, color)| (label, color32(color)))
                .collect(),
            ring_max,
        }
    }

    fn dispose(&mut self, handle: PolarChartHandle) {
        self.live = self.live.saturating_sub(1);
        tracing::debug!(id = handle.id, live = self.live, "disposed chart");
    }
}

/// Screen position of a polar coordinate; angles run counter-clockwise from
/// East while screen y grows downwards.
fn polar_to_screen(center: egui::Pos2, radius: f32, angle: f32) -> egui::Pos2 {
    egui::pos2(center.x + radius * angle.cos(), center.y - radius * angle.sin())
}

fn wedge_points(center: egui::Pos2, radius: f32, start: f32, end: f32) -> Vec<egui::Pos2> {
    let mut points = Vec::with_capacity(ARC_SEGMENTS + 2);
    points.push(center);
    for step in 0..=ARC_SEGMENTS {
        let t = step as f32 / ARC_SEGMENTS as f32;
        points.push(polar_to_screen(center, radius, start + (end - start) * t));
    }
    points
}

fn format_ring_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Embeds `handle` in `ui`, filling the available space.
pub fn show_polar_chart(ui: &mut egui::Ui, handle: &PolarChartHandle) {
    let size = ui.available_size();
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let visuals = ui.visuals();
    let text_color = visuals.text_color();
    let grid_stroke = egui::Stroke::new(1.0, visuals.weak_text_color());

    painter.text(
        egui::pos2(rect.center().x, rect.top() + 4.0),
        egui::Align2::CENTER_TOP,
        handle.title(),
        egui::FontId::proportional(16.0),
        text_color,
    );

    let plot_rect = rect.shrink2(egui::vec2(40.0, 36.0)).translate(egui::vec2(0.0, 12.0));
    let radius = plot_rect.width().min(plot_rect.height()) / 2.0;
    if radius <= 0.0 {
        return;
    }
    let center = plot_rect.center();

    for ring in 1..=GRID_RINGS {
        let fraction = ring as f32 / GRID_RINGS as f32;
        painter.circle_stroke(center, radius * fraction, grid_stroke);
        let value = handle.ring_max * ring as f64 / GRID_RINGS as f64;
        painter.text(
            polar_to_screen(center, radius * fraction, 0.4),
            egui::Align2::LEFT_BOTTOM,
            format_ring_label(value),
            egui::FontId::proportional(10.0),
            visuals.weak_text_color(),
        );
    }

    for (angle, code) in compass_ticks() {
        let angle = angle as f32;
        painter.line_segment([center, polar_to_screen(center, radius, angle)], grid_stroke);
        painter.text(
            polar_to_screen(center, radius + 14.0, angle),
            egui::Align2::CENTER_CENTER,
            code,
            egui::FontId::proportional(12.0),
            text_color,
        );
    }

    for wedge in &handle.wedges {
        let extent = radius * wedge.extent.clamp(0.0, 1.0);
        if extent <= 0.0 {
            continue;
        }
        painter.add(egui::Shape::convex_polygon(
            wedge_points(center, extent, wedge.start, wedge.end),
            wedge.fill,
            egui::Stroke::new(1.0, wedge.outline),
        ));
    }

    let legend_origin = egui::pos2(rect.right() - 90.0, rect.top() + 28.0);
    for (row, (label, color)) in handle.legend.iter().enumerate() {
        let y = legend_origin.y + row as f32 * LEGEND_ROW_HEIGHT;
        painter.circle_filled(egui::pos2(legend_origin.x, y), 5.0, *color);
        painter.text(
            egui::pos2(legend_origin.x + 10.0, y),
            egui::Align2::LEFT_CENTER,
            *label,
            egui::FontId::proportional(12.0),
            text_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use windrose_core::parse_dataset;

    use super::*;

    fn sample_chart() -> Chart {
        let dataset = parse_dataset(
            r#"{"windrose":[{"date":"2024-01-01","time":"00:00","data":[{"speed_kph":10,"direction":"N"},{"speed_kph":5,"direction":"E"},{"speed_kph":0,"direction":"S"},{"speed_kph":20,"direction":"W"},{"speed_kph":15,"direction":"NE"}]}]}"#,
        )
        .expect("valid");
        Chart::from_record(&dataset.records[0])
    }

    #[test]
    fn render_scales_bars_to_the_outer_ring() {
        let mut renderer = EguiChartRenderer::default();
        let handle = renderer.render(&sample_chart());

        assert_eq!(handle.title(), "Windrose (00:00, 2024-01-01)");
        assert_eq!(handle.ring_max, 20.0);
        let extents: Vec<_> = handle.wedges.iter().map(|w| w.extent).collect();
        assert_eq!(extents, vec![0.5, 0.25, 0.0, 1.0, 0.75]);
        assert_eq!(handle.legend[0], ("~1.5km", egui::Color32::from_rgb(255, 0, 0)));
        assert_eq!(handle.wedges[0].fill.a(), 89);
    }

    #[test]
    fn dispose_balances_render() {
        let mut renderer = EguiChartRenderer::default();
        let first = renderer.render(&sample_chart());
        let second = renderer.render(&sample_chart());
        assert_ne!(first.id(), second.id());
        assert_eq!(renderer.live_handles(), 2);

        renderer.dispose(first);
        renderer.dispose(second);
        assert_eq!(renderer.live_handles(), 0);
    }

    #[test]
    fn polar_to_screen_puts_north_above_center() {
        let center = egui::pos2(100.0, 100.0);
        let north = polar_to_screen(center, 10.0, std::f32::consts::FRAC_PI_2);
        assert!((north.x - 100.0).abs() < 1e-4);
        assert!((north.y - 90.0).abs() < 1e-4);
        let east = polar_to_screen(center, 10.0, 0.0);
        assert_eq!(east, egui::pos2(110.0, 100.0));
    }

    #[test]
    fn wedge_points_start_at_center() {
        let points = wedge_points(egui::pos2(0.0, 0.0), 5.0, 0.0, 0.4);
        assert_eq!(points.len(), ARC_SEGMENTS + 2);
        assert_eq!(points[0], egui::pos2(0.0, 0.0));
    }
}
