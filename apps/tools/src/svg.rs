//! SVG export of windrose charts through plotters.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use windrose_core::{
    chart::{compass_ticks, nice_ceiling},
    Chart, BAR_ALPHA,
};

const GRID_RINGS: i32 = 4;
const ARC_SEGMENTS: usize = 12;
const GRID: RGBColor = RGBColor(190, 190, 190);

pub fn write_chart_svg(chart: &Chart, path: &Path, size: u32) -> Result<()> {
    let root = SVGBackend::new(path, (size, size)).into_drawing_area();
    draw_windrose(&root, chart, size)?;
    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn text_style(size: f64, pos: Pos) -> TextStyle<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
        .color(&BLACK)
        .pos(pos)
}

fn polar(center: (i32, i32), radius: f64, angle: f64) -> (i32, i32) {
    (
        center.0 + (radius * angle.cos()).round() as i32,
        center.1 - (radius * angle.sin()).round() as i32,
    )
}

fn draw_windrose<DB>(root: &DrawingArea<DB, Shift>, chart: &Chart, size: u32) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let size = size as i32;
    let center = (size / 2, size / 2 + 12);
    let radius = f64::from(size) * 0.36;
    let ring_max = nice_ceiling(chart.max_radius());

    root.draw(&Text::new(
        chart.title.clone(),
        (size / 2, 12),
        text_style(20.0, Pos::new(HPos::Center, VPos::Top)),
    ))?;

    for ring in 1..=GRID_RINGS {
        let ring_radius = radius * f64::from(ring) / f64::from(GRID_RINGS);
        root.draw(&Circle::new(center, ring_radius.round() as i32, GRID.stroke_width(1)))?;
        let label = ring_max * f64::from(ring) / f64::from(GRID_RINGS);
        root.draw(&Text::new(
            format!("{label}"),
            polar(center, ring_radius, 0.4),
            text_style(10.0, Pos::new(HPos::Left, VPos::Bottom)),
        ))?;
    }

    for (angle, code) in compass_ticks() {
        root.draw(&PathElement::new(
            vec![center, polar(center, radius, angle)],
            GRID.stroke_width(1),
        ))?;
        root.draw(&Text::new(
            code,
            polar(center, radius + 16.0, angle),
            text_style(13.0, Pos::new(HPos::Center, VPos::Center)),
        ))?;
    }

    for bar in &chart.bars {
        let extent = radius * (bar.radius / ring_max).clamp(0.0, 1.0);
        if extent <= 0.0 {
            continue;
        }
        let start = bar.angle - bar.width / 2.0;
        let mut outline = vec![center];
        outline.extend((0..=ARC_SEGMENTS).map(|step| {
            let t = step as f64 / ARC_SEGMENTS as f64;
            polar(center, extent, start + bar.width * t)
        }));

        let (r, g, b) = bar.color.rgb();
        let color = RGBColor(r, g, b);
        root.draw(&Polygon::new(
            outline.clone(),
            color.mix(f64::from(BAR_ALPHA)).filled(),
        ))?;
        outline.push(center);
        root.draw(&PathElement::new(outline, color.stroke_width(1)))?;
    }

    let legend_x = size - 110;
    for (row, (label, color)) in chart.legend().enumerate() {
        let y = 48 + row as i32 * 20;
        let (r, g, b) = color.rgb();
        root.draw(&Circle::new((legend_x, y), 5, RGBColor(r, g, b).filled()))?;
        root.draw(&Text::new(
            label,
            (legend_x + 12, y),
            text_style(13.0, Pos::new(HPos::Left, VPos::Center)),
        ))?;
    }

    Ok(())
}
