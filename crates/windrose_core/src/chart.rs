//! Renderer-independent description of one windrose chart.

use crate::{
    dataset::{AltitudeBand, WindroseDataset, WindroseRecord, ALTITUDE_BANDS, MEASUREMENTS_PER_RECORD},
    direction::{CompassPoint, COMPASS_POINTS, SECTOR_WIDTH},
};

/// Opacity applied to every bar fill.
pub const BAR_ALPHA: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartColor {
    Red,
    Green,
    Blue,
    Orange,
    Purple,
}

/// Bar colors, one per altitude band.
pub const PALETTE: [ChartColor; MEASUREMENTS_PER_RECORD] = [
    ChartColor::Red,
    ChartColor::Green,
    ChartColor::Blue,
    ChartColor::Orange,
    ChartColor::Purple,
];

impl ChartColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ChartColor::Red => (255, 0, 0),
            ChartColor::Green => (0, 128, 0),
            ChartColor::Blue => (0, 0, 255),
            ChartColor::Orange => (255, 165, 0),
            ChartColor::Purple => (128, 0, 128),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub band: AltitudeBand,
    pub direction: CompassPoint,
    /// Center of the bar in radians, counter-clockwise from East.
    pub angle: f64,
    pub width: f64,
    pub radius: f64,
    pub color: ChartColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub bars: [Bar; MEASUREMENTS_PER_RECORD],
}

impl Chart {
    pub fn from_record(record: &WindroseRecord) -> Self {
        let bars = std::array::from_fn(|slot| {
            let measurement = record.data[slot];
            Bar {
                band: ALTITUDE_BANDS[slot],
                direction: measurement.direction,
                angle: measurement.direction.angle(),
                width: SECTOR_WIDTH,
                radius: measurement.speed_kph,
                color: PALETTE[slot],
            }
        });

        Self {
            title: format!("Windrose ({}, {})", record.time, record.date),
            bars,
        }
    }

    /// Legend entries in band order.
    pub fn legend(&self) -> impl Iterator<Item = (&'static str, ChartColor)> + '_ {
        self.bars.iter().map(|bar| (bar.band.label(), bar.color))
    }

    /// Largest bar radius, used to scale the radial axis. Never below 1.0 so
    /// an all-calm record still gets a visible grid.
    pub fn max_radius(&self) -> f64 {
        self.bars
            .iter()
            .map(|bar| bar.radius)
            .fold(1.0_f64, f64::max)
    }
}

/// Angular tick positions and labels, one per compass point.
pub fn compass_ticks() -> impl Iterator<Item = (f64, &'static str)> {
    COMPASS_POINTS.iter().map(|point| (point.angle(), point.code()))
}

pub fn build_charts(dataset: &WindroseDataset) -> Vec<Chart> {
    dataset.records.iter().map(Chart::from_record).collect()
}

/// Round number used for the outer grid ring.
pub fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(|factor| factor * magnitude)
        .find(|candidate| *candidate >= value)
        .unwrap_or(10.0 * magnitude)
}
