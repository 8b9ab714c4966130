//! Per-minute gold and experience chart for one player in one match, rendered to PNG in memory.

use std::io::Cursor;
use std::sync::OnceLock;

use opendota_client::MatchPlayer;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use thiserror::Error;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 480;
/// Experience is divided by this so both lines share one y axis.
const XP_SCALE: f64 = 100.0;
const GOLD_COLOR: RGBColor = RGBColor(255, 191, 0);

/// Every text element is drawn with this family; DejaVu Sans covers the Cyrillic labels.
const FONT_FAMILY: &str = "sans-serif";
const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

static FONT: OnceLock<Result<(), String>> = OnceLock::new();

/// plotters keeps fonts in a process-wide registry; the bundled face is added on first use.
fn ensure_font() -> Result<(), ChartError> {
    FONT.get_or_init(|| {
        register_font(FONT_FAMILY, FontStyle::Normal, FONT_DATA)
            .map_err(|_| "bundled font is not a valid TrueType face".to_string())
    })
    .clone()
    .map_err(ChartError::Font)
}

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Nothing to plot")]
    EmptySeries,
    #[error("Font unavailable: {0}")]
    Font(String),
    #[error("Drawing failed: {0}")]
    Draw(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub minute: u32,
    pub gold: f64,
    /// Experience divided by 100.
    pub xp_scaled: f64,
}

/// Gold and scaled experience keyed by minute offset from the match start.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldXpSeries {
    points: Vec<SeriesPoint>,
}

impl GoldXpSeries {
    /// Pairs the two series by minute. If their lengths differ the extra tail is dropped.
    pub fn new(gold: &[i64], xp: &[i64]) -> Self {
        let points = gold
            .iter()
            .zip(xp)
            .enumerate()
            .map(|(minute, (gold, xp))| SeriesPoint {
                minute: minute as u32,
                gold: *gold as f64,
                xp_scaled: *xp as f64 / XP_SCALE,
            })
            .collect();
        Self { points }
    }

    /// Requires both `gold_t` and `xp_t`; matches that were never parsed have neither.
    pub fn from_player(player: &MatchPlayer) -> Option<Self> {
        match (&player.gold_t, &player.xp_t) {
            (Some(gold), Some(xp)) => Some(Self::new(gold, xp)),
            _ => None,
        }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn y_range(&self) -> (f64, f64) {
        let values = self.points.iter().flat_map(|p| [p.gold, p.xp_scaled]);
        let (min, max) = values.fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if max > min {
            (min, max * 1.05)
        } else {
            (min, min + 1.0)
        }
    }
}

/// A rendered chart ready to be sent as a photo.
#[derive(Debug, Clone)]
pub struct GoldXpChart {
    pub match_id: u64,
    pub series: GoldXpSeries,
    pub png: Vec<u8>,
}

impl GoldXpChart {
    pub fn caption(&self) -> String {
        format!("📊 График Gold/XP для матча {}", self.match_id)
    }
}

/// Draws both lines on a shared minute axis and encodes the frame as PNG.
pub fn render_png(match_id: u64, series: &GoldXpSeries) -> Result<Vec<u8>, ChartError> {
    if series.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    ensure_font()?;

    let mut frame = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    draw(&mut frame, match_id, series).map_err(|e| ChartError::Draw(e.to_string()))?;

    let image = image::RgbImage::from_raw(WIDTH, HEIGHT, frame)
        .ok_or_else(|| ChartError::Draw("frame buffer size mismatch".to_string()))?;
    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
    Ok(png)
}

fn draw(
    frame: &mut [u8],
    match_id: u64,
    series: &GoldXpSeries,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::with_buffer(frame, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = series.len().saturating_sub(1).max(1) as f64;
    let (y_min, y_max) = series.y_range();

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Gold и XP по минутам - Матч {}", match_id),
            (FONT_FAMILY, 22).into_font(),
        )
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(56)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Минуты")
        .y_desc("Значения")
        .label_style((FONT_FAMILY, 13))
        .axis_desc_style((FONT_FAMILY, 15))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            series.points().iter().map(|p| (p.minute as f64, p.gold)),
            GOLD_COLOR.stroke_width(2),
        ))?
        .label("Gold")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GOLD_COLOR.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            series.points().iter().map(|p| (p.minute as f64, p.xp_scaled)),
            BLUE.stroke_width(2),
        ))?
        .label("XP (divided by 100)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .configure_series_labels()
        .label_font((FONT_FAMILY, 14))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
