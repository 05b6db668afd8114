//! Draws the offside line and offside markers over the source image

use crate::detection::VisualizationConfig;
use crate::offside::AnalysisResult;
use crate::utils::ImageUtils;
use image::{Rgb, RgbImage};
use offside_core::{Point, Team};

const OFFSIDE_MARK: Rgb<u8> = Rgb([255, 255, 0]);
const BALL_MARK: Rgb<u8> = Rgb([0, 0, 0]);
const PLAYER_RING_RADIUS: i64 = 5;
const BALL_DOT_RADIUS: i64 = 3;

pub struct OverlayRenderer {
    config: VisualizationConfig,
}

impl OverlayRenderer {
    pub fn new(config: VisualizationConfig) -> Self {
        Self { config }
    }

    /// Render a copy of `base` annotated with `result`.
    pub fn render(&self, base: &RgbImage, result: &AnalysisResult) -> RgbImage {
        let mut output = base.clone();

        if self.config.draw_players {
            for p in &result.red_team {
                self.draw_ring(&mut output, p, team_colour(Team::Red));
            }
            for p in &result.blue_team {
                self.draw_ring(&mut output, p, team_colour(Team::Blue));
            }
            self.draw_dot(&mut output, &result.ball, BALL_MARK);
        }

        let line = result.offside_line;
        self.draw_dashed_line(&mut output, line.x, team_colour(line.defending));

        for p in &result.offside_players {
            self.draw_cross(&mut output, p);
        }

        output
    }

    /// Vertical dashed line across the full image height
    fn draw_dashed_line(&self, image: &mut RgbImage, x: i32, colour: Rgb<u8>) {
        let width = i64::from(self.config.line_width.max(1));
        let dash = u64::from(self.config.dash_length.max(1));
        let left = i64::from(x) - width / 2;

        for y in 0..image.height() {
            if (u64::from(y) / dash) % 2 == 1 {
                continue;
            }
            for px in left..left + width {
                ImageUtils::blend_pixel(image, px, i64::from(y), colour, self.config.line_alpha);
            }
        }
    }

    fn draw_cross(&self, image: &mut RgbImage, p: &Point) {
        let half = i64::from(self.config.marker_half_size);
        let (cx, cy) = (i64::from(p.x), i64::from(p.y));
        for t in -half..=half {
            self.stamp(image, cx + t, cy + t, OFFSIDE_MARK);
            self.stamp(image, cx + t, cy - t, OFFSIDE_MARK);
        }
    }

    fn draw_ring(&self, image: &mut RgbImage, p: &Point, colour: Rgb<u8>) {
        let (cx, cy) = (i64::from(p.x), i64::from(p.y));
        let r = PLAYER_RING_RADIUS;
        for dy in -r - 1..=r + 1 {
            for dx in -r - 1..=r + 1 {
                let d = ((dx * dx + dy * dy) as f64).sqrt();
                if (d - r as f64).abs() <= 1.0 {
                    ImageUtils::blend_pixel(image, cx + dx, cy + dy, colour, 1.0);
                }
            }
        }
    }

    fn draw_dot(&self, image: &mut RgbImage, p: &Point, colour: Rgb<u8>) {
        let (cx, cy) = (i64::from(p.x), i64::from(p.y));
        let r = BALL_DOT_RADIUS;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    ImageUtils::blend_pixel(image, cx + dx, cy + dy, colour, 1.0);
                }
            }
        }
    }

    /// Square brush of side `marker_thickness` centred on (x, y)
    fn stamp(&self, image: &mut RgbImage, x: i64, y: i64, colour: Rgb<u8>) {
        let thickness = i64::from(self.config.marker_thickness.max(1));
        let start = -(thickness / 2);
        for dy in start..start + thickness {
            for dx in start..start + thickness {
                ImageUtils::blend_pixel(image, x + dx, y + dy, colour, 1.0);
            }
        }
    }
}

impl Default for OverlayRenderer {
    fn default() -> Self {
        Self::new(VisualizationConfig::default())
    }
}

fn team_colour(team: Team) -> Rgb<u8> {
    let (r, g, b) = team.rgb();
    Rgb([r, g, b])
}
