use std::f64::consts::FRAC_PI_2;

use super::surface::{Glow, Point, Rect, Rgba, Stroke, Surface};

pub const EMERALD: Rgba = Rgba::rgb(16, 185, 129);

#[derive(Debug, Clone, PartialEq)]
pub struct WaveConfig {
    pub count: usize,
    pub base_amplitude: f64,
    pub amplitude_step: f64,
    pub base_frequency: f64,
    pub frequency_step: f64,
    pub time_scale: f64,
    pub phase_step: f64,
    /// Horizontal distance between sampled points, in pixels.
    pub sample_step: f64,
    pub base_opacity: f64,
    pub opacity_step: f64,
    pub line_width: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            count: 3,
            base_amplitude: 25.0,
            amplitude_step: 10.0,
            base_frequency: 0.005,
            frequency_step: 0.002,
            time_scale: 0.02,
            phase_step: FRAC_PI_2,
            sample_step: 20.0,
            base_opacity: 0.12,
            opacity_step: 0.04,
            line_width: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlowConfig {
    pub count: usize,
    pub drift_x: f64,
    pub drift_y: f64,
    pub center_opacity: f64,
    /// Gradient radius as a multiple of the pulsing base radius.
    pub spread: f64,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            count: 4,
            drift_x: 40.0,
            drift_y: 60.0,
            center_opacity: 0.3,
            spread: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorConfig {
    pub count: usize,
    pub opacity: f64,
    pub line_width: f64,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            count: 20,
            opacity: 0.08,
            line_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub color: Rgba,
    pub waves: WaveConfig,
    pub glows: GlowConfig,
    pub connectors: ConnectorConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            color: EMERALD,
            waves: WaveConfig::default(),
            glows: GlowConfig::default(),
            connectors: ConnectorConfig::default(),
        }
    }
}

/// The decorative scene. Every position is a closed-form function of the
/// frame counter, so drawing a frame holds no state of its own.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    config: SceneConfig,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    pub fn draw(&self, surface: &mut impl Surface, time: u64) {
        surface.clear();
        let t = time as f64;
        self.draw_waves(surface, t);
        self.draw_glows(surface, t);
        self.draw_connectors(surface, t);
    }

    pub fn wave_opacity(&self, index: usize) -> f64 {
        let w = &self.config.waves;
        (w.base_opacity - index as f64 * w.opacity_step).max(0.0)
    }

    fn draw_waves(&self, surface: &mut impl Surface, t: f64) {
        let w = &self.config.waves;
        if w.count == 0 || w.sample_step <= 0.0 {
            return;
        }
        let size = surface.size();
        let mut points = Vec::new();
        for i in 0..w.count {
            let fi = i as f64;
            let amplitude = w.base_amplitude + fi * w.amplitude_step;
            let frequency = w.base_frequency + fi * w.frequency_step;
            let offset = size.height / w.count as f64 * fi;
            let phase = t * w.time_scale + fi * w.phase_step;

            points.clear();
            let mut x = 0.0;
            while x <= size.width {
                points.push(Point::new(x, offset + amplitude * (x * frequency + phase).sin()));
                x += w.sample_step;
            }
            let stroke = Stroke {
                color: self.config.color.with_alpha(self.wave_opacity(i)),
                width: w.line_width,
            };
            surface.stroke_path(&points, stroke);
        }
    }

    pub fn glow(&self, index: usize, width: f64, height: f64, t: f64) -> Glow {
        let g = &self.config.glows;
        let fi = index as f64;
        let center = Point::new(
            width / g.count as f64 * fi + (t * 0.005 + fi).sin() * g.drift_x,
            height / 2.0 + (t * 0.003 + fi * 2.0).cos() * g.drift_y,
        );
        let base = (2.0 + (t * 0.01 + fi).sin()).max(0.0);
        let radius = base * g.spread;
        // fill square of side 8r/3 starting at (x - r, y - 4r/3), so the
        // gradient always reaches transparent inside it
        Glow {
            center,
            radius,
            color: self.config.color.with_alpha(g.center_opacity),
            bounds: Rect {
                x: center.x - radius,
                y: center.y - radius * 4.0 / 3.0,
                width: radius * 8.0 / 3.0,
                height: radius * 8.0 / 3.0,
            },
        }
    }

    fn draw_glows(&self, surface: &mut impl Surface, t: f64) {
        let size = surface.size();
        for i in 0..self.config.glows.count {
            let glow = self.glow(i, size.width, size.height, t);
            surface.fill_glow(&glow);
        }
    }

    fn draw_connectors(&self, surface: &mut impl Surface, t: f64) {
        let c = &self.config.connectors;
        let size = surface.size();
        let stroke = Stroke {
            color: self.config.color.with_alpha(c.opacity),
            width: c.line_width,
        };
        for i in 0..c.count {
            let fi = i as f64;
            let start = Point::new(
                size.width / c.count as f64 * fi + (t * 0.002).sin() * 30.0,
                (t * 0.002 + fi).cos() * 50.0,
            );
            let end = Point::new(
                start.x + (t * 0.003 + fi).sin() * 100.0,
                size.height + (t * 0.001 + fi * 2.0).cos() * 50.0,
            );
            surface.stroke_line(start, end, stroke);
        }
    }
}
