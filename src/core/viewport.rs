use super::constants::MAX_PIXEL_RATIO;

/// Window dimensions in CSS pixels plus the device pixel ratio.
///
/// Dimensions are floored to 1 so aspect ratios and scroll-to-section math
/// never divide by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1, 1, 1.0)
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            device_pixel_ratio: sanitize_dpr(device_pixel_ratio),
        }
    }

    /// Apply a resize notification. Returns true when anything changed.
    pub fn resize(&mut self, width: u32, height: u32, device_pixel_ratio: f64) -> bool {
        let next = Self::new(width, height, device_pixel_ratio);
        let changed = next != *self;
        *self = next;
        changed
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Renderer pixel density, capped to bound fill cost on dense displays.
    #[inline]
    pub fn pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
    }

    /// Backing-store size of the canvas in physical pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        let pr = self.pixel_ratio();
        let w = (self.width as f64 * pr).floor() as u32;
        let h = (self.height as f64 * pr).floor() as u32;
        (w.max(1), h.max(1))
    }
}

fn sanitize_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}
