use glam::Vec2;

/// Latest pointer, scroll and size readings, written by input handlers and
/// read once per frame by the render loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Pointer offset from the viewport center, each axis in [-0.5, 0.5].
    pub pointer: Vec2,
    /// Scroll position as a fraction of the scrollable range, in [0, 1].
    pub scroll_fraction: f32,
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            pointer: Vec2::ZERO,
            scroll_fraction: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }
}

impl ViewportState {
    pub fn set_pointer_client(&mut self, client_x: f64, client_y: f64) {
        self.pointer = normalize_pointer(client_x, client_y, self.width, self.height);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            (self.width / self.height) as f32
        } else {
            1.0
        }
    }
}

#[inline]
pub fn normalize_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let x = ((client_x - width / 2.0) / width).clamp(-0.5, 0.5);
    let y = ((client_y - height / 2.0) / height).clamp(-0.5, 0.5);
    Vec2::new(x as f32, y as f32)
}

/// `scroll_y / (content_height - viewport_height)`, or 0 when the content
/// does not overflow the viewport.
#[inline]
pub fn scroll_fraction(scroll_y: f64, content_height: f64, viewport_height: f64) -> f32 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0) as f32
}

/// Physical pixels per CSS pixel after applying the density cap.
#[inline]
pub fn capped_pixel_ratio(device_pixel_ratio: f64, cap: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(cap)
    } else {
        1.0
    }
}

/// Backing-store size in physical pixels for a CSS size, never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, pixel_ratio: f64) -> (u32, u32) {
    let w = (css_width * pixel_ratio).max(1.0) as u32;
    let h = (css_height * pixel_ratio).max(1.0) as u32;
    (w, h)
}
