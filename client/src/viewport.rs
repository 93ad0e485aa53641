use glam::{Vec2, vec2};

/// Maps the fixed logical surface onto the window with a uniform scale,
/// centering it and leaving bars on the spare axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset: Vec2,
}

impl Viewport {
    pub fn fit(screen: Vec2, surface: Vec2) -> Self {
        let scale = (screen.x / surface.x).min(screen.y / surface.y);
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };

        Self {
            scale,
            offset: (screen - surface * scale) / 2.0,
        }
    }

    pub fn to_screen(&self, logical: Vec2) -> Vec2 {
        self.offset + logical * self.scale
    }

    pub fn to_logical(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.scale
    }

    pub fn scaled(&self, logical: f32) -> f32 {
        logical * self.scale
    }

    /// Screen-space `(x, y, w, h)` for a logical rectangle.
    pub fn rect(&self, x: f32, y: f32, w: f32, h: f32) -> (f32, f32, f32, f32) {
        let corner = self.to_screen(vec2(x, y));
        (corner.x, corner.y, self.scaled(w), self.scaled(h))
    }
}
