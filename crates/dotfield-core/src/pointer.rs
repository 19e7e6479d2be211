use glam::Vec2;

/// Host viewport in CSS/logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width.max(1.0) / self.height.max(1.0)
    }

    /// Raw pixel position (y down) to unit space (v up). Not clamped.
    #[inline]
    pub fn to_unit(&self, raw_x: f32, raw_y: f32) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new(raw_x / w, 1.0 - raw_y / h)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    /// Maps a DOM `pointerType`; anything unrecognised is treated as a mouse.
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Mouse,
        }
    }
}

/// Pointer position plus the number of active touch contacts.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Vec2,
    touch_count: u32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: Vec2::splat(0.5),
            touch_count: 0,
        }
    }
}

impl PointerState {
    pub fn on_move(&mut self, viewport: &Viewport, raw_x: f32, raw_y: f32) {
        self.pos = viewport.to_unit(raw_x, raw_y);
    }

    pub fn on_down(&mut self, kind: PointerKind) {
        if kind == PointerKind::Touch {
            self.touch_count = self.touch_count.saturating_add(1);
        }
    }

    /// Also used for `pointercancel`.
    pub fn on_up(&mut self, kind: PointerKind) {
        if kind == PointerKind::Touch {
            self.touch_count = self.touch_count.saturating_sub(1);
        }
    }

    #[inline]
    pub fn touch_count(&self) -> u32 {
        self.touch_count
    }

    #[inline]
    pub fn touch_active(&self) -> bool {
        self.touch_count > 0
    }
}
