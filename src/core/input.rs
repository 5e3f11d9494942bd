use glam::Vec2;

/// Section index for a scroll offset: one viewport height per section.
#[inline]
pub fn section_for_scroll(scroll_y: f64, viewport_height: u32, section_count: usize) -> usize {
    if section_count == 0 {
        return 0;
    }
    let h = viewport_height.max(1) as f64;
    let raw = (scroll_y.max(0.0) / h).floor();
    if !raw.is_finite() {
        return section_count - 1;
    }
    (raw as usize).min(section_count - 1)
}

/// Tracks the latest scroll offset and the section it falls in.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    offset: f64,
    section: usize,
}

impl ScrollTracker {
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn section(&self) -> usize {
        self.section
    }

    /// Record a new offset. Returns the new section index when it changed.
    pub fn update(
        &mut self,
        scroll_y: f64,
        viewport_height: u32,
        section_count: usize,
    ) -> Option<usize> {
        self.offset = if scroll_y.is_finite() {
            scroll_y.max(0.0)
        } else {
            0.0
        };
        let next = section_for_scroll(self.offset, viewport_height, section_count);
        if next != self.section {
            self.section = next;
            Some(next)
        } else {
            None
        }
    }
}

/// Pointer position mapped to [-0.5, 0.5] around the viewport center.
///
/// Not clamped: a pointer outside the window may produce values past the edges.
#[inline]
pub fn cursor_offset(pointer_x: f32, pointer_y: f32, width: u32, height: u32) -> Vec2 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Vec2::new(pointer_x / w - 0.5, pointer_y / h - 0.5)
}
