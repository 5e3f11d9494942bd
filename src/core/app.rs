use super::camera::{camera_y_for_scroll, parallax_target, Camera, CameraRig};
use super::color::Color;
use super::constants::{KICK_DELTA, KICK_DURATION_SEC};
use super::input::{cursor_offset, ScrollTracker};
use super::scene::{SceneContent, SceneParams};
use super::tween::{Easing, KickSet, RotationKick};
use super::viewport::Viewport;
use glam::{Mat4, Vec2, Vec3};

/// Monotonic frame clock fed with elapsed seconds since loop start.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    previous: f32,
}

impl FrameClock {
    /// Delta since the previous call; a clock running backwards yields 0.
    pub fn advance(&mut self, elapsed_sec: f32) -> f32 {
        let dt = (elapsed_sec - self.previous).max(0.0);
        self.previous = elapsed_sec.max(self.previous);
        dt
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.previous
    }

    /// Jump to `elapsed_sec` without producing a delta for the gap.
    pub fn rebase(&mut self, elapsed_sec: f32) {
        self.previous = elapsed_sec;
    }
}

/// Everything the page mutates: owned by the frame loop, written by event
/// handlers through the setters below.
pub struct SceneState {
    pub params: SceneParams,
    pub viewport: Viewport,
    pub scroll: ScrollTracker,
    pub cursor: Vec2,
    pub content: SceneContent,
    pub camera: Camera,
    pub rig: CameraRig,
    kicks: KickSet,
    clock: FrameClock,
    running: bool,
}

impl SceneState {
    pub fn new(params: SceneParams, viewport: Viewport) -> Self {
        let content = SceneContent::new(&params);
        Self {
            camera: Camera::new(viewport.aspect()),
            params,
            viewport,
            scroll: ScrollTracker::default(),
            cursor: Vec2::ZERO,
            content,
            rig: CameraRig::default(),
            kicks: KickSet::default(),
            clock: FrameClock::default(),
            running: true,
        }
    }

    /// Returns true when the viewport changed and the renderer must resize.
    pub fn on_resize(&mut self, width: u32, height: u32, device_pixel_ratio: f64) -> bool {
        let changed = self.viewport.resize(width, height, device_pixel_ratio);
        if changed {
            self.camera.set_aspect(self.viewport.aspect());
        }
        changed
    }

    /// Record a scroll offset. Entering a new section kicks its mesh; the new
    /// section index is returned in that case.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<usize> {
        let entered =
            self.scroll
                .update(scroll_y, self.viewport.height, self.content.sections.len())?;
        self.kicks.push(RotationKick::new(
            entered,
            Vec3::from_array(KICK_DELTA),
            KICK_DURATION_SEC,
            Easing::Power2InOut,
            self.clock.elapsed(),
        ));
        Some(entered)
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.cursor = cursor_offset(
            client_x,
            client_y,
            self.viewport.width,
            self.viewport.height,
        );
    }

    pub fn set_material_color(&mut self, color: Color) {
        self.content.materials.set_color(color);
    }

    /// Advance one frame to `elapsed_sec`. Returns the delta applied, or
    /// `None` once the loop has been stopped.
    pub fn tick(&mut self, elapsed_sec: f32) -> Option<f32> {
        if !self.running {
            return None;
        }
        let dt = self.clock.advance(elapsed_sec);

        for section in &mut self.content.sections {
            section.spin(dt);
        }
        if !self.kicks.is_empty() {
            let sections = &mut self.content.sections;
            self.kicks.advance(self.clock.elapsed(), |i, inc| {
                if let Some(s) = sections.get_mut(i) {
                    s.rotation += inc;
                }
            });
        }

        self.rig.step_toward(parallax_target(self.cursor), dt);
        self.camera.local.y = camera_y_for_scroll(
            self.scroll.offset(),
            self.viewport.height,
            self.params.section_spacing,
        );
        Some(dt)
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Restart a stopped state at `elapsed_sec`. Time spent stopped is
    /// skipped: no spin catch-up, and in-flight kicks pick up where they
    /// paused.
    pub fn resume(&mut self, elapsed_sec: f32) {
        if self.running {
            return;
        }
        let paused_for = elapsed_sec - self.clock.elapsed();
        self.kicks.delay(paused_for);
        self.clock.rebase(elapsed_sec);
        self.running = true;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn active_kicks(&self) -> usize {
        self.kicks.len()
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix(self.rig.offset)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.projection_matrix() * self.view_matrix()
    }

    #[inline]
    pub fn camera_world_position(&self) -> Vec3 {
        self.camera.world_position(self.rig.offset)
    }
}
