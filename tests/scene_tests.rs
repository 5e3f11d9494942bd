// Host-side tests for scene construction and the per-frame state machine.

mod common;
use common::approx;
use common::core::*;
use glam::Vec3;

fn make_state(width: u32, height: u32) -> SceneState {
    SceneState::new(SceneParams::default(), Viewport::new(width, height, 1.0))
}

#[test]
fn sections_step_down_and_alternate_sides() {
    let sections = build_sections(3, 4.0);
    let pos: Vec<Vec3> = sections.iter().map(|s| s.position).collect();
    assert_eq!(pos[0], Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(pos[1], Vec3::new(-2.0, -4.0, 0.0));
    assert_eq!(pos[2], Vec3::new(2.0, -8.0, 0.0));
    assert_eq!(sections[0].shape.name(), "torus");
    assert_eq!(sections[1].shape.name(), "cone");
    assert_eq!(sections[2].shape.name(), "torus_knot");
}

#[test]
fn particles_fill_the_section_volume() {
    let content = SceneContent::new(&SceneParams::default());
    assert_eq!(content.particles.len(), PARTICLE_COUNT);
    let top = SECTION_SPACING * 0.5;
    let bottom = top - SECTION_SPACING * SECTION_COUNT as f32;
    for p in &content.particles {
        assert!(p[0] >= -5.0 && p[0] < 5.0);
        assert!(p[2] >= -5.0 && p[2] < 5.0);
        assert!(p[1] <= top && p[1] >= bottom, "y out of range: {}", p[1]);
    }
}

#[test]
fn particles_are_reproducible_per_seed() {
    let a = particle_field(50, 10.0, 4.0, 3, 7);
    let b = particle_field(50, 10.0, 4.0, 3, 7);
    let c = particle_field(50, 10.0, 4.0, 3, 8);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn material_color_edit_updates_both_materials() {
    let mut state = make_state(800, 600);
    let default = Color::from_hex(DEFAULT_MATERIAL_COLOR).unwrap();
    assert_eq!(state.content.materials.toon.color, default);
    assert_eq!(state.content.materials.particles.color, default);

    let v = Color::new(0x12, 0xab, 0xef);
    state.set_material_color(v);
    assert_eq!(state.content.materials.toon.color, v);
    assert_eq!(state.content.materials.particles.color, v);
    assert_eq!(state.content.materials.revision(), 1);
}

#[test]
fn scroll_to_third_section_moves_camera_down_two_sections() {
    let mut state = make_state(1000, 800);
    assert_eq!(state.on_scroll(1600.0), Some(2));
    assert_eq!(state.scroll.section(), 2);
    state.tick(0.016);
    assert_eq!(state.camera.local.y, -8.0);
}

#[test]
fn pointer_sets_parallax_target() {
    let mut state = make_state(800, 600);
    state.on_pointer_move(500.0, 400.0);
    assert!(approx(state.cursor.x, 0.125));
    assert!(approx(state.cursor.y, 0.166_666_7));
    let t = parallax_target(state.cursor);
    assert!(approx(t.x, 0.0625));
    assert!(approx(t.y, -0.083_333_3));
}

#[test]
fn tick_spins_every_section_by_elapsed_delta() {
    let mut state = make_state(800, 600);
    assert_eq!(state.tick(0.5), Some(0.5));
    assert_eq!(state.tick(0.75), Some(0.25));
    for s in &state.content.sections {
        assert!(approx(s.rotation.x, 0.075));
        assert!(approx(s.rotation.y, 0.09));
        assert_eq!(s.rotation.z, 0.0);
    }
}

#[test]
fn tick_with_clock_going_backwards_is_a_zero_step() {
    let mut state = make_state(800, 600);
    state.tick(1.0);
    assert_eq!(state.tick(0.5), Some(0.0));
    assert_eq!(state.tick(1.25), Some(0.25));
}

#[test]
fn section_kick_adds_on_top_of_continuous_spin() {
    let mut state = make_state(800, 600);
    state.tick(1.0);
    assert_eq!(state.on_scroll(900.0), Some(1));
    assert_eq!(state.active_kicks(), 1);

    let mut t = 1.0;
    while t < 3.0 {
        t += 0.02;
        state.tick(t);
    }
    assert_eq!(state.active_kicks(), 0);

    let spun = |rate: f32| t * rate;
    let kicked = &state.content.sections[1];
    assert!((kicked.rotation.x - (spun(SPIN_RATE_X) + KICK_DELTA[0])).abs() < 1e-3);
    assert!((kicked.rotation.y - (spun(SPIN_RATE_Y) + KICK_DELTA[1])).abs() < 1e-3);
    assert!((kicked.rotation.z - KICK_DELTA[2]).abs() < 1e-3);

    let untouched = &state.content.sections[0];
    assert!((untouched.rotation.x - spun(SPIN_RATE_X)).abs() < 1e-3);
    assert_eq!(untouched.rotation.z, 0.0);
}

#[test]
fn scrolling_within_a_section_does_not_kick() {
    let mut state = make_state(800, 600);
    state.on_scroll(100.0);
    state.on_scroll(300.0);
    state.on_scroll(599.0);
    assert_eq!(state.active_kicks(), 0);
    state.on_scroll(600.0);
    assert_eq!(state.active_kicks(), 1);
}

#[test]
fn rig_follows_cursor_during_ticks() {
    let mut state = make_state(800, 600);
    state.on_pointer_move(800.0, 0.0);
    let target = parallax_target(state.cursor);
    let mut t = 0.0;
    for _ in 0..600 {
        t += 1.0 / 60.0;
        state.tick(t);
    }
    assert!((state.rig.offset - target).length() < 1e-3);
    let eye = state.camera_world_position();
    assert!(approx(eye.x, state.rig.offset.x));
}

#[test]
fn resize_updates_camera_aspect_and_section_math() {
    let mut state = make_state(800, 600);
    assert!(state.on_resize(1200, 400, 3.0));
    assert!(approx(state.camera.aspect, 3.0));
    assert_eq!(state.viewport.pixel_ratio(), 2.0);
    assert_eq!(state.on_scroll(500.0), Some(1));
    assert!(!state.on_resize(1200, 400, 3.0));
}

#[test]
fn stopped_state_ignores_ticks() {
    let mut state = make_state(800, 600);
    state.tick(1.0);
    let before: Vec<Vec3> = state.content.sections.iter().map(|s| s.rotation).collect();
    state.stop();
    assert!(!state.is_running());
    assert_eq!(state.tick(2.0), None);
    let after: Vec<Vec3> = state.content.sections.iter().map(|s| s.rotation).collect();
    assert_eq!(before, after);
}

#[test]
fn view_proj_puts_first_mesh_in_front_of_camera() {
    let mut state = make_state(800, 600);
    state.tick(0.0);
    let clip = state.view_proj() * Vec3::new(0.0, 0.0, 0.0).extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(clip.w > 0.0);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
    assert!(approx(ndc.x, 0.0) && approx(ndc.y, 0.0));
}

#[test]
fn resume_restarts_ticks_without_catching_up_the_pause() {
    let mut state = make_state(800, 600);
    state.tick(1.0);
    state.stop();
    assert_eq!(state.tick(5.0), None);

    state.resume(10.0);
    assert!(state.is_running());
    assert_eq!(state.tick(10.5), Some(0.5));
    let spun = state.content.sections[0].rotation;
    assert!(approx(spun.x, 1.5 * SPIN_RATE_X));
    assert!(approx(spun.y, 1.5 * SPIN_RATE_Y));
}

#[test]
fn resume_on_running_state_is_a_no_op() {
    let mut state = make_state(800, 600);
    state.tick(1.0);
    state.resume(50.0);
    assert_eq!(state.tick(1.5), Some(0.5));
}

#[test]
fn kick_paused_mid_flight_finishes_after_resume() {
    let mut state = make_state(800, 600);
    state.tick(1.0);
    assert_eq!(state.on_scroll(900.0), Some(1));
    state.tick(1.75);
    let halfway = state.content.sections[1].rotation.z;
    assert!((halfway - KICK_DELTA[2] * 0.5).abs() < 1e-3);

    state.stop();
    state.resume(100.0);
    state.tick(100.0);
    assert_eq!(state.active_kicks(), 1);
    assert!((state.content.sections[1].rotation.z - halfway).abs() < 1e-3);

    state.tick(100.75);
    assert_eq!(state.active_kicks(), 0);
    assert!((state.content.sections[1].rotation.z - KICK_DELTA[2]).abs() < 1e-3);
}
