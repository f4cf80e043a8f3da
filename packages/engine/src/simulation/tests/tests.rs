use super::*;
use crate::core::Vec2;

const FRAME: f32 = 1.0 / 60.0;

fn world_800x600() -> IconWorldCore {
    IconWorldCore::new(800.0, 600.0)
}

fn assert_in_bounds(world: &IconWorldCore) {
    let surface = world.surface();
    let floor_y = surface.floor_y(world.settings().floor_offset);
    for (i, b) in world.bodies().iter().enumerate() {
        assert!(b.pos.x >= b.radius - 1e-3, "body {i} left of wall: {:?}", b.pos);
        assert!(b.pos.x <= surface.width - b.radius + 1e-3, "body {i} right of wall: {:?}", b.pos);
        assert!(b.pos.y >= b.radius - 1e-3, "body {i} above ceiling: {:?}", b.pos);
        assert!(b.pos.y <= floor_y - b.radius + 1e-3, "body {i} below floor: {:?}", b.pos);
    }
}

#[test]
fn falling_body_bounces_off_floor() {
    let mut world = world_800x600();
    world.add_body(IconBody::new(400.0, 200.0, 40.0));
    let floor_contact = 600.0 - 70.0 - 40.0;

    let mut bounced = false;
    for _ in 0..60 {
        let falling = world.body(0).unwrap().velocity.y > 0.0;
        world.step(FRAME);
        let b = world.body(0).unwrap();
        if falling && b.pos.y == floor_contact {
            assert!(b.velocity.y < 0.0, "post-bounce vy should point up, got {}", b.velocity.y);
            bounced = true;
            break;
        }
    }

    assert!(bounced, "body never reached the floor within one second");
}

#[test]
fn bodies_stay_inside_surface_under_crowding() {
    let mut world = world_800x600();
    world.spawn_icons(&[80.0; 13], 42);

    for i in 0..240 {
        world.step(FRAME);
        if i % 40 == 0 {
            world.on_pointer_move(100.0 + i as f32, 400.0, i as f64 * 16.0);
        }
        assert_in_bounds(&world);
    }
}

#[test]
fn overlapping_pair_is_pushed_apart_evenly() {
    let mut world = IconWorldCore::with_settings(
        800.0,
        600.0,
        PhysicsSettings { gravity: 0.0, ..PhysicsSettings::default() },
    );
    world.add_body(IconBody::new(365.0, 300.0, 40.0));
    world.add_body(IconBody::new(435.0, 300.0, 40.0));

    world.step(FRAME);

    let a = world.body(0).unwrap().pos;
    let b = world.body(1).unwrap().pos;
    assert!((b - a).length() >= 80.0 - 1e-3);
    assert!((a.x - 360.0).abs() < 1e-3);
    assert!((b.x - 440.0).abs() < 1e-3);
}

#[test]
fn resting_bodies_fall_asleep_with_zero_velocity() {
    let mut world = world_800x600();
    world.add_body(IconBody::new(200.0, 480.0, 40.0));
    world.add_body(IconBody::new(600.0, 480.0, 40.0).with_angle(3.3, 2.0));

    for _ in 0..180 {
        world.step(FRAME);
    }

    assert_eq!(world.sleeping_count(), 2);
    for b in world.bodies() {
        assert!(b.sleep.linear && b.sleep.angular);
        assert_eq!(b.velocity, Vec2::zero());
        assert_eq!(b.angular_vel, 0.0);
        assert_eq!(b.angle, b.angle.round());
    }
}

#[test]
fn resize_twice_is_idempotent_on_positions_and_radii() {
    let mut world = world_800x600();
    world.spawn_icons(&[80.0, 64.0, 96.0], 7);
    let layout = (640.0, 480.0, vec![72.0, 64.0, 0.0]);

    world.on_resize(&layout);
    let first: Vec<_> = world.bodies().iter().map(|b| (b.pos, b.radius)).collect();
    world.on_resize(&layout);
    let second: Vec<_> = world.bodies().iter().map(|b| (b.pos, b.radius)).collect();

    assert_eq!(first, second);
    assert_eq!(world.surface(), Surface::new(640.0, 480.0));
    assert_eq!(world.body(2).unwrap().radius, 40.0);
}

#[test]
fn drag_round_trip_without_motion_throws_nothing() {
    let mut world = world_800x600();
    world.add_body(IconBody::new(400.0, 300.0, 40.0));

    assert!(world.on_drag_start(0, 400.0, 300.0, 1000.0));
    world.on_drag_end(0);

    let b = world.body(0).unwrap();
    assert!(!b.dragging);
    assert_eq!(b.velocity, Vec2::zero());
}

#[test]
fn held_body_is_not_integrated_or_rendered_by_step() {
    let mut world = world_800x600();
    world.add_body(IconBody::new(400.0, 200.0, 40.0));
    world.on_drag_start(0, 400.0, 200.0, 0.0);
    let before = world.transforms().to_vec();

    for _ in 0..10 {
        world.step(FRAME);
    }

    assert_eq!(world.body(0).unwrap().pos, Vec2::new(400.0, 200.0));
    assert_eq!(world.transforms(), before.as_slice());
}

#[test]
fn thrown_body_keeps_moving_after_release() {
    let mut world = world_800x600();
    world.add_body(IconBody::new(400.0, 300.0, 40.0));

    world.on_drag_start(0, 400.0, 300.0, 0.0);
    world.on_drag_move(0, 420.0, 300.0, 16.0);
    world.on_drag_end(0);
    assert!(world.body(0).unwrap().velocity.x > 1000.0);

    world.step(FRAME);
    assert!(world.body(0).unwrap().pos.x > 420.0);
}

#[test]
fn out_of_range_drag_is_ignored() {
    let mut world = world_800x600();
    assert!(!world.on_drag_start(3, 0.0, 0.0, 0.0));
    world.on_drag_move(3, 10.0, 10.0, 1.0);
    world.on_drag_end(3);
}

#[test]
fn inactive_world_pauses_without_dt_spike() {
    let mut world = world_800x600();
    world.add_body(IconBody::new(400.0, 200.0, 40.0));

    assert!(world.frame_at(0.0));
    world.set_page_visible(false);
    assert!(!world.is_active());
    assert!(!world.frame_at(16.0));
    assert!(!world.frame_at(5000.0));
    assert_eq!(world.body(0).unwrap().pos, Vec2::new(400.0, 200.0));

    world.set_page_visible(true);
    world.enable_perf_metrics(true);
    assert!(world.frame_at(5016.0));
    let dt = world.get_perf_stats().dt();
    assert!((dt - 0.016).abs() < 1e-4, "dt after resume was {dt}");
}

#[test]
fn viewport_and_page_visibility_are_combined() {
    let mut world = world_800x600();
    world.set_in_viewport(false);
    world.set_page_visible(true);
    assert!(!world.is_active());
    world.set_in_viewport(true);
    assert!(world.is_active());
    world.set_active(false);
    assert!(!world.is_active());
}

#[test]
fn long_frames_are_clamped() {
    let mut world = world_800x600();
    world.enable_perf_metrics(true);
    world.add_body(IconBody::new(400.0, 100.0, 40.0));
    world.step(2.5);
    assert_eq!(world.get_perf_stats().dt(), 0.04);
}

#[test]
fn teardown_is_idempotent_and_stops_everything() {
    let mut world = world_800x600();
    world.add_body(IconBody::new(400.0, 200.0, 40.0));
    world.on_drag_start(0, 400.0, 200.0, 0.0);

    world.teardown();
    world.teardown();

    assert!(world.is_torn_down());
    assert!(!world.body(0).unwrap().dragging);
    assert!(!world.frame_at(16.0));
    world.step(FRAME);
    assert_eq!(world.frame(), 0);
    assert!(!world.on_drag_start(0, 400.0, 200.0, 32.0));
}

#[test]
fn release_and_leave_after_teardown_are_ignored() {
    let mut world = world_800x600();
    world.add_body(IconBody::new(400.0, 200.0, 40.0));
    world.teardown();

    // Stale hold state left by a host that kept firing events.
    world.bodies[0].dragging = true;
    world.bodies[0].drag.velocity = Vec2::new(900.0, 0.0);

    world.on_pointer_leave();
    world.on_drag_end(0);

    let body = world.body(0).unwrap();
    assert!(body.dragging);
    assert_eq!(body.velocity, Vec2::zero());
    assert_eq!(body.drag.velocity, Vec2::new(900.0, 0.0));
}

#[test]
fn transforms_are_top_left_and_rotation() {
    let mut world = world_800x600();
    world.add_body(IconBody::new(100.0, 150.0, 40.0).with_angle(7.0, 0.0));
    assert_eq!(world.transforms().len(), TRANSFORM_STRIDE);
    assert_eq!(world.transforms().to_vec(), vec![60.0f32, 110.0, 7.0]);
}

#[test]
fn spawn_is_deterministic_and_inside_band() {
    let mut a = world_800x600();
    let mut b = world_800x600();
    a.spawn_icons(&[80.0; 5], 99);
    b.spawn_icons(&[80.0; 5], 99);

    for (ba, bb) in a.bodies().iter().zip(b.bodies()) {
        assert_eq!(ba.pos, bb.pos);
        assert!(ba.pos.y >= 600.0 * 0.55);
        assert!(ba.pos.y <= 600.0 - 70.0 - 40.0);
        assert!((-12.0..12.0).contains(&ba.angle));
        assert!((30.0..70.0).contains(&ba.pivot.0));
    }
}

#[test]
fn perf_stats_count_pairs() {
    let mut world = world_800x600();
    world.enable_perf_metrics(true);
    world.spawn_icons(&[80.0; 4], 1);
    world.step(FRAME);

    let stats = world.get_perf_stats();
    assert_eq!(stats.pairs_tested(), 6);
    assert_eq!(stats.body_count(), 4);
    assert!(stats.step_ms() >= 0.0);
}
