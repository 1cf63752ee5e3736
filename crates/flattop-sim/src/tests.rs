//! Integration tests for the simulation facade, ship kinematics, and the
//! aircraft flight phase machine.

use flattop_core::commands::{Direction, MouseButton};
use flattop_core::constants::{DT, SHIP_LINEAR_SPEED, WIN_WIDTH};
use flattop_core::enums::FlightPhase;
use flattop_core::events::SimEvent;
use flattop_core::types::Vec2;

use crate::engine::Simulation;
use crate::frontend::RecordingFrontend;
use crate::profile::FlightProfile;

fn sim() -> Simulation<RecordingFrontend> {
    let mut sim = Simulation::new(RecordingFrontend::new());
    sim.init();
    sim
}

fn sim_with(profile: FlightProfile) -> Simulation<RecordingFrontend> {
    let mut sim = Simulation::with_profile(RecordingFrontend::new(), profile);
    sim.init();
    sim
}

/// A tuning that flies a full sortie in a handful of seconds.
fn short_sortie_profile() -> FlightProfile {
    FlightProfile {
        flight_time: 1.0,
        ..FlightProfile::standard()
    }
}

/// Tick until the slot-0 aircraft reaches cruise speed.
fn run_to_cruise(sim: &mut Simulation<RecordingFrontend>) {
    for _ in 0..200 {
        sim.tick(DT);
        if sim.ship().fleet()[0].phase() == FlightPhase::Cruising {
            return;
        }
    }
    panic!("aircraft never reached cruise speed");
}

// ---- Fleet initial state ----

#[test]
fn test_fresh_fleet_docked_and_launch_eligible() {
    let sim = sim();
    for aircraft in sim.ship().fleet() {
        assert!(aircraft.is_docked());
        assert!(
            !aircraft.is_cooling_down(),
            "a never-docked aircraft must not be blocked by a reload clock"
        );
        assert_eq!(
            aircraft.phase(),
            FlightPhase::Docked {
                reload_elapsed: None
            }
        );
    }
    // Only the ship model exists.
    assert_eq!(sim.frontend().ships_created, 1);
    assert_eq!(sim.frontend().aircraft_created, 0);
    assert_eq!(sim.frontend().live_count(), 1);
}

// ---- Ship kinematics ----

#[test]
fn test_ship_idle_keys_stationary() {
    let mut sim = sim();
    let snap = sim.tick(1.0);
    assert_eq!(snap.ship.position, Vec2::ZERO);
    assert_eq!(snap.ship.heading, 0.0);
}

#[test]
fn test_ship_cannot_rotate_without_way() {
    let mut sim = sim();
    sim.key_pressed(Direction::Left);
    let snap = sim.tick(1.0);
    assert_eq!(snap.ship.position, Vec2::ZERO);
    assert_eq!(snap.ship.heading, 0.0, "turning requires linear motion");
}

#[test]
fn test_ship_forward_advances_along_heading() {
    let mut sim = sim();
    sim.key_pressed(Direction::Forward);
    let snap = sim.tick(2.0);
    assert!((snap.ship.position.x - SHIP_LINEAR_SPEED * 2.0).abs() < 1e-12);
    assert!(snap.ship.position.y.abs() < 1e-12);
}

#[test]
fn test_ship_forward_wins_over_backward() {
    let mut sim = sim();
    sim.key_pressed(Direction::Forward);
    sim.key_pressed(Direction::Backward);
    let snap = sim.tick(1.0);
    assert!(snap.ship.position.x > 0.0, "forward takes precedence");
}

#[test]
fn test_ship_turns_while_under_way() {
    let mut sim = sim();
    sim.key_pressed(Direction::Forward);
    sim.key_pressed(Direction::Left);
    let snap = sim.tick(1.0);
    assert!(snap.ship.heading > 0.0);
    sim.key_released(Direction::Left);
    sim.key_pressed(Direction::Right);
    sim.tick(1.0);
    let snap = sim.tick(1.0);
    assert!(snap.ship.heading < 0.0);
}

// ---- Launch dispatch ----

#[test]
fn test_secondary_click_launches_first_ready_slot() {
    let mut sim = sim();
    sim.click(0.0, 0.0, MouseButton::Secondary);
    let snap = sim.tick(DT);

    assert_eq!(sim.ship().fleet()[0].phase(), FlightPhase::Launching);
    assert!(sim.ship().fleet()[1].is_docked());
    assert_eq!(sim.frontend().aircraft_created, 1);
    assert!(snap
        .events
        .contains(&SimEvent::AircraftLaunched { slot: 0 }));
}

#[test]
fn test_launch_matches_ship_pose() {
    let mut sim = sim();
    // Work up a non-trivial pose first.
    sim.key_pressed(Direction::Forward);
    sim.key_pressed(Direction::Left);
    for _ in 0..30 {
        sim.tick(DT);
    }
    let ship_heading = sim.ship().heading();
    let ship_position = sim.ship().position();
    assert!(ship_heading > 0.0);

    sim.click(0.0, 0.0, MouseButton::Secondary);
    let aircraft = &sim.ship().fleet()[0];
    assert_eq!(aircraft.heading(), ship_heading);
    assert_eq!(aircraft.position(), ship_position);
}

#[test]
fn test_secondary_click_with_all_airborne_is_noop() {
    let mut sim = sim();
    for _ in 0..5 {
        sim.click(0.0, 0.0, MouseButton::Secondary);
    }
    assert_eq!(sim.frontend().aircraft_created, 5);
    assert!(sim.ship().fleet().iter().all(|a| !a.is_docked()));

    // Sixth request: nothing eligible, nothing happens.
    sim.click(0.0, 0.0, MouseButton::Secondary);
    let snap = sim.tick(DT);
    assert_eq!(sim.frontend().aircraft_created, 5);
    assert!(!snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::AircraftLaunched { .. })));
}

#[test]
#[should_panic(expected = "launch of an airborne aircraft")]
fn test_double_launch_panics() {
    let mut sim = sim();
    sim.click(0.0, 0.0, MouseButton::Secondary);
    let mut frontend = RecordingFrontend::new();
    sim.ship_mut().fleet_mut()[0].launch(&mut frontend, Vec2::ZERO, 0.0);
}

// ---- Target assignment ----

#[test]
fn test_primary_click_targets_airborne_only() {
    let mut sim = sim();
    sim.click(0.0, 0.0, MouseButton::Secondary);
    sim.tick(DT);

    let snap_before = sim.tick(DT);
    assert!(snap_before.aircraft.iter().all(|a| a.target.is_none()));

    sim.click(3.0, 4.0, MouseButton::Primary);
    let snap = sim.tick(DT);

    assert_eq!(
        sim.ship().fleet()[0].target_point(),
        Some(Vec2::new(3.0, 4.0))
    );
    for docked in &sim.ship().fleet()[1..] {
        assert_eq!(docked.target_point(), None, "docked aircraft ignore targets");
    }
    assert_eq!(sim.frontend().markers, vec![(3.0, 4.0)]);
    assert!(snap
        .events
        .contains(&SimEvent::TargetAssigned { x: 3.0, y: 4.0 }));
}

// ---- Flight phases ----

#[test]
fn test_launch_accelerates_to_cruise() {
    let mut sim = sim();
    sim.click(0.0, 0.0, MouseButton::Secondary);

    let aircraft = &sim.ship().fleet()[0];
    let launch_speed = aircraft.speed();
    assert_eq!(aircraft.phase(), FlightPhase::Launching);
    assert_eq!(aircraft.flight_elapsed(), 0.0);

    run_to_cruise(&mut sim);
    let aircraft = &sim.ship().fleet()[0];
    assert!(aircraft.speed() > launch_speed);
    assert!(aircraft.speed() >= FlightProfile::standard().linear_speed);
}

#[test]
fn test_cruise_without_target_flies_straight() {
    let mut sim = sim();
    sim.click(0.0, 0.0, MouseButton::Secondary);
    run_to_cruise(&mut sim);

    let heading_before = sim.ship().fleet()[0].heading();
    let x_before = sim.ship().fleet()[0].position().x;
    for _ in 0..30 {
        sim.tick(DT);
    }
    let aircraft = &sim.ship().fleet()[0];
    assert_eq!(aircraft.heading(), heading_before);
    assert!(aircraft.position().x > x_before);
    assert!(aircraft.position().y.abs() < 1e-9);
    assert!(aircraft.flight_elapsed() > 0.0);
}

#[test]
fn test_orbit_settles_near_target() {
    let mut sim = sim();
    sim.click(0.0, 0.0, MouseButton::Secondary);
    run_to_cruise(&mut sim);

    let target = Vec2::new(2.0, 1.5);
    sim.click(target.x, target.y, MouseButton::Primary);

    for _ in 0..600 {
        sim.tick(DT);
    }
    // Settled: stays within a couple of turn radii of the commanded point.
    for _ in 0..200 {
        sim.tick(DT);
        let gap = (sim.ship().fleet()[0].position() - target).magnitude();
        assert!(gap < 3.0, "orbiting aircraft drifted {gap} from target");
    }
}

#[test]
fn test_course_correction_offsets_target_once() {
    let mut sim = sim();
    sim.click(0.0, 0.0, MouseButton::Secondary);
    run_to_cruise(&mut sim);

    let commanded = Vec2::new(2.0, 1.5);
    sim.click(commanded.x, commanded.y, MouseButton::Primary);
    for _ in 0..600 {
        sim.tick(DT);
    }
    let adjusted = sim.ship().fleet()[0].target_point().unwrap();
    assert_ne!(
        adjusted, commanded,
        "entering the capture radius should offset the orbit point"
    );
}

#[test]
fn test_course_correction_disabled_keeps_commanded_point() {
    let mut sim = sim_with(FlightProfile {
        has_course_correction: false,
        ..FlightProfile::standard()
    });
    sim.click(0.0, 0.0, MouseButton::Secondary);
    run_to_cruise(&mut sim);

    let commanded = Vec2::new(2.0, 1.5);
    sim.click(commanded.x, commanded.y, MouseButton::Primary);
    for _ in 0..600 {
        sim.tick(DT);
    }
    assert_eq!(sim.ship().fleet()[0].target_point(), Some(commanded));
}

// ---- Return and reload ----

#[test]
fn test_sortie_round_trip_and_reload_gating() {
    let mut sim = sim_with(short_sortie_profile());
    sim.click(0.0, 0.0, MouseButton::Secondary);

    // Fly the whole sortie: accelerate, cruise out, turn back, dock.
    let mut docked_event = false;
    for _ in 0..3000 {
        let snap = sim.tick(DT);
        if snap
            .events
            .contains(&SimEvent::AircraftDocked { slot: 0 })
        {
            docked_event = true;
            break;
        }
    }
    assert!(docked_event, "aircraft never returned to the ship");

    let aircraft = &sim.ship().fleet()[0];
    assert!(aircraft.is_docked());
    assert!(
        aircraft.is_cooling_down(),
        "reload clock should start at zero after docking"
    );
    assert_eq!(sim.frontend().live_count(), 1, "only the ship remains");

    // While cooling, a launch request skips slot 0 for the next ready slot.
    sim.click(0.0, 0.0, MouseButton::Secondary);
    assert!(sim.ship().fleet()[0].is_docked());
    assert_eq!(sim.ship().fleet()[1].phase(), FlightPhase::Launching);

    // After the reload time has accumulated, slot 0 is eligible again.
    let reload_ticks = (short_sortie_profile().reload_time / DT).ceil() as usize + 1;
    for _ in 0..reload_ticks {
        sim.tick(DT);
    }
    assert!(!sim.ship().fleet()[0].is_cooling_down());
    sim.click(0.0, 0.0, MouseButton::Secondary);
    assert_eq!(sim.ship().fleet()[0].phase(), FlightPhase::Launching);
}

#[test]
fn test_reload_clock_only_runs_when_armed() {
    let mut sim = sim();
    for _ in 0..60 {
        sim.tick(DT);
    }
    // Never-docked aircraft: timer stays absent no matter how long.
    assert_eq!(
        sim.ship().fleet()[0].phase(),
        FlightPhase::Docked {
            reload_elapsed: None
        }
    );
}

// ---- Out-of-bounds recovery ----

#[test]
fn test_out_of_bounds_turns_back() {
    let mut sim = sim();
    sim.click(0.0, 0.0, MouseButton::Secondary);
    run_to_cruise(&mut sim);

    // Drop the aircraft past the right edge, still flying +X.
    sim.ship_mut().fleet_mut()[0].teleport(Vec2::new(WIN_WIDTH + 0.5, 0.0));
    let heading_before = sim.ship().fleet()[0].heading();
    sim.tick(DT);
    let aircraft = &sim.ship().fleet()[0];
    assert!(
        aircraft.heading() > heading_before,
        "aircraft should be turning back toward the mirror point"
    );

    // Left alone, it comes back inside the bounds.
    for _ in 0..300 {
        sim.tick(DT);
        if sim.ship().fleet()[0].position().x <= WIN_WIDTH {
            return;
        }
    }
    panic!("aircraft never re-entered the playable area");
}

// ---- Teardown ----

#[test]
fn test_deinit_releases_all_models_without_arming_reload() {
    let mut sim = sim();
    sim.click(0.0, 0.0, MouseButton::Secondary);
    sim.click(0.0, 0.0, MouseButton::Secondary);
    sim.tick(DT);
    assert_eq!(sim.frontend().live_count(), 3);

    sim.deinit();
    assert_eq!(sim.frontend().live_count(), 0);
    for aircraft in sim.ship().fleet() {
        assert_eq!(
            aircraft.phase(),
            FlightPhase::Docked {
                reload_elapsed: None
            },
            "full shutdown must not arm reload clocks"
        );
        assert!(!aircraft.is_cooling_down());
    }
}

#[test]
#[should_panic(expected = "tick before init")]
fn test_tick_before_init_panics() {
    let mut sim = Simulation::new(RecordingFrontend::new());
    sim.tick(DT);
}

#[test]
#[should_panic(expected = "simulation initialized twice")]
fn test_double_init_panics() {
    let mut sim = sim();
    sim.init();
}

// ---- Pose reporting ----

#[test]
fn test_poses_reported_each_tick() {
    let mut sim = sim();
    sim.click(0.0, 0.0, MouseButton::Secondary);
    sim.tick(DT);

    let frontend = sim.frontend();
    assert_eq!(frontend.live_count(), 2);
    for (&id, _) in frontend.live.iter() {
        assert!(
            frontend.last_pose(id).is_some(),
            "every visible model gets a pose every tick"
        );
    }
}

// ---- Determinism ----

#[test]
fn test_identical_input_history_is_deterministic() {
    let mut sim_a = sim();
    let mut sim_b = sim();

    for sim in [&mut sim_a, &mut sim_b] {
        sim.key_pressed(Direction::Forward);
        sim.key_pressed(Direction::Left);
        sim.click(0.0, 0.0, MouseButton::Secondary);
        sim.click(2.0, -1.0, MouseButton::Primary);
    }

    for _ in 0..500 {
        let snap_a = sim_a.tick(DT);
        let snap_b = sim_b.tick(DT);
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "identically driven runs diverged");
    }
}
