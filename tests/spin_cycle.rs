//! End-to-end draw cycles through the public API: load, spin, consume the
//! frame sequence, announce, dismiss. Exercises the same call pattern a
//! presentation adapter uses.

use std::num::NonZeroUsize;

use rand::SeedableRng;
use rand::rngs::StdRng;

use luckwheel::{DrawSession, Ease, Phase, WheelConfig, geometry};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn frames_carry_the_wheel_from_rest_to_the_landing_angle() {
    let mut session = DrawSession::new(WheelConfig::default());
    let mut rng = StdRng::seed_from_u64(11);
    session.load(names(&["Alice", "Bob", "Charlie"]), &mut rng);

    let wheel: Vec<String> = session.remaining().to_vec();
    let plan = session.spin(&mut rng).unwrap();
    let frames: Vec<f64> = plan.frames.iter().collect();

    assert_eq!(frames.len(), session.config().frame_count);
    assert_eq!(frames[0], plan.result.start_rotation);
    assert_eq!(*frames.last().unwrap(), plan.result.target_rotation);
    for pair in frames.windows(2) {
        assert!(pair[1] >= pair[0], "wheel moved backwards");
    }

    // At rest, the pointer sits on the winner's wedge.
    let pool_size = NonZeroUsize::new(wheel.len()).unwrap();
    let landed = geometry::wedge_at_pointer(pool_size, *frames.last().unwrap());
    assert_eq!(wheel[landed], plan.result.winner_name);
}

#[test]
fn every_spin_of_a_full_session_lands_on_its_winner() {
    let config = WheelConfig {
        spin_ease: Ease::OutCubic,
        ..WheelConfig::default()
    };
    let mut session = DrawSession::new(config);
    let mut rng = StdRng::seed_from_u64(23);
    session.load(
        names(&["Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace"]),
        &mut rng,
    );

    while !session.remaining().is_empty() {
        let wheel: Vec<String> = session.remaining().to_vec();
        let plan = session.spin(&mut rng).unwrap();

        let pool_size = NonZeroUsize::new(wheel.len()).unwrap();
        let landed = geometry::wedge_at_pointer(pool_size, plan.result.target_rotation);
        assert_eq!(wheel[landed], plan.result.winner_name);

        // The landing angle puts the winning wedge midpoint on the pointer.
        let midpoint = geometry::wedge_midpoint(
            pool_size,
            plan.result.winner_index,
            geometry::normalize_degrees(plan.result.target_rotation),
        );
        let distance = geometry::normalize_degrees(midpoint);
        assert!(distance < 1e-9 || 360.0 - distance < 1e-9);

        session.finish_spin();
        assert_eq!(session.phase(), Phase::Announced);
        assert_eq!(
            session.announced_winner(),
            Some(plan.result.winner_name.as_str())
        );
        session.dismiss_winner();
        assert_eq!(session.phase(), Phase::Loaded);
    }

    assert_eq!(session.winners().len(), 7);
}

#[test]
fn single_attendee_session_always_wins_immediately() {
    let mut session = DrawSession::new(WheelConfig::default());
    let mut rng = StdRng::seed_from_u64(3);
    session.load_text("Solo", &mut rng);

    let plan = session.spin(&mut rng).unwrap();
    assert_eq!(plan.result.winner_name, "Solo");
    assert_eq!(plan.result.winner_index, 0);
    assert!(session.remaining().is_empty());
}
