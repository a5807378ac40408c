// Host-side tests for proximity link computation.
// The web crate is wasm-only, so these exercise the pure core directly.

use dotfield_core::*;
use glam::Vec2;

fn plain(max_dist: f32) -> LinkParams {
    LinkParams {
        max_dist,
        alpha_scale: 1.0,
        glow: None,
    }
}

#[test]
fn links_are_symmetric_under_reversal() {
    let positions = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(300.0, 0.0),
        Vec2::new(310.0, 40.0),
    ];
    let forward = proximity_links(&positions, &plain(100.0));

    let mut reversed_positions = positions.clone();
    reversed_positions.reverse();
    let backward = proximity_links(&reversed_positions, &plain(100.0));

    // Same pair set (mapped through the reversal) with the same alphas.
    assert_eq!(forward.len(), backward.len());
    let n = positions.len();
    for link in &forward {
        let (ra, rb) = (n - 1 - link.b, n - 1 - link.a);
        let twin = backward
            .iter()
            .find(|l| l.a == ra && l.b == rb)
            .unwrap_or_else(|| panic!("missing reversed pair for {link:?}"));
        assert!((twin.alpha - link.alpha).abs() < 1e-6);
    }
}

#[test]
fn threshold_is_strict() {
    let at_threshold = vec![Vec2::ZERO, Vec2::new(100.0, 0.0)];
    assert!(proximity_links(&at_threshold, &plain(100.0)).is_empty());

    let just_inside = vec![Vec2::ZERO, Vec2::new(99.9, 0.0)];
    assert_eq!(proximity_links(&just_inside, &plain(100.0)).len(), 1);
}

#[test]
fn closer_pairs_are_more_opaque() {
    let positions = vec![
        Vec2::ZERO,
        Vec2::new(20.0, 0.0),
        Vec2::new(500.0, 0.0),
        Vec2::new(580.0, 0.0),
    ];
    let links = proximity_links(&positions, &plain(100.0));
    assert_eq!(links.len(), 2);

    let near = links.iter().find(|l| l.a == 0 && l.b == 1).unwrap();
    let far = links.iter().find(|l| l.a == 2 && l.b == 3).unwrap();
    assert!(near.alpha > far.alpha);
    assert!((near.alpha - 0.8).abs() < 1e-6);
    assert!((far.alpha - 0.2).abs() < 1e-6);
}

#[test]
fn pointer_glow_boosts_nearby_midpoints() {
    let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(60.0, 0.0)];
    let base = proximity_links(&positions, &plain(120.0));

    let glowing = proximity_links(
        &positions,
        &LinkParams {
            max_dist: 120.0,
            alpha_scale: 1.0,
            glow: Some(PointerGlow {
                pos: Vec2::new(30.0, 0.0), // exactly on the midpoint
                radius: 150.0,
                bonus: 0.4,
            }),
        },
    );
    assert!((glowing[0].alpha - (base[0].alpha + 0.4).min(1.0)).abs() < 1e-6);

    // A distant pointer contributes nothing.
    let distant = proximity_links(
        &positions,
        &LinkParams {
            max_dist: 120.0,
            alpha_scale: 1.0,
            glow: Some(PointerGlow {
                pos: Vec2::new(5000.0, 5000.0),
                radius: 150.0,
                bonus: 0.4,
            }),
        },
    );
    assert!((distant[0].alpha - base[0].alpha).abs() < 1e-6);
}

#[test]
fn alpha_is_capped_at_one() {
    let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];
    let links = proximity_links(
        &positions,
        &LinkParams {
            max_dist: 120.0,
            alpha_scale: 1.0,
            glow: Some(PointerGlow {
                pos: Vec2::new(0.5, 0.0),
                radius: 150.0,
                bonus: 0.4,
            }),
        },
    );
    assert!(links[0].alpha <= 1.0);
}

#[test]
fn empty_and_single_inputs_yield_no_links() {
    assert!(proximity_links(&[], &plain(100.0)).is_empty());
    assert!(proximity_links(&[Vec2::ZERO], &plain(100.0)).is_empty());
}
