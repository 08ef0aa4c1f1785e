use strand::scene::{default_rope, reference_rope};
use strand::{Color, LinkId, SimConfig};

#[test]
fn reference_topology() {
    let sim = default_rope().unwrap();
    assert_eq!(sim.particle_count(), 8);
    assert_eq!(sim.link_count(), 9);
    assert_eq!(sim.particles().iter().filter(|p| !p.movable).count(), 2);

    // Particle 7 closes the square and carries the diagonal.
    let seventh = sim.links()[6].b();
    assert_eq!(seventh.index(), 7);
    assert_eq!(sim.incident_links(seventh).count(), 3);

    // The two anchors coincide, so their link is zero length and inert.
    assert_eq!(sim.links()[0].rest_length(), 0.0);
    assert_eq!(sim.renderable_links().count(), 9);
    assert!(sim.renderable_links().all(|l| l.color == Color::GREEN));
}

#[test]
fn reference_scene_stays_in_bounds() {
    let mut sim = default_rope().unwrap();
    let bounds = sim.config().bounds;
    for _ in 0..2000 {
        sim.step();
    }
    for p in sim.particles() {
        assert!(p.pos.is_finite(), "non-finite particle {:?}", p);
        assert!(bounds.contains(p.pos), "{:?} escaped the domain", p.pos);
    }
}

#[test]
fn reference_scene_links_hold() {
    let mut sim = default_rope().unwrap();
    for _ in 0..2000 {
        sim.step();
    }
    for (i, link) in sim.links().iter().enumerate() {
        let len = link.current_length(sim.particles());
        let rest = link.rest_length();
        assert!(
            (len - rest).abs() <= rest * 0.03 + 1e-3,
            "link {} at {} drifted from rest {}",
            i,
            len,
            rest,
        );
    }
}

#[test]
fn reference_scene_in_double_precision() {
    let mut sim = reference_rope(SimConfig::<f64>::new()).unwrap();
    for _ in 0..100 {
        sim.step();
    }
    let anchor = sim.particle(sim.links()[1].a()).unwrap();
    assert!(!anchor.movable);
    assert_eq!(anchor.pos.x, 540.0);

    let first: LinkId = sim.renderable_links().next().map(|l| l.id).unwrap();
    assert_eq!(sim.link(first).map(|l| l.a().index()), Some(0));
    assert!(sim.positions().all(|p| p.is_finite()));
}

#[test]
fn reference_scene_reports_no_degenerate_solves() {
    use strand::StepObserver;

    struct Skipped(usize);
    impl StepObserver for Skipped {
        fn on_relaxation_round(&mut self, _round: usize, skipped: usize, _contacts: usize) {
            self.0 += skipped;
        }
    }

    let mut sim = default_rope().unwrap();
    let mut observer = Skipped(0);
    for _ in 0..100 {
        sim.step_observed(&mut observer);
    }
    assert_eq!(observer.0, 0);
}
