use crate::config::TIP_FORGIVENESS;
use crate::entities::{Ball, Spike};
use crate::math::{rects_intersect, vec2_distance};

pub(in crate::game) fn check_collisions(ball: &Ball, spikes: &[Spike]) -> bool {
    let ball_bounds = ball.bounds();
    spikes.iter().any(|spike| {
        rects_intersect(&ball_bounds, &spike.bounds()) && touches_tip(ball, spike)
    })
}

fn touches_tip(ball: &Ball, spike: &Spike) -> bool {
    vec2_distance(ball.pos, spike.tip()) < ball.radius + TIP_FORGIVENESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SpikeOrientation;

    #[test]
    fn ball_near_floor_tip_collides() {
        let spike = Spike::new(100.0, SpikeOrientation::Up, 1000.0);
        // Tip at (160, 820); ball centre 80 above it.
        let ball = Ball::new(160.0, 740.0);
        assert!(check_collisions(&ball, &[spike]));
    }

    #[test]
    fn box_overlap_far_from_tip_is_ignored() {
        let spike = Spike::new(100.0, SpikeOrientation::Up, 1000.0);
        // Boxes overlap at the spike's lower left corner, tip is ~153 away.
        let ball = Ball::new(30.0, 900.0);
        assert!(rects_intersect(&ball.bounds(), &spike.bounds()));
        assert!(!check_collisions(&ball, &[spike]));
    }

    #[test]
    fn ceiling_spike_tip_is_at_its_bottom() {
        let spike = Spike::new(100.0, SpikeOrientation::Down, 1000.0);
        // Tip at (160, 180).
        let hit = Ball::new(160.0, 180.0 + 80.0);
        assert!(check_collisions(&hit, std::slice::from_ref(&spike)));
        let beside = Ball::new(50.0, 180.0 + 80.0);
        assert!(rects_intersect(&beside.bounds(), &spike.bounds()));
        assert!(!check_collisions(&beside, &[spike]));
    }

    #[test]
    fn no_box_overlap_means_no_collision() {
        let spike = Spike::new(1000.0, SpikeOrientation::Up, 1000.0);
        let ball = Ball::new(150.0, 910.0);
        assert!(!check_collisions(&ball, &[spike]));
    }
}
