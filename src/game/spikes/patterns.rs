use log::trace;
use rand::{Rng, rngs::SmallRng};

use crate::config::{
    GameConfig, PATTERN_GAP_BASE, PATTERN_GAP_JITTER, SAFE_PASSAGE_SPACING, SPAWN_LEAD,
    SPAWN_THRESHOLD_MAX, SPAWN_THRESHOLD_MIN,
};
use crate::entities::{Spike, SpikeOrientation};

use super::super::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::game) enum SpikePattern {
    SingleUp,
    SingleDown,
    /// Placed exactly like `SingleUp`.
    GapMiddle,
    SafePassage,
}

impl SpikePattern {
    const ALL: [SpikePattern; 4] = [
        SpikePattern::SingleUp,
        SpikePattern::SingleDown,
        SpikePattern::GapMiddle,
        SpikePattern::SafePassage,
    ];

    fn random(rng: &mut SmallRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

pub(in crate::game) fn emit_pattern_if_due(
    session: &mut Session,
    config: &GameConfig,
    rng: &mut SmallRng,
) -> Option<SpikePattern> {
    session.spike_timer += 1;
    let threshold = rng.random_range(SPAWN_THRESHOLD_MIN..=SPAWN_THRESHOLD_MAX);
    if session.spike_timer <= threshold {
        return None;
    }
    session.spike_timer = 0;
    Some(generate_pattern(&mut session.spikes, config, rng))
}

fn generate_pattern(spikes: &mut Vec<Spike>, config: &GameConfig, rng: &mut SmallRng) -> SpikePattern {
    let gap = PATTERN_GAP_BASE + rng.random_range(0..=PATTERN_GAP_JITTER) as f32;
    let pattern = SpikePattern::random(rng);
    let x = next_group_x(spikes, config.width(), gap);
    trace!("{pattern:?} at x {x:.0}");
    place_pattern(spikes, pattern, x, config.height());
    pattern
}

fn next_group_x(spikes: &[Spike], screen_width: f32, gap: f32) -> f32 {
    let last_x = spikes
        .iter()
        .map(|spike| spike.x)
        .reduce(f32::max)
        .unwrap_or(0.0);
    (screen_width + SPAWN_LEAD).max(last_x + gap)
}

fn place_pattern(spikes: &mut Vec<Spike>, pattern: SpikePattern, x: f32, screen_height: f32) {
    match pattern {
        SpikePattern::SafePassage => {
            spikes.push(Spike::new(x, SpikeOrientation::Up, screen_height));
            spikes.push(Spike::new(
                x + SAFE_PASSAGE_SPACING,
                SpikeOrientation::Down,
                screen_height,
            ));
        }
        SpikePattern::SingleUp | SpikePattern::GapMiddle => {
            spikes.push(Spike::new(x, SpikeOrientation::Up, screen_height));
        }
        SpikePattern::SingleDown => {
            spikes.push(Spike::new(x, SpikeOrientation::Down, screen_height));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn first_group_starts_past_the_right_edge() {
        assert_eq!(next_group_x(&[], 1920.0, 300.0), 2020.0);
    }

    #[test]
    fn later_groups_keep_their_gap() {
        let spikes = vec![
            Spike::new(2000.0, SpikeOrientation::Up, 1000.0),
            Spike::new(2200.0, SpikeOrientation::Down, 1000.0),
        ];
        assert_eq!(next_group_x(&spikes, 1920.0, 420.0), 2620.0);
    }

    #[test]
    fn offscreen_leftovers_still_count_as_last() {
        let spikes = vec![Spike::new(-50.0, SpikeOrientation::Up, 1000.0)];
        assert_eq!(next_group_x(&spikes, 100.0, 300.0), 250.0);
    }

    #[test]
    fn gap_middle_places_like_single_up() {
        let mut gap_middle = Vec::new();
        place_pattern(&mut gap_middle, SpikePattern::GapMiddle, 500.0, 1000.0);
        let mut single_up = Vec::new();
        place_pattern(&mut single_up, SpikePattern::SingleUp, 500.0, 1000.0);
        assert_eq!(gap_middle.len(), 1);
        assert_eq!(gap_middle[0].x, single_up[0].x);
        assert_eq!(gap_middle[0].y(), single_up[0].y());
        assert_eq!(gap_middle[0].orientation(), SpikeOrientation::Up);
    }

    #[test]
    fn safe_passage_alternates_orientation() {
        let mut spikes = Vec::new();
        place_pattern(&mut spikes, SpikePattern::SafePassage, 500.0, 1000.0);
        assert_eq!(spikes.len(), 2);
        assert_eq!(spikes[0].orientation(), SpikeOrientation::Up);
        assert_eq!(spikes[1].orientation(), SpikeOrientation::Down);
        assert_eq!(spikes[1].x - spikes[0].x, 200.0);
    }

    #[test]
    fn every_pattern_eventually_appears() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let pattern = SpikePattern::random(&mut rng);
            if !seen.contains(&pattern) {
                seen.push(pattern);
            }
        }
        assert_eq!(seen.len(), 4);
    }

    proptest! {
        #[test]
        fn groups_are_ordered_and_spaced(seed in any::<u64>(), width in 320i32..4000) {
            let config = GameConfig::new(width, 1080);
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut spikes = Vec::new();
            let mut starts = Vec::new();
            for _ in 0..12 {
                let first = spikes.len();
                generate_pattern(&mut spikes, &config, &mut rng);
                starts.push(spikes[first].x);
            }
            for pair in spikes.windows(2) {
                prop_assert!(pair[0].x <= pair[1].x);
            }
            for pair in starts.windows(2) {
                let delta = pair[1] - pair[0];
                // Measured from the previous group's start, a two-spike group
                // adds its own 200 of width.
                prop_assert!(delta >= 300.0);
                prop_assert!(delta <= 450.0 + SAFE_PASSAGE_SPACING);
            }
        }
    }
}
