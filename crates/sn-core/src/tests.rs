//! Unit tests for sn-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn range_is_ascending() {
        let ids: Vec<_> = AgentId::range(3).collect();
        assert_eq!(ids, [AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::Day;

    #[test]
    fn day_arithmetic() {
        assert_eq!(Day(3).next(), Day(4));
        assert_eq!(Day(12).to_string(), "D12");
    }

    #[test]
    fn interval_boundaries() {
        assert!(Day(0).is_multiple_of(1));
        assert!(Day(6).is_multiple_of(3));
        assert!(!Day(7).is_multiple_of(3));
        assert!(!Day(0).is_multiple_of(0), "interval 0 never matches");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        let va: Vec<f64> = (0..10).map(|_| a.uniform(0.0, 1.0)).collect();
        let vb: Vec<f64> = (0..10).map(|_| b.uniform(0.0, 1.0)).collect();
        assert_eq!(va, vb);
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let va: Vec<u32> = (0..4).map(|_| a.uniform_u32(0, u32::MAX)).collect();
        let vb: Vec<u32> = (0..4).map(|_| b.uniform_u32(0, u32::MAX)).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = SimRng::new(5);
        for _ in 0..1_000 {
            let x = rng.uniform(0.3, 0.9);
            assert!((0.3..0.9).contains(&x), "got {x}");
        }
    }

    #[test]
    fn degenerate_ranges_return_lower_bound() {
        let mut rng = SimRng::new(5);
        assert_eq!(rng.uniform(0.5, 0.5), 0.5);
        assert_eq!(rng.uniform_u32(7, 7), 7);
        assert_eq!(rng.uniform_u32(9, 3), 9);
    }

    #[test]
    fn uniform_u32_is_half_open() {
        let mut rng = SimRng::new(11);
        for _ in 0..1_000 {
            let x = rng.uniform_u32(2, 4);
            assert!(x == 2 || x == 3, "got {x}");
        }
    }

    #[test]
    fn sample_distinct_has_no_repeats() {
        let mut rng = SimRng::new(3);
        for _ in 0..200 {
            let mut picks = rng.sample_distinct(20, 4);
            assert_eq!(picks.len(), 4);
            assert!(picks.iter().all(|&p| p < 20));
            picks.sort_unstable();
            picks.dedup();
            assert_eq!(picks.len(), 4);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(8);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn run_seeds_are_distinct() {
        let seeds: Vec<u64> = (0..5).map(|r| SimRng::run_seed(42, r)).collect();
        assert_eq!(seeds[0], 42);
        for i in 0..seeds.len() {
            for j in i + 1..seeds.len() {
                assert_ne!(seeds[i], seeds[j]);
            }
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{ScoreRange, SimConfig, SnError};

    fn assert_config_err(cfg: &SimConfig) {
        match cfg.validate() {
            Err(SnError::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn default_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn default_matches_reference_parameters() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.direct_friend_weight, 10.0);
        assert_eq!(cfg.fof_weight, 2.0);
        assert_eq!(cfg.initial_score_range, ScoreRange::new(0.3, 0.9));
    }

    #[test]
    fn rejects_tiny_population() {
        assert_config_err(&SimConfig { num_agents: 1, ..SimConfig::default() });
        assert_config_err(&SimConfig { num_agents: 0, ..SimConfig::default() });
    }

    #[test]
    fn rejects_inverted_friend_bounds() {
        assert_config_err(&SimConfig {
            min_friends_per_agent: 5,
            max_friends_per_agent: 4,
            ..SimConfig::default()
        });
    }

    #[test]
    fn rejects_inverted_interaction_bounds() {
        assert_config_err(&SimConfig {
            min_interactions_per_day: 10,
            max_interactions_per_day: 9,
            ..SimConfig::default()
        });
    }

    #[test]
    fn rejects_zero_days() {
        assert_config_err(&SimConfig { num_days: 0, ..SimConfig::default() });
    }

    #[test]
    fn rejects_negative_or_nan_weights() {
        assert_config_err(&SimConfig { direct_friend_weight: -1.0, ..SimConfig::default() });
        assert_config_err(&SimConfig { fof_weight: f64::NAN, ..SimConfig::default() });
    }

    #[test]
    fn rejects_inverted_score_range() {
        assert_config_err(&SimConfig {
            initial_score_range: ScoreRange::new(0.9, 0.3),
            ..SimConfig::default()
        });
    }

    #[test]
    fn accepts_equal_bounds() {
        let cfg = SimConfig {
            min_friends_per_agent:    4,
            max_friends_per_agent:    4,
            min_interactions_per_day: 3,
            max_interactions_per_day: 3,
            initial_score_range:      ScoreRange::new(0.5, 0.5),
            ..SimConfig::default()
        };
        cfg.validate().unwrap();
        assert!(cfg.initial_score_range.is_degenerate());
    }

    #[test]
    fn work_bound_is_product() {
        let cfg = SimConfig {
            num_days:                 10,
            num_agents:               50,
            max_interactions_per_day: 15,
            ..SimConfig::default()
        };
        assert_eq!(cfg.work_bound(), 7_500);
    }
}
