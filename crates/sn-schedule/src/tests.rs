//! Unit tests for sn-schedule.

use sn_agent::{AgentStore, AgentStoreBuilder, LikeScoreMatrix};
use sn_core::{AgentId, ScoreRange, SimRng};
use sn_graph::FriendGraph;

use crate::{DayContext, InteractionWeights};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn a(i: u32) -> AgentId {
    AgentId(i)
}

/// `n` random agents, all with capacity `max_friends` and threshold 0.5.
fn uniform_agents(n: usize, max_friends: u32, seed: u64) -> AgentStore {
    let mut rng = SimRng::new(seed);
    let mut agents = AgentStoreBuilder::new(n)
        .max_friends_range(max_friends, max_friends)
        .build(&mut rng)
        .expect("valid population");
    agents.friend_threshold.iter_mut().for_each(|t| *t = 0.5);
    agents
}

fn ctx<'a>(agents: &'a AgentStore, likes: &'a LikeScoreMatrix, min: u32, max: u32) -> DayContext<'a> {
    DayContext::new(agents, likes, InteractionWeights::default(), min, max)
}

/// 0 – 1 – 2
fn path3() -> FriendGraph {
    let mut g = FriendGraph::new(3);
    g.add_friendship(a(0), a(1)).unwrap();
    g.add_friendship(a(1), a(2)).unwrap();
    g
}

// ── Probabilities ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod probability {
    use super::*;
    use crate::InteractionProbabilities;

    #[test]
    fn rows_are_distributions_with_zero_diagonal() {
        let probs = InteractionProbabilities::build(&path3(), InteractionWeights::default());
        for i in 0..3 {
            let row = probs.row(a(i));
            assert_eq!(row[i as usize], 0.0);
            assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn no_friends_is_uniform() {
        let probs = InteractionProbabilities::build(&FriendGraph::new(5), InteractionWeights::default());
        for j in 1..5 {
            assert!((probs.get(a(0), a(j)) - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn friend_and_two_hop_weights_accumulate() {
        let probs = InteractionProbabilities::build(&path3(), InteractionWeights::default());

        // Row 0: base [0, 1, 1]; +10 for friend 1; +2 for 2 via 1.
        assert!((probs.get(a(0), a(1)) - 11.0 / 14.0).abs() < 1e-12);
        assert!((probs.get(a(0), a(2)) - 3.0 / 14.0).abs() < 1e-12);

        // Row 1: base [1, 0, 1]; +10 each for friends 0 and 2; the two-hop
        // paths only lead back to 1 itself.
        assert!((probs.get(a(1), a(0)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mutual_friend_counted_once_per_path() {
        // Square 0-1-2-3-0: 0 reaches 2 through both 1 and 3.
        let mut g = FriendGraph::new(4);
        for (x, y) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            g.add_friendship(a(x), a(y)).unwrap();
        }
        let probs = InteractionProbabilities::build(&g, InteractionWeights::default());
        // Row 0 raw: [0, 11, 1 + 4, 11] → total 27.
        assert!((probs.get(a(0), a(2)) - 5.0 / 27.0).abs() < 1e-12);
        assert!((probs.get(a(0), a(1)) - 11.0 / 27.0).abs() < 1e-12);
    }
}

// ── Sampler ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sampler {
    use super::*;
    use crate::{CategoricalSampler, ScheduleError};

    #[test]
    fn zero_weight_slots_never_drawn() {
        let sampler = CategoricalSampler::new(a(0), &[0.0, 0.5, 0.0, 0.5]).unwrap();
        let mut rng = SimRng::new(3);
        for id in sampler.sample_n(&mut rng, 1_000) {
            assert!(id == a(1) || id == a(3));
        }
    }

    #[test]
    fn all_zero_row_is_an_error() {
        assert!(matches!(
            CategoricalSampler::new(a(2), &[0.0, 0.0]),
            Err(ScheduleError::EmptyDistribution(id)) if id == a(2)
        ));
    }

    #[test]
    fn sample_n_length() {
        let sampler = CategoricalSampler::new(a(0), &[0.0, 1.0]).unwrap();
        let mut rng = SimRng::new(1);
        assert_eq!(sampler.sample_n(&mut rng, 7), vec![a(1); 7]);
        assert!(sampler.sample_n(&mut rng, 0).is_empty());
    }
}

// ── Budget ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod budget {
    use super::*;
    use crate::InteractionBudget;

    #[test]
    fn draws_stay_in_half_open_range() {
        let mut rng = SimRng::new(11);
        let budget = InteractionBudget::draw(500, 5, 30, &mut rng);
        assert_eq!(budget.len(), 500);
        for i in 0..500 {
            let left = budget.left(a(i));
            assert!((5..30).contains(&left), "{left}");
        }
    }

    #[test]
    fn equal_bounds_give_exact_budget() {
        let mut rng = SimRng::new(11);
        let budget = InteractionBudget::draw(10, 4, 4, &mut rng);
        assert_eq!(budget.total(), 40);
    }

    #[test]
    fn consume_decrements() {
        let mut budget = InteractionBudget::from_counts(vec![2, 1]);
        budget.consume(a(0));
        budget.consume(a(1));
        assert_eq!(budget.left(a(0)), 1);
        assert_eq!(budget.left(a(1)), 0);
        assert_eq!(budget.total(), 1);
    }
}

// ── Day ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod day {
    use super::*;
    use crate::{DayState, InteractionProbabilities, ScheduleError, mutual_acceptance, simulate_day};

    #[test]
    fn pair_that_likes_each_other_becomes_friends() {
        let agents = uniform_agents(2, 5, 1);
        let likes = LikeScoreMatrix::filled(2, 1.0);
        let mut graph = FriendGraph::new(2);
        let mut rng = SimRng::new(9);

        let outcome = simulate_day(&ctx(&agents, &likes, 1, 2), &mut graph, &mut rng).unwrap();
        assert_eq!(outcome.new_friendships, 1);
        assert!(graph.are_friends(a(0), a(1)));
    }

    #[test]
    fn pair_below_threshold_never_befriends() {
        let agents = uniform_agents(2, 5, 1);
        let likes = LikeScoreMatrix::filled(2, 0.0);
        let mut graph = FriendGraph::new(2);
        let mut rng = SimRng::new(9);

        for _ in 0..10 {
            let outcome = simulate_day(&ctx(&agents, &likes, 1, 5), &mut graph, &mut rng).unwrap();
            assert_eq!(outcome.new_friendships, 0);
        }
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn acceptance_needs_both_sides() {
        let agents = uniform_agents(2, 5, 1);
        let likes = LikeScoreMatrix::from_rows(vec![vec![0.0, 0.9], vec![0.2, 0.0]]).unwrap();
        let c = ctx(&agents, &likes, 1, 2);
        assert!(!mutual_acceptance(&c, a(0), a(1)));

        let likes = LikeScoreMatrix::from_rows(vec![vec![0.0, 0.5], vec![0.5, 0.0]]).unwrap();
        let c = ctx(&agents, &likes, 1, 2);
        assert!(mutual_acceptance(&c, a(0), a(1)), "threshold is inclusive");
    }

    #[test]
    fn single_capacity_trio_forms_exactly_one_friendship() {
        for seed in 0..20 {
            let agents = uniform_agents(3, 1, seed);
            let likes = LikeScoreMatrix::filled(3, 1.0);
            let mut graph = FriendGraph::new(3);
            let mut rng = SimRng::new(seed);

            let outcome = simulate_day(&ctx(&agents, &likes, 1, 4), &mut graph, &mut rng).unwrap();
            assert_eq!(outcome.new_friendships, 1, "seed {seed}");
            assert_eq!(graph.edge_count(), 1);
        }
    }

    #[test]
    fn friendships_reach_probabilities_the_next_day() {
        let agents = uniform_agents(4, 5, 3);
        let likes = LikeScoreMatrix::filled(4, 1.0);
        let mut graph = FriendGraph::new(4);
        graph.add_friendship(a(0), a(1)).unwrap();
        let mut rng = SimRng::new(31);
        let c = ctx(&agents, &likes, 2, 4);
        let weights = InteractionWeights::default();

        let mut formed = false;
        for _ in 0..10 {
            let at_start = InteractionProbabilities::build(&graph, weights);
            let state = DayState::prepare(&c, &graph, &mut rng).unwrap();
            assert_eq!(state.probabilities, at_start);

            let outcome = state.process(&c, &mut graph, &mut rng).unwrap();
            if outcome.new_friendships > 0 {
                assert_ne!(InteractionProbabilities::build(&graph, weights), at_start);
                formed = true;
                break;
            }
        }
        assert!(formed, "mutual likes of 1.0 should form a friendship within ten days");
    }

    #[test]
    fn exhausted_partner_declines() {
        let agents = uniform_agents(2, 5, 1);
        let likes = LikeScoreMatrix::filled(2, 1.0);
        let mut graph = FriendGraph::new(2);
        let mut rng = SimRng::new(4);
        let c = ctx(&agents, &likes, 1, 2);

        let mut state = DayState::prepare(&c, &graph, &mut rng).unwrap();
        state.budget = crate::InteractionBudget::from_counts(vec![3, 0]);
        let outcome = state.process(&c, &mut graph, &mut rng).unwrap();

        assert_eq!(outcome.proposals, 3);
        assert_eq!(outcome.declined, 3);
        assert_eq!(outcome.encounters, 0);
        assert_eq!(outcome.skipped_agents, 1);
        assert_eq!(outcome.new_friendships, 0);
    }

    #[test]
    fn capacity_holds_over_many_days() {
        let mut rng = SimRng::new(77);
        let agents = AgentStoreBuilder::new(40)
            .max_friends_range(1, 4)
            .build(&mut rng)
            .unwrap();
        let likes = LikeScoreMatrix::compute(&agents, ScoreRange::new(0.4, 1.0), &mut rng);
        let mut graph = FriendGraph::new(40);
        let c = ctx(&agents, &likes, 5, 30);

        let mut edges = 0;
        for _ in 0..15 {
            let outcome = simulate_day(&c, &mut graph, &mut rng).unwrap();
            assert_eq!(graph.edge_count(), edges + outcome.new_friendships as usize);
            edges = graph.edge_count();
            for id in agents.agent_ids() {
                assert!(graph.degree(id) <= agents.max_friends[id.index()] as usize);
            }
        }
    }

    #[test]
    fn same_seed_same_day() {
        let run = || {
            let agents = uniform_agents(25, 6, 5);
            let likes = LikeScoreMatrix::filled(25, 0.7);
            let mut graph = FriendGraph::new(25);
            let mut rng = SimRng::new(123);
            simulate_day(&ctx(&agents, &likes, 2, 8), &mut graph, &mut rng).unwrap();
            graph.edges().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn mismatched_graph_rejected() {
        let agents = uniform_agents(3, 2, 1);
        let likes = LikeScoreMatrix::filled(3, 1.0);
        let mut graph = FriendGraph::new(4);
        let mut rng = SimRng::new(1);
        assert!(matches!(
            simulate_day(&ctx(&agents, &likes, 1, 2), &mut graph, &mut rng),
            Err(ScheduleError::SizeMismatch { expected: 3, got: 4, .. })
        ));
    }
}
