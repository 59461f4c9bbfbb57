//! Integration tests for sn-sim.

use sn_agent::{AgentStore, LikeScoreMatrix};
use sn_core::{Day, SimConfig};
use sn_graph::FriendGraph;

use crate::{DayMetrics, NoopObserver, RunSummary, Sim, SimBuilder, SimObserver, metric};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(num_agents: usize, num_days: u32) -> SimConfig {
    SimConfig {
        seed: 42,
        num_agents,
        min_friends_per_agent: 1,
        max_friends_per_agent: 5,
        min_interactions_per_day: 2,
        max_interactions_per_day: 10,
        num_days,
        analytics_interval_days: 1,
        ..SimConfig::default()
    }
}

/// A population where every pair is forced to like (or dislike) each other.
fn forced(num_agents: usize, max_friends: u32, like: f64) -> Sim {
    let config = SimConfig {
        min_friends_per_agent: max_friends,
        max_friends_per_agent: max_friends,
        min_interactions_per_day: 1,
        max_interactions_per_day: 4,
        ..test_config(num_agents, 5)
    };
    SimBuilder::new(config)
        .like_scores(LikeScoreMatrix::filled(num_agents, like))
        .build()
        .unwrap()
}

#[derive(Default)]
struct Counter {
    starts:    u32,
    ends:      u32,
    snapshots: Vec<Day>,
    finished:  Option<Day>,
}

impl SimObserver for Counter {
    fn on_day_start(&mut self, _day: Day) {
        self.starts += 1;
    }
    fn on_day_end(&mut self, _metrics: &DayMetrics, _graph: &FriendGraph) {
        self.ends += 1;
    }
    fn on_snapshot(&mut self, day: Day, _graph: &FriendGraph, _agents: &AgentStore) {
        self.snapshots.push(day);
    }
    fn on_sim_end(&mut self, final_day: Day, _summary: &RunSummary) {
        self.finished = Some(final_day);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;
    use sn_agent::{AgentError, AgentStoreBuilder};
    use sn_core::SimRng;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(test_config(20, 3)).build().unwrap();
        assert_eq!(sim.agents().count, 20);
        assert_eq!(sim.like_scores().len(), 20);
        assert_eq!(sim.graph().edge_count(), 0);
        assert_eq!(sim.day(), Day::ZERO);
        assert!(sim.metrics().is_empty());
    }

    #[test]
    fn invalid_config_rejected() {
        let config = SimConfig { num_agents: 1, ..SimConfig::default() };
        assert!(matches!(SimBuilder::new(config).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn like_score_size_mismatch_errors() {
        let result = SimBuilder::new(test_config(4, 1))
            .like_scores(LikeScoreMatrix::filled(3, 1.0))
            .build();
        assert!(matches!(
            result,
            Err(SimError::Agent(AgentError::SizeMismatch { matrix: 3, agents: 4 }))
        ));
    }

    #[test]
    fn agent_count_mismatch_errors() {
        let agents = AgentStoreBuilder::new(5).build(&mut SimRng::new(1)).unwrap();
        let result = SimBuilder::new(test_config(4, 1)).agents(agents).build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { got: 5, .. })));
    }

    #[test]
    fn work_bound_from_config() {
        let sim = SimBuilder::new(test_config(20, 3)).build().unwrap();
        assert_eq!(sim.work_bound(), 3 * 20 * 10);
    }
}

// ── Day loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod day_loop {
    use super::*;

    #[test]
    fn forced_failure_forms_nothing() {
        let mut sim = forced(2, 3, 0.0);
        let summary = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.graph().edge_count(), 0);
        assert_eq!(summary.get(metric::TOTAL_FRIENDSHIPS), Some(0.0));
        assert_eq!(summary.get(metric::FRIEND_GROUPS), Some(0.0));
        assert_eq!(summary.get(metric::MEAN_SEPARATION), None);
        assert_eq!(summary.get(metric::LONERS), Some(2.0));
    }

    #[test]
    fn forced_success_pair_befriends_once() {
        let mut sim = forced(2, 3, 1.0);
        let first = sim.step_day().unwrap();
        assert_eq!(first.get(metric::NEW_FRIENDSHIPS), Some(Some(1.0)));

        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.graph().edge_count(), 1);
    }

    #[test]
    fn single_capacity_trio_forms_one_friendship() {
        let mut sim = forced(3, 1, 1.0);
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.graph().edge_count(), 1);
        assert_eq!(sim.metrics().latest(metric::LONERS), Some(Some(1.0)));
    }

    #[test]
    fn exhausted_population_keeps_running() {
        let mut sim = forced(2, 1, 1.0);
        sim.step_day().unwrap();
        assert!(sim.is_exhausted());
        for _ in 0..3 {
            let m = sim.step_day().unwrap();
            assert_eq!(m.get(metric::NEW_FRIENDSHIPS), Some(Some(0.0)));
        }
    }

    #[test]
    fn friendships_only_grow_and_respect_capacity() {
        let mut sim = SimBuilder::new(test_config(40, 10)).build().unwrap();
        let mut previous = Vec::new();
        for _ in 0..10 {
            sim.step_day().unwrap();
            let edges = sim.graph().edges();
            assert!(edges.starts_with(&previous));
            previous = edges.to_vec();

            for id in sim.agents().agent_ids() {
                assert!(sim.graph().degree(id) <= sim.agents().max_friends[id.index()] as usize);
            }
        }
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed| {
            let config = SimConfig { seed, ..test_config(30, 6) };
            let mut sim = SimBuilder::new(config).build().unwrap();
            let summary = sim.run(&mut NoopObserver).unwrap();
            (sim.graph().edges().to_vec(), summary)
        };
        assert_eq!(run(7), run(7));
        assert_ne!(run(7).0, run(8).0);
    }

    #[test]
    fn run_stops_at_num_days_and_run_days_does_not() {
        let mut sim = SimBuilder::new(test_config(10, 3)).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.day(), Day(3));
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.day(), Day(3));

        sim.run_days(2, &mut NoopObserver).unwrap();
        assert_eq!(sim.day(), Day(5));
        assert_eq!(sim.metrics().series(metric::NEW_FRIENDSHIPS).unwrap().len(), 5);
    }
}

// ── Observer and analytics cadence ────────────────────────────────────────────

#[cfg(test)]
mod cadence {
    use super::*;

    #[test]
    fn observer_sees_every_day() {
        let mut sim = SimBuilder::new(test_config(10, 4)).build().unwrap();
        let mut counter = Counter::default();
        sim.run(&mut counter).unwrap();
        assert_eq!(counter.starts, 4);
        assert_eq!(counter.ends, 4);
        assert_eq!(counter.snapshots, vec![Day(0), Day(1), Day(2), Day(3)]);
        assert_eq!(counter.finished, Some(Day(4)));
    }

    #[test]
    fn zero_interval_analyses_final_day_only() {
        let config = SimConfig { analytics_interval_days: 0, ..test_config(15, 5) };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let mut counter = Counter::default();
        sim.run(&mut counter).unwrap();

        assert_eq!(counter.snapshots, vec![Day(4)]);
        let groups = sim.metrics().series(metric::FRIEND_GROUPS).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, Day(4));
        assert_eq!(sim.metrics().series(metric::PROPOSALS).unwrap().len(), 5);
    }

    #[test]
    fn interval_counts_completed_days() {
        let config = SimConfig { analytics_interval_days: 2, ..test_config(15, 5) };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let mut counter = Counter::default();
        sim.run(&mut counter).unwrap();
        // After days 2 and 4, plus the final day 5.
        assert_eq!(counter.snapshots, vec![Day(1), Day(3), Day(4)]);
    }

    #[test]
    fn profiles_recorded_under_dotted_keys() {
        let mut sim = forced(2, 3, 1.0);
        let summary = sim.run(&mut NoopObserver).unwrap();
        let key = metric::key(metric::MOST_CENTRAL, "friends");
        assert_eq!(summary.get(&key), Some(1.0));
        assert_eq!(summary.get(&metric::key(metric::LONER, "same_hobby_bonus")), None);
        assert!(summary.values.contains_key(&metric::key(metric::LEAST_CENTRAL, "age")));
    }
}

// ── Metrics store ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics_tests {
    use super::*;
    use crate::MetricsStore;

    #[test]
    fn store_is_append_only_per_key() {
        let mut store = MetricsStore::new();
        let mut d0 = DayMetrics::new(Day(0));
        d0.push("a", Some(1.0));
        d0.push("b", None);
        let mut d1 = DayMetrics::new(Day(1));
        d1.push("a", Some(3.0));
        store.record(&d0);
        store.record(&d1);

        assert_eq!(store.series("a").unwrap(), &[(Day(0), Some(1.0)), (Day(1), Some(3.0))]);
        assert_eq!(store.latest("b"), Some(None));
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["a", "b"]);

        let summary = store.summary();
        assert_eq!(summary.get("a"), Some(3.0));
        assert_eq!(summary.get("b"), None);
    }

    #[test]
    fn average_ignores_missing_values() {
        let run = |pairs: &[(&str, Option<f64>)]| RunSummary {
            values: pairs.iter().map(|&(k, v)| (k.to_owned(), v)).collect(),
        };
        let runs = [
            run(&[("x", Some(1.0)), ("y", None)]),
            run(&[("x", Some(3.0)), ("y", None)]),
            run(&[("x", None), ("z", Some(5.0))]),
        ];
        let avg = RunSummary::average(&runs);
        assert_eq!(avg.get("x"), Some(2.0));
        assert_eq!(avg.values.get("y"), Some(&None));
        assert_eq!(avg.get("z"), Some(5.0));
    }

    #[test]
    fn average_of_nothing_is_empty() {
        assert!(RunSummary::average(&[]).values.is_empty());
    }
}
