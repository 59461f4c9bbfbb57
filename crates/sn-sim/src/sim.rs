//! The `Sim` context object and its day loop.

use sn_agent::{AgentStore, LikeScoreMatrix};
use sn_analytics::{
    AgentProfile, AnalyticsError, FriendGroups, LonerStats, SeparationStats, degree_of_separation,
};
use sn_core::{Day, SimConfig, SimRng};
use sn_graph::FriendGraph;
use sn_schedule::{DayContext, InteractionWeights, simulate_day};
use tracing::{debug, info};

use crate::metrics::{metric, param_values};
use crate::{DayMetrics, MetricsStore, RunSummary, SimObserver, SimResult};

/// One simulation run.
///
/// Owns the configuration, the single run RNG, the fixed population and
/// like scores, the growing friendship graph, and the metrics history.
/// Everything is read through accessors; only the day loop mutates.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    config:      SimConfig,
    rng:         SimRng,
    agents:      AgentStore,
    like_scores: LikeScoreMatrix,
    graph:       FriendGraph,
    /// Next day to simulate.
    day:         Day,
    metrics:     MetricsStore,
    /// Set once the exhausted population has been logged.
    exhausted_reported: bool,
}

impl Sim {
    pub(crate) fn from_parts(
        config:      SimConfig,
        rng:         SimRng,
        agents:      AgentStore,
        like_scores: LikeScoreMatrix,
        graph:       FriendGraph,
    ) -> Self {
        Self {
            config,
            rng,
            agents,
            like_scores,
            graph,
            day: Day::ZERO,
            metrics: MetricsStore::new(),
            exhausted_reported: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    #[inline]
    pub fn like_scores(&self) -> &LikeScoreMatrix {
        &self.like_scores
    }

    #[inline]
    pub fn graph(&self) -> &FriendGraph {
        &self.graph
    }

    #[inline]
    pub fn metrics(&self) -> &MetricsStore {
        &self.metrics
    }

    /// The next day to be simulated (equals the number of days done).
    #[inline]
    pub fn day(&self) -> Day {
        self.day
    }

    /// `true` once every agent holds `max_friends` friends.  Further days
    /// then form no friendships.
    pub fn is_exhausted(&self) -> bool {
        self.agents
            .agent_ids()
            .all(|id| self.graph.degree(id) >= self.agents.max_friends[id.index()] as usize)
    }

    /// Upper bound on proposals over the whole run, for timeout budgeting.
    #[inline]
    pub fn work_bound(&self) -> u64 {
        self.config.work_bound()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Simulate every remaining day up to `config.num_days`, then return the
    /// last recorded value of every metric.
    ///
    /// The analytics always run for the final day, whatever the interval.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        let end = Day(self.config.num_days);
        info!(from = %self.day, to = %end, "run started");

        while self.day < end {
            let is_last = self.day.next() == end;
            self.observed_day(is_last, observer)?;
        }

        let summary = self.metrics.summary();
        info!(
            days = self.day.0,
            friendships = self.graph.edge_count(),
            "run finished"
        );
        observer.on_sim_end(self.day, &summary);
        Ok(summary)
    }

    /// Simulate exactly `n` days from the current position (ignores
    /// `num_days`).
    pub fn run_days<O: SimObserver>(&mut self, n: u32, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_day(false, observer)?;
        }
        Ok(())
    }

    /// Simulate one day without observers.  Returns the metrics recorded for
    /// it.
    pub fn step_day(&mut self) -> SimResult<DayMetrics> {
        self.advance(false).map(|(metrics, _)| metrics)
    }

    // ── Day processing ────────────────────────────────────────────────────

    fn observed_day<O: SimObserver>(&mut self, force_analytics: bool, observer: &mut O) -> SimResult<()> {
        let day = self.day;
        observer.on_day_start(day);
        let (metrics, analysed) = self.advance(force_analytics)?;
        observer.on_day_end(&metrics, &self.graph);
        if analysed {
            observer.on_snapshot(day, &self.graph, &self.agents);
        }
        Ok(())
    }

    /// Simulate the current day, record its metrics and move to the next.
    /// The flag says whether the analytics ran.
    fn advance(&mut self, force_analytics: bool) -> SimResult<(DayMetrics, bool)> {
        let day = self.day;
        let weights = InteractionWeights {
            direct_friend:    self.config.direct_friend_weight,
            friend_of_friend: self.config.fof_weight,
        };
        let ctx = DayContext::new(
            &self.agents,
            &self.like_scores,
            weights,
            self.config.min_interactions_per_day,
            self.config.max_interactions_per_day,
        );
        let outcome = simulate_day(&ctx, &mut self.graph, &mut self.rng)?;

        let mut metrics = DayMetrics::new(day);
        metrics.push(metric::NEW_FRIENDSHIPS, Some(outcome.new_friendships as f64));
        metrics.push(metric::TOTAL_FRIENDSHIPS, Some(self.graph.edge_count() as f64));
        metrics.push(metric::PROPOSALS, Some(outcome.proposals as f64));
        metrics.push(metric::DECLINED, Some(outcome.declined as f64));

        // Days are counted from one here: interval 7 analyses after days 7, 14, …
        let analysed = force_analytics || day.next().is_multiple_of(self.config.analytics_interval_days);
        if analysed {
            self.analyse(&mut metrics)?;
        }

        info!(
            %day,
            new_friendships = outcome.new_friendships,
            total = self.graph.edge_count(),
            "day complete"
        );
        if !self.exhausted_reported && self.is_exhausted() {
            info!(%day, "every agent has reached its friend capacity");
            self.exhausted_reported = true;
        }

        self.metrics.record(&metrics);
        self.day = day.next();
        Ok((metrics, analysed))
    }

    /// Append the graph analytics for the current state to `metrics`.
    fn analyse(&self, metrics: &mut DayMetrics) -> SimResult<()> {
        let groups = FriendGroups::compute(&self.graph);
        metrics.push(metric::FRIEND_GROUPS, Some(groups.count() as f64));
        metrics.push(metric::MEAN_GROUP_SIZE, groups.summary().ok().map(|s| s.mean_size));

        let separation = match degree_of_separation(&self.graph, &groups) {
            Ok(s) => Some(s),
            Err(AnalyticsError::NoComponent) => None,
            Err(e) => return Err(e.into()),
        };
        push_separation(metrics, separation.as_ref());

        let loners = LonerStats::compute(&self.agents, &self.graph)?;
        push_loners(metrics, &loners);

        for (prefix, agent) in [
            (metric::MOST_CENTRAL, separation.map(|s| s.most_central)),
            (metric::LEAST_CENTRAL, separation.map(|s| s.least_central)),
        ] {
            let profile = agent
                .map(|a| AgentProfile::of(&self.agents, &self.graph, a))
                .transpose()?;
            push_profile(metrics, prefix, profile.as_ref());
        }

        debug!(day = %metrics.day, groups = groups.count(), loners = loners.count, "analytics");
        Ok(())
    }
}

// ── Metric recording helpers ──────────────────────────────────────────────────

fn push_separation(metrics: &mut DayMetrics, s: Option<&SeparationStats>) {
    metrics.push(metric::MEAN_SEPARATION, s.map(|s| s.mean));
    metrics.push(metric::MIN_SEPARATION, s.map(|s| s.min));
    metrics.push(metric::MAX_SEPARATION, s.map(|s| s.max));
    metrics.push(metric::MAX_DISTANCE, s.map(|s| s.max_distance as f64));
    metrics.push(metric::MEAN_FRIENDS_LARGEST_GROUP, s.map(|s| s.mean_friends));
}

fn push_loners(metrics: &mut DayMetrics, loners: &LonerStats) {
    metrics.push(metric::LONERS, Some(loners.count as f64));

    let avg = loners.averages.as_ref();
    metrics.push(
        metric::key(metric::LONER, "friend_threshold"),
        avg.map(|a| a.friend_threshold),
    );
    let params = param_values(&avg.map(|a| a.preferences).unwrap_or_default());
    for (name, value) in params {
        metrics.push(metric::key(metric::LONER, name), avg.map(|_| value));
    }
}

fn push_profile(metrics: &mut DayMetrics, prefix: &str, profile: Option<&AgentProfile>) {
    metrics.push(metric::key(prefix, "age"), profile.map(|p| p.age as f64));
    metrics.push(metric::key(prefix, "gender"), profile.map(|p| p.gender as f64));
    metrics.push(metric::key(prefix, "race"), profile.map(|p| p.race as f64));
    metrics.push(metric::key(prefix, "friends"), profile.map(|p| p.friends as f64));
    metrics.push(
        metric::key(prefix, "friend_threshold"),
        profile.map(|p| p.friend_threshold),
    );
    let params = param_values(&profile.map(|p| p.preferences).unwrap_or_default());
    for (name, value) in params {
        metrics.push(metric::key(prefix, name), profile.map(|_| value));
    }
}
