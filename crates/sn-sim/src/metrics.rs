//! Append-only per-day metrics and end-of-run summaries.

use std::collections::BTreeMap;

use sn_agent::PreferenceParams;
use sn_core::Day;

/// Metric names as recorded in [`MetricsStore`].
///
/// Loner averages and the two central-agent profiles are recorded under
/// dotted keys built with [`key`], e.g. `loner.same_hobby_bonus` or
/// `most_central.age`.
pub mod metric {
    pub const NEW_FRIENDSHIPS: &str = "new_friendships";
    pub const TOTAL_FRIENDSHIPS: &str = "total_friendships";
    pub const PROPOSALS: &str = "proposals";
    pub const DECLINED: &str = "declined";

    pub const FRIEND_GROUPS: &str = "friend_groups";
    pub const MEAN_GROUP_SIZE: &str = "mean_group_size";
    pub const MEAN_SEPARATION: &str = "mean_separation";
    pub const MIN_SEPARATION: &str = "min_separation";
    pub const MAX_SEPARATION: &str = "max_separation";
    pub const MAX_DISTANCE: &str = "max_distance";
    pub const MEAN_FRIENDS_LARGEST_GROUP: &str = "mean_friends_largest_group";
    pub const LONERS: &str = "loners";

    pub const LONER: &str = "loner";
    pub const MOST_CENTRAL: &str = "most_central";
    pub const LEAST_CENTRAL: &str = "least_central";

    /// `prefix.name`
    pub fn key(prefix: &str, name: &str) -> String {
        format!("{prefix}.{name}")
    }
}

/// The seven preference scalars under their metric names.
pub(crate) fn param_values(p: &PreferenceParams) -> [(&'static str, f64); 7] {
    [
        ("same_age_bonus", p.same_age_bonus),
        ("age_diff_penalty", p.age_diff_penalty),
        ("same_gender_bonus", p.same_gender_bonus),
        ("opposite_gender_mod", p.opposite_gender_mod),
        ("same_race_bonus", p.same_race_bonus),
        ("other_race_penalty", p.other_race_penalty),
        ("same_hobby_bonus", p.same_hobby_bonus),
    ]
}

// ── DayMetrics ────────────────────────────────────────────────────────────────

/// Everything measured at the end of one day, in recording order.
///
/// `None` marks a value that could not be measured (e.g. separation before
/// any friend group exists).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DayMetrics {
    pub day:    Day,
    pub values: Vec<(String, Option<f64>)>,
}

impl DayMetrics {
    pub fn new(day: Day) -> Self {
        Self { day, values: Vec::new() }
    }

    pub fn push(&mut self, key: impl Into<String>, value: Option<f64>) {
        self.values.push((key.into(), value));
    }

    /// `None` if `key` was not recorded today; `Some(None)` if it was
    /// recorded as not measurable.
    pub fn get(&self, key: &str) -> Option<Option<f64>> {
        self.values.iter().find(|(k, _)| k == key).map(|&(_, v)| v)
    }
}

// ── MetricsStore ──────────────────────────────────────────────────────────────

/// Append-only history keyed by metric name.
///
/// Daily counters get one entry per day; analytics metrics only on the days
/// the analytics ran, so every entry carries its day.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsStore {
    series: BTreeMap<String, Vec<(Day, Option<f64>)>>,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, metrics: &DayMetrics) {
        for (key, value) in &metrics.values {
            self.series
                .entry(key.clone())
                .or_default()
                .push((metrics.day, *value));
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Metric names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.keys().map(String::as_str)
    }

    /// Full history of `key`, oldest first.
    pub fn series(&self, key: &str) -> Option<&[(Day, Option<f64>)]> {
        self.series.get(key).map(Vec::as_slice)
    }

    /// Most recent value of `key`.
    pub fn latest(&self, key: &str) -> Option<Option<f64>> {
        self.series.get(key)?.last().map(|&(_, v)| v)
    }

    /// The last value of every metric.
    pub fn summary(&self) -> RunSummary {
        let values = self
            .series
            .iter()
            .filter_map(|(k, s)| s.last().map(|&(_, v)| (k.clone(), v)))
            .collect();
        RunSummary { values }
    }
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// End-of-run dictionary: the last recorded value of each metric.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub values: BTreeMap<String, Option<f64>>,
}

impl RunSummary {
    /// Value of `key`, or `None` if missing or not measurable.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied().flatten()
    }

    /// Key-wise mean over several runs.  For each key, `None` entries (and
    /// runs missing the key) are skipped; a key with no measurable value in
    /// any run averages to `None`.
    pub fn average(runs: &[RunSummary]) -> RunSummary {
        let mut acc: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        for run in runs {
            for (key, value) in &run.values {
                let slot = acc.entry(key.clone()).or_insert((0.0, 0));
                if let Some(v) = value {
                    slot.0 += v;
                    slot.1 += 1;
                }
            }
        }
        let values = acc
            .into_iter()
            .map(|(k, (sum, n))| (k, (n > 0).then(|| sum / n as f64)))
            .collect();
        RunSummary { values }
    }
}
