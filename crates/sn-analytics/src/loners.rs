//! Statistics over agents with no friends at all.

use sn_agent::{AgentStore, PreferenceParams};
use sn_agent::characteristics::{AGE_SLOTS, RACES};
use sn_graph::FriendGraph;

use crate::AnalyticsResult;
use crate::error::check_sizes;

/// Loner counts and distributions.
///
/// Histograms are fractions of the loner count and are all zero when there
/// are no loners.
#[derive(Clone, Debug, PartialEq)]
pub struct LonerStats {
    pub count:          usize,
    /// Indexed by `age - 18`.
    pub age_histogram:  [f64; AGE_SLOTS],
    pub race_histogram: [f64; RACES],
    /// `None` when there are no loners.
    pub averages:       Option<LonerAverages>,
}

/// Mean friend threshold and preference scalars over all loners.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LonerAverages {
    pub friend_threshold: f64,
    pub preferences:      PreferenceParams,
}

impl LonerStats {
    /// Fails with `SizeMismatch` when `graph` was built for another population.
    pub fn compute(agents: &AgentStore, graph: &FriendGraph) -> AnalyticsResult<Self> {
        check_sizes(agents, graph)?;
        let mut age_histogram = [0.0; AGE_SLOTS];
        let mut race_histogram = [0.0; RACES];
        let mut threshold = 0.0;
        let mut p = PreferenceParams::default();
        let mut count = 0usize;

        for agent in graph.isolated() {
            let i = agent.index();
            let chars = &agents.characteristics[i];
            age_histogram[chars.age_slot()] += 1.0;
            race_histogram[chars.race() as usize] += 1.0;

            threshold += agents.friend_threshold[i];
            let q = &agents.preferences[i].params;
            p.same_age_bonus += q.same_age_bonus;
            p.age_diff_penalty += q.age_diff_penalty;
            p.same_gender_bonus += q.same_gender_bonus;
            p.opposite_gender_mod += q.opposite_gender_mod;
            p.same_race_bonus += q.same_race_bonus;
            p.other_race_penalty += q.other_race_penalty;
            p.same_hobby_bonus += q.same_hobby_bonus;
            count += 1;
        }

        if count == 0 {
            return Ok(Self { count, age_histogram, race_histogram, averages: None });
        }

        let n = count as f64;
        age_histogram.iter_mut().chain(race_histogram.iter_mut()).for_each(|h| *h /= n);
        let averages = LonerAverages {
            friend_threshold: threshold / n,
            preferences: PreferenceParams {
                same_age_bonus:      p.same_age_bonus / n,
                age_diff_penalty:    p.age_diff_penalty / n,
                same_gender_bonus:   p.same_gender_bonus / n,
                opposite_gender_mod: p.opposite_gender_mod / n,
                same_race_bonus:     p.same_race_bonus / n,
                other_race_penalty:  p.other_race_penalty / n,
                same_hobby_bonus:    p.same_hobby_bonus / n,
            },
        };
        Ok(Self { count, age_histogram, race_histogram, averages: Some(averages) })
    }
}
