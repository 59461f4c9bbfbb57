//! Preference parameters and the vectors derived from them.
//!
//! Each agent draws seven scalars once.  They are expanded into four lookup
//! vectors keyed by the *other* agent's attribute value, so a like-score term
//! is a single indexed read.

use sn_core::SimRng;

use crate::characteristics::{AGE_SLOTS, Characteristics, GENDERS, HOBBY_SLOTS, MIN_AGE, RACES};

/// The seven scalars an agent's preferences are derived from.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreferenceParams {
    /// Bonus toward someone of exactly the same age, in `[0, 0.05)`.
    pub same_age_bonus:      f64,
    /// Penalty per year of age difference, in `[0, 0.01)`.
    pub age_diff_penalty:    f64,
    /// Bonus toward the same gender, in `[0, 0.05)`.
    pub same_gender_bonus:   f64,
    /// Modifier toward the other gender, in `[-0.05, 0.05)`.
    pub opposite_gender_mod: f64,
    /// Bonus toward the same race, in `[0, 0.05)`.
    pub same_race_bonus:     f64,
    /// Modifier toward every other race, in `(-0.05, 0]`.
    pub other_race_penalty:  f64,
    /// Bonus per shared hobby, in `[0, 0.05)`.
    pub same_hobby_bonus:    f64,
}

impl PreferenceParams {
    /// Draw all seven scalars, age pair first, then gender, race, hobby.
    pub fn random(rng: &mut SimRng) -> Self {
        let same_age_bonus = rng.uniform(0.0, 0.05);
        let age_diff_penalty = rng.uniform(0.0, 0.01);
        let same_gender_bonus = rng.uniform(0.0, 0.05);
        let opposite_gender_mod = rng.uniform(-0.05, 0.05);
        let same_race_bonus = rng.uniform(0.0, 0.05);
        let other_race_penalty = -rng.uniform(0.0, 0.05);
        let same_hobby_bonus = rng.uniform(0.0, 0.05);

        Self {
            same_age_bonus,
            age_diff_penalty,
            same_gender_bonus,
            opposite_gender_mod,
            same_race_bonus,
            other_race_penalty,
            same_hobby_bonus,
        }
    }
}

/// An agent's preference lookup vectors plus the scalars they came from.
///
/// Not serialised: the vectors are a pure function of `params` and the
/// owner's characteristics, so persist those and call [`Preferences::derive`].
#[derive(Clone, Debug, PartialEq)]
pub struct Preferences {
    pub params: PreferenceParams,
    /// Indexed by `age - 18`.
    pub age:    [f64; AGE_SLOTS],
    pub gender: [f64; GENDERS],
    pub race:   [f64; RACES],
    pub hobby:  [f64; HOBBY_SLOTS],
}

impl Preferences {
    /// Expand `params` relative to the owner's own characteristics.
    pub fn derive(own: &Characteristics, params: PreferenceParams) -> Self {
        let own_age = own.age() as f64;
        let mut age = [0.0; AGE_SLOTS];
        for (slot, value) in age.iter_mut().enumerate() {
            let other_age = (MIN_AGE as usize + slot) as f64;
            *value = params.same_age_bonus - (own_age - other_age).abs() * params.age_diff_penalty;
        }

        let mut gender = [params.opposite_gender_mod; GENDERS];
        gender[own.gender() as usize] = params.same_gender_bonus;

        let mut race = [params.other_race_penalty; RACES];
        race[own.race() as usize] = params.same_race_bonus;

        let mut hobby = [0.0; HOBBY_SLOTS];
        for &h in own.hobbies() {
            hobby[h as usize] = params.same_hobby_bonus;
        }

        Self { params, age, gender, race, hobby }
    }

    /// Draw fresh parameters and derive the vectors.
    pub fn random(own: &Characteristics, rng: &mut SimRng) -> Self {
        Self::derive(own, PreferenceParams::random(rng))
    }
}
