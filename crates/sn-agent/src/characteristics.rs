//! Fixed per-agent traits.
//!
//! The schema never varies: every agent has exactly one age, one gender, one
//! race, and four distinct hobbies.  Values are validated once, at
//! construction, so downstream code can index preference vectors without
//! bounds anxiety.

use sn_core::SimRng;

use crate::{AgentError, AgentResult};

/// Youngest possible age (inclusive).
pub const MIN_AGE: u8 = 18;
/// Oldest possible age (inclusive).
pub const MAX_AGE: u8 = 50;
/// Number of distinct ages, and the length of the age preference vector.
pub const AGE_SLOTS: usize = (MAX_AGE - MIN_AGE) as usize + 1;
/// Number of gender values (`0` and `1`).
pub const GENDERS: usize = 2;
/// Number of race values (`0..=5`).
pub const RACES: usize = 6;
/// Size of the hobby universe (`0..=19`).
pub const HOBBY_SLOTS: usize = 20;
/// Hobbies held by every agent.
pub const HOBBIES_PER_AGENT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Characteristics {
    age:     u8,
    gender:  u8,
    race:    u8,
    /// Sorted ascending, all distinct.
    hobbies: [u8; HOBBIES_PER_AGENT],
}

impl Characteristics {
    /// Validate and build.  Hobbies may be given in any order.
    pub fn new(
        age:     u8,
        gender:  u8,
        race:    u8,
        hobbies: [u8; HOBBIES_PER_AGENT],
    ) -> AgentResult<Self> {
        check_range("age", age, MIN_AGE, MAX_AGE)?;
        check_range("gender", gender, 0, GENDERS as u8 - 1)?;
        check_range("race", race, 0, RACES as u8 - 1)?;

        let mut hobbies = hobbies;
        hobbies.sort_unstable();
        for (i, &h) in hobbies.iter().enumerate() {
            check_range("hobby", h, 0, HOBBY_SLOTS as u8 - 1)?;
            if i > 0 && hobbies[i - 1] == h {
                return Err(AgentError::DuplicateHobby(h));
            }
        }

        Ok(Self { age, gender, race, hobbies })
    }

    /// Draw age, gender, race, then four hobbies without replacement.
    pub fn random(rng: &mut SimRng) -> Self {
        let age = rng.gen_range(MIN_AGE..=MAX_AGE);
        let gender = rng.gen_range(0..GENDERS as u8);
        let race = rng.gen_range(0..RACES as u8);

        let picks = rng.sample_distinct(HOBBY_SLOTS, HOBBIES_PER_AGENT);
        let mut hobbies = [0u8; HOBBIES_PER_AGENT];
        for (slot, pick) in hobbies.iter_mut().zip(picks) {
            *slot = pick as u8;
        }
        hobbies.sort_unstable();

        Self { age, gender, race, hobbies }
    }

    #[inline]
    pub fn age(&self) -> u8 {
        self.age
    }

    /// Age as an index into an age-keyed vector (`age - 18`).
    #[inline]
    pub fn age_slot(&self) -> usize {
        (self.age - MIN_AGE) as usize
    }

    #[inline]
    pub fn gender(&self) -> u8 {
        self.gender
    }

    #[inline]
    pub fn race(&self) -> u8 {
        self.race
    }

    #[inline]
    pub fn hobbies(&self) -> &[u8; HOBBIES_PER_AGENT] {
        &self.hobbies
    }

    #[inline]
    pub fn has_hobby(&self, hobby: u8) -> bool {
        self.hobbies.binary_search(&hobby).is_ok()
    }

    /// Number of hobbies held by both `self` and `other`.
    pub fn shared_hobbies(&self, other: &Characteristics) -> usize {
        self.hobbies.iter().filter(|&&h| other.has_hobby(h)).count()
    }
}

fn check_range(field: &'static str, value: u8, min: u8, max: u8) -> AgentResult<()> {
    if value < min || value > max {
        return Err(AgentError::OutOfRange {
            field,
            value: value as u32,
            min:   min as u32,
            max:   max as u32,
        });
    }
    Ok(())
}
