/// Quiz answers and their parsed form.
///
/// Raw answers are free text keyed by question id. Parsing never fails: every question
/// resolves to a `Choice` which is either unanswered, unrecognized, or one of the
/// question's known options. Matching is case-insensitive and accepts short forms
/// ("hot", "small") as well as the full catalog labels.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::questions::{self, canonical_question_id};

/// Question id to selected option, as posted by the quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The answer for a canonical question id. An exact key wins over an alias.
    pub fn answer(&self, question_id: &str) -> Option<&str> {
        if let Some(answer) = self.0.get(question_id) {
            return Some(answer.as_str());
        }
        self.0
            .iter()
            .find(|(key, _)| canonical_question_id(key) == question_id)
            .map(|(_, answer)| answer.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A question's option set, matched by ordered keyword containment.
///
/// Keyword order matters where one option's label contains another's keyword
/// ("Extra large" before "large").
pub trait Answer: Copy + 'static {
    const OPTIONS: &'static [(&'static str, Self)];

    fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        Self::OPTIONS
            .iter()
            .find(|(keyword, _)| normalized.contains(keyword))
            .map(|(_, option)| *option)
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().replace('\u{2019}', "'")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    Unanswered,
    Unrecognized,
    Selected(T),
}

impl<T: Answer> Choice<T> {
    fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Choice::Unanswered,
            Some(raw) => T::parse(raw).map_or(Choice::Unrecognized, Choice::Selected),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivingSituation {
    Apartment,
    SmallYard,
    LargeYard,
}

impl Answer for LivingSituation {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("apartment", Self::Apartment),
        ("small", Self::SmallYard),
        ("large", Self::LargeYard),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    Moderate,
    VeryActive,
}

impl Answer for ActivityLevel {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("sedentary", Self::Sedentary),
        ("moderate", Self::Moderate),
        ("active", Self::VeryActive),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeCommitment {
    Minimal,
    Moderate,
    Extensive,
}

impl Answer for TimeCommitment {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("minimal", Self::Minimal),
        ("moderate", Self::Moderate),
        ("extensive", Self::Extensive),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    FirstTime,
    Intermediate,
    Expert,
}

impl Answer for Experience {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("first", Self::FirstTime),
        ("novice", Self::FirstTime),
        ("some", Self::Intermediate),
        ("very", Self::Expert),
        ("experienced", Self::Expert),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilySituation {
    Single,
    Couple,
    YoungChildren,
    OlderChildren,
    Seniors,
}

impl Answer for FamilySituation {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("young", Self::YoungChildren),
        ("older", Self::OlderChildren),
        ("senior", Self::Seniors),
        ("single", Self::Single),
        ("couple", Self::Couple),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherPets {
    NoPets,
    Dogs,
    Cats,
    SmallAnimals,
}

impl Answer for OtherPets {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("no other", Self::NoPets),
        ("none", Self::NoPets),
        ("dog", Self::Dogs),
        ("cat", Self::Cats),
        ("small", Self::SmallAnimals),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroomingPreference {
    Low,
    Regular,
    Extensive,
}

impl Answer for GroomingPreference {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("low", Self::Low),
        ("regular", Self::Regular),
        ("extensive", Self::Extensive),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheddingTolerance {
    NoShedding,
    Tolerant,
    Heavy,
}

impl Answer for SheddingTolerance {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("no shedding", Self::NoShedding),
        ("minimal", Self::NoShedding),
        ("some", Self::Tolerant),
        ("heavy", Self::Heavy),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePreference {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl Answer for SizePreference {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("extra", Self::ExtraLarge),
        ("small", Self::Small),
        ("medium", Self::Medium),
        ("large", Self::Large),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainabilityImportance {
    Very,
    Somewhat,
    NotImportant,
}

impl Answer for TrainabilityImportance {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("not", Self::NotImportant),
        ("very", Self::Very),
        ("somewhat", Self::Somewhat),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyLevel {
    Low,
    Moderate,
    High,
}

impl Answer for EnergyLevel {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("low", Self::Low),
        ("moderate", Self::Moderate),
        ("high", Self::High),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarkingTolerance {
    Minimal,
    Tolerant,
    Frequent,
}

impl Answer for BarkingTolerance {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("minimal", Self::Minimal),
        ("some", Self::Tolerant),
        ("frequent", Self::Frequent),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Climate {
    Cold,
    Moderate,
    Hot,
}

impl Answer for Climate {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("cold", Self::Cold),
        ("moderate", Self::Moderate),
        ("temperate", Self::Moderate),
        ("hot", Self::Hot),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifestyle {
    Cuddling,
    Walks,
    Running,
    Hiking,
    DogSports,
}

impl Answer for Lifestyle {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("cuddl", Self::Cuddling),
        ("walk", Self::Walks),
        ("jog", Self::Running),
        ("run", Self::Running),
        ("hik", Self::Hiking),
        ("sport", Self::DogSports),
        ("agility", Self::DogSports),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthConcern {
    NoConcerns,
    Hypoallergenic,
    MinimalHealthIssues,
}

impl Answer for HealthConcern {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("no specific", Self::NoConcerns),
        ("hypoallergenic", Self::Hypoallergenic),
        ("minimal", Self::MinimalHealthIssues),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionPreference {
    PreferRecognized,
    Indifferent,
    OpenToAll,
}

impl Answer for RecognitionPreference {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("yes", Self::PreferRecognized),
        ("no preference", Self::Indifferent),
        ("open", Self::OpenToAll),
    ];
}

/// Every quiz question resolved to a `Choice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub living_situation: Choice<LivingSituation>,
    pub activity_level: Choice<ActivityLevel>,
    pub time_commitment: Choice<TimeCommitment>,
    pub experience: Choice<Experience>,
    pub family_situation: Choice<FamilySituation>,
    pub other_pets: Choice<OtherPets>,
    pub grooming_preference: Choice<GroomingPreference>,
    pub shedding_tolerance: Choice<SheddingTolerance>,
    pub size_preference: Choice<SizePreference>,
    pub trainability_importance: Choice<TrainabilityImportance>,
    pub energy_level: Choice<EnergyLevel>,
    pub barking_tolerance: Choice<BarkingTolerance>,
    pub climate: Choice<Climate>,
    pub lifestyle: Choice<Lifestyle>,
    pub health_concerns: Choice<HealthConcern>,
    pub official_recognition: Choice<RecognitionPreference>,
}

impl Preferences {
    pub fn from_answers(answers: &AnswerSet) -> Self {
        let preferences = Self {
            living_situation: Choice::from_raw(answers.answer(questions::LIVING_SITUATION)),
            activity_level: Choice::from_raw(answers.answer(questions::ACTIVITY_LEVEL)),
            time_commitment: Choice::from_raw(answers.answer(questions::TIME_COMMITMENT)),
            experience: Choice::from_raw(answers.answer(questions::EXPERIENCE)),
            family_situation: Choice::from_raw(answers.answer(questions::FAMILY_SITUATION)),
            other_pets: Choice::from_raw(answers.answer(questions::OTHER_PETS)),
            grooming_preference: Choice::from_raw(answers.answer(questions::GROOMING_PREFERENCE)),
            shedding_tolerance: Choice::from_raw(answers.answer(questions::SHEDDING_TOLERANCE)),
            size_preference: Choice::from_raw(answers.answer(questions::SIZE_PREFERENCE)),
            trainability_importance: Choice::from_raw(
                answers.answer(questions::TRAINABILITY_IMPORTANCE),
            ),
            energy_level: Choice::from_raw(answers.answer(questions::ENERGY_LEVEL)),
            barking_tolerance: Choice::from_raw(answers.answer(questions::BARKING_TOLERANCE)),
            climate: Choice::from_raw(answers.answer(questions::CLIMATE)),
            lifestyle: Choice::from_raw(answers.answer(questions::LIFESTYLE)),
            health_concerns: Choice::from_raw(answers.answer(questions::HEALTH_CONCERNS)),
            official_recognition: Choice::from_raw(
                answers.answer(questions::OFFICIAL_RECOGNITION),
            ),
        };
        debug!(
            answered = answers.len(),
            unrecognized = preferences.unrecognized_count(),
            "quiz answers parsed"
        );
        preferences
    }

    fn unrecognized_count(&self) -> usize {
        [
            matches!(self.living_situation, Choice::Unrecognized),
            matches!(self.activity_level, Choice::Unrecognized),
            matches!(self.time_commitment, Choice::Unrecognized),
            matches!(self.experience, Choice::Unrecognized),
            matches!(self.family_situation, Choice::Unrecognized),
            matches!(self.other_pets, Choice::Unrecognized),
            matches!(self.grooming_preference, Choice::Unrecognized),
            matches!(self.shedding_tolerance, Choice::Unrecognized),
            matches!(self.size_preference, Choice::Unrecognized),
            matches!(self.trainability_importance, Choice::Unrecognized),
            matches!(self.energy_level, Choice::Unrecognized),
            matches!(self.barking_tolerance, Choice::Unrecognized),
            matches!(self.climate, Choice::Unrecognized),
            matches!(self.lifestyle, Choice::Unrecognized),
            matches!(self.health_concerns, Choice::Unrecognized),
            matches!(self.official_recognition, Choice::Unrecognized),
        ]
        .into_iter()
        .filter(|unrecognized| *unrecognized)
        .count()
    }
}
