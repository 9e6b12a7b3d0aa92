/// Breed compatibility scoring.
///
/// Answers are parsed once into a `ScoringPlan`: a flat list of independent rules.
/// A breed's score is the sum of every rule's contribution, so the order in which
/// answers were given never matters. Rules that read a trait the breed does not have
/// (or that does not parse as a rating) contribute nothing.
use crate::answers::{
    ActivityLevel, AnswerSet, BarkingTolerance, Choice, Climate, EnergyLevel, Experience,
    FamilySituation, GroomingPreference, HealthConcern, Lifestyle, LivingSituation, OtherPets,
    Preferences, RecognitionPreference, SheddingTolerance, SizePreference, TimeCommitment,
    TrainabilityImportance,
};
use crate::model::{Breed, BreedTrait, ScoredBreed};

/// Number of breeds returned by a recommendation.
pub const TOP_N: usize = 10;

/// Flat bonus for a threshold match.
pub const THRESHOLD_BONUS: f64 = 10.0;
/// Gap between trait and target at which a graduated match is worth nothing.
pub const MAX_GAP: f64 = 5.0;
/// Target used when an answer to a graduated question is not recognized.
pub const MIDPOINT: f64 = 3.0;

const RECOGNIZED_BONUS: f64 = 10.0;
const RECOGNIZED_INDIFFERENT_BONUS: f64 = 2.0;

/// Contributions added for every breed regardless of answers.
const ALWAYS_ON: [Rule; 3] = [
    Rule::Weighted {
        breed_trait: BreedTrait::Adaptability,
        factor: 1.0,
    },
    Rule::Weighted {
        breed_trait: BreedTrait::Friendliness,
        factor: 1.0,
    },
    Rule::Weighted {
        breed_trait: BreedTrait::Playfulness,
        factor: 0.5,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// `max(MAX_GAP - |trait - target|, 0) * weight`
    Graduated {
        breed_trait: BreedTrait,
        target: f64,
        weight: f64,
    },
    /// `THRESHOLD_BONUS` when `trait <= cutoff`.
    AtMost { breed_trait: BreedTrait, cutoff: f64 },
    /// `THRESHOLD_BONUS` when `trait >= cutoff`.
    AtLeast { breed_trait: BreedTrait, cutoff: f64 },
    /// `trait * factor`
    Weighted { breed_trait: BreedTrait, factor: f64 },
    /// `bonus` when the breed is officially recognized.
    Recognized { bonus: f64 },
}

impl Rule {
    pub fn contribution(&self, breed: &Breed) -> f64 {
        match *self {
            Rule::Graduated {
                breed_trait,
                target,
                weight,
            } => breed
                .trait_value(breed_trait)
                .map_or(0.0, |value| graduated_match(value, target, weight)),
            Rule::AtMost { breed_trait, cutoff } => match breed.trait_value(breed_trait) {
                Ok(value) if value <= cutoff => THRESHOLD_BONUS,
                _ => 0.0,
            },
            Rule::AtLeast { breed_trait, cutoff } => match breed.trait_value(breed_trait) {
                Ok(value) if value >= cutoff => THRESHOLD_BONUS,
                _ => 0.0,
            },
            Rule::Weighted { breed_trait, factor } => breed
                .trait_value(breed_trait)
                .map_or(0.0, |value| value * factor),
            Rule::Recognized { bonus } => {
                if breed.is_officially_recognized() {
                    bonus
                } else {
                    0.0
                }
            }
        }
    }
}

/// Reward closeness between a trait and a target level. Non-increasing in the gap and
/// exactly zero once the gap reaches `MAX_GAP`.
pub fn graduated_match(value: f64, target: f64, weight: f64) -> f64 {
    (MAX_GAP - (value - target).abs()).max(0.0) * weight
}

/// The rules derived from one answer set, reusable across every breed in a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringPlan {
    rules: Vec<Rule>,
}

impl ScoringPlan {
    pub fn from_answers(answers: &AnswerSet) -> Self {
        Self::from_preferences(&Preferences::from_answers(answers))
    }

    pub fn from_preferences(p: &Preferences) -> Self {
        let mut rules = ALWAYS_ON.to_vec();
        rules.extend(living_situation(p.living_situation));
        rules.extend(experience(p.experience));
        rules.extend(activity_level(p.activity_level));
        rules.extend(time_commitment(p.time_commitment));
        rules.extend(family_situation(p.family_situation));
        rules.extend(other_pets(p.other_pets));
        rules.extend(grooming_preference(p.grooming_preference));
        rules.extend(shedding_tolerance(p.shedding_tolerance));
        rules.extend(trainability_importance(p.trainability_importance));
        rules.extend(barking_tolerance(p.barking_tolerance));
        rules.extend(climate(p.climate));
        rules.extend(lifestyle(p.lifestyle));
        rules.extend(health_concerns(p.health_concerns));
        rules.extend(official_recognition(p.official_recognition));
        rules.extend(size_preference(p.size_preference));
        rules.extend(energy_level(p.energy_level));
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn score(&self, breed: &Breed) -> f64 {
        self.rules.iter().map(|rule| rule.contribution(breed)).sum()
    }
}

/// Score one breed against one answer set.
pub fn score_breed(breed: &Breed, answers: &AnswerSet) -> f64 {
    ScoringPlan::from_answers(answers).score(breed)
}

/// Score every breed, order by score descending (identifier ascending on ties) and
/// keep the first `limit`.
pub fn rank_breeds(breeds: Vec<Breed>, answers: &AnswerSet, limit: usize) -> Vec<ScoredBreed> {
    let plan = ScoringPlan::from_answers(answers);
    let mut scored: Vec<ScoredBreed> = breeds
        .into_iter()
        .map(|breed| {
            let score = plan.score(&breed);
            ScoredBreed { breed, score }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.breed.id.cmp(&b.breed.id))
    });
    scored.truncate(limit);
    scored
}

fn graduated(breed_trait: BreedTrait, target: f64, weight: f64) -> Rule {
    Rule::Graduated {
        breed_trait,
        target,
        weight,
    }
}

fn at_most(breed_trait: BreedTrait, cutoff: f64) -> Rule {
    Rule::AtMost { breed_trait, cutoff }
}

fn at_least(breed_trait: BreedTrait, cutoff: f64) -> Rule {
    Rule::AtLeast { breed_trait, cutoff }
}

fn weighted(breed_trait: BreedTrait, factor: f64) -> Rule {
    Rule::Weighted { breed_trait, factor }
}

fn living_situation(choice: Choice<LivingSituation>) -> Vec<Rule> {
    match choice {
        Choice::Unanswered => vec![],
        Choice::Unrecognized => vec![graduated(BreedTrait::ApartmentLiving, MIDPOINT, 1.0)],
        Choice::Selected(LivingSituation::Apartment) => vec![
            graduated(BreedTrait::ApartmentLiving, 5.0, 2.0),
            at_most(BreedTrait::Size, 3.0),
        ],
        Choice::Selected(LivingSituation::SmallYard) => {
            vec![graduated(BreedTrait::ApartmentLiving, 3.0, 1.0)]
        }
        Choice::Selected(LivingSituation::LargeYard) => {
            vec![at_least(BreedTrait::ExerciseNeeds, 3.0)]
        }
    }
}

fn experience(choice: Choice<Experience>) -> Vec<Rule> {
    let target = match choice {
        Choice::Unanswered => return vec![],
        Choice::Unrecognized => MIDPOINT,
        Choice::Selected(Experience::FirstTime) => {
            return vec![
                graduated(BreedTrait::NoviceOwners, 5.0, 2.0),
                at_least(BreedTrait::EasyToTrain, 4.0),
            ]
        }
        Choice::Selected(Experience::Intermediate) => 3.0,
        Choice::Selected(Experience::Expert) => 1.0,
    };
    vec![graduated(BreedTrait::NoviceOwners, target, 2.0)]
}

fn activity_level(choice: Choice<ActivityLevel>) -> Vec<Rule> {
    match choice {
        Choice::Unanswered => vec![],
        Choice::Selected(ActivityLevel::Sedentary) => vec![at_most(BreedTrait::ExerciseNeeds, 2.0)],
        Choice::Selected(ActivityLevel::Moderate) | Choice::Unrecognized => {
            vec![graduated(BreedTrait::ExerciseNeeds, MIDPOINT, 2.0)]
        }
        Choice::Selected(ActivityLevel::VeryActive) => {
            vec![at_least(BreedTrait::ExerciseNeeds, 4.0)]
        }
    }
}

fn time_commitment(choice: Choice<TimeCommitment>) -> Vec<Rule> {
    let target = match choice {
        Choice::Unanswered => return vec![],
        Choice::Unrecognized => MIDPOINT,
        Choice::Selected(TimeCommitment::Minimal) => 5.0,
        Choice::Selected(TimeCommitment::Moderate) => 3.0,
        Choice::Selected(TimeCommitment::Extensive) => 1.0,
    };
    vec![graduated(BreedTrait::ToleratesBeingAlone, target, 1.5)]
}

fn family_situation(choice: Choice<FamilySituation>) -> Vec<Rule> {
    match choice {
        Choice::Selected(FamilySituation::YoungChildren) => {
            vec![weighted(BreedTrait::KidFriendly, 3.0)]
        }
        Choice::Selected(FamilySituation::OlderChildren) => {
            vec![weighted(BreedTrait::BestFamilyDogs, 2.0)]
        }
        Choice::Selected(FamilySituation::Seniors) => vec![at_most(BreedTrait::EnergyLevel, 2.0)],
        _ => vec![],
    }
}

fn other_pets(choice: Choice<OtherPets>) -> Vec<Rule> {
    match choice {
        Choice::Selected(OtherPets::Dogs) => vec![weighted(BreedTrait::DogFriendly, 3.0)],
        Choice::Selected(OtherPets::Cats) => vec![at_most(BreedTrait::PreyDrive, 2.0)],
        Choice::Selected(OtherPets::SmallAnimals) => {
            vec![graduated(BreedTrait::PreyDrive, 1.0, 2.0)]
        }
        _ => vec![],
    }
}

fn grooming_preference(choice: Choice<GroomingPreference>) -> Vec<Rule> {
    let target = match choice {
        Choice::Unanswered => return vec![],
        Choice::Unrecognized => MIDPOINT,
        Choice::Selected(GroomingPreference::Low) => 5.0,
        Choice::Selected(GroomingPreference::Regular) => 3.0,
        Choice::Selected(GroomingPreference::Extensive) => 1.0,
    };
    vec![graduated(BreedTrait::EasyToGroom, target, 2.0)]
}

fn shedding_tolerance(choice: Choice<SheddingTolerance>) -> Vec<Rule> {
    let target = match choice {
        Choice::Unanswered => return vec![],
        Choice::Unrecognized => MIDPOINT,
        Choice::Selected(SheddingTolerance::NoShedding) => {
            return vec![
                graduated(BreedTrait::Shedding, 1.0, 2.0),
                at_most(BreedTrait::Shedding, 2.0),
            ]
        }
        Choice::Selected(SheddingTolerance::Tolerant) => 3.0,
        Choice::Selected(SheddingTolerance::Heavy) => 5.0,
    };
    vec![graduated(BreedTrait::Shedding, target, 2.0)]
}

fn trainability_importance(choice: Choice<TrainabilityImportance>) -> Vec<Rule> {
    match choice {
        Choice::Selected(TrainabilityImportance::Very) => {
            vec![at_least(BreedTrait::EasyToTrain, 4.0)]
        }
        Choice::Selected(TrainabilityImportance::Somewhat) => {
            vec![graduated(BreedTrait::EasyToTrain, 3.0, 1.0)]
        }
        _ => vec![],
    }
}

fn barking_tolerance(choice: Choice<BarkingTolerance>) -> Vec<Rule> {
    let target = match choice {
        Choice::Unanswered => return vec![],
        Choice::Unrecognized => MIDPOINT,
        Choice::Selected(BarkingTolerance::Minimal) => {
            return vec![
                graduated(BreedTrait::TendencyToBark, 1.0, 2.0),
                at_most(BreedTrait::TendencyToBark, 2.0),
            ]
        }
        Choice::Selected(BarkingTolerance::Tolerant) => 3.0,
        Choice::Selected(BarkingTolerance::Frequent) => 5.0,
    };
    vec![graduated(BreedTrait::TendencyToBark, target, 2.0)]
}

fn climate(choice: Choice<Climate>) -> Vec<Rule> {
    let breed_trait = match choice {
        Choice::Selected(Climate::Cold) => BreedTrait::ToleratesColdWeather,
        Choice::Selected(Climate::Hot) => BreedTrait::ToleratesHotWeather,
        _ => return vec![],
    };
    vec![at_least(breed_trait, 4.0), graduated(breed_trait, 5.0, 1.0)]
}

fn lifestyle(choice: Choice<Lifestyle>) -> Vec<Rule> {
    match choice {
        Choice::Selected(Lifestyle::Cuddling) => vec![at_most(BreedTrait::EnergyLevel, 2.0)],
        Choice::Selected(Lifestyle::Walks) => vec![graduated(BreedTrait::ExerciseNeeds, 3.0, 1.0)],
        Choice::Selected(Lifestyle::Running) => vec![at_least(BreedTrait::ExerciseNeeds, 4.0)],
        Choice::Selected(Lifestyle::Hiking) => vec![
            at_least(BreedTrait::ExerciseNeeds, 4.0),
            at_least(BreedTrait::EnergyLevel, 4.0),
        ],
        Choice::Selected(Lifestyle::DogSports) => vec![
            at_least(BreedTrait::Intelligence, 4.0),
            at_least(BreedTrait::EasyToTrain, 4.0),
        ],
        _ => vec![],
    }
}

fn health_concerns(choice: Choice<HealthConcern>) -> Vec<Rule> {
    match choice {
        Choice::Selected(HealthConcern::Hypoallergenic) => vec![at_most(BreedTrait::Shedding, 1.0)],
        Choice::Selected(HealthConcern::MinimalHealthIssues) => {
            vec![weighted(BreedTrait::GeneralHealth, 2.0)]
        }
        _ => vec![],
    }
}

fn official_recognition(choice: Choice<RecognitionPreference>) -> Vec<Rule> {
    match choice {
        Choice::Selected(RecognitionPreference::PreferRecognized) => vec![Rule::Recognized {
            bonus: RECOGNIZED_BONUS,
        }],
        Choice::Selected(RecognitionPreference::Indifferent) => vec![Rule::Recognized {
            bonus: RECOGNIZED_INDIFFERENT_BONUS,
        }],
        _ => vec![],
    }
}

fn size_preference(choice: Choice<SizePreference>) -> Vec<Rule> {
    let target = match choice {
        Choice::Unanswered => return vec![],
        Choice::Unrecognized => MIDPOINT,
        Choice::Selected(SizePreference::Small) => 1.0,
        Choice::Selected(SizePreference::Medium) => 3.0,
        Choice::Selected(SizePreference::Large) => 4.0,
        Choice::Selected(SizePreference::ExtraLarge) => 5.0,
    };
    vec![graduated(BreedTrait::Size, target, 3.0)]
}

fn energy_level(choice: Choice<EnergyLevel>) -> Vec<Rule> {
    let target = match choice {
        Choice::Unanswered => return vec![],
        Choice::Unrecognized => MIDPOINT,
        Choice::Selected(EnergyLevel::Low) => 1.0,
        Choice::Selected(EnergyLevel::Moderate) => 3.0,
        Choice::Selected(EnergyLevel::High) => 5.0,
    };
    vec![graduated(BreedTrait::EnergyLevel, target, 2.0)]
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::questions::QUESTIONS;

    fn breed(value: Value) -> Breed {
        serde_json::from_value(value).expect("breed json")
    }

    fn answers(pairs: &[(&str, &str)]) -> AnswerSet {
        pairs.iter().copied().collect()
    }

    /// First answer of every catalog question.
    fn full_answer_set() -> AnswerSet {
        QUESTIONS.iter().map(|q| (q.id, q.answers[0])).collect()
    }

    fn rated(id: &str, rating: &str) -> Breed {
        let mut attributes = serde_json::Map::new();
        attributes.insert("_id".to_string(), json!(id));
        for key in [
            "Adaptability",
            "Adapts Well To Apartment Living",
            "Good For Novice Dog Owners",
            "Tolerates Being Alone",
            "Tolerates Cold Weather",
            "Tolerates Hot Weather",
            "All-around friendliness",
            "Kid-Friendly",
            "Dog Friendly",
            "Shedding",
            "Easy To Groom",
            "General Health",
            "Size",
            "Easy To Train",
            "Intelligence",
            "Prey Drive",
            "Tendency To Bark Or Howl",
            "Exercise Needs",
            "High Energy Level",
            "Potential For Playfulness",
        ] {
            attributes.insert(key.to_string(), json!(rating));
        }
        breed(Value::Object(attributes))
    }

    #[test]
    fn test_graduated_match_shape() {
        assert_eq!(graduated_match(3.0, 3.0, 2.0), 10.0);
        assert_eq!(graduated_match(1.0, 3.0, 2.0), 6.0);
        assert_eq!(graduated_match(8.0, 3.0, 2.0), 0.0);
        assert_eq!(graduated_match(9.0, 3.0, 2.0), 0.0);

        let mut previous = f64::INFINITY;
        for step in 0..=20 {
            let gap = step as f64 * 0.5;
            let value = graduated_match(1.0 + gap, 1.0, 1.5);
            assert!(value <= previous, "gap {gap} increased the contribution");
            assert!(value >= 0.0);
            if gap >= MAX_GAP {
                assert_eq!(value, 0.0);
            }
            previous = value;
        }
    }

    #[test]
    fn test_traitless_breed_scores_zero_for_any_answers() {
        let empty = breed(json!({"_id": "x", "Dog Name": "Mystery"}));
        let garbage = breed(json!({
            "_id": "y",
            "Adaptability": "n/a",
            "Size": "",
            "Shedding": null,
            "Officially Recognized": "No",
        }));
        for answer_set in [AnswerSet::new(), full_answer_set()] {
            assert_eq!(score_breed(&empty, &answer_set), 0.0);
            assert_eq!(score_breed(&garbage, &answer_set), 0.0);
        }
    }

    #[test]
    fn test_traitless_breed_scores_only_always_on() {
        let only_always_on = breed(json!({
            "Adaptability": "4",
            "All-around friendliness": "5",
            "Potential For Playfulness": "2",
            "Size": "not a number",
        }));
        let expected = 4.0 + 5.0 + 2.0 * 0.5;
        assert_eq!(score_breed(&only_always_on, &AnswerSet::new()), expected);
    }

    #[test]
    fn test_unanswered_quiz_uses_only_always_on_rules() {
        let plan = ScoringPlan::from_answers(&AnswerSet::new());
        assert_eq!(plan.rules(), &ALWAYS_ON[..]);
    }

    #[test]
    fn test_answer_order_does_not_matter() {
        let candidate = rated("a", "4");
        let forward: Vec<(&str, &str)> = QUESTIONS.iter().map(|q| (q.id, q.answers[1])).collect();
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(
            score_breed(&candidate, &answers(&forward)),
            score_breed(&candidate, &answers(&reversed))
        );
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let candidate = rated("a", "3");
        let answer_set = full_answer_set();
        let first = score_breed(&candidate, &answer_set);
        let second = score_breed(&candidate, &answer_set);
        assert_eq!(first, second);
        assert!(first > 0.0);
    }

    #[test]
    fn test_hot_small_preference_ranks_heat_tolerant_small_breed_first() {
        let chihuahua = breed(json!({
            "_id": "b",
            "Dog Name": "Chihuahua",
            "Tolerates Hot Weather": "5",
            "Size": "1",
        }));
        let malamute = breed(json!({
            "_id": "a",
            "Dog Name": "Alaskan Malamute",
            "Tolerates Hot Weather": "1",
            "Size": "5",
        }));
        let answer_set = answers(&[("climate", "hot"), ("size_preference", "small")]);

        assert!(score_breed(&chihuahua, &answer_set) > score_breed(&malamute, &answer_set));

        let ranked = rank_breeds(vec![malamute, chihuahua], &answer_set, TOP_N);
        let names: Vec<&str> = ranked.iter().map(|s| s.breed.name()).collect();
        assert_eq!(names, vec!["Chihuahua", "Alaskan Malamute"]);
    }

    #[test]
    fn test_threshold_rules() {
        let calm = breed(json!({"Exercise Needs": "2"}));
        let busy = breed(json!({"Exercise Needs": "5"}));
        let sedentary = answers(&[("activity_level", "Mostly sedentary")]);
        let active = answers(&[("activity_level", "Very active")]);

        assert_eq!(score_breed(&calm, &sedentary), THRESHOLD_BONUS);
        assert_eq!(score_breed(&busy, &sedentary), 0.0);
        assert_eq!(score_breed(&busy, &active), THRESHOLD_BONUS);
        assert_eq!(score_breed(&calm, &active), 0.0);
    }

    #[test]
    fn test_direct_weighted_add_requires_precondition() {
        let family_dog = breed(json!({"Kid-Friendly": "5"}));
        let with_kids = answers(&[("family_situation", "Family with young children")]);
        let single = answers(&[("family_situation", "Single adult")]);
        assert_eq!(score_breed(&family_dog, &with_kids), 15.0);
        assert_eq!(score_breed(&family_dog, &single), 0.0);
    }

    #[test]
    fn test_official_recognition_bonus() {
        let recognized = breed(json!({"Officially Recognized": "Yes"}));
        let unrecognized = breed(json!({"Officially Recognized": "No"}));
        let wants = answers(&[(
            "official_recognition",
            "Yes, I prefer officially recognized breeds",
        )]);
        let indifferent = answers(&[("official_recognition", "No preference")]);
        let open = answers(&[("official_recognition", "No, I'm open to all breeds")]);

        assert_eq!(score_breed(&recognized, &wants), RECOGNIZED_BONUS);
        assert_eq!(score_breed(&unrecognized, &wants), 0.0);
        assert_eq!(score_breed(&recognized, &indifferent), RECOGNIZED_INDIFFERENT_BONUS);
        assert_eq!(score_breed(&recognized, &open), 0.0);
    }

    #[test]
    fn test_unrecognized_graduated_answer_targets_midpoint() {
        let medium = breed(json!({"Size": "3"}));
        let giant = breed(json!({"Size": "5"}));
        let odd = answers(&[("size_preference", "pocket-sized wolf")]);
        assert_eq!(score_breed(&medium, &odd), 5.0 * 3.0);
        assert_eq!(score_breed(&giant, &odd), 3.0 * 3.0);

        let odd_climate = answers(&[("climate", "on the moon")]);
        assert_eq!(score_breed(&giant, &odd_climate), 0.0);
    }

    #[test]
    fn test_top_n_selection_with_distinct_scores() {
        let catalog: Vec<Breed> = (0..15)
            .map(|i| breed(json!({"_id": format!("{i:02}"), "Adaptability": i.to_string()})))
            .collect();
        let ranked = rank_breeds(catalog, &AnswerSet::new(), TOP_N);

        assert_eq!(ranked.len(), TOP_N);
        let ids: Vec<&str> = ranked.iter().map(|s| s.breed.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["14", "13", "12", "11", "10", "09", "08", "07", "06", "05"]
        );
        assert!(ranked.windows(2).all(|w| w[0].score > w[1].score));
    }

    #[test]
    fn test_small_catalog_returns_everything() {
        let catalog = vec![rated("a", "2"), rated("b", "4"), rated("c", "3")];
        let ranked = rank_breeds(catalog, &full_answer_set(), TOP_N);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_ties_break_on_identifier() {
        let catalog = vec![rated("c", "3"), rated("a", "3"), rated("b", "3")];
        let ranked = rank_breeds(catalog, &full_answer_set(), TOP_N);
        let ids: Vec<&str> = ranked.iter().map(|s| s.breed.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_catalog_ranks_to_empty() {
        assert!(rank_breeds(vec![], &full_answer_set(), TOP_N).is_empty());
    }
}
