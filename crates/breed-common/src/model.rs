use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FEATURED_IMAGE_KEY: &str = "FeaturedImageURL";
pub const ADDITIONAL_IMAGES_KEY: &str = "AdditionalImageURLs";
pub const OFFICIALLY_RECOGNIZED_KEY: &str = "Officially Recognized";

/// Delimiter between entries of `AdditionalImageURLs`.
const IMAGE_URL_DELIMITER: char = '|';

/// One catalog entry describing a dog breed.
///
/// Only the identifier, name and temperament are typed; every other attribute is kept
/// as the raw JSON value it was stored with so unknown or newly added fields pass
/// through to clients unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Breed {
    /// Storage-assigned identifier, always a plain string on the wire.
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "Dog Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Temperament", default, skip_serializing_if = "Option::is_none")]
    pub temperament: Option<String>,
    /// Ratings, descriptive strings, flags and image URLs keyed by their catalog name.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl Breed {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn temperament(&self) -> &str {
        self.temperament.as_deref().unwrap_or_default()
    }

    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// Parse one rated trait. Callers decide what a failure is worth; scoring treats it
    /// as "no contribution".
    pub fn trait_value(&self, breed_trait: BreedTrait) -> Result<f64, TraitError> {
        parse_trait(self.attributes.get(breed_trait.key()))
    }

    pub fn is_officially_recognized(&self) -> bool {
        self.attribute_str(OFFICIALLY_RECOGNIZED_KEY)
            .is_some_and(|flag| flag.trim().eq_ignore_ascii_case("yes"))
    }

    /// Featured image first, then the delimited additional images, blanks dropped.
    pub fn image_urls(&self) -> Vec<String> {
        let featured = self.attribute_str(FEATURED_IMAGE_KEY).into_iter();
        let additional = self
            .attribute_str(ADDITIONAL_IMAGES_KEY)
            .into_iter()
            .flat_map(|urls| urls.split(IMAGE_URL_DELIMITER));

        featured
            .chain(additional)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// The 1-5 rated attributes of a breed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreedTrait {
    Adaptability,
    ApartmentLiving,
    NoviceOwners,
    SensitivityLevel,
    ToleratesBeingAlone,
    ToleratesColdWeather,
    ToleratesHotWeather,
    Friendliness,
    BestFamilyDogs,
    KidFriendly,
    DogFriendly,
    FriendlyTowardStrangers,
    HealthAndGroomingNeeds,
    Shedding,
    DroolingPotential,
    EasyToGroom,
    GeneralHealth,
    WeightGainPotential,
    Size,
    Trainability,
    EasyToTrain,
    Intelligence,
    MouthinessPotential,
    PreyDrive,
    TendencyToBark,
    WanderlustPotential,
    ExerciseNeeds,
    EnergyLevel,
    Intensity,
    Playfulness,
}

impl BreedTrait {
    /// Attribute name as stored in the catalog.
    pub fn key(self) -> &'static str {
        match self {
            Self::Adaptability => "Adaptability",
            Self::ApartmentLiving => "Adapts Well To Apartment Living",
            Self::NoviceOwners => "Good For Novice Dog Owners",
            Self::SensitivityLevel => "Sensitivity Level",
            Self::ToleratesBeingAlone => "Tolerates Being Alone",
            Self::ToleratesColdWeather => "Tolerates Cold Weather",
            Self::ToleratesHotWeather => "Tolerates Hot Weather",
            Self::Friendliness => "All-around friendliness",
            Self::BestFamilyDogs => "Best Family Dogs",
            Self::KidFriendly => "Kid-Friendly",
            Self::DogFriendly => "Dog Friendly",
            Self::FriendlyTowardStrangers => "Friendly Toward Strangers",
            Self::HealthAndGroomingNeeds => "Health And Grooming Needs",
            Self::Shedding => "Shedding",
            Self::DroolingPotential => "Drooling Potential",
            Self::EasyToGroom => "Easy To Groom",
            Self::GeneralHealth => "General Health",
            Self::WeightGainPotential => "Potential For Weight Gain",
            Self::Size => "Size",
            Self::Trainability => "Trainability",
            Self::EasyToTrain => "Easy To Train",
            Self::Intelligence => "Intelligence",
            Self::MouthinessPotential => "Potential For Mouthiness",
            Self::PreyDrive => "Prey Drive",
            Self::TendencyToBark => "Tendency To Bark Or Howl",
            Self::WanderlustPotential => "Wanderlust Potential",
            Self::ExerciseNeeds => "Exercise Needs",
            Self::EnergyLevel => "High Energy Level",
            Self::Intensity => "Intensity",
            Self::Playfulness => "Potential For Playfulness",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TraitError {
    #[error("trait is missing")]
    Missing,

    #[error("trait value is not numeric: {0}")]
    NotNumeric(String),

    #[error("trait value out of range: {0}")]
    OutOfRange(f64),
}

/// Parse a raw attribute into a rating. Ratings are stored as text ("4"), but numeric
/// documents are accepted as well. Negative and non-finite values are rejected.
pub fn parse_trait(value: Option<&Value>) -> Result<f64, TraitError> {
    let parsed = match value {
        None | Some(Value::Null) => return Err(TraitError::Missing),
        Some(Value::String(raw)) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| TraitError::NotNumeric(raw.clone()))?,
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| TraitError::NotNumeric(number.to_string()))?,
        Some(other) => return Err(TraitError::NotNumeric(other.to_string())),
    };

    if !parsed.is_finite() || parsed < 0.0 {
        return Err(TraitError::OutOfRange(parsed));
    }
    Ok(parsed)
}

/// A breed with its compatibility score, as returned by the recommendation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredBreed {
    #[serde(flatten)]
    pub breed: Breed,
    pub score: f64,
}

/// One page of the catalog directory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedPage {
    pub dog_breeds: Vec<Breed>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

/// A breed with its image gallery resolved, for the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct BreedDetail {
    #[serde(flatten)]
    pub breed: Breed,
    pub images: Vec<String>,
}

impl From<Breed> for BreedDetail {
    fn from(breed: Breed) -> Self {
        let images = breed.image_urls();
        Self { breed, images }
    }
}
