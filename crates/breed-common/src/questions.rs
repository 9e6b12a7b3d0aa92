/// Static quiz question catalog.
///
/// Order is presentation order. Answer strings are the exact option labels clients
/// submit back; `answers::Preferences` recognizes every one of them.
use serde::Serialize;

pub const LIVING_SITUATION: &str = "living_situation";
pub const ACTIVITY_LEVEL: &str = "activity_level";
pub const TIME_COMMITMENT: &str = "time_commitment";
pub const EXPERIENCE: &str = "experience";
pub const FAMILY_SITUATION: &str = "family_situation";
pub const OTHER_PETS: &str = "other_pets";
pub const GROOMING_PREFERENCE: &str = "grooming_preference";
pub const SHEDDING_TOLERANCE: &str = "shedding_tolerance";
pub const SIZE_PREFERENCE: &str = "size_preference";
pub const TRAINABILITY_IMPORTANCE: &str = "trainability_importance";
pub const ENERGY_LEVEL: &str = "energy_level";
pub const BARKING_TOLERANCE: &str = "barking_tolerance";
pub const CLIMATE: &str = "climate";
pub const LIFESTYLE: &str = "lifestyle";
pub const HEALTH_CONCERNS: &str = "health_concerns";
pub const OFFICIAL_RECOGNITION: &str = "official_recognition";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: &'static str,
    pub question: &'static str,
    pub short_label: &'static str,
    pub tooltip: &'static str,
    pub answers: &'static [&'static str],
}

pub static QUESTIONS: &[Question] = &[
    Question {
        id: LIVING_SITUATION,
        question: "What is your living situation?",
        short_label: "Living Space",
        tooltip: "Your living space can affect which dog breeds are most suitable for you.",
        answers: &["Apartment", "House with small yard", "House with large yard"],
    },
    Question {
        id: ACTIVITY_LEVEL,
        question: "How would you describe your activity level?",
        short_label: "Activity",
        tooltip: "Different dog breeds have varying exercise needs that should match your lifestyle.",
        answers: &["Mostly sedentary", "Moderately active", "Very active"],
    },
    Question {
        id: TIME_COMMITMENT,
        question: "How much time can you dedicate to your dog daily?",
        short_label: "Time",
        tooltip: "Dogs require time for exercise, training, and companionship.",
        answers: &[
            "Minimal (less than 30 minutes)",
            "Moderate (30-60 minutes)",
            "Extensive (more than 60 minutes)",
        ],
    },
    Question {
        id: EXPERIENCE,
        question: "What is your experience level with dogs?",
        short_label: "Experience",
        tooltip: "Some breeds are better suited for experienced owners, while others are great for first-time owners.",
        answers: &["First-time owner", "Some experience", "Very experienced"],
    },
    Question {
        id: FAMILY_SITUATION,
        question: "What is your family situation?",
        short_label: "Family",
        tooltip: "Family composition can influence which dog breeds are most compatible.",
        answers: &[
            "Single adult",
            "Couple without children",
            "Family with young children",
            "Family with older children",
            "Senior(s)",
        ],
    },
    Question {
        id: OTHER_PETS,
        question: "Do you have other pets?",
        short_label: "Other Pets",
        tooltip: "Some dog breeds get along better with other pets than others.",
        answers: &[
            "No other pets",
            "Other dogs",
            "Cats",
            "Small animals (e.g., rabbits, birds)",
        ],
    },
    Question {
        id: GROOMING_PREFERENCE,
        question: "What are your grooming preferences?",
        short_label: "Grooming",
        tooltip: "Different breeds have varying grooming needs, from minimal to extensive.",
        answers: &[
            "Low maintenance",
            "Willing to do regular grooming",
            "Happy to do extensive grooming",
        ],
    },
    Question {
        id: SHEDDING_TOLERANCE,
        question: "How tolerant are you of shedding?",
        short_label: "Shedding",
        tooltip: "Some breeds shed more than others, which can affect allergies and cleaning needs.",
        answers: &[
            "Prefer no shedding",
            "Can tolerate some shedding",
            "Don't mind heavy shedding",
        ],
    },
    Question {
        id: SIZE_PREFERENCE,
        question: "What size dog do you prefer?",
        short_label: "Size",
        tooltip: "Dog sizes can range from tiny toy breeds to giant breeds.",
        answers: &[
            "Small (under 20 lbs)",
            "Medium (20-50 lbs)",
            "Large (50-90 lbs)",
            "Extra large (over 90 lbs)",
        ],
    },
    Question {
        id: TRAINABILITY_IMPORTANCE,
        question: "How important is easy trainability to you?",
        short_label: "Trainability",
        tooltip: "Some breeds are more eager to please and easier to train than others.",
        answers: &["Very important", "Somewhat important", "Not important"],
    },
    Question {
        id: ENERGY_LEVEL,
        question: "What energy level are you looking for in a dog?",
        short_label: "Energy",
        tooltip: "Energy levels in dogs can range from very low to extremely high.",
        answers: &["Low energy", "Moderate energy", "High energy"],
    },
    Question {
        id: BARKING_TOLERANCE,
        question: "How tolerant are you of barking?",
        short_label: "Barking",
        tooltip: "Some breeds are more vocal than others, which can affect your living situation.",
        answers: &[
            "Prefer minimal barking",
            "Can tolerate some barking",
            "Don't mind frequent barking",
        ],
    },
    Question {
        id: CLIMATE,
        question: "What type of climate do you live in?",
        short_label: "Climate",
        tooltip: "Some breeds are better suited for certain climates due to their coat type and body structure.",
        answers: &["Cold", "Moderate", "Hot"],
    },
    Question {
        id: LIFESTYLE,
        question: "Which lifestyle activities do you want to share with your dog?",
        short_label: "Activities",
        tooltip: "Different breeds excel at and enjoy various activities.",
        answers: &[
            "Cuddling and relaxing at home",
            "Regular walks",
            "Jogging or running",
            "Hiking and outdoor adventures",
            "Dog sports (agility, obedience, etc.)",
        ],
    },
    Question {
        id: HEALTH_CONCERNS,
        question: "Do you have any specific health concerns or preferences?",
        short_label: "Health",
        tooltip: "Some breeds are prone to certain health issues, while others are known for being generally healthy.",
        answers: &[
            "No specific concerns",
            "Need a hypoallergenic breed",
            "Prefer breeds with minimal known health issues",
        ],
    },
    Question {
        id: OFFICIAL_RECOGNITION,
        question: "Do you prefer officially recognized dog breeds?",
        short_label: "Recognition",
        tooltip: "Officially recognized breeds are often easier to find and have more predictable traits.",
        answers: &[
            "Yes, I prefer officially recognized breeds",
            "No, I'm open to all breeds",
            "No preference",
        ],
    },
];

/// Accepted spellings for question ids that have a longer descriptive form.
pub fn canonical_question_id(id: &str) -> &str {
    match id {
        "experience_level" => EXPERIENCE,
        "lifestyle_activities" => LIFESTYLE,
        "official_recognition_preference" => OFFICIAL_RECOGNITION,
        other => other,
    }
}
