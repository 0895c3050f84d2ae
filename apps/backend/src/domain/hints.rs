use serde::Serialize;

use crate::domain::animal::AnimalRecord;

/// The four clues revealed one by one on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hints {
    pub hint1: String,
    pub hint2: String,
    pub hint3: String,
    pub hint4: String,
}

impl Hints {
    pub fn for_animal(animal: &AnimalRecord) -> Self {
        Self {
            hint1: format!("I am a {}", animal.type_name),
            hint2: format!("I weigh about {}", animal.weight),
            hint3: format!(
                "I live in: {}",
                animal.habitats_display().unwrap_or_default()
            ),
            hint4: format!("Scientific name: {}", animal.scientific_name),
        }
    }
}
