use crate::domain::difficulty::Difficulty;

/// One catalogue entry with its related names resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalRecord {
    pub id: i64,
    /// Canonical answer for a round.
    pub name: String,
    pub scientific_name: String,
    pub weight: String,
    pub description: String,
    pub image_path: String,
    pub type_name: String,
    pub difficulty: Difficulty,
    pub conservation_status: Option<String>,
    /// Distinct habitat names, sorted.
    pub habitats: Vec<String>,
}

impl AnimalRecord {
    /// Habitats flattened for display, `None` when the animal has none.
    pub fn habitats_display(&self) -> Option<String> {
        if self.habitats.is_empty() {
            None
        } else {
            Some(self.habitats.join(", "))
        }
    }
}

/// Sort and de-duplicate habitat names so the display string is stable.
pub fn normalize_habitats(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names.dedup();
    names
}
