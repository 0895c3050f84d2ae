pub mod animal_habitats;
pub mod animal_types;
pub mod animals;
pub mod conservation_statuses;
pub mod habitats;

pub use animal_types::Entity as AnimalTypes;
pub use animals::Entity as Animals;
pub use animals::Model as Animal;
pub use conservation_statuses::Entity as ConservationStatuses;
pub use habitats::Entity as Habitats;
