// Animal repo: random pick, filtering and related-row resolution.

use std::collections::HashSet;

use zooriddle::domain::Difficulty;
use zooriddle::repos::animals;

use crate::support::build_test_state;
use crate::support::factory::{animal, seed_mixed_catalogue};

#[tokio::test]
async fn test_pick_random_resolves_related_rows() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().unwrap();
    animal("Snow Leopard")
        .type_name("Big Cat")
        .status("Vulnerable")
        .habitats(&["Mountains", "Alpine Meadow"])
        .difficulty(Difficulty::Hard)
        .insert(db)
        .await?;

    let record = animals::pick_random(db, None).await?.expect("one animal");
    assert_eq!(record.name, "Snow Leopard");
    assert_eq!(record.type_name, "Big Cat");
    assert_eq!(record.conservation_status.as_deref(), Some("Vulnerable"));
    assert_eq!(record.habitats, vec!["Alpine Meadow", "Mountains"]);
    assert_eq!(record.difficulty, Difficulty::Hard);

    Ok(())
}

#[tokio::test]
async fn test_repeated_habitat_names_link_once() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().unwrap();
    animal("Lion")
        .habitats(&["Savanna", "Grassland", "Savanna"])
        .insert(db)
        .await?;

    let record = animals::pick_random(db, None).await?.expect("one animal");
    assert_eq!(record.habitats, vec!["Grassland", "Savanna"]);
    assert_eq!(record.habitats_display().as_deref(), Some("Grassland, Savanna"));

    Ok(())
}

#[tokio::test]
async fn test_pick_random_empty_catalogue()-> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().unwrap();

    assert!(animals::pick_random(db, None).await?.is_none());
    assert!(animals::pick_random(db, Some(Difficulty::Easy)).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_pick_random_covers_catalogue() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().unwrap();
    seed_mixed_catalogue(db).await?;

    // Three rows; 200 draws missing one by chance is (2/3)^200.
    let mut seen = HashSet::new();
    for _ in 0..200 {
        let record = animals::pick_random(db, None).await?.expect("catalogue not empty");
        seen.insert(record.name);
    }
    assert_eq!(seen.len(), 3);

    Ok(())
}
