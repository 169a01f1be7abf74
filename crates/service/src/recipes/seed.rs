//! Built-in recipes loaded into both stores at startup.

use super::domain::{BoilRecipe, BoilStep, MashRecipe, MashStep};

/// Five mash schedules. Each has an iodine-test pause on the lower
/// saccharification rest and ends with a terminal step.
pub fn mash_recipes() -> Vec<MashRecipe> {
    vec![
        MashRecipe::from_steps(
            "Český ležák 12°",
            vec![
                MashStep::new(38.0, 2.0, 10.0, false),
                MashStep::new(52.0, 1.5, 20.0, false),
                MashStep::new(63.0, 1.0, 30.0, true),
                MashStep::new(72.0, 1.0, 20.0, false),
                MashStep::new(78.0, 1.5, 10.0, false),
                MashStep::end(),
            ],
        ),
        MashRecipe::from_steps(
            "Pšeničné pivo 11°",
            vec![
                MashStep::new(40.0, 2.0, 15.0, false),
                MashStep::new(45.0, 1.5, 15.0, false),
                MashStep::new(62.0, 1.0, 35.0, true),
                MashStep::new(72.0, 1.0, 15.0, false),
                MashStep::new(78.0, 1.5, 5.0, false),
                MashStep::end(),
            ],
        ),
        MashRecipe::from_steps(
            "IPA 15°",
            vec![
                MashStep::new(42.0, 2.0, 10.0, false),
                MashStep::new(50.0, 1.5, 15.0, false),
                MashStep::new(64.0, 1.0, 20.0, true),
                MashStep::new(70.0, 1.0, 30.0, false),
                MashStep::new(76.0, 1.5, 10.0, false),
                MashStep::end(),
            ],
        ),
        MashRecipe::from_steps(
            "Stout 13°",
            vec![
                MashStep::new(40.0, 2.0, 10.0, false),
                MashStep::new(52.0, 1.5, 15.0, false),
                MashStep::new(65.0, 1.0, 40.0, true),
                MashStep::new(72.0, 1.0, 15.0, false),
                MashStep::new(78.0, 1.5, 10.0, false),
                MashStep::end(),
            ],
        ),
        MashRecipe::from_steps(
            "Polotmavý ležák 12°",
            vec![
                MashStep::new(38.0, 2.0, 10.0, false),
                MashStep::new(52.0, 1.5, 20.0, false),
                MashStep::new(63.0, 1.0, 25.0, true),
                MashStep::new(68.0, 1.0, 15.0, false),
                MashStep::new(72.0, 1.0, 15.0, false),
                MashStep::new(78.0, 1.5, 5.0, false),
                MashStep::end(),
            ],
        ),
    ]
}

/// Boil schedules matching the mash recipes by name.
pub fn boil_recipes() -> Vec<BoilRecipe> {
    vec![
        BoilRecipe::from_steps(
            "Český ležák 12°",
            vec![
                BoilStep::new(60.0, 8.0, true),
                BoilStep::new(20.0, 6.0, true),
                BoilStep::new(10.0, 5.0, false),
                BoilStep::new(5.0, 4.0, true),
            ],
        ),
        BoilRecipe::from_steps(
            "Pšeničné pivo 11°",
            vec![
                BoilStep::new(45.0, 7.0, true),
                BoilStep::new(25.0, 6.0, false),
                BoilStep::new(15.0, 5.0, true),
                BoilStep::new(10.0, 4.0, false),
            ],
        ),
        BoilRecipe::from_steps(
            "IPA 15°",
            vec![
                BoilStep::new(30.0, 9.0, true),
                BoilStep::new(20.0, 8.0, true),
                BoilStep::new(15.0, 7.0, true),
                BoilStep::new(10.0, 6.0, true),
                BoilStep::new(5.0, 5.0, true),
                // flameout addition
                BoilStep::new(0.0, 4.0, true),
            ],
        ),
        BoilRecipe::from_steps(
            "Stout 13°",
            vec![
                BoilStep::new(60.0, 7.0, true),
                BoilStep::new(25.0, 6.0, false),
                BoilStep::new(10.0, 5.0, true),
                BoilStep::new(5.0, 4.0, false),
            ],
        ),
        BoilRecipe::from_steps(
            "Polotmavý ležák 12°",
            vec![
                BoilStep::new(55.0, 8.0, true),
                BoilStep::new(25.0, 7.0, false),
                BoilStep::new(15.0, 6.0, true),
                BoilStep::new(5.0, 5.0, true),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn five_recipes_per_kind_with_matching_names() {
        let mash = mash_recipes();
        let boil = boil_recipes();
        assert_eq!(mash.len(), 5);
        assert_eq!(boil.len(), 5);
        for (m, b) in mash.iter().zip(&boil) {
            assert!(!m.name().is_empty());
            assert_eq!(m.name(), b.name());
        }
    }

    #[test]
    fn every_mash_schedule_ends_with_single_end_step() {
        for recipe in mash_recipes() {
            let steps = recipe.as_value()["steps"].as_array().cloned().unwrap_or_default();
            let last = steps.last().expect("non-empty schedule");
            assert_eq!(last["isEndStep"], Value::Bool(true), "{}", recipe.name());
            let ends = steps.iter().filter(|s| s["isEndStep"] == Value::Bool(true)).count();
            assert_eq!(ends, 1);
            let pauses = steps.iter().filter(|s| s["manualPause"] == Value::Bool(true)).count();
            assert_eq!(pauses, 1);
        }
    }
}
