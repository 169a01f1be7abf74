//! Mash and boil recipe collections.

pub mod domain;
pub mod repository;
pub mod seed;
pub mod store;

pub use domain::{BoilRecipe, BoilStep, MashRecipe, MashStep, Recipe, StepKind};
pub use repository::RecipeRepository;
pub use store::{BoilRecipeStore, MashRecipeStore, RecipeStore};
