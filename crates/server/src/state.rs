use std::sync::Arc;

use configs::AuthConfig;
use service::auth::AccessGuard;
use service::recipes::{BoilRecipeStore, BoilStep, MashRecipeStore, MashStep, RecipeRepository};

/// Everything the router needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub mash: Arc<dyn RecipeRepository<MashStep>>,
    pub boil: Arc<dyn RecipeRepository<BoilStep>>,
    pub guard: Arc<AccessGuard>,
}

impl AppState {
    /// Both stores seeded with the built-in recipes.
    pub fn seeded(auth: &AuthConfig) -> Self {
        Self {
            mash: MashRecipeStore::seeded(),
            boil: BoilRecipeStore::seeded(),
            guard: Arc::new(AccessGuard::new(auth)),
        }
    }
}
