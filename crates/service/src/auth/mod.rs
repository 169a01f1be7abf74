pub mod domain;
pub mod guard;

pub use domain::{LoginInput, LoginOutput};
pub use guard::AccessGuard;
