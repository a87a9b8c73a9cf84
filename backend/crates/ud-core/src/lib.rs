pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::new_user::NewUser;
pub use models::user::User;
pub use models::user_changes::UserChanges;
pub use validation::require_field;
