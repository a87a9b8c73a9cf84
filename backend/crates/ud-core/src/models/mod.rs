pub mod new_user;
pub mod user;
pub mod user_changes;
