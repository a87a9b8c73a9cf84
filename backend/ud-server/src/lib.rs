pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;
pub mod services;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    json::ApiJson,
    message_response::MessageResponse,
    users::{
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        users::{delete_user, get_user, list_users, login, register, update_user},
    },
};
pub use app_state::AppState;
pub use services::{login_service::LoginService, registration_service::RegistrationService};

pub use crate::routes::build_router;
