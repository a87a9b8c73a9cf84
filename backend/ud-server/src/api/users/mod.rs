pub mod login_request;
pub mod login_response;
pub mod register_request;
pub mod update_user_request;
pub mod user_dto;
pub mod users;
