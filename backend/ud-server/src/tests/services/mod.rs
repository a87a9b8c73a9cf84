mod login;
mod registration;
