pub mod about;
pub mod dashboard;
pub mod history;
pub mod login;
pub mod register;
