pub mod inventory;
pub mod maintenance;
pub mod reports;
pub mod requests;
