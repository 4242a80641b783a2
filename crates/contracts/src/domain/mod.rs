pub mod inventory;
pub mod maintenance;
pub mod requests;
