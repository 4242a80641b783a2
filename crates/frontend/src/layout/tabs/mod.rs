//! Tabbed role pages.
//!
//! - `page`: the [`RolePage`] shell
//! - `registry`: (role, tab) -> pane

pub mod page;
pub mod registry;

pub use page::RolePage;
