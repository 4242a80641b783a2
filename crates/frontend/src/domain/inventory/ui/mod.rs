pub mod explore;
pub mod grid;
pub mod item_form;
pub mod list;

pub use explore::ExploreInventory;
pub use grid::ComponentGrid;
pub use list::InventoryList;
