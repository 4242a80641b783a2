//! Role-based navigation core: registry, tab/URL synchronization and the
//! navigation view model. Nothing in here touches the network.

pub mod history;
pub mod location;
pub mod presenter;
pub mod registry;
pub mod tab_sync;

pub use history::{BrowserHistory, History, HistoryMode, MemoryHistory};
pub use location::Location;
pub use presenter::{NavItem, NavigationPresenter};
pub use registry::NavigationEntry;
pub use tab_sync::TabSynchronizer;
