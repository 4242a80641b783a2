pub mod section;

pub use section::MaintenanceSection;
