pub mod console;
pub mod data;
pub mod forms;
pub mod generation;
pub mod notifier;
pub mod tabs;

pub use console::Console;
pub use data::DashboardStats;
pub use notifier::Notifier;
pub use tabs::{EnterEffect, TabController};
