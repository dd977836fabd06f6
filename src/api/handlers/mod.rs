//! HTTP request handlers.

pub mod clicks;
pub mod health;
pub mod info;
pub mod stats;
pub mod users;

pub use clicks::log_click_handler;
pub use health::{health_handler, root_handler};
pub use info::deployment_info_handler;
pub use stats::{all_stats_handler, group_stats_handler};
pub use users::register_user_handler;
