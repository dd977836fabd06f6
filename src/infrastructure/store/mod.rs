//! External data store integration over its REST interface.

pub mod rest_click_repository;
pub mod rest_group_repository;
pub mod rest_store;
pub mod rest_user_repository;

pub use rest_click_repository::RestClickRepository;
pub use rest_group_repository::RestGroupRepository;
pub use rest_store::{RestStore, StoreError};
pub use rest_user_repository::RestUserRepository;
