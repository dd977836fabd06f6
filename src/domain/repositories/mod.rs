//! Repository traits abstracting the external data store.
//!
//! Each trait is table-scoped, mirroring the store's contract of
//! per-table insert and select-with-filter operations. Implementations
//! live in [`crate::infrastructure::store`]; services depend on these
//! traits so tests can substitute in-memory doubles or mocks.

pub mod click_repository;
pub mod group_repository;
pub mod user_repository;

pub use click_repository::ClickRepository;
pub use group_repository::GroupRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use group_repository::MockGroupRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
