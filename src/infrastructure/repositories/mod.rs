pub mod in_memory_user_list_repository;
pub mod user_list_repository;

pub use in_memory_user_list_repository::InMemoryUserListRepository;
pub use user_list_repository::PgUserListRepository;
