pub mod token_blacklist_repository;

pub use token_blacklist_repository::TokenBlacklistRepository;
