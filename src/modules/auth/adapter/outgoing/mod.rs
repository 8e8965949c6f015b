pub mod sea_orm_entity;
mod token_blacklist_postgres;
mod token_blacklist_redis;

pub use token_blacklist_postgres::TokenBlacklistPostgres;
pub use token_blacklist_redis::RedisTokenBlacklistRepository;
