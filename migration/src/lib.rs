pub use sea_orm_migration::prelude::*;

mod m20250401_000001_create_blacklist_tokens_table;
mod m20250401_000002_create_notification_settings_table;
mod m20250401_000003_create_user_preferences_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250401_000001_create_blacklist_tokens_table::Migration),
            Box::new(m20250401_000002_create_notification_settings_table::Migration),
            Box::new(m20250401_000003_create_user_preferences_table::Migration),
        ]
    }
}
