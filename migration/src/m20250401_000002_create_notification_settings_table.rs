use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create notification_settings table
        // =====================================================
        // user_id points at a user owned by another service, so there is
        // no foreign key. Rows are removed explicitly by user id.
        manager
            .create_table(
                Table::create()
                    .table(NotificationSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NotificationSettings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NotificationSettings::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NotificationSettings::PushNotifications)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(NotificationSettings::NotificationStartTime)
                            .time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NotificationSettings::NotificationEndTime)
                            .time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NotificationSettings::WeekendNotifications)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(NotificationSettings::MinDiscountPercent)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(
                                Expr::col(NotificationSettings::MinDiscountPercent)
                                    .between(0, 100),
                            ),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // One settings row per user
        manager
            .create_index(
                Index::create()
                    .name("idx_notification_settings_user_id_unique")
                    .table(NotificationSettings::Table)
                    .col(NotificationSettings::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Broadcast recipient selection filters on this flag
        manager
            .create_index(
                Index::create()
                    .name("idx_notification_settings_push")
                    .table(NotificationSettings::Table)
                    .col(NotificationSettings::PushNotifications)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_notification_settings_push")
                    .table(NotificationSettings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_notification_settings_user_id_unique")
                    .table(NotificationSettings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(NotificationSettings::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum NotificationSettings {
    Table,
    Id,
    UserId,
    PushNotifications,
    NotificationStartTime,
    NotificationEndTime,
    WeekendNotifications,
    MinDiscountPercent,
}
