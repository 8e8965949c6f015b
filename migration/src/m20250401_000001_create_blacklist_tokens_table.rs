use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The token itself is the key; existence of a row means "revoked".
        manager
            .create_table(
                Table::create()
                    .table(BlacklistTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlacklistTokens::AccessToken)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlacklistTokens::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlacklistTokens {
    Table,
    AccessToken,
}
