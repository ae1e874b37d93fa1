use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resource::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resource::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Resource::Content).text().not_null())
                    .col(ColumnDef::new(Resource::VanityUrl).string().null())
                    .col(ColumnDef::new(Resource::Type).string().not_null())
                    .col(
                        ColumnDef::new(Resource::ExpirationTime)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Resource::AccessCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // vanity lookups run on every allocation
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vanity_url")
                    .table(Resource::Table)
                    .col(Resource::VanityUrl)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_type")
                    .table(Resource::Table)
                    .col(Resource::Type)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_type").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_vanity_url").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Resource {
    #[sea_orm(iden = "resources")]
    Table,
    Id,
    Content,
    VanityUrl,
    Type,
    ExpirationTime,
    AccessCount,
}
