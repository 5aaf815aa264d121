use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Importer::Table)
                    .if_not_exists()
                    .col(string_len(Importer::Id, 15).primary_key())
                    .col(string_len(Importer::Nombre, 100))
                    .col(string_len(Importer::Estado, 10))
                    .col(timestamp(Importer::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Importer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Importer {
    Table,
    Id,
    Nombre,
    Estado,
    CreatedAt,
}
