use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exporter::Table)
                    .if_not_exists()
                    .col(string_len(Exporter::Id, 15).primary_key())
                    .col(string_len(Exporter::Nombre, 100))
                    .col(string_len(Exporter::Estado, 10))
                    .col(timestamp(Exporter::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Exporter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Exporter {
    Table,
    Id,
    Nombre,
    Estado,
    CreatedAt,
}
