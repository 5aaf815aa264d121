use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuditLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AuditLog::Id))
                    .col(integer_null(AuditLog::UserId))
                    .col(string_len(AuditLog::Action, 20))
                    .col(string_len(AuditLog::Entity, 20))
                    .col(string_null(AuditLog::EntityId))
                    .col(string_null(AuditLog::Operation))
                    .col(string_len_null(AuditLog::Result, 10))
                    .col(string_len_null(AuditLog::NumDeclaracion, 20))
                    .col(string_null(AuditLog::Details))
                    .col(timestamp(AuditLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuditLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuditLog {
    Table,
    Id,
    UserId,
    Action,
    Entity,
    EntityId,
    Operation,
    Result,
    NumDeclaracion,
    Details,
    CreatedAt,
}
