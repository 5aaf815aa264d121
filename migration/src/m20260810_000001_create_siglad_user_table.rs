use sea_orm_migration::{prelude::*, schema::*};

static IDX_USER_EMAIL: &str = "idx_siglad_user_email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SigladUser::Table)
                    .if_not_exists()
                    .col(pk_auto(SigladUser::Id))
                    .col(string_len(SigladUser::Name, 100))
                    .col(string_len_uniq(SigladUser::Email, 120))
                    .col(string(SigladUser::PasswordHash))
                    .col(string_len(SigladUser::Role, 20))
                    .col(string_len(SigladUser::Status, 10))
                    .col(timestamp(SigladUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_EMAIL)
                    .table(SigladUser::Table)
                    .col(SigladUser::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_EMAIL)
                    .table(SigladUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SigladUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SigladUser {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    Status,
    CreatedAt,
}
