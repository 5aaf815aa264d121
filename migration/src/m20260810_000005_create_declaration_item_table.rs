use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000004_create_declaration_table::Declaration;

static IDX_ITEM_DECLARATION_LINEA: &str = "idx_declaration_item_declaration_id_linea";
static FK_ITEM_DECLARATION_ID: &str = "fk_declaration_item_declaration_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeclarationItem::Table)
                    .if_not_exists()
                    .col(pk_auto(DeclarationItem::Id))
                    .col(integer(DeclarationItem::DeclarationId))
                    .col(integer(DeclarationItem::Linea))
                    .col(string_len(DeclarationItem::Descripcion, 120))
                    .col(double(DeclarationItem::Cantidad))
                    .col(string_len(DeclarationItem::UnidadMedida, 10))
                    .col(double(DeclarationItem::ValorUnitario))
                    .col(string_len(DeclarationItem::PaisOrigen, 2))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_DECLARATION_LINEA)
                    .table(DeclarationItem::Table)
                    .col(DeclarationItem::DeclarationId)
                    .col(DeclarationItem::Linea)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_DECLARATION_ID)
                    .from_tbl(DeclarationItem::Table)
                    .from_col(DeclarationItem::DeclarationId)
                    .to_tbl(Declaration::Table)
                    .to_col(Declaration::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_DECLARATION_ID)
                    .table(DeclarationItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ITEM_DECLARATION_LINEA)
                    .table(DeclarationItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DeclarationItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DeclarationItem {
    Table,
    Id,
    DeclarationId,
    Linea,
    Descripcion,
    Cantidad,
    UnidadMedida,
    ValorUnitario,
    PaisOrigen,
}
