use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000001_create_siglad_user_table::SigladUser;

static IDX_DECLARATION_NUMERO_DOCUMENTO: &str = "idx_declaration_numero_documento";
static IDX_DECLARATION_OWNER_USER_ID: &str = "idx_declaration_owner_user_id";
static IDX_DECLARATION_ESTADO: &str = "idx_declaration_estado";
static FK_DECLARATION_OWNER_USER_ID: &str = "fk_declaration_owner_user_id";
static FK_DECLARATION_AGENTE_USER_ID: &str = "fk_declaration_agente_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Declaration::Table)
                    .if_not_exists()
                    .col(pk_auto(Declaration::Id))
                    .col(string_len(Declaration::NumeroDocumento, 20))
                    .col(date(Declaration::FechaEmision))
                    .col(string_len(Declaration::PaisEmisor, 2))
                    .col(string_len(Declaration::TipoOperacion, 20))
                    .col(string_len(Declaration::ExportadorId, 15))
                    .col(string_len(Declaration::ExportadorNombre, 100))
                    .col(string_len_null(Declaration::ExportadorDireccion, 120))
                    .col(string_len_null(Declaration::ExportadorTelefono, 15))
                    .col(string_len_null(Declaration::ExportadorEmail, 60))
                    .col(string_len(Declaration::ImportadorId, 15))
                    .col(string_len(Declaration::ImportadorNombre, 100))
                    .col(string_len_null(Declaration::ImportadorDireccion, 120))
                    .col(string_len_null(Declaration::ImportadorTelefono, 15))
                    .col(string_len_null(Declaration::ImportadorEmail, 60))
                    .col(string_len(Declaration::MedioTransporte, 20))
                    .col(string_len(Declaration::PlacaVehiculo, 10))
                    .col(string_len_null(Declaration::ConductorNombre, 80))
                    .col(string_len_null(Declaration::ConductorLicencia, 20))
                    .col(string_len_null(Declaration::ConductorPaisLicencia, 2))
                    .col(string_len(Declaration::RutaAduanaSalida, 50))
                    .col(string_len(Declaration::RutaAduanaEntrada, 50))
                    .col(string_len(Declaration::RutaPaisDestino, 2))
                    .col(integer_null(Declaration::RutaKmAprox))
                    .col(double_null(Declaration::ValorFactura))
                    .col(double_null(Declaration::GastosTransporte))
                    .col(double_null(Declaration::Seguro))
                    .col(double_null(Declaration::OtrosGastos))
                    .col(double(Declaration::ValorAduanaTotal))
                    .col(string_len(Declaration::Moneda, 3))
                    .col(string_len_null(Declaration::SelectivoCodigo, 1))
                    .col(string_len_null(Declaration::SelectivoDescripcion, 60))
                    .col(string_len(Declaration::EstadoDocumento, 20))
                    .col(string_len_null(Declaration::FirmaElectronica, 64))
                    .col(string_len(Declaration::Estado, 20))
                    .col(integer(Declaration::OwnerUserId))
                    .col(integer_null(Declaration::AgenteUserId))
                    .col(string_null(Declaration::ComentarioAgente))
                    .col(timestamp(Declaration::CreatedAt))
                    .col(timestamp_null(Declaration::ValidatedAt))
                    .to_owned(),
            )
            .await?;

        // Authoritative duplicate guard; the in-transaction pre-check only
        // produces the friendly error on the fast path.
        manager
            .create_index(
                Index::create()
                    .name(IDX_DECLARATION_NUMERO_DOCUMENTO)
                    .table(Declaration::Table)
                    .col(Declaration::NumeroDocumento)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DECLARATION_OWNER_USER_ID)
                    .table(Declaration::Table)
                    .col(Declaration::OwnerUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DECLARATION_ESTADO)
                    .table(Declaration::Table)
                    .col(Declaration::Estado)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DECLARATION_OWNER_USER_ID)
                    .from_tbl(Declaration::Table)
                    .from_col(Declaration::OwnerUserId)
                    .to_tbl(SigladUser::Table)
                    .to_col(SigladUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DECLARATION_AGENTE_USER_ID)
                    .from_tbl(Declaration::Table)
                    .from_col(Declaration::AgenteUserId)
                    .to_tbl(SigladUser::Table)
                    .to_col(SigladUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DECLARATION_AGENTE_USER_ID)
                    .table(Declaration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DECLARATION_OWNER_USER_ID)
                    .table(Declaration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DECLARATION_ESTADO)
                    .table(Declaration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DECLARATION_OWNER_USER_ID)
                    .table(Declaration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DECLARATION_NUMERO_DOCUMENTO)
                    .table(Declaration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Declaration::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Declaration {
    Table,
    Id,
    NumeroDocumento,
    FechaEmision,
    PaisEmisor,
    TipoOperacion,
    ExportadorId,
    ExportadorNombre,
    ExportadorDireccion,
    ExportadorTelefono,
    ExportadorEmail,
    ImportadorId,
    ImportadorNombre,
    ImportadorDireccion,
    ImportadorTelefono,
    ImportadorEmail,
    MedioTransporte,
    PlacaVehiculo,
    ConductorNombre,
    ConductorLicencia,
    ConductorPaisLicencia,
    RutaAduanaSalida,
    RutaAduanaEntrada,
    RutaPaisDestino,
    RutaKmAprox,
    ValorFactura,
    GastosTransporte,
    Seguro,
    OtrosGastos,
    ValorAduanaTotal,
    Moneda,
    SelectivoCodigo,
    SelectivoDescripcion,
    EstadoDocumento,
    FirmaElectronica,
    Estado,
    OwnerUserId,
    AgenteUserId,
    ComentarioAgente,
    CreatedAt,
    ValidatedAt,
}
