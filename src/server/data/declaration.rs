use chrono::Utc;
use entity::{
    declaration::{self, DeclarationState},
    declaration_item,
    importer::CatalogStatus,
};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};

use crate::server::{
    error::declaration::DeclarationError,
    model::declaration::{NewDeclaration, NewDeclarationItem},
};

pub struct DeclarationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeclarationRepository<'a> {
    /// Creates a new instance of [`DeclarationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persist a declaration header and its line items in one transaction.
    ///
    /// Steps, any of which aborts the whole operation: duplicate
    /// `numero_documento` pre-check, importer-ACTIVO check, header insert
    /// with estado PENDIENTE, one insert per item preserving the caller's
    /// `linea` values. The unique index on `numero_documento` remains the
    /// authoritative guard; a constraint violation at insert or commit time
    /// is translated to the same [`DeclarationError::DuplicateDocument`] the
    /// pre-check produces.
    pub async fn create(
        &self,
        header: &NewDeclaration,
        items: &[NewDeclarationItem],
        owner_user_id: i32,
    ) -> Result<i32, DeclarationError> {
        let txn = self.db.begin().await?;

        let duplicate = entity::prelude::Declaration::find()
            .filter(declaration::Column::NumeroDocumento.eq(&header.numero_documento))
            .one(&txn)
            .await?;

        if duplicate.is_some() {
            txn.rollback().await?;
            return Err(DeclarationError::DuplicateDocument(
                header.numero_documento.clone(),
            ));
        }

        let importer = entity::prelude::Importer::find_by_id(header.importador_id.as_str())
            .one(&txn)
            .await?;

        match importer {
            Some(importer) if importer.estado == CatalogStatus::Activo => {}
            _ => {
                txn.rollback().await?;
                return Err(DeclarationError::InvalidImporter(
                    header.importador_id.clone(),
                ));
            }
        }

        let model = declaration::ActiveModel {
            numero_documento: ActiveValue::Set(header.numero_documento.clone()),
            fecha_emision: ActiveValue::Set(header.fecha_emision),
            pais_emisor: ActiveValue::Set(header.pais_emisor.clone()),
            tipo_operacion: ActiveValue::Set(header.tipo_operacion.clone()),
            exportador_id: ActiveValue::Set(header.exportador_id.clone()),
            exportador_nombre: ActiveValue::Set(header.exportador_nombre.clone()),
            exportador_direccion: ActiveValue::Set(header.exportador_direccion.clone()),
            exportador_telefono: ActiveValue::Set(header.exportador_telefono.clone()),
            exportador_email: ActiveValue::Set(header.exportador_email.clone()),
            importador_id: ActiveValue::Set(header.importador_id.clone()),
            importador_nombre: ActiveValue::Set(header.importador_nombre.clone()),
            importador_direccion: ActiveValue::Set(header.importador_direccion.clone()),
            importador_telefono: ActiveValue::Set(header.importador_telefono.clone()),
            importador_email: ActiveValue::Set(header.importador_email.clone()),
            medio_transporte: ActiveValue::Set(header.medio_transporte.clone()),
            placa_vehiculo: ActiveValue::Set(header.placa_vehiculo.clone()),
            conductor_nombre: ActiveValue::Set(header.conductor_nombre.clone()),
            conductor_licencia: ActiveValue::Set(header.conductor_licencia.clone()),
            conductor_pais_licencia: ActiveValue::Set(header.conductor_pais_licencia.clone()),
            ruta_aduana_salida: ActiveValue::Set(header.ruta_aduana_salida.clone()),
            ruta_aduana_entrada: ActiveValue::Set(header.ruta_aduana_entrada.clone()),
            ruta_pais_destino: ActiveValue::Set(header.ruta_pais_destino.clone()),
            ruta_km_aprox: ActiveValue::Set(header.ruta_km_aprox),
            valor_factura: ActiveValue::Set(header.valor_factura),
            gastos_transporte: ActiveValue::Set(header.gastos_transporte),
            seguro: ActiveValue::Set(header.seguro),
            otros_gastos: ActiveValue::Set(header.otros_gastos),
            valor_aduana_total: ActiveValue::Set(header.valor_aduana_total),
            moneda: ActiveValue::Set(header.moneda.clone()),
            selectivo_codigo: ActiveValue::Set(header.selectivo_codigo.clone()),
            selectivo_descripcion: ActiveValue::Set(header.selectivo_descripcion.clone()),
            estado_documento: ActiveValue::Set(header.estado_documento.clone()),
            firma_electronica: ActiveValue::Set(header.firma_electronica.clone()),
            estado: ActiveValue::Set(DeclarationState::Pendiente),
            owner_user_id: ActiveValue::Set(owner_user_id),
            agente_user_id: ActiveValue::Set(None),
            comentario_agente: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            validated_at: ActiveValue::Set(None),
            ..Default::default()
        };

        let inserted = match model.insert(&txn).await {
            Ok(inserted) => inserted,
            Err(err) => return Err(duplicate_from_db(err, &header.numero_documento)),
        };

        for item in items {
            let item = declaration_item::ActiveModel {
                declaration_id: ActiveValue::Set(inserted.id),
                linea: ActiveValue::Set(item.linea),
                descripcion: ActiveValue::Set(item.descripcion.clone()),
                cantidad: ActiveValue::Set(item.cantidad),
                unidad_medida: ActiveValue::Set(item.unidad_medida.clone()),
                valor_unitario: ActiveValue::Set(item.valor_unitario),
                pais_origen: ActiveValue::Set(item.pais_origen.clone()),
                ..Default::default()
            };

            item.insert(&txn).await?;
        }

        txn.commit()
            .await
            .map_err(|err| duplicate_from_db(err, &header.numero_documento))?;

        Ok(inserted.id)
    }

    /// Get a declaration header with its items ordered by `linea`
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(declaration::Model, Vec<declaration_item::Model>)>, DbErr> {
        let header = entity::prelude::Declaration::find_by_id(id).one(self.db).await?;

        let Some(header) = header else {
            return Ok(None);
        };

        let items = entity::prelude::DeclarationItem::find()
            .filter(declaration_item::Column::DeclarationId.eq(id))
            .order_by_asc(declaration_item::Column::Linea)
            .all(self.db)
            .await?;

        Ok(Some((header, items)))
    }

    /// List a transporter's own declarations, newest first
    pub async fn list_for_owner(
        &self,
        owner_user_id: i32,
    ) -> Result<Vec<declaration::Model>, DbErr> {
        entity::prelude::Declaration::find()
            .filter(declaration::Column::OwnerUserId.eq(owner_user_id))
            .order_by_desc(declaration::Column::CreatedAt)
            .order_by_desc(declaration::Column::Id)
            .all(self.db)
            .await
    }

    /// List all PENDIENTE declarations, oldest first (FIFO agent queue)
    pub async fn list_pending(&self) -> Result<Vec<declaration::Model>, DbErr> {
        entity::prelude::Declaration::find()
            .filter(declaration::Column::Estado.eq(DeclarationState::Pendiente))
            .order_by_asc(declaration::Column::CreatedAt)
            .order_by_asc(declaration::Column::Id)
            .all(self.db)
            .await
    }

    /// Apply an agent decision as a single conditional update.
    ///
    /// The `estado = PENDIENTE` filter makes the transition one-way and race
    /// safe: when two agents decide concurrently only one update matches.
    /// Returns `None` when the declaration does not exist or was already
    /// decided; the two cases are indistinguishable on purpose.
    pub async fn decide(
        &self,
        id: i32,
        decision: DeclarationState,
        agente_user_id: i32,
        comentario: Option<String>,
    ) -> Result<Option<declaration::Model>, DbErr> {
        let result = entity::prelude::Declaration::update_many()
            .col_expr(declaration::Column::Estado, Expr::value(decision))
            .col_expr(
                declaration::Column::AgenteUserId,
                Expr::value(Some(agente_user_id)),
            )
            .col_expr(
                declaration::Column::ComentarioAgente,
                Expr::value(comentario),
            )
            .col_expr(
                declaration::Column::ValidatedAt,
                Expr::value(Some(Utc::now().naive_utc())),
            )
            .filter(declaration::Column::Id.eq(id))
            .filter(declaration::Column::Estado.eq(DeclarationState::Pendiente))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        entity::prelude::Declaration::find_by_id(id).one(self.db).await
    }
}

fn duplicate_from_db(err: DbErr, numero_documento: &str) -> DeclarationError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DeclarationError::DuplicateDocument(numero_documento.to_string())
        }
        _ => DeclarationError::Database(err),
    }
}
