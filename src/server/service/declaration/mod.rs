pub mod validate;

use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::declaration::{
        DeclarationCreatedDto, DeclarationDetailDto, DeclarationItemDto, DeclarationSummaryDto,
        SubmitDeclarationDto,
    },
    server::{
        data::declaration::DeclarationRepository,
        error::{declaration::DeclarationError, Error},
        service::audit::{AuditEvent, AuditRecorder, RESULT_EXITO, RESULT_FALLO},
    },
};

use self::validate::validate;

pub struct DeclarationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeclarationService<'a> {
    /// Creates a new instance of [`DeclarationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Run the submission pipeline: validate the payload, persist the
    /// declaration transactionally, audit the outcome either way.
    pub async fn submit(
        &self,
        owner_user_id: i32,
        submission: SubmitDeclarationDto,
    ) -> Result<DeclarationCreatedDto, Error> {
        let recorder = AuditRecorder::new(self.db);
        let duca = submission.duca.unwrap_or_default();
        let numero_documento = duca.numero_documento.clone();

        let valid = match validate(duca) {
            Ok(valid) => valid,
            Err(err) => {
                recorder
                    .record(submit_event(
                        owner_user_id,
                        None,
                        RESULT_FALLO,
                        numero_documento,
                        Some(err.to_string()),
                    ))
                    .await;
                return Err(err.into());
            }
        };

        let repository = DeclarationRepository::new(self.db);
        let id = match repository
            .create(&valid.header, &valid.items, owner_user_id)
            .await
        {
            Ok(id) => id,
            Err(err) => {
                recorder
                    .record(submit_event(
                        owner_user_id,
                        None,
                        RESULT_FALLO,
                        Some(valid.header.numero_documento.clone()),
                        Some(err.to_string()),
                    ))
                    .await;
                return Err(err.into());
            }
        };

        recorder
            .record(submit_event(
                owner_user_id,
                Some(id),
                RESULT_EXITO,
                Some(valid.header.numero_documento.clone()),
                None,
            ))
            .await;

        Ok(DeclarationCreatedDto {
            id,
            message: "Declaración registrada correctamente".to_string(),
        })
    }

    /// Full declaration detail with line items ordered by `linea`
    pub async fn get_detail(&self, id: i32) -> Result<DeclarationDetailDto, Error> {
        let repository = DeclarationRepository::new(self.db);

        let (header, items) = repository
            .get_by_id(id)
            .await
            .map_err(DeclarationError::from)?
            .ok_or(DeclarationError::NotFound(id))?;

        Ok(DeclarationDetailDto {
            id: header.id,
            numero_documento: header.numero_documento,
            fecha_emision: header.fecha_emision,
            pais_emisor: header.pais_emisor,
            tipo_operacion: header.tipo_operacion,
            estado: header.estado.to_value(),
            estado_documento: header.estado_documento,
            medio_transporte: header.medio_transporte,
            placa_vehiculo: header.placa_vehiculo,
            aduana_salida: header.ruta_aduana_salida,
            aduana_entrada: header.ruta_aduana_entrada,
            pais_destino: header.ruta_pais_destino,
            kilometros_aproximados: header.ruta_km_aprox,
            moneda: header.moneda,
            valor_aduana_total: header.valor_aduana_total,
            exportador_id: header.exportador_id,
            exportador_nombre: header.exportador_nombre,
            importador_id: header.importador_id,
            importador_nombre: header.importador_nombre,
            items: items
                .into_iter()
                .map(|item| DeclarationItemDto {
                    linea: item.linea,
                    descripcion: item.descripcion,
                    cantidad: item.cantidad,
                    unidad_medida: item.unidad_medida,
                    valor_unitario: item.valor_unitario,
                    pais_origen: item.pais_origen,
                })
                .collect(),
        })
    }

    /// A transporter's own declarations, newest first
    pub async fn list_mine(
        &self,
        owner_user_id: i32,
    ) -> Result<Vec<DeclarationSummaryDto>, Error> {
        let repository = DeclarationRepository::new(self.db);
        let recorder = AuditRecorder::new(self.db);

        let rows = repository
            .list_for_owner(owner_user_id)
            .await
            .map_err(DeclarationError::from)?;

        recorder
            .record(AuditEvent {
                user_id: Some(owner_user_id),
                action: "VIEW",
                entity: "DECLARATION",
                entity_id: None,
                operation: Some("Consulta Declaracion"),
                result: RESULT_EXITO,
                num_declaracion: None,
                details: None,
            })
            .await;

        Ok(rows
            .into_iter()
            .map(|row| DeclarationSummaryDto {
                id: row.id,
                numero_documento: row.numero_documento,
                estado: row.estado.to_value(),
                estado_documento: row.estado_documento,
                created_at: row.created_at,
                validated_at: row.validated_at,
            })
            .collect())
    }
}

fn submit_event(
    owner_user_id: i32,
    id: Option<i32>,
    result: &'static str,
    num_declaracion: Option<String>,
    details: Option<String>,
) -> AuditEvent {
    AuditEvent {
        user_id: Some(owner_user_id),
        action: "CREATE",
        entity: "DECLARATION",
        entity_id: id.map(|id| id.to_string()),
        operation: Some("Registro declaración"),
        result,
        num_declaracion,
        details,
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::EntityTrait;
    use siglad_test_utils::{
        fixtures::{catalog::insert_importer, declaration::duca_payload, user::insert_user},
        test_setup_with_siglad_tables, TestError, TestSetup,
    };

    use super::DeclarationService;
    use crate::{
        model::declaration::SubmitDeclarationDto,
        server::error::{declaration::DeclarationError, Error},
    };

    fn submission(numero: &str, importador_id: &str) -> SubmitDeclarationDto {
        SubmitDeclarationDto {
            duca: Some(serde_json::from_value(duca_payload(numero, importador_id)).unwrap()),
        }
    }

    async fn setup_with_owner() -> Result<(TestSetup, i32), TestError> {
        let test = test_setup_with_siglad_tables!()?;
        let owner = insert_user(
            &test.db,
            "TRANSPORTISTA",
            "trans@siglad.local",
            "password123",
        )
        .await?;
        insert_importer(&test.db, "IMP-001", "Importadora La Ceiba", "ACTIVO").await?;
        Ok((test, owner.id))
    }

    /// Expect a submitted declaration to come back in full detail with
    /// normalized codes
    #[tokio::test]
    async fn submit_then_detail_round_trips() -> Result<(), TestError> {
        let (test, owner_id) = setup_with_owner().await?;
        let service = DeclarationService::new(&test.db);

        let created = service
            .submit(owner_id, submission("DOC-001", "IMP-001"))
            .await
            .unwrap();
        assert_eq!(created.message, "Declaración registrada correctamente");

        let detail = service.get_detail(created.id).await.unwrap();
        assert_eq!(detail.numero_documento, "DOC-001");
        assert_eq!(detail.estado, "PENDIENTE");
        assert_eq!(detail.items.len(), 1);
        assert_eq!(detail.items[0].pais_origen, "GT");

        Ok(())
    }

    /// Expect an invalid payload to be rejected before touching the store
    #[tokio::test]
    async fn submit_invalid_payload_is_rejected() -> Result<(), TestError> {
        let (test, owner_id) = setup_with_owner().await?;
        let service = DeclarationService::new(&test.db);

        let mut submission = submission("DOC-001", "IMP-001");
        if let Some(duca) = submission.duca.as_mut() {
            duca.numero_documento = None;
        }

        let result = service.submit(owner_id, submission).await;

        assert!(matches!(
            result,
            Err(Error::DeclarationError(DeclarationError::MissingFields(_)))
        ));

        let headers = entity::prelude::Declaration::find().all(&test.db).await?;
        assert!(headers.is_empty());

        Ok(())
    }

    /// Expect an unknown id to yield NotFound
    #[tokio::test]
    async fn detail_of_unknown_id_is_not_found() -> Result<(), TestError> {
        let (test, _) = setup_with_owner().await?;
        let service = DeclarationService::new(&test.db);

        let result = service.get_detail(999).await;

        assert!(matches!(
            result,
            Err(Error::DeclarationError(DeclarationError::NotFound(999)))
        ));

        Ok(())
    }

    /// Expect list_mine to only return the caller's declarations
    #[tokio::test]
    async fn list_mine_scopes_to_owner() -> Result<(), TestError> {
        let (test, owner_id) = setup_with_owner().await?;
        let service = DeclarationService::new(&test.db);

        let other = insert_user(&test.db, "TRANSPORTISTA", "otro@siglad.local", "password123")
            .await?;

        service
            .submit(owner_id, submission("DOC-001", "IMP-001"))
            .await
            .unwrap();
        service
            .submit(other.id, submission("DOC-002", "IMP-001"))
            .await
            .unwrap();

        let mine = service.list_mine(owner_id).await.unwrap();

        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].numero_documento, "DOC-001");

        Ok(())
    }
}
