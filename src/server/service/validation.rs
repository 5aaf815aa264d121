use entity::declaration::DeclarationState;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::declaration::{DecisionDto, DecisionResultDto, PendingDeclarationDto},
    server::{
        data::declaration::DeclarationRepository,
        error::{declaration::DeclarationError, Error},
        service::audit::{AuditEvent, AuditRecorder, RESULT_EXITO},
    },
};

pub struct ValidationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ValidationService<'a> {
    /// Creates a new instance of [`ValidationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The agent queue: every PENDIENTE declaration, oldest first
    pub async fn list_pending(&self) -> Result<Vec<PendingDeclarationDto>, Error> {
        let repository = DeclarationRepository::new(self.db);

        let rows = repository
            .list_pending()
            .await
            .map_err(DeclarationError::from)?;

        Ok(rows
            .into_iter()
            .map(|row| PendingDeclarationDto {
                id: row.id,
                numero_documento: row.numero_documento,
                fecha_emision: row.fecha_emision,
                importador_nombre: row.importador_nombre,
                exportador_nombre: row.exportador_nombre,
                valor_aduana_total: row.valor_aduana_total,
                moneda: row.moneda,
                estado: row.estado.to_value(),
            })
            .collect())
    }

    /// Record an agent decision on a PENDIENTE declaration.
    ///
    /// The decision string is checked before any query so a malformed value
    /// never reaches the store. A declaration that is absent or already
    /// decided yields the same error either way.
    pub async fn decide(
        &self,
        agente_user_id: i32,
        id: i32,
        decision: DecisionDto,
    ) -> Result<DecisionResultDto, Error> {
        let estado = match decision.decision.as_deref() {
            Some("VALIDADA") => DeclarationState::Validada,
            Some("RECHAZADA") => DeclarationState::Rechazada,
            other => {
                return Err(DeclarationError::InvalidDecision(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        let comentario = decision
            .comentario
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let repository = DeclarationRepository::new(self.db);
        let decided = repository
            .decide(id, estado, agente_user_id, comentario)
            .await
            .map_err(DeclarationError::from)?
            .ok_or(DeclarationError::NotFoundOrAlreadyDecided(id))?;

        let recorder = AuditRecorder::new(self.db);
        recorder
            .record(AuditEvent {
                user_id: Some(agente_user_id),
                action: "VALIDATE",
                entity: "DECLARATION",
                entity_id: Some(decided.id.to_string()),
                operation: Some("Validación DUCA"),
                result: RESULT_EXITO,
                num_declaracion: Some(decided.numero_documento),
                details: Some(format!("Decision={}", estado.to_value())),
            })
            .await;

        Ok(DecisionResultDto {
            ok: true,
            id: decided.id,
            estado: decided.estado.to_value(),
        })
    }
}
