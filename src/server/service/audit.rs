use sea_orm::DatabaseConnection;

use crate::server::data::audit::AuditLogRepository;

pub static RESULT_EXITO: &str = "EXITO";
pub static RESULT_FALLO: &str = "FALLO";

/// A structured audit event: who did what to which entity, with what outcome,
/// optionally correlated to a DUCA document number.
pub struct AuditEvent {
    pub user_id: Option<i32>,
    pub action: &'static str,
    pub entity: &'static str,
    pub entity_id: Option<String>,
    pub operation: Option<&'static str>,
    pub result: &'static str,
    pub num_declaracion: Option<String>,
    pub details: Option<String>,
}

/// Fire-and-forget audit sink.
///
/// Recording can never fail the caller: insert errors are logged to the
/// operator channel and dropped.
pub struct AuditRecorder<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditRecorder<'a> {
    /// Creates a new instance of [`AuditRecorder`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record an audit event, swallowing any storage failure
    pub async fn record(&self, event: AuditEvent) {
        let repository = AuditLogRepository::new(self.db);

        if let Err(err) = repository.insert(&event).await {
            tracing::error!(
                action = event.action,
                entity = event.entity,
                "failed to record audit event: {err}"
            );
        }
    }
}
