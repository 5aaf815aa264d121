use chrono::Utc;
use entity::audit_log;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::service::audit::AuditEvent;

pub struct AuditLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogRepository<'a> {
    /// Creates a new instance of [`AuditLogRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert one audit event row
    pub async fn insert(&self, event: &AuditEvent) -> Result<audit_log::Model, DbErr> {
        let entry = audit_log::ActiveModel {
            user_id: ActiveValue::Set(event.user_id),
            action: ActiveValue::Set(event.action.to_string()),
            entity: ActiveValue::Set(event.entity.to_string()),
            entity_id: ActiveValue::Set(event.entity_id.clone()),
            operation: ActiveValue::Set(event.operation.map(str::to_string)),
            result: ActiveValue::Set(Some(event.result.to_string())),
            num_declaracion: ActiveValue::Set(event.num_declaracion.clone()),
            details: ActiveValue::Set(event.details.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entry.insert(self.db).await
    }
}
