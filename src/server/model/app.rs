use sea_orm::DatabaseConnection;

use crate::server::model::auth::AuthKeys;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: AuthKeys,
}
