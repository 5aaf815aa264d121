use chrono::Utc;
use entity::exporter::{self, CatalogStatus};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::data::importer::{ADMIN_LIST_LIMIT, SEARCH_DEFAULT_LIMIT, SEARCH_MAX_LIMIT};

pub struct ExporterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExporterRepository<'a> {
    /// Creates a new instance of [`ExporterRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert or update a catalog entry keyed by its external id
    pub async fn upsert(
        &self,
        id: String,
        nombre: String,
        estado: CatalogStatus,
    ) -> Result<(), DbErr> {
        let entry = exporter::ActiveModel {
            id: ActiveValue::Set(id),
            nombre: ActiveValue::Set(nombre),
            estado: ActiveValue::Set(estado),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::Exporter::insert(entry)
            .on_conflict(
                OnConflict::column(exporter::Column::Id)
                    .update_columns([exporter::Column::Nombre, exporter::Column::Estado])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Set the estado of an existing entry; false when the id is unknown
    pub async fn set_estado(&self, id: &str, estado: CatalogStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Exporter::update_many()
            .col_expr(exporter::Column::Estado, Expr::value(estado))
            .filter(exporter::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Admin listing, newest first, optionally filtered by substring on
    /// id or nombre
    pub async fn list_admin(&self, q: Option<&str>) -> Result<Vec<exporter::Model>, DbErr> {
        let mut query = entity::prelude::Exporter::find();

        if let Some(q) = q.filter(|q| !q.trim().is_empty()) {
            let q = q.trim();
            query = query.filter(
                Condition::any()
                    .add(exporter::Column::Id.contains(q))
                    .add(exporter::Column::Nombre.contains(q)),
            );
        }

        query
            .order_by_desc(exporter::Column::CreatedAt)
            .limit(ADMIN_LIST_LIMIT)
            .all(self.db)
            .await
    }

    /// Catalog lookup by estado with optional substring filter, ordered by
    /// nombre; `limit` is clamped to [`SEARCH_MAX_LIMIT`]
    pub async fn search(
        &self,
        estado: CatalogStatus,
        q: Option<&str>,
        limit: Option<u64>,
    ) -> Result<Vec<exporter::Model>, DbErr> {
        let limit = limit.unwrap_or(SEARCH_DEFAULT_LIMIT).min(SEARCH_MAX_LIMIT);

        let mut query = entity::prelude::Exporter::find()
            .filter(exporter::Column::Estado.eq(estado));

        if let Some(q) = q.filter(|q| !q.trim().is_empty()) {
            let q = q.trim();
            query = query.filter(
                Condition::any()
                    .add(exporter::Column::Id.contains(q))
                    .add(exporter::Column::Nombre.contains(q)),
            );
        }

        query
            .order_by_asc(exporter::Column::Nombre)
            .limit(limit)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use entity::exporter::CatalogStatus;
    use siglad_test_utils::{test_setup_with_siglad_tables, TestError};

    use super::ExporterRepository;

    /// Expect substring search to match on id or nombre
    #[tokio::test]
    async fn search_matches_id_or_nombre() -> Result<(), TestError> {
        let test = test_setup_with_siglad_tables!()?;
        let repository = ExporterRepository::new(&test.db);

        repository
            .upsert(
                "EXP-001".to_string(),
                "Cafetalera del Sur".to_string(),
                CatalogStatus::Activo,
            )
            .await?;
        repository
            .upsert(
                "EXP-002".to_string(),
                "Azucarera Norte".to_string(),
                CatalogStatus::Activo,
            )
            .await?;

        let by_nombre = repository
            .search(CatalogStatus::Activo, Some("Cafetalera"), None)
            .await?;
        assert_eq!(by_nombre.len(), 1);
        assert_eq!(by_nombre[0].id, "EXP-001");

        let by_id = repository
            .search(CatalogStatus::Activo, Some("EXP-002"), None)
            .await?;
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].nombre, "Azucarera Norte");

        Ok(())
    }
}
