use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::servicio::{ConfiguracionServicio, Servicio, TipoActividad};
use crate::utils::errors::AppError;

pub struct ServicioRepository {
    pool: PgPool,
}

impl ServicioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        codigo: String,
        nombre_es: String,
        nombre_en: String,
        descripcion_es: Option<String>,
        descripcion_en: Option<String>,
        tipo_actividad: TipoActividad,
        configuracion: ConfiguracionServicio,
    ) -> Result<Servicio, AppError> {
        let now = Utc::now();
        let servicio = sqlx::query_as::<_, Servicio>(
            r#"
            INSERT INTO servicios (id, codigo, nombre_es, nombre_en, descripcion_es, descripcion_en, tipo_actividad, activo, configuracion, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, true, $8, $9, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(codigo)
        .bind(nombre_es)
        .bind(nombre_en)
        .bind(descripcion_es)
        .bind(descripcion_en)
        .bind(tipo_actividad)
        .bind(sqlx::types::Json(configuracion))
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(servicio)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Servicio>, AppError> {
        let servicio = sqlx::query_as::<_, Servicio>("SELECT * FROM servicios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(servicio)
    }

    pub async fn find_by_codigo(&self, codigo: &str) -> Result<Option<Servicio>, AppError> {
        let servicio = sqlx::query_as::<_, Servicio>("SELECT * FROM servicios WHERE codigo = $1")
            .bind(codigo)
            .fetch_optional(&self.pool)
            .await?;

        Ok(servicio)
    }

    pub async fn codigo_exists(&self, codigo: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM servicios WHERE codigo = $1)")
                .bind(codigo)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list_all(&self) -> Result<Vec<Servicio>, AppError> {
        let servicios =
            sqlx::query_as::<_, Servicio>("SELECT * FROM servicios ORDER BY codigo")
                .fetch_all(&self.pool)
                .await?;

        Ok(servicios)
    }

    pub async fn list_activos(&self) -> Result<Vec<Servicio>, AppError> {
        let servicios = sqlx::query_as::<_, Servicio>(
            "SELECT * FROM servicios WHERE activo = true ORDER BY codigo",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(servicios)
    }

    /// Servicios activos visibles para un hotel
    pub async fn list_activos_para_hotel(&self, hotel_id: Uuid) -> Result<Vec<Servicio>, AppError> {
        let servicios = sqlx::query_as::<_, Servicio>(
            r#"
            SELECT s.* FROM servicios s
            JOIN hoteles_servicios_activos h ON h.servicio_codigo = s.codigo
            WHERE s.activo = true AND h.hotel_id = $1
            ORDER BY s.codigo
            "#,
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(servicios)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre_es: Option<String>,
        nombre_en: Option<String>,
        descripcion_es: Option<String>,
        descripcion_en: Option<String>,
        activo: Option<bool>,
        configuracion: Option<ConfiguracionServicio>,
    ) -> Result<Servicio, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Servicio no encontrado".to_string()))?;

        let servicio = sqlx::query_as::<_, Servicio>(
            r#"
            UPDATE servicios
            SET nombre_es = $2, nombre_en = $3, descripcion_es = $4, descripcion_en = $5,
                activo = $6, configuracion = $7, updated_at = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre_es.unwrap_or(current.nombre_es))
        .bind(nombre_en.unwrap_or(current.nombre_en))
        .bind(descripcion_es.or(current.descripcion_es))
        .bind(descripcion_en.or(current.descripcion_en))
        .bind(activo.unwrap_or(current.activo))
        .bind(sqlx::types::Json(configuracion.unwrap_or(current.configuracion.0)))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(servicio)
    }

    /// Soft delete: desactivar sin borrar el histórico
    pub async fn deactivate(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE servicios SET activo = false, updated_at = $2 WHERE id = $1")
            .bind(id)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Servicio no encontrado".to_string()));
        }
        Ok(())
    }

    /// Hard delete
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM servicios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Servicio no encontrado".to_string()));
        }
        Ok(())
    }
}
