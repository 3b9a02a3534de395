use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehiculo::Vehiculo;
use crate::utils::errors::AppError;

pub struct VehiculoRepository {
    pool: PgPool,
}

impl VehiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: String,
        capacidad_min: i32,
        capacidad_max: i32,
    ) -> Result<Vehiculo, AppError> {
        let vehiculo = sqlx::query_as::<_, Vehiculo>(
            r#"
            INSERT INTO vehiculos (id, nombre, capacidad_min, capacidad_max, activo, created_at)
            VALUES ($1, $2, $3, $4, true, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(capacidad_min)
        .bind(capacidad_max)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehiculo)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehiculo>, AppError> {
        let vehiculo = sqlx::query_as::<_, Vehiculo>("SELECT * FROM vehiculos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehiculo)
    }

    pub async fn list_all(&self) -> Result<Vec<Vehiculo>, AppError> {
        let vehiculos =
            sqlx::query_as::<_, Vehiculo>("SELECT * FROM vehiculos ORDER BY capacidad_min")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehiculos)
    }

    pub async fn list_activos(&self) -> Result<Vec<Vehiculo>, AppError> {
        let vehiculos = sqlx::query_as::<_, Vehiculo>(
            "SELECT * FROM vehiculos WHERE activo = true ORDER BY capacidad_min",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehiculos)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<String>,
        capacidad_min: Option<i32>,
        capacidad_max: Option<i32>,
        activo: Option<bool>,
    ) -> Result<Vehiculo, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehiculo = sqlx::query_as::<_, Vehiculo>(
            r#"
            UPDATE vehiculos
            SET nombre = $2, capacidad_min = $3, capacidad_max = $4, activo = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(current.nombre))
        .bind(capacidad_min.unwrap_or(current.capacidad_min))
        .bind(capacidad_max.unwrap_or(current.capacidad_max))
        .bind(activo.unwrap_or(current.activo))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehiculo)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehiculos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }
        Ok(())
    }
}
