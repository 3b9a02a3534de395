use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::precio::{PrecioAdicional, PrecioVehiculo, TipoAdicional};
use crate::utils::errors::AppError;

pub struct PrecioRepository {
    pool: PgPool,
}

impl PrecioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear o reemplazar el precio de (servicio, categoria, vehículo).
    ///
    /// Invariante: a lo sumo una entrada activa autoritativa por
    /// (servicio, vehículo); desactivamos la anterior antes de insertar.
    pub async fn upsert_precio_vehiculo(
        &self,
        servicio_codigo: String,
        categoria: String,
        vehiculo_id: Uuid,
        pasajeros_min: i32,
        pasajeros_max: i32,
        precio: i64,
        vigente_desde: Option<NaiveDate>,
        vigente_hasta: Option<NaiveDate>,
        activo: bool,
    ) -> Result<PrecioVehiculo, AppError> {
        let mut tx = self.pool.begin().await?;

        if activo {
            sqlx::query(
                "UPDATE precios_vehiculos SET activo = false WHERE servicio_codigo = $1 AND vehiculo_id = $2 AND activo = true",
            )
            .bind(&servicio_codigo)
            .bind(vehiculo_id)
            .execute(&mut *tx)
            .await?;
        }

        let entrada = sqlx::query_as::<_, PrecioVehiculo>(
            r#"
            INSERT INTO precios_vehiculos
                (id, servicio_codigo, categoria, vehiculo_id, pasajeros_min, pasajeros_max, precio, activo, vigente_desde, vigente_hasta, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&servicio_codigo)
        .bind(&categoria)
        .bind(vehiculo_id)
        .bind(pasajeros_min)
        .bind(pasajeros_max)
        .bind(precio)
        .bind(activo)
        .bind(vigente_desde)
        .bind(vigente_hasta)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(entrada)
    }

    pub async fn delete_precio_vehiculo_by_id(&self, precio_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM precios_vehiculos WHERE id = $1")
            .bind(precio_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Precio no encontrado".to_string()));
        }
        Ok(())
    }

    pub async fn delete_precio_vehiculo_by_combo(
        &self,
        servicio_codigo: &str,
        vehiculo_id: Uuid,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            "DELETE FROM precios_vehiculos WHERE servicio_codigo = $1 AND vehiculo_id = $2",
        )
        .bind(servicio_codigo)
        .bind(vehiculo_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Precio no encontrado".to_string()));
        }
        Ok(())
    }

    /// Entradas activas y vigentes de un servicio a una fecha dada
    pub async fn list_vigentes_por_servicio(
        &self,
        servicio_codigo: &str,
        fecha: NaiveDate,
    ) -> Result<Vec<PrecioVehiculo>, AppError> {
        let precios = sqlx::query_as::<_, PrecioVehiculo>(
            r#"
            SELECT * FROM precios_vehiculos
            WHERE servicio_codigo = $1 AND activo = true
              AND (vigente_desde IS NULL OR vigente_desde <= $2)
              AND (vigente_hasta IS NULL OR vigente_hasta >= $2)
            ORDER BY pasajeros_min
            "#,
        )
        .bind(servicio_codigo)
        .bind(fecha)
        .fetch_all(&self.pool)
        .await?;

        Ok(precios)
    }

    /// Todas las entradas activas, para armar el catálogo
    pub async fn list_activos(&self) -> Result<Vec<PrecioVehiculo>, AppError> {
        let precios = sqlx::query_as::<_, PrecioVehiculo>(
            "SELECT * FROM precios_vehiculos WHERE activo = true ORDER BY servicio_codigo, pasajeros_min",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(precios)
    }

    pub async fn upsert_precio_adicional(
        &self,
        servicio_codigo: String,
        tipo: TipoAdicional,
        sub_rango: Option<String>,
        precio: i64,
        activo: bool,
    ) -> Result<PrecioAdicional, AppError> {
        let mut tx = self.pool.begin().await?;

        if activo {
            sqlx::query(
                "UPDATE precios_adicionales SET activo = false WHERE servicio_codigo = $1 AND tipo = $2 AND sub_rango IS NOT DISTINCT FROM $3 AND activo = true",
            )
            .bind(&servicio_codigo)
            .bind(tipo)
            .bind(&sub_rango)
            .execute(&mut *tx)
            .await?;
        }

        let adicional = sqlx::query_as::<_, PrecioAdicional>(
            r#"
            INSERT INTO precios_adicionales (id, servicio_codigo, tipo, sub_rango, precio, activo, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&servicio_codigo)
        .bind(tipo)
        .bind(&sub_rango)
        .bind(precio)
        .bind(activo)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(adicional)
    }

    /// Adicionales activos de un servicio
    pub async fn list_adicionales_por_servicio(
        &self,
        servicio_codigo: &str,
    ) -> Result<Vec<PrecioAdicional>, AppError> {
        let adicionales = sqlx::query_as::<_, PrecioAdicional>(
            "SELECT * FROM precios_adicionales WHERE servicio_codigo = $1 AND activo = true ORDER BY tipo, sub_rango",
        )
        .bind(servicio_codigo)
        .fetch_all(&self.pool)
        .await?;

        Ok(adicionales)
    }
}
