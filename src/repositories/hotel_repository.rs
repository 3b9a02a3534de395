use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::hotel::{Admin, ComisionFlat, Hotel};
use crate::utils::errors::AppError;

pub struct HotelRepository {
    pool: PgPool,
}

impl HotelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: String,
        email: String,
        comision_porcentaje: Decimal,
        tarifa_cancelacion: Option<i64>,
    ) -> Result<Hotel, AppError> {
        let hotel = sqlx::query_as::<_, Hotel>(
            r#"
            INSERT INTO hoteles (id, nombre, email, comision_porcentaje, tarifa_cancelacion, activo, created_at)
            VALUES ($1, $2, $3, $4, $5, true, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(email)
        .bind(comision_porcentaje)
        .bind(tarifa_cancelacion)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(hotel)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Hotel>, AppError> {
        let hotel = sqlx::query_as::<_, Hotel>("SELECT * FROM hoteles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(hotel)
    }

    pub async fn list_all(&self) -> Result<Vec<Hotel>, AppError> {
        let hoteles = sqlx::query_as::<_, Hotel>("SELECT * FROM hoteles ORDER BY nombre")
            .fetch_all(&self.pool)
            .await?;

        Ok(hoteles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<String>,
        email: Option<String>,
        comision_porcentaje: Option<Decimal>,
        tarifa_cancelacion: Option<i64>,
        activo: Option<bool>,
    ) -> Result<Hotel, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hotel no encontrado".to_string()))?;

        let hotel = sqlx::query_as::<_, Hotel>(
            r#"
            UPDATE hoteles
            SET nombre = $2, email = $3, comision_porcentaje = $4, tarifa_cancelacion = $5, activo = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(current.nombre))
        .bind(email.unwrap_or(current.email))
        .bind(comision_porcentaje.unwrap_or(current.comision_porcentaje))
        .bind(tarifa_cancelacion.or(current.tarifa_cancelacion))
        .bind(activo.unwrap_or(current.activo))
        .fetch_one(&self.pool)
        .await?;

        Ok(hotel)
    }

    /// Códigos de servicio habilitados para un hotel
    pub async fn list_servicios_activos(&self, hotel_id: Uuid) -> Result<Vec<String>, AppError> {
        let filas: Vec<(String,)> = sqlx::query_as(
            "SELECT servicio_codigo FROM hoteles_servicios_activos WHERE hotel_id = $1 ORDER BY servicio_codigo",
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(filas.into_iter().map(|(codigo,)| codigo).collect())
    }

    /// Reemplazar el conjunto de servicios habilitados de un hotel
    pub async fn replace_servicios_activos(
        &self,
        hotel_id: Uuid,
        servicios: &[String],
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM hoteles_servicios_activos WHERE hotel_id = $1")
            .bind(hotel_id)
            .execute(&mut *tx)
            .await?;

        for codigo in servicios {
            sqlx::query(
                "INSERT INTO hoteles_servicios_activos (hotel_id, servicio_codigo) VALUES ($1, $2)",
            )
            .bind(hotel_id)
            .bind(codigo)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Override de comisión fija para (hotel, servicio, vehículo)
    pub async fn find_comision_flat(
        &self,
        hotel_id: Uuid,
        servicio_codigo: &str,
        vehiculo_id: Uuid,
    ) -> Result<Option<ComisionFlat>, AppError> {
        let comision = sqlx::query_as::<_, ComisionFlat>(
            "SELECT * FROM comisiones_flat WHERE hotel_id = $1 AND servicio_codigo = $2 AND vehiculo_id = $3",
        )
        .bind(hotel_id)
        .bind(servicio_codigo)
        .bind(vehiculo_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comision)
    }

    pub async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(admin)
    }
}
