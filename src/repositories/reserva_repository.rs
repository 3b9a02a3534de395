use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::reserva::{Asistente, Reserva, ReservaEstado};
use crate::utils::errors::AppError;

/// Datos ya resueltos de una reserva nueva (el desglose de precios viene
/// calculado por la librería de pricing, nunca se recalcula acá)
pub struct NuevaReserva {
    pub tipo_servicio: String,
    pub servicio_codigo: String,
    pub hotel_id: Option<Uuid>,
    pub codigo_tracking: String,
    pub idempotency_key: String,
    pub fecha_servicio: NaiveDate,
    pub hora_servicio: Option<NaiveTime>,
    pub pasajeros: i32,
    pub municipio: Option<String>,
    pub municipio_otro: Option<String>,
    pub nombre_contacto: String,
    pub email_contacto: String,
    pub telefono_contacto: String,
    pub asistentes: Vec<Asistente>,
    pub vehiculo_id: Option<Uuid>,
    pub precio_vehiculo: i64,
    pub total: i64,
    pub comision: i64,
    pub precio_final: i64,
    pub pendiente_cotizacion: bool,
    pub estado: ReservaEstado,
}

pub struct ReservaRepository {
    pool: PgPool,
}

impl ReservaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear una reserva con garantía de a-lo-sumo-una por envío.
    ///
    /// `idempotency_key` tiene índice único: si el insert no afecta filas
    /// es un reenvío y devolvemos la reserva original con `created = false`.
    pub async fn create_idempotente(
        &self,
        nueva: NuevaReserva,
    ) -> Result<(Reserva, bool), AppError> {
        let now = Utc::now();
        let insertada = sqlx::query_as::<_, Reserva>(
            r#"
            INSERT INTO reservas
                (id, tipo_servicio, servicio_codigo, hotel_id, codigo_tracking, idempotency_key,
                 fecha_servicio, hora_servicio, pasajeros, municipio, municipio_otro,
                 nombre_contacto, email_contacto, telefono_contacto, asistentes,
                 vehiculo_id, conductor, precio_vehiculo, total, comision, precio_final,
                 pendiente_cotizacion, tarifa_cancelacion, estado, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                    $16, NULL, $17, $18, $19, $20, $21, NULL, $22, $23, $23)
            ON CONFLICT (idempotency_key) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&nueva.tipo_servicio)
        .bind(&nueva.servicio_codigo)
        .bind(nueva.hotel_id)
        .bind(&nueva.codigo_tracking)
        .bind(&nueva.idempotency_key)
        .bind(nueva.fecha_servicio)
        .bind(nueva.hora_servicio)
        .bind(nueva.pasajeros)
        .bind(&nueva.municipio)
        .bind(&nueva.municipio_otro)
        .bind(&nueva.nombre_contacto)
        .bind(&nueva.email_contacto)
        .bind(&nueva.telefono_contacto)
        .bind(sqlx::types::Json(&nueva.asistentes))
        .bind(nueva.vehiculo_id)
        .bind(nueva.precio_vehiculo)
        .bind(nueva.total)
        .bind(nueva.comision)
        .bind(nueva.precio_final)
        .bind(nueva.pendiente_cotizacion)
        .bind(nueva.estado)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        match insertada {
            Some(reserva) => Ok((reserva, true)),
            None => {
                // Reenvío del mismo formulario: devolver la original
                let existente = self
                    .find_by_idempotency_key(&nueva.idempotency_key)
                    .await?
                    .ok_or_else(|| {
                        AppError::Internal(
                            "Conflicto de idempotencia sin reserva existente".to_string(),
                        )
                    })?;
                Ok((existente, false))
            }
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Reserva>, AppError> {
        let reserva = sqlx::query_as::<_, Reserva>("SELECT * FROM reservas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(reserva)
    }

    pub async fn find_by_idempotency_key(&self, key: &str) -> Result<Option<Reserva>, AppError> {
        let reserva =
            sqlx::query_as::<_, Reserva>("SELECT * FROM reservas WHERE idempotency_key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(reserva)
    }

    pub async fn find_by_codigo_tracking(&self, codigo: &str) -> Result<Option<Reserva>, AppError> {
        let reserva =
            sqlx::query_as::<_, Reserva>("SELECT * FROM reservas WHERE codigo_tracking = $1")
                .bind(codigo)
                .fetch_optional(&self.pool)
                .await?;

        Ok(reserva)
    }

    pub async fn list_por_tipo(&self, tipo_servicio: &str) -> Result<Vec<Reserva>, AppError> {
        let reservas = sqlx::query_as::<_, Reserva>(
            "SELECT * FROM reservas WHERE tipo_servicio = $1 ORDER BY created_at DESC",
        )
        .bind(tipo_servicio)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservas)
    }

    /// Persistir una transición de estado ya validada por el controller
    pub async fn update_estado(
        &self,
        id: Uuid,
        estado: ReservaEstado,
        total: Option<i64>,
        comision: Option<i64>,
        precio_final: Option<i64>,
        tarifa_cancelacion: Option<i64>,
        conductor: Option<String>,
        vehiculo_id: Option<Uuid>,
    ) -> Result<Reserva, AppError> {
        let reserva = sqlx::query_as::<_, Reserva>(
            r#"
            UPDATE reservas
            SET estado = $2,
                total = COALESCE($3, total),
                comision = COALESCE($4, comision),
                precio_final = COALESCE($5, precio_final),
                pendiente_cotizacion = CASE WHEN $3 IS NOT NULL THEN false ELSE pendiente_cotizacion END,
                tarifa_cancelacion = COALESCE($6, tarifa_cancelacion),
                conductor = COALESCE($7, conductor),
                vehiculo_id = COALESCE($8, vehiculo_id),
                updated_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(estado)
        .bind(total)
        .bind(comision)
        .bind(precio_final)
        .bind(tarifa_cancelacion)
        .bind(conductor)
        .bind(vehiculo_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(reserva)
    }
}
