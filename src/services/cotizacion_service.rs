//! Orquestación de cotizaciones
//!
//! Único punto donde el catálogo persistido se convierte en un precio: el
//! flujo de reserva público y la vista previa del panel llaman acá, y acá se
//! llama a la librería pura de `pricing`. Ningún controller calcula precios
//! por su cuenta.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::servicio::Servicio;
use crate::pricing::{
    calcular_total, opciones_mejora, resolver_adicionales, resolver_comision, resolver_vehiculo,
    Cotizacion, EntradaAdicional, EntradaVehiculo, PricingError, SeleccionAdicionales,
};
use crate::repositories::hotel_repository::HotelRepository;
use crate::repositories::precio_repository::PrecioRepository;
use crate::repositories::servicio_repository::ServicioRepository;
use crate::utils::errors::AppError;

/// Resultado completo de una cotización
pub struct CotizacionCalculada {
    pub servicio: Servicio,
    pub vehiculo: EntradaVehiculo,
    pub opciones_mejora: Vec<EntradaVehiculo>,
    pub cotizacion: Cotizacion,
    pub comision: i64,
    pub precio_final: i64,
}

pub struct CotizacionService {
    servicios: ServicioRepository,
    precios: PrecioRepository,
    hoteles: HotelRepository,
}

impl CotizacionService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            servicios: ServicioRepository::new(pool.clone()),
            precios: PrecioRepository::new(pool.clone()),
            hoteles: HotelRepository::new(pool),
        }
    }

    pub async fn cotizar(
        &self,
        hotel_id: Option<Uuid>,
        servicio_codigo: &str,
        fecha: NaiveDate,
        pasajeros: i32,
        vehiculo_seleccionado: Option<Uuid>,
        seleccion: &SeleccionAdicionales,
    ) -> Result<CotizacionCalculada, AppError> {
        let servicio = self
            .servicios
            .find_by_codigo(servicio_codigo)
            .await?
            .filter(|s| s.activo)
            .ok_or_else(|| {
                AppError::NotFound(format!("Servicio '{}' no encontrado", servicio_codigo))
            })?;

        // Tarifas de vehículo: tabla relacional vigente a la fecha del
        // servicio, o las embebidas en la configuración si no hay filas.
        let filas = self
            .precios
            .list_vigentes_por_servicio(servicio_codigo, fecha)
            .await?;
        let entradas: Vec<EntradaVehiculo> = if filas.is_empty() {
            servicio
                .configuracion
                .0
                .precios_vehiculos_fallback()
                .iter()
                .map(EntradaVehiculo::from)
                .collect()
        } else {
            filas.iter().map(EntradaVehiculo::from).collect()
        };

        let vehiculo = resolver_vehiculo(pasajeros, &entradas, vehiculo_seleccionado)
            .map_err(map_pricing_error)?
            .clone();
        let mejoras: Vec<EntradaVehiculo> = opciones_mejora(&vehiculo, &entradas)
            .into_iter()
            .cloned()
            .collect();

        let tabla: Vec<EntradaAdicional> = self
            .precios
            .list_adicionales_por_servicio(servicio_codigo)
            .await?
            .iter()
            .map(EntradaAdicional::from)
            .collect();

        let lineas = resolver_adicionales(
            seleccion,
            pasajeros,
            &tabla,
            servicio.configuracion.0.campos_personalizados(),
            servicio.configuracion.0.precios_municipios(),
        );
        let cotizacion = calcular_total(vehiculo.precio, lineas, seleccion.municipio_es_otro());

        let (flat, porcentaje) = match hotel_id {
            Some(id) => {
                let hotel = self
                    .hoteles
                    .find_by_id(id)
                    .await?
                    .filter(|h| h.activo)
                    .ok_or_else(|| AppError::NotFound("Hotel no encontrado".to_string()))?;
                let flat = self
                    .hoteles
                    .find_comision_flat(id, servicio_codigo, vehiculo.vehiculo_id)
                    .await?
                    .map(|c| c.monto);
                (flat, hotel.comision_porcentaje)
            }
            None => (None, Decimal::ZERO),
        };

        let comision = resolver_comision(flat, porcentaje, cotizacion.total);
        let precio_final = crate::pricing::precio_final(cotizacion.total, comision);

        Ok(CotizacionCalculada {
            servicio,
            vehiculo,
            opciones_mejora: mejoras,
            cotizacion,
            comision,
            precio_final,
        })
    }
}

/// Un servicio sin tarifa para esos pasajeros no es un error del sistema:
/// la reserva queda pendiente de cotización manual. Las otras variantes sí
/// son requests inválidos.
fn map_pricing_error(e: PricingError) -> AppError {
    match e {
        PricingError::SinVehiculoDisponible { pasajeros } => AppError::PendienteCotizacion(
            format!("No hay tarifa configurada para {} pasajeros", pasajeros),
        ),
        PricingError::PasajerosInvalidos(p) => {
            AppError::BadRequest(format!("Cantidad de pasajeros inválida: {}", p))
        }
        PricingError::VehiculoNoElegible(id) => AppError::BadRequest(format!(
            "El vehículo {} no es elegible para esta reserva",
            id
        )),
    }
}
