//! Armado del catálogo público
//!
//! Junta servicios, vehículos y precios en el shape que consume el sitio de
//! reservas. Con `hotel_id` el listado de servicios se filtra por los
//! habilitados para ese hotel; sin él se devuelve el catálogo completo.

use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::dto::catalogo_dto::{
    CatalogoResponse, PrecioCatalogo, PreciosCatalogo, ServicioCatalogo, VehiculoCatalogo,
};
use crate::repositories::precio_repository::PrecioRepository;
use crate::repositories::servicio_repository::ServicioRepository;
use crate::repositories::vehiculo_repository::VehiculoRepository;
use crate::utils::errors::AppError;

pub struct CatalogoService {
    servicios: ServicioRepository,
    vehiculos: VehiculoRepository,
    precios: PrecioRepository,
}

impl CatalogoService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            servicios: ServicioRepository::new(pool.clone()),
            vehiculos: VehiculoRepository::new(pool.clone()),
            precios: PrecioRepository::new(pool),
        }
    }

    pub async fn armar_catalogo(
        &self,
        hotel_id: Option<Uuid>,
    ) -> Result<CatalogoResponse, AppError> {
        let servicios = match hotel_id {
            Some(id) => self.servicios.list_activos_para_hotel(id).await?,
            None => self.servicios.list_activos().await?,
        };
        let vehiculos = self.vehiculos.list_activos().await?;
        let precios = self.precios.list_activos().await?;

        let codigos_visibles: Vec<&str> =
            servicios.iter().map(|s| s.codigo.as_str()).collect();

        let mut por_categoria: HashMap<String, Vec<PrecioCatalogo>> = HashMap::new();
        for p in &precios {
            if !codigos_visibles.contains(&p.servicio_codigo.as_str()) {
                continue;
            }
            por_categoria
                .entry(p.categoria.clone())
                .or_default()
                .push(PrecioCatalogo {
                    servicio_codigo: p.servicio_codigo.clone(),
                    vehiculo_id: p.vehiculo_id,
                    pasajeros_min: p.pasajeros_min,
                    pasajeros_max: p.pasajeros_max,
                    precio: p.precio,
                });
        }

        // Servicios con tarifas embebidas en su configuración en lugar de la
        // tabla relacional: van bajo `dinamicos`, indexados por código.
        let mut dinamicos: HashMap<String, Vec<PrecioCatalogo>> = HashMap::new();
        for s in &servicios {
            let fallback = s.configuracion.0.precios_vehiculos_fallback();
            if fallback.is_empty() {
                continue;
            }
            dinamicos.insert(
                s.codigo.clone(),
                fallback
                    .iter()
                    .map(|f| PrecioCatalogo {
                        servicio_codigo: s.codigo.clone(),
                        vehiculo_id: f.vehiculo_id,
                        pasajeros_min: f.pasajeros_min,
                        pasajeros_max: f.pasajeros_max,
                        precio: f.precio,
                    })
                    .collect(),
            );
        }

        Ok(CatalogoResponse {
            servicios: servicios.into_iter().map(ServicioCatalogo::from).collect(),
            vehiculos: vehiculos.into_iter().map(VehiculoCatalogo::from).collect(),
            precios: PreciosCatalogo { por_categoria, dinamicos },
        })
    }
}
