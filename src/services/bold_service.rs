//! Integración con Bold (pasarela de pagos)
//!
//! Genera la firma de integridad que el widget de pago embebido exige:
//! `SHA-256(order_id + amount + currency + secret)` en hex. El monto que se
//! firma es el mismo que paga el cliente; el controller lo toma de la
//! reserva almacenada cuando la orden corresponde a una.

use sha2::{Digest, Sha256};

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

pub struct BoldService {
    secret_key: String,
    min_amount: i64,
}

impl BoldService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            secret_key: config.bold_secret_key.clone(),
            min_amount: config.bold_min_amount,
        }
    }

    /// Firma de integridad para `(order_id, amount, currency)`.
    ///
    /// Bold rechaza montos con decimales y exige un mínimo por transacción,
    /// así que acá se valida antes de firmar.
    pub fn generate_integrity_hash(
        &self,
        order_id: &str,
        amount: i64,
        currency: &str,
    ) -> Result<String, AppError> {
        if amount < self.min_amount {
            return Err(AppError::BadRequest(format!(
                "El monto mínimo por transacción es {} COP (recibido: {})",
                self.min_amount, amount
            )));
        }

        let mut hasher = Sha256::new();
        hasher.update(format!("{}{}{}{}", order_id, amount, currency, self.secret_key));
        Ok(format!("{:x}", hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servicio() -> BoldService {
        BoldService {
            secret_key: "secreto-bold".to_string(),
            min_amount: 1000,
        }
    }

    #[test]
    fn test_hash_es_hex_de_64() {
        let hash = servicio()
            .generate_integrity_hash("MT-ABC12345", 200000, "COP")
            .unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_deterministico_y_sensible_al_monto() {
        let s = servicio();
        let a = s.generate_integrity_hash("MT-ABC12345", 200000, "COP").unwrap();
        let b = s.generate_integrity_hash("MT-ABC12345", 200000, "COP").unwrap();
        let c = s.generate_integrity_hash("MT-ABC12345", 200001, "COP").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_monto_menor_al_minimo_se_rechaza() {
        assert!(servicio().generate_integrity_hash("MT-ABC12345", 999, "COP").is_err());
        assert!(servicio().generate_integrity_hash("MT-ABC12345", 1000, "COP").is_ok());
    }
}
