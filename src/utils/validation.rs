//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! compartidas entre los DTOs.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
    // Códigos de servicio tipo "guatape-tour", "transporte-aeropuerto"
    static ref CODIGO_SERVICIO_RE: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(value) {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico, acepta prefijo internacional)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone = value.chars().filter(|c| c.is_ascii_digit()).collect::<String>();
    if clean_phone.len() < 7 || clean_phone.len() > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de código de servicio
pub fn validate_codigo_servicio(value: &str) -> Result<(), ValidationError> {
    if !CODIGO_SERVICIO_RE.is_match(value) {
        let mut error = ValidationError::new("codigo_servicio");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"kebab-case lowercase".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un rango de pasajeros sea coherente
pub fn validate_rango_pasajeros(min: i32, max: i32) -> Result<(), ValidationError> {
    if min < 1 || max < min {
        let mut error = ValidationError::new("rango_pasajeros");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("cliente@example.com").is_ok());
        assert!(validate_email("invalido").is_err());
        assert!(validate_email("cliente@").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+57 300 123 4567").is_ok());
        assert!(validate_phone("3001234567").is_ok());
        assert!(validate_phone("123").is_err());
    }

    #[test]
    fn test_validate_codigo_servicio() {
        assert!(validate_codigo_servicio("guatape-tour").is_ok());
        assert!(validate_codigo_servicio("transporte-aeropuerto").is_ok());
        assert!(validate_codigo_servicio("Guatape Tour").is_err());
        assert!(validate_codigo_servicio("-guatape").is_err());
    }

    #[test]
    fn test_validate_rango_pasajeros() {
        assert!(validate_rango_pasajeros(1, 3).is_ok());
        assert!(validate_rango_pasajeros(4, 4).is_ok());
        assert!(validate_rango_pasajeros(0, 3).is_err());
        assert!(validate_rango_pasajeros(5, 3).is_err());
    }
}
