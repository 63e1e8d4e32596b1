//! Catalog entry validation and normalization
//!
//! Violations are reported per field with a machine-readable code, so a
//! client can highlight the offending inputs instead of guessing from a
//! single message.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::ErrorCode;
use shared::models::{Service, ServiceInput, ServiceKind, ServiceVariant};

pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 50;
pub const VARIANT_NAME_MAX: usize = 30;

/// One field-level violation
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: ErrorCode,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

/// Capitalize the first letter of every word, lowercasing the rest
pub fn capitalize_words(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validate one entry and produce its normalized form
///
/// Guarantees on success: the name is trimmed and word-capitalized,
/// and exactly one of {flat price, variant list} is populated
/// according to `kind` — whichever the caller supplied for the other
/// shape is cleared.
pub fn normalize_service(
    business_ref: &str,
    input: &ServiceInput,
) -> Result<Service, Vec<FieldError>> {
    let mut errors = Vec::new();

    let trimmed = input.name.trim();
    let name_chars = trimmed.chars().count();
    if name_chars < NAME_MIN || name_chars > NAME_MAX {
        errors.push(FieldError::new(
            "name",
            ErrorCode::InvalidName,
            format!("name must be {NAME_MIN}-{NAME_MAX} characters"),
        ));
    }
    let name = capitalize_words(trimmed);

    let mut price = None;
    let mut unit = None;
    let mut variants = Vec::new();

    match input.kind {
        ServiceKind::Flat => {
            match input.price {
                Some(p) if p >= Decimal::ZERO => price = Some(p),
                Some(_) => errors.push(FieldError::new(
                    "price",
                    ErrorCode::InvalidPrice,
                    "price must be non-negative",
                )),
                None => errors.push(FieldError::new(
                    "price",
                    ErrorCode::InvalidPrice,
                    "flat services require a price",
                )),
            }
            unit = input.unit.as_ref().map(|u| u.trim().to_string());
            // A supplied variant list is cleared, not an error
        }
        ServiceKind::Variant => {
            match input.variants.as_deref() {
                None | Some([]) => errors.push(FieldError::new(
                    "variants",
                    ErrorCode::InvalidSizes,
                    "variant services require at least one variant",
                )),
                Some(list) => {
                    for (i, v) in list.iter().enumerate() {
                        let vname = v.name.trim();
                        if vname.is_empty() || vname.chars().count() > VARIANT_NAME_MAX {
                            errors.push(FieldError::new(
                                format!("variants[{i}].name"),
                                ErrorCode::InvalidSizes,
                                format!("variant name must be 1-{VARIANT_NAME_MAX} characters"),
                            ));
                        }
                        if v.price < Decimal::ZERO {
                            errors.push(FieldError::new(
                                format!("variants[{i}].price"),
                                ErrorCode::InvalidSizes,
                                "variant price must be non-negative",
                            ));
                        }
                        variants.push(ServiceVariant {
                            id: v.id.clone().unwrap_or_else(|| {
                                uuid::Uuid::new_v4().simple().to_string()
                            }),
                            name: vname.to_string(),
                            price: v.price,
                            unit: v.unit.as_ref().map(|u| u.trim().to_string()),
                        });
                    }
                }
            }
            // Flat price is cleared for variant entries
        }
    }

    let mut available_days = Vec::new();
    if let Some(days) = &input.available_days {
        for day in days {
            match u8::try_from(*day) {
                Ok(d) if d <= 6 => {
                    if !available_days.contains(&d) {
                        available_days.push(d);
                    }
                }
                _ => {
                    errors.push(FieldError::new(
                        "available_days",
                        ErrorCode::InvalidAvailableDays,
                        format!("day {day} is out of range 0-6"),
                    ));
                    break;
                }
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Service {
        id: None,
        business_id: business_ref.to_string(),
        name,
        kind: input.kind,
        price,
        unit,
        variants,
        available_days,
        active: true,
        created_at: None,
        updated_at: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;
    use shared::models::VariantInput;

    fn dec(v: f64) -> Decimal {
        Decimal::from_f64(v).unwrap()
    }

    fn flat_input(name: &str, price: f64) -> ServiceInput {
        ServiceInput {
            name: name.into(),
            kind: ServiceKind::Flat,
            price: Some(dec(price)),
            unit: Some("kg".into()),
            variants: None,
            available_days: None,
        }
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("ropa por kilo"), "Ropa Por Kilo");
        assert_eq!(capitalize_words("  EDREDÓN   king "), "Edredón King");
    }

    #[test]
    fn test_flat_normalization_clears_variants() {
        let mut input = flat_input("ropa por kilo", 14.0);
        input.variants = Some(vec![VariantInput {
            id: None,
            name: "ignored".into(),
            price: dec(1.0),
            unit: None,
        }]);
        let service = normalize_service("business:b1", &input).unwrap();
        assert_eq!(service.name, "Ropa Por Kilo");
        assert_eq!(service.price, Some(dec(14.0)));
        assert!(service.variants.is_empty());
    }

    #[test]
    fn test_variant_normalization_clears_price() {
        let input = ServiceInput {
            name: "edredón".into(),
            kind: ServiceKind::Variant,
            price: Some(dec(99.0)),
            unit: None,
            variants: Some(vec![
                VariantInput { id: None, name: " Individual ".into(), price: dec(50.0), unit: None },
                VariantInput { id: Some("king".into()), name: "King".into(), price: dec(70.0), unit: None },
            ]),
            available_days: Some(vec![0, 6]),
        };
        let service = normalize_service("business:b1", &input).unwrap();
        assert!(service.price.is_none());
        assert_eq!(service.variants.len(), 2);
        assert_eq!(service.variants[0].name, "Individual");
        assert!(!service.variants[0].id.is_empty());
        assert_eq!(service.variants[1].id, "king");
        assert_eq!(service.available_days, vec![0, 6]);
    }

    #[test]
    fn test_name_length_bounds() {
        let err = normalize_service("business:b1", &flat_input("ab", 1.0)).unwrap_err();
        assert_eq!(err[0].code, ErrorCode::InvalidName);

        let long = "x".repeat(51);
        let err = normalize_service("business:b1", &flat_input(&long, 1.0)).unwrap_err();
        assert_eq!(err[0].code, ErrorCode::InvalidName);
    }

    #[test]
    fn test_name_length_counts_chars_not_bytes() {
        // 50 accented chars is within bounds even though it is 100 bytes
        let name = "é".repeat(50);
        let service = normalize_service("business:b1", &flat_input(&name, 1.0)).unwrap();
        assert_eq!(service.name.chars().count(), 50);

        let err = normalize_service("business:b1", &flat_input(&"é".repeat(51), 1.0)).unwrap_err();
        assert_eq!(err[0].code, ErrorCode::InvalidName);
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = normalize_service("business:b1", &flat_input("Lavado", -1.0)).unwrap_err();
        assert_eq!(err[0].code, ErrorCode::InvalidPrice);
        assert_eq!(err[0].field, "price");
    }

    #[test]
    fn test_variant_kind_requires_variants() {
        let input = ServiceInput {
            name: "Edredón".into(),
            kind: ServiceKind::Variant,
            price: None,
            unit: None,
            variants: Some(vec![]),
            available_days: None,
        };
        let err = normalize_service("business:b1", &input).unwrap_err();
        assert_eq!(err[0].code, ErrorCode::InvalidSizes);
    }

    #[test]
    fn test_out_of_range_day_rejected() {
        let mut input = flat_input("Lavado", 1.0);
        input.available_days = Some(vec![1, 9]);
        let err = normalize_service("business:b1", &input).unwrap_err();
        assert_eq!(err[0].code, ErrorCode::InvalidAvailableDays);
    }

    #[test]
    fn test_exactly_one_pricing_shape() {
        let flat = normalize_service("business:b1", &flat_input("Lavado", 5.0)).unwrap();
        assert!(flat.price.is_some() && flat.variants.is_empty());

        let input = ServiceInput {
            name: "Edredón".into(),
            kind: ServiceKind::Variant,
            price: None,
            unit: None,
            variants: Some(vec![VariantInput {
                id: None,
                name: "King".into(),
                price: dec(70.0),
                unit: None,
            }]),
            available_days: None,
        };
        let variant = normalize_service("business:b1", &input).unwrap();
        assert!(variant.price.is_none() && !variant.variants.is_empty());
    }
}
