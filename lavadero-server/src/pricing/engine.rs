//! Selection pricing
//!
//! Expands a requested selection against the catalog into priced line
//! items, snapshotting names and unit prices so later catalog edits
//! never change a stored note. Pure: same selection + same catalog +
//! same rules always produce the same total.

use rust_decimal::Decimal;
use shared::models::{SelectionItem, SelectionLine, Service, ServiceKind};
use shared::{AppError, AppResult, ErrorCode};

use super::rules::PricingRules;

/// Priced form of a selection, ready to be stored on a note
#[derive(Debug, Clone, PartialEq)]
pub struct PricedSelection {
    pub lines: Vec<SelectionLine>,
    pub suavitel_units: u32,
    pub suavitel_amount: Decimal,
    pub total: Decimal,
}

/// Price a selection against a catalog snapshot
///
/// Every item must resolve to a catalog entry (and, for variant
/// services, to one of its variants); an empty selection is rejected
/// before any lookup.
pub fn price_selection(
    catalog: &[Service],
    selection: &[SelectionItem],
    suavitel: bool,
    rules: &PricingRules,
) -> AppResult<PricedSelection> {
    if selection.is_empty() {
        return Err(AppError::new(ErrorCode::EmptySelection));
    }

    let bulk_name = rules.bulk_service_name.to_lowercase();
    let mut lines = Vec::with_capacity(selection.len());
    let mut bulk_kilos: u32 = 0;

    for item in selection {
        if item.quantity == 0 {
            return Err(
                AppError::with_message(ErrorCode::ValidationFailed, "quantity must be positive")
                    .with_detail("service_id", item.service_id.clone()),
            );
        }

        let service = catalog
            .iter()
            .find(|s| s.id.as_deref() == Some(item.service_id.as_str()))
            .ok_or_else(|| {
                AppError::new(ErrorCode::UnknownSelectionItem)
                    .with_detail("service_id", item.service_id.clone())
            })?;

        let line = match service.kind {
            ServiceKind::Flat => {
                let unit_price = service.price.ok_or_else(|| {
                    AppError::internal(format!(
                        "flat service {} has no price",
                        item.service_id
                    ))
                })?;
                if service.name.to_lowercase() == bulk_name {
                    bulk_kilos = bulk_kilos.saturating_add(item.quantity);
                }
                SelectionLine {
                    service_id: item.service_id.clone(),
                    service_name: service.name.clone(),
                    variant_id: None,
                    variant_name: None,
                    quantity: item.quantity,
                    unit_price,
                    subtotal: unit_price * Decimal::from(item.quantity),
                }
            }
            ServiceKind::Variant => {
                let variant_id = item.variant_id.as_deref().ok_or_else(|| {
                    AppError::new(ErrorCode::UnknownSelectionItem)
                        .with_detail("service_id", item.service_id.clone())
                })?;
                let variant = service.variant(variant_id).ok_or_else(|| {
                    AppError::new(ErrorCode::UnknownSelectionItem)
                        .with_detail("service_id", item.service_id.clone())
                        .with_detail("variant_id", variant_id)
                })?;
                SelectionLine {
                    service_id: item.service_id.clone(),
                    service_name: service.name.clone(),
                    variant_id: Some(variant.id.clone()),
                    variant_name: Some(variant.name.clone()),
                    quantity: item.quantity,
                    unit_price: variant.price,
                    subtotal: variant.price * Decimal::from(item.quantity),
                }
            }
        };
        lines.push(line);
    }

    let suavitel_units = if suavitel { rules.suavitel_units(bulk_kilos) } else { 0 };
    let suavitel_amount = rules.suavitel_unit_price * Decimal::from(suavitel_units);
    let total: Decimal =
        lines.iter().map(|l| l.subtotal).sum::<Decimal>() + suavitel_amount;

    Ok(PricedSelection {
        lines,
        suavitel_units,
        suavitel_amount,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;
    use shared::models::ServiceVariant;

    fn dec(v: f64) -> Decimal {
        Decimal::from_f64(v).unwrap()
    }

    fn flat(id: &str, name: &str, price: f64) -> Service {
        Service {
            id: Some(format!("service:{id}")),
            business_id: "business:b1".into(),
            name: name.into(),
            kind: ServiceKind::Flat,
            price: Some(dec(price)),
            unit: Some("kg".into()),
            variants: vec![],
            available_days: vec![],
            active: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn variant(id: &str, name: &str, variants: Vec<(&str, f64)>) -> Service {
        Service {
            id: Some(format!("service:{id}")),
            business_id: "business:b1".into(),
            name: name.into(),
            kind: ServiceKind::Variant,
            price: None,
            unit: None,
            variants: variants
                .into_iter()
                .map(|(vid, p)| ServiceVariant {
                    id: vid.into(),
                    name: vid.to_uppercase(),
                    price: dec(p),
                    unit: None,
                })
                .collect(),
            available_days: vec![],
            active: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn pick(service: &str, variant: Option<&str>, quantity: u32) -> SelectionItem {
        SelectionItem {
            service_id: format!("service:{service}"),
            variant_id: variant.map(Into::into),
            quantity,
        }
    }

    #[test]
    fn test_deterministic_total() {
        let catalog = vec![
            flat("kilo", "Ropa Por Kilo", 14.0),
            variant("edredon", "Edredón", vec![("king", 70.0)]),
        ];
        let rules = PricingRules::default();
        let selection = vec![pick("kilo", None, 2), pick("edredon", Some("king"), 1)];

        let first = price_selection(&catalog, &selection, false, &rules).unwrap();
        let second = price_selection(&catalog, &selection, false, &rules).unwrap();
        assert_eq!(first.total, dec(98.0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_suavitel_rounds_kilos_up() {
        let catalog = vec![flat("kilo", "Ropa Por Kilo", 14.0)];
        let rules = PricingRules::default();

        // 7 kg at a 6-kg divisor needs 2 surcharge units
        let priced =
            price_selection(&catalog, &[pick("kilo", None, 7)], true, &rules).unwrap();
        assert_eq!(priced.suavitel_units, 2);
        assert_eq!(priced.suavitel_amount, dec(20.0));
        assert_eq!(priced.total, dec(7.0 * 14.0 + 20.0));
    }

    #[test]
    fn test_suavitel_ignores_non_bulk_items() {
        let catalog = vec![flat("tenis", "Tenis", 60.0)];
        let rules = PricingRules::default();
        let priced =
            price_selection(&catalog, &[pick("tenis", None, 3)], true, &rules).unwrap();
        assert_eq!(priced.suavitel_units, 0);
        assert_eq!(priced.total, dec(180.0));
    }

    #[test]
    fn test_empty_selection_rejected() {
        let err = price_selection(&[], &[], false, &PricingRules::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptySelection);
    }

    #[test]
    fn test_unknown_service_rejected() {
        let catalog = vec![flat("kilo", "Ropa Por Kilo", 14.0)];
        let err = price_selection(
            &catalog,
            &[pick("nope", None, 1)],
            false,
            &PricingRules::default(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownSelectionItem);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let catalog = vec![variant("edredon", "Edredón", vec![("king", 70.0)])];
        let err = price_selection(
            &catalog,
            &[pick("edredon", Some("queen"), 1)],
            false,
            &PricingRules::default(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownSelectionItem);
    }

    #[test]
    fn test_variant_item_requires_variant_id() {
        let catalog = vec![variant("edredon", "Edredón", vec![("king", 70.0)])];
        let err = price_selection(
            &catalog,
            &[pick("edredon", None, 1)],
            false,
            &PricingRules::default(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownSelectionItem);
    }
}
