//! Transition rules for the two note axes
//!
//! Both axes advance strictly forward, one step at a time. The single
//! cross-axis dependency is explicit here instead of being buried in
//! string comparisons: fulfillment may only reach `entregado` while
//! payment is at least `pagado`, and only the payment-side delivery
//! transition drives it there.

use shared::models::{FulfillmentStatus, PaymentStatus};
use shared::{AppError, AppResult, ErrorCode};

/// Accepted payment method names
pub const PAYMENT_METHODS: &[&str] = &["efectivo", "tarjeta", "transferencia"];

/// Reject anything but the single legal next payment status
///
/// Requesting the current status again is not an error; the caller
/// treats it as an idempotent no-op.
pub fn check_payment_advance(
    current: PaymentStatus,
    requested: PaymentStatus,
) -> AppResult<()> {
    if current.next() == Some(requested) {
        return Ok(());
    }
    Err(AppError::new(ErrorCode::InvalidStatusTransition)
        .with_detail("axis", "payment")
        .with_detail("from", serde_json::to_value(current).unwrap_or_default())
        .with_detail("to", serde_json::to_value(requested).unwrap_or_default()))
}

/// Reject anything but the single legal next fulfillment status
pub fn check_fulfillment_advance(
    current: FulfillmentStatus,
    requested: FulfillmentStatus,
) -> AppResult<()> {
    if current.next() == Some(requested) {
        return Ok(());
    }
    Err(AppError::new(ErrorCode::InvalidStatusTransition)
        .with_detail("axis", "fulfillment")
        .with_detail("from", serde_json::to_value(current).unwrap_or_default())
        .with_detail("to", serde_json::to_value(requested).unwrap_or_default()))
}

/// The one legal cross-axis dependency
///
/// `fulfillment = entregado` requires `payment ∈ {pagado, entregado}`.
pub fn fulfillment_delivery_allowed(payment: PaymentStatus) -> bool {
    matches!(payment, PaymentStatus::Pagado | PaymentStatus::Entregado)
}

/// Validate an incoming abono payload
pub fn check_abono(amount: rust_decimal::Decimal, method: &str) -> AppResult<()> {
    if amount <= rust_decimal::Decimal::ZERO {
        return Err(AppError::new(ErrorCode::InvalidAbonoAmount));
    }
    if !PAYMENT_METHODS.contains(&method) {
        return Err(
            AppError::new(ErrorCode::InvalidPaymentMethod).with_detail("method", method)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_payment_cannot_skip_or_regress() {
        assert!(check_payment_advance(PaymentStatus::Pendiente, PaymentStatus::Pagado).is_ok());
        assert!(check_payment_advance(PaymentStatus::Pagado, PaymentStatus::Entregado).is_ok());

        let skip = check_payment_advance(PaymentStatus::Pendiente, PaymentStatus::Entregado);
        assert_eq!(skip.unwrap_err().code, ErrorCode::InvalidStatusTransition);

        let back = check_payment_advance(PaymentStatus::Pagado, PaymentStatus::Pendiente);
        assert_eq!(back.unwrap_err().code, ErrorCode::InvalidStatusTransition);

        let past_terminal =
            check_payment_advance(PaymentStatus::Entregado, PaymentStatus::Pendiente);
        assert!(past_terminal.is_err());
    }

    #[test]
    fn test_fulfillment_single_step_only() {
        assert!(
            check_fulfillment_advance(FulfillmentStatus::Sucia, FulfillmentStatus::Lavado).is_ok()
        );
        assert!(check_fulfillment_advance(
            FulfillmentStatus::Lavado,
            FulfillmentStatus::ListoParaEntregar
        )
        .is_ok());

        let skip = check_fulfillment_advance(
            FulfillmentStatus::Sucia,
            FulfillmentStatus::ListoParaEntregar,
        );
        assert!(skip.is_err());
    }

    #[test]
    fn test_delivery_requires_payment() {
        assert!(!fulfillment_delivery_allowed(PaymentStatus::Pendiente));
        assert!(fulfillment_delivery_allowed(PaymentStatus::Pagado));
        assert!(fulfillment_delivery_allowed(PaymentStatus::Entregado));
    }

    #[test]
    fn test_abono_validation() {
        assert!(check_abono(Decimal::new(10, 0), "efectivo").is_ok());
        assert_eq!(
            check_abono(Decimal::ZERO, "efectivo").unwrap_err().code,
            ErrorCode::InvalidAbonoAmount
        );
        assert_eq!(
            check_abono(Decimal::new(10, 0), "bitcoin").unwrap_err().code,
            ErrorCode::InvalidPaymentMethod
        );
    }
}
