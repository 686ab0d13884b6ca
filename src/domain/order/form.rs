//! Order creation form draft with per-field inline validation.

use super::{NewOrder, OrderType};

pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number";
pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_TYPE_MESSAGE: &str = "Please select BUY or SELL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Type,
    Quantity,
    Price,
}

impl OrderField {
    /// Presence is checked in this order on submit.
    pub const ALL: [OrderField; 3] = [OrderField::Type, OrderField::Quantity, OrderField::Price];

    pub fn name(&self) -> &'static str {
        match self {
            OrderField::Type => "type",
            OrderField::Quantity => "quantity",
            OrderField::Price => "price",
        }
    }
}

/// Per-field error strings. Empty means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub order_type: String,
    pub quantity: String,
    pub price: String,
}

impl FieldErrors {
    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::Type => &self.order_type,
            OrderField::Quantity => &self.quantity,
            OrderField::Price => &self.price,
        }
    }

    fn slot(&mut self, field: OrderField) -> &mut String {
        match field {
            OrderField::Type => &mut self.order_type,
            OrderField::Quantity => &mut self.quantity,
            OrderField::Price => &mut self.price,
        }
    }

    pub fn any(&self) -> bool {
        OrderField::ALL.iter().any(|f| !self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    order_type: String,
    quantity: String,
    price: String,
    errors: FieldErrors,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: OrderField) -> &str {
        match field {
            OrderField::Type => &self.order_type,
            OrderField::Quantity => &self.quantity,
            OrderField::Price => &self.price,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: OrderField) -> Option<&str> {
        Some(self.errors.get(field)).filter(|e| !e.is_empty())
    }

    /// Update one field and recompute only that field's error.
    pub fn set(&mut self, field: OrderField, value: impl Into<String>) {
        let value = value.into();
        let error = field_error(field, &value).unwrap_or_default();
        *self.errors.slot(field) = error.to_string();
        match field {
            OrderField::Type => self.order_type = value,
            OrderField::Quantity => self.quantity = value,
            OrderField::Price => self.price = value,
        }
    }

    /// Submit stays disabled while any field shows an error.
    pub fn can_submit(&self) -> bool {
        !self.errors.any()
    }

    /// Validate the whole draft.
    ///
    /// Returns `None` and leaves the field errors in place when the draft
    /// cannot be posted. Only the first missing field is flagged.
    pub fn submit(&mut self) -> Option<NewOrder> {
        if !self.can_submit() {
            return None;
        }

        for field in OrderField::ALL {
            if self.value(field).is_empty() {
                *self.errors.slot(field) = REQUIRED_MESSAGE.to_string();
                return None;
            }
        }

        for field in OrderField::ALL {
            if let Some(error) = field_error(field, self.value(field)) {
                *self.errors.slot(field) = error.to_string();
            }
        }
        if self.errors.any() {
            return None;
        }

        Some(NewOrder {
            order_type: self.order_type.parse().ok()?,
            quantity: parse_positive(&self.quantity)?,
            price: parse_positive(&self.price)?,
        })
    }

    /// Discard the draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn field_error(field: OrderField, value: &str) -> Option<&'static str> {
    match field {
        OrderField::Type => {
            if value.is_empty() || value.parse::<OrderType>().is_ok() {
                None
            } else {
                Some(INVALID_TYPE_MESSAGE)
            }
        }
        OrderField::Quantity | OrderField::Price => match parse_positive(value) {
            Some(_) => None,
            None => Some(INVALID_NUMBER_MESSAGE),
        },
    }
}

/// Finite, strictly positive number, surrounding whitespace ignored.
fn parse_positive(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(order_type: &str, quantity: &str, price: &str) -> OrderForm {
        let mut form = OrderForm::new();
        form.set(OrderField::Type, order_type);
        form.set(OrderField::Quantity, quantity);
        form.set(OrderField::Price, price);
        form
    }

    #[test]
    fn test_valid_draft_submits() {
        let mut form = filled("BUY", "10", "5");
        let order = form.submit().unwrap();
        assert_eq!(order.order_type, OrderType::Buy);
        assert_eq!(order.quantity, 10.0);
        assert_eq!(order.price, 5.0);
    }

    #[test]
    fn test_non_numeric_quantity_blocks_submit() {
        let mut form = filled("SELL", "ten", "5");
        assert_eq!(form.error(OrderField::Quantity), Some(INVALID_NUMBER_MESSAGE));
        assert!(!form.can_submit());
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_non_positive_price_blocks_submit() {
        for price in ["0", "-3", "NaN", "inf"] {
            let mut form = filled("BUY", "1", price);
            assert_eq!(form.error(OrderField::Price), Some(INVALID_NUMBER_MESSAGE));
            assert!(form.submit().is_none(), "price {price:?} should block");
        }
    }

    #[test]
    fn test_clearing_a_number_field_flags_it() {
        let mut form = filled("BUY", "1", "2");
        form.set(OrderField::Price, "");
        assert_eq!(form.error(OrderField::Price), Some(INVALID_NUMBER_MESSAGE));
    }

    #[test]
    fn test_fixing_a_field_clears_its_error() {
        let mut form = filled("BUY", "abc", "2");
        form.set(OrderField::Quantity, "3");
        assert!(form.error(OrderField::Quantity).is_none());
        assert!(form.can_submit());
    }

    #[test]
    fn test_missing_type_is_required() {
        let mut form = OrderForm::new();
        form.set(OrderField::Quantity, "1");
        form.set(OrderField::Price, "2");
        assert!(form.submit().is_none());
        assert_eq!(form.error(OrderField::Type), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_only_first_missing_field_is_flagged() {
        let mut form = OrderForm::new();
        assert!(form.submit().is_none());
        assert_eq!(form.error(OrderField::Type), Some(REQUIRED_MESSAGE));
        assert!(form.error(OrderField::Quantity).is_none());
        assert!(form.error(OrderField::Price).is_none());
    }

    #[test]
    fn test_unknown_type_is_a_field_error() {
        let form = filled("HOLD", "1", "1");
        assert_eq!(form.error(OrderField::Type), Some(INVALID_TYPE_MESSAGE));
    }

    #[test]
    fn test_reset_discards_draft() {
        let mut form = filled("BUY", "x", "1");
        form.reset();
        assert_eq!(form, OrderForm::new());
    }
}
