//! Checkout form, payment gating and the order-creation request body.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::Cart;
use crate::models::{DeliveryAddress, FoodItem, OrderLineRequest, PaymentMethod};

/// RF card numbers are at most this many digits.
pub const RF_CARD_MAX_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Please enter your {0}")]
    MissingField(&'static str),
    #[error("Please enter your RF card number")]
    MissingCardNumber,
    #[error("RF card number must be at most 16 digits")]
    CardNumberTooLong,
    #[error("RF card number must contain only digits")]
    CardNumberNotNumeric,
    #[error("No items in cart to order")]
    EmptyCart,
}

/// Transient state of the place-order form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub branch: String,
    pub phone: String,
    pub payment_method: PaymentMethod,
    pub rf_card_number: String,
}

impl CheckoutForm {
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let required = [
            (&self.first_name, "first name"),
            (&self.last_name, "last name"),
            (&self.branch, "branch"),
            (&self.phone, "phone"),
        ];
        if let Some((_, field)) = required.iter().find(|(value, _)| value.trim().is_empty()) {
            return Err(CheckoutError::MissingField(*field));
        }

        if self.payment_method == PaymentMethod::RfCard {
            validate_card_number(&self.rf_card_number)?;
        }
        Ok(())
    }

    pub fn delivery_address(&self) -> DeliveryAddress {
        DeliveryAddress {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            branch: self.branch.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}

pub fn validate_card_number(raw: &str) -> Result<(), CheckoutError> {
    let card = raw.trim();
    if card.is_empty() {
        return Err(CheckoutError::MissingCardNumber);
    }
    if card.len() > RF_CARD_MAX_LEN {
        return Err(CheckoutError::CardNumberTooLong);
    }
    if !card.chars().all(|c| c.is_ascii_digit()) {
        return Err(CheckoutError::CardNumberNotNumeric);
    }
    Ok(())
}

/// Which payment step has been completed before "place order" is offered.
///
/// Cash needs nothing, UPI needs the QR to have been shown, RF card needs the
/// card to have been tapped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentGate {
    qr_shown: bool,
    card_tapped: bool,
}

impl PaymentGate {
    pub fn show_qr(&mut self) {
        self.qr_shown = true;
    }

    pub fn qr_shown(&self) -> bool {
        self.qr_shown
    }

    /// Returns false while no card number has been entered.
    pub fn tap_card(&mut self, card_number: &str) -> bool {
        self.card_tapped = !card_number.trim().is_empty();
        self.card_tapped
    }

    pub fn can_place(&self, method: PaymentMethod) -> bool {
        match method {
            PaymentMethod::Cash => true,
            PaymentMethod::Upi => self.qr_shown,
            PaymentMethod::RfCard => self.card_tapped,
        }
    }
}

/// Body of `POST /api/order/create`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub items: Vec<OrderLineRequest>,
    pub delivery_address: DeliveryAddress,
    #[serde(default)]
    pub special_instructions: String,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_intent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rf_card_number: Option<String>,
}

impl OrderRequest {
    pub fn build(form: &CheckoutForm, cart: &Cart, menu: &[FoodItem]) -> Result<Self, CheckoutError> {
        form.validate()?;

        let items = cart.order_items(menu);
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let rf_card_number = (form.payment_method == PaymentMethod::RfCard)
            .then(|| form.rf_card_number.trim().to_string());

        Ok(Self {
            items,
            delivery_address: form.delivery_address(),
            special_instructions: String::new(),
            payment_method: form.payment_method,
            payment_intent_id: None,
            rf_card_number,
        })
    }
}

/// Four-digit pickup token shown before the server has issued the real one.
pub fn preview_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(1000..=9999u32).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn menu() -> Vec<FoodItem> {
        ["a", "b"]
            .iter()
            .map(|id| FoodItem {
                id: id.to_string(),
                name: id.to_uppercase(),
                price: 30.0,
                category: "Meals".to_string(),
                image: String::new(),
                description: String::new(),
            })
            .collect()
    }

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            first_name: " Asha ".to_string(),
            last_name: "Verma".to_string(),
            branch: "CSE".to_string(),
            phone: "9876543210".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_fields_are_reported_in_form_order() {
        let mut form = filled_form();
        form.branch = "   ".to_string();
        form.phone.clear();
        assert_eq!(form.validate(), Err(CheckoutError::MissingField("branch")));
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Please enter your branch"
        );
    }

    #[test]
    fn rf_card_number_rules() {
        let mut form = filled_form();
        form.payment_method = PaymentMethod::RfCard;
        assert_eq!(form.validate(), Err(CheckoutError::MissingCardNumber));

        form.rf_card_number = "12345678901234567".to_string();
        assert_eq!(form.validate(), Err(CheckoutError::CardNumberTooLong));

        form.rf_card_number = "1234-5678".to_string();
        assert_eq!(form.validate(), Err(CheckoutError::CardNumberNotNumeric));

        form.rf_card_number = "0012345678".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn request_requires_cart_lines() {
        let cart = Cart::new();
        assert_eq!(
            OrderRequest::build(&filled_form(), &cart, &menu()),
            Err(CheckoutError::EmptyCart)
        );
    }

    #[test]
    fn cash_request_wire_shape() {
        let mut cart = Cart::new();
        cart.add("b");
        cart.add("b");

        let request = OrderRequest::build(&filled_form(), &cart, &menu()).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "items": [{ "foodId": "b", "quantity": 2 }],
                "deliveryAddress": {
                    "firstName": "Asha",
                    "lastName": "Verma",
                    "branch": "CSE",
                    "phone": "9876543210"
                },
                "specialInstructions": "",
                "paymentMethod": "cash"
            })
        );
    }

    #[test]
    fn rf_card_number_only_sent_for_rf_card() {
        let mut cart = Cart::new();
        cart.add("a");

        let mut form = filled_form();
        form.rf_card_number = "4455".to_string();
        let cash = OrderRequest::build(&form, &cart, &menu()).unwrap();
        assert!(cash.rf_card_number.is_none());

        form.payment_method = PaymentMethod::RfCard;
        let card = OrderRequest::build(&form, &cart, &menu()).unwrap();
        assert_eq!(card.rf_card_number.as_deref(), Some("4455"));
        assert_eq!(serde_json::to_value(&card).unwrap()["paymentMethod"], "rfcard");
    }

    #[test]
    fn payment_gate_per_method() {
        let mut gate = PaymentGate::default();
        assert!(gate.can_place(PaymentMethod::Cash));
        assert!(!gate.can_place(PaymentMethod::Upi));
        assert!(!gate.can_place(PaymentMethod::RfCard));

        gate.show_qr();
        assert!(gate.can_place(PaymentMethod::Upi));
        assert!(!gate.can_place(PaymentMethod::RfCard));

        assert!(!gate.tap_card("  "));
        assert!(gate.tap_card("7788"));
        assert!(gate.can_place(PaymentMethod::RfCard));
    }

    #[test]
    fn preview_tokens_have_four_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let token = preview_token(&mut rng);
            let value: u32 = token.parse().unwrap();
            assert!((1000..=9999).contains(&value));
            assert_eq!(token.len(), 4);
        }
    }
}
