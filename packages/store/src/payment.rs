//! UPI payment intent, checkout receipt and the downloadable pickup slip.

use crate::cart::{Cart, CartLine};
use crate::config::PaymentConfig;
use crate::models::{format_rupees, FoodItem};

/// A `upi://pay` deep link, rendered as a link and QR target at checkout.
#[derive(Clone, Debug, PartialEq)]
pub struct UpiIntent {
    pub vpa: String,
    pub payee_name: String,
    pub currency: String,
    pub amount: Option<f64>,
    pub note: Option<String>,
}

impl UpiIntent {
    pub fn from_config(config: &PaymentConfig) -> Self {
        Self {
            vpa: config.upi_vpa.clone(),
            payee_name: config.payee_name.clone(),
            currency: config.currency.clone(),
            amount: None,
            note: None,
        }
    }

    /// Zero or negative amounts are left out so the payer enters one.
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = (amount > 0.0).then_some(amount);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = (!note.trim().is_empty()).then_some(note);
        self
    }

    pub fn to_uri(&self) -> String {
        let mut uri = format!(
            "upi://pay?pa={}&pn={}&cu={}",
            encode(&self.vpa),
            encode(&self.payee_name),
            encode(&self.currency)
        );
        if let Some(amount) = self.amount {
            uri.push_str(&format!("&am={amount:.2}"));
        }
        if let Some(note) = &self.note {
            uri.push_str(&format!("&tn={}", encode(note)));
        }
        uri
    }
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// What the customer is about to pay for.
#[derive(Clone, Debug, PartialEq)]
pub struct Receipt {
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub total: f64,
    pub token: Option<String>,
}

impl Receipt {
    pub fn from_cart(cart: &Cart, menu: &[FoodItem], token: Option<String>) -> Self {
        Self {
            lines: cart.lines(menu),
            item_count: cart.item_count(),
            total: cart.total(menu),
            token,
        }
    }
}

pub fn token_slip_filename(token: Option<&str>) -> String {
    format!("allen-eatery-token-{}.txt", token.unwrap_or("token"))
}

/// Plain-text pickup slip shown at the counter.
pub fn token_slip_text(brand: &str, token: Option<&str>, receipt: &Receipt, issued_at: &str) -> String {
    let mut slip = format!("{brand}\nPickup Token\n{}\n\n", token.unwrap_or("----"));
    for line in &receipt.lines {
        slip.push_str(&format!(
            "{} x {}  {}\n",
            line.food.name,
            line.quantity,
            format_rupees(line.subtotal)
        ));
    }
    slip.push_str(&format!("Total  {}\n\n{issued_at}\n", format_rupees(receipt.total)));
    slip
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PaymentConfig {
        PaymentConfig::default()
    }

    #[test]
    fn uri_without_amount() {
        let intent = UpiIntent::from_config(&config());
        assert_eq!(
            intent.to_uri(),
            "upi://pay?pa=kashyaprishabh8957%40okicici&pn=AllenEatery&cu=INR"
        );
    }

    #[test]
    fn uri_with_amount_and_note() {
        let intent = UpiIntent::from_config(&config())
            .with_amount(145.0)
            .with_note("Order payment");
        assert_eq!(
            intent.to_uri(),
            "upi://pay?pa=kashyaprishabh8957%40okicici&pn=AllenEatery&cu=INR&am=145.00&tn=Order+payment"
        );

        let free = UpiIntent::from_config(&config()).with_amount(0.0).with_note(" ");
        assert!(free.amount.is_none());
        assert!(free.note.is_none());
    }

    #[test]
    fn receipt_and_slip() {
        let menu = vec![FoodItem {
            id: "t".to_string(),
            name: "Tea".to_string(),
            price: 10.0,
            category: "Beverages".to_string(),
            image: String::new(),
            description: String::new(),
        }];
        let mut cart = Cart::new();
        cart.add("t");
        cart.add("t");

        let receipt = Receipt::from_cart(&cart, &menu, Some("4821".to_string()));
        assert_eq!(receipt.item_count, 2);
        assert_eq!(receipt.total, 20.0);

        let slip = token_slip_text("AllenEatery", receipt.token.as_deref(), &receipt, "19/10/2026");
        assert!(slip.starts_with("AllenEatery\nPickup Token\n4821\n"));
        assert!(slip.contains("Tea x 2  ₹20\n"));
        assert!(slip.contains("Total  ₹20\n"));

        assert_eq!(token_slip_filename(Some("4821")), "allen-eatery-token-4821.txt");
        assert_eq!(token_slip_filename(None), "allen-eatery-token-token.txt");
    }
}
