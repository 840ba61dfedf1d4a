//! Client-side cart.
//!
//! The cart is only a quantity map; prices, names and pictures always come
//! from the current menu listing. Lines whose food id is not on the menu are
//! dropped by [`Cart::cleanup`], which callers run whenever the menu changes.

use crate::models::{CartItems, FoodItem, OrderLineRequest};

/// Quantities keyed by food id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    items: CartItems,
}

/// A cart entry joined with its menu item.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub food: FoodItem,
    pub quantity: u32,
    pub subtotal: f64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the server's `cartData`, dropping zero quantities.
    pub fn from_items(mut items: CartItems) -> Self {
        items.retain(|_, qty| *qty > 0);
        Self { items }
    }

    pub fn items(&self) -> &CartItems {
        &self.items
    }

    pub fn add(&mut self, food_id: &str) {
        *self.items.entry(food_id.to_string()).or_insert(0) += 1;
    }

    pub fn remove(&mut self, food_id: &str) {
        if let Some(qty) = self.items.get_mut(food_id) {
            *qty = qty.saturating_sub(1);
            if *qty == 0 {
                self.items.remove(food_id);
            }
        }
    }

    pub fn quantity(&self, food_id: &str) -> u32 {
        self.items.get(food_id).copied().unwrap_or(0)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.values().all(|qty| *qty == 0)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop entries that are not on `menu`. Does nothing while the menu is
    /// still empty. Returns whether the cart changed.
    pub fn cleanup(&mut self, menu: &[FoodItem]) -> bool {
        if menu.is_empty() {
            return false;
        }
        let before = self.items.len();
        self.items
            .retain(|id, qty| *qty > 0 && menu.iter().any(|item| item.id == *id));
        let changed = self.items.len() != before;
        if changed {
            tracing::debug!("Dropped {} stale cart entries", before - self.items.len());
        }
        changed
    }

    /// Sum of `price * quantity` over lines found on the menu.
    pub fn total(&self, menu: &[FoodItem]) -> f64 {
        if menu.is_empty() || self.is_empty() {
            return 0.0;
        }
        self.items
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(id, qty)| match menu.iter().find(|item| item.id == *id) {
                Some(item) => item.price * f64::from(*qty),
                None => {
                    tracing::warn!("Item with ID {id} not found in menu");
                    0.0
                }
            })
            .sum()
    }

    /// Lines in menu order.
    pub fn lines(&self, menu: &[FoodItem]) -> Vec<CartLine> {
        menu.iter()
            .filter_map(|food| {
                let quantity = self.quantity(&food.id);
                (quantity > 0).then(|| CartLine {
                    food: food.clone(),
                    quantity,
                    subtotal: food.price * f64::from(quantity),
                })
            })
            .collect()
    }

    /// The `items` array of an order-creation request, in menu order.
    pub fn order_items(&self, menu: &[FoodItem]) -> Vec<OrderLineRequest> {
        menu.iter()
            .filter_map(|food| {
                let quantity = self.quantity(&food.id);
                (quantity > 0).then(|| OrderLineRequest {
                    food_id: food.id.clone(),
                    quantity,
                })
            })
            .collect()
    }
}
