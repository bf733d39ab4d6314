use tracing::info;

use crate::models::CartItem;

/// Result of pressing checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStatus {
    /// Nothing to pay for
    Empty,
    /// Payments are not wired up; the cart is left as it was
    NotAvailable,
}

/// Courses picked for purchase, kept only for the life of the process
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course; a course already in the cart is not added twice
    pub fn add(&mut self, item: CartItem) -> bool {
        if self.items.iter().any(|existing| existing.id == item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Drop every item with this id; absent ids are ignored
    pub fn remove(&mut self, course_id: &str) {
        self.items.retain(|item| item.id != course_id);
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item prices; 0 for an empty cart
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Placeholder: checkout is not implemented by the backend client
    pub fn checkout(&self) -> CheckoutStatus {
        if self.is_empty() {
            return CheckoutStatus::Empty;
        }
        info!("Checkout requested for {} items; not available", self.len());
        CheckoutStatus::NotAvailable
    }
}
