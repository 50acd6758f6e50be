//! Shopping bag held in the visitor session.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use anfa_core::{BagItemId, Price};

/// Flat shipping charged whenever the bag has at least one line.
pub const FLAT_SHIPPING: Decimal = Decimal::from_parts(45, 0, 0, false, 0);

/// A line in the bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagItem {
    pub id: BagItemId,
    pub name: String,
    /// Variant summary, e.g. "Camel silk · Size 1".
    pub detail: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl BagItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Formatted unit price.
    #[must_use]
    pub fn price_label(&self) -> String {
        Price::from_amount(self.price).to_string()
    }
}

/// The visitor's bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bag {
    items: Vec<BagItem>,
}

impl Default for Bag {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Bag {
    /// A bag with no lines.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// The bag every new visitor starts with.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            items: vec![
                BagItem {
                    id: BagItemId::new(1),
                    name: "Sculpted Kaftan".to_string(),
                    detail: "Camel silk · Size 1".to_string(),
                    price: Decimal::from(1480),
                    quantity: 1,
                },
                BagItem {
                    id: BagItemId::new(2),
                    name: "Nomad Trouser".to_string(),
                    detail: "Bone linen · Size 2".to_string(),
                    price: Decimal::from(980),
                    quantity: 1,
                },
            ],
        }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[BagItem] {
        &self.items
    }

    /// Whether the bag has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines, shown on the header badge.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Adjust a line's quantity by `delta`, never going below 1.
    ///
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: BagItemId, delta: i64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            let next = i64::from(item.quantity).saturating_add(delta).max(1);
            item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove(&mut self, id: BagItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Add a product to the bag.
    ///
    /// A line with the same name and detail absorbs the quantity; otherwise a
    /// new line is appended. Returns the id of the affected line.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        detail: impl Into<String>,
        price: Decimal,
        quantity: u32,
    ) -> BagItemId {
        let name = name.into();
        let detail = detail.into();
        let quantity = quantity.max(1);

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.name == name && item.detail == detail)
        {
            item.quantity = item.quantity.saturating_add(quantity);
            return item.id;
        }

        let id = self
            .items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(BagItemId::new(1), |max| max.next());

        self.items.push(BagItem {
            id,
            name,
            detail,
            price,
            quantity,
        });
        id
    }

    /// Sum of line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .filter(|item| item.quantity > 0)
            .map(BagItem::line_total)
            .sum()
    }

    /// Flat shipping, or zero for an empty bag.
    #[must_use]
    pub fn shipping(&self) -> Decimal {
        if self.is_empty() {
            Decimal::ZERO
        } else {
            FLAT_SHIPPING
        }
    }

    /// Subtotal plus shipping.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.shipping()
    }

    #[must_use]
    pub fn subtotal_label(&self) -> String {
        Price::from_amount(self.subtotal()).to_string()
    }

    #[must_use]
    pub fn shipping_label(&self) -> String {
        Price::from_amount(self.shipping()).to_string()
    }

    #[must_use]
    pub fn total_label(&self) -> String {
        Price::from_amount(self.total()).to_string()
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_totals() {
        let bag = Bag::seeded();
        assert_eq!(bag.item_count(), 2);
        assert_eq!(bag.subtotal(), Decimal::from(2460));
        assert_eq!(bag.shipping(), Decimal::from(45));
        assert_eq!(bag.total(), Decimal::from(2505));
        assert_eq!(bag.total_label(), "2,505 AED");
    }

    #[test]
    fn test_increment_changes_subtotal() {
        let mut bag = Bag::seeded();
        bag.update_quantity(BagItemId::new(1), 1);
        assert_eq!(bag.items()[0].quantity, 2);
        assert_eq!(bag.subtotal(), Decimal::from(1480 * 2 + 980));
    }

    #[test]
    fn test_decrement_clamps_at_one() {
        let mut bag = Bag::seeded();
        bag.update_quantity(BagItemId::new(2), -1);
        assert_eq!(bag.items()[1].quantity, 1);
        bag.update_quantity(BagItemId::new(2), -10);
        assert_eq!(bag.items()[1].quantity, 1);
        assert_eq!(bag.subtotal(), Decimal::from(2460));
    }

    #[test]
    fn test_update_unknown_id_is_ignored() {
        let mut bag = Bag::seeded();
        bag.update_quantity(BagItemId::new(99), 3);
        assert_eq!(bag, Bag::seeded());
    }

    #[test]
    fn test_remove_drops_line_from_totals() {
        let mut bag = Bag::seeded();
        assert!(bag.remove(BagItemId::new(1)));
        assert_eq!(bag.subtotal(), Decimal::from(980));
        assert_eq!(bag.total(), Decimal::from(1025));
        assert!(!bag.remove(BagItemId::new(1)));
    }

    #[test]
    fn test_empty_bag_has_no_shipping() {
        let mut bag = Bag::seeded();
        bag.remove(BagItemId::new(1));
        bag.remove(BagItemId::new(2));
        assert!(bag.is_empty());
        assert_eq!(bag.shipping(), Decimal::ZERO);
        assert_eq!(bag.total(), Decimal::ZERO);
    }

    #[test]
    fn test_add_appends_with_next_id() {
        let mut bag = Bag::seeded();
        let id = bag.add("Monolith Jacket", "Size M", Decimal::from(2150), 2);
        assert_eq!(id, BagItemId::new(3));
        assert_eq!(bag.item_count(), 3);
        assert_eq!(bag.subtotal(), Decimal::from(2460 + 4300));
    }

    #[test]
    fn test_add_merges_matching_line() {
        let mut bag = Bag::seeded();
        let id = bag.add("Nomad Trouser", "Bone linen · Size 2", Decimal::from(980), 1);
        assert_eq!(id, BagItemId::new(2));
        assert_eq!(bag.item_count(), 2);
        assert_eq!(bag.items()[1].quantity, 2);
    }

    #[test]
    fn test_add_to_empty_bag_starts_at_one() {
        let mut bag = Bag::empty();
        let id = bag.add("Nomad Trouser", "Size S", Decimal::from(980), 0);
        assert_eq!(id, BagItemId::new(1));
        assert_eq!(bag.items()[0].quantity, 1);
        assert_eq!(bag.shipping(), FLAT_SHIPPING);
    }

    #[test]
    fn test_session_serialization() {
        let bag = Bag::seeded();
        let json = serde_json::to_value(&bag).unwrap_or_default();
        let restored: Bag = serde_json::from_value(json).unwrap_or_else(|_| Bag::empty());
        assert_eq!(restored, bag);
    }
}
