//! Order book state container: app-owned, SDK-provided update logic.

use super::wire;
use super::{Order, OrderId};

/// The user's full order collection as last fetched.
///
/// There is no incremental update: every refresh replaces the whole list.
/// Rows the SDK cannot convert are dropped with a warning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Replace the collection with a freshly fetched list.
    pub fn replace(&mut self, fetched: Vec<wire::OrderResponse>) {
        self.orders = fetched
            .into_iter()
            .filter_map(|resp| match Order::try_from(resp) {
                Ok(order) => Some(order),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable order");
                    None
                }
            })
            .collect();
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn clear(&mut self) {
        self.orders.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, order_type: &str) -> wire::OrderResponse {
        wire::OrderResponse {
            id: id.into(),
            order_type: order_type.into(),
            price: 5.0,
            quantity: 10.0,
        }
    }

    #[test]
    fn test_replace_keeps_fetch_order() {
        let mut book = OrderBook::new();
        book.replace(vec![row("a", "BUY"), row("b", "SELL")]);
        let ids: Vec<&str> = book.orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_replace_drops_previous_rows() {
        let mut book = OrderBook::new();
        book.replace(vec![row("a", "BUY")]);
        book.replace(vec![row("c", "SELL")]);
        assert_eq!(book.len(), 1);
        assert!(book.get(&OrderId::from("a")).is_none());
        assert!(book.get(&OrderId::from("c")).is_some());
    }

    #[test]
    fn test_replace_skips_bad_rows() {
        let mut book = OrderBook::new();
        book.replace(vec![row("a", "BUY"), row("b", "???")]);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut book = OrderBook::new();
        book.replace(vec![row("a", "BUY")]);
        book.clear();
        assert!(book.is_empty());
    }
}
