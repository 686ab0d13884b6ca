//! Order book table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::order::{Order, OrderBook};

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    order_type: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            order_type: order.order_type.to_string(),
            price: order.price.to_string(),
            quantity: order.quantity.to_string(),
        }
    }
}

/// Render the book, or a placeholder line when it is empty.
pub fn orders_table(book: &OrderBook) -> String {
    if book.is_empty() {
        return "No orders".to_string();
    }
    let rows: Vec<OrderRow> = book.orders().iter().map(OrderRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::wire::OrderResponse;

    fn row(id: &str, order_type: &str, price: f64, quantity: f64) -> OrderResponse {
        OrderResponse {
            id: id.into(),
            order_type: order_type.into(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_empty_book_placeholder() {
        assert_eq!(orders_table(&OrderBook::new()), "No orders");
    }

    #[test]
    fn test_table_lists_every_order() {
        let mut book = OrderBook::new();
        book.replace(vec![row("a1", "BUY", 5.0, 10.0), row("b2", "SELL", 7.25, 1.5)]);

        let table = orders_table(&book);
        for needle in ["ID", "Type", "Price", "Quantity", "a1", "BUY", "b2", "SELL", "7.25", "1.5"] {
            assert!(table.contains(needle), "missing {needle} in\n{table}");
        }
    }
}
