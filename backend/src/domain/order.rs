//! Order records and their lifecycle status.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised order status text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status `{0}`")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalised)
            .ok_or_else(|| UnknownOrderStatus(s.to_owned()))
    }
}

/// Order placed against a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: u32,
    product_id: u32,
    quantity: u32,
    status: OrderStatus,
}

impl Order {
    pub fn new(id: u32, product_id: u32, quantity: u32, status: OrderStatus) -> Self {
        Self {
            id,
            product_id,
            quantity,
            status,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn product_id(&self) -> u32 {
        self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }
}

/// Optional predicates for the order listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub product_id: Option<u32>,
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        self.product_id.is_none_or(|id| order.product_id() == id)
            && self.status.is_none_or(|status| order.status() == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pending", OrderStatus::Pending)]
    #[case("Shipped", OrderStatus::Shipped)]
    #[case(" delivered ", OrderStatus::Delivered)]
    #[case("CANCELLED", OrderStatus::Cancelled)]
    fn parses_status_case_insensitively(#[case] raw: &str, #[case] expected: OrderStatus) {
        assert_eq!(raw.parse::<OrderStatus>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_status() {
        assert_eq!(
            "lost".parse::<OrderStatus>(),
            Err(UnknownOrderStatus("lost".to_owned()))
        );
    }

    #[rstest]
    #[case(OrderFilter::default(), true)]
    #[case(OrderFilter { product_id: Some(2), status: None }, true)]
    #[case(OrderFilter { product_id: Some(3), status: None }, false)]
    #[case(OrderFilter { product_id: Some(2), status: Some(OrderStatus::Shipped) }, true)]
    #[case(OrderFilter { product_id: None, status: Some(OrderStatus::Pending) }, false)]
    fn filter_combines_predicates(#[case] filter: OrderFilter, #[case] expected: bool) {
        let order = Order::new(10, 2, 1, OrderStatus::Shipped);
        assert_eq!(filter.matches(&order), expected);
    }
}
