// 📦 Order Entity
//
// Identity: (item, date) compared exactly
// Similar:  item ignoring case/whitespace, same date, both still pending
// Count and status are plain values; editing them keeps the identity.

use super::fields::{Count, Item, OrderDate, OrderStatus};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    item: Item,
    count: Count,
    date: OrderDate,
    #[serde(default)]
    status: OrderStatus,
}

impl Order {
    /// New pending order
    pub fn new(item: Item, count: Count, date: OrderDate) -> Self {
        Order {
            item,
            count,
            date,
            status: OrderStatus::Pending,
        }
    }

    pub fn with_status(item: Item, count: Count, date: OrderDate, status: OrderStatus) -> Self {
        Order {
            item,
            count,
            date,
            status,
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn count(&self) -> Count {
        self.count
    }

    pub fn date(&self) -> OrderDate {
        self.date
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Same order with a different status
    pub fn marked(&self, status: OrderStatus) -> Order {
        Order {
            status,
            ..self.clone()
        }
    }
}

impl Record for Order {
    fn is_same_identity(&self, other: &Self) -> bool {
        self.item == other.item && self.date == other.date
    }

    fn is_similar(&self, other: &Self) -> bool {
        self.item.is_similar(&other.item)
            && self.date == other.date
            && self.status.is_pending()
            && other.status.is_pending()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{} (by {}, {})",
            self.item, self.count, self.date, self.status
        )
    }
}
