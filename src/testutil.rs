// Test fixtures: builders and a handful of typical customers/orders

use crate::entities::{
    Address, Count, Customer, Email, Item, Name, Order, OrderDate, OrderStatus, Phone, Tag,
};
use crate::unique_list::UniqueEntityList;

pub const VALID_ADDRESS_BOB: &str = "Block 123, Bobby Street 3";
pub const VALID_TAG_HUSBAND: &str = "husband";

// ============================================================================
// CUSTOMER BUILDER
// ============================================================================

pub struct CustomerBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    tags: Vec<String>,
    orders: Vec<Order>,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    pub fn new() -> Self {
        CustomerBuilder {
            name: "Amy Bee".to_string(),
            phone: "85355255".to_string(),
            email: "amy@gmail.com".to_string(),
            address: "123, Jurong West Ave 6, #08-111".to_string(),
            tags: Vec::new(),
            orders: Vec::new(),
        }
    }

    pub fn from_customer(customer: &Customer) -> Self {
        CustomerBuilder {
            name: customer.name().as_str().to_string(),
            phone: customer.phone().as_str().to_string(),
            email: customer.email().as_str().to_string(),
            address: customer.address().as_str().to_string(),
            tags: customer.tags().iter().map(|t| t.as_str().to_string()).collect(),
            orders: customer.orders().snapshot().iter().map(|o| (**o).clone()).collect(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    pub fn build(self) -> Customer {
        let customer = Customer::new(
            Name::new(&self.name).unwrap(),
            Phone::new(&self.phone).unwrap(),
            Email::new(&self.email).unwrap(),
            Address::new(&self.address).unwrap(),
            self.tags.iter().map(|t| Tag::new(t).unwrap()),
        );
        customer.with_orders(UniqueEntityList::from_entities(self.orders).unwrap())
    }
}

// ============================================================================
// ORDER BUILDER
// ============================================================================

pub struct OrderBuilder {
    item: String,
    count: u32,
    date: String,
    status: OrderStatus,
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBuilder {
    pub fn new() -> Self {
        OrderBuilder {
            item: "Lamp".to_string(),
            count: 1,
            date: "20-11-2024".to_string(),
            status: OrderStatus::Pending,
        }
    }

    pub fn from_order(order: &Order) -> Self {
        OrderBuilder {
            item: order.item().as_str().to_string(),
            count: order.count().get(),
            date: order.date().to_string(),
            status: order.status(),
        }
    }

    pub fn with_item(mut self, item: &str) -> Self {
        self.item = item.to_string();
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Order {
        Order::with_status(
            Item::new(&self.item).unwrap(),
            Count::new(self.count).unwrap(),
            OrderDate::parse(&self.date).unwrap(),
            self.status,
        )
    }
}

// ============================================================================
// TYPICAL RECORDS
// ============================================================================

pub fn alice() -> Customer {
    CustomerBuilder::new()
        .with_name("Alice Pauline")
        .with_phone("94351253")
        .with_email("alice@example.com")
        .with_address("123, Jurong West Ave 6, #08-111")
        .with_tags(&["friends"])
        .build()
}

pub fn bob() -> Customer {
    CustomerBuilder::new()
        .with_name("Bob Choo")
        .with_phone("22222222")
        .with_email("bob@example.com")
        .with_address(VALID_ADDRESS_BOB)
        .with_tags(&[VALID_TAG_HUSBAND, "friends"])
        .build()
}

pub fn carl() -> Customer {
    CustomerBuilder::new()
        .with_name("Carl Kurz")
        .with_phone("95352563")
        .with_email("heinz@example.com")
        .with_address("wall street")
        .build()
}

pub fn abacus() -> Order {
    OrderBuilder::new()
        .with_item("Abacus")
        .with_count(2)
        .with_date("20-11-2024")
        .build()
}

pub fn lamp() -> Order {
    OrderBuilder::new()
        .with_item("Desk Lamp")
        .with_count(1)
        .with_date("02-12-2024")
        .build()
}
