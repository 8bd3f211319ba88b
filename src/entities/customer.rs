// 👤 Customer Entity
//
// Identity: exact name
// Similar:  name ignoring case and whitespace ("Alice Pauline" ~ "ALICE PAULINE")
//
// A customer is immutable. Editing details or orders produces a new Customer
// which the address book swaps in with an atomic in-place replace.

use super::fields::{Address, Email, Name, Phone, Tag};
use super::order::Order;
use crate::record::Record;
use crate::unique_list::UniqueEntityList;
use crate::view::ObservableView;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    orders: UniqueEntityList<Order>,
}

impl Customer {
    /// New customer with no orders
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Customer {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
            orders: UniqueEntityList::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn orders(&self) -> &UniqueEntityList<Order> {
        &self.orders
    }

    /// Live read-only view of this customer's orders
    pub fn order_view(&self) -> ObservableView<Order> {
        self.orders.as_view()
    }

    /// Same customer holding `orders` instead of the current order list
    pub fn with_orders(&self, orders: UniqueEntityList<Order>) -> Customer {
        Customer {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            tags: self.tags.clone(),
            orders,
        }
    }

    pub fn pending_order_count(&self) -> usize {
        self.orders
            .snapshot()
            .iter()
            .filter(|order| order.status().is_pending())
            .count()
    }
}

impl Record for Customer {
    fn is_same_identity(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn is_similar(&self, other: &Self) -> bool {
        self.name.is_similar(&other.name)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{alice, bob, CustomerBuilder, OrderBuilder, VALID_ADDRESS_BOB};

    #[test]
    fn test_customer_identity_is_exact_name() {
        let a = alice();
        assert!(a.is_same_identity(&a));

        let moved = CustomerBuilder::from_customer(&a)
            .with_phone("11111111")
            .with_address(VALID_ADDRESS_BOB)
            .build();
        assert!(a.is_same_identity(&moved));
        assert!(moved.is_same_identity(&a));

        let loud = CustomerBuilder::from_customer(&a).with_name("ALICE PAULINE").build();
        assert!(!a.is_same_identity(&loud));
        assert!(!a.is_same_identity(&bob()));
    }

    #[test]
    fn test_customer_similarity() {
        let a = alice();
        let loud = CustomerBuilder::new().with_name("ALICE PAULINE").build();
        let squashed = CustomerBuilder::new().with_name("alicepauline").build();

        assert!(a.is_similar(&loud));
        assert!(a.is_similar(&squashed));
        assert!(loud.is_similar(&squashed));
        assert!(!a.is_similar(&bob()));
    }

    #[test]
    fn test_customer_value_equality() {
        let a = alice();
        assert_eq!(a, alice());
        assert_ne!(a, CustomerBuilder::from_customer(&a).with_email("other@example.com").build());
        assert_ne!(a, CustomerBuilder::from_customer(&a).with_tags(&[]).build());
    }

    #[test]
    fn test_with_orders_leaves_original_untouched() {
        let a = alice();
        let orders = UniqueEntityList::from_entities(vec![OrderBuilder::new().build()]).unwrap();

        let with_orders = a.with_orders(orders);

        assert!(a.orders().is_empty());
        assert_eq!(with_orders.orders().len(), 1);
        assert!(a.is_same_identity(&with_orders));
        assert_ne!(a, with_orders);
    }

    #[test]
    fn test_pending_order_count() {
        let pending = OrderBuilder::new().with_item("Lamp").build();
        let done = OrderBuilder::new()
            .with_item("Chair")
            .with_status(crate::entities::OrderStatus::Completed)
            .build();
        let customer = CustomerBuilder::new().with_orders(vec![pending, done]).build();

        assert_eq!(customer.orders().len(), 2);
        assert_eq!(customer.pending_order_count(), 1);
    }

    #[test]
    fn test_customer_display() {
        let customer = CustomerBuilder::new()
            .with_name("Amy Bee")
            .with_phone("85355255")
            .with_email("amy@gmail.com")
            .with_address("123, Jurong West Ave 6")
            .with_tags(&["friends", "vip"])
            .build();
        assert_eq!(
            customer.to_string(),
            "Amy Bee; Phone: 85355255; Email: amy@gmail.com; Address: 123, Jurong West Ave 6; Tags: [friends][vip]"
        );
    }

    #[test]
    fn test_customer_serde_roundtrip_keeps_orders() {
        let customer = CustomerBuilder::from_customer(&alice())
            .with_orders(vec![OrderBuilder::new().with_item("Lamp").build()])
            .build();

        let json = serde_json::to_string(&customer).unwrap();
        let decoded: Customer = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, customer);
    }

    #[test]
    fn test_customer_deserialize_rejects_duplicate_orders() {
        let lamp = OrderBuilder::new().with_item("Lamp").build();
        let mut json = serde_json::to_value(alice()).unwrap();
        json["orders"] = serde_json::to_value(vec![lamp.clone(), lamp]).unwrap();

        assert!(serde_json::from_value::<Customer>(json).is_err());
    }
}
