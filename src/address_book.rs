// 📒 Address Book - customers and their orders
//
// Owns one UniqueEntityList<Customer>. Order operations never touch a stored
// customer in place: they build an edited customer carrying a new order list
// and commit it with one set_entity, so a rejected order leaves the whole
// book as it was.

use crate::entities::{Customer, Order, OrderStatus};
use crate::error::{BookError, BookResult};
use crate::record::Record;
use crate::unique_list::UniqueEntityList;
use crate::view::ObservableView;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

// ============================================================================
// DUPLICATE WARNING
// ============================================================================

/// Two stored customers that look alike but are distinct identities
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateWarning {
    pub first_index: usize,
    pub second_index: usize,
    pub first: Arc<Customer>,
    pub second: Arc<Customer>,
}

impl DuplicateWarning {
    pub fn reason(&self) -> String {
        format!(
            "'{}' and '{}' look like the same customer",
            self.first.name(),
            self.second.name()
        )
    }
}

// ============================================================================
// ADDRESS BOOK
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBook {
    customers: UniqueEntityList<Customer>,
}

impl AddressBook {
    pub fn new() -> Self {
        AddressBook::default()
    }

    pub fn from_customers(customers: Vec<Customer>) -> BookResult<Self> {
        let customers = UniqueEntityList::from_entities(customers).map_err(BookError::customer)?;
        Ok(AddressBook { customers })
    }

    // ========================================================================
    // CUSTOMERS
    // ========================================================================

    pub fn has_customer(&self, customer: &Customer) -> bool {
        self.customers.contains(customer)
    }

    /// True if a *different* stored customer looks like `customer`
    pub fn has_similar_customer(&self, customer: &Customer) -> bool {
        self.customers.has_similar(customer)
    }

    pub fn add_customer(&mut self, customer: Customer) -> BookResult<()> {
        let name = customer.name().clone();
        self.customers.add(customer).map_err(BookError::customer)?;
        debug!(customer = %name, total = self.customers.len(), "customer added");
        Ok(())
    }

    pub fn set_customer(&mut self, target: &Customer, edited: Customer) -> BookResult<()> {
        let name = edited.name().clone();
        self.customers
            .set_entity(target, edited)
            .map_err(BookError::customer)?;
        debug!(target = %target.name(), customer = %name, "customer edited");
        Ok(())
    }

    pub fn remove_customer(&mut self, customer: &Customer) -> BookResult<Arc<Customer>> {
        let removed = self.customers.remove(customer).map_err(BookError::customer)?;
        debug!(customer = %removed.name(), total = self.customers.len(), "customer removed");
        Ok(removed)
    }

    pub fn set_customers(&mut self, customers: Vec<Customer>) -> BookResult<()> {
        self.customers
            .set_entities(customers)
            .map_err(BookError::customer)?;
        debug!(total = self.customers.len(), "customers replaced");
        Ok(())
    }

    /// Replace this book's contents with `other`'s
    pub fn reset_data(&mut self, other: &AddressBook) {
        self.customers.set_entities_from(&other.customers);
        debug!(total = self.customers.len(), "address book reset");
    }

    /// The stored customer identity-equal to `customer`
    pub fn find_equivalent_customer(&self, customer: &Customer) -> BookResult<Arc<Customer>> {
        self.customers
            .find_equivalent(customer)
            .map_err(BookError::customer)
    }

    /// Live read-only customer list for display
    pub fn customer_list(&self) -> ObservableView<Customer> {
        self.customers.as_view()
    }

    pub fn customers(&self) -> &UniqueEntityList<Customer> {
        &self.customers
    }

    /// Independent copy; edits to it never reach this book
    pub fn copy(&self) -> AddressBook {
        AddressBook {
            customers: self.customers.copy(),
        }
    }

    /// Pairs of stored customers whose names are alike
    pub fn duplicate_warnings(&self) -> Vec<DuplicateWarning> {
        let snapshot = self.customers.snapshot();
        self.customers
            .similar_pairs()
            .into_iter()
            .filter_map(|(i, j)| {
                Some(DuplicateWarning {
                    first_index: i,
                    second_index: j,
                    first: Arc::clone(snapshot.get(i)?),
                    second: Arc::clone(snapshot.get(j)?),
                })
            })
            .collect()
    }

    // ========================================================================
    // ORDERS
    // ========================================================================

    /// True if `customer` holds a pending order that looks like `order` but is
    /// not the same order
    pub fn has_similar_order(&self, customer: &Customer, order: &Order) -> BookResult<bool> {
        let stored = self.find_equivalent_customer(customer)?;
        Ok(stored.orders().has_similar(order))
    }

    pub fn add_order(&mut self, customer: &Customer, order: Order) -> BookResult<()> {
        let item = order.item().clone();
        self.edit_orders(customer, |orders| orders.add(order))?;
        debug!(customer = %customer.name(), item = %item, "order added");
        Ok(())
    }

    pub fn set_order(&mut self, customer: &Customer, target: &Order, edited: Order) -> BookResult<()> {
        self.edit_orders(customer, |orders| orders.set_entity(target, edited))?;
        debug!(customer = %customer.name(), item = %target.item(), "order edited");
        Ok(())
    }

    pub fn remove_order(&mut self, customer: &Customer, order: &Order) -> BookResult<()> {
        self.edit_orders(customer, |orders| orders.remove(order).map(|_| ()))?;
        debug!(customer = %customer.name(), item = %order.item(), "order removed");
        Ok(())
    }

    /// Change an order's status, keeping its position
    pub fn mark_order(&mut self, customer: &Customer, order: &Order, status: OrderStatus) -> BookResult<()> {
        self.edit_orders(customer, |orders| {
            let stored = orders.find_equivalent(order)?;
            orders.set_entity(order, stored.marked(status))
        })?;
        debug!(customer = %customer.name(), item = %order.item(), status = %status, "order marked");
        Ok(())
    }

    /// Apply `edit` to a copy of the customer's orders, then commit the
    /// edited customer in one step. Nothing is written if either stage fails.
    fn edit_orders<F>(&mut self, customer: &Customer, edit: F) -> BookResult<()>
    where
        F: FnOnce(&mut UniqueEntityList<Order>) -> crate::error::ListResult<()>,
    {
        let stored = self.find_equivalent_customer(customer)?;

        let mut orders = stored.orders().copy();
        edit(&mut orders).map_err(BookError::order)?;

        let edited = stored.with_orders(orders);
        debug_assert!(stored.is_same_identity(&edited));
        self.customers
            .set_entity(&stored, edited)
            .map_err(BookError::customer)
    }
}
