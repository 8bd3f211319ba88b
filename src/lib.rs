// SellSavvy Core Library
// Uniqueness-enforcing entity lists for customers and their orders
//
// Exposes the container, its read-only view, the record contract and the
// customer/order model for command handlers, storage and display layers.

pub mod address_book;   // Customers + order operations on top of the list
pub mod entities;       // Customer, Order and their validated fields
pub mod error;          // DuplicateEntity / EntityNotFound / NullInput
pub mod logging;        // Subscriber setup for the binary
pub mod record;         // Identity vs similarity contract
pub mod unique_list;    // UniqueEntityList
pub mod view;           // ObservableView

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use address_book::{AddressBook, DuplicateWarning};
pub use entities::{
    Address, Count, Customer, Email, Item, Name, Order, OrderDate, OrderStatus, Phone, Tag,
};
pub use error::{BookError, BookResult, EntityKind, EntityListError, FieldError, ListResult};
pub use logging::{init_logging, LogSettings};
pub use record::Record;
pub use unique_list::UniqueEntityList;
pub use view::{ObservableView, ViewSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
