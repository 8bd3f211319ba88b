// Entity Models - the records stored in unique entity lists
//
// Each entity has:
// - Identity fields that define "the same entity" (enforced unique)
// - A looser similarity predicate for duplicate warnings (advisory)
// - Full value equality over every field

pub mod customer;
pub mod fields;
pub mod order;

pub use customer::Customer;
pub use fields::{Address, Count, Email, Item, Name, OrderDate, OrderStatus, Phone, Tag};
pub use order::Order;
