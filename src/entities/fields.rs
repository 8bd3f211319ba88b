// 🏷️ Field Values - validated newtypes for customer and order fields
//
// Records are built from these, so a Customer or Order can never hold a blank
// name, a malformed phone number or an impossible date.
// Every type serializes as its plain form and re-validates when decoded.

use crate::error::FieldError;
use crate::record::similarity_key;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CUSTOMER FIELDS
// ============================================================================

/// Customer name. Identity compares it exactly; similarity ignores case and
/// whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(FieldError::Blank { field: "name" });
        }
        if value.chars().any(char::is_control) {
            return Err(FieldError::invalid(
                "name",
                value,
                "must not contain control characters",
            ));
        }
        Ok(Name(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_similar(&self, other: &Name) -> bool {
        similarity_key(&self.0) == similarity_key(&other.0)
    }
}

/// Phone number: digits only, at least three of them
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(FieldError::Blank { field: "phone" });
        }
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(FieldError::invalid("phone", value, "must contain only digits"));
        }
        if value.len() < 3 {
            return Err(FieldError::invalid("phone", value, "must be at least 3 digits long"));
        }
        Ok(Phone(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address of the form `local-part@domain`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

const EMAIL_LOCAL_SPECIALS: &[char] = &['+', '_', '.', '-'];

impl Email {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(FieldError::Blank { field: "email" });
        }

        let (local, domain) = value
            .split_once('@')
            .ok_or_else(|| FieldError::invalid("email", value, "must contain '@'"))?;

        let local_ok = !local.is_empty()
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || EMAIL_LOCAL_SPECIALS.contains(&c))
            && !local.starts_with(EMAIL_LOCAL_SPECIALS)
            && !local.ends_with(EMAIL_LOCAL_SPECIALS);
        if !local_ok {
            return Err(FieldError::invalid(
                "email",
                value,
                "local part must be alphanumeric and may not start or end with + _ . -",
            ));
        }

        // Domain: dot-separated labels, each alphanumeric with inner hyphens,
        // last label at least two characters.
        let labels: Vec<&str> = domain.split('.').collect();
        let labels_ok = labels.iter().all(|label| {
            !label.is_empty()
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
                && !label.starts_with('-')
                && !label.ends_with('-')
        });
        let tld_ok = labels.last().map(|l| l.len() >= 2).unwrap_or(false);
        if !labels_ok || !tld_ok {
            return Err(FieldError::invalid("email", value, "domain is malformed"));
        }

        Ok(Email(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(FieldError::Blank { field: "address" });
        }
        Ok(Address(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Single-word alphanumeric label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(FieldError::Blank { field: "tag" });
        }
        if !value.chars().all(|c| c.is_alphanumeric()) {
            return Err(FieldError::invalid("tag", value, "must be alphanumeric"));
        }
        Ok(Tag(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// ORDER FIELDS
// ============================================================================

/// Description of the ordered item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Item(String);

impl Item {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(FieldError::Blank { field: "item" });
        }
        Ok(Item(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_similar(&self, other: &Item) -> bool {
        similarity_key(&self.0) == similarity_key(&other.0)
    }
}

/// Quantity ordered, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Count(u32);

impl Count {
    pub fn new(value: u32) -> Result<Self, FieldError> {
        if value == 0 {
            return Err(FieldError::invalid("count", "0", "must be a positive integer"));
        }
        Ok(Count(value))
    }

    pub fn parse(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        let n = value
            .parse::<u32>()
            .map_err(|_| FieldError::invalid("count", value, "must be a positive integer"))?;
        Count::new(n)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// Delivery date, written `DD-MM-YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderDate(NaiveDate);

pub const DATE_FORMAT: &str = "%d-%m-%Y";

impl OrderDate {
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        let value = value.trim();
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(OrderDate)
            .map_err(|_| FieldError::invalid("date", value, "must be a valid DD-MM-YYYY date"))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        OrderDate(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl TryFrom<String> for Name {
    type Error = FieldError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Name::new(&value)
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::new(&value)
    }
}

impl TryFrom<String> for Email {
    type Error = FieldError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(&value)
    }
}

impl TryFrom<String> for Address {
    type Error = FieldError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Address::new(&value)
    }
}

impl TryFrom<String> for Tag {
    type Error = FieldError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Tag::new(&value)
    }
}

impl TryFrom<String> for Item {
    type Error = FieldError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Item::new(&value)
    }
}

impl TryFrom<u32> for Count {
    type Error = FieldError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Count::new(value)
    }
}

impl TryFrom<String> for OrderDate {
    type Error = FieldError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        OrderDate::parse(&value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}

impl From<Item> for String {
    fn from(value: Item) -> Self {
        value.0
    }
}

impl From<Count> for u32 {
    fn from(value: Count) -> Self {
        value.0
    }
}

impl From<OrderDate> for String {
    fn from(value: OrderDate) -> Self {
        value.to_string()
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for OrderDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
