// ⚠️ Error Taxonomy - Invariant violations signalled to callers
//
// Every mutating operation either succeeds completely or returns one of these
// and leaves the list untouched. Nothing here is logged or retried by the core.

use thiserror::Error;

// ============================================================================
// ENTITY LIST ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityListError {
    /// A required value was absent (only reachable through slot-based input)
    #[error("required entity is absent at position {position}")]
    NullInput { position: usize },

    /// The mutation would store two entities with the same identity
    #[error("operation would result in duplicate entities: {entity}")]
    DuplicateEntity { entity: String },

    /// No stored entity has the identity the caller referenced
    #[error("entity not found: {entity}")]
    EntityNotFound { entity: String },
}

impl EntityListError {
    pub fn duplicate(entity: &impl std::fmt::Display) -> Self {
        EntityListError::DuplicateEntity {
            entity: entity.to_string(),
        }
    }

    pub fn not_found(entity: &impl std::fmt::Display) -> Self {
        EntityListError::EntityNotFound {
            entity: entity.to_string(),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, EntityListError::DuplicateEntity { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EntityListError::EntityNotFound { .. })
    }

    pub fn is_null_input(&self) -> bool {
        matches!(self, EntityListError::NullInput { .. })
    }
}

pub type ListResult<T> = Result<T, EntityListError>;

// ============================================================================
// FIELD ERRORS
// ============================================================================

/// Rejected field value, raised by the validated constructors in `entities::fields`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("invalid {field} '{value}': {reason}")]
    Invalid {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl FieldError {
    pub fn invalid(field: &'static str, value: &str, reason: &'static str) -> Self {
        FieldError::Invalid {
            field,
            value: value.to_string(),
            reason,
        }
    }
}

// ============================================================================
// ADDRESS BOOK ERRORS
// ============================================================================

/// Which list inside the address book rejected an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Customer,
    Order,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::Order => "order",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} list: {source}")]
pub struct BookError {
    pub kind: EntityKind,
    #[source]
    pub source: EntityListError,
}

impl BookError {
    pub fn customer(source: EntityListError) -> Self {
        BookError {
            kind: EntityKind::Customer,
            source,
        }
    }

    pub fn order(source: EntityListError) -> Self {
        BookError {
            kind: EntityKind::Order,
            source,
        }
    }
}

pub type BookResult<T> = Result<T, BookError>;
