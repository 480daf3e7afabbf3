//! Record schemas: the ordered field names that fix CSV column order.

use std::fmt;

/// Ordered list of field names describing one record type.
///
/// The order is the column order of exported CSV files. A schema is always
/// passed explicitly; nothing in this crate looks one up behind the caller's back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<String>,
}

impl Schema {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.join(", "))
    }
}

/// Implemented by typed record models that know their own field list.
pub trait RecordSchema {
    /// Field names in declaration order.
    const FIELDS: &'static [&'static str];

    fn schema() -> Schema {
        Schema::new(Self::FIELDS.iter().copied())
    }
}
