//! User and address records
//!
//! A field degraded by challenge mode can be in one of three wire states:
//! present with a valid value, present as JSON `null`, or missing from the
//! serialized object entirely. [`Degradable`] models the full tri-state
//! explicitly; fields that only ever occupy two of the states use a plain
//! `Option` with the matching serde attributes.

use crate::ids::UserId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Presence state of a field that challenge mode may degrade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degradable<T> {
    /// Present with a valid value.
    Intact(T),

    /// Present, serialized as JSON `null`.
    Nulled,

    /// Missing from the serialized record.
    Dropped,
}

// Manual impl: the derive would demand `T: Default`, which the payload
// types have no reason to provide.
impl<T> Default for Degradable<T> {
    fn default() -> Self {
        Degradable::Dropped
    }
}

impl<T> Degradable<T> {
    pub fn is_intact(&self) -> bool {
        matches!(self, Degradable::Intact(_))
    }

    pub fn is_nulled(&self) -> bool {
        matches!(self, Degradable::Nulled)
    }

    pub fn is_dropped(&self) -> bool {
        matches!(self, Degradable::Dropped)
    }

    pub fn as_intact(&self) -> Option<&T> {
        match self {
            Degradable::Intact(value) => Some(value),
            _ => None,
        }
    }
}

// `Dropped` is handled at the field level via `skip_serializing_if`; a
// `Degradable` serialized directly falls back to `null`.
impl<T: Serialize> Serialize for Degradable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Degradable::Intact(value) => value.serialize(serializer),
            Degradable::Nulled | Degradable::Dropped => serializer.serialize_none(),
        }
    }
}

// A missing key never reaches this impl; `#[serde(default)]` on the field
// yields `Dropped` instead.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Degradable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Degradable::Intact(value),
            None => Degradable::Nulled,
        })
    }
}

/// Postal address embedded in a user record.
///
/// All subfields are required whenever the address itself is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// A synthetic user record.
///
/// `id`, `email`, and `company` are never degraded. The remaining fields
/// each carry the wire states challenge mode can put them in: `name` is
/// nullable but never missing, `phone` is missing but never null,
/// `address` covers the full tri-state, `job_title` may be blanked to the
/// empty string, and `avatar` may be swapped for a known-bad URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,

    pub name: Option<String>,

    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Degradable::is_dropped")]
    pub address: Degradable<Address>,

    pub company: String,

    pub job_title: String,

    pub avatar: String,
}
