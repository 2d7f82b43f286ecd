//! Counterparty entity: customers and suppliers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::{Entity, EntityMeta, EntityRef};

/// Legal form of a counterparty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompanyType {
    /// A legal entity.
    #[default]
    Legal,
    /// A sole proprietor.
    Entrepreneur,
    /// A private person.
    Individual,
}

/// A counterparty (customer, supplier or both).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Counterparty {
    /// Entity metadata.
    /// Read-only field.
    #[serde(default, skip_serializing)]
    pub meta: Option<EntityMeta>,

    /// Counterparty id (UUID).
    /// Read-only field.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,

    /// Full legal name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_title: Option<String>,

    /// Taxpayer number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_type: Option<CompanyType>,

    /// Group tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    /// Owner employee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<EntityRef>,

    /// Creation time.
    /// Read-only field.
    #[serde(default, skip_serializing, with = "crate::rest::datetime::option")]
    pub created: Option<NaiveDateTime>,

    /// Last modification time.
    /// Read-only field.
    #[serde(default, skip_serializing, with = "crate::rest::datetime::option")]
    pub updated: Option<NaiveDateTime>,
}

impl Entity for Counterparty {
    const NAME: &'static str = "counterparty";
    const PATH: &'static str = "entity/counterparty";
}
