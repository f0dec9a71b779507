//! Filterable listing
//!
//! [`FilterCriteria`] carries one optional constraint per item field. Absent
//! constraints impose nothing; present ones are ANDed. [`filter`] keeps the
//! input order and never fails.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::FoodItem;
use crate::serde_helpers::{empty_as_none, optional_bool, optional_date};

/// Listing filter, bound from the index page query string
///
/// Text constraints are case-insensitive substring matches. Numbers, booleans
/// and dates match exactly; `dateAdded` compares calendar dates only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        deserialize_with = "empty_as_none",
        serialize_with = "rust_decimal::serde::float_option::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub quantity_in_stock: Option<i32>,
    #[serde(with = "optional_date", skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(deserialize_with = "optional_bool", skip_serializing_if = "Option::is_none")]
    pub is_perishable: Option<bool>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub calories_per_serving: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    /// Time of day is discarded on binding
    #[serde(with = "optional_date", skip_serializing_if = "Option::is_none")]
    pub date_added: Option<NaiveDate>,
    #[serde(deserialize_with = "optional_bool", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Blank criterion is no criterion
fn active_text(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|s| !s.trim().is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn text_matches(criterion: &Option<String>, value: &str) -> bool {
    active_text(criterion).is_none_or(|needle| contains_ignore_case(value, needle))
}

fn eq_matches<T: PartialEq>(criterion: &Option<T>, value: &T) -> bool {
    criterion.as_ref().is_none_or(|wanted| wanted == value)
}

impl FilterCriteria {
    /// `true` when no constraint is active
    pub fn is_empty(&self) -> bool {
        let texts = [
            &self.name,
            &self.category,
            &self.brand,
            &self.description,
            &self.unit,
            &self.ingredients,
            &self.barcode,
            &self.supplier,
        ];
        texts.into_iter().all(|t| active_text(t).is_none())
            && self.price.is_none()
            && self.quantity_in_stock.is_none()
            && self.expiration_date.is_none()
            && self.is_perishable.is_none()
            && self.calories_per_serving.is_none()
            && self.date_added.is_none()
            && self.is_active.is_none()
    }

    /// Whether `item` satisfies every active constraint
    pub fn matches(&self, item: &FoodItem) -> bool {
        text_matches(&self.name, &item.name)
            && text_matches(&self.category, &item.category)
            && text_matches(&self.brand, &item.brand)
            && text_matches(&self.description, &item.description)
            && eq_matches(&self.price, &item.price)
            && text_matches(&self.unit, &item.unit)
            && eq_matches(&self.quantity_in_stock, &item.quantity_in_stock)
            // an item without an expiration date never satisfies one
            && self
                .expiration_date
                .is_none_or(|wanted| item.expiration_date == Some(wanted))
            && eq_matches(&self.is_perishable, &item.is_perishable)
            && eq_matches(&self.calories_per_serving, &item.calories_per_serving)
            && text_matches(&self.ingredients, &item.ingredients)
            && text_matches(&self.barcode, &item.barcode)
            && text_matches(&self.supplier, &item.supplier)
            && eq_matches(&self.date_added, &item.date_added.date())
            && eq_matches(&self.is_active, &item.is_active)
    }
}

/// Keep the items matching `criteria`, in their original order
pub fn filter(items: Vec<FoodItem>, criteria: &FilterCriteria) -> Vec<FoodItem> {
    if criteria.is_empty() {
        return items;
    }
    items.into_iter().filter(|item| criteria.matches(item)).collect()
}

/// [`filter`] over a possibly absent collection; absent means empty
pub fn filter_optional(items: Option<Vec<FoodItem>>, criteria: &FilterCriteria) -> Vec<FoodItem> {
    items.map(|items| filter(items, criteria)).unwrap_or_default()
}
