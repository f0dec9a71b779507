//! Food Item Model

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::serde_helpers::{
    lenient_datetime, null_as_default, optional_date, optional_datetime, parse_bool, parse_date,
    parse_datetime,
};
use crate::validation::{
    MAX_NAME_LEN, MAX_TEXT_LEN, validate_present, validate_price, validate_required_text,
};

/// Role assigned to items created without one
pub const DEFAULT_ROLE_ID: i32 = 1;

/// Food item entity as exchanged with the inventory API
///
/// Text fields are never `null` here: the API's unset strings become `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    #[serde(rename = "foodItemId", alias = "id", default)]
    pub id: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(default)]
    pub quantity_in_stock: i32,
    /// Date only; a date-time from the API is truncated
    #[serde(default, with = "optional_date")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_perishable: bool,
    #[serde(default)]
    pub calories_per_serving: i32,
    /// Comma-like list kept as a single string
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub barcode: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub supplier: String,
    #[serde(default, with = "lenient_datetime")]
    pub date_added: NaiveDateTime,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub role_id: i32,
}

/// Typed food item form behind the create and edit pages
///
/// Blank numbers are `None` so that validation can tell "missing" from
/// "zero". Built from a post by [`FoodItemFormInput::bind`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemForm {
    #[serde(rename = "foodItemId")]
    pub id: Option<i32>,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub description: String,
    #[serde(serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub price: Option<Decimal>,
    pub unit: String,
    pub quantity_in_stock: Option<i32>,
    #[serde(with = "optional_date")]
    pub expiration_date: Option<NaiveDate>,
    pub is_perishable: bool,
    pub calories_per_serving: Option<i32>,
    pub ingredients: String,
    pub barcode: String,
    pub supplier: String,
    #[serde(with = "optional_datetime")]
    pub date_added: Option<NaiveDateTime>,
    pub is_active: bool,
    pub role_id: Option<i32>,
}

/// Food item form exactly as the browser posted it
///
/// Every input is kept as text so a value that does not parse becomes a
/// field error on the re-rendered form instead of a rejected request.
/// Unchecked checkboxes are simply missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodItemFormInput {
    #[serde(rename = "foodItemId", alias = "id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub description: String,
    pub price: String,
    pub unit: String,
    pub quantity_in_stock: String,
    pub expiration_date: String,
    pub is_perishable: String,
    pub calories_per_serving: String,
    pub ingredients: String,
    pub barcode: String,
    pub supplier: String,
    pub date_added: String,
    pub is_active: String,
    pub role_id: String,
}

/// Parse one posted value; blank is `None`, garbage is recorded against `field`
fn parse_input<T>(
    raw: &str,
    field: &str,
    parse: impl Fn(&str) -> Option<T>,
    errors: &mut Vec<AppError>,
) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = parse(raw);
    if parsed.is_none() {
        errors.push(AppError::field(
            field,
            format!("The value '{raw}' is not valid for {field}"),
        ));
    }
    parsed
}

impl FoodItemFormInput {
    /// Convert to a typed form and check it
    ///
    /// Returns the form (unparseable values left unset) together with every
    /// problem found. Parse failures come first; a validation error on a
    /// field that already failed to parse is not repeated.
    pub fn bind(self) -> (FoodItemForm, Vec<AppError>) {
        let mut errors = Vec::new();
        let form = FoodItemForm {
            id: parse_input(&self.id, "foodItemId", |s| s.parse::<i32>().ok(), &mut errors),
            price: parse_input(&self.price, "price", |s| s.parse::<Decimal>().ok(), &mut errors),
            quantity_in_stock: parse_input(
                &self.quantity_in_stock,
                "quantityInStock",
                |s| s.parse::<i32>().ok(),
                &mut errors,
            ),
            expiration_date: parse_input(
                &self.expiration_date,
                "expirationDate",
                parse_date,
                &mut errors,
            ),
            is_perishable: parse_input(&self.is_perishable, "isPerishable", parse_bool, &mut errors)
                .unwrap_or(false),
            calories_per_serving: parse_input(
                &self.calories_per_serving,
                "caloriesPerServing",
                |s| s.parse::<i32>().ok(),
                &mut errors,
            ),
            date_added: parse_input(&self.date_added, "dateAdded", parse_datetime, &mut errors),
            is_active: parse_input(&self.is_active, "isActive", parse_bool, &mut errors)
                .unwrap_or(false),
            role_id: parse_input(&self.role_id, "roleId", |s| s.parse::<i32>().ok(), &mut errors),
            name: self.name,
            category: self.category,
            brand: self.brand,
            description: self.description,
            unit: self.unit,
            ingredients: self.ingredients,
            barcode: self.barcode,
            supplier: self.supplier,
        };

        if let Err(invalid) = form.validate() {
            let fresh: Vec<AppError> = invalid
                .into_iter()
                .filter(|e| !errors.iter().any(|p| p.field_name() == e.field_name()))
                .collect();
            errors.extend(fresh);
        }
        (form, errors)
    }
}

/// `0` (or unset) means "no role chosen"
fn role_or_default(role_id: Option<i32>) -> i32 {
    match role_id.unwrap_or(0) {
        0 => DEFAULT_ROLE_ID,
        id => id,
    }
}

impl FoodItemForm {
    /// Payload for `POST /FoodItemApi`: stamped with `now`, role defaulted
    pub fn into_create_payload(self, now: NaiveDateTime) -> FoodItem {
        let mut item = self.into_item(0);
        item.date_added = now;
        item
    }

    /// Payload for `PUT /FoodItemApi/{id}`: the path id wins over the form's
    pub fn into_update_payload(self, id: i32) -> FoodItem {
        self.into_item(id)
    }

    fn into_item(self, id: i32) -> FoodItem {
        FoodItem {
            id,
            name: self.name,
            category: self.category,
            brand: self.brand,
            description: self.description,
            price: self.price.unwrap_or_default(),
            unit: self.unit,
            quantity_in_stock: self.quantity_in_stock.unwrap_or_default(),
            expiration_date: self.expiration_date,
            is_perishable: self.is_perishable,
            calories_per_serving: self.calories_per_serving.unwrap_or_default(),
            ingredients: self.ingredients,
            barcode: self.barcode,
            supplier: self.supplier,
            date_added: self.date_added.unwrap_or_default(),
            is_active: self.is_active,
            role_id: role_or_default(self.role_id),
        }
    }

    /// Check every field and collect all violations, in form order
    pub fn validate(&self) -> Result<(), Vec<AppError>> {
        let checks = [
            validate_required_text(&self.name, "name", MAX_NAME_LEN),
            validate_required_text(&self.category, "category", MAX_TEXT_LEN),
            validate_required_text(&self.brand, "brand", MAX_TEXT_LEN),
            validate_required_text(&self.description, "description", MAX_TEXT_LEN),
            validate_price(self.price, "price"),
            validate_required_text(&self.unit, "unit", MAX_TEXT_LEN),
            validate_present(self.quantity_in_stock.as_ref(), "quantityInStock"),
            validate_present(self.calories_per_serving.as_ref(), "caloriesPerServing"),
            validate_required_text(&self.ingredients, "ingredients", MAX_TEXT_LEN),
            validate_required_text(&self.barcode, "barcode", MAX_TEXT_LEN),
            validate_required_text(&self.supplier, "supplier", MAX_TEXT_LEN),
        ];
        let errors: Vec<AppError> = checks.into_iter().filter_map(Result::err).collect();
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Blank form for the create page; new items start active
    pub fn blank() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }
}

impl From<&FoodItem> for FoodItemForm {
    fn from(item: &FoodItem) -> Self {
        Self {
            id: Some(item.id),
            name: item.name.clone(),
            category: item.category.clone(),
            brand: item.brand.clone(),
            description: item.description.clone(),
            price: Some(item.price),
            unit: item.unit.clone(),
            quantity_in_stock: Some(item.quantity_in_stock),
            expiration_date: item.expiration_date,
            is_perishable: item.is_perishable,
            calories_per_serving: Some(item.calories_per_serving),
            ingredients: item.ingredients.clone(),
            barcode: item.barcode.clone(),
            supplier: item.supplier.clone(),
            date_added: Some(item.date_added),
            is_active: item.is_active,
            role_id: Some(item.role_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn form(role_id: Option<i32>) -> FoodItemForm {
        FoodItemForm {
            name: "Whole Milk".into(),
            category: "Dairy".into(),
            brand: "Valley".into(),
            description: "1 gallon".into(),
            price: Some(Decimal::from_str("2.49").unwrap()),
            unit: "gallon".into(),
            quantity_in_stock: Some(12),
            calories_per_serving: Some(150),
            ingredients: "milk".into(),
            barcode: "0001".into(),
            supplier: "Valley Dairy".into(),
            role_id,
            ..FoodItemForm::blank()
        }
    }

    #[test]
    fn test_validate_complete_form() {
        assert!(form(Some(1)).validate().is_ok());
    }

    #[test]
    fn test_validate_reports_every_violation() {
        let mut f = form(None);
        f.name = "  ".into();
        f.price = Some(Decimal::from_str("-1").unwrap());
        f.quantity_in_stock = None;

        let errors = f.validate().unwrap_err();
        let fields: Vec<_> = errors
            .iter()
            .map(|e| e.details.as_ref().unwrap()["field"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(fields, ["name", "price", "quantityInStock"]);
    }

    #[test]
    fn test_blank_form_fails_validation() {
        let errors = FoodItemForm::blank().validate().unwrap_err();
        assert_eq!(errors.len(), 11);
    }

    #[test]
    fn test_create_payload_defaults_zero_role() {
        let item = form(Some(0)).into_create_payload(now());
        assert_eq!(item.role_id, 1);
        assert_eq!(item.date_added, now());
        assert_eq!(item.id, 0);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["roleId"], 1);
        assert_eq!(json["dateAdded"], "2024-05-01T09:30:00");
    }

    #[test]
    fn test_create_payload_keeps_explicit_role() {
        let item = form(Some(3)).into_create_payload(now());
        assert_eq!(item.role_id, 3);
        assert_eq!(serde_json::to_value(&item).unwrap()["roleId"], 3);
    }

    #[test]
    fn test_create_payload_defaults_missing_role() {
        assert_eq!(form(None).into_create_payload(now()).role_id, 1);
    }

    #[test]
    fn test_update_payload_uses_path_id() {
        let mut f = form(Some(2));
        f.id = Some(99);
        f.date_added = Some(now());
        let item = f.into_update_payload(7);
        assert_eq!(item.id, 7);
        assert_eq!(item.role_id, 2);
        assert_eq!(item.date_added, now());
    }

    #[test]
    fn test_item_wire_format() {
        let json = r#"{
            "foodItemId": 5,
            "name": "Yogurt",
            "category": "Dairy",
            "brand": null,
            "description": "Plain",
            "price": 1.50,
            "unit": "cup",
            "quantityInStock": 30,
            "expirationDate": "2024-06-01T00:00:00",
            "isPerishable": true,
            "caloriesPerServing": 120,
            "ingredients": "milk, cultures",
            "barcode": "0123",
            "supplier": "Local Farm",
            "dateAdded": "2024-05-01T23:59:00.123",
            "isActive": true,
            "roleId": 1
        }"#;
        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 5);
        assert_eq!(item.brand, "");
        assert_eq!(item.price, Decimal::from_str("1.5").unwrap());
        assert_eq!(
            item.expiration_date,
            Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        );
        assert_eq!(item.date_added.date(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

        let out = serde_json::to_value(&item).unwrap();
        assert_eq!(out["foodItemId"], 5);
        assert_eq!(out["price"], 1.5);
        assert_eq!(out["expirationDate"], "2024-06-01");
    }

    #[test]
    fn test_item_accepts_plain_id_alias() {
        let item: FoodItem = serde_json::from_str(r#"{"id": 8, "name": "Rice"}"#).unwrap();
        assert_eq!(item.id, 8);
        assert_eq!(item.name, "Rice");
        assert_eq!(item.expiration_date, None);
    }

    fn input() -> FoodItemFormInput {
        FoodItemFormInput {
            name: "Oat Milk".into(),
            category: "Dairy".into(),
            brand: "Oatly".into(),
            description: "Carton".into(),
            price: "3.10".into(),
            unit: "litre".into(),
            quantity_in_stock: " 6 ".into(),
            expiration_date: "2024-07-01".into(),
            is_perishable: "on".into(),
            calories_per_serving: "120".into(),
            ingredients: "oats, water".into(),
            barcode: "7394376616037".into(),
            supplier: "Nordic".into(),
            ..FoodItemFormInput::default()
        }
    }

    #[test]
    fn test_bind_parses_posted_text() {
        let (form, errors) = input().bind();
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(form.price, Some(Decimal::from_str("3.10").unwrap()));
        assert_eq!(form.quantity_in_stock, Some(6));
        assert_eq!(form.expiration_date, NaiveDate::from_ymd_opt(2024, 7, 1));
        assert!(form.is_perishable);
        assert!(!form.is_active);
        assert_eq!(form.id, None);
        assert_eq!(form.role_id, None);
    }

    #[test]
    fn test_bind_reports_unparseable_values_once() {
        let mut raw = input();
        raw.price = "abc".into();
        raw.expiration_date = "next week".into();
        raw.name = String::new();

        let (form, errors) = raw.bind();
        assert_eq!(form.price, None);
        assert_eq!(form.expiration_date, None);
        assert_eq!(form.name, "");

        let fields: Vec<_> = errors.iter().filter_map(AppError::field_name).collect();
        assert_eq!(fields, ["price", "expirationDate", "name"]);
        assert_eq!(errors[0].message, "The value 'abc' is not valid for price");
    }

    #[test]
    fn test_bind_accepts_plain_id_alias() {
        let raw: FoodItemFormInput =
            serde_json::from_value(serde_json::json!({"id": "4", "isActive": "true"})).unwrap();
        let (form, _) = raw.bind();
        assert_eq!(form.id, Some(4));
        assert!(form.is_active);
    }

    #[test]
    fn test_form_from_item_round_trip() {
        let item = form(Some(4)).into_create_payload(now());
        let back = FoodItemForm::from(&item);
        assert_eq!(back.name, "Whole Milk");
        assert_eq!(back.role_id, Some(4));
        assert_eq!(back.date_added, Some(now()));
        assert_eq!(back.into_update_payload(0), item);
    }
}
