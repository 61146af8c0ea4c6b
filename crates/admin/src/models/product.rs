//! Product records.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use merchdesk_core::ProductId;

/// A colour option with its swatch image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductColor {
    pub name: String,
    pub image: String,
}

/// A stored product.
///
/// Every field except `id` is optional. Fields this admin does not know
/// about, and known fields whose stored value has another shape (a numeric
/// `price`, say), are kept in `extra` so reads never fail on them and a
/// read-modify-write never drops them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Size chart; its layout is owned by the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<ProductColor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// RFC 3339 timestamp of the last write through this admin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = Map::<String, Value>::deserialize(deserializer)?;
        Self::try_from(data).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<Map<String, Value>> for Product {
    type Error = String;

    fn try_from(mut data: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = match data.remove("id") {
            Some(Value::String(id)) => ProductId::new(id),
            Some(other) => return Err(format!("product id must be a string, got {other}")),
            None => return Err("missing field `id`".to_string()),
        };

        Ok(Self {
            id,
            name: take_field(&mut data, "name"),
            price: take_field(&mut data, "price"),
            slug: take_field(&mut data, "slug"),
            description: take_field(&mut data, "description"),
            poster: take_field(&mut data, "poster"),
            images: take_field(&mut data, "images"),
            sizes: data.remove("sizes").filter(|sizes| !sizes.is_null()),
            colors: take_field(&mut data, "colors"),
            status: take_field(&mut data, "status"),
            visibility: take_field(&mut data, "visibility"),
            last_updated: take_field(&mut data, "last_updated"),
            extra: data,
        })
    }
}

/// Take `key` out of `data` if it has the expected shape; otherwise leave
/// the raw value where it is.
fn take_field<T: DeserializeOwned>(data: &mut Map<String, Value>, key: &str) -> Option<T> {
    let value = data.get(key)?;
    let typed = serde_json::from_value(value.clone()).ok()?;
    data.remove(key);
    Some(typed)
}

/// Fields to merge over a stored product.
///
/// Only fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<ProductColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

impl ProductUpdate {
    /// Whether the update carries no field changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.poster.is_none()
            && self.images.is_none()
            && self.sizes.is_none()
            && self.colors.is_none()
            && self.status.is_none()
            && self.visibility.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let stored = json!({
            "id": "p1",
            "name": "Linen Shirt",
            "highlights": { "enabled": true },
        });
        let product: Product = serde_json::from_value(stored).unwrap();
        assert_eq!(product.extra["highlights"]["enabled"], true);

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["highlights"]["enabled"], true);
        assert!(back.get("price").is_none());
    }

    #[test]
    fn test_mismatched_fields_are_kept_raw() {
        let stored = json!({
            "id": "p1",
            "name": "Tee",
            "price": 49,
            "colors": [{ "name": "Sand" }],
            "last_updated": 1_700_000_000,
            "status": null,
        });
        let product: Product = serde_json::from_value(stored).unwrap();

        assert_eq!(product.name.as_deref(), Some("Tee"));
        assert!(product.price.is_none());
        assert!(product.colors.is_none());
        assert!(product.last_updated.is_none());
        assert_eq!(product.extra["price"], 49);
        assert_eq!(product.extra["colors"][0]["name"], "Sand");

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["price"], 49);
        assert_eq!(back["last_updated"], 1_700_000_000);
        assert_eq!(back["colors"], json!([{ "name": "Sand" }]));
    }

    #[test]
    fn test_product_requires_string_id() {
        assert!(serde_json::from_value::<Product>(json!({ "name": "Tee" })).is_err());
        assert!(serde_json::from_value::<Product>(json!({ "id": 7 })).is_err());
    }

    #[test]
    fn test_update_serializes_only_present_fields() {
        let update = ProductUpdate {
            price: Some("49.99".to_string()),
            ..ProductUpdate::default()
        };
        assert!(!update.is_empty());
        let value = serde_json::to_value(&update).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["price"], "49.99");
    }
}
