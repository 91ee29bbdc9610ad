//! Response decoding
//!
//! List endpoints answer in one of two shapes depending on the API version
//! the client pins:
//!
//! - no version: a bare JSON array of items
//! - any supported version: an object carrying the items under a
//!   resource-specific field plus `total` and `has_more`
//!
//! The shape is picked from the version alone. A body that does not match the
//! selected shape is a decode error, the other shape is never tried.

use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};

use crate::config::ApiVersion;

/// Shape of a list payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListShape {
    /// `[item, item, ...]`
    Bare,
    /// `{"<items field>": [...], "total": n, "has_more": bool}`
    Envelope,
}

impl ListShape {
    /// Shape selected by the client's API version
    pub fn for_version(api_version: Option<ApiVersion>) -> Self {
        api_version.map_or(Self::Bare, |version| version.list_shape())
    }
}

/// Item of a versioned list endpoint
pub trait ListItem: DeserializeOwned {
    /// Name of the array field in the enveloped shape
    const ITEMS_FIELD: &'static str;
}

/// Items of a list endpoint with the envelope metadata, when present
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    /// Items, in response order
    pub items: Vec<T>,
    /// Total number of matching items. `None` for bare arrays
    pub total: Option<u64>,
    /// More pages exist. `None` for bare arrays
    pub has_more: Option<bool>,
}

impl<T> Listing<T> {
    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Listing<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Listing<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Decode a list payload for the given API version
pub fn decode_list<T>(
    raw: &str,
    api_version: Option<ApiVersion>,
) -> Result<Listing<T>, serde_json::Error>
where
    T: ListItem,
{
    match ListShape::for_version(api_version) {
        ListShape::Bare => Ok(Listing {
            items: serde_json::from_str(raw)?,
            total: None,
            has_more: None,
        }),
        ListShape::Envelope => decode_envelope(raw),
    }
}

fn decode_envelope<T>(raw: &str) -> Result<Listing<T>, serde_json::Error>
where
    T: ListItem,
{
    let mut envelope: Map<String, Value> = serde_json::from_str(raw)?;

    let items = envelope
        .remove(T::ITEMS_FIELD)
        .ok_or_else(|| serde_json::Error::missing_field(T::ITEMS_FIELD))?;
    let items: Vec<T> = serde_json::from_value(items)?;

    let total = match envelope.remove("total") {
        Some(total) => serde_json::from_value::<u64>(total)?,
        None => return Err(serde_json::Error::missing_field("total")),
    };

    let has_more = match envelope.remove("has_more") {
        Some(Value::Null) | None => false,
        Some(has_more) => serde_json::from_value::<bool>(has_more)?,
    };

    Ok(Listing {
        items,
        total: Some(total),
        has_more: Some(has_more),
    })
}

/// Decode a single object payload
pub fn decode_object<T>(raw: &str) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        code: String,
    }

    impl ListItem for Item {
        const ITEMS_FIELD: &'static str = "vouchers";
    }

    #[test]
    fn test_bare_array_without_version() {
        let listing: Listing<Item> =
            decode_list(r#"[{"code": "A"}, {"code": "B", "extra": 1}]"#, None).expect("bare");
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.items[1].code, "B");
        assert_eq!(listing.total, None);
        assert_eq!(listing.has_more, None);
    }

    #[test]
    fn test_envelope_with_version() {
        let raw = r#"{"object": "list", "vouchers": [{"code": "A"}], "total": 7, "has_more": true}"#;
        let listing: Listing<Item> =
            decode_list(raw, Some(ApiVersion::V2017_04_05)).expect("envelope");
        assert_eq!(listing.items, vec![Item { code: "A".into() }]);
        assert_eq!(listing.total, Some(7));
        assert_eq!(listing.has_more, Some(true));
    }

    #[test]
    fn test_envelope_has_more_defaults_to_false() {
        let raw = r#"{"vouchers": [], "total": 0}"#;
        let listing: Listing<Item> =
            decode_list(raw, Some(ApiVersion::V2018_08_01)).expect("envelope");
        assert!(listing.is_empty());
        assert_eq!(listing.total, Some(0));
        assert_eq!(listing.has_more, Some(false));
    }

    #[test]
    fn test_envelope_requires_total() {
        let raw = r#"{"vouchers": [{"code": "A"}]}"#;
        let err = decode_list::<Item>(raw, Some(ApiVersion::V2017_04_05))
            .expect_err("total is required");
        assert!(err.to_string().contains("total"));
    }

    #[test]
    fn test_envelope_requires_items_field() {
        let raw = r#"{"campaigns": [], "total": 0}"#;
        let err = decode_list::<Item>(raw, Some(ApiVersion::V2017_04_05))
            .expect_err("items field is required");
        assert!(err.to_string().contains("vouchers"));
    }

    #[test]
    fn test_no_fallback_to_other_shape() {
        assert!(decode_list::<Item>(r#"[{"code": "A"}]"#, Some(ApiVersion::V2017_04_05)).is_err());
        assert!(decode_list::<Item>(r#"{"vouchers": [], "total": 0}"#, None).is_err());
    }

    #[test]
    fn test_decode_object() {
        let item: Item = decode_object(r#"{"code": "X", "ignored": true}"#).expect("object");
        assert_eq!(item.code, "X");
        assert!(decode_object::<Item>("[]").is_err());
    }
}
