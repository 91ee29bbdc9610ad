//! List filters
//!
//! A filter is a plain struct whose present fields become query pairs. Pairs
//! are emitted in field declaration order, absent fields are skipped.

use serde::Serialize;

use crate::error::Error;

/// Criteria of a list operation
pub trait Filter: Serialize {
    /// Query pairs of the present fields, in declaration order
    fn query_pairs(&self) -> Result<Vec<(String, String)>, Error> {
        let encoded = serde_urlencoded::to_string(self)?;
        Ok(url::form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Serialize)]
    struct Criteria {
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        page: Option<u32>,
    }

    impl Filter for Criteria {}

    #[test]
    fn test_declaration_order() {
        let criteria = Criteria {
            page: Some(2),
            name: Some("a b&c".to_string()),
            limit: Some(5),
        };
        let pairs = criteria.query_pairs().expect("encodable");
        assert_eq!(
            pairs,
            vec![
                ("limit".to_string(), "5".to_string()),
                ("name".to_string(), "a b&c".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_filter() {
        let pairs = Criteria::default().query_pairs().expect("encodable");
        assert!(pairs.is_empty());
    }
}
