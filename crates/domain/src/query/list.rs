//! Parameters for listing handwriting styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::QueryParams;

/// Sort direction for style listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order
    #[default]
    Asc,
    /// Descending order
    Desc,
}

impl SortDirection {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// Paging and ordering for `GET /handwritings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Number of styles to skip
    pub offset: u32,
    /// Maximum number of styles to return
    pub limit: u32,
    /// Field to sort by
    pub order_by: String,
    /// Sort direction
    pub order_dir: SortDirection,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 200,
            order_by: "id".to_string(),
            order_dir: SortDirection::Asc,
        }
    }
}

impl ListQuery {
    /// Sets the offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the sort field and direction.
    #[must_use]
    pub fn with_order(mut self, order_by: impl Into<String>, order_dir: SortDirection) -> Self {
        self.order_by = order_by.into();
        self.order_dir = order_dir;
        self
    }

    /// Encodes the query as `offset`, `limit`, `order_by`, `order_dir`.
    #[must_use]
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.add("offset", self.offset.to_string());
        params.add("limit", self.limit.to_string());
        params.add("order_by", self.order_by.clone());
        params.add("order_dir", self.order_dir.as_str());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let query = ListQuery::default();
        assert_eq!(query.offset, 0);
        assert_eq!(query.limit, 200);
        assert_eq!(query.order_by, "id");
        assert_eq!(query.order_dir, SortDirection::Asc);
    }

    #[test]
    fn test_defaults_are_independent() {
        let mut first = ListQuery::default();
        first.limit = 5;
        first.order_by = "title".to_string();

        let second = ListQuery::default();
        assert_eq!(second.limit, 200);
        assert_eq!(second.order_by, "id");
    }

    #[test]
    fn test_encodes_exactly_four_params() {
        let params = ListQuery::default()
            .with_offset(40)
            .with_limit(5)
            .with_order("title", SortDirection::Desc)
            .to_query_params();

        let pairs: Vec<_> = params.pairs().collect();
        assert_eq!(
            pairs,
            vec![
                ("offset", "40"),
                ("limit", "5"),
                ("order_by", "title"),
                ("order_dir", "desc"),
            ]
        );
    }

    #[test]
    fn test_integers_have_no_padding() {
        for (offset, limit) in [(0, 1), (7, 200), (1000, 4_294_967_295)] {
            let params = ListQuery::default()
                .with_offset(offset)
                .with_limit(limit)
                .to_query_params();
            assert_eq!(params.len(), 4);
            assert_eq!(params.get("offset"), Some(offset.to_string().as_str()));
            assert_eq!(params.get("limit"), Some(limit.to_string().as_str()));
        }
    }

    #[test]
    fn test_sort_direction_parse() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
