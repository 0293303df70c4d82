pub const DEFAULT_COUNT: i64 = 10;
pub const MAX_COUNT: i64 = 10;

/// Raw `start`/`count` query parameters.
///
/// Kept as strings so that non-numeric values fall back to defaults instead
/// of rejecting the request.
#[derive(Debug, Default)]
pub struct ListParams {
    pub start: Option<String>,
    pub count: Option<String>,
}

impl ListParams {
    /// Collect from decoded query pairs; the first occurrence of a key wins
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = ListParams::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "start" => &mut params.start,
                "count" => &mut params.count,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        params
    }
}

/// Clamped offset/limit for a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn new(start: i64, count: i64) -> Self {
        let limit = if (1..=MAX_COUNT).contains(&count) {
            count
        } else {
            DEFAULT_COUNT
        };

        Self {
            offset: start.max(0),
            limit,
        }
    }
}

impl From<ListParams> for Pagination {
    fn from(params: ListParams) -> Self {
        let parse = |value: Option<String>| value.and_then(|s| s.trim().parse::<i64>().ok());

        Pagination::new(
            parse(params.start).unwrap_or(0),
            parse(params.count).unwrap_or(DEFAULT_COUNT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(start: Option<&str>, count: Option<&str>) -> ListParams {
        ListParams {
            start: start.map(str::to_string),
            count: count.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            Pagination::from(ListParams::default()),
            Pagination { offset: 0, limit: 10 }
        );
    }

    #[test]
    fn test_count_clamped_to_ten() {
        assert_eq!(Pagination::new(0, 0).limit, 10);
        assert_eq!(Pagination::new(0, -5).limit, 10);
        assert_eq!(Pagination::new(0, 11).limit, 10);
        assert_eq!(Pagination::new(0, 1_000).limit, 10);
        assert_eq!(Pagination::new(0, 1).limit, 1);
        assert_eq!(Pagination::new(0, 7).limit, 7);
    }

    #[test]
    fn test_negative_start_clamped_to_zero() {
        assert_eq!(Pagination::new(-3, 5).offset, 0);
        assert_eq!(Pagination::new(4, 5).offset, 4);
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_keeps_first_value() {
        let params = ListParams::from_pairs(pairs(&[
            ("count", "5"),
            ("start", "2"),
            ("count", "7"),
            ("start", "9"),
            ("other", "x"),
        ]));

        assert_eq!(params.start.as_deref(), Some("2"));
        assert_eq!(params.count.as_deref(), Some("5"));
        assert_eq!(Pagination::from(params), Pagination { offset: 2, limit: 5 });
    }

    #[test]
    fn test_from_pairs_missing_keys() {
        let params = ListParams::from_pairs(pairs(&[("page", "3")]));

        assert!(params.start.is_none());
        assert!(params.count.is_none());
    }

    #[test]
    fn test_non_numeric_falls_back_to_defaults() {
        assert_eq!(
            Pagination::from(params(Some("abc"), Some("x"))),
            Pagination { offset: 0, limit: 10 }
        );
        assert_eq!(
            Pagination::from(params(Some("20"), Some("5"))),
            Pagination { offset: 20, limit: 5 }
        );
    }
}
