use serde::Deserialize;

const DEFAULT_LIMIT: usize = 10;

/// `?limit=&startIndex=` as sent by list pages. Values that do not parse,
/// and a zero limit, fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub limit: Option<String>,
    pub start_index: Option<String>,
}

impl PageQuery {
    pub fn limit(&self) -> usize {
        self.limit
            .as_deref()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_LIMIT)
    }

    pub fn start_index(&self) -> usize {
        self.start_index
            .as_deref()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<&str>, start_index: Option<&str>) -> PageQuery {
        PageQuery {
            limit: limit.map(str::to_string),
            start_index: start_index.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults() {
        let q = query(None, None);
        assert_eq!((q.limit(), q.start_index()), (10, 0));
    }

    #[test]
    fn test_parsed_values() {
        let q = query(Some("25"), Some("50"));
        assert_eq!((q.limit(), q.start_index()), (25, 50));
    }

    #[test]
    fn test_zero_and_garbage() {
        let q = query(Some("0"), Some("abc"));
        assert_eq!((q.limit(), q.start_index()), (10, 0));
    }
}
