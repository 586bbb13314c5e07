use crate::types::{ExternalResult, ResultMap};

/// Index results by object id.
///
/// Every decoded result is kept, including ids that were not part of the
/// request. On duplicate ids the last occurrence wins.
pub fn index<I>(results: I) -> ResultMap
where
    I: IntoIterator<Item = ExternalResult>,
{
    let results = results.into_iter();
    let mut map = ResultMap::with_capacity(results.size_hint().0);
    for result in results {
        map.insert(result.object_id().to_string(), result);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_by_object_id() {
        let a = ExternalResult::new("a").with_score(2.0);
        let b = ExternalResult::new("b").with_score(1.0);
        let map = index(vec![a.clone(), b.clone()]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], a);
        assert_eq!(map["b"], b);
    }

    #[test]
    fn test_duplicate_last_wins() {
        let map = index(vec![
            ExternalResult::new("a").with_score(1.0),
            ExternalResult::new("a").with_score(9.0),
        ]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"].score(), Some(9.0));
    }

    #[test]
    fn test_empty_input() {
        assert!(index(Vec::new()).is_empty());
    }
}
