//! 关键词打分与最佳匹配

use regex::Regex;

use crate::models::catalog::MatchableRecord;

/// 整词命中得分
pub const WORD_MATCH_SCORE: u32 = 10;
/// 仅子串命中得分
pub const SUBSTRING_MATCH_SCORE: u32 = 5;

/// 计算单条记录对查询的得分
///
/// 每个关键词：整词命中（词边界）加 10 分，否则子串命中加 5 分。
pub fn score_record<R: MatchableRecord>(record: &R, query_lower: &str) -> u32 {
    record
        .keywords()
        .iter()
        .map(|keyword| score_keyword(keyword.as_ref(), query_lower))
        .sum()
}

fn score_keyword(keyword: &str, query_lower: &str) -> u32 {
    let keyword_lower = keyword.to_lowercase();
    if keyword_lower.is_empty() {
        return 0;
    }

    if !query_lower.contains(&keyword_lower) {
        return 0;
    }

    let pattern = format!(r"\b{}\b", regex::escape(&keyword_lower));
    match Regex::new(&pattern) {
        Ok(re) if re.is_match(query_lower) => WORD_MATCH_SCORE,
        _ => SUBSTRING_MATCH_SCORE,
    }
}

/// 在记录列表中查找得分最高的记录
///
/// 最高分为 0（没有任何关键词命中）时返回 `None`；
/// 同分时保留输入顺序中靠前的记录。
pub fn find_best_match<'a, R: MatchableRecord>(records: &'a [R], query: &str) -> Option<&'a R> {
    let query_lower = query.to_lowercase();

    let mut best: Option<(&R, u32)> = None;
    for record in records {
        let score = score_record(record, &query_lower);
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((record, score)),
        }
    }

    best.filter(|(_, score)| *score > 0).map(|(record, _)| record)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        name: &'static str,
        keywords: Vec<String>,
    }

    impl Fixture {
        fn new(name: &'static str, keywords: &[&str]) -> Self {
            Self {
                name,
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            }
        }
    }

    impl MatchableRecord for Fixture {
        type Keyword = String;

        fn keywords(&self) -> &[String] {
            &self.keywords
        }
    }

    #[test]
    fn test_word_match_outranks_substring() {
        let records = vec![
            Fixture::new("art", &["art"]),
            Fixture::new("business", &["business"]),
        ];
        let best = find_best_match(&records, "start a business").unwrap();
        assert_eq!(best.name, "business");
    }

    #[test]
    fn test_scores() {
        let record = Fixture::new("r", &["art", "design", "music"]);
        assert_eq!(score_record(&record, "art and design"), 20);
        assert_eq!(score_record(&record, "restart"), 5);
        assert_eq!(score_record(&record, "nothing here"), 0);
    }

    #[test]
    fn test_no_overlap_returns_none() {
        let records = vec![Fixture::new("foo", &["foo"])];
        assert!(find_best_match(&records, "completely unrelated text").is_none());
    }

    #[test]
    fn test_empty_catalog_returns_none() {
        let records: Vec<Fixture> = Vec::new();
        assert!(find_best_match(&records, "anything").is_none());
    }

    #[test]
    fn test_ties_keep_first_record() {
        let records = vec![
            Fixture::new("first", &["team"]),
            Fixture::new("second", &["team"]),
        ];
        assert_eq!(find_best_match(&records, "team").unwrap().name, "first");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let records = vec![Fixture::new("yoga", &["Yoga"])];
        assert_eq!(find_best_match(&records, "MORNING YOGA").unwrap().name, "yoga");
    }

    #[test]
    fn test_keywords_with_regex_metacharacters() {
        let records = vec![Fixture::new("cpp", &["c++"])];
        assert!(find_best_match(&records, "learning c++ today").is_some());
    }
}
