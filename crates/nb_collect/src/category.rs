use nb_core::config::Category;
use nb_core::FALLBACK_CATEGORY;

/// Reverse lookup from a search keyword to its topic bucket: the first
/// declared category whose keyword list contains it wins, and the catch-all
/// label is returned when no category claims the keyword. Total and
/// deterministic, never fails.
pub fn classify<'a>(keyword: &str, categories: &'a [Category]) -> &'a str {
    categories
        .iter()
        .find(|category| category.keywords.iter().any(|k| k == keyword))
        .map(|category| category.label.as_str())
        .unwrap_or(FALLBACK_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("자재/시황", &["건설 원자재 가격", "철근 가격"]),
            Category::new("물류/운송", &["건설 물류비"]),
        ]
    }

    #[test]
    fn finds_owning_category() {
        let categories = categories();
        assert_eq!(classify("건설 원자재 가격", &categories), "자재/시황");
        assert_eq!(classify("건설 물류비", &categories), "물류/운송");
    }

    #[test]
    fn unclaimed_keyword_falls_back() {
        assert_eq!(classify("원달러 환율", &categories()), FALLBACK_CATEGORY);
        assert_eq!(classify("", &categories()), FALLBACK_CATEGORY);
    }

    #[test]
    fn earlier_category_wins_on_overlap() {
        let overlapping = vec![
            Category::new("첫째", &["철근 가격"]),
            Category::new("둘째", &["철근 가격"]),
        ];
        assert_eq!(classify("철근 가격", &overlapping), "첫째");
    }
}
