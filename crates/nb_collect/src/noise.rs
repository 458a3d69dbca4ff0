/// Case-sensitive substring scan against the configured denylist,
/// short-circuiting on the first hit. No tokenization or stemming: Korean
/// headlines do not segment cleanly, and a plain scan has proven sufficient.
pub fn is_noise<S: AsRef<str>>(title: &str, denylist: &[S]) -> bool {
    denylist.iter().any(|word| title.contains(word.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denylist() -> Vec<String> {
        vec!["코스피".to_string(), "특징주".to_string(), "카지노".to_string()]
    }

    #[test]
    fn matches_anywhere_in_title() {
        assert!(is_noise("코스피 3000 돌파 임박", &denylist()));
        assert!(is_noise("건설주 강세에 코스피 상승 마감", &denylist()));
        assert!(is_noise("오늘의 특징주", &denylist()));
    }

    #[test]
    fn clean_titles_pass() {
        assert!(!is_noise("시멘트 가격 인상 통보", &denylist()));
        assert!(!is_noise("", &denylist()));
    }

    #[test]
    fn empty_denylist_passes_everything() {
        let empty: Vec<String> = Vec::new();
        assert!(!is_noise("코스피 급등", &empty));
    }
}
