pub mod kind;

use levenshtein::levenshtein;

/// Returns all names in `candidates` that are within one edit of `name`.
pub fn similar<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    candidates.into_iter()
        .filter(|candidate| levenshtein(candidate, name) < 2)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn one_edit_away() {
        let names = ["poly", "three", "nested"];
        assert_eq!(similar("pol", names), vec!["poly".to_string()]);
        assert_eq!(similar("thre", names), vec!["three".to_string()]);
        assert_eq!(similar("nestde", names), Vec::<String>::new());
        assert_eq!(similar("poly", names), vec!["poly".to_string()]);
    }
}
