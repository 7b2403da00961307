use crate::models::{CandidateSet, CatalogEntry};

const CLOSING_INSTRUCTION: &str = "Recommend one product for the user.";

/// Renders the generation prompt for a category and its candidates
///
/// Pure: the same inputs always produce byte-identical text, which keeps
/// generations reproducible under a fixed model seed.
pub fn build(category: &str, candidates: &CandidateSet) -> String {
    let product_info = candidates
        .iter()
        .map(candidate_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Based on products for {}:\n{}\n{}",
        category, product_info, CLOSING_INSTRUCTION
    )
}

/// Prices keep a decimal point (`3.0`, not `3`)
fn candidate_line(entry: &CatalogEntry) -> String {
    format!("- {}: {} (${:?})", entry.name, entry.description, entry.price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_decor() -> CandidateSet {
        CandidateSet::new(
            vec![
                CatalogEntry::new("85123A", "Lamp Holder", "White hanging lamp holder", "Home Decor", 9.99),
                CatalogEntry::new("22752", "Vase", "Blue glass vase", "Home Decor", 14.5),
            ],
            5,
        )
    }

    #[test]
    fn test_build_exact_text() {
        let prompt = build("Home Decor", &home_decor());
        assert_eq!(
            prompt,
            "Based on products for Home Decor:\n\
             - Lamp Holder: White hanging lamp holder ($9.99)\n\
             - Vase: Blue glass vase ($14.5)\n\
             Recommend one product for the user."
        );
    }

    #[test]
    fn test_build_whole_number_price_keeps_decimal() {
        let candidates = CandidateSet::new(
            vec![CatalogEntry::new("2", "Zebra Mug", "Striped mug", "Gifts", 3.0)],
            5,
        );
        assert_eq!(
            build("Gifts", &candidates),
            "Based on products for Gifts:\n\
             - Zebra Mug: Striped mug ($3.0)\n\
             Recommend one product for the user."
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let candidates = home_decor();
        assert_eq!(build("Home Decor", &candidates), build("Home Decor", &candidates));
    }

    #[test]
    fn test_build_preserves_candidate_order() {
        let candidates = CandidateSet::new(
            vec![
                CatalogEntry::new("2", "Zebra Mug", "Mug", "Gifts", 3.0),
                CatalogEntry::new("1", "Apple Tin", "Tin", "Gifts", 2.5),
            ],
            5,
        );
        let prompt = build("Gifts", &candidates);
        let zebra = prompt.find("Zebra Mug").unwrap();
        let apple = prompt.find("Apple Tin").unwrap();
        assert!(zebra < apple);
    }

    #[test]
    fn test_build_with_no_candidates_keeps_frame() {
        let prompt = build("Outdoor", &CandidateSet::default());
        assert_eq!(
            prompt,
            "Based on products for Outdoor:\n\nRecommend one product for the user."
        );
    }
}
