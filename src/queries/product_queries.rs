use crate::models::Product;
use crate::state::StateSnapshot;

/// Products whose part number or description contains the active search
/// term, case-insensitively.
pub fn filtered_products(snapshot: &StateSnapshot) -> Vec<Product> {
    let term = snapshot.ui.search_terms.products.to_lowercase();

    snapshot
        .products
        .iter()
        .filter(|product| {
            term.is_empty()
                || product.buyer_part_number.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> StateSnapshot {
        StateSnapshot {
            products: vec![
                Product::new(
                    "ACME_CORP",
                    "TECH_SUPPLY_001",
                    "CPU-001-X7",
                    "High-performance processor unit",
                    299.99,
                    "40mm x 40mm x 5mm",
                ),
                Product::new(
                    "BETA_SYSTEMS",
                    "COMPONENT_PLUS",
                    "SSD-003-NVMe",
                    "NVMe SSD 1TB High Speed Storage",
                    149.99,
                    "80mm x 22mm x 2.38mm",
                ),
            ],
            ..StateSnapshot::default()
        }
    }

    #[test]
    fn matches_part_number_or_description() {
        let mut snapshot = snapshot();
        snapshot.ui.search_terms.products = "nvme".to_string();
        assert_eq!(filtered_products(&snapshot).len(), 1);

        snapshot.ui.search_terms.products = "processor".to_string();
        let matched = filtered_products(&snapshot);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].buyer_part_number, "CPU-001-X7");
    }

    #[test]
    fn empty_term_matches_all() {
        assert_eq!(filtered_products(&snapshot()).len(), 2);
    }
}
