use crate::model::Product;

/// The products whose name or code contains `term`, case-insensitively.
///
/// Order is preserved. An empty term keeps everything.
pub fn compute_filtered_list(products: &[Product], term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.product_name.to_lowercase().contains(&needle)
                || p.product_code.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
