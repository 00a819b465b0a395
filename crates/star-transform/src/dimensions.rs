//! Projection and deduplication of the dimension attribute sets.

use std::collections::HashSet;
use std::hash::Hash;

use chrono::NaiveDate;

use star_model::{CustomerKey, ProductKey, RawSalesRecord};

use crate::date::parse_sale_date;
use crate::options::{TransformOptions, UnparsedDatePolicy};

/// Distinct natural keys of the three dimensions, in first-seen order.
///
/// Callers must not rely on the order; it only makes runs reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionSets {
    pub customers: Vec<CustomerKey>,
    pub products: Vec<ProductKey>,
    /// Distinct parsed sale dates. `None` is present only under
    /// [`UnparsedDatePolicy::NullRow`] and only if some date failed to parse.
    pub dates: Vec<Option<NaiveDate>>,
}

/// Drops exact duplicates, keeping the first occurrence of each key.
pub fn dedup_natural_keys<K, I>(keys: I) -> Vec<K>
where
    K: Hash + Eq + Clone,
    I: IntoIterator<Item = K>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for key in keys {
        if seen.insert(key.clone()) {
            unique.push(key);
        }
    }
    unique
}

/// Builds the deduplicated customer, product and date sets.
///
/// Dates are deduplicated on the parsed calendar value, so `2023-11-07` and
/// ` 2023-11-07` collapse into one entry.
pub fn extract_dimensions(records: &[RawSalesRecord], options: &TransformOptions) -> DimensionSets {
    let customers = dedup_natural_keys(records.iter().map(CustomerKey::of));
    let products = dedup_natural_keys(records.iter().map(ProductKey::of));
    let parsed = records
        .iter()
        .map(|record| parse_sale_date(&record.sale_date));
    let dates = match options.unparsed_dates {
        UnparsedDatePolicy::Exclude => dedup_natural_keys(parsed.filter(Option::is_some)),
        UnparsedDatePolicy::NullRow => dedup_natural_keys(parsed),
    };
    DimensionSets {
        customers,
        products,
        dates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(customer: &str, product: &str, date: &str) -> RawSalesRecord {
        RawSalesRecord {
            customer_name: customer.to_string(),
            city: "Porto".to_string(),
            state: "PR".to_string(),
            product_name: product.to_string(),
            category: "Papelaria".to_string(),
            manufacturer: "Bic".to_string(),
            sale_date: date.to_string(),
            quantity_sold: "1".to_string(),
            total_value: "1.0".to_string(),
        }
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        assert_eq!(dedup_natural_keys(["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
    }

    #[test]
    fn collapses_repeated_tuples() {
        let records = vec![
            record("Ana", "Caneta", "2023-11-07"),
            record("Ana", "Lapis", "2023-11-08"),
            record("Bruno", "Caneta", "2023-11-07"),
        ];
        let sets = extract_dimensions(&records, &TransformOptions::default());

        assert_eq!(sets.customers.len(), 2);
        assert_eq!(sets.products.len(), 2);
        assert_eq!(sets.dates.len(), 2);
    }

    #[test]
    fn tuples_differing_in_one_attribute_stay_distinct() {
        let mut other_city = record("Ana", "Caneta", "2023-11-07");
        other_city.city = "Lisboa".to_string();
        let records = vec![record("Ana", "Caneta", "2023-11-07"), other_city];
        let sets = extract_dimensions(&records, &TransformOptions::default());

        assert_eq!(sets.customers.len(), 2);
        assert_eq!(sets.products.len(), 1);
    }

    #[test]
    fn unparsed_dates_follow_policy() {
        let records = vec![
            record("Ana", "Caneta", "not-a-date"),
            record("Ana", "Caneta", ""),
            record("Ana", "Caneta", "2023-11-07"),
        ];

        let excluded = extract_dimensions(&records, &TransformOptions::default());
        assert_eq!(excluded.dates.len(), 1);
        assert!(excluded.dates.iter().all(Option::is_some));

        let options = TransformOptions::new().with_unparsed_dates(UnparsedDatePolicy::NullRow);
        let folded = extract_dimensions(&records, &options);
        assert_eq!(folded.dates.len(), 2);
        assert_eq!(folded.dates.iter().filter(|date| date.is_none()).count(), 1);
    }
}
