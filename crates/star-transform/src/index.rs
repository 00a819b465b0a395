//! Keyed dimensions and their natural-key lookups.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::NaiveDate;

use star_model::{
    CustomerDimensionRow, CustomerKey, DateDimensionRow, ProductDimensionRow, ProductKey,
    SurrogateKey,
};

use crate::date::DateParts;
use crate::dimensions::DimensionSets;
use crate::keys::assign_keys;
use crate::options::KeyStrategy;

/// Hash lookup from a natural key to the surrogate key of its row.
#[derive(Debug, Clone)]
pub struct DimensionIndex<K> {
    keys: HashMap<K, SurrogateKey>,
}

impl<K: Hash + Eq> DimensionIndex<K> {
    pub fn new() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    pub fn insert(&mut self, natural: K, key: SurrogateKey) {
        self.keys.insert(natural, key);
    }

    pub fn get(&self, natural: &K) -> Option<SurrogateKey> {
        self.keys.get(natural).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K: Hash + Eq> Default for DimensionIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> FromIterator<(K, SurrogateKey)> for DimensionIndex<K> {
    fn from_iter<I: IntoIterator<Item = (K, SurrogateKey)>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// The three dimension tables plus one lookup per table.
#[derive(Debug, Clone)]
pub struct KeyedDimensions {
    pub customers: Vec<CustomerDimensionRow>,
    pub products: Vec<ProductDimensionRow>,
    pub dates: Vec<DateDimensionRow>,
    pub customer_index: DimensionIndex<CustomerKey>,
    pub product_index: DimensionIndex<ProductKey>,
    pub date_index: DimensionIndex<Option<NaiveDate>>,
}

impl KeyedDimensions {
    /// Keys each dimension set independently and indexes it.
    ///
    /// Year, month and day are derived here, from the already deduplicated
    /// calendar dates.
    pub fn from_sets(sets: DimensionSets, strategy: KeyStrategy) -> Self {
        let keyed_customers = assign_keys(sets.customers, strategy);
        let customer_index = keyed_customers
            .iter()
            .map(|(key, natural)| (natural.clone(), *key))
            .collect();
        let customers = keyed_customers
            .into_iter()
            .map(|(customer_id, natural)| CustomerDimensionRow {
                customer_id,
                name: natural.name,
                city: natural.city,
                state: natural.state,
            })
            .collect();

        let keyed_products = assign_keys(sets.products, strategy);
        let product_index = keyed_products
            .iter()
            .map(|(key, natural)| (natural.clone(), *key))
            .collect();
        let products = keyed_products
            .into_iter()
            .map(|(product_id, natural)| ProductDimensionRow {
                product_id,
                name: natural.name,
                category: natural.category,
                manufacturer: natural.manufacturer,
            })
            .collect();

        let keyed_dates = assign_keys(sets.dates, strategy);
        let date_index = keyed_dates
            .iter()
            .map(|(key, date)| (*date, *key))
            .collect();
        let dates = keyed_dates
            .into_iter()
            .map(|(date_id, date)| {
                let parts = date.map(DateParts::from_date);
                DateDimensionRow {
                    date_id,
                    calendar_date: date,
                    year: parts.map(|p| p.year),
                    month: parts.map(|p| p.month),
                    day: parts.map(|p| p.day),
                }
            })
            .collect();

        Self {
            customers,
            products,
            dates,
            customer_index,
            product_index,
            date_index,
        }
    }
}
