//! Variant generation: the combinatorial core of the catalog.
//!
//! Given a product's persisted options, [`combinations`] builds the full
//! cartesian product of their items as positional slot tuples. The
//! computation is pure — no I/O, no shared state — so it runs safely on any
//! worker task; id generation stays with the persistence layer, which maps
//! each tuple onto a variant row.

use crate::error::{CatalogError, CatalogResult};
use crate::models::ProductOption;

/// Number of positional option slots a variant can carry.
pub const MAX_OPTION_SLOTS: usize = 3;

/// Positional item references for one variant.
///
/// Slot k holds the chosen item of the k-th declared option; slots beyond
/// the number of declared options stay empty.
pub type OptionSlots = [Option<i64>; MAX_OPTION_SLOTS];

/// Number of variants a set of options generates.
///
/// The empty product over zero options is 1: a simple product still gets
/// exactly one variant.
pub fn combination_count(options: &[ProductOption]) -> usize {
    options.iter().map(|o| o.items.len()).product()
}

/// Build every item combination for the given options.
///
/// Combinations are emitted in declaration order with the **last** option
/// varying fastest; each combination appears exactly once. Zero options
/// produce exactly one combination with all slots empty (the simple-product
/// path), never zero combinations.
pub fn combinations(options: &[ProductOption]) -> CatalogResult<Vec<OptionSlots>> {
    if options.len() > MAX_OPTION_SLOTS {
        return Err(CatalogError::Validation(format!(
            "A product supports at most {} options, got {}",
            MAX_OPTION_SLOTS,
            options.len()
        )));
    }

    for option in options {
        if option.items.is_empty() {
            return Err(CatalogError::Validation(format!(
                "Option '{}' has no items",
                option.option_name
            )));
        }
    }

    let expected = combination_count(options);
    let mut combinations = Vec::with_capacity(expected);
    let mut cursor = [0usize; MAX_OPTION_SLOTS];

    'outer: loop {
        let mut slots: OptionSlots = [None; MAX_OPTION_SLOTS];
        for (k, option) in options.iter().enumerate() {
            slots[k] = Some(option.items[cursor[k]].item_id);
        }
        combinations.push(slots);

        // Odometer step: advance the last slot, carrying left on overflow.
        for k in (0..options.len()).rev() {
            cursor[k] += 1;
            if cursor[k] < options[k].items.len() {
                continue 'outer;
            }
            cursor[k] = 0;
        }
        break;
    }

    // A mismatch here is a generator bug, not caller input
    debug_assert_eq!(combinations.len(), expected);
    if combinations.len() != expected {
        return Err(CatalogError::Internal(format!(
            "Generated {} combinations, expected {}",
            combinations.len(),
            expected
        )));
    }

    Ok(combinations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OptionItem;
    use std::collections::HashSet;

    fn option(options_id: i64, option_name: &str, item_ids: &[i64]) -> ProductOption {
        ProductOption {
            options_id,
            option_name: option_name.to_string(),
            items: item_ids
                .iter()
                .map(|&item_id| OptionItem {
                    item_id,
                    item_name: format!("item-{}", item_id),
                })
                .collect(),
        }
    }

    #[test]
    fn test_zero_options_yield_one_empty_combination() {
        let result = combinations(&[]).unwrap();
        assert_eq!(result, vec![[None, None, None]]);
    }

    #[test]
    fn test_single_option_single_item() {
        let options = vec![option(1, "color", &[10])];
        let result = combinations(&options).unwrap();
        assert_eq!(result, vec![[Some(10), None, None]]);
    }

    #[test]
    fn test_single_option_preserves_item_order() {
        let options = vec![option(1, "size", &[30, 10, 20])];
        let result = combinations(&options).unwrap();
        assert_eq!(
            result,
            vec![
                [Some(30), None, None],
                [Some(10), None, None],
                [Some(20), None, None],
            ]
        );
    }

    #[test]
    fn test_two_options_last_varies_fastest() {
        let options = vec![option(1, "color", &[1, 2]), option(2, "size", &[7, 8, 9])];
        let result = combinations(&options).unwrap();

        assert_eq!(result.len(), 6);
        assert_eq!(result[0], [Some(1), Some(7), None]);
        assert_eq!(result[1], [Some(1), Some(8), None]);
        assert_eq!(result[2], [Some(1), Some(9), None]);
        assert_eq!(result[3], [Some(2), Some(7), None]);
        assert_eq!(result[5], [Some(2), Some(9), None]);
    }

    #[test]
    fn test_three_options_full_cartesian_product() {
        let options = vec![
            option(1, "color", &[1, 2]),
            option(2, "material", &[3, 4]),
            option(3, "size", &[5, 6]),
        ];
        let result = combinations(&options).unwrap();

        assert_eq!(result.len(), 8);

        // Every combination is unique and fully populated
        let unique: HashSet<_> = result.iter().collect();
        assert_eq!(unique.len(), 8);
        for slots in &result {
            assert!(slots.iter().all(|slot| slot.is_some()));
        }

        // Every tuple of the full cartesian product appears
        for &a in &[1, 2] {
            for &b in &[3, 4] {
                for &c in &[5, 6] {
                    assert!(result.contains(&[Some(a), Some(b), Some(c)]));
                }
            }
        }
    }

    #[test]
    fn test_count_matches_product_of_item_counts() {
        let options = vec![option(1, "a", &[1, 2, 3]), option(2, "b", &[4, 5])];
        assert_eq!(combination_count(&options), 6);
        assert_eq!(combinations(&options).unwrap().len(), 6);
    }

    #[test]
    fn test_empty_item_list_is_rejected() {
        let options = vec![option(1, "color", &[])];
        let result = combinations(&options);
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_more_than_three_options_rejected() {
        let options = vec![
            option(1, "a", &[1]),
            option(2, "b", &[2]),
            option(3, "c", &[3]),
            option(4, "d", &[4]),
        ];
        let result = combinations(&options);
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }
}
