use chrono::NaiveDate;
use proptest::prelude::*;
use wonderlist_lib::catalog::{
    query::{filter_records, sort_records},
    visible, ItemStatus, PriceRange, RecordFilter, ShoppingCategory, ShoppingFilter, ShoppingItem,
    ShoppingSort,
};

fn category() -> impl Strategy<Value = ShoppingCategory> {
    prop_oneof![
        Just(ShoppingCategory::Gifts),
        Just(ShoppingCategory::Food),
        Just(ShoppingCategory::Decorations),
        Just(ShoppingCategory::Wrapping),
        Just(ShoppingCategory::Other),
    ]
}

fn sort_key() -> impl Strategy<Value = ShoppingSort> {
    prop_oneof![
        Just(ShoppingSort::DueDate),
        Just(ShoppingSort::Cost),
        Just(ShoppingSort::Alphabetical),
        Just(ShoppingSort::Progress),
    ]
}

// Small value ranges so equal sort keys are common.
fn items() -> impl Strategy<Value = Vec<ShoppingItem>> {
    prop::collection::vec(
        (
            "[ab]{1,2}",
            category(),
            0u32..4,
            1u32..4,
            prop::sample::select(vec![0u8, 50, 100]),
            any::<bool>(),
        ),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (name, category, cost, day, progress, completed))| ShoppingItem {
                id: format!("item-{index}"),
                name,
                store: "Corner shop".into(),
                category,
                cost: f64::from(cost) * 10.0,
                due: NaiveDate::from_ymd_opt(2024, 12, day).unwrap(),
                progress,
                completed,
            })
            .collect()
    })
}

fn filter() -> impl Strategy<Value = ShoppingFilter> {
    (
        prop::option::of(category()),
        prop::option::of((0u32..3, 1u32..4)),
        prop::option::of("[ab]{0,1}"),
        prop::option::of(prop_oneof![Just(ItemStatus::Open), Just(ItemStatus::Completed)]),
    )
        .prop_map(|(category, bounds, search, status)| ShoppingFilter {
            category,
            cost: bounds.map(|(low, span)| {
                PriceRange::new(Some(f64::from(low) * 10.0), Some(f64::from(low + span) * 10.0))
            }),
            search,
            status,
        })
}

fn ids(items: &[ShoppingItem]) -> Vec<String> {
    items.iter().map(|item| item.id.clone()).collect()
}

fn seed_position(item: &ShoppingItem) -> usize {
    item.id
        .trim_start_matches("item-")
        .parse()
        .expect("generated ids are numeric")
}

proptest! {
    #[test]
    fn filtering_is_idempotent(items in items(), filter in filter()) {
        let once = visible(&items, &filter, None::<&ShoppingSort>);
        let twice = visible(&once, &filter, None::<&ShoppingSort>);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn filtering_keeps_seed_order_and_only_matches(items in items(), filter in filter()) {
        let shown = visible(&items, &filter, None::<&ShoppingSort>);
        let positions: Vec<usize> = shown.iter().map(seed_position).collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(shown.iter().all(|item| filter.matches(item)));

        let expected = items.iter().filter(|item| filter.matches(item)).count();
        prop_assert_eq!(shown.len(), expected);
    }

    #[test]
    fn sorting_is_stable(mut items in items(), key in sort_key()) {
        sort_records(&mut items, &key);
        for pair in items.windows(2) {
            let order = wonderlist_lib::catalog::RecordOrder::compare(&key, &pair[0], &pair[1]);
            prop_assert!(order != std::cmp::Ordering::Greater);
            if order == std::cmp::Ordering::Equal {
                prop_assert!(seed_position(&pair[0]) < seed_position(&pair[1]));
            }
        }
    }

    #[test]
    fn sort_then_filter_has_same_members_as_filter_then_sort(
        items in items(),
        filter in filter(),
        key in sort_key(),
    ) {
        let filtered_then_sorted = visible(&items, &filter, Some(&key));

        let mut sorted = items.clone();
        sort_records(&mut sorted, &key);
        let sorted_then_filtered: Vec<ShoppingItem> =
            filter_records(&sorted, &filter).into_iter().cloned().collect();

        let mut left = ids(&filtered_then_sorted);
        let mut right = ids(&sorted_then_filtered);
        // Stable sorting makes the two orders agree as well.
        prop_assert_eq!(&left, &right);
        left.sort();
        right.sort();
        prop_assert_eq!(left, right);
    }
}
