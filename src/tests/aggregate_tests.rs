use crate::domain::aggregate::{
    aggregate_by_locality, load_more, locality_aggregate, PAGE_SIZE,
};
use crate::tests::utils::{listing, rated};

#[test]
fn mean_rating_covers_rated_listings_only() {
    // Ratings [5, None, 3]: count is all three, mean averages the two.
    let set = vec![
        rated("A Dental", "Springfield", "IL", 5.0, 10),
        listing("B Dental", "Springfield", "IL"),
        rated("C Dental", "Springfield", "IL", 3.0, 4),
    ];

    let agg = locality_aggregate(&set);

    assert_eq!(agg.count, 3);
    assert_eq!(agg.mean_rating, Some(4.0));
}

#[test]
fn empty_locality_has_no_mean() {
    let agg = locality_aggregate(&[]);
    assert_eq!(agg.count, 0);
    assert_eq!(agg.mean_rating, None);
}

#[test]
fn unrated_locality_has_count_but_no_mean() {
    let set = vec![
        listing("A Dental", "Fargo", "ND"),
        listing("B Dental", "Fargo", "ND"),
    ];

    let agg = locality_aggregate(&set);
    assert_eq!(agg.count, 2);
    assert_eq!(agg.mean_rating, None);
}

#[test]
fn grouping_splits_by_city_and_state() {
    let set = vec![
        rated("A Dental", "Springfield", "IL", 4.0, 10),
        rated("B Dental", "Springfield", "MO", 3.0, 10),
        listing("C Dental", "Springfield", "IL"),
    ];

    let groups = aggregate_by_locality(&set);

    assert_eq!(groups.len(), 2);
    let il = groups
        .iter()
        .find(|(loc, _)| loc.state_abbr == "IL")
        .map(|(_, agg)| agg)
        .unwrap();
    assert_eq!(il.count, 2);
    assert_eq!(il.mean_rating, Some(4.0));
}

#[test]
fn each_page_is_a_strict_prefix_of_the_next() {
    let items: Vec<i32> = (0..30).collect();

    for k in 1..=3 {
        let current = load_more(&items, k, PAGE_SIZE);
        let next = load_more(&items, k + 1, PAGE_SIZE);
        assert_eq!(
            current.items.as_slice(),
            &next.items[..current.items.len()],
            "page {k} is not a prefix of page {}",
            k + 1
        );
    }
}

#[test]
fn load_more_grows_monotonically_and_reports_has_more() {
    let items: Vec<i32> = (0..30).collect();

    let first = load_more(&items, 1, PAGE_SIZE);
    assert_eq!(first.items.len(), 12);
    assert_eq!(first.total, 30);
    assert!(first.has_more);

    let second = load_more(&items, 2, PAGE_SIZE);
    assert_eq!(second.items.len(), 24);
    assert!(second.has_more);

    let third = load_more(&items, 3, PAGE_SIZE);
    assert_eq!(third.items.len(), 30);
    assert!(!third.has_more);

    // Past the end stays clamped.
    let beyond = load_more(&items, 9, PAGE_SIZE);
    assert_eq!(beyond.items.len(), 30);
    assert!(!beyond.has_more);
}

#[test]
fn page_zero_is_treated_as_the_first_page() {
    let items: Vec<i32> = (0..5).collect();
    let page = load_more(&items, 0, 3);
    assert_eq!(page.items, vec![0, 1, 2]);
    assert!(page.has_more);
}
