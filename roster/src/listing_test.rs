use super::*;

fn employee(id: i64, name: &str, tel: Option<&str>, position: &str) -> Employee {
    Employee {
        employee_id: id,
        fullname: name.to_owned(),
        tel_no: tel.map(str::to_owned),
        position_id: Some(1),
        position_name: position.to_owned(),
    }
}

fn seven() -> Vec<Employee> {
    vec![
        employee(1, "Alice Martin", Some("0811111111"), "Engineer"),
        employee(2, "Bob Chen", Some("0822222222"), "Designer"),
        employee(3, "Carol Diaz", None, "Engineer"),
        employee(4, "Dan Okafor", Some("0844444444"), "Administrator"),
        employee(5, "Eve Novak", Some("0855555555"), "Accountant"),
        employee(6, "Frank Ito", Some("0866666666"), "Engineer"),
        employee(7, "Gina Rossi", Some("0877777777"), "Tester"),
    ]
}

fn ids(records: &[&Employee]) -> Vec<i64> {
    records.iter().map(|e| e.employee_id).collect()
}

// =============================================================
// Skeleton gating
// =============================================================

#[test]
fn awaits_data_until_collection_is_non_empty() {
    let mut listing = Listing::default();
    assert!(listing.awaiting_data());
    assert_eq!(listing.page(), 1);
    listing.replace(seven());
    assert!(!listing.awaiting_data());
}

#[test]
fn filter_that_matches_nothing_does_not_bring_back_skeleton() {
    let mut listing = Listing::new(seven());
    listing.set_filter("zzz");
    assert!(!listing.awaiting_data());
    assert!(listing.visible().is_empty());
    assert_eq!(listing.total_pages(), 0);
    assert!(!listing.show_pagination());
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn seven_records_split_into_two_pages() {
    let mut listing = Listing::new(seven());
    assert_eq!(listing.total_pages(), 2);
    assert!(listing.show_pagination());
    assert_eq!(listing.page_numbers().count(), 2);
    assert_eq!(ids(&listing.visible()), vec![1, 2, 3, 4, 5]);

    assert!(listing.go_to(2));
    assert_eq!(ids(&listing.visible()), vec![6, 7]);
    assert_eq!(listing.row_number(0), 6);
    assert_eq!(listing.row_number(1), 7);
}

#[test]
fn total_pages_is_ceiling_of_filtered_count() {
    for n in 1..=23_i64 {
        let items = (1..=n).map(|i| employee(i, "x", None, "p")).collect();
        let listing = Listing::new(items);
        let expected = usize::try_from(n).unwrap().div_ceil(PAGE_SIZE);
        assert_eq!(listing.total_pages(), expected, "n = {n}");
    }
}

#[test]
fn last_page_shows_remainder() {
    let items = (1..=12).map(|i| employee(i, "x", None, "p")).collect();
    let mut listing = Listing::new(items);
    assert!(listing.go_to(3));
    assert_eq!(ids(&listing.visible()), vec![11, 12]);
}

#[test]
fn out_of_range_page_requests_are_no_ops() {
    let mut listing = Listing::new(seven());
    assert!(!listing.go_to(0));
    assert!(!listing.go_to(3));
    assert_eq!(listing.page(), 1);

    assert!(listing.go_to(2));
    assert!(!listing.next());
    assert_eq!(listing.page(), 2);
    assert!(listing.previous());
    assert!(!listing.previous());
    assert_eq!(listing.page(), 1);
}

#[test]
fn prev_next_availability_tracks_page() {
    let mut listing = Listing::new(seven());
    assert!(!listing.has_previous());
    assert!(listing.has_next());
    listing.next();
    assert!(listing.has_previous());
    assert!(!listing.has_next());
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_matching_one_record_hides_pagination() {
    let mut listing = Listing::new(seven());
    listing.set_filter("admin");
    assert_eq!(ids(&listing.filtered()), vec![4]);
    assert_eq!(listing.total_pages(), 1);
    assert!(!listing.show_pagination());
}

#[test]
fn filter_is_case_insensitive_across_fields() {
    let mut listing = Listing::new(seven());
    listing.set_filter("ENGINEER");
    assert_eq!(ids(&listing.filtered()), vec![1, 3, 6]);
    listing.set_filter("0855");
    assert_eq!(ids(&listing.filtered()), vec![5]);
    listing.set_filter("bob");
    assert_eq!(ids(&listing.filtered()), vec![2]);
}

#[test]
fn rendered_records_are_subset_matching_filter() {
    let mut listing = Listing::new(seven());
    for needle in ["", "a", "E", "08", "zz", "tester", "o"] {
        listing.set_filter(needle);
        let lowered = needle.to_lowercase();
        for record in listing.visible() {
            assert!(listing.items().contains(record));
            assert!(record.matches_lowercase(&lowered), "{needle:?} vs {record:?}");
        }
    }
}

#[test]
fn changing_filter_resets_page() {
    let mut listing = Listing::new(seven());
    listing.go_to(2);
    listing.set_filter("e");
    assert_eq!(listing.page(), 1);
    listing.go_to(2);
    listing.set_filter(String::new());
    assert_eq!(listing.page(), 1);
}

// =============================================================
// Refetch
// =============================================================

#[test]
fn replace_keeps_page_when_still_valid() {
    let mut listing = Listing::new(seven());
    listing.go_to(2);
    let mut shorter = seven();
    shorter.remove(0);
    listing.replace(shorter);
    assert_eq!(listing.page(), 2);
    assert_eq!(ids(&listing.visible()), vec![7]);
}

#[test]
fn replace_pulls_page_back_when_last_page_vanishes() {
    let mut listing = Listing::new(seven());
    listing.go_to(2);
    listing.replace(seven().into_iter().take(5).collect());
    assert_eq!(listing.page(), 1);
    assert_eq!(listing.visible().len(), 5);
}
