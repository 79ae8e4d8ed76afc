use super::*;

fn employee(id: i64, name: &str, tel: Option<&str>) -> Employee {
    Employee {
        employee_id: id,
        fullname: name.to_owned(),
        tel_no: tel.map(str::to_owned),
        position_id: Some(1),
        position_name: "Engineer".to_owned(),
    }
}

#[test]
fn table_lists_current_page_with_footer() {
    let mut listing = Listing::new((1..=7).map(|id| employee(id, &format!("E{id}"), Some("081"))).collect());
    listing.go_to(2);
    let rendered = employee_table(&listing);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("#"));
    assert!(lines[1].starts_with("6 "));
    assert!(lines[1].contains("E6"));
    assert!(lines[2].starts_with("7 "));
    assert_eq!(lines[3], "page 2 of 2 (7 matching)");
}

#[test]
fn table_shows_dash_for_missing_phone() {
    let listing = Listing::new(vec![employee(1, "Ada", None)]);
    let rendered = employee_table(&listing);
    assert!(rendered.lines().nth(1).unwrap().contains("  -  "));
}

#[test]
fn empty_listing_still_reports_a_page() {
    let rendered = employee_table(&Listing::default());
    assert!(rendered.ends_with("page 1 of 1 (0 matching)\n"));
}

#[test]
fn columns_are_aligned() {
    let rendered = position_table(&[
        Position { position_id: 1, position_name: "Engineer".to_owned() },
        Position { position_id: 12, position_name: "HR".to_owned() },
    ]);
    assert_eq!(rendered, "ID  POSITION\n1   Engineer\n12  HR\n");
}

#[test]
fn detail_includes_position_id() {
    let rendered = employee_detail(&employee(4, "Grace", None));
    assert!(rendered.contains("position: Engineer (1)"));
    assert!(rendered.contains("phone:    -"));
}

#[test]
fn confirm_accepts_only_yes() {
    for (answer, expected) in [("y\n", true), ("YES\n", true), ("n\n", false), ("\n", false), ("yep\n", false)] {
        let mut output = Vec::new();
        let confirmed = confirm(&mut answer.as_bytes(), &mut output, "Delete employee 42?").unwrap();
        assert_eq!(confirmed, expected, "answer {answer:?}");
        assert_eq!(String::from_utf8(output).unwrap(), "Delete employee 42? [y/N] ");
    }
}
