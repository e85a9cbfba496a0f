//! Many-to-many and foreign key fields.

use massedit_tests::prelude::*;

fn crew() -> Scenario {
    Scenario::new("crew")
        .captain("c1")
        .captain("c2")
        .captain("c3")
}

#[test]
fn test_add_keeps_existing_members() {
    crew()
        .boat("b1", boat().previous_captains(["c2"]))
        .boat("b2", boat().previous_captains(["c1", "c2"]))
        .select(["b1", "b2"])
        .set_related("previous_captains", ["c3"])
        .action("previous_captains", "add")
        .expect_related("b1", "previous_captains", ["c2", "c3"])
        .expect_related("b2", "previous_captains", ["c1", "c2", "c3"])
        .run()
        .unwrap();
}

#[test]
fn test_add_already_present_is_no_change() {
    crew()
        .boat("b1", boat().previous_captains(["c2", "c3"]))
        .select(["b1"])
        .set_related("previous_captains", ["c3"])
        .action("previous_captains", "add")
        .expect_related("b1", "previous_captains", ["c2", "c3"])
        .expect_untouched("b1")
        .expect_changed("previous_captains", 0)
        .run()
        .unwrap();
}

#[test]
fn test_replace_sets_exactly() {
    crew()
        .boat("b1", boat().previous_captains(["c2"]))
        .boat("b2", boat())
        .select(["b1", "b2"])
        .set_related("previous_captains", ["c3"])
        .action("previous_captains", "replace")
        .expect_related("b1", "previous_captains", ["c3"])
        .expect_related("b2", "previous_captains", ["c3"])
        .run()
        .unwrap();
}

#[test]
fn test_replace_with_nothing_clears() {
    crew()
        .boat("b1", boat().previous_captains(["c1", "c2"]))
        .select(["b1"])
        .set_related("previous_captains", Vec::<String>::new())
        .action("previous_captains", "replace")
        .expect_related("b1", "previous_captains", Vec::<String>::new())
        .run()
        .unwrap();
}

#[test]
fn test_define_only_when_no_members() {
    // Define is the default action of the multi vocabulary
    crew()
        .boat("b1", boat())
        .boat("b2", boat().previous_captains(["c1"]))
        .select(["b1", "b2"])
        .set_related("previous_captains", ["c3"])
        .expect_related("b1", "previous_captains", ["c3"])
        .expect_related("b2", "previous_captains", ["c1"])
        .expect_untouched("b2")
        .run()
        .unwrap();
}

#[test]
fn test_prepend_not_offered_for_relations() {
    crew()
        .boat("b1", boat().previous_captains(["c1"]))
        .select(["b1"])
        .set_related("previous_captains", ["c2"])
        .action("previous_captains", "prepend")
        .expect_error("not offered")
        .run()
        .unwrap();
}

#[test]
fn test_foreign_key_is_replaced() {
    crew()
        .boat("b1", boat().captain("c1"))
        .boat("b2", boat())
        .boat("b3", boat().captain("c1"))
        .select(["b1", "b2"])
        .set("captain", RecordId::new(2))
        .expect_ref("b1", "captain", "c2")
        .expect_ref("b2", "captain", "c2")
        .expect_ref("b3", "captain", "c1")
        .run()
        .unwrap();
}

#[test]
fn test_missing_captain_rejected() {
    crew()
        .boat("b1", boat().captain("c1"))
        .boat("b2", boat())
        .select(["b1", "b2"])
        .set("name", "Pen Duick")
        .set("captain", RecordId::new(999))
        .expect_error("does not exist")
        .expect_ref("b1", "captain", "c1")
        .run()
        .unwrap();
}

#[test]
fn test_excluded_relation_has_no_control() {
    let registry = boats_registry().unwrap();
    let mut form = MassForm::open(&registry, BOAT, &[RecordId::new(1)]).unwrap();

    assert!(form.set_related("win_races", &[RecordId::new(1)]).is_err());
    assert!(form.controls().field("win_races").is_none());
}
