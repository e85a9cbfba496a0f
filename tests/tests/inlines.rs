//! Inline race results.

use massedit_tests::prelude::*;

fn regattas() -> Scenario {
    Scenario::new("regattas")
        .race("fastnet")
        .race("route_du_rhum")
        .race("vendee_globe")
}

#[test]
fn test_inline_rows_replace_existing_rows() {
    regattas()
        .boat("b1", boat().won("fastnet", None))
        .boat("b2", boat())
        .boat("b3", boat().won("fastnet", None))
        .select(["b1", "b2"])
        .won("route_du_rhum", Some("1978-11-28"))
        .won("vendee_globe", None)
        .expect_races("b1", ["route_du_rhum", "vendee_globe"])
        .expect_races("b2", ["route_du_rhum", "vendee_globe"])
        .expect_races("b3", ["fastnet"])
        .expect_untouched("b3")
        .run()
        .unwrap();
}

#[test]
fn test_unchecked_inline_is_ignored() {
    regattas()
        .boat("b1", boat().won("fastnet", None))
        .select(["b1"])
        .won("vendee_globe", None)
        .uncheck(BOAT_TO_RACE)
        .expect_races("b1", ["fastnet"])
        .expect_untouched("b1")
        .run()
        .unwrap();
}

#[test]
fn test_rows_copied_per_target() {
    let mut f = Factory::new().unwrap();
    let race = f.race("fastnet");
    let b1 = f.boat(boat()).unwrap();
    let b2 = f.boat(boat()).unwrap();

    let rows = vec![attrs! { "race" => race, "victory_date" => "2002-02-20" }];
    let mut form = MassForm::open(&f.registry, BOAT, &[b1, b2]).unwrap();
    form.set_inline(BOAT_TO_RACE, &rows).unwrap();
    let outcome = form.submit(&f.registry, &mut f.store).unwrap();

    assert_eq!(outcome.inlines, vec![BOAT_TO_RACE.to_string()]);
    assert_eq!(f.races(b1).unwrap(), rows);
    assert_eq!(f.races(b2).unwrap(), rows);
}

#[test]
fn test_inline_alongside_field_change() {
    regattas()
        .boat("b1", boat().name("Duick"))
        .select(["b1"])
        .set("name", "Pen ")
        .action("name", "prepend")
        .won("fastnet", Some("2002-08-10"))
        .expect("b1", "name", "Pen Duick")
        .expect_races("b1", ["fastnet"])
        .run()
        .unwrap();
}
