use ordered_roster::lifecycle::{run_demo, DEMO_NAMES};
use ordered_roster::model::Participant;
use ordered_roster::roster::{
    first_by_name_descending, first_by_sorted_name_descending, OrderedRoster, RosterError,
};

fn names(participants: &[Participant]) -> Vec<&str> {
    participants.iter().map(Participant::name).collect()
}

/// End-to-end: sorting the roster's view reorders the roster itself.
#[test]
fn test_demo_scenario() {
    let report = run_demo().expect("demo should not fail on a non-empty roster");

    assert_eq!(names(&report.before), DEMO_NAMES);
    assert_eq!(report.first_sorted.name(), "멤버3");
    assert_eq!(names(&report.after), ["멤버3", "멤버2", "멤버1"]);
}

/// Regression: the aliasing must stay observable across separate `view()` calls.
///
/// The roster has no internal locking; `view_mut` is a live alias into shared
/// state and any concurrent use needs an external lock.
#[test]
fn test_sort_through_view_mut_is_seen_by_later_views() {
    let initial: Vec<Participant> = ["kiwi", "apple", "mango", "fig"]
        .into_iter()
        .map(Participant::new)
        .collect();
    let mut roster = OrderedRoster::new(&initial);

    assert_eq!(names(roster.view()), ["kiwi", "apple", "mango", "fig"]);

    let first = first_by_sorted_name_descending(roster.view_mut())
        .expect("roster is not empty")
        .clone();

    assert_eq!(first.name(), "mango");
    assert_eq!(names(roster.view()), ["mango", "kiwi", "fig", "apple"]);
    assert_eq!(&roster.view()[0], &first);

    // The construction input is untouched.
    assert_eq!(names(&initial), ["kiwi", "apple", "mango", "fig"]);
}

#[test]
fn test_greatest_name_wins_for_distinct_names() {
    let cases: [&[&str]; 4] = [
        &["a"],
        &["b", "a"],
        &["a", "c", "b"],
        &["Zebra", "apple", "Mango"],
    ];
    let expected = ["a", "b", "c", "apple"];

    for (case, want) in cases.iter().zip(expected) {
        let mut participants: Vec<Participant> =
            case.iter().copied().map(Participant::new).collect();

        let peeked = first_by_name_descending(&participants).unwrap().clone();
        let sorted = first_by_sorted_name_descending(&mut participants).unwrap();

        assert_eq!(sorted.name(), want, "case {case:?}");
        assert_eq!(&peeked, sorted, "case {case:?}");
    }
}

#[test]
fn test_empty_roster() {
    let mut roster = OrderedRoster::new(&[]);
    assert!(roster.view().is_empty());

    let result = first_by_sorted_name_descending(roster.view_mut());
    assert_eq!(result, Err(RosterError::EmptyInput));
    assert_eq!(
        RosterError::EmptyInput.to_string(),
        "cannot pick the first participant of an empty sequence"
    );
}

#[test]
fn test_roster_serializes_in_order() {
    let roster: OrderedRoster = ["b", "a"].into_iter().map(Participant::new).collect();
    let json = serde_json::to_string(&roster).unwrap();
    assert_eq!(json, r#"{"participants":[{"name":"b"},{"name":"a"}]}"#);
}
