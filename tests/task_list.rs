use tl::filter::TaskFilter;
use tl::task::{Task, TaskList};

#[test]
fn prepend_and_append_are_distinct_operations() {
    let mut list = TaskList::new();
    list.add("b", 2);
    list.add_at_end("c", 3);
    list.add("a", 1);

    let descriptions: Vec<_> = list.iter().map(|task| task.description.as_str()).collect();
    assert_eq!(descriptions, ["a", "b", "c"]);
}

#[test]
fn find_returns_first_match_from_head_among_duplicates() {
    let mut list = TaskList::new();
    list.add_at_end("Walk Dog", 2);
    list.add_at_end("walk dog", 1);
    list.add_at_end("WALK DOG", 3);

    let task = list.find("walk dog").expect("find");
    assert_eq!(task.priority, 2);
}

#[test]
fn priority_filter_preserves_relative_order() {
    let mut list = TaskList::new();
    list.add_at_end("first", 1);
    list.add_at_end("skip", 2);
    list.add_at_end("second", 1);
    list.add_at_end("third", 1);

    let filtered = list.apply_filter(&TaskFilter::priority(1));
    let descriptions: Vec<_> = filtered
        .iter()
        .map(|task| task.description.as_str())
        .collect();
    assert_eq!(descriptions, ["first", "second", "third"]);
}

#[test]
fn text_filter_matches_substrings_case_insensitively() {
    let mut list = TaskList::new();
    list.add_at_end("Buy groceries", 2);
    list.add_at_end("Read a book", 3);
    list.add_at_end("GROCERY run", 1);

    let filtered = list.apply_filter(&TaskFilter::text("grocer"));
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].description, "Buy groceries");
    assert_eq!(filtered[1].description, "GROCERY run");
}

#[test]
fn all_is_a_snapshot_unaffected_by_later_mutation() {
    let mut list = TaskList::new();
    list.add_at_end("keep", 1);
    list.add_at_end("drop", 2);

    let snapshot = list.all();
    assert!(list.remove("drop"));

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[1], Task::new("drop", 2));
    assert_eq!(list.count(), 1);
}

#[test]
fn empty_list_has_nothing_to_traverse() {
    let list = TaskList::new();
    assert!(list.is_empty());
    assert_eq!(list.count(), 0);
    assert_eq!(list.iter().next(), None);
    assert!(list.all().is_empty());
    assert!(list.find("anything").is_none());
}

#[test]
fn borrowed_iteration_works_in_for_loops() {
    let mut list = TaskList::new();
    list.add_at_end("a", 1);
    list.add_at_end("b", 2);

    let mut seen = Vec::new();
    for task in &list {
        seen.push(task.priority);
    }
    assert_eq!(seen, [1, 2]);
}
