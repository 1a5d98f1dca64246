mod common;

use common::{demo_tasks, init_tracing, task, TaskListBuilder};
use taskgraph::dag::assign_levels;

#[test]
fn demo_pipeline_levels_follow_longest_path() {
    init_tracing();
    let levels = assign_levels(&demo_tasks());

    let expected = [("1", 0), ("2", 1), ("3", 2), ("4", 2), ("5", 3), ("6", 4)];
    assert_eq!(levels.len(), expected.len());
    for (id, level) in expected {
        assert_eq!(levels[id], level, "level of task {id}");
    }
}

#[test]
fn tasks_without_dependencies_are_level_zero() {
    let tasks = TaskListBuilder::new()
        .with_task("a", &[])
        .with_task("b", &[])
        .with_task("c", &["a"])
        .build();

    let levels = assign_levels(&tasks);
    assert_eq!(levels["a"], 0);
    assert_eq!(levels["b"], 0);
    assert_eq!(levels["c"], 1);
}

#[test]
fn longest_path_wins_over_shortcut() {
    // d depends on a directly and through b -> c.
    let tasks = TaskListBuilder::new()
        .with_task("d", &["a", "c"])
        .with_task("a", &[])
        .with_task("b", &["a"])
        .with_task("c", &["b"])
        .build();

    let levels = assign_levels(&tasks);
    assert_eq!(levels["d"], 3);
    assert_eq!(levels["c"], 2);
}

#[test]
fn dangling_dependency_contributes_nothing() {
    let tasks = vec![task("x", &["ghost"])];

    let levels = assign_levels(&tasks);
    assert_eq!(levels.len(), 1);
    assert_eq!(levels["x"], 0);
    assert!(!levels.contains_key("ghost"));
}

#[test]
fn dangling_dependency_is_ignored_next_to_resolvable_ones() {
    let tasks = TaskListBuilder::new()
        .with_task("a", &[])
        .with_task("b", &["ghost", "a"])
        .build();

    let levels = assign_levels(&tasks);
    assert_eq!(levels["b"], 1);
}

#[test]
fn two_task_cycle_terminates_with_fallback_levels() {
    let tasks = TaskListBuilder::new()
        .with_task("A", &["B"])
        .with_task("B", &["A"])
        .build();

    let levels = assign_levels(&tasks);
    // A is entered first; B sees A on the path and counts it as 0.
    assert_eq!(levels["B"], 1);
    assert_eq!(levels["A"], 2);
}

#[test]
fn cycle_fallback_depends_on_input_order() {
    let tasks = TaskListBuilder::new()
        .with_task("B", &["A"])
        .with_task("A", &["B"])
        .build();

    let levels = assign_levels(&tasks);
    assert_eq!(levels["A"], 1);
    assert_eq!(levels["B"], 2);
}

#[test]
fn self_dependency_terminates() {
    let tasks = vec![task("loop", &["loop"])];

    let levels = assign_levels(&tasks);
    assert_eq!(levels["loop"], 1);
}

#[test]
fn downstream_of_a_cycle_still_gets_a_level() {
    let tasks = TaskListBuilder::new()
        .with_task("A", &["C"])
        .with_task("B", &["A"])
        .with_task("C", &["B"])
        .with_task("D", &["C"])
        .build();

    let levels = assign_levels(&tasks);
    assert_eq!(levels.len(), 4);
    assert!(levels["D"] > levels["C"]);
}

#[test]
fn duplicate_ids_keep_first_occurrence() {
    let tasks = TaskListBuilder::new()
        .with_task("a", &[])
        .with_task("a", &["b"])
        .with_task("b", &[])
        .build();

    let levels = assign_levels(&tasks);
    assert_eq!(levels.len(), 2);
    assert_eq!(levels["a"], 0);
}

#[test]
fn long_chain_does_not_overflow_the_stack() {
    let n: usize = 50_000;
    let mut builder = TaskListBuilder::new();
    // Listed leaf-first so the traversal has to walk the whole chain at once.
    for i in (0..n).rev() {
        let dep = format!("t{}", i.saturating_sub(1));
        if i == 0 {
            builder = builder.with_task("t0", &[]);
        } else {
            builder = builder.with_task(&format!("t{i}"), &[dep.as_str()]);
        }
    }

    let levels = assign_levels(&builder.build());
    assert_eq!(levels[&format!("t{}", n - 1)], n - 1);
}

#[test]
fn empty_input_gives_empty_levels() {
    assert!(assign_levels(&[]).is_empty());
}
