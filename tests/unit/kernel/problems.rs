use super::*;

fn item(path: &str, line: u32) -> ProblemItem {
    ProblemItem {
        path: path.to_string(),
        line,
        message: format!("problem at {line}"),
        code: String::new(),
        severity: ProblemSeverity::Error,
        category: ProblemCategory::Style,
    }
}

#[test]
fn seeded_problems_target_default_file() {
    let problems = ProblemsState::seeded();
    assert_eq!(problems.items().len(), 3);
    assert!(problems.items().iter().all(|p| p.path == DEFAULT_FILE));
    assert_eq!(problems.items()[0].line, 15);
    assert_eq!(problems.items()[0].category.label(), "unused-variable");
}

#[test]
fn resolve_shifts_later_lines_in_same_file() {
    let mut problems = ProblemsState::default();
    problems.push(item("a.ts", 5));
    problems.push(item("a.ts", 9));
    problems.push(item("a.ts", 2));
    problems.push(item("b.ts", 9));

    let removed = problems.resolve(0).unwrap();
    assert_eq!(removed.line, 5);

    let lines: Vec<(&str, u32)> = problems
        .items()
        .iter()
        .map(|p| (p.path.as_str(), p.line))
        .collect();
    assert_eq!(lines, vec![("a.ts", 8), ("a.ts", 2), ("b.ts", 9)]);
}

#[test]
fn resolve_out_of_range_is_none() {
    let mut problems = ProblemsState::default();
    assert!(problems.resolve(0).is_none());
}

#[test]
fn lookup_by_path_and_line() {
    let mut problems = ProblemsState::default();
    problems.push(item("a.ts", 4));
    problems.push(item("b.ts", 1));

    assert_eq!(problems.first_for("b.ts").map(|(i, _)| i), Some(1));
    assert!(problems.at_line("a.ts", 4).is_some());
    assert!(problems.at_line("a.ts", 1).is_none());
    assert_eq!(problems.for_path("a.ts").count(), 1);
}

#[test]
fn move_selection_wraps() {
    let mut problems = ProblemsState::seeded();
    assert!(problems.move_selection(-1));
    assert_eq!(problems.selected_index(), 2);
    assert!(problems.move_selection(1));
    assert_eq!(problems.selected_index(), 0);
    assert!(!problems.move_selection(0));
}
