// tests/verification_tests.rs

use codelab_backend::{
    models::{exercise::CreateExerciseRequest, exercise::TestCase, lesson::CreateLessonRequest},
    store::{ContentStore, seed},
    verifier::{self, MISMATCH_MESSAGE},
};

fn seeded_store() -> ContentStore {
    ContentStore::from_seed(seed::builtin()).expect("Failed to build catalog")
}

/// Re-indents every line with tabs and inserts blank lines between them.
fn reformat(code: &str) -> String {
    code.lines()
        .map(|line| format!("\t\t{}\n\n", line.trim()))
        .collect()
}

#[test]
fn every_seeded_exercise_accepts_its_own_solution() {
    let store = seeded_store();
    for lesson in store.get_lessons() {
        for exercise in store.get_exercises(lesson.id) {
            let result = verifier::verify(&store, exercise.id, &exercise.solution_code, "");
            assert!(result.success, "exercise {} rejected its solution", exercise.id);
            assert_eq!(result.error, None);
        }
    }
}

#[test]
fn verification_is_idempotent() {
    let store = seeded_store();
    let code = "if (edad < 18) { System.out.println(\"Es menor de edad\"); }";

    let first = verifier::verify(&store, 1, code, "15");
    let second = verifier::verify(&store, 1, code, "15");
    assert_eq!(first, second);
}

#[test]
fn unknown_exercise_sets_error_and_empty_output() {
    let store = seeded_store();
    let result = verifier::verify(&store, 9999, "...", "");

    assert!(!result.success);
    assert!(result.error.is_some());
    assert_eq!(result.output, "");
}

#[test]
fn reformatted_solution_keeps_verdict() {
    let store = seeded_store();
    for id in 1..=4 {
        let solution = store.get_exercise(id).unwrap().solution_code.clone();
        let result = verifier::verify(&store, id, &reformat(&solution), "");
        assert!(result.success, "exercise {} failed after reformatting", id);
    }
}

#[test]
fn removing_else_branch_fails() {
    let store = seeded_store();
    let solution = store.get_exercise(1).unwrap().solution_code.clone();

    // Drop the final `else` block and its body.
    let without_else = solution
        .replace("} else {", "}")
        .replace("System.out.println(\"Es adulto\");", "");

    let result = verifier::verify(&store, 1, &without_else, "");
    assert!(!result.success);
    assert_eq!(result.error, None);
    assert_eq!(result.output, MISMATCH_MESSAGE);
    assert_eq!(result.expected.as_deref(), Some("Es menor de edad"));
}

#[test]
fn lessons_sorted_regardless_of_creation_sequence() {
    let mut seed = seed::builtin();
    seed.exercises.clear();
    seed.lessons.reverse();

    let store = ContentStore::from_seed(seed).unwrap();
    let orders: Vec<i32> = store.get_lessons().iter().map(|l| l.order).collect();
    assert_eq!(orders, vec![1, 2, 3, 4]);
    // Ids still follow creation sequence.
    assert_eq!(store.get_lesson_by_slug("switch-case").unwrap().id, 1);
}

#[test]
fn minor_age_scenario() {
    let mut store = ContentStore::new();
    store
        .create_lesson(CreateLessonRequest {
            title: "Condicionales".to_string(),
            slug: "condicionales".to_string(),
            description: "If".to_string(),
            content: "# If".to_string(),
            order: None,
            level: "Principiante".to_string(),
            category: "Fundamentos".to_string(),
        })
        .unwrap();
    let exercise = store
        .create_exercise(CreateExerciseRequest {
            title: "Menor de edad".to_string(),
            description: "Detecta menores".to_string(),
            instructions: "Usa un if".to_string(),
            starting_code: String::new(),
            solution_code: "int edad = scanner.nextInt();\nif (edad < 18) { System.out.println(\"Es menor de edad\"); }".to_string(),
            hints: vec![],
            lesson_id: 1,
            test_cases: vec![TestCase {
                input: "15".to_string(),
                expected: "Es menor de edad".to_string(),
            }],
            order: None,
        })
        .unwrap();

    let compact = "if(edad<18){System.out.println(\"Esmenordeedad\");}";
    let passed = verifier::verify(&store, exercise.id, compact, "");
    assert!(passed.success);

    let spread = "if (edad < 18)\n{\n    System.out.println(\"Es menor de edad\");\n}";
    assert!(verifier::verify(&store, exercise.id, spread, "").success);

    let no_if = "System.out.println(\"Es menor de edad\");";
    let failed = verifier::verify(&store, exercise.id, no_if, "");
    assert!(!failed.success);
    assert_eq!(failed.error, None);
    assert_eq!(failed.output, MISMATCH_MESSAGE);
}
