// src/store/catalog.rs

use std::collections::{BTreeMap, HashMap};

use validator::Validate;

use crate::{
    error::AppError,
    models::{
        exercise::{CreateExerciseRequest, Exercise},
        lesson::{CreateLessonRequest, Lesson},
    },
    store::seed::CatalogSeed,
};

/// In-memory catalog of lessons and exercises.
///
/// Built once before the router exists and then shared behind an `Arc`;
/// nothing mutates it while requests are being served.
#[derive(Debug)]
pub struct ContentStore {
    lessons: BTreeMap<i64, Lesson>,
    slugs: HashMap<String, i64>,
    exercises: BTreeMap<i64, Exercise>,
    next_lesson_id: i64,
    next_exercise_id: i64,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore {
    pub fn new() -> Self {
        Self {
            lessons: BTreeMap::new(),
            slugs: HashMap::new(),
            exercises: BTreeMap::new(),
            next_lesson_id: 1,
            next_exercise_id: 1,
        }
    }

    /// Builds a store from seed records, in file order.
    /// Lessons are created first so exercises can reference them by id.
    pub fn from_seed(seed: CatalogSeed) -> Result<Self, AppError> {
        let mut store = Self::new();
        for lesson in seed.lessons {
            store.create_lesson(lesson)?;
        }
        for exercise in seed.exercises {
            store.create_exercise(exercise)?;
        }
        tracing::info!(
            lessons = store.lessons.len(),
            exercises = store.exercises.len(),
            "Catalog loaded"
        );
        Ok(store)
    }

    /// All lessons sorted by `order`, ties broken by id.
    pub fn get_lessons(&self) -> Vec<Lesson> {
        let mut lessons: Vec<Lesson> = self.lessons.values().cloned().collect();
        lessons.sort_by_key(|l| l.order);
        lessons
    }

    pub fn get_lesson(&self, id: i64) -> Option<&Lesson> {
        self.lessons.get(&id)
    }

    pub fn get_lesson_by_slug(&self, slug: &str) -> Option<&Lesson> {
        self.slugs.get(slug).and_then(|id| self.lessons.get(id))
    }

    /// Exercises of one lesson sorted by `order`, ties broken by id.
    pub fn get_exercises(&self, lesson_id: i64) -> Vec<Exercise> {
        let mut exercises: Vec<Exercise> = self
            .exercises
            .values()
            .filter(|e| e.lesson_id == lesson_id)
            .cloned()
            .collect();
        exercises.sort_by_key(|e| e.order);
        exercises
    }

    pub fn get_exercise(&self, id: i64) -> Option<&Exercise> {
        self.exercises.get(&id)
    }

    pub fn create_lesson(&mut self, req: CreateLessonRequest) -> Result<Lesson, AppError> {
        req.validate()?;

        if self.slugs.contains_key(&req.slug) {
            return Err(AppError::Conflict(format!(
                "Lesson slug '{}' already exists",
                req.slug
            )));
        }

        let id = self.next_lesson_id;
        self.next_lesson_id += 1;

        let order = req.order.unwrap_or(self.lessons.len() as i32 + 1);
        let lesson = Lesson {
            id,
            title: req.title,
            slug: req.slug,
            description: req.description,
            content: req.content,
            order,
            level: req.level,
            category: req.category,
        };

        self.slugs.insert(lesson.slug.clone(), id);
        self.lessons.insert(id, lesson.clone());
        tracing::debug!(id, slug = %lesson.slug, "Lesson created");
        Ok(lesson)
    }

    pub fn create_exercise(&mut self, req: CreateExerciseRequest) -> Result<Exercise, AppError> {
        req.validate()?;

        if !self.lessons.contains_key(&req.lesson_id) {
            return Err(AppError::BadRequest(format!(
                "Lesson {} does not exist",
                req.lesson_id
            )));
        }

        let id = self.next_exercise_id;
        self.next_exercise_id += 1;

        let order = req.order.unwrap_or_else(|| {
            let siblings = self
                .exercises
                .values()
                .filter(|e| e.lesson_id == req.lesson_id)
                .count();
            siblings as i32 + 1
        });
        let exercise = Exercise {
            id,
            title: req.title,
            description: req.description,
            instructions: req.instructions,
            starting_code: req.starting_code,
            solution_code: req.solution_code,
            hints: req.hints,
            lesson_id: req.lesson_id,
            test_cases: req.test_cases,
            order,
        };

        self.exercises.insert(id, exercise.clone());
        tracing::debug!(id, lesson_id = exercise.lesson_id, "Exercise created");
        Ok(exercise)
    }
}
