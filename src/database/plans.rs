// ABOUTME: Workout plan database operations with default-plan seeding
// ABOUTME: Plans and their ordered exercises, scoped by user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use super::Database;
use myfit_core::errors::{AppError, AppResult};
use myfit_core::models::{MuscleGroup, PlanExercise, WorkoutPlan};
use sqlx::Row;
use uuid::Uuid;

/// An exercise template used when seeding default plans
struct SeedExercise {
    name: &'static str,
    sets: i64,
    reps_min: Option<i64>,
    reps_max: Option<i64>,
    notes: Option<&'static str>,
}

/// A plan template used when seeding default plans
struct SeedPlan {
    name: &'static str,
    day_number: i64,
    muscle_groups: &'static [MuscleGroup],
    exercises: &'static [SeedExercise],
}

const fn reps(name: &'static str, sets: i64, min: i64, max: i64) -> SeedExercise {
    SeedExercise {
        name,
        sets,
        reps_min: Some(min),
        reps_max: Some(max),
        notes: None,
    }
}

/// The five-day starter rotation every new user receives
const DEFAULT_PLANS: &[SeedPlan] = &[
    SeedPlan {
        name: "Day 1 - Chest + Triceps",
        day_number: 1,
        muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        exercises: &[
            reps("Flat bench press", 4, 8, 10),
            reps("Incline bench press", 3, 8, 10),
            reps("Chest fly (machine or dumbbells)", 3, 10, 12),
            reps("Rope pushdown", 3, 10, 12),
            reps("Skull crusher", 3, 8, 10),
        ],
    },
    SeedPlan {
        name: "Day 2 - Back + Biceps",
        day_number: 2,
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        exercises: &[
            reps("Lat pulldown", 4, 8, 10),
            reps("Seated cable row", 3, 8, 10),
            reps("One-arm dumbbell row", 3, 10, 10),
            reps("Barbell curl", 3, 8, 10),
            reps("Alternating dumbbell curl", 3, 10, 10),
        ],
    },
    SeedPlan {
        name: "Day 3 - Legs",
        day_number: 3,
        muscle_groups: &[MuscleGroup::Legs],
        exercises: &[
            reps("Squat or leg press", 4, 8, 10),
            reps("Leg extension", 3, 10, 12),
            reps("Lying leg curl", 3, 10, 12),
            reps("Calf raise (standing or seated)", 4, 12, 15),
        ],
    },
    SeedPlan {
        name: "Day 4 - Shoulders + Abs",
        day_number: 4,
        muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Abs],
        exercises: &[
            reps("Dumbbell shoulder press", 4, 8, 10),
            reps("Lateral raise", 3, 10, 12),
            reps("Front raise", 3, 10, 10),
            reps("Crunch (machine or floor)", 3, 15, 15),
            SeedExercise {
                name: "Plank",
                sets: 3,
                reps_min: None,
                reps_max: None,
                notes: Some("30-45 seconds"),
            },
        ],
    },
    SeedPlan {
        name: "Day 5 - Back + Arms",
        day_number: 5,
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::Triceps],
        exercises: &[
            reps("Wide-grip pulldown", 3, 8, 10),
            reps("Bent-over row", 3, 8, 10),
            reps("Barbell curl", 3, 8, 10),
            reps("Rope pushdown", 3, 10, 12),
            reps("Hammer curl", 3, 10, 10),
        ],
    },
];

fn row_to_exercise(row: &sqlx::sqlite::SqliteRow) -> PlanExercise {
    PlanExercise {
        id: row.get("id"),
        plan_id: row.get("plan_id"),
        name: row.get("name"),
        sets: row.get("sets"),
        reps_min: row.get("reps_min"),
        reps_max: row.get("reps_max"),
        notes: row.get("notes"),
        order_index: row.get("order_index"),
    }
}

impl Database {
    /// Create the plan tables
    pub(super) async fn migrate_plans(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_plans (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                day_number INTEGER NOT NULL,
                muscle_groups TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to migrate workout_plans: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS plan_exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                plan_id INTEGER NOT NULL REFERENCES workout_plans(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                sets INTEGER NOT NULL,
                reps_min INTEGER,
                reps_max INTEGER,
                notes TEXT,
                order_index INTEGER NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to migrate plan_exercises: {e}")))?;

        Ok(())
    }

    /// List a user's plans with exercises, seeding the default rotation on
    /// first call
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_plans(&self, user_id: Uuid) -> AppResult<Vec<WorkoutPlan>> {
        if !self.has_plans(user_id).await? {
            self.seed_default_plans(user_id).await?;
        }

        let rows = sqlx::query(
            "SELECT * FROM workout_plans WHERE user_id = $1 ORDER BY day_number",
        )
        .bind(user_id.to_string())
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list plans: {e}")))?;

        let mut plans = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.get("id");
            plans.push(WorkoutPlan {
                id,
                user_id,
                name: row.get("name"),
                day_number: row.get("day_number"),
                muscle_groups: MuscleGroup::parse_csv(&row.get::<String, _>("muscle_groups")),
                exercises: self.plan_exercises(id).await?,
            });
        }
        Ok(plans)
    }

    /// One plan with exercises
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the plan does not exist or belongs to
    /// another user
    pub async fn get_plan(&self, user_id: Uuid, plan_id: i64) -> AppResult<WorkoutPlan> {
        let row = sqlx::query("SELECT * FROM workout_plans WHERE id = $1 AND user_id = $2")
            .bind(plan_id)
            .bind(user_id.to_string())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to get plan: {e}")))?
            .ok_or_else(|| AppError::not_found("Plan"))?;

        Ok(WorkoutPlan {
            id: plan_id,
            user_id,
            name: row.get("name"),
            day_number: row.get("day_number"),
            muscle_groups: MuscleGroup::parse_csv(&row.get::<String, _>("muscle_groups")),
            exercises: self.plan_exercises(plan_id).await?,
        })
    }

    /// Append an exercise to a plan and return the stored row
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the plan does not exist or belongs to
    /// another user
    pub async fn add_plan_exercise(
        &self,
        user_id: Uuid,
        plan_id: i64,
        name: &str,
        sets: i64,
        reps_min: Option<i64>,
        reps_max: Option<i64>,
        notes: Option<&str>,
    ) -> AppResult<PlanExercise> {
        // Ownership check before touching the child table
        self.get_plan_header(user_id, plan_id).await?;

        let next_index: i64 = sqlx::query(
            "SELECT COALESCE(MAX(order_index), -1) + 1 AS next_index FROM plan_exercises WHERE plan_id = $1",
        )
        .bind(plan_id)
        .fetch_one(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get next order index: {e}")))?
        .get("next_index");

        let result = sqlx::query(
            r"
            INSERT INTO plan_exercises (plan_id, name, sets, reps_min, reps_max, notes, order_index)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(plan_id)
        .bind(name)
        .bind(sets)
        .bind(reps_min)
        .bind(reps_max)
        .bind(notes)
        .bind(next_index)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to add exercise: {e}")))?;

        Ok(PlanExercise {
            id: result.last_insert_rowid(),
            plan_id,
            name: name.to_owned(),
            sets,
            reps_min,
            reps_max,
            notes: notes.map(ToOwned::to_owned),
            order_index: next_index,
        })
    }

    /// Remove an exercise from a plan
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the plan or exercise does not exist or
    /// belongs to another user
    pub async fn delete_plan_exercise(
        &self,
        user_id: Uuid,
        plan_id: i64,
        exercise_id: i64,
    ) -> AppResult<()> {
        self.get_plan_header(user_id, plan_id).await?;

        let result = sqlx::query("DELETE FROM plan_exercises WHERE id = $1 AND plan_id = $2")
            .bind(exercise_id)
            .bind(plan_id)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to delete exercise: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Exercise"));
        }
        Ok(())
    }

    /// Whether the user has any plans yet
    async fn has_plans(&self, user_id: Uuid) -> AppResult<bool> {
        let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM workout_plans WHERE user_id = $1")
            .bind(user_id.to_string())
            .fetch_one(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to count plans: {e}")))?
            .get("n");
        Ok(count > 0)
    }

    /// Ownership check returning only the plan id
    async fn get_plan_header(&self, user_id: Uuid, plan_id: i64) -> AppResult<()> {
        sqlx::query("SELECT id FROM workout_plans WHERE id = $1 AND user_id = $2")
            .bind(plan_id)
            .bind(user_id.to_string())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to get plan: {e}")))?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Plan"))
    }

    /// Ordered exercises for one plan
    async fn plan_exercises(&self, plan_id: i64) -> AppResult<Vec<PlanExercise>> {
        let rows =
            sqlx::query("SELECT * FROM plan_exercises WHERE plan_id = $1 ORDER BY order_index")
                .bind(plan_id)
                .fetch_all(self.pool())
                .await
                .map_err(|e| AppError::database(format!("Failed to list exercises: {e}")))?;

        Ok(rows.iter().map(row_to_exercise).collect())
    }

    /// Insert the default rotation atomically
    async fn seed_default_plans(&self, user_id: Uuid) -> AppResult<()> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin seed transaction: {e}")))?;

        for plan in DEFAULT_PLANS {
            let result = sqlx::query(
                r"
                INSERT INTO workout_plans (user_id, name, day_number, muscle_groups)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(user_id.to_string())
            .bind(plan.name)
            .bind(plan.day_number)
            .bind(MuscleGroup::join_csv(plan.muscle_groups))
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to seed plan: {e}")))?;

            let plan_id = result.last_insert_rowid();
            for (order_index, exercise) in plan.exercises.iter().enumerate() {
                sqlx::query(
                    r"
                    INSERT INTO plan_exercises (plan_id, name, sets, reps_min, reps_max, notes, order_index)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    ",
                )
                .bind(plan_id)
                .bind(exercise.name)
                .bind(exercise.sets)
                .bind(exercise.reps_min)
                .bind(exercise.reps_max)
                .bind(exercise.notes)
                .bind(order_index as i64)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::database(format!("Failed to seed exercise: {e}")))?;
            }
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit seed transaction: {e}")))
    }
}
