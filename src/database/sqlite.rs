use crate::database::StudentRepository;
use crate::domain::{NewStudent, Student};
use crate::features::students::model::DbStudent;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteRepository {
    async fn insert_student(&self, student: &NewStudent) -> Result<i64> {
        // id and created_at come from the schema defaults
        let result = sqlx::query(
            r#"
            INSERT INTO students (
                first_name, last_name, email, phone,
                course_level, preferred_time, message
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(&student.phone)
        .bind(&student.course_level)
        .bind(&student.preferred_time)
        .bind(&student.message)
        .execute(&self.pool)
        .await
        .context(format!(
            "Failed to insert enrollment for {} {}",
            student.first_name, student.last_name
        ))?;

        Ok(result.last_insert_rowid())
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        // created_at has second granularity, so id breaks ties between
        // submissions that landed within the same second
        let db_students = sqlx::query_as::<_, DbStudent>(
            "SELECT * FROM students ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to load enrollments")?;

        Ok(db_students.into_iter().map(Student::from).collect())
    }
}
