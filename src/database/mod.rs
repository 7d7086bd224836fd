use crate::domain::{NewStudent, Student};
use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

// a studentrepository can be shared between threads (referencable)
// sqlx::Pool is thread safe
// generic interface over enrollment storage, db specific implementations in "sqlite.rs"
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Inserts a validated enrollment and returns the id of the new row.
    async fn insert_student(&self, student: &NewStudent) -> Result<i64>;

    /// Returns every enrollment, newest first.
    async fn list_students(&self) -> Result<Vec<Student>>;
}
