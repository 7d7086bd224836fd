use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub course_level: String,
    pub preferred_time: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}

// an enrollment submission that passed validation but has no row yet.
// id and created_at are assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub course_level: String,
    pub preferred_time: String,
    pub message: String,
}
