use crate::domain::{NewStudent, Student};
use crate::error::ApiError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// how datetimes leave the api; the admin page parses this format back
pub const JSON_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(sqlx::FromRow, Eq, PartialEq, Clone)]
pub struct DbStudent {
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

impl From<DbStudent> for Student {
    fn from(db: DbStudent) -> Self {
        Student {
            id: db.id,
            first_name: db.first_name,
            last_name: db.last_name,
            email: db.email,
            phone: db.phone,
            course_level: db.course_level,
            preferred_time: db.preferred_time,
            message: db.message,
            created_at: db.created_at,
        }
    }
}

// raw enrollment payload from the form. every field is optional at the serde
// level so presence is checked by us and reported as a 400, not a decode error
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course_level: Option<String>,
    pub preferred_time: Option<String>,
    pub message: Option<String>,
}

impl EnrollRequest {
    // presence check only; format validation (email/phone regexes) stays in
    // the browser where visitors get immediate feedback
    pub fn into_new_student(self) -> Result<NewStudent, ApiError> {
        Ok(NewStudent {
            first_name: required(self.first_name)?,
            last_name: required(self.last_name)?,
            email: required(self.email)?,
            phone: required(self.phone)?,
            course_level: required(self.course_level)?,
            preferred_time: required(self.preferred_time)?,
            message: self.message.unwrap_or_default().trim().to_string(),
        })
    }
}

fn required(field: Option<String>) -> Result<String, ApiError> {
    match field {
        Some(val) if !val.trim().is_empty() => Ok(val.trim().to_string()),
        _ => Err(ApiError::MissingFields),
    }
}

// wire model for the dashboard; keeps the camelCase keys the pages expect,
// except created_at which historically stayed snake_case
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonStudent {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub course_level: String,
    pub preferred_time: String,
    pub message: String,
    #[serde(rename = "created_at")]
    pub created_at: String,
}

impl From<&Student> for JsonStudent {
    fn from(student: &Student) -> Self {
        JsonStudent {
            id: student.id,
            first_name: student.first_name.to_owned(),
            last_name: student.last_name.to_owned(),
            email: student.email.to_owned(),
            phone: student.phone.to_owned(),
            course_level: student.course_level.to_owned(),
            preferred_time: student.preferred_time.to_owned(),
            message: student.message.to_owned(),
            created_at: student.created_at.format(JSON_DATETIME_FORMAT).to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct EnrollResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Serialize, Deserialize)]
pub struct StudentsResponse {
    pub students: Vec<JsonStudent>,
}
