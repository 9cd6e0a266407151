use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct JobEntry {
    pub id: i32,
    pub title: String,
    pub location: String,
    pub required_skills: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewJobPosting {
    pub title: String,
    pub location: String,
    pub required_skills: String,
    pub description: String,
}
