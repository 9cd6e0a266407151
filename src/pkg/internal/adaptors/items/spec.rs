use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ItemEntry {
    pub id: i32,
    pub description: String,
    /// Path of the uploaded file relative to the media root, e.g. `uploads/cat.png`.
    pub image: String,
}

impl ItemEntry {
    pub fn image_url(&self) -> String {
        format!("/media/{}", self.image)
    }
}

#[derive(Debug, Clone)]
pub struct NewItem {
    pub description: String,
    pub image: String,
}
