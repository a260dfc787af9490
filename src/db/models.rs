use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Quote {
    pub id: i32,
    pub author: String,
    pub message: String,
    pub category: String,
}
