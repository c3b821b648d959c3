//! Topic entity - Categoria a cui appartengono le postagens

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Topic {
    pub topic_id: i32,
    pub description: String,
}
