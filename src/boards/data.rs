use serde::{Deserialize, Serialize};

pub type BoardID = i64;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardID,
    pub owner_id: i64,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize, Debug)]
pub struct AddBoardRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize, Debug)]
pub struct UpdateBoardRequest {
    pub id: BoardID,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}
