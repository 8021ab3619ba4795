use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One customer record from the configuration-bound customers list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}
