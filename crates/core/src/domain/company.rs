// Company Domain Model (read-only from the job layer)

use serde::{Deserialize, Serialize};

/// Company handle (natural key, e.g. "anderson-arias")
pub type CompanyHandle = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: CompanyHandle,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i64>,
    pub logo_url: Option<String>,
}
