use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Company/shipping profile a document is addressed to.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Recipient {
    pub id: Uuid,
    #[schema(example = "Brilliant Gems Inc.")]
    pub company_name: String,
    #[schema(example = "580 5th Ave")]
    pub address_line1: String,
    #[schema(example = "Suite 1200")]
    pub address_line2: Option<String>,
    #[schema(example = "New York")]
    pub city: String,
    #[schema(example = "NY")]
    pub state: String,
    #[schema(example = "United States")]
    pub country: String,
    #[schema(example = "10036")]
    pub postal_code: String,
}

impl Recipient {
    /// Address lines in display order, skipping the optional second line.
    pub fn address_lines(&self) -> Vec<String> {
        let mut lines = vec![self.address_line1.clone()];
        if let Some(ref line2) = self.address_line2 {
            lines.push(line2.clone());
        }
        lines.push(format!("{}, {} {}", self.city, self.state, self.postal_code));
        lines.push(self.country.clone());
        lines
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRecipientRequest {
    pub company_name: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRecipientRequest {
    pub company_name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}
