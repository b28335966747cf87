use serde::{Deserialize, Serialize};

/// The two kinds of counterparty the business keeps an address book for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Vepari,
    Dalal,
}

impl ContactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Vepari => "Vepari",
            ContactKind::Dalal => "Dalal",
        }
    }
}

/// A vepari (seller) or dalal (broker) address-book entry.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub mobile: String,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct SaveContactDto {
    pub name: String,
    pub mobile: String,
}
