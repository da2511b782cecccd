//! Single-field form used by departments and companies.

use serde::Deserialize;

use crate::{
    api::models::{ENTITY_NAME_MAX, required_text},
    errors::Result,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameForm {
    pub name: String,
}

impl NameForm {
    pub fn validate(self) -> Result<Self> {
        Ok(Self {
            name: required_text("name", &self.name, ENTITY_NAME_MAX)?,
        })
    }
}
