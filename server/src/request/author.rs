use application::transfer::CreateAuthorDto;
use error_stack::Report;
use kernel::prelude::entity::AuthorName;
use kernel::KernelError;
use serde::Deserialize;

use crate::controller::TryIntake;
use crate::request::{optional_date, required_text};

/// Raw `POST /add_author` form. Every field is optional here so that a missing
/// key is reported as a validation failure instead of a decoding rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateAuthorRequest {
    name: Option<String>,
    birthdate: Option<String>,
    date_of_death: Option<String>,
}

pub struct AuthorTransformer;

impl TryIntake<CreateAuthorRequest> for AuthorTransformer {
    type To = CreateAuthorDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateAuthorRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateAuthorDto {
            name: required_text(input.name, "name", AuthorName::MAX_LENGTH)?,
            birth_date: optional_date(input.birthdate, "birthdate")?,
            date_of_death: optional_date(input.date_of_death, "date_of_death")?,
        })
    }
}
