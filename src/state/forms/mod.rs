//! Form domain layer
//!
//! Type-safe handling of the company profile form: option tables,
//! field values, the form controller and submit-time validation.

mod field;
mod form_state;
mod options;
mod validation;

pub use field::FormField;
pub use form_state::{CompanyForm, Form, FormAction};
pub use validation::CompanyProfile;

#[cfg(test)]
pub use options::{AutoResponse, CompanyType, Flow};
#[cfg(test)]
pub use validation::FieldName;
