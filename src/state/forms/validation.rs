//! Submit-time validation for the company form
//!
//! Validation collects every failing field instead of stopping at the first
//! one, so all messages can be shown next to their fields at once.

use super::options::{is_auto_response_visible, AutoResponse, CompanyType, Flow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub const COMPANY_NAME_REQUIRED: &str = "Nombre de empresa requerido";
pub const COMPANY_TYPE_REQUIRED: &str = "Tipo de empresa requerido";
pub const COMPANY_TYPE_INVALID: &str = "Tipo de empresa inválido";
pub const FLOW_REQUIRED: &str = "Flujo de empresa requerido";
pub const FLOW_UNAVAILABLE: &str = "Flujo no disponible para el tipo de empresa";
pub const AUTO_RESPONSE_INVALID: &str = "Auto respuesta inválida";
pub const AUTO_RESPONSE_UNAVAILABLE: &str = "Auto respuesta no disponible para el flujo";

/// Form fields, ordered as they appear on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    CompanyName,
    CompanyType,
    Flow,
    AutoResponse,
}

impl FieldName {
    /// Key used when reporting errors
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::CompanyType => "companyType",
            Self::Flow => "flow",
            Self::AutoResponse => "autoResponse",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values as entered in the form. Empty strings mean "nothing chosen".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub company_name: String,
    pub company_type: String,
    pub flow: String,
    pub auto_response: Option<String>,
}

/// Normalized record handed to the submission handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub company_name: String,
    pub company_type: CompanyType,
    pub flow: Flow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_response: Option<AutoResponse>,
}

/// Per-field validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<FieldName, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Failing fields in screen order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }
}

/// Validate raw form values into a [`CompanyProfile`]
pub fn validate(values: &FormValues) -> Result<CompanyProfile, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if values.company_name.is_empty() {
        errors.insert(FieldName::CompanyName, COMPANY_NAME_REQUIRED);
    }

    let company_type = if values.company_type.is_empty() {
        errors.insert(FieldName::CompanyType, COMPANY_TYPE_REQUIRED);
        None
    } else {
        let parsed = CompanyType::from_label(&values.company_type);
        if parsed.is_none() {
            errors.insert(FieldName::CompanyType, COMPANY_TYPE_INVALID);
        }
        parsed
    };

    let flow = if values.flow.is_empty() {
        errors.insert(FieldName::Flow, FLOW_REQUIRED);
        None
    } else {
        let parsed = Flow::from_label(&values.flow);
        // Membership can only be judged once the company type is known
        let offered = match (parsed, company_type) {
            (Some(flow), Some(company_type)) => company_type.flows().contains(&flow),
            (Some(_), None) => true,
            (None, _) => false,
        };
        if !offered {
            errors.insert(FieldName::Flow, FLOW_UNAVAILABLE);
        }
        parsed.filter(|_| offered)
    };

    let auto_response = match values.auto_response.as_deref() {
        Some(value) if !value.is_empty() && is_auto_response_visible(&values.flow) => {
            if value.chars().count() <= 1 {
                errors.insert(FieldName::AutoResponse, AUTO_RESPONSE_INVALID);
                None
            } else {
                let parsed = AutoResponse::from_label(value);
                let offered = match (parsed, flow) {
                    (Some(mode), Some(flow)) => flow.auto_responses().contains(&mode),
                    (Some(_), None) => true,
                    (None, _) => false,
                };
                if !offered {
                    errors.insert(FieldName::AutoResponse, AUTO_RESPONSE_UNAVAILABLE);
                }
                parsed.filter(|_| offered)
            }
        }
        // Hidden or unchosen auto-response never reaches the record
        _ => None,
    };

    match (company_type, flow) {
        (Some(company_type), Some(flow)) if errors.is_empty() => Ok(CompanyProfile {
            company_name: values.company_name.clone(),
            company_type,
            flow,
            auto_response,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(name: &str, company_type: &str, flow: &str, auto: Option<&str>) -> FormValues {
        FormValues {
            company_name: name.to_string(),
            company_type: company_type.to_string(),
            flow: flow.to_string(),
            auto_response: auto.map(str::to_string),
        }
    }

    mod required_fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_reports_all_required_fields() {
            let errors = validate(&FormValues::default()).unwrap_err();
            assert_eq!(errors.len(), 3);
            assert_eq!(errors.get(FieldName::CompanyName), Some(COMPANY_NAME_REQUIRED));
            assert_eq!(errors.get(FieldName::CompanyType), Some(COMPANY_TYPE_REQUIRED));
            assert_eq!(errors.get(FieldName::Flow), Some(FLOW_REQUIRED));
            assert!(errors.get(FieldName::AutoResponse).is_none());
        }

        #[test]
        fn test_missing_name_is_the_only_error() {
            let errors = validate(&values("", "Delivery", "Completo", None)).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.fields().collect::<Vec<_>>(),
                vec![FieldName::CompanyName]
            );
        }

        #[test]
        fn test_errors_iterate_in_screen_order() {
            let errors = validate(&FormValues::default()).unwrap_err();
            let keys: Vec<&str> = errors.fields().map(|field| field.as_str()).collect();
            assert_eq!(keys, vec!["companyName", "companyType", "flow"]);
        }

        #[test]
        fn test_error_display_counts_fields() {
            let errors = validate(&FormValues::default()).unwrap_err();
            assert_eq!(errors.to_string(), "3 field(s) failed validation");
        }
    }

    mod successful_submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_full_record_matches_input() {
            let profile = validate(&values(
                "Acme",
                "Delivery",
                "Responde y Atiende",
                Some("Deshabilitado"),
            ))
            .unwrap();

            assert_eq!(
                profile,
                CompanyProfile {
                    company_name: "Acme".to_string(),
                    company_type: CompanyType::Delivery,
                    flow: Flow::RespondeYAtiende,
                    auto_response: Some(AutoResponse::Deshabilitado),
                }
            );
        }

        #[test]
        fn test_record_serializes_with_labels() {
            let profile = validate(&values(
                "Acme",
                "Delivery",
                "Responde y Atiende",
                Some("Deshabilitado"),
            ))
            .unwrap();

            let json = serde_json::to_value(&profile).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "companyName": "Acme",
                    "companyType": "Delivery",
                    "flow": "Responde y Atiende",
                    "autoResponse": "Deshabilitado",
                })
            );
        }

        #[test]
        fn test_auto_response_is_optional_when_visible() {
            let profile = validate(&values("Acme", "Mensajeria", "Responde", None)).unwrap();
            assert_eq!(profile.auto_response, None);

            let profile = validate(&values("Acme", "Mensajeria", "Responde", Some(""))).unwrap();
            assert_eq!(profile.auto_response, None);
        }

        #[test]
        fn test_hidden_auto_response_is_dropped() {
            let profile = validate(&values(
                "Acme",
                "Social Listening",
                "Clasifica y responde",
                Some("Deshabilitado"),
            ))
            .unwrap();
            assert_eq!(profile.auto_response, None);

            let json = serde_json::to_value(&profile).unwrap();
            assert!(json.get("autoResponse").is_none());
        }
    }

    mod refinements {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_single_character_auto_response_is_rejected() {
            let errors = validate(&values("Acme", "Delivery", "Responde y Atiende", Some("x")))
                .unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get(FieldName::AutoResponse),
                Some(AUTO_RESPONSE_INVALID)
            );
        }

        #[test]
        fn test_auto_response_from_another_flow_is_rejected() {
            let errors = validate(&values(
                "Acme",
                "Delivery",
                "Responde y Atiende",
                Some("Clasificación automática"),
            ))
            .unwrap_err();
            assert_eq!(
                errors.get(FieldName::AutoResponse),
                Some(AUTO_RESPONSE_UNAVAILABLE)
            );
        }

        #[test]
        fn test_flow_from_another_company_type_is_rejected() {
            let errors = validate(&values("Acme", "Delivery", "Responde", None)).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(FieldName::Flow), Some(FLOW_UNAVAILABLE));
        }

        #[test]
        fn test_unknown_company_type_is_rejected() {
            let errors = validate(&values("Acme", "Retail", "Completo", None)).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get(FieldName::CompanyType),
                Some(COMPANY_TYPE_INVALID)
            );
        }

        #[test]
        fn test_identifiers_normalize_to_variants() {
            let profile = validate(&values(
                "Acme",
                "SocialListening",
                "Responde",
                Some("ClasificacionAutomatica"),
            ))
            .unwrap();
            assert_eq!(profile.company_type, CompanyType::SocialListening);
            assert_eq!(
                profile.auto_response,
                Some(AutoResponse::ClasificacionAutomatica)
            );
        }
    }
}
