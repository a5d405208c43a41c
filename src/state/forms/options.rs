//! Option tables for the cascading selects
//!
//! The selected company type decides which flows are offered, and the
//! selected flow decides which auto-response modes are offered. Everything
//! here is a static lookup with no hidden state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of company being registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyType {
    #[serde(rename = "Delivery")]
    Delivery,
    #[serde(rename = "Social Listening")]
    SocialListening,
    #[serde(rename = "Mensajeria")]
    Messaging,
}

impl CompanyType {
    pub const ALL: [CompanyType; 3] = [Self::Delivery, Self::SocialListening, Self::Messaging];

    /// Label shown in the select and carried in the submitted record
    pub fn label(&self) -> &'static str {
        match self {
            Self::Delivery => "Delivery",
            Self::SocialListening => "Social Listening",
            Self::Messaging => "Mensajeria",
        }
    }

    fn identifier(&self) -> &'static str {
        match self {
            Self::Delivery => "Delivery",
            Self::SocialListening => "SocialListening",
            Self::Messaging => "Messaging",
        }
    }

    /// Parse a display label or variant identifier
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == value || t.identifier() == value)
    }

    /// Flows offered for this company type
    pub fn flows(&self) -> &'static [Flow] {
        match self {
            Self::Delivery => &[Flow::Completo, Flow::RespondeYAtiende, Flow::Atiende],
            Self::SocialListening | Self::Messaging => &[Flow::ClasificaYResponde, Flow::Responde],
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Message-handling pipeline configured for the company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flow {
    #[serde(rename = "Completo")]
    Completo,
    #[serde(rename = "Responde y Atiende")]
    RespondeYAtiende,
    #[serde(rename = "Atiende")]
    Atiende,
    #[serde(rename = "Clasifica y responde")]
    ClasificaYResponde,
    #[serde(rename = "Responde")]
    Responde,
}

impl Flow {
    pub const ALL: [Flow; 5] = [
        Self::Completo,
        Self::RespondeYAtiende,
        Self::Atiende,
        Self::ClasificaYResponde,
        Self::Responde,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Completo => "Completo",
            Self::RespondeYAtiende => "Responde y Atiende",
            Self::Atiende => "Atiende",
            Self::ClasificaYResponde => "Clasifica y responde",
            Self::Responde => "Responde",
        }
    }

    fn identifier(&self) -> &'static str {
        match self {
            Self::Completo => "Completo",
            Self::RespondeYAtiende => "RespondeYAtiende",
            Self::Atiende => "Atiende",
            Self::ClasificaYResponde => "ClasificaYResponde",
            Self::Responde => "Responde",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.label() == value || f.identifier() == value)
    }

    /// Auto-response modes offered within this flow
    pub fn auto_responses(&self) -> &'static [AutoResponse] {
        match self {
            Self::RespondeYAtiende => &[
                AutoResponse::Deshabilitado,
                AutoResponse::PedirDatosYDerivar,
                AutoResponse::ManejoAutomatico,
            ],
            Self::Responde => &[
                AutoResponse::Deshabilitado,
                AutoResponse::ClasificacionAutomatica,
            ],
            Self::Completo | Self::Atiende | Self::ClasificaYResponde => &[],
        }
    }

    /// Flows that never show the auto-response field
    pub fn hides_auto_response(&self) -> bool {
        matches!(self, Self::Completo | Self::ClasificaYResponde | Self::Atiende)
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Automation level applied within a flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutoResponse {
    #[serde(rename = "Deshabilitado")]
    Deshabilitado,
    #[serde(rename = "Pedir datos y derivar")]
    PedirDatosYDerivar,
    #[serde(rename = "Manejo automático")]
    ManejoAutomatico,
    #[serde(rename = "Clasificación automática")]
    ClasificacionAutomatica,
}

impl AutoResponse {
    pub const ALL: [AutoResponse; 4] = [
        Self::Deshabilitado,
        Self::PedirDatosYDerivar,
        Self::ManejoAutomatico,
        Self::ClasificacionAutomatica,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Deshabilitado => "Deshabilitado",
            Self::PedirDatosYDerivar => "Pedir datos y derivar",
            Self::ManejoAutomatico => "Manejo automático",
            Self::ClasificacionAutomatica => "Clasificación automática",
        }
    }

    fn identifier(&self) -> &'static str {
        match self {
            Self::Deshabilitado => "Deshabilitado",
            Self::PedirDatosYDerivar => "PedirDatosYDerivar",
            Self::ManejoAutomatico => "ManejoAutomatico",
            Self::ClasificacionAutomatica => "ClasificacionAutomatica",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.label() == value || a.identifier() == value)
    }
}

impl fmt::Display for AutoResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Labels offered by the company type select
pub fn company_type_options() -> Vec<&'static str> {
    CompanyType::ALL.iter().map(|t| t.label()).collect()
}

/// Labels offered by the flow select for the given company type label.
/// Unknown or empty company types offer nothing.
pub fn options_for_flow(company_type: &str) -> Vec<&'static str> {
    CompanyType::from_label(company_type)
        .map(|t| t.flows().iter().map(|f| f.label()).collect())
        .unwrap_or_default()
}

/// Labels offered by the auto-response select for the given flow label
pub fn options_for_auto_response(flow: &str) -> Vec<&'static str> {
    Flow::from_label(flow)
        .map(|f| f.auto_responses().iter().map(|a| a.label()).collect())
        .unwrap_or_default()
}

/// Whether the auto-response field is shown for the given flow label
pub fn is_auto_response_visible(flow: &str) -> bool {
    if flow.is_empty() {
        return false;
    }
    !Flow::from_label(flow).is_some_and(|f| f.hides_auto_response())
}
