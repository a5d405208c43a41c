//! Company form controller
//!
//! Holds the current field values, derives the dependent option sets and
//! keeps dependent selections consistent when the field they hang off
//! changes.

use super::field::FormField;
use super::options::{
    company_type_options, is_auto_response_visible, options_for_auto_response, options_for_flow,
    AutoResponse, CompanyType, Flow,
};
use super::validation::{validate, CompanyProfile, FieldName, FormValues, ValidationErrors};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Buttons on the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormAction {
    #[default]
    Submit,
    Reset,
}

impl FormAction {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Submit => Self::Reset,
            Self::Reset => Self::Submit,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Enviar",
            Self::Reset => "Limpiar",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompanyForm {
    pub company_name: FormField,
    pub company_type: FormField,
    pub flow: FormField,
    pub auto_response: FormField,
    /// Index into the visible fields; one past the last field is the action row
    pub active_field_index: usize,
    pub selected_action: FormAction,
}

impl CompanyForm {
    pub fn new() -> Self {
        Self {
            company_name: FormField::text(FieldName::CompanyName, "Nombre Empresa"),
            company_type: FormField::select(FieldName::CompanyType, "Tipo de empresa"),
            flow: FormField::select(FieldName::Flow, "Flujo de empresa"),
            auto_response: FormField::select(FieldName::AutoResponse, "Seleccione Auto Respuesta"),
            active_field_index: 0,
            selected_action: FormAction::default(),
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::CompanyName => &self.company_name,
            FieldName::CompanyType => &self.company_type,
            FieldName::Flow => &self.flow,
            FieldName::AutoResponse => &self.auto_response,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::CompanyName => &mut self.company_name,
            FieldName::CompanyType => &mut self.company_type,
            FieldName::Flow => &mut self.flow,
            FieldName::AutoResponse => &mut self.auto_response,
        }
    }

    /// Fields currently on screen, in order
    pub fn visible_fields(&self) -> Vec<FieldName> {
        let mut fields = vec![FieldName::CompanyName, FieldName::CompanyType, FieldName::Flow];
        if self.is_auto_response_visible() {
            fields.push(FieldName::AutoResponse);
        }
        fields
    }

    /// Name of the focused field, `None` when the action row is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        self.visible_fields().get(self.active_field_index).copied()
    }

    pub fn is_action_row_active(&self) -> bool {
        self.active_field_name().is_none()
    }

    pub fn flow_options(&self) -> Vec<&'static str> {
        options_for_flow(self.company_type.as_text())
    }

    pub fn auto_response_options(&self) -> Vec<&'static str> {
        options_for_auto_response(self.flow.as_text())
    }

    pub fn is_auto_response_visible(&self) -> bool {
        is_auto_response_visible(self.flow.as_text())
    }

    /// Options for a select field; empty for the text field
    pub fn options_for(&self, name: FieldName) -> Vec<&'static str> {
        match name {
            FieldName::CompanyName => Vec::new(),
            FieldName::CompanyType => company_type_options(),
            FieldName::Flow => self.flow_options(),
            FieldName::AutoResponse => self.auto_response_options(),
        }
    }

    pub fn set_company_name(&mut self, value: &str) {
        self.company_name.set_value(value);
        self.company_name.clear_error();
    }

    pub fn set_company_type(&mut self, value: &str) {
        self.company_type.set_value(value);
        self.company_type.clear_error();
        self.sync_flow();
    }

    pub fn set_flow(&mut self, value: &str) {
        self.flow.set_value(value);
        self.flow.clear_error();
        self.sync_auto_response();
    }

    pub fn set_auto_response(&mut self, value: &str) {
        self.auto_response.set_value(value);
        self.auto_response.clear_error();
    }

    /// Clear the flow if the company type no longer offers it
    fn sync_flow(&mut self) {
        let company_type = CompanyType::from_label(self.company_type.as_text());
        let flow = Flow::from_label(self.flow.as_text());
        let offered = company_type
            .zip(flow)
            .is_some_and(|(company_type, flow)| company_type.flows().contains(&flow));
        if !self.flow.is_empty() && !offered {
            tracing::debug!(flow = self.flow.as_text(), "clearing flow no longer offered");
            self.flow.clear();
            self.flow.clear_error();
        }
        self.sync_auto_response();
    }

    /// Clear the auto-response if it is hidden or no longer offered
    fn sync_auto_response(&mut self) {
        let flow = Flow::from_label(self.flow.as_text());
        let mode = AutoResponse::from_label(self.auto_response.as_text());
        let offered = self.is_auto_response_visible()
            && flow
                .zip(mode)
                .is_some_and(|(flow, mode)| flow.auto_responses().contains(&mode));
        if !self.auto_response.is_empty() && !offered {
            tracing::debug!(
                auto_response = self.auto_response.as_text(),
                "clearing auto-response no longer offered"
            );
            self.auto_response.clear();
            self.auto_response.clear_error();
        }
        if !self.is_auto_response_visible() {
            self.auto_response.clear_error();
        }
        // The action row shifts when the auto-response field hides
        self.set_active_field(self.active_field_index);
    }

    /// Type into the company name when it is focused
    pub fn input_char(&mut self, c: char) {
        if self.active_field_name() == Some(FieldName::CompanyName) {
            let mut name = self.company_name.as_text().to_string();
            name.push(c);
            self.set_company_name(&name);
        }
    }

    pub fn backspace(&mut self) {
        if self.active_field_name() == Some(FieldName::CompanyName) {
            let mut name = self.company_name.as_text().to_string();
            name.pop();
            self.set_company_name(&name);
        }
    }

    /// Step the focused select to its next or previous option
    pub fn cycle_active(&mut self, forward: bool) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        let options = self.options_for(name);
        let next = self.field(name).next_choice(&options, forward);
        match name {
            FieldName::CompanyName => {}
            FieldName::CompanyType => self.set_company_type(next),
            FieldName::Flow => self.set_flow(next),
            FieldName::AutoResponse => self.set_auto_response(next),
        }
    }

    /// Snapshot of the raw values
    pub fn values(&self) -> FormValues {
        FormValues {
            company_name: self.company_name.as_text().to_string(),
            company_type: self.company_type.as_text().to_string(),
            flow: self.flow.as_text().to_string(),
            auto_response: (!self.auto_response.is_empty())
                .then(|| self.auto_response.as_text().to_string()),
        }
    }

    /// Validate the form. Errors are attached to their fields and returned;
    /// on success all field errors are cleared.
    pub fn submit(&mut self) -> Result<CompanyProfile, ValidationErrors> {
        let result = validate(&self.values());
        match &result {
            Ok(_) => self.apply_errors(&ValidationErrors::default()),
            Err(errors) => self.apply_errors(errors),
        }
        result
    }

    fn apply_errors(&mut self, errors: &ValidationErrors) {
        for name in [
            FieldName::CompanyName,
            FieldName::CompanyType,
            FieldName::Flow,
            FieldName::AutoResponse,
        ] {
            self.field_mut(name).set_error(errors.get(name));
        }
    }

    pub fn has_errors(&self) -> bool {
        self.visible_fields()
            .into_iter()
            .any(|name| self.field(name).error.is_some())
    }

    /// Discard all values and messages
    pub fn reset(&mut self) {
        for field in [
            &mut self.company_name,
            &mut self.company_type,
            &mut self.flow,
            &mut self.auto_response,
        ] {
            field.clear();
            field.clear_error();
        }
        self.selected_action = FormAction::default();
        self.set_active_field(self.active_field_index);
    }
}

impl Default for CompanyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for CompanyForm {
    fn field_count(&self) -> usize {
        self.visible_fields().len() + 1 // fields + action row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.visible_fields()
            .get(index)
            .map(|name| self.field(*name))
    }
}
