//! Group and child edit forms with field validation.

use inspecta_core::i18n::Translator;
use inspecta_core::models::{
    Child, CreateGroup, Group, LocalizedName, NewChild, QualificationMetrics,
};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minimum trimmed length of a name field.
pub const MIN_NAME_LENGTH: usize = 2;

pub const REQUIRED: &str = "form.errors.required";
pub const MIN_LENGTH: &str = "form.errors.minLength";

/// One failed field, with the translation key describing the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub key: &'static str,
}

impl FieldError {
    pub fn message(&self, translator: &Translator) -> String {
        translator.translate(self.key)
    }
}

fn check_name(field: &'static str, value: &str, errors: &mut Vec<FieldError>) {
    let len = value.trim().chars().count();
    if len == 0 {
        errors.push(FieldError {
            field,
            key: REQUIRED,
        });
    } else if len < MIN_NAME_LENGTH {
        errors.push(FieldError {
            field,
            key: MIN_LENGTH,
        });
    }
}

fn finish<T>(errors: Vec<FieldError>, value: T) -> Result<T, ValidationError> {
    if errors.is_empty() {
        Ok(value)
    } else {
        Err(ValidationError(errors))
    }
}

/// Editable group fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupForm {
    pub name_en: String,
    pub name_ar: String,
    pub is_active: bool,
}

impl Default for GroupForm {
    fn default() -> Self {
        Self {
            name_en: String::new(),
            name_ar: String::new(),
            is_active: true,
        }
    }
}

impl GroupForm {
    /// Prefill from a stored group.
    pub fn from_group(group: &Group) -> Self {
        Self {
            name_en: group.name.en.clone(),
            name_ar: group.name.ar.clone(),
            is_active: group.is_active,
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_name("name_en", &self.name_en, &mut errors);
        check_name("name_ar", &self.name_ar, &mut errors);
        errors
    }

    fn name(&self) -> LocalizedName {
        LocalizedName::new(self.name_en.trim(), self.name_ar.trim())
    }

    pub fn into_create(self) -> Result<CreateGroup, ValidationError> {
        let errors = self.validate();
        finish(errors, CreateGroup::new(self.name(), self.is_active))
    }

    /// Copy of `group` with the form's fields applied; children untouched.
    pub fn apply_to(&self, group: &Group) -> Result<Group, ValidationError> {
        let errors = self.validate();
        let mut patched = group.clone();
        patched.name = self.name();
        patched.is_active = self.is_active;
        finish(errors, patched)
    }
}

/// Editable child fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildForm {
    pub name_en: String,
    pub name_ar: String,
    pub is_active: bool,
    pub metrics: QualificationMetrics,
}

impl Default for ChildForm {
    fn default() -> Self {
        Self {
            name_en: String::new(),
            name_ar: String::new(),
            is_active: true,
            metrics: QualificationMetrics::default(),
        }
    }
}

impl ChildForm {
    pub fn from_child(child: &Child) -> Self {
        Self {
            name_en: child.name.en.clone(),
            name_ar: child.name.ar.clone(),
            is_active: child.is_active,
            metrics: child.metrics,
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_name("name_en", &self.name_en, &mut errors);
        check_name("name_ar", &self.name_ar, &mut errors);
        errors
    }

    pub fn into_new_child(self) -> Result<NewChild, ValidationError> {
        let errors = self.validate();
        let child = NewChild {
            name: LocalizedName::new(self.name_en.trim(), self.name_ar.trim()),
            is_active: self.is_active,
            metrics: self.metrics,
        };
        finish(errors, child)
    }
}
