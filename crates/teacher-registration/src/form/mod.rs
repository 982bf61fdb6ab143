//! Registration form state and validation.

mod validators;

pub use validators::{ValidationError, Validator, DATE_FORMAT};

use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    SchoolName,
    UdiseId,
    Name,
    Phone,
    AadharId,
    JoiningDate,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::SchoolName,
        FormField::UdiseId,
        FormField::Name,
        FormField::Phone,
        FormField::AadharId,
        FormField::JoiningDate,
    ];

    /// Control name as used by the form template.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::SchoolName => "schoolName",
            FormField::UdiseId => "udiseId",
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::AadharId => "aadharId",
            FormField::JoiningDate => "joiningdate",
        }
    }

    /// Validation rules for this field.
    pub fn validators(&self, max_date: NaiveDate) -> Vec<Validator> {
        match self {
            FormField::SchoolName | FormField::UdiseId => vec![Validator::Required],
            FormField::Name => vec![Validator::Required, Validator::MinLength(2)],
            FormField::Phone => vec![
                Validator::Required,
                Validator::MinLength(10),
                Validator::MaxLength(10),
                Validator::Numeric,
            ],
            FormField::AadharId => vec![
                Validator::Required,
                Validator::MinLength(12),
                Validator::MaxLength(12),
                Validator::Numeric,
            ],
            FormField::JoiningDate => vec![Validator::Required, Validator::MaxDate(max_date)],
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a form whose every field passed validation.
#[derive(Clone, PartialEq, Eq)]
pub struct FormValues {
    pub school_name: String,
    pub udise_id: String,
    pub name: String,
    pub phone: String,
    pub aadhar_id: String,
    pub joining_date: NaiveDate,
}

impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("school_name", &self.school_name)
            .field("udise_id", &self.udise_id)
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("aadhar_id", &"[REDACTED]")
            .field("joining_date", &self.joining_date)
            .finish()
    }
}

/// Mutable registration form.
///
/// The joining date upper bound is fixed when the form is created.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    values: HashMap<FormField, String>,
    touched: HashSet<FormField>,
    max_date: NaiveDate,
}

impl RegistrationForm {
    pub fn new(max_date: NaiveDate) -> Self {
        Self {
            values: HashMap::new(),
            touched: HashSet::new(),
            max_date,
        }
    }

    /// Latest accepted joining date.
    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.touched.insert(field);
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn school_name(&self) -> Option<&str> {
        self.get(FormField::SchoolName)
    }

    pub fn udise_id(&self) -> Option<&str> {
        self.get(FormField::UdiseId)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(FormField::Name)
    }

    pub fn phone(&self) -> Option<&str> {
        self.get(FormField::Phone)
    }

    pub fn aadhar_id(&self) -> Option<&str> {
        self.get(FormField::AadharId)
    }

    pub fn joining_date(&self) -> Option<&str> {
        self.get(FormField::JoiningDate)
    }

    /// All rule violations of one field.
    pub fn errors(&self, field: FormField) -> Vec<ValidationError> {
        let value = self.get(field);
        field
            .validators(self.max_date)
            .iter()
            .filter_map(|rule| rule.check(value).err())
            .collect()
    }

    pub fn is_field_valid(&self, field: FormField) -> bool {
        self.errors(field).is_empty()
    }

    pub fn invalid_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| !self.is_field_valid(*f))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        FormField::ALL.iter().all(|f| self.is_field_valid(*f))
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// Flag every field so its errors are shown.
    pub fn mark_all_touched(&mut self) {
        self.touched.extend(FormField::ALL);
    }

    /// Validated snapshot, or `None` while any field is invalid.
    pub fn validated(&self) -> Option<FormValues> {
        if !self.is_valid() {
            return None;
        }

        let text = |field| self.get(field).unwrap_or_default().to_string();
        let joining_date =
            NaiveDate::parse_from_str(self.joining_date()?, DATE_FORMAT).ok()?;

        Some(FormValues {
            school_name: text(FormField::SchoolName),
            udise_id: text(FormField::UdiseId),
            name: text(FormField::Name),
            phone: text(FormField::Phone),
            aadhar_id: text(FormField::AadharId),
            joining_date,
        })
    }
}
