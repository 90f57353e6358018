//! Employee form state and required-field validation

/// Identifier of one form input. Stable across the session; dialogs and
/// value-help routing refer to fields by this id, never by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Department,
    HireDate,
}

impl FieldId {
    pub fn all() -> [FieldId; 5] {
        [
            FieldId::FirstName,
            FieldId::LastName,
            FieldId::Email,
            FieldId::Department,
            FieldId::HireDate,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email",
            FieldId::Department => "Department",
            FieldId::HireDate => "Hire Date",
        }
    }
}

/// Validation annotation on a field. `Unchecked` is the initial state before
/// any validation pass has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

pub const REQUIRED_MESSAGE: &str = "This field is required";

/// One input: current value plus the validation annotation written back by
/// the last validation pass.
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub value: String,
    pub validity: Validity,
    pub message: Option<String>,
}

impl FormField {
    fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            validity: Validity::Unchecked,
            message: None,
        }
    }
}

/// The employee entry form: an ordered set of fields, validated as a whole
/// before the save action commits.
#[derive(Debug)]
pub struct FormState {
    pub fields: Vec<FormField>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: FieldId::all().into_iter().map(FormField::new).collect(),
        }
    }

    pub fn field(&self, id: FieldId) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    pub fn value(&self, id: FieldId) -> Option<&str> {
        self.field(id).map(|f| f.value.as_str())
    }

    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        if let Some(field) = self.field_mut(id) {
            field.value = value.into();
        }
    }

    pub fn push_char(&mut self, id: FieldId, c: char) {
        if let Some(field) = self.field_mut(id) {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self, id: FieldId) {
        if let Some(field) = self.field_mut(id) {
            field.value.pop();
        }
    }

    /// Validate the given required fields against their current values.
    ///
    /// A value whose trimmed form is empty fails; the field is annotated
    /// `Invalid` with [`REQUIRED_MESSAGE`]. Passing fields get `Valid` and
    /// any prior message cleared. Ids the form does not track are skipped,
    /// the remaining fields still validate. Returns true iff every tracked
    /// required field passed.
    pub fn validate(&mut self, required: &[FieldId]) -> bool {
        let mut all_valid = true;
        for id in required {
            let Some(field) = self.field_mut(*id) else {
                continue;
            };
            if field.value.trim().is_empty() {
                field.validity = Validity::Invalid;
                field.message = Some(REQUIRED_MESSAGE.to_string());
                all_valid = false;
            } else {
                field.validity = Validity::Valid;
                field.message = None;
            }
        }
        all_valid
    }
}
