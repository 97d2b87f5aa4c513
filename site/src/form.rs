//! The contact form.
//!
//! The form is posted natively by the browser to a hosted form service. Nothing is validated
//! beyond marking fields as `required`.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

impl FieldKind {
    /// The value of the `type` attribute, for fields rendered as `<input>`.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::TextArea => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub required: bool,
}

pub const FIELDS: [Field; 3] = [
    Field {
        name: "nombre",
        kind: FieldKind::Text,
        placeholder: "Nombre completo",
        required: true,
    },
    Field {
        name: "email",
        kind: FieldKind::Email,
        placeholder: "Correo electrónico",
        required: true,
    },
    Field {
        name: "mensaje",
        kind: FieldKind::TextArea,
        placeholder: "Cuéntanos sobre tu propuesta",
        required: true,
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub action: String,
    pub method: &'static str,
    pub fields: &'static [Field],
}

impl ContactForm {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            method: "POST",
            fields: &FIELDS,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_fields_required() {
        let form = ContactForm::new("https://example.com/f/test");
        assert_eq!(form.method, "POST");
        assert_eq!(
            form.fields.iter().map(|f| f.name).collect::<Vec<_>>(),
            vec!["nombre", "email", "mensaje"]
        );
        assert!(form.fields.iter().all(|f| f.required));
    }

    #[test]
    fn input_types() {
        assert_eq!(FieldKind::Text.input_type(), Some("text"));
        assert_eq!(FieldKind::Email.input_type(), Some("email"));
        assert_eq!(FieldKind::TextArea.input_type(), None);
    }
}
