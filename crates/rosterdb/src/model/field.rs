///
/// FieldModel
/// Static per-field metadata used by form gating and validation.
///

#[derive(Debug)]
pub struct FieldModel {
    /// Field name as used in form state and patches.
    pub name: &'static str,
    /// Shape of the field's value at the form boundary.
    pub kind: FieldKind,
    /// Whether the field blocks submission while empty.
    pub presence: FieldPresence,
}

impl FieldModel {
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self.presence, FieldPresence::Required)
    }
}

///
/// FieldKind
///
/// Minimal type surface needed by the validator. All kinds are strings
/// at the form boundary; the kind decides which format check applies.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    /// Free text, no format check.
    Text,
    /// Must contain a plausible `local@domain` address when filled.
    Email,
    /// Restricted to the dial-pad character set when filled.
    Phone,
    /// Must match one of the listed variants when filled.
    Choice(&'static [&'static str]),
}

///
/// FieldPresence
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    Required,
    Optional,
}
