use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("vehicle `{id}` quality sub-score `{field}` is out of range: {value}")]
    SpecOutOfRange { id: String, field: &'static str, value: u8 },
    #[error("vehicle `{id}` has an empty required field `{field}`")]
    EmptyField { id: String, field: &'static str },
    #[error("duplicate vehicle id `{0}` in catalog")]
    DuplicateId(String),
    #[error("unknown {kind} `{value}`")]
    UnknownVariant { kind: &'static str, value: String },
}
