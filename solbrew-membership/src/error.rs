use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    #[error("metadata field {field} is required")]
    MissingMetadataField { field: &'static str },
}
