/// Temporal value errors.
///
/// Absent timestamps and markers are valid states, so resolution is the only
/// operation that can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("unresolvable indeterminate marker: {marker}")]
    UnresolvableMarker { marker: String },
}
