
/// Caller-input errors. The structure cannot become inconsistent through
/// any sequence of in-range operations, so these are the only failure
/// modes it signals.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DsuError {
	/// Asked for a structure over a negative number of elements.
	#[error("invalid element count {0}")]
	InvalidSize(i64),

	/// An element index outside the universe `[0, size)`.
	#[error("element {index} is out of range for a universe of {size} elements")]
	OutOfRange { index: i64, size: usize },
}
