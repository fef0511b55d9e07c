/// A content family could not be inspected.
///
/// Harvesting logs these and moves on to the next family.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HarvestError {
	#[error("{class_name} cannot be instantiated: {reason}")]
	Instantiation { class_name: String, reason: String },
}
