/// Numbers dataset loads so a completion can tell whether a newer load
/// started while it was in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadGeneration {
	latest: u64,
}

impl LoadGeneration {
	/// Starts a load and returns its ticket. Older tickets stop being current.
	pub fn begin(&mut self) -> u64 {
		self.latest += 1;
		self.latest
	}

	pub fn is_current(&self, ticket: u64) -> bool {
		ticket == self.latest
	}
}
