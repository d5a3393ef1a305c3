
// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//
// Union by rank plus full path compression; amortized O(alpha(n)) per
// operation. The step counter tracks parent-chain hops in find and merge
// events in union, a crude proxy for algorithmic work meant for relative
// comparison rather than instruction-level accounting.

use error::DsuError;

#[derive(Debug)]
pub struct DisjointSet {
	pub size: usize,
	parent: Vec<usize>,
	rank: Vec<usize>,
	steps: u64,
}

impl DisjointSet {
	/// Builds `n` singleton sets over the universe `[0, n)`.
	///
	/// The universe is fixed for the lifetime of the structure; a negative
	/// count is rejected with `InvalidSize`.
	pub fn make_singletons(n: i64) -> Result<DisjointSet, DsuError> {
		if n < 0 {
			return Err(DsuError::InvalidSize(n));
		}
		let size = n as usize;
		Ok(DisjointSet {
			size,
			parent: (0..size).collect(),
			rank: vec![0; size],
			steps: 0,
		})
	}

	/// Returns the representative of `u`'s set.
	///
	/// Every node on the path from `u` to its root is relinked to point
	/// directly at the root. The step counter grows by one per node
	/// visited, so a find on an already-flat tree costs a single step.
	pub fn find(&mut self, u: i64) -> Result<usize, DsuError> {
		let u = self.check_element(u)?;
		Ok(self.find_root(u))
	}

	/// Merges the sets containing `u` and `v`; returns whether two
	/// distinct sets were actually merged.
	///
	/// Both roots are located with the same counting and compressing
	/// descent as `find`; a merge adds one more step on top of the two
	/// descents. The shallower root is attached under the deeper one, and
	/// a rank tie attaches `v`'s root under `u`'s.
	pub fn union(&mut self, u: i64, v: i64) -> Result<bool, DsuError> {
		let u = self.check_element(u)?;
		let v = self.check_element(v)?;
		let u_root = self.find_root(u);
		let v_root = self.find_root(v);
		if u_root == v_root {
			return Ok(false);
		}
		self.steps += 1;
		if self.rank[u_root] < self.rank[v_root] {
			self.parent[u_root] = v_root;
		} else if self.rank[u_root] > self.rank[v_root] {
			self.parent[v_root] = u_root;
		} else {
			self.parent[v_root] = u_root;
			self.rank[u_root] += 1;
		}
		Ok(true)
	}

	/// Whether `u` and `v` currently share a representative.
	///
	/// This is exactly two finds, so it compresses both paths and counts
	/// both descents: the step metric measures operations performed, not
	/// structure.
	pub fn connected(&mut self, u: i64, v: i64) -> Result<bool, DsuError> {
		self.check_element(u)?;
		self.check_element(v)?;
		Ok(self.find(u)? == self.find(v)?)
	}

	pub fn step_count(&self) -> u64 {
		self.steps
	}

	/// Zeroes the counter; the forest is untouched.
	pub fn reset_step_count(&mut self) {
		self.steps = 0;
	}

	// Arguments arrive as raw user-supplied integers; everything outside
	// [0, size) is rejected before any state is touched.
	fn check_element(&self, u: i64) -> Result<usize, DsuError> {
		if u < 0 || u >= self.size as i64 {
			Err(DsuError::OutOfRange { index: u, size: self.size })
		} else {
			Ok(u as usize)
		}
	}

	fn find_root(&mut self, x: usize) -> usize {
		self.steps += 1;
		let parent = self.parent[x];
		if parent != x {
			self.parent[x] = self.find_root(parent);
		}
		self.parent[x]
	}
}
