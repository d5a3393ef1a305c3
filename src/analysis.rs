
// Empirical check of the amortized cost bound: drive a fixed synthetic
// workload against a fresh structure and compare the observed step count
// to n * alpha(n).

use disjoint_set::DisjointSet;
use error::DsuError;

/// Outcome of one complexity-analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
	pub size: usize,
	pub observed_steps: u64,
	pub expected_steps: f64,
	pub asymptotic_constant: f64,
}

/// Stepwise approximation of the inverse Ackermann function alpha(n).
pub fn alpha_approximation(n: usize) -> f64 {
	if n <= 10 {
		4.0
	} else if n <= 100 {
		4.3
	} else if n <= 1000 {
		4.6
	} else if n <= 10_000 {
		5.0
	} else if n <= 100_000 {
		5.5
	} else {
		6.0
	}
}

/// Runs the chain-union workload over a fresh structure of `n` elements
/// and reports observed versus estimated step counts.
///
/// The workload unions every consecutive pair, then sweeps a find over
/// every element so all paths end up fully flattened. Sizes below one are
/// rejected with `InvalidSize`; `n = 1` runs an empty union loop and a
/// single find. Each call is independent and deterministic in `n`.
pub fn analyze_disjoint_set(n: i64) -> Result<AnalysisReport, DsuError> {
	if n < 1 {
		return Err(DsuError::InvalidSize(n));
	}
	let mut ds = DisjointSet::make_singletons(n)?;
	ds.reset_step_count();

	for i in 0..n - 1 {
		ds.union(i, i + 1)?;
	}
	for i in 0..n {
		ds.find(i)?;
	}

	let observed_steps = ds.step_count();
	let expected_steps = n as f64 * alpha_approximation(n as usize);
	let report = AnalysisReport {
		size: n as usize,
		observed_steps,
		expected_steps,
		asymptotic_constant: observed_steps as f64 / expected_steps,
	};
	info!("analysis: {}", json!({
		"n": report.size,
		"observed_steps": report.observed_steps,
		"expected_steps": report.expected_steps,
		"asymptotic_constant": report.asymptotic_constant,
	}));
	Ok(report)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn alpha_table_boundaries() {
		assert_eq!(alpha_approximation(1), 4.0);
		assert_eq!(alpha_approximation(10), 4.0);
		assert_eq!(alpha_approximation(11), 4.3);
		assert_eq!(alpha_approximation(100), 4.3);
		assert_eq!(alpha_approximation(101), 4.6);
		assert_eq!(alpha_approximation(1000), 4.6);
		assert_eq!(alpha_approximation(1001), 5.0);
		assert_eq!(alpha_approximation(10_000), 5.0);
		assert_eq!(alpha_approximation(10_001), 5.5);
		assert_eq!(alpha_approximation(100_000), 5.5);
		assert_eq!(alpha_approximation(100_001), 6.0);
	}

	#[test]
	fn single_element_run_is_one_find() {
		let report = analyze_disjoint_set(1).unwrap();
		assert_eq!(report.size, 1);
		assert_eq!(report.observed_steps, 1);
		assert_eq!(report.expected_steps, 4.0);
		assert_eq!(report.asymptotic_constant, 0.25);
	}

	#[test]
	fn six_element_run_is_exact() {
		let report = analyze_disjoint_set(6).unwrap();
		assert_eq!(report.observed_steps, 30);
		assert_eq!(report.expected_steps, 24.0);
		assert_eq!(report.asymptotic_constant, 1.25);
	}

	#[test]
	fn chain_workload_cost_is_linear() {
		// the first union costs 3 steps, every later union 4, and the
		// sweep 2n - 1: the tree stays a star, so the total is 6n - 6
		for &n in [2i64, 10, 100, 1000].iter() {
			let report = analyze_disjoint_set(n).unwrap();
			assert_eq!(report.observed_steps, (6 * n - 6) as u64);
		}
	}

	#[test]
	fn degenerate_sizes_are_rejected() {
		assert_eq!(analyze_disjoint_set(0), Err(DsuError::InvalidSize(0)));
		assert_eq!(analyze_disjoint_set(-7), Err(DsuError::InvalidSize(-7)));
	}

	#[test]
	fn runs_are_independent() {
		let a = analyze_disjoint_set(500).unwrap();
		let b = analyze_disjoint_set(500).unwrap();
		assert_eq!(a.observed_steps, b.observed_steps);
		assert_eq!(a.asymptotic_constant, b.asymptotic_constant);
	}
}
