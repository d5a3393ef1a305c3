#[macro_use] extern crate log;
extern crate simplelog;
extern crate dsu_analysis;

use simplelog::*;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, Write};

use dsu_analysis::{analyze_disjoint_set, AnalysisReport, DisjointSet};

fn prompt(text: &str) {
	print!("{}", text);
	let _ = stdout().flush();
}

fn next_token<I: Iterator<Item = String>>(lines_iter: &mut I, tokens: &mut VecDeque<String>) -> Option<String> {
	loop {
		if let Some(tok) = tokens.pop_front() {
			return Some(tok);
		}
		let line = lines_iter.next()?;
		tokens.extend(line.split_whitespace().map(|t| t.to_string()));
	}
}

fn next_i64<I: Iterator<Item = String>>(lines_iter: &mut I, tokens: &mut VecDeque<String>) -> Option<i64> {
	loop {
		let tok = next_token(lines_iter, tokens)?;
		match tok.parse::<i64>() {
			Ok(v) => return Some(v),
			Err(_) => prompt("Please enter a number: "),
		}
	}
}

fn print_report_header() {
	println!("{:>14}{:>25}{:>30}{:>35}",
		"Input Size (n)", "Observed Steps (C1)", "Expected Steps (C2)", "Asymptotic Constant (C1/C2)");
	println!("{}", "-".repeat(108));
}

fn print_report(report: &AnalysisReport) {
	println!("{:>14}{:>25}{:>30.1}{:>35.4}",
		report.size, report.observed_steps, report.expected_steps, report.asymptotic_constant);
}

// Menu-driven session over one structure; returns None once input runs dry.
fn interactive_session<I: Iterator<Item = String>>(lines_iter: &mut I, tokens: &mut VecDeque<String>) -> Option<()> {
	prompt("Enter the number of elements for interactive operations: ");
	let n = next_i64(lines_iter, tokens)?;
	let mut ds = match DisjointSet::make_singletons(n) {
		Ok(ds) => ds,
		Err(e) => {
			warn!("rejected interactive session: {}", e);
			println!("Invalid number of elements.");
			return Some(());
		}
	};
	info!("interactive session over {} elements", n);

	loop {
		println!("\nMenu:");
		println!("1. Union");
		println!("2. Find");
		println!("3. Check if two elements are connected");
		println!("4. Show step count for operations");
		println!("5. Reset step count");
		println!("0. Exit menu");
		prompt("Enter your choice: ");

		match next_i64(lines_iter, tokens)? {
			0 => break,
			1 => {
				prompt("Enter two elements to union: ");
				let u = next_i64(lines_iter, tokens)?;
				let v = next_i64(lines_iter, tokens)?;
				match ds.union(u, v) {
					Ok(_) => println!("Union performed between {} and {}.", u, v),
					Err(_) => println!("Invalid elements."),
				}
			}
			2 => {
				prompt("Enter element to find its set representative: ");
				let u = next_i64(lines_iter, tokens)?;
				match ds.find(u) {
					Ok(root) => println!("The set representative of {} is {}.", u, root),
					Err(_) => println!("Invalid element."),
				}
			}
			3 => {
				prompt("Enter two elements to check connection: ");
				let u = next_i64(lines_iter, tokens)?;
				let v = next_i64(lines_iter, tokens)?;
				match ds.connected(u, v) {
					Ok(true) => println!("{} and {} are connected.", u, v),
					Ok(false) => println!("{} and {} are not connected.", u, v),
					Err(_) => println!("Invalid elements."),
				}
			}
			4 => println!("Total steps taken for operations: {}", ds.step_count()),
			5 => {
				ds.reset_step_count();
				println!("Step count reset.");
			}
			_ => println!("Invalid choice. Try again."),
		}
	}
	info!("interactive session finished with {} steps on the counter", ds.step_count());
	Some(())
}

fn main() {
	let _ = WriteLogger::init(
		LevelFilter::Info,
		Config {time: None, level: None, target: None, location: None, time_format: None},
		File::create("dsu_analysis.log").unwrap());

	let stdin = stdin();
	let reader = BufReader::new(stdin);
	let mut lines_iter = reader.lines().map(|l| l.unwrap());
	let mut tokens = VecDeque::new();

	println!("Disjoint Set Complexity Analysis");
	println!("--------------------------------");

	loop {
		prompt("Enter the size of input (n) for complexity analysis or -1 for menu options: ");
		let n = match next_i64(&mut lines_iter, &mut tokens) {
			Some(n) => n,
			None => break,
		};

		if n == -1 {
			if interactive_session(&mut lines_iter, &mut tokens).is_none() {
				break;
			}
		} else {
			print_report_header();
			match analyze_disjoint_set(n) {
				Ok(report) => print_report(&report),
				Err(e) => println!("Cannot analyze: {}.", e),
			}
		}

		prompt("\nDo you want to enter another input size or return to the main menu? (y/n): ");
		match next_token(&mut lines_iter, &mut tokens) {
			Some(answer) => {
				if !(answer == "y" || answer == "Y") {
					break;
				}
			}
			None => break,
		}
	}
}
