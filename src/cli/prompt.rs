//! Blocking prompt helpers
//!
//! Each helper prints its label, flushes, and reads one line from stdin.
//! Validating helpers re-prompt until the input parses, per field. A closed
//! stdin surfaces as `Eof` so flows can unwind to the main menu instead of
//! spinning on an unreadable prompt.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

/// Outcome of one prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt<T> {
    /// A parsed value
    Value(T),
    /// The user typed the `back` sentinel
    Back,
    /// Stdin was closed
    Eof,
}

/// Print a label and read one trimmed line; `None` when stdin is closed
pub fn read_line(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Read a trimmed, lowercased line
pub fn read_lower(label: &str) -> io::Result<Option<String>> {
    Ok(read_line(label)?.map(|line| line.to_lowercase()))
}

/// Read a date, re-prompting until the input is a valid `YYYY-MM-DD` date.
/// Returns the validated input string.
pub fn read_date(label: &str) -> io::Result<Prompt<String>> {
    loop {
        let Some(input) = read_line(label)? else {
            return Ok(Prompt::Eof);
        };
        if is_valid_date(&input) {
            return Ok(Prompt::Value(input));
        }
        println!("Invalid date format. Please enter the date in YYYY-MM-DD format.");
    }
}

/// Read a date where empty input means "keep the current value"
pub fn read_optional_date(label: &str) -> io::Result<Prompt<Option<String>>> {
    loop {
        let Some(input) = read_line(label)? else {
            return Ok(Prompt::Eof);
        };
        if input.is_empty() {
            return Ok(Prompt::Value(None));
        }
        if is_valid_date(&input) {
            return Ok(Prompt::Value(Some(input)));
        }
        println!("Invalid date format. Please enter the date in YYYY-MM-DD format.");
    }
}

/// Read an amount, re-prompting on empty or unparseable input
pub fn read_amount(label: &str) -> io::Result<Prompt<f64>> {
    loop {
        let Some(input) = read_line(label)? else {
            return Ok(Prompt::Eof);
        };
        if input.is_empty() {
            println!("Amount cannot be empty. Please enter a valid amount.");
            continue;
        }
        match input.parse::<f64>() {
            Ok(amount) => return Ok(Prompt::Value(amount)),
            Err(_) => println!("Invalid amount format. Please enter a valid number."),
        }
    }
}

/// Read an amount where empty input means "keep the current value"
pub fn read_optional_amount(label: &str) -> io::Result<Prompt<Option<f64>>> {
    loop {
        let Some(input) = read_line(label)? else {
            return Ok(Prompt::Eof);
        };
        if input.is_empty() {
            return Ok(Prompt::Value(None));
        }
        match input.parse::<f64>() {
            Ok(amount) => return Ok(Prompt::Value(Some(amount))),
            Err(_) => println!("Invalid amount format. Please enter a valid number."),
        }
    }
}

/// Read an amount that must be positive, re-prompting otherwise
pub fn read_positive_amount(label: &str) -> io::Result<Prompt<f64>> {
    loop {
        let Some(input) = read_line(label)? else {
            return Ok(Prompt::Eof);
        };
        match input.parse::<f64>() {
            Ok(amount) if amount > 0.0 => return Ok(Prompt::Value(amount)),
            _ => println!("Invalid amount. Please enter a positive number."),
        }
    }
}

/// Read an id, accepting the `back` sentinel; `noun` names the id in the
/// retry message ("expense", "income", "category")
pub fn read_id_or_back(label: &str, noun: &str) -> io::Result<Prompt<i64>> {
    loop {
        let Some(input) = read_lower(label)? else {
            return Ok(Prompt::Eof);
        };
        match interpret_id(&input) {
            Some(result) => return Ok(result),
            None => println!("Invalid ID. Please enter a valid {} ID.\n", noun),
        }
    }
}

/// Read a yes/no answer, re-prompting on anything else
pub fn read_yes_no(label: &str) -> io::Result<Prompt<bool>> {
    loop {
        let Some(input) = read_lower(label)? else {
            return Ok(Prompt::Eof);
        };
        match interpret_yes_no(&input) {
            Some(answer) => return Ok(Prompt::Value(answer)),
            None => println!("Invalid choice. Please enter 'yes' or 'no'."),
        }
    }
}

fn is_valid_date(input: &str) -> bool {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok()
}

fn interpret_id(input: &str) -> Option<Prompt<i64>> {
    if input == "back" {
        return Some(Prompt::Back);
    }
    input.parse::<i64>().ok().map(Prompt::Value)
}

fn interpret_yes_no(input: &str) -> Option<bool> {
    match input {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}
