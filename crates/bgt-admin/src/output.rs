//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use bgt_client::{DetailView, FormView, ListView, Notification};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a notification the way the console's notification area would.
pub fn notification(notification: &Notification) {
    if notification.is_error() {
        error(notification.text());
    } else {
        success(notification.text());
    }
}

/// Print the players table.
pub fn list_view(view: &ListView) {
    let headers = view.headers();
    let name_width = view
        .rows
        .iter()
        .map(|r| r.name.len())
        .chain([headers[0].len()])
        .max()
        .unwrap_or(0);

    println!(
        "{:<name_width$}  {}  {}  {}",
        headers[0].bold(),
        headers[1].bold(),
        headers[2].bold(),
        headers[3].bold(),
    );

    for (index, row) in view.rows.iter().enumerate() {
        // Model and Location columns are empty in the short representation.
        println!(
            "{:<name_width$}  {:5}  {:8}  {}",
            row.name,
            "",
            "",
            format!("show ({index})").dimmed(),
        );
    }

    if view.rows.is_empty() {
        eprintln!("{}", "No players found.".dimmed());
    }
}

/// Print a form the way the console would render it.
pub fn form_view(form: &FormView) {
    println!(
        "{} {} {}",
        "form".dimmed(),
        form.method.bold(),
        form.action
    );
    for input in &form.fields {
        let mut marks = Vec::new();
        if input.required {
            marks.push("required");
        }
        if input.readonly {
            marks.push("read-only");
        }
        let marks = if marks.is_empty() {
            String::new()
        } else {
            format!(" [{}]", marks.join(", ")).dimmed().to_string()
        };
        println!("  {}: {}{}", input.label.dimmed(), input.value, marks);
    }
}

/// Print the single-player screen.
pub fn detail_view(view: &DetailView) {
    println!("{} {}", "collection".dimmed(), view.breadcrumb);
    form_view(&view.form);
}
