//! Interactive browse command.
//!
//! Drives the library's console state machine from stdin: the List screen
//! offers `show <row>` and `add <name>`, the Detail screen offers `back`
//! and `edit <name>`. One command, one request; the next prompt appears
//! only after the previous transition finished.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use bgt_client::{Console, MasonPlayerDirectory, Screen};

use crate::output;

#[derive(Args, Debug)]
pub struct BrowseArgs {}

pub async fn run(directory: MasonPlayerDirectory, _args: BrowseArgs) -> Result<()> {
    let mut console = Console::open(directory).await?;
    let stdin = io::stdin();

    loop {
        render(&console);
        prompt(&console)?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let rest = words.collect::<Vec<_>>().join(" ");

        let on_list = matches!(console.screen(), Screen::List(_));

        match command {
            "" => continue,
            "q" | "quit" => break,

            "show" if on_list => match rest.parse::<usize>() {
                Ok(row) => console.show(row).await,
                Err(_) => output::error("usage: show <row number>"),
            },
            "add" if on_list => {
                if rest.is_empty() {
                    output::error("usage: add <name>");
                } else {
                    console.submit(&rest).await;
                }
            }

            "back" if !on_list => console.back().await,
            "edit" if !on_list => {
                if rest.is_empty() {
                    output::error("usage: edit <new name>");
                } else {
                    console.submit(&rest).await;
                }
            }

            _ => output::error("unknown command for this screen"),
        }
    }

    Ok(())
}

fn render<D: bgt_client::PlayerDirectory>(console: &Console<D>) {
    println!();
    if let Some(notification) = console.notification() {
        output::notification(notification);
    }

    match console.screen() {
        Screen::List(state) => {
            output::list_view(state.view());
            output::form_view(&state.view().add_form);
        }
        Screen::Detail(state) => output::detail_view(state.view()),
    }
}

fn prompt<D: bgt_client::PlayerDirectory>(console: &Console<D>) -> Result<()> {
    let commands = match console.screen() {
        Screen::List(_) => "show <row> | add <name> | quit",
        Screen::Detail(_) => "back | edit <new name> | quit",
    };
    print!("{} ", format!("[{commands}]>").dimmed());
    io::stdout().flush()?;
    Ok(())
}
