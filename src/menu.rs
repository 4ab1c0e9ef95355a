//! Interactive menu loop for the name store.
//!
//! A three-state machine reachable from a single prompt: add a name, show
//! all names, quit. Store failures propagate to the caller; everything else
//! keeps the loop running.

use crate::db::NameStore;
use crate::error::RosterError;
use std::io::{BufRead, Write};

/// The states reachable from the menu prompt. `Quit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddName,
    ShowNames,
    Quit,
}

impl MenuChoice {
    /// Parse a raw input line. Surrounding whitespace is ignored; anything
    /// unrecognized yields `None` and the menu is shown again.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddName),
            "2" => Some(Self::ShowNames),
            "3" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the menu loop until the user quits or input ends.
///
/// Generic over reader, writer and store so tests can drive it without a
/// terminal or a database.
pub async fn run<S, R, W>(store: &mut S, mut input: R, mut output: W) -> Result<(), RosterError>
where
    S: NameStore,
    R: BufRead,
    W: Write,
{
    loop {
        write!(
            output,
            "1. Add a name\n2. Show all names\n3. Quit\nEnter your choice: "
        )?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break; // end of input ends the loop like Quit
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::AddName) => {
                write!(output, "Enter a name: ")?;
                output.flush()?;
                let Some(name) = read_line(&mut input)? else {
                    break;
                };
                store.insert(&name).await?;
                writeln!(output, "Name '{name}' added to the database.")?;
            }
            Some(MenuChoice::ShowNames) => {
                let names = store.list_all().await?;
                if names.is_empty() {
                    writeln!(output, "No names found in the database.")?;
                } else {
                    writeln!(output, "Names in the database: ")?;
                    for name in &names {
                        writeln!(output, "{name}")?;
                    }
                }
            }
            Some(MenuChoice::Quit) => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            None => {
                writeln!(output, "Invalid choice. Please try again.")?;
            }
        }
    }
    Ok(())
}

/// Read one line with the trailing newline stripped; `None` at end of input.
/// Only the line terminator is stripped, so names keep their inner and
/// leading whitespace.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}
