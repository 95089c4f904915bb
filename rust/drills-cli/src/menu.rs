//! Interactive scenario menu for `insort`.

use crate::error::CliError;
use crate::prompt::Prompter;
use drills_core::scenario::Scenario;
use std::io::{BufRead, Write};

/// Menu number that leaves the loop.
pub const EXIT_CHOICE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Scenario),
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(token: &str) -> Self {
        match token.trim().parse::<u32>() {
            Ok(EXIT_CHOICE) => MenuChoice::Exit,
            Ok(n) => Scenario::from_menu(n).map_or(MenuChoice::Invalid, MenuChoice::Run),
            Err(_) => MenuChoice::Invalid,
        }
    }
}

pub fn menu_text() -> String {
    let mut text = String::from("Insertion Sort Limitation Tests:\n");
    for (i, scenario) in Scenario::ALL.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, scenario.menu_label()));
    }
    text.push_str(&format!("{}. Exit\n", EXIT_CHOICE));
    text
}

/// Show the menu until the user exits or input runs out, handing each
/// selected scenario to `run`.
///
/// Menu lines and prompts go through [`Prompter::say`], so a quiet prompter
/// leaves the output to whatever `run` writes.
pub fn run_menu<R, W, F>(prompter: &mut Prompter<R, W>, mut run: F) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
    F: FnMut(Scenario, &mut W) -> Result<(), CliError>,
{
    loop {
        prompter.say(&menu_text())?;
        prompter.say("Enter your choice: ")?;

        let Some(token) = prompter.next_token()? else {
            prompter.say("\n")?;
            return Ok(());
        };
        match MenuChoice::parse(&token) {
            MenuChoice::Run(scenario) => {
                tracing::debug!(?scenario, "menu selection");
                run(scenario, prompter.output())?;
            }
            MenuChoice::Exit => {
                prompter.say("Exiting program...\n")?;
                return Ok(());
            }
            MenuChoice::Invalid => {
                prompter.say("Invalid choice! Please try again.\n")?;
            }
        }
    }
}
