use anyhow::Result;
use derive_more::Display;
use inquire::{Password, PasswordDisplayMode, Select, Text};
use intake::form::{FormController, LogSink};
use intake::models::FieldName;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const LOG_FILE: &str = "./intake.log";

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu.
trait Menu {
    /// Implements the body of the menu. Returns None when the menu
    /// wants to end, Some(()) when it should run again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu in a loop, intercepting errors, until it asks
    /// to end.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

pub struct App {
    controller: FormController<LogSink>,
}

impl App {
    pub fn new(controller: FormController<LogSink>) -> Self {
        App { controller }
    }

    pub fn start(&mut self) -> Result<()> {
        println!("Welcome! Please take a minute to register.");
        self.enter_loop();
        Ok(())
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Fill out the registration form")]
            Fill,
            #[display("Quit")]
            Quit,
        }

        let choice =
            Select::new("What would you like to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Fill => {
                FormSession {
                    controller: &mut self.controller,
                }
                .enter_loop();
                Ok(MENU_LOOP)
            }
            Choice::Quit => Ok(MENU_EXIT),
        }
    }
}

/// One editing-and-submit pass over the form per entry; re-entered
/// with values preserved until the submission is accepted.
struct FormSession<'ctl> {
    controller: &'ctl mut FormController<LogSink>,
}

impl FormSession<'_> {
    fn prompt_text(&mut self, field: FieldName, label: &str) -> Result<()> {
        let initial = self.controller.value(field).to_string();
        let help = self.controller.error(field).map(ToString::to_string);

        let mut prompt = Text::new(label).with_initial_value(&initial);
        if let Some(help) = &help {
            prompt = prompt.with_help_message(help);
        }

        let input = prompt.prompt()?;
        self.controller.set_value(field, input);
        Ok(())
    }

    fn prompt_password(&mut self, field: FieldName, label: &str) -> Result<()> {
        let help = self.controller.error(field).map(ToString::to_string);

        let mut prompt = Password::new(label)
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked);
        if let Some(help) = &help {
            prompt = prompt.with_help_message(help);
        }

        let input = prompt.prompt()?;
        self.controller.set_value(field, input);
        Ok(())
    }
}

impl Menu for FormSession<'_> {
    fn enter(&mut self) -> Result<MenuExit> {
        self.prompt_text(FieldName::Name, "Name")?;
        self.prompt_text(FieldName::Email, "Email")?;
        self.prompt_text(FieldName::Age, "Age")?;
        self.prompt_text(FieldName::Phone, "Phone")?;
        // Both address lines bind to the same field; the second entry
        // overwrites the first.
        self.prompt_text(FieldName::Address, "Address Line 1")?;
        self.prompt_text(FieldName::Address, "Address Line 2")?;
        self.prompt_password(FieldName::Password, "Password")?;
        self.prompt_password(FieldName::ConfirmPassword, "Confirm Password")?;

        if self.controller.submit() {
            println!("[*] Thanks, your registration has been recorded.");
            return Ok(MENU_EXIT);
        }

        println!("[!] Please correct the following and resubmit:");
        for (_, error) in self.controller.errors().iter() {
            println!("  - {error}");
        }
        Ok(MENU_LOOP)
    }
}

fn main() -> Result<()> {
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;

    App::new(FormController::new(LogSink)).start()
}
