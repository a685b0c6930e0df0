use crate::commands::Context;
use crate::error::{is_input_closed, CliError};
use crate::util::{format_contact_detail, format_contact_line, parse_contact_number};
use anyhow::Result;
use phonebook_core::{
    normalize_landline, normalize_mobile, Contact, ContactEdit, ContactField, ContactNew,
    CoreError, FIELD_SEPARATOR,
};
use phonebook_store::ContactService;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

type Normalizer = fn(&str) -> Result<String, CoreError>;

enum Flow {
    Continue,
    Exit,
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(
        &mut *ctx.service,
        ctx.config.page_size,
        stdin.lock(),
        stdout.lock(),
    );
    menu.run()
}

/// Interactive numbered menu over a phone book.
///
/// Reads one answer per line from `input`. End of input leaves the menu
/// the same way choosing "exit" does.
pub struct Menu<'a, R, W> {
    service: &'a mut ContactService,
    page_size: usize,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(service: &'a mut ContactService, page_size: usize, input: R, output: W) -> Self {
        Self {
            service,
            page_size: page_size.max(1),
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "1. View contacts")?;
            writeln!(self.output, "2. Add contact")?;
            writeln!(self.output, "3. Edit contact")?;
            writeln!(self.output, "4. Search contacts")?;
            writeln!(self.output, "5. Exit")?;

            let outcome = self.prompt("Choose an action: ").and_then(|choice| {
                match choice.trim() {
                    "1" => self.view(),
                    "2" => self.add(),
                    "3" => self.edit(),
                    "4" => self.search(),
                    "5" => Ok(Flow::Exit),
                    other => {
                        debug!(choice = other, "unknown menu choice");
                        writeln!(self.output, "Invalid choice, pick an action from 1 to 5.")?;
                        Ok(Flow::Continue)
                    }
                }
            });

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) if is_input_closed(&err) => break,
                Err(err) => {
                    warn!(error = %err, "menu action failed");
                    writeln!(self.output, "error: {}", err)?;
                }
            }
        }
        writeln!(self.output, "Bye.")?;
        Ok(())
    }

    fn view(&mut self) -> Result<Flow> {
        if self.service.contacts().is_empty() {
            writeln!(self.output, "The phone book is empty.")?;
            return Ok(Flow::Continue);
        }
        writeln!(self.output, "Contacts:")?;
        let lines = numbered_lines(self.service.contacts());
        self.print_paged(lines)?;
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<Flow> {
        let last_name = self.prompt_text("Last name (required): ", ContactField::LastName, true)?;
        let first_name =
            self.prompt_text("First name (required): ", ContactField::FirstName, true)?;
        let patronymic = self.prompt_text("Patronymic: ", ContactField::Patronymic, false)?;
        let organization = self.prompt_text(
            "Organization (leave empty if none): ",
            ContactField::Organization,
            false,
        )?;
        let personal_phone = self
            .prompt_phone(
                "Mobile phone (+7 (999) 999 99 99): ",
                normalize_mobile,
                false,
            )?
            .unwrap_or_default();
        let work_phone = if organization.is_empty() {
            String::new()
        } else {
            self.prompt_phone("Work phone (5 to 10 digits): ", normalize_landline, false)?
                .unwrap_or_default()
        };

        let contact = self.service.add_contact(ContactNew {
            last_name,
            first_name,
            patronymic,
            organization,
            work_phone,
            personal_phone,
        })?;
        writeln!(self.output, "Contact {} added.", contact.display_name())?;
        Ok(Flow::Continue)
    }

    fn edit(&mut self) -> Result<Flow> {
        if self.service.contacts().is_empty() {
            writeln!(self.output, "The phone book is empty.")?;
            return Ok(Flow::Continue);
        }
        let lines = numbered_lines(self.service.contacts());
        self.print_paged(lines)?;

        let raw = self.prompt("Contact number to edit: ")?;
        let index = match parse_contact_number(&raw) {
            Ok(index) if index < self.service.contacts().len() => index,
            _ => {
                writeln!(self.output, "Invalid contact number.")?;
                return Ok(Flow::Continue);
            }
        };
        let current = self.service.get(index)?.clone();

        writeln!(self.output, "Leave a field empty to keep its current value.")?;
        let last_name = self.prompt_text(
            &format!("Last name [{}]: ", current.last_name),
            ContactField::LastName,
            false,
        )?;
        let first_name = self.prompt_text(
            &format!("First name [{}]: ", current.first_name),
            ContactField::FirstName,
            false,
        )?;
        let patronymic = self.prompt_text(
            &format!("Patronymic [{}]: ", current.patronymic),
            ContactField::Patronymic,
            false,
        )?;
        let organization = self.prompt_text(
            &format!("Organization [{}]: ", current.organization),
            ContactField::Organization,
            false,
        )?;
        let personal_phone = self.prompt_phone(
            &format!("Mobile phone [{}]: ", current.personal_phone),
            normalize_mobile,
            true,
        )?;
        let has_organization = !organization.is_empty() || !current.organization.is_empty();
        let work_phone = if has_organization {
            self.prompt_phone(
                &format!("Work phone [{}]: ", current.work_phone),
                normalize_landline,
                true,
            )?
        } else {
            None
        };

        let edit = ContactEdit {
            last_name: Some(last_name),
            first_name: Some(first_name),
            patronymic: Some(patronymic),
            organization: Some(organization),
            work_phone,
            personal_phone,
        };
        let contact = self.service.edit_contact(index, &edit)?;
        writeln!(self.output, "Contact {} updated.", contact.display_name())?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let query = self.prompt("Name, last name or phone to search: ")?;
        let found: Vec<Contact> = self
            .service
            .search_contacts(&query)
            .into_iter()
            .cloned()
            .collect();
        if found.is_empty() {
            writeln!(self.output, "No contacts found.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Found contacts:")?;
        for (index, contact) in found.iter().enumerate() {
            writeln!(self.output, "{}", format_contact_line(index + 1, contact))?;
        }

        let raw = self.prompt("Number to view (or Enter to continue): ")?;
        if let Ok(index) = parse_contact_number(&raw) {
            if let Some(contact) = found.get(index) {
                for line in format_contact_detail(contact) {
                    writeln!(self.output, "{}", line)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn print_paged(&mut self, lines: Vec<String>) -> Result<()> {
        let total = lines.len();
        for (index, line) in lines.into_iter().enumerate() {
            writeln!(self.output, "{}", line)?;
            let shown = index + 1;
            if shown % self.page_size == 0 && shown < total {
                self.prompt("Press Enter to continue...")?;
            }
        }
        Ok(())
    }

    fn prompt_text(&mut self, label: &str, field: ContactField, required: bool) -> Result<String> {
        loop {
            let value = self.prompt(label)?.trim().to_string();
            if value.contains(FIELD_SEPARATOR) {
                writeln!(self.output, "{}", CoreError::FieldContainsDelimiter(field))?;
                continue;
            }
            if required && value.is_empty() {
                writeln!(self.output, "{}", CoreError::RequiredFieldMissing(field))?;
                continue;
            }
            return Ok(value);
        }
    }

    /// Re-prompts until the normalizer accepts the answer. An empty answer
    /// is returned as `None` when `allow_empty` is set.
    fn prompt_phone(
        &mut self,
        label: &str,
        normalize: Normalizer,
        allow_empty: bool,
    ) -> Result<Option<String>> {
        loop {
            let raw = self.prompt(label)?;
            if allow_empty && raw.trim().is_empty() {
                return Ok(None);
            }
            match normalize(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{}. Try again.", err)?,
            }
        }
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(CliError::InputClosed.into());
        }
        Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }
}

fn numbered_lines(contacts: &[Contact]) -> Vec<String> {
    contacts
        .iter()
        .enumerate()
        .map(|(index, contact)| format_contact_line(index + 1, contact))
        .collect()
}
