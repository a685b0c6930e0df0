use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{format_contact_detail, format_contact_line, parse_contact_number};
use anyhow::Result;
use clap::Args;
use phonebook_core::dto::ContactListItemDto;
use phonebook_core::rules::{ContactEdit, ContactNew};
use phonebook_core::Contact;
use tracing::debug;

#[derive(Debug, Args)]
pub struct AddContactArgs {
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub patronymic: String,
    #[arg(long, default_value = "")]
    pub organization: String,
    #[arg(long, default_value = "")]
    pub work_phone: String,
    #[arg(long)]
    pub personal_phone: String,
}

#[derive(Debug, Args)]
pub struct EditContactArgs {
    /// Contact number as shown by `list`
    pub number: String,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub patronymic: Option<String>,
    #[arg(long)]
    pub organization: Option<String>,
    #[arg(long)]
    pub work_phone: Option<String>,
    #[arg(long)]
    pub personal_phone: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub number: String,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Matches last/first name (any case) or the personal phone
    #[arg(default_value = "")]
    pub query: String,
}

pub fn add_contact(ctx: &mut Context<'_>, args: AddContactArgs) -> Result<()> {
    let contact = ctx.service.add_contact(ContactNew {
        last_name: args.last_name,
        first_name: args.first_name,
        patronymic: args.patronymic,
        organization: args.organization,
        work_phone: args.work_phone,
        personal_phone: args.personal_phone,
    })?;
    debug!(name = %contact.display_name(), "contact added");

    if ctx.json {
        print_json(contact)?;
    } else {
        println!("added {}", contact.display_name());
    }
    Ok(())
}

pub fn edit_contact(ctx: &mut Context<'_>, args: EditContactArgs) -> Result<()> {
    let index = parse_contact_number(&args.number)?;
    let edit = ContactEdit {
        last_name: args.last_name,
        first_name: args.first_name,
        patronymic: args.patronymic,
        organization: args.organization,
        work_phone: args.work_phone,
        personal_phone: args.personal_phone,
    };
    if edit.is_empty() {
        return Err(invalid_input("no updates provided"));
    }

    let contact = ctx.service.edit_contact(index, &edit)?;
    debug!(index, "contact edited");

    if ctx.json {
        print_json(contact)?;
    } else {
        println!("updated {} {}", index + 1, contact.display_name());
    }
    Ok(())
}

pub fn show_contact(ctx: &mut Context<'_>, args: ShowArgs) -> Result<()> {
    let index = parse_contact_number(&args.number)?;
    let contact = ctx.service.get(index)?;

    if ctx.json {
        return print_json(contact);
    }

    for line in format_contact_detail(contact) {
        println!("{}", line);
    }
    Ok(())
}

pub fn list_contacts(ctx: &mut Context<'_>) -> Result<()> {
    let hits: Vec<(usize, &Contact)> = ctx.service.contacts().iter().enumerate().collect();
    print_hits(ctx.json, &hits, "phone book is empty")
}

pub fn search_contacts(ctx: &mut Context<'_>, args: SearchArgs) -> Result<()> {
    let hits = ctx.service.search_indexed(&args.query);
    debug!(query = %args.query, hits = hits.len(), "search finished");
    print_hits(ctx.json, &hits, "no contacts found")
}

fn print_hits(json: bool, hits: &[(usize, &Contact)], empty_message: &str) -> Result<()> {
    if json {
        let items: Vec<ContactListItemDto<'_>> = hits
            .iter()
            .map(|(index, contact)| ContactListItemDto::from_index(*index, contact))
            .collect();
        return print_json(&items);
    }

    if hits.is_empty() {
        println!("{}", empty_message);
        return Ok(());
    }

    for (index, contact) in hits {
        println!("{}", format_contact_line(index + 1, contact));
    }
    Ok(())
}
