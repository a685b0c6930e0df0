use anyhow::Result;
use phonebook_config::AppConfig;
use phonebook_store::ContactService;
use serde::Serialize;
use std::io::{self, Write};

pub mod backup;
pub mod contacts;
pub mod menu;

pub struct Context<'a> {
    pub service: &'a mut ContactService,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
