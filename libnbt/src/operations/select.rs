// libnbt/src/operations/select.rs

use log::debug;

use crate::protocol::Command;
use crate::tag::{Active, Tag};
use crate::types::{Application, FileId};
use crate::Result;

/// Select the operational (NBT) application.
pub fn select_application(tag: &mut Tag<Active>) -> Result<()> {
    select(tag, Application::Nbt)
}

/// Select the configurator application.
pub fn select_configurator_application(tag: &mut Tag<Active>) -> Result<()> {
    select(tag, Application::Configurator)
}

fn select(tag: &mut Tag<Active>, application: Application) -> Result<()> {
    debug!("selecting {}", application);
    tag.exchange(&Command::SelectApplication { application })?;
    Ok(())
}

/// Select a file of the operational application.
pub fn select_file(tag: &mut Tag<Active>, file_id: FileId) -> Result<()> {
    debug!("selecting file {}", file_id);
    tag.exchange(&Command::SelectFile { file_id })?;
    Ok(())
}

/// Select a file by its raw identifier. Identifiers outside the tag's file
/// system are rejected before anything is sent.
pub fn select_file_id(tag: &mut Tag<Active>, file_id: u16) -> Result<FileId> {
    let file_id = FileId::try_from(file_id)?;
    select_file(tag, file_id)?;
    Ok(file_id)
}
