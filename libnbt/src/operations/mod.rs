// libnbt/src/operations/mod.rs

pub mod file;
pub mod interface;
pub mod ndef;
pub mod pass_through;
pub mod policy;
pub mod select;

// Re-export the operations at the module root so callers can use
// `libnbt::operations::read_file(...)` directly.
pub use file::{read_file, read_file_to_vec, write_file};
pub use interface::{set_communication_interface, set_gpio_function};
pub use ndef::{read_ndef_message, write_ndef_message};
pub use pass_through::{get_passthrough_apdu, set_passthrough_response};
pub use policy::{configure, read_policies, reconcile_policies};
pub use select::{select_application, select_configurator_application, select_file, select_file_id};

use crate::configuration::Configuration;
use crate::constants::FAP_RECORD_COUNT;
use crate::protocol::{Apdu, Response};
use crate::tag::{Active, Tag};
use crate::types::{CommunicationInterface, FileAccessPolicy, FileId, GpioFunction};
use crate::Result;

impl Tag<Active> {
    pub fn select_application(&mut self) -> Result<()> {
        select::select_application(self)
    }

    pub fn select_configurator_application(&mut self) -> Result<()> {
        select::select_configurator_application(self)
    }

    pub fn select_file(&mut self, file_id: FileId) -> Result<()> {
        select::select_file(self, file_id)
    }

    pub fn select_file_id(&mut self, file_id: u16) -> Result<FileId> {
        select::select_file_id(self, file_id)
    }

    pub fn read_policies(&mut self) -> Result<[FileAccessPolicy; FAP_RECORD_COUNT]> {
        policy::read_policies(self)
    }

    /// See [`policy::reconcile_policies`].
    pub fn reconcile_policies(&mut self, desired: &[FileAccessPolicy]) -> Result<Vec<FileId>> {
        policy::reconcile_policies(self, desired)
    }

    /// See [`policy::configure`].
    pub fn configure(&mut self, config: &Configuration) -> Result<Vec<FileId>> {
        policy::configure(self, config)
    }

    pub fn read_file(&mut self, file_id: FileId, offset: u16, buf: &mut [u8]) -> Result<()> {
        file::read_file(self, file_id, offset, buf)
    }

    pub fn read_file_to_vec(&mut self, file_id: FileId, offset: u16, length: usize) -> Result<Vec<u8>> {
        file::read_file_to_vec(self, file_id, offset, length)
    }

    pub fn write_file(&mut self, file_id: FileId, offset: u16, data: &[u8]) -> Result<()> {
        file::write_file(self, file_id, offset, data)
    }

    pub fn set_communication_interface(&mut self, interface: CommunicationInterface) -> Result<()> {
        interface::set_communication_interface(self, interface)
    }

    pub fn set_gpio_function(&mut self, function: GpioFunction) -> Result<()> {
        interface::set_gpio_function(self, function)
    }

    pub fn get_passthrough_apdu(&mut self) -> Result<Apdu> {
        pass_through::get_passthrough_apdu(self)
    }

    pub fn set_passthrough_response(&mut self, response: &Response) -> Result<()> {
        pass_through::set_passthrough_response(self, response)
    }

    pub fn write_ndef_message(&mut self, message: &[u8]) -> Result<()> {
        ndef::write_ndef_message(self, message)
    }

    pub fn read_ndef_message(&mut self) -> Result<Vec<u8>> {
        ndef::read_ndef_message(self)
    }
}
