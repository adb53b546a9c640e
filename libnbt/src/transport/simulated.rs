// libnbt/src/transport/simulated.rs

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::constants::*;
use crate::protocol::{Apdu, Blob, Response};
use crate::transport::traits::Transport;
use crate::types::{Application, ConfigurationTag, FileAccessPolicy, FileId};
use crate::{Error, Result};

/// Activation bytes reported by a simulated tag.
pub const SIMULATED_ATPO: [u8; 6] = [0x3B, 0x8C, 0x80, 0x01, 0x4E, 0x42];

/// Status word forced on a future command.
#[derive(Debug, Clone, Copy)]
struct Fault {
    ins: u8,
    skip: usize,
    sw: u16,
}

#[derive(Debug)]
struct State {
    selected_application: Option<Application>,
    selected_file: Option<FileId>,
    files: BTreeMap<FileId, Vec<u8>>,
    policies: Vec<FileAccessPolicy>,
    configuration: BTreeMap<u8, u8>,
    pass_through_inbox: VecDeque<Vec<u8>>,
    pass_through_outbox: Vec<Response>,
    commands: Vec<Apdu>,
    pending: Option<Vec<u8>>,
    fault: Option<Fault>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            selected_application: None,
            selected_file: None,
            files: FileId::ALL
                .iter()
                .map(|&id| (id, vec![0u8; FILE_SIZE_LIMIT]))
                .collect(),
            policies: FileId::ALL
                .iter()
                .map(|&id| FileAccessPolicy::open(id))
                .collect(),
            configuration: BTreeMap::new(),
            pass_through_inbox: VecDeque::new(),
            pass_through_outbox: Vec::new(),
            commands: Vec::new(),
            pending: None,
            fault: None,
        }
    }
}

/// In-memory tag that interprets the command set over the I2C side.
///
/// Clones share state: keep one clone for inspection and box the other
/// as the tag's transport.
#[derive(Debug, Clone, Default)]
pub struct SimulatedTag {
    state: Arc<Mutex<State>>,
}

impl SimulatedTag {
    /// Fresh tag: zeroed files, every policy open, no configuration set.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current policy table, in the order the tag reports it.
    pub fn policies(&self) -> Vec<FileAccessPolicy> {
        self.state().policies.clone()
    }

    /// Replace the whole policy table, including its reporting order.
    pub fn set_policies(&self, policies: Vec<FileAccessPolicy>) {
        self.state().policies = policies;
    }

    pub fn set_policy(&self, policy: FileAccessPolicy) {
        let mut state = self.state();
        match state.policies.iter_mut().find(|p| p.file_id == policy.file_id) {
            Some(current) => *current = policy,
            None => state.policies.push(policy),
        }
    }

    /// Full contents of a file.
    pub fn file(&self, file_id: FileId) -> Vec<u8> {
        self.state().files.get(&file_id).cloned().unwrap_or_default()
    }

    /// Overwrite part of a file directly, bypassing access policies.
    pub fn load_file(&self, file_id: FileId, offset: usize, data: &[u8]) {
        let mut state = self.state();
        if let Some(file) = state.files.get_mut(&file_id) {
            let end = (offset + data.len()).min(file.len());
            if offset < end {
                file[offset..end].copy_from_slice(&data[..end - offset]);
            }
        }
    }

    /// Raw value of a configuration tag, if it has been set.
    pub fn configuration(&self, tag: ConfigurationTag) -> Option<u8> {
        self.state().configuration.get(&(tag as u8)).copied()
    }

    pub fn selected_application(&self) -> Option<Application> {
        self.state().selected_application
    }

    /// Queue an APDU arriving over the pass-through channel.
    pub fn push_pass_through_apdu(&self, apdu: &Apdu) -> Result<()> {
        let blob = Blob::encode(&apdu.encode()?)?;
        self.push_pass_through_raw(blob);
        Ok(())
    }

    /// Queue raw fetch data, blob framing included.
    pub fn push_pass_through_raw(&self, data: Vec<u8>) {
        self.state().pass_through_inbox.push_back(data);
    }

    /// Responses forwarded back through the pass-through channel.
    pub fn pass_through_responses(&self) -> Vec<Response> {
        self.state().pass_through_outbox.clone()
    }

    /// Every command received, in order.
    pub fn commands(&self) -> Vec<Apdu> {
        self.state().commands.clone()
    }

    /// Number of commands received with the given instruction byte.
    pub fn count(&self, ins: u8) -> usize {
        self.state().commands.iter().filter(|c| c.ins == ins).count()
    }

    pub fn clear_commands(&self) {
        self.state().commands.clear();
    }

    /// Answer the command with instruction `ins` with `sw` after `skip`
    /// such commands have been served normally.
    pub fn fail_after(&self, ins: u8, skip: usize, sw: u16) {
        self.state().fault = Some(Fault { ins, skip, sw });
    }
}

impl State {
    fn handle(&mut self, raw: &[u8]) -> Response {
        let apdu = match Apdu::decode(raw) {
            Ok(apdu) => apdu,
            Err(_) => return Response::status(SW_WRONG_LENGTH),
        };
        self.commands.push(apdu.clone());

        if let Some(fault) = self.fault.as_mut() {
            if fault.ins == apdu.ins {
                if fault.skip == 0 {
                    let sw = fault.sw;
                    self.fault = None;
                    return Response::status(sw);
                }
                fault.skip -= 1;
            }
        }

        match (apdu.cla, apdu.ins) {
            (CLA_ISO, INS_SELECT) => self.select(&apdu),
            (CLA_ISO, INS_READ_BINARY) => self.read_binary(&apdu),
            (CLA_ISO, INS_UPDATE_BINARY) => self.update_binary(&apdu),
            (CLA_PROPRIETARY, INS_GET_DATA) => self.get_policies(&apdu),
            (CLA_PROPRIETARY, INS_PUT_DATA) => self.update_policy(&apdu),
            (CLA_PROPRIETARY, INS_SET_CONFIGURATION) => self.set_configuration(&apdu),
            (CLA_PROPRIETARY, INS_PASS_THROUGH_FETCH_DATA) => self.fetch_data(),
            (CLA_PROPRIETARY, INS_PASS_THROUGH_PUT_RESPONSE) => self.put_response(&apdu),
            (CLA_ISO, _) | (CLA_PROPRIETARY, _) => Response::status(SW_INS_NOT_SUPPORTED),
            _ => Response::status(SW_CLA_NOT_SUPPORTED),
        }
    }

    fn select(&mut self, apdu: &Apdu) -> Response {
        match (apdu.p1, apdu.p2) {
            (P1_SELECT_BY_NAME, _) => {
                let application = [Application::Nbt, Application::Configurator]
                    .into_iter()
                    .find(|app| app.aid() == apdu.data.as_slice());
                match application {
                    Some(app) => {
                        self.selected_application = Some(app);
                        self.selected_file = None;
                        Response::status(SW_SUCCESS)
                    }
                    None => Response::status(SW_FILE_NOT_FOUND),
                }
            }
            (P1_SELECT_BY_FILE_ID, P2_SELECT_NO_RESPONSE) => {
                if self.selected_application != Some(Application::Nbt) {
                    return Response::status(SW_CONDITIONS_NOT_SATISFIED);
                }
                if apdu.data.len() != 2 {
                    return Response::status(SW_WRONG_LENGTH);
                }
                match FileId::try_from(u16::from_be_bytes([apdu.data[0], apdu.data[1]])) {
                    Ok(file_id) => {
                        self.selected_file = Some(file_id);
                        Response::status(SW_SUCCESS)
                    }
                    Err(_) => Response::status(SW_FILE_NOT_FOUND),
                }
            }
            _ => Response::status(SW_WRONG_P1P2),
        }
    }

    /// Selected file and byte range addressed by a binary command.
    fn binary_target(&self, apdu: &Apdu, len: usize) -> std::result::Result<(FileId, usize), u16> {
        let file_id = self.selected_file.ok_or(SW_COMMAND_NOT_ALLOWED)?;
        let offset = (apdu.p1p2() & 0x7FFF) as usize;
        if offset + len > FILE_SIZE_LIMIT {
            return Err(SW_WRONG_P1P2);
        }
        Ok((file_id, offset))
    }

    fn policy(&self, file_id: FileId) -> Option<&FileAccessPolicy> {
        self.policies.iter().find(|p| p.file_id == file_id)
    }

    fn read_binary(&mut self, apdu: &Apdu) -> Response {
        let len = apdu.le.unwrap_or(0) as usize;
        let (file_id, offset) = match self.binary_target(apdu, len) {
            Ok(target) => target,
            Err(sw) => return Response::status(sw),
        };
        if !self.policy(file_id).is_some_and(|p| p.i2c_read.is_open()) {
            return Response::status(SW_SECURITY_STATUS_NOT_SATISFIED);
        }
        match self.files.get(&file_id) {
            Some(file) => Response::success(&file[offset..offset + len]),
            None => Response::status(SW_FILE_NOT_FOUND),
        }
    }

    fn update_binary(&mut self, apdu: &Apdu) -> Response {
        let (file_id, offset) = match self.binary_target(apdu, apdu.data.len()) {
            Ok(target) => target,
            Err(sw) => return Response::status(sw),
        };
        if !self.policy(file_id).is_some_and(|p| p.i2c_write.is_open()) {
            return Response::status(SW_SECURITY_STATUS_NOT_SATISFIED);
        }
        match self.files.get_mut(&file_id) {
            Some(file) => {
                file[offset..offset + apdu.data.len()].copy_from_slice(&apdu.data);
                Response::status(SW_SUCCESS)
            }
            None => Response::status(SW_FILE_NOT_FOUND),
        }
    }

    fn get_policies(&self, apdu: &Apdu) -> Response {
        if self.selected_application != Some(Application::Nbt) {
            return Response::status(SW_CONDITIONS_NOT_SATISFIED);
        }
        if apdu.p1p2() != FileId::FileAccessPolicy.as_u16() {
            return Response::status(SW_REFERENCED_DATA_NOT_FOUND);
        }
        let table: Vec<u8> = self.policies.iter().flat_map(|p| p.encode()).collect();
        Response::success(table)
    }

    fn update_policy(&mut self, apdu: &Apdu) -> Response {
        if self.selected_application != Some(Application::Nbt) {
            return Response::status(SW_CONDITIONS_NOT_SATISFIED);
        }
        let policy = match FileAccessPolicy::decode(&apdu.data) {
            Ok(policy) => policy,
            Err(Error::InvalidLength { .. }) => return Response::status(SW_WRONG_LENGTH),
            Err(_) => return Response::status(SW_WRONG_DATA),
        };
        match self.policies.iter_mut().find(|p| p.file_id == policy.file_id) {
            Some(current) => {
                *current = policy;
                Response::status(SW_SUCCESS)
            }
            None => Response::status(SW_REFERENCED_DATA_NOT_FOUND),
        }
    }

    fn set_configuration(&mut self, apdu: &Apdu) -> Response {
        if self.selected_application != Some(Application::Configurator) {
            return Response::status(SW_CONDITIONS_NOT_SATISFIED);
        }
        let [tag, len, value] = match apdu.data.as_slice() {
            &[tag, len, value] => [tag, len, value],
            _ => return Response::status(SW_WRONG_LENGTH),
        };
        if len != 1 {
            return Response::status(SW_WRONG_LENGTH);
        }
        let valid = match ConfigurationTag::from_byte(tag) {
            Some(ConfigurationTag::CommunicationInterface) => (0x01..=0x03).contains(&value),
            Some(ConfigurationTag::GpioFunction) => value <= 0x03,
            None => return Response::status(SW_REFERENCED_DATA_NOT_FOUND),
        };
        if !valid {
            return Response::status(SW_WRONG_DATA);
        }
        self.configuration.insert(tag, value);
        Response::status(SW_SUCCESS)
    }

    fn fetch_data(&mut self) -> Response {
        match self.pass_through_inbox.pop_front() {
            Some(data) => Response::success(data),
            None => Response::status(SW_REFERENCED_DATA_NOT_FOUND),
        }
    }

    fn put_response(&mut self, apdu: &Apdu) -> Response {
        match Blob::decode(&apdu.data).and_then(|inner| Response::decode(&inner)) {
            Ok(response) => {
                self.pass_through_outbox.push(response);
                Response::status(SW_SUCCESS)
            }
            Err(_) => Response::status(SW_WRONG_DATA),
        }
    }
}

impl Transport for SimulatedTag {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut state = self.state();
        let response = state.handle(data);
        state.pending = Some(response.encode());
        Ok(())
    }

    fn receive(&mut self, _timeout_ms: u64) -> Result<Vec<u8>> {
        self.state().pending.take().ok_or(Error::Timeout)
    }

    fn reset(&mut self) -> Result<()> {
        let mut state = self.state();
        state.selected_application = None;
        state.selected_file = None;
        state.pending = None;
        Ok(())
    }

    fn activate(&mut self) -> Result<Vec<u8>> {
        self.reset()?;
        Ok(SIMULATED_ATPO.to_vec())
    }
}
