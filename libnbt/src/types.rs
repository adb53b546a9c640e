// libnbt/src/types.rs

use derive_more::Display;

use crate::constants::{
    ACCESS_ALWAYS, ACCESS_NEVER, ACCESS_PASSWORD_BASE, ACCESS_PASSWORD_ID_MASK,
    CONFIGURATOR_APPLICATION_AID, FAP_RECORD_LEN, NBT_APPLICATION_AID, SW_SUCCESS,
};
use crate::{Error, Result};

/// File identifiers of the tag's closed file system.
#[repr(u16)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileId {
    /// NFC capability container.
    #[display(fmt = "CC (0xE103)")]
    CapabilityContainer = 0xE103,
    #[display(fmt = "NDEF (0xE104)")]
    Ndef = 0xE104,
    /// File access policy file.
    #[display(fmt = "FAP (0xE1AF)")]
    FileAccessPolicy = 0xE1AF,
    #[display(fmt = "proprietary 1 (0xE1A1)")]
    Proprietary1 = 0xE1A1,
    #[display(fmt = "proprietary 2 (0xE1A2)")]
    Proprietary2 = 0xE1A2,
    #[display(fmt = "proprietary 3 (0xE1A3)")]
    Proprietary3 = 0xE1A3,
    #[display(fmt = "proprietary 4 (0xE1A4)")]
    Proprietary4 = 0xE1A4,
}

impl FileId {
    /// Every file the tag exposes, in the order the tag reports policies.
    pub const ALL: [FileId; 7] = [
        FileId::CapabilityContainer,
        FileId::Ndef,
        FileId::FileAccessPolicy,
        FileId::Proprietary1,
        FileId::Proprietary2,
        FileId::Proprietary3,
        FileId::Proprietary4,
    ];

    /// Raw 16-bit identifier.
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    pub const fn to_be_bytes(self) -> [u8; 2] {
        (self as u16).to_be_bytes()
    }
}

impl TryFrom<u16> for FileId {
    type Error = Error;

    fn try_from(raw: u16) -> Result<Self> {
        FileId::ALL
            .iter()
            .copied()
            .find(|id| id.as_u16() == raw)
            .ok_or(Error::UnknownFileId(raw))
    }
}

/// Access condition for one operation over one interface.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessCondition {
    /// Access always granted.
    #[display(fmt = "ALWAYS")]
    Always,
    /// Access never granted.
    #[display(fmt = "NEVER")]
    Never,
    /// Access granted after presenting the password with the given id (0..=31).
    #[display(fmt = "PASSWORD({})", _0)]
    Password(u8),
}

impl AccessCondition {
    /// Highest password id the record encoding can carry.
    pub const MAX_PASSWORD_ID: u8 = ACCESS_PASSWORD_ID_MASK;

    /// Reject password ids that do not fit the five id bits of the record.
    pub fn validate(self) -> Result<()> {
        match self {
            Self::Password(id) if id > Self::MAX_PASSWORD_ID => Err(Error::InvalidArgument(
                format!("password id {} exceeds {}", id, Self::MAX_PASSWORD_ID),
            )),
            _ => Ok(()),
        }
    }

    /// Record byte for this condition. Call [`AccessCondition::validate`]
    /// first: ids above 31 lose their high bits.
    pub fn to_byte(self) -> u8 {
        match self {
            Self::Always => ACCESS_ALWAYS,
            Self::Never => ACCESS_NEVER,
            Self::Password(id) => ACCESS_PASSWORD_BASE | (id & ACCESS_PASSWORD_ID_MASK),
        }
    }

    /// Parse a record byte.
    pub fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            ACCESS_ALWAYS => Ok(Self::Always),
            ACCESS_NEVER => Ok(Self::Never),
            b if b & !ACCESS_PASSWORD_ID_MASK == ACCESS_PASSWORD_BASE => {
                Ok(Self::Password(b & ACCESS_PASSWORD_ID_MASK))
            }
            other => Err(Error::InvalidRecord(format!(
                "unknown access condition {:#04x}",
                other
            ))),
        }
    }

    /// Whether access is granted without presenting a password.
    pub fn is_open(self) -> bool {
        self == Self::Always
    }
}

/// Per-file permission record governing read/write access over I2C and NFC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileAccessPolicy {
    /// File the record governs.
    pub file_id: FileId,
    pub i2c_read: AccessCondition,
    pub i2c_write: AccessCondition,
    pub nfc_read: AccessCondition,
    pub nfc_write: AccessCondition,
}

impl FileAccessPolicy {
    pub fn new(
        file_id: FileId,
        i2c_read: AccessCondition,
        i2c_write: AccessCondition,
        nfc_read: AccessCondition,
        nfc_write: AccessCondition,
    ) -> Self {
        Self {
            file_id,
            i2c_read,
            i2c_write,
            nfc_read,
            nfc_write,
        }
    }

    /// Build a policy from a raw 16-bit file identifier, rejecting ids
    /// outside the tag's file system and password ids above 31.
    pub fn try_new(
        file_id: u16,
        i2c_read: AccessCondition,
        i2c_write: AccessCondition,
        nfc_read: AccessCondition,
        nfc_write: AccessCondition,
    ) -> Result<Self> {
        let file_id = FileId::try_from(file_id)?;
        let policy = Self::new(file_id, i2c_read, i2c_write, nfc_read, nfc_write);
        policy.validate()?;
        Ok(policy)
    }

    /// Check every condition of the record.
    pub fn validate(&self) -> Result<()> {
        for condition in [self.i2c_read, self.i2c_write, self.nfc_read, self.nfc_write] {
            condition.validate().map_err(|e| {
                Error::InvalidArgument(format!("policy for {}: {}", self.file_id, e))
            })?;
        }
        Ok(())
    }

    /// Policy granting every access over both interfaces.
    pub fn open(file_id: FileId) -> Self {
        use AccessCondition::Always;
        Self::new(file_id, Always, Always, Always, Always)
    }

    /// Policy denying every access over both interfaces.
    pub fn locked(file_id: FileId) -> Self {
        use AccessCondition::Never;
        Self::new(file_id, Never, Never, Never, Never)
    }

    /// Encode into the 6-byte record layout:
    /// file_id(2, BE) + i2c_read + i2c_write + nfc_read + nfc_write
    pub fn encode(&self) -> [u8; FAP_RECORD_LEN] {
        let [hi, lo] = self.file_id.to_be_bytes();
        [
            hi,
            lo,
            self.i2c_read.to_byte(),
            self.i2c_write.to_byte(),
            self.nfc_read.to_byte(),
            self.nfc_write.to_byte(),
        ]
    }

    pub fn decode(record: &[u8]) -> Result<Self> {
        if record.len() != FAP_RECORD_LEN {
            return Err(Error::InvalidLength {
                expected: FAP_RECORD_LEN,
                actual: record.len(),
            });
        }
        let raw_id = u16::from_be_bytes([record[0], record[1]]);
        let file_id = FileId::try_from(raw_id).map_err(|_| {
            Error::InvalidRecord(format!("record for unknown file {:#06x}", raw_id))
        })?;
        Ok(Self::new(
            file_id,
            AccessCondition::from_byte(record[2])?,
            AccessCondition::from_byte(record[3])?,
            AccessCondition::from_byte(record[4])?,
            AccessCondition::from_byte(record[5])?,
        ))
    }

    /// Byte-for-byte comparison of the encoded records.
    pub fn matches(&self, other: &Self) -> bool {
        self.encode() == other.encode()
    }
}

/// Two-byte status word terminating every response.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:#06x}", _0)]
pub struct StatusWord(u16);

impl StatusWord {
    /// Normal completion, 0x9000.
    pub const SUCCESS: Self = Self(SW_SUCCESS);

    pub const fn new(sw: u16) -> Self {
        Self(sw)
    }

    pub const fn from_bytes(sw1: u8, sw2: u8) -> Self {
        Self(u16::from_be_bytes([sw1, sw2]))
    }

    pub const fn as_u16(self) -> u16 {
        self.0
    }

    pub const fn to_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Whether this is 0x9000.
    pub const fn is_success(self) -> bool {
        self.0 == SW_SUCCESS
    }
}

impl From<u16> for StatusWord {
    fn from(sw: u16) -> Self {
        Self(sw)
    }
}

/// On-tag applications that can be selected.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Application {
    /// Operational application owning the file system.
    #[display(fmt = "NBT application")]
    Nbt,
    /// Configurator application owning tag-wide settings.
    #[display(fmt = "configurator application")]
    Configurator,
}

impl Application {
    pub fn aid(self) -> &'static [u8] {
        match self {
            Self::Nbt => &NBT_APPLICATION_AID,
            Self::Configurator => &CONFIGURATOR_APPLICATION_AID,
        }
    }
}

/// Tag-wide configuration tags handled by the configurator application.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigurationTag {
    #[display(fmt = "communication interface")]
    CommunicationInterface = 0x01,
    #[display(fmt = "GPIO function")]
    GpioFunction = 0x02,
}

impl ConfigurationTag {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Self::CommunicationInterface),
            0x02 => Some(Self::GpioFunction),
            _ => None,
        }
    }
}

/// Which physical interfaces may access the tag.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommunicationInterface {
    #[display(fmt = "NFC enabled, I2C enabled")]
    NfcEnabledI2cEnabled = 0x03,
    #[display(fmt = "NFC enabled, I2C disabled")]
    NfcEnabledI2cDisabled = 0x02,
    #[display(fmt = "NFC disabled, I2C enabled")]
    NfcDisabledI2cEnabled = 0x01,
}

/// Function of the GPIO/IRQ pin.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GpioFunction {
    #[display(fmt = "disabled")]
    Disabled = 0x00,
    #[display(fmt = "NFC session active output")]
    SessionActive = 0x01,
    #[display(fmt = "I2C IRQ output")]
    I2cIrq = 0x02,
    #[display(fmt = "pass-through IRQ output")]
    PassThroughIrq = 0x03,
}

/// Exchange kinds, carried by protocol errors for diagnostics.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    #[display(fmt = "select application")]
    SelectApplication,
    #[display(fmt = "select file")]
    SelectFile,
    #[display(fmt = "read binary")]
    ReadBinary,
    #[display(fmt = "update binary")]
    UpdateBinary,
    #[display(fmt = "read file access policies")]
    ReadPolicies,
    #[display(fmt = "update file access policy")]
    UpdatePolicy,
    #[display(fmt = "set configuration")]
    SetConfiguration,
    #[display(fmt = "pass-through fetch data")]
    PassThroughFetch,
    #[display(fmt = "pass-through put response")]
    PassThroughPut,
}
