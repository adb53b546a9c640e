// libnbt/src/prelude.rs

pub use crate::configuration::{presets, Configuration, ConfigurationBuilder};
pub use crate::protocol::{Apdu, Command, Response};
pub use crate::tag::{Active, Inactive, ResponseGuard, Tag, TagBuilder};
pub use crate::transport::{MockTransport, SimulatedTag, Transport};
pub use crate::{
    AccessCondition, Application, CommunicationInterface, ConfigurationTag, Error, ErrorKind,
    FileAccessPolicy, FileId, GpioFunction, Operation, Result, StatusWord,
};
