// libnbt/src/operations/policy.rs

use log::{debug, error, info, trace};

use crate::configuration::{self, Configuration};
use crate::constants::FAP_RECORD_COUNT;
use crate::operations::interface::set_configuration_tag;
use crate::operations::select::{select_application, select_configurator_application};
use crate::protocol::{decode_policies, Command};
use crate::tag::{Active, Tag};
use crate::types::{ConfigurationTag, FileAccessPolicy, FileId};
use crate::{Error, Result};

/// Read the tag's policy table. The operational application must be
/// selected.
pub fn read_policies(tag: &mut Tag<Active>) -> Result<[FileAccessPolicy; FAP_RECORD_COUNT]> {
    let guard = tag.exchange(&Command::GetFileAccessPolicies)?;
    decode_policies(guard.data()).map_err(|e| {
        error!("policy table rejected: {}", e);
        e
    })
}

/// Bring the tag's policies in line with `desired`, updating only the
/// files whose record differs. Returns the files that were updated.
///
/// The desired set is validated before anything is sent. Policies updated
/// before a failing update stay updated.
pub fn reconcile_policies(
    tag: &mut Tag<Active>,
    desired: &[FileAccessPolicy],
) -> Result<Vec<FileId>> {
    configuration::validate_policies(desired)?;

    select_application(tag)?;
    let current = read_policies(tag)?;

    let mut updated = Vec::new();
    for policy in desired {
        let Some(existing) = current.iter().find(|p| p.file_id == policy.file_id) else {
            error!("no access policy on tag for file {}", policy.file_id);
            return Err(Error::PolicyNotFound {
                file_id: policy.file_id,
            });
        };

        if existing.matches(policy) {
            trace!("policy for {} already up to date", policy.file_id);
            continue;
        }

        debug!("updating policy for {}", policy.file_id);
        tag.exchange(&Command::UpdateFileAccessPolicy { policy: *policy })?;
        updated.push(policy.file_id);
    }
    Ok(updated)
}

/// Apply a full configuration: reconcile policies under the operational
/// application, then set the interface and GPIO tags under the
/// configurator application.
pub fn configure(tag: &mut Tag<Active>, config: &Configuration) -> Result<Vec<FileId>> {
    config.validate()?;

    let updated = reconcile_policies(tag, &config.policies)?;
    info!("{} access policies updated", updated.len());

    select_configurator_application(tag)?;
    set_configuration_tag(
        tag,
        ConfigurationTag::CommunicationInterface,
        config.communication_interface as u8,
    )?;
    set_configuration_tag(tag, ConfigurationTag::GpioFunction, config.irq_function as u8)?;
    Ok(updated)
}
