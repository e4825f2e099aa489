//! Instance record normalization.
//!
//! Maps the deeply nested DescribeInstances response shape into flat,
//! stable records. The mapping is total: a missing member on the raw
//! instance becomes an absent field on the record, never an error.

use aws_sdk_ec2::types::{Instance, Reservation};
use aws_smithy_types::date_time::Format;

/// Constant cloud tag stamped on every record.
pub const CLOUD: &str = "aws";

/// Flattened, normalized representation of one EC2 instance.
///
/// Built fresh per fetch and immutable afterwards. Optional fields are
/// absent exactly when the provider omitted the corresponding member.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceRecord {
    pub cloud: &'static str,
    pub region: String,
    /// Provider lifecycle state name, `"unknown"` if the provider
    /// omitted it.
    pub state: String,
    pub id: Option<String>,
    pub instance_type: Option<String>,
    pub image_id: Option<String>,
    /// Launch time rendered as RFC 3339.
    pub launch_time: Option<String>,
    pub subnet_id: Option<String>,
    pub vpc_id: Option<String>,
    pub private_dns_name: Option<String>,
    pub private_ip_address: Option<String>,
    pub public_dns_name: Option<String>,
    pub public_ip_address: Option<String>,
    pub root_device_name: Option<String>,
    pub root_device_type: Option<String>,
    /// Security group names. Absent when the member is absent, which is
    /// distinct from present-but-empty.
    pub security_groups: Option<Vec<String>>,
    /// Populated only when `state` is neither `running` nor `pending`.
    pub state_reason: Option<String>,
    /// From network interface index 0; further interfaces are
    /// deliberately not reported.
    pub mac_address: Option<String>,
    pub network_interface_id: Option<String>,
    /// Always present, possibly empty.
    pub tags: Vec<(String, String)>,
}

/// Normalize one raw instance into a flat record.
///
/// Pure and total: no I/O, no error path.
pub fn normalize(instance: &Instance, region: &str) -> InstanceRecord {
    let state = instance
        .state()
        .and_then(|s| s.name())
        .map(|n| n.as_str().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let state_reason = abnormal_state_reason(instance, &state);
    let first_interface = instance.network_interfaces().first();

    InstanceRecord {
        cloud: CLOUD,
        region: region.to_string(),
        state,
        id: instance.instance_id().map(str::to_string),
        instance_type: instance.instance_type().map(|t| t.as_str().to_string()),
        image_id: instance.image_id().map(str::to_string),
        launch_time: instance
            .launch_time()
            .and_then(|t| t.fmt(Format::DateTime).ok()),
        subnet_id: instance.subnet_id().map(str::to_string),
        vpc_id: instance.vpc_id().map(str::to_string),
        private_dns_name: instance.private_dns_name().map(str::to_string),
        private_ip_address: instance.private_ip_address().map(str::to_string),
        public_dns_name: instance.public_dns_name().map(str::to_string),
        public_ip_address: instance.public_ip_address().map(str::to_string),
        root_device_name: instance.root_device_name().map(str::to_string),
        root_device_type: instance.root_device_type().map(|t| t.as_str().to_string()),
        security_groups: instance.security_groups.as_ref().map(|groups| {
            groups
                .iter()
                .filter_map(|g| g.group_name())
                .map(str::to_string)
                .collect()
        }),
        state_reason,
        mac_address: first_interface
            .and_then(|ni| ni.mac_address())
            .map(str::to_string),
        network_interface_id: first_interface
            .and_then(|ni| ni.network_interface_id())
            .map(str::to_string),
        tags: instance
            .tags()
            .iter()
            .map(|t| {
                (
                    t.key().unwrap_or_default().to_string(),
                    t.value().unwrap_or_default().to_string(),
                )
            })
            .collect(),
    }
}

/// A state reason is only meaningful for abnormal or transitional
/// states; `running` and `pending` never carry one.
fn abnormal_state_reason(instance: &Instance, state: &str) -> Option<String> {
    if state == "running" || state == "pending" {
        return None;
    }
    instance
        .state_reason()
        .and_then(|r| r.message())
        .map(str::to_string)
}

/// Flatten reservation groups into normalized records, preserving
/// provider order: reservations in response order, instances in
/// reservation order.
pub fn records_from_reservations(
    reservations: &[Reservation],
    region: &str,
) -> Vec<InstanceRecord> {
    reservations
        .iter()
        .flat_map(|r| r.instances())
        .map(|i| normalize(i, region))
        .collect()
}

/// Exact-match linear scan over the record id field.
pub fn contains_instance(records: &[InstanceRecord], instance_id: &str) -> bool {
    records
        .iter()
        .any(|r| r.id.as_deref() == Some(instance_id))
}
