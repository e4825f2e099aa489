//! AWS EC2 SDK client wrapper.

use anyhow::Result;
use aws_config::BehaviorVersion;
use aws_sdk_ec2::Client;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::types::{InstanceState, InstanceStateChange};
use tracing::{debug, info};

use crate::ec2::instance::{InstanceRecord, contains_instance, records_from_reservations};
use crate::error::KancliError;

/// EC2 client wrapper for inventory and lifecycle operations.
///
/// Holds the SDK client and the resolved region name; every fetched
/// record is stamped with that region.
pub struct Ec2Client {
    client: Client,
    region: String,
}

impl Ec2Client {
    /// Create a client from the SDK default chain, with optional
    /// explicit profile and region.
    pub async fn new(profile: Option<&str>, region: Option<&str>) -> Result<Self> {
        let mut config_loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(profile) = profile {
            debug!("Using AWS profile: {}", profile);
            config_loader = config_loader.profile_name(profile);
        }

        if let Some(region) = region {
            debug!("Using AWS region: {}", region);
            config_loader = config_loader.region(aws_config::Region::new(region.to_string()));
        }

        let config = config_loader.load().await;
        let region = config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let client = Client::new(&config);

        info!(region = %region, "EC2 client initialized");
        Ok(Self { client, region })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Fetch the full inventory as normalized records, following
    /// continuation tokens and preserving provider order.
    pub async fn list_instances(&self) -> Result<Vec<InstanceRecord>> {
        debug!(region = %self.region, "Describing instances");

        let mut records = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let mut request = self.client.describe_instances();
            if let Some(token) = next_token.take() {
                request = request.next_token(token);
            }

            let response = request
                .send()
                .await
                .map_err(|e| KancliError::aws(DisplayErrorContext(&e)))?;

            records.extend(records_from_reservations(response.reservations(), &self.region));

            next_token = response.next_token().map(|s| s.to_string());
            if next_token.is_none() {
                break;
            }
        }

        debug!("Fetched {} instance records", records.len());
        Ok(records)
    }

    /// Check whether an instance with the given id is present in the
    /// inventory. Full fetch plus linear scan per call.
    pub async fn instance_exists(&self, instance_id: &str) -> Result<bool> {
        let records = self.list_instances().await?;
        Ok(contains_instance(&records, instance_id))
    }

    pub async fn start_instance(&self, instance_id: &str) -> Result<()> {
        info!(
            instance_id = %instance_id,
            region = %self.region,
            api_action = "StartInstances",
            "Sending start request"
        );

        let response = self
            .client
            .start_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|e| KancliError::aws(DisplayErrorContext(&e)))?;

        log_state_changes(response.starting_instances());
        Ok(())
    }

    pub async fn stop_instance(&self, instance_id: &str) -> Result<()> {
        info!(
            instance_id = %instance_id,
            region = %self.region,
            api_action = "StopInstances",
            "Sending stop request"
        );

        let response = self
            .client
            .stop_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|e| KancliError::aws(DisplayErrorContext(&e)))?;

        log_state_changes(response.stopping_instances());
        Ok(())
    }

    pub async fn terminate_instance(&self, instance_id: &str) -> Result<()> {
        info!(
            instance_id = %instance_id,
            region = %self.region,
            api_action = "TerminateInstances",
            "Sending terminate request"
        );

        let response = self
            .client
            .terminate_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|e| KancliError::aws(DisplayErrorContext(&e)))?;

        log_state_changes(response.terminating_instances());
        Ok(())
    }
}

fn log_state_changes(changes: &[InstanceStateChange]) {
    for change in changes {
        info!(
            instance_id = change.instance_id().unwrap_or("unknown"),
            previous = state_name(change.previous_state()),
            current = state_name(change.current_state()),
            "Instance state transition"
        );
    }
}

fn state_name(state: Option<&InstanceState>) -> &str {
    state
        .and_then(|s| s.name())
        .map(|n| n.as_str())
        .unwrap_or("unknown")
}
