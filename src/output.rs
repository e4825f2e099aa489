//! Instance table rendering.

use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::ec2::instance::InstanceRecord;

const ABSENT: &str = "N/A";

/// Row for the instance inventory table.
#[derive(Tabled)]
pub struct InstanceRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Type")]
    instance_type: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "PrivateIpAddress")]
    private_ip_address: String,
    #[tabled(rename = "PublicIpAddress")]
    public_ip_address: String,
}

impl From<&InstanceRecord> for InstanceRow {
    fn from(record: &InstanceRecord) -> Self {
        Self {
            id: display_or_absent(record.id.as_deref()),
            region: record.region.clone(),
            instance_type: display_or_absent(record.instance_type.as_deref()),
            state: record.state.clone(),
            private_ip_address: display_or_absent(record.private_ip_address.as_deref()),
            public_ip_address: display_or_absent(record.public_ip_address.as_deref()),
        }
    }
}

fn display_or_absent(value: Option<&str>) -> String {
    value.unwrap_or(ABSENT).to_string()
}

/// Print the inventory table and a count line.
pub fn print_instances(records: &[InstanceRecord]) {
    if records.is_empty() {
        println!("{}", "No instances found.".yellow());
        return;
    }

    let rows: Vec<InstanceRow> = records.iter().map(InstanceRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::blank());
    println!("{}", table);

    println!(
        "{} {} instance(s)",
        "Found".bright_blue().bold(),
        records.len().to_string().bright_yellow()
    );
}
