use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{map_scan_error, InitError, ScanError};

/// A table row. The store owns the schema, we only read attributes.
pub type Item = HashMap<String, AttributeValue>;

/// A single page of scan results.
#[derive(Debug, Clone, Default)]
pub struct ScanPage {
    pub items: Vec<Item>,
    /// The store has more rows than this page returned.
    pub truncated: bool,
}

#[async_trait]
pub trait TableScanner: Send + Sync {
    async fn scan(&self) -> Result<ScanPage, ScanError>;
}

/// Builds a DynamoDB client for the configured region.
///
/// An empty region defers to the SDK's default provider chain; if that
/// resolves nothing either, there is no client to build.
async fn connect(config: &Config) -> Result<Client, InitError> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if !config.region.is_empty() {
        loader = loader.region(Region::new(config.region.clone()));
    }
    let sdk_config = loader.load().await;

    if sdk_config.region().is_none() {
        return Err(InitError::MissingRegion);
    }

    Ok(Client::new(&sdk_config))
}

pub struct DynamoTable {
    client: Option<Client>,
    table_name: Option<String>,
}

impl DynamoTable {
    pub fn new(client: Option<Client>, table_name: Option<String>) -> Self {
        Self { client, table_name }
    }

    /// Connects once at startup. A failed connection is logged and leaves
    /// the handle unset; every scan then fails with `ScanError::Unavailable`.
    pub async fn open(config: &Config) -> Self {
        info!(
            region = %config.region,
            table = config.table_name.as_deref().unwrap_or_default(),
            "initializing table handle"
        );

        let client = match connect(config).await {
            Ok(client) => Some(client),
            Err(e) => {
                error!(error = %e, "failed to create DynamoDB client");
                None
            }
        };

        let table = Self::new(client, config.table_name.clone());
        info!(connected = table.is_connected(), "table handle initialized");
        table
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }
}

#[async_trait]
impl TableScanner for DynamoTable {
    async fn scan(&self) -> Result<ScanPage, ScanError> {
        let client = self.client.as_ref().ok_or(ScanError::Unavailable)?;

        // single page, no filter or projection
        let output = client
            .scan()
            .set_table_name(self.table_name.clone())
            .send()
            .await
            .map_err(map_scan_error)?;

        Ok(ScanPage {
            truncated: output.last_evaluated_key.is_some(),
            items: output.items.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unset_handle_fails_scan() {
        let table = DynamoTable::new(None, Some("products".to_string()));

        assert!(!table.is_connected());
        assert!(matches!(table.scan().await, Err(ScanError::Unavailable)));
    }

    #[test]
    fn handle_with_client_is_connected() {
        use aws_sdk_dynamodb::config::{BehaviorVersion, Region};

        let sdk_config = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        let table = DynamoTable::new(
            Some(Client::from_conf(sdk_config)),
            Some("products".to_string()),
        );

        assert!(table.is_connected());
    }
}
