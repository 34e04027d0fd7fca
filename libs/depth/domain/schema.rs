//! Table schema descriptor handed to hosts that want column metadata.
//! Purely descriptive: it never decides which messages are accepted.

use serde::{Deserialize, Serialize};

/// Column type as named by the table host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerDataType {
    String,
    Long,
    Double,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub name: String,
    pub server_data_type: ServerDataType,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, server_data_type: ServerDataType) -> Self {
        Self {
            name: name.into(),
            server_data_type,
        }
    }
}

/// Which table on the host this schema describes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    pub table: String,
    pub module: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub table: TableRef,
    pub columns: Vec<ColumnDescriptor>,
    /// Row identity column
    pub key: String,
}

impl TableSchema {
    /// Schema of the market depth ladder
    pub fn market_depth() -> Self {
        Self {
            table: TableRef {
                table: "Trading_Table".to_string(),
                module: "UI_Frontend".to_string(),
            },
            columns: vec![
                ColumnDescriptor::new("symbolLevel", ServerDataType::String),
                ColumnDescriptor::new("level", ServerDataType::Long),
                ColumnDescriptor::new("bid", ServerDataType::Long),
                ColumnDescriptor::new("bidQuantity", ServerDataType::Long),
                ColumnDescriptor::new("offer", ServerDataType::Long),
                ColumnDescriptor::new("offerQuantity", ServerDataType::Long),
            ],
            key: "symbolLevel".to_string(),
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for TableSchema {
    fn default() -> Self {
        Self::market_depth()
    }
}
