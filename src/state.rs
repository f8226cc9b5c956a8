//! The authoritative state tree.
//!
//! A [`StateSnapshot`] is the complete, point-in-time state: all entities in
//! insertion order plus transient UI and system substate. Mutation only ever
//! happens by replacing the whole snapshot; observers receive read-only
//! clones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Asn, AsnStatus, Product, SerialInventory, SerialStatus};

/// Which entity list a search term applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    Serials,
    Asns,
    Products,
}

/// Modal dialogs the UI layer can toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modal {
    SerialDetail,
    AsnDetail,
    AddSerial,
    AddAsn,
    AssignSerials,
    UploadChildSerials,
    ImportSerials,
}

/// Free-text search terms, one per entity list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerms {
    #[serde(default)]
    pub serials: String,
    #[serde(default)]
    pub asns: String,
    #[serde(default)]
    pub products: String,
}

/// Active list filters. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub serial_status: Option<SerialStatus>,
    #[serde(default)]
    pub asn_status: Option<AsnStatus>,
}

/// Visibility flags for the UI's modal dialogs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalFlags {
    #[serde(default)]
    pub serial_detail: bool,
    #[serde(default)]
    pub asn_detail: bool,
    #[serde(default)]
    pub add_serial: bool,
    #[serde(default)]
    pub add_asn: bool,
    #[serde(default)]
    pub assign_serials: bool,
    #[serde(default)]
    pub upload_child_serials: bool,
    #[serde(default)]
    pub import_serials: bool,
}

impl ModalFlags {
    pub fn get(&self, modal: Modal) -> bool {
        match modal {
            Modal::SerialDetail => self.serial_detail,
            Modal::AsnDetail => self.asn_detail,
            Modal::AddSerial => self.add_serial,
            Modal::AddAsn => self.add_asn,
            Modal::AssignSerials => self.assign_serials,
            Modal::UploadChildSerials => self.upload_child_serials,
            Modal::ImportSerials => self.import_serials,
        }
    }

    pub fn set(&mut self, modal: Modal, open: bool) {
        match modal {
            Modal::SerialDetail => self.serial_detail = open,
            Modal::AsnDetail => self.asn_detail = open,
            Modal::AddSerial => self.add_serial = open,
            Modal::AddAsn => self.add_asn = open,
            Modal::AssignSerials => self.assign_serials = open,
            Modal::UploadChildSerials => self.upload_child_serials = open,
            Modal::ImportSerials => self.import_serials = open,
        }
    }
}

/// Transient UI substate. Persisted with the snapshot but authoritative only
/// for the current session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    #[serde(default = "default_active_tab")]
    pub active_tab: String,
    #[serde(default)]
    pub selected_serial: Option<SerialInventory>,
    #[serde(default)]
    pub selected_asn: Option<Asn>,
    #[serde(default)]
    pub selected_product: Option<Product>,
    #[serde(default)]
    pub search_terms: SearchTerms,
    #[serde(default)]
    pub filters: Filters,
    #[serde(default)]
    pub modals: ModalFlags,
}

fn default_active_tab() -> String {
    "products".to_string()
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_tab: default_active_tab(),
            selected_serial: None,
            selected_asn: None,
            selected_product: None,
            search_terms: SearchTerms::default(),
            filters: Filters::default(),
            modals: ModalFlags::default(),
        }
    }
}

/// System substate: loading flag, last mutation time, accumulated errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemState {
    #[serde(default)]
    pub loading: bool,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            loading: false,
            last_updated: Utc::now(),
            errors: Vec::new(),
        }
    }
}

/// The complete state tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(default)]
    pub serials: Vec<SerialInventory>,
    #[serde(default)]
    pub asns: Vec<Asn>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub ui: UiState,
    #[serde(default)]
    pub system: SystemState,
}

impl StateSnapshot {
    /// Refreshes `system.last_updated` to the current instant. Called on
    /// every applied command.
    pub fn touch(&mut self) {
        self.system.last_updated = Utc::now();
    }

    pub fn find_asn(&self, asn_id: &str) -> Option<&Asn> {
        self.asns.iter().find(|asn| asn.id == asn_id)
    }

    pub fn find_serial(&self, serial_id: &str) -> Option<&SerialInventory> {
        self.serials.iter().find(|serial| serial.id == serial_id)
    }
}
