//! State-transition commands and the reducer that applies them.
//!
//! Every mutation of the store is a tagged [`Command`] variant applied by the
//! pure [`apply`] function. Compound operations (the ASN status cascade, the
//! assignment side-effect, the direct-status guard) are sequences of
//! commands dispatched by the store facade, each externally observable.

use chrono::Utc;

use crate::models::{Asn, AsnSerialAssignment, AsnStatus, Product, SerialInventory, SerialStatus};
use crate::state::{Modal, SearchScope, StateSnapshot};

/// One state transition.
#[derive(Clone, Debug)]
pub enum Command {
    /// Replaces the whole snapshot, used when loading persisted state.
    Hydrate(Box<StateSnapshot>),

    // Serial inventory
    AddSerials(Vec<SerialInventory>),
    UpdateSerial(Box<SerialInventory>),
    /// No-op unless the serial exists and is `Unassigned`.
    DeleteSerial { serial_id: String },
    /// Rewrites status, asn link and updated_date of one serial by id.
    SetSerialStatus {
        serial_id: String,
        status: SerialStatus,
        asn_id: Option<String>,
    },
    /// Corrective rewrite of status only; the asn link is left as written by
    /// the preceding `SetSerialStatus`.
    OverrideSerialStatus {
        serial_id: String,
        status: SerialStatus,
    },
    /// Cascade step: rewrites every serial matching the serial number.
    SetSerialStatusBySerialNumber {
        serial_number: String,
        status: SerialStatus,
        asn_id: Option<String>,
    },

    // ASNs
    AddAsn(Box<Asn>),
    UpdateAsn(Box<Asn>),
    DeleteAsn { asn_id: String },
    AddAsnSerialAssignment {
        asn_id: String,
        assignment: AsnSerialAssignment,
    },
    UpdateAsnSerialAssignment {
        asn_id: String,
        assignment_id: String,
        assignment: AsnSerialAssignment,
    },
    DeleteAsnSerialAssignment {
        asn_id: String,
        assignment_id: String,
    },

    // Products
    AddProduct(Box<Product>),
    UpdateProduct(Box<Product>),
    DeleteProduct { product_id: String },

    // UI substate
    SetActiveTab(String),
    SetSelectedSerial(Option<Box<SerialInventory>>),
    SetSelectedAsn(Option<Box<Asn>>),
    SetSelectedProduct(Option<Box<Product>>),
    SetSearchTerm { scope: SearchScope, term: String },
    SetSerialStatusFilter(Option<SerialStatus>),
    SetAsnStatusFilter(Option<AsnStatus>),
    /// `open: None` toggles the current flag.
    ToggleModal { modal: Modal, open: Option<bool> },

    // System substate
    SetLoading(bool),
    AddError(String),
    ClearErrors,
}

/// Applies one command to a snapshot, returning the next snapshot.
///
/// Unknown ids fall through untouched; callers pre-validate existence.
/// `system.last_updated` is refreshed on every application.
pub fn apply(snapshot: StateSnapshot, command: Command) -> StateSnapshot {
    let mut next = snapshot;

    match command {
        Command::Hydrate(loaded) => {
            next = *loaded;
        }

        Command::AddSerials(serials) => {
            next.serials.extend(serials);
        }
        Command::UpdateSerial(updated) => {
            for serial in &mut next.serials {
                if serial.id == updated.id {
                    *serial = (*updated).clone();
                }
            }
        }
        Command::DeleteSerial { serial_id } => {
            next.serials.retain(|serial| {
                serial.id != serial_id || serial.status != SerialStatus::Unassigned
            });
        }
        Command::SetSerialStatus {
            serial_id,
            status,
            asn_id,
        } => {
            let now = Utc::now();
            for serial in &mut next.serials {
                if serial.id == serial_id {
                    serial.status = status;
                    serial.asn_id = asn_id.clone();
                    serial.updated_date = now;
                }
            }
        }
        Command::OverrideSerialStatus { serial_id, status } => {
            let now = Utc::now();
            for serial in &mut next.serials {
                if serial.id == serial_id {
                    serial.status = status;
                    serial.updated_date = now;
                }
            }
        }
        Command::SetSerialStatusBySerialNumber {
            serial_number,
            status,
            asn_id,
        } => {
            let now = Utc::now();
            for serial in &mut next.serials {
                if serial.serial_number == serial_number {
                    serial.status = status;
                    serial.asn_id = asn_id.clone();
                    serial.updated_date = now;
                }
            }
        }

        Command::AddAsn(asn) => {
            next.asns.push(*asn);
        }
        Command::UpdateAsn(updated) => {
            for asn in &mut next.asns {
                if asn.id == updated.id {
                    *asn = (*updated).clone();
                }
            }
        }
        Command::DeleteAsn { asn_id } => {
            next.asns.retain(|asn| asn.id != asn_id);
        }
        Command::AddAsnSerialAssignment { asn_id, assignment } => {
            let now = Utc::now();
            for asn in &mut next.asns {
                if asn.id == asn_id {
                    asn.serial_assignments.push(assignment.clone());
                    asn.updated_date = now;
                }
            }
        }
        Command::UpdateAsnSerialAssignment {
            asn_id,
            assignment_id,
            assignment,
        } => {
            let now = Utc::now();
            for asn in &mut next.asns {
                if asn.id == asn_id {
                    for existing in &mut asn.serial_assignments {
                        if existing.id == assignment_id {
                            *existing = assignment.clone();
                        }
                    }
                    asn.updated_date = now;
                }
            }
        }
        Command::DeleteAsnSerialAssignment {
            asn_id,
            assignment_id,
        } => {
            let now = Utc::now();
            for asn in &mut next.asns {
                if asn.id == asn_id {
                    asn.serial_assignments
                        .retain(|assignment| assignment.id != assignment_id);
                    asn.updated_date = now;
                }
            }
        }

        Command::AddProduct(product) => {
            next.products.push(*product);
        }
        Command::UpdateProduct(updated) => {
            for product in &mut next.products {
                if product.id == updated.id {
                    *product = (*updated).clone();
                }
            }
        }
        Command::DeleteProduct { product_id } => {
            next.products.retain(|product| product.id != product_id);
        }

        Command::SetActiveTab(tab) => {
            next.ui.active_tab = tab;
        }
        Command::SetSelectedSerial(serial) => {
            next.ui.selected_serial = serial.map(|boxed| *boxed);
        }
        Command::SetSelectedAsn(asn) => {
            next.ui.selected_asn = asn.map(|boxed| *boxed);
        }
        Command::SetSelectedProduct(product) => {
            next.ui.selected_product = product.map(|boxed| *boxed);
        }
        Command::SetSearchTerm { scope, term } => match scope {
            SearchScope::Serials => next.ui.search_terms.serials = term,
            SearchScope::Asns => next.ui.search_terms.asns = term,
            SearchScope::Products => next.ui.search_terms.products = term,
        },
        Command::SetSerialStatusFilter(filter) => {
            next.ui.filters.serial_status = filter;
        }
        Command::SetAsnStatusFilter(filter) => {
            next.ui.filters.asn_status = filter;
        }
        Command::ToggleModal { modal, open } => {
            let current = next.ui.modals.get(modal);
            next.ui.modals.set(modal, open.unwrap_or(!current));
        }

        Command::SetLoading(loading) => {
            next.system.loading = loading;
        }
        Command::AddError(error) => {
            next.system.errors.push(error);
        }
        Command::ClearErrors => {
            next.system.errors.clear();
        }
    }

    next.touch();
    next
}
