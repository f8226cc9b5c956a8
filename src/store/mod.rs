//! The store facade.
//!
//! [`SerialStore`] owns the authoritative snapshot and is the only writer.
//! Explicit lifecycle: `SerialStore::new(config)` constructs it around the
//! empty default snapshot, `init().await` opens the durable store and loads
//! or seeds state. Every mutation dispatches one or more [`Command`]s; each
//! dispatch replaces the snapshot, notifies observers synchronously, and
//! kicks off a fire-and-forget persistence write.

use std::sync::{Arc, RwLock};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::commands::{self, Command};
use crate::config::StoreConfig;
use crate::db::StateDb;
use crate::events::{SubscriberSet, Subscription};
use crate::models::{
    Asn, AsnSerialAssignment, AsnStatus, Product, SerialInventory, SerialStatus,
};
use crate::queries::{self, SerialCounts};
use crate::seed;
use crate::state::{Modal, SearchScope, StateSnapshot};

struct StoreInner {
    config: StoreConfig,
    state: RwLock<StateSnapshot>,
    subscribers: SubscriberSet,
    /// `None` until `init` opens the database, or for the whole session
    /// when opening failed and the store degraded to in-memory-only.
    db: RwLock<Option<StateDb>>,
    /// Captured during `init`; persistence writes are spawned onto it.
    runtime: RwLock<Option<Handle>>,
}

/// In-memory authoritative store for serials, ASNs and products.
///
/// Cheap to clone; clones share the same state and subscriber set.
#[derive(Clone)]
pub struct SerialStore {
    inner: Arc<StoreInner>,
}

impl SerialStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                config,
                state: RwLock::new(StateSnapshot::default()),
                subscribers: SubscriberSet::new(),
                db: RwLock::new(None),
                runtime: RwLock::new(None),
            }),
        }
    }

    /// Opens the durable store and loads the persisted snapshot, seeding the
    /// fixed default dataset when none exists. Must be awaited once before
    /// any other call is meaningful.
    ///
    /// Persistence failures are logged and degrade the session to
    /// in-memory-only operation; they never fail initialization.
    pub async fn init(&self) {
        *self.inner.runtime.write().expect("runtime lock poisoned") = Some(Handle::current());

        let path = self.inner.config.db_path.clone();
        let opened = tokio::task::spawn_blocking(move || StateDb::open(&path)).await;

        let db = match opened {
            Ok(Ok(db)) => db,
            Ok(Err(err)) => {
                warn!(error = %err, "failed to open durable store; running in-memory only");
                self.seed_if_configured();
                return;
            }
            Err(err) => {
                warn!(error = %err, "durable store open task failed; running in-memory only");
                self.seed_if_configured();
                return;
            }
        };

        let loader = db.clone();
        let loaded = tokio::task::spawn_blocking(move || loader.load()).await;
        *self.inner.db.write().expect("db lock poisoned") = Some(db);

        match loaded {
            Ok(Ok(Some(snapshot))) => {
                info!(
                    serials = snapshot.serials.len(),
                    asns = snapshot.asns.len(),
                    products = snapshot.products.len(),
                    "loaded persisted state"
                );
                self.dispatch(Command::Hydrate(Box::new(snapshot)));
            }
            Ok(Ok(None)) => {
                debug!("no persisted state found");
                self.seed_if_configured();
            }
            Ok(Err(err)) => {
                warn!(error = %err, "failed to load persisted state; seeding defaults");
                self.seed_if_configured();
            }
            Err(err) => {
                warn!(error = %err, "state load task failed; seeding defaults");
                self.seed_if_configured();
            }
        }
    }

    fn seed_if_configured(&self) {
        if self.inner.config.seed_on_empty {
            info!("seeding default dataset");
            self.dispatch(Command::Hydrate(Box::new(seed::default_snapshot())));
        }
    }

    /// Applies one command: reduce, replace the snapshot, notify observers
    /// in order, then persist best-effort.
    fn dispatch(&self, command: Command) {
        let next = {
            let mut state = self.inner.state.write().expect("state lock poisoned");
            let current = std::mem::take(&mut *state);
            let next = commands::apply(current, command);
            *state = next.clone();
            next
        };

        self.inner.subscribers.notify(&next);
        self.persist(next);
    }

    /// Fire-and-forget save. Never blocks the mutation that triggered it;
    /// failures are logged and the in-memory state stays authoritative.
    fn persist(&self, snapshot: StateSnapshot) {
        let Some(db) = self.inner.db.read().expect("db lock poisoned").clone() else {
            return;
        };
        let Some(runtime) = self
            .inner
            .runtime
            .read()
            .expect("runtime lock poisoned")
            .clone()
        else {
            return;
        };

        runtime.spawn_blocking(move || {
            if let Err(err) = db.save(&snapshot) {
                warn!(error = %err, "failed to persist state snapshot");
            }
        });
    }

    // ------------------------------------------------------------------
    // Reads

    /// Defensive clone of the current snapshot.
    pub fn state(&self) -> StateSnapshot {
        self.inner.state.read().expect("state lock poisoned").clone()
    }

    /// Registers an observer: invoked synchronously once with the current
    /// snapshot, then once per subsequent mutation, in registration order.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: FnMut(&StateSnapshot) + Send + 'static,
    {
        let current = self.state();
        self.inner.subscribers.subscribe(Box::new(observer), &current)
    }

    pub fn serials_by_status(&self, status: SerialStatus) -> Vec<SerialInventory> {
        queries::serials_by_status(&self.state(), status)
    }

    pub fn serials_by_asn(&self, asn_id: &str) -> Vec<SerialInventory> {
        queries::serials_by_asn(&self.state(), asn_id)
    }

    pub fn serial_counts(&self) -> SerialCounts {
        queries::serial_counts(&self.state())
    }

    pub fn filtered_serials(&self) -> Vec<SerialInventory> {
        queries::filtered_serials(&self.state())
    }

    pub fn filtered_asns(&self) -> Vec<Asn> {
        queries::filtered_asns(&self.state())
    }

    pub fn filtered_products(&self) -> Vec<Product> {
        queries::filtered_products(&self.state())
    }

    pub fn assignments_by_asn(&self, asn_id: &str) -> Vec<AsnSerialAssignment> {
        queries::assignments_by_asn(&self.state(), asn_id)
    }

    pub fn assignments_by_serial(&self, serial_number: &str) -> Vec<AsnSerialAssignment> {
        queries::assignments_by_serial(&self.state(), serial_number)
    }

    // ------------------------------------------------------------------
    // Serial mutations

    pub fn add_serials(&self, serials: Vec<SerialInventory>) {
        debug!(count = serials.len(), "adding serials");
        self.dispatch(Command::AddSerials(serials));
    }

    pub fn update_serial(&self, updated: SerialInventory) {
        self.dispatch(Command::UpdateSerial(Box::new(updated)));
    }

    /// Deletes a serial. Serials that are `Assigned` or `Blocked` survive:
    /// the delete is absorbed as a no-op (with a warning), matching the
    /// unassigned-only lifecycle invariant.
    pub fn delete_serial(&self, serial_id: &str) {
        let guarded = self
            .state()
            .find_serial(serial_id)
            .is_some_and(|serial| serial.status != SerialStatus::Unassigned);
        if guarded {
            warn!(serial_id, "refusing to delete serial that is not unassigned");
        }
        self.dispatch(Command::DeleteSerial {
            serial_id: serial_id.to_string(),
        });
    }

    /// Direct status edit with the ASN guard: a request to mark a serial
    /// `Assigned` against an ASN that is not `Submitted` is corrected to
    /// `Blocked` by a second dispatch. Both writes are observable in
    /// sequence.
    pub fn update_serial_status(
        &self,
        serial_id: &str,
        status: SerialStatus,
        asn_id: Option<&str>,
    ) {
        self.dispatch(Command::SetSerialStatus {
            serial_id: serial_id.to_string(),
            status,
            asn_id: asn_id.map(str::to_string),
        });

        if status == SerialStatus::Assigned {
            if let Some(asn_id) = asn_id {
                let asn_status = self.state().find_asn(asn_id).map(|asn| asn.status);
                if let Some(asn_status) = asn_status {
                    if asn_status != AsnStatus::Submitted {
                        debug!(
                            serial_id,
                            asn_id,
                            %asn_status,
                            "ASN not submitted; overriding serial status to blocked"
                        );
                        self.dispatch(Command::OverrideSerialStatus {
                            serial_id: serial_id.to_string(),
                            status: SerialStatus::Blocked,
                        });
                    }
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // ASN mutations

    pub fn add_asn(&self, asn: Asn) {
        info!(asn_id = %asn.id, asn_number = %asn.asn_number, "adding ASN");
        self.dispatch(Command::AddAsn(Box::new(asn)));
    }

    /// Replaces an ASN. When the status changed, every serial number in the
    /// updated ASN's assignment list is cascaded: `Submitted` assigns,
    /// anything else blocks. One dispatch per referenced serial; the
    /// intermediate state (ASN written, serials not yet cascaded) is
    /// briefly observable.
    pub fn update_asn(&self, updated: Asn) {
        let old_status = self.state().find_asn(&updated.id).map(|asn| asn.status);
        let status_changed = old_status.map_or(false, |status| status != updated.status);

        // Assignment list captured before the ASN write lands.
        let serial_numbers: Vec<String> = updated
            .assigned_serial_numbers()
            .map(str::to_string)
            .collect();
        let asn_id = updated.id.clone();
        let new_status = updated.status;

        self.dispatch(Command::UpdateAsn(Box::new(updated)));

        if status_changed {
            let serial_status = Self::serial_status_for(new_status);
            info!(
                asn_id = %asn_id,
                new_status = %new_status,
                serials = serial_numbers.len(),
                "ASN status changed; cascading serial statuses"
            );
            for serial_number in serial_numbers {
                self.dispatch(Command::SetSerialStatusBySerialNumber {
                    serial_number,
                    status: serial_status,
                    asn_id: Some(asn_id.clone()),
                });
            }
        }
    }

    pub fn delete_asn(&self, asn_id: &str) {
        self.dispatch(Command::DeleteAsn {
            asn_id: asn_id.to_string(),
        });
    }

    /// Appends an assignment to an ASN, then immediately applies the
    /// two-way rule to the one newly assigned serial using the ASN's
    /// current status.
    pub fn add_asn_serial_assignment(&self, asn_id: &str, assignment: AsnSerialAssignment) {
        let serial_number = assignment.serial_number.clone();
        self.dispatch(Command::AddAsnSerialAssignment {
            asn_id: asn_id.to_string(),
            assignment,
        });

        let asn_status = self.state().find_asn(asn_id).map(|asn| asn.status);
        if let Some(asn_status) = asn_status {
            self.dispatch(Command::SetSerialStatusBySerialNumber {
                serial_number,
                status: Self::serial_status_for(asn_status),
                asn_id: Some(asn_id.to_string()),
            });
        }
    }

    /// Rewrites one assignment in place. Does not touch the referenced
    /// serial's status.
    pub fn update_asn_serial_assignment(
        &self,
        asn_id: &str,
        assignment_id: &str,
        assignment: AsnSerialAssignment,
    ) {
        self.dispatch(Command::UpdateAsnSerialAssignment {
            asn_id: asn_id.to_string(),
            assignment_id: assignment_id.to_string(),
            assignment,
        });
    }

    /// Removes one assignment. Does not touch the referenced serial's
    /// status: a serial marked `Assigned`/`Blocked` when the assignment was
    /// added keeps that status after removal.
    pub fn delete_asn_serial_assignment(&self, asn_id: &str, assignment_id: &str) {
        self.dispatch(Command::DeleteAsnSerialAssignment {
            asn_id: asn_id.to_string(),
            assignment_id: assignment_id.to_string(),
        });
    }

    fn serial_status_for(asn_status: AsnStatus) -> SerialStatus {
        if asn_status == AsnStatus::Submitted {
            SerialStatus::Assigned
        } else {
            SerialStatus::Blocked
        }
    }

    // ------------------------------------------------------------------
    // Product mutations

    pub fn add_product(&self, product: Product) {
        self.dispatch(Command::AddProduct(Box::new(product)));
    }

    pub fn update_product(&self, updated: Product) {
        self.dispatch(Command::UpdateProduct(Box::new(updated)));
    }

    pub fn delete_product(&self, product_id: &str) {
        self.dispatch(Command::DeleteProduct {
            product_id: product_id.to_string(),
        });
    }

    // ------------------------------------------------------------------
    // UI substate

    pub fn set_active_tab(&self, tab: impl Into<String>) {
        self.dispatch(Command::SetActiveTab(tab.into()));
    }

    pub fn set_selected_serial(&self, serial: Option<SerialInventory>) {
        self.dispatch(Command::SetSelectedSerial(serial.map(Box::new)));
    }

    pub fn set_selected_asn(&self, asn: Option<Asn>) {
        self.dispatch(Command::SetSelectedAsn(asn.map(Box::new)));
    }

    pub fn set_selected_product(&self, product: Option<Product>) {
        self.dispatch(Command::SetSelectedProduct(product.map(Box::new)));
    }

    pub fn set_search_term(&self, scope: SearchScope, term: impl Into<String>) {
        self.dispatch(Command::SetSearchTerm {
            scope,
            term: term.into(),
        });
    }

    pub fn set_serial_status_filter(&self, filter: Option<SerialStatus>) {
        self.dispatch(Command::SetSerialStatusFilter(filter));
    }

    pub fn set_asn_status_filter(&self, filter: Option<AsnStatus>) {
        self.dispatch(Command::SetAsnStatusFilter(filter));
    }

    pub fn toggle_modal(&self, modal: Modal, open: Option<bool>) {
        self.dispatch(Command::ToggleModal { modal, open });
    }

    // ------------------------------------------------------------------
    // System substate

    pub fn set_loading(&self, loading: bool) {
        self.dispatch(Command::SetLoading(loading));
    }

    pub fn add_error(&self, error: impl Into<String>) {
        self.dispatch(Command::AddError(error.into()));
    }

    pub fn clear_errors(&self) {
        self.dispatch(Command::ClearErrors);
    }
}
