use crate::config::{Config, DueBasis};
use crate::engine::records::{CategoryTable, ContactRecord, ContactTable};
use crate::engine::{due, loader, publisher, selector, timezone};
use crate::error::{SelectionError, SelectionResult};
use crate::notify::Notifier;
use crate::sheets::TabularStore;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No contact was due; nothing written or sent.
    NothingDue,
    /// Contacts were due but the weekly maximum is zero.
    NothingSelected { due: usize },
    /// Table written and notification sent.
    Published { selected: Vec<String> },
    /// Dry run: what would have been written and sent.
    DryRun { selected: Vec<String>, body: String },
}

/// load -> select -> publish against a tabular store and a notifier.
pub struct SelectionEngine<S, N> {
    config: Config,
    tz: Tz,
    store: S,
    notifier: N,
    dry_run: bool,
}

impl<S: TabularStore, N: Notifier> SelectionEngine<S, N> {
    pub fn new(config: Config, store: S, notifier: N) -> SelectionResult<Self> {
        config.validate()?;
        let tz = config.timezone()?;
        Ok(Self {
            config,
            tz,
            store,
            notifier,
            dry_run: false,
        })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// One selection run at the current time with an entropy-seeded RNG.
    pub async fn run(&self) -> SelectionResult<RunOutcome> {
        let mut rng = StdRng::from_entropy();
        self.run_at(Utc::now(), &mut rng).await
    }

    pub async fn run_at<R: Rng + ?Sized>(
        &self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> SelectionResult<RunOutcome> {
        let sheets = &self.config.sheets;
        let mut contacts = loader::load_contacts(&self.store, &sheets.contacts_range).await?;
        let categories = loader::load_categories(&self.store, &sheets.categories_range).await?;

        // Resolved per run: DST changes it.
        let offset = timezone::offset_for(self.tz, now);
        let due = due_contacts(
            &contacts,
            &categories,
            self.config.selection.due_basis,
            now,
            &offset,
        );
        if due.is_empty() {
            tracing::info!("No one to contact this week");
            return Ok(RunOutcome::NothingDue);
        }

        let due_count = due.len();
        let selected = selector::select(due, self.config.selection.max_contacts_per_week, rng);
        if selected.is_empty() {
            tracing::info!(due = due_count, "max_contacts_per_week is 0, nothing selected");
            return Ok(RunOutcome::NothingSelected { due: due_count });
        }
        tracing::info!(due = due_count, selected = selected.len(), "contacts selected");

        let today = timezone::local_date(self.tz, now);
        let marked = publisher::apply_selection(&mut contacts, &selected, &today);
        let body = publisher::compose_body(&self.config.mail.preamble, &selected);

        if self.dry_run {
            tracing::info!(
                range = %sheets.contacts_range,
                rows = marked,
                recipient = %self.config.mail.recipient,
                names = ?selected,
                "DRY RUN: would update sheet and send notification"
            );
            return Ok(RunOutcome::DryRun { selected, body });
        }

        self.publish(&contacts, &body).await?;
        Ok(RunOutcome::Published { selected })
    }

    /// Write first, then notify. Not transactional: a send failure leaves
    /// the sheet already updated.
    async fn publish(&self, contacts: &ContactTable, body: &str) -> SelectionResult<()> {
        let range = &self.config.sheets.contacts_range;
        let rows = contacts.to_rows();
        self.store
            .write_range(range, &rows)
            .await
            .map_err(SelectionError::StoreAccess)?;
        tracing::info!(range = %range, rows = rows.len(), "contacts sheet updated");

        let mail = &self.config.mail;
        self.notifier
            .send(&mail.recipient, &mail.subject, body)
            .await
            .map_err(SelectionError::Notification)?;
        tracing::info!(recipient = %mail.recipient, "notification sent");
        Ok(())
    }
}

/// Due contacts in sheet order. Contacts whose due date cannot be computed
/// are logged and left out.
fn due_contacts<'a>(
    contacts: &'a ContactTable,
    categories: &CategoryTable,
    basis: DueBasis,
    now: DateTime<Utc>,
    offset: &str,
) -> Vec<&'a ContactRecord> {
    contacts
        .records()
        .filter(|contact| match due::is_due(contact, categories, basis, now, offset) {
            Ok(is_due) => is_due,
            Err(e) => {
                tracing::warn!(contact = %contact.name, error = %e, "skipping contact");
                false
            }
        })
        .collect()
}
