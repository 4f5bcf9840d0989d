//! Wizard controller: orchestrates step transitions and keeps the draft
//! consistent
//!
//! Every mutation funnels through [`WizardController::apply`], which
//! merges the change into the aggregate draft and immediately persists
//! the whole draft, so the stored copy is never more than one
//! synchronous step stale. Navigation forward validates the current
//! step's slice; navigation backward never does.

use uuid::Uuid;

use crate::activity::{ActivityEntry, ActivityLogger, WizardEvent};
use crate::error::{OnSplitError, OnSplitResult};
use crate::models::{
    DetailsPatch, Expense, ExpenseDraft, LineItem, LineItemId, MemberId, Receipt, ReceiptId,
    SplitData,
};
use crate::storage::DraftStore;

use super::gateway::{CancelToken, CommitRequest, CommitReceipt, RetryPolicy, SettlementGateway};
use super::steps::{by_ordinal, registry, step_count, FieldErrors, StepDefinition, StepId};

/// Lifecycle phase of the wizard session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    /// Steps are editable and navigable
    Editing,
    /// A submit is in flight; mutation is latched out
    Submitting,
    /// The draft committed; the session is terminal
    Completed,
}

/// Outcome of a forward navigation attempt
#[derive(Debug)]
pub enum NextOutcome {
    /// Moved to the next step
    Advanced(&'static StepDefinition),
    /// Already on the last step and it validates; submit is the next move
    ReadyToSubmit,
    /// The current step failed validation; state is unchanged
    Invalid(FieldErrors),
}

/// A typed mutation of one step's slice of the draft
#[derive(Debug, Clone)]
pub enum DraftUpdate {
    /// Shallow-merge into the details slice
    Details(DetailsPatch),
    /// Add a receipt attachment
    AttachReceipt(Receipt),
    /// Remove a receipt by id
    RemoveReceipt(ReceiptId),
    /// Replace the split slice
    SetSplit(SplitData),
    /// Insert or replace a line item
    UpsertItem(LineItem),
    /// Remove a line item by id
    RemoveItem(LineItemId),
    /// Add assignees to an existing line item
    AssignItem {
        item: LineItemId,
        members: Vec<MemberId>,
    },
    /// Select a payment method by catalog id
    SetPaymentMethod(String),
}

impl DraftUpdate {
    /// The step that owns the slice this update touches
    pub fn step(&self) -> StepId {
        match self {
            Self::Details(_) => StepId::Details,
            Self::AttachReceipt(_) | Self::RemoveReceipt(_) => StepId::Receipts,
            Self::SetSplit(_) => StepId::Split,
            Self::UpsertItem(_) | Self::RemoveItem(_) | Self::AssignItem { .. } => StepId::Items,
            Self::SetPaymentMethod(_) => StepId::Payment,
        }
    }
}

/// Orchestrates one wizard session over an injected draft store
pub struct WizardController<S: DraftStore> {
    store: S,
    draft: ExpenseDraft,
    phase: WizardPhase,
    activity: Option<ActivityLogger>,
}

impl<S: DraftStore> WizardController<S> {
    /// Create a controller, hydrating a previously saved draft if present
    ///
    /// A saved step index outside the registry is clamped into range.
    pub fn new(store: S) -> Self {
        Self::init(store, None)
    }

    /// Create a controller that records wizard events to `logger`
    pub fn with_activity(store: S, logger: ActivityLogger) -> Self {
        Self::init(store, Some(logger))
    }

    fn init(store: S, activity: Option<ActivityLogger>) -> Self {
        let (draft, resumed) = match store.load() {
            Some(mut draft) => {
                draft.current_step = draft.current_step.min(step_count() - 1);
                (draft, true)
            }
            None => (ExpenseDraft::default(), false),
        };

        let controller = Self {
            store,
            draft,
            phase: WizardPhase::Editing,
            activity,
        };

        if resumed {
            controller.log(WizardEvent::DraftResumed {
                step: controller.current_step().id.as_str().to_string(),
            });
        } else {
            controller.log(WizardEvent::DraftStarted);
        }

        controller
    }

    /// The draft being built
    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// Check whether a submit is in flight
    pub fn is_submitting(&self) -> bool {
        self.phase == WizardPhase::Submitting
    }

    /// Check whether the session reached its terminal state
    pub fn is_completed(&self) -> bool {
        self.phase == WizardPhase::Completed
    }

    /// The step the wizard is currently on
    pub fn current_step(&self) -> &'static StepDefinition {
        &registry()[self.draft.current_step]
    }

    /// Fraction of the flow completed, `current index / step count`
    pub fn progress(&self) -> f64 {
        self.draft.current_step as f64 / step_count() as f64
    }

    /// Validate the current step without navigating
    pub fn validate_current(&self) -> Result<(), FieldErrors> {
        (self.current_step().validate)(&self.draft)
    }

    /// Give the store back, consuming the controller
    pub fn into_store(self) -> S {
        self.store
    }

    /// Apply a typed update to the slice it belongs to and persist
    ///
    /// This is the single mutation path; the persisted draft always
    /// matches the in-memory draft once this returns.
    pub fn apply(&mut self, update: DraftUpdate) -> OnSplitResult<()> {
        self.guard_editable()?;
        let step = update.step();

        match update {
            DraftUpdate::Details(patch) => {
                patch.apply_to(&mut self.draft.expense_data);
            }
            DraftUpdate::AttachReceipt(receipt) => {
                self.draft.attach_receipt(receipt);
            }
            DraftUpdate::RemoveReceipt(id) => {
                if !self.draft.remove_receipt(id) {
                    return Err(OnSplitError::NotFound {
                        entity_type: "Receipt",
                        identifier: id.to_string(),
                    });
                }
            }
            DraftUpdate::SetSplit(split) => {
                self.draft.split_data = split;
            }
            DraftUpdate::UpsertItem(item) => {
                self.draft.upsert_item(item);
            }
            DraftUpdate::RemoveItem(id) => {
                if !self.draft.remove_item(id) {
                    return Err(OnSplitError::NotFound {
                        entity_type: "Line item",
                        identifier: id.to_string(),
                    });
                }
            }
            DraftUpdate::AssignItem { item, members } => {
                match self.draft.itemized_data.iter_mut().find(|i| i.id == item) {
                    Some(line_item) => line_item.assign(members),
                    None => {
                        return Err(OnSplitError::NotFound {
                            entity_type: "Line item",
                            identifier: item.to_string(),
                        })
                    }
                }
            }
            DraftUpdate::SetPaymentMethod(id) => {
                self.draft.payment_method = Some(id);
            }
        }

        self.store.save(&self.draft);
        self.log(WizardEvent::SliceUpdated {
            step: step.as_str().to_string(),
        });
        Ok(())
    }

    /// Validate the current step and advance if it passes
    ///
    /// On validation failure the step index is unchanged and nothing is
    /// persisted. A valid last step reports [`NextOutcome::ReadyToSubmit`]
    /// instead of advancing.
    pub fn go_next(&mut self) -> OnSplitResult<NextOutcome> {
        self.guard_editable()?;

        let step = self.current_step();
        if let Err(errors) = (step.validate)(&self.draft) {
            self.log(WizardEvent::ValidationFailed {
                step: step.id.as_str().to_string(),
                fields: errors.fields(),
            });
            return Ok(NextOutcome::Invalid(errors));
        }

        if self.draft.current_step + 1 >= step_count() {
            return Ok(NextOutcome::ReadyToSubmit);
        }

        let from = step.id;
        self.draft.current_step += 1;
        self.store.save(&self.draft);

        let to = self.current_step();
        self.log(WizardEvent::StepAdvanced {
            from: from.as_str().to_string(),
            to: to.id.as_str().to_string(),
        });
        Ok(NextOutcome::Advanced(to))
    }

    /// Move one step backward, floored at the first step
    ///
    /// Backward navigation never validates.
    pub fn go_back(&mut self) -> OnSplitResult<&'static StepDefinition> {
        self.guard_editable()?;

        if self.draft.current_step > 0 {
            let from = self.current_step().id;
            self.draft.current_step -= 1;
            self.log(WizardEvent::SteppedBack {
                from: from.as_str().to_string(),
                to: self.current_step().id.as_str().to_string(),
            });
        }
        self.store.save(&self.draft);

        Ok(self.current_step())
    }

    /// Jump to a step by 1-based ordinal
    ///
    /// Permitted for any visited step or the immediate next one; jumping
    /// further ahead fails with the state unchanged.
    pub fn go_to_step(&mut self, ordinal: usize) -> OnSplitResult<&'static StepDefinition> {
        self.guard_editable()?;

        let target = by_ordinal(ordinal).ok_or_else(|| {
            OnSplitError::Validation(format!(
                "No such step: {} (steps run 1-{})",
                ordinal,
                step_count()
            ))
        })?;

        let current_ordinal = self.current_step().ordinal;
        if ordinal > current_ordinal + 1 {
            return Err(OnSplitError::Validation(format!(
                "Cannot skip ahead to step {}; next reachable step is {}",
                ordinal,
                current_ordinal + 1
            )));
        }

        self.draft.current_step = target.ordinal - 1;
        self.store.save(&self.draft);
        self.log(WizardEvent::JumpedToStep {
            to: target.id.as_str().to_string(),
        });
        Ok(target)
    }

    /// Submit the completed draft through the settlement gateway
    ///
    /// Validates the review step, then attempts the commit under the
    /// retry policy, checking `cancel` before every attempt. On success
    /// the stored draft is cleared and the session completes; on failure
    /// or cancellation the draft is preserved and the latch resets.
    pub fn submit(
        &mut self,
        gateway: &dyn SettlementGateway,
        policy: &RetryPolicy,
        cancel: &CancelToken,
    ) -> OnSplitResult<CommitReceipt> {
        match self.phase {
            WizardPhase::Submitting => {
                return Err(OnSplitError::Draft("A submit is already in progress".into()))
            }
            WizardPhase::Completed => {
                return Err(OnSplitError::Draft(
                    "This expense was already submitted".into(),
                ))
            }
            WizardPhase::Editing => {}
        }

        let review = &registry()[step_count() - 1];
        if let Err(errors) = (review.validate)(&self.draft) {
            self.log(WizardEvent::ValidationFailed {
                step: review.id.as_str().to_string(),
                fields: errors.fields(),
            });
            return Err(OnSplitError::Validation(errors.to_string()));
        }

        self.phase = WizardPhase::Submitting;

        // One idempotency key per submit session, reused across retries
        let request = CommitRequest {
            expense: Expense::from_draft(&self.draft, Uuid::new_v4()),
        };

        let mut attempt = 1;
        loop {
            if cancel.is_cancelled() {
                self.phase = WizardPhase::Editing;
                self.log(WizardEvent::SubmitFailed {
                    reason: "cancelled".to_string(),
                });
                return Err(OnSplitError::Commit(
                    "Submit cancelled; the draft was preserved".into(),
                ));
            }

            self.log(WizardEvent::SubmitAttempted { attempt });
            match gateway.commit(&request) {
                Ok(receipt) => {
                    self.store.clear();
                    self.phase = WizardPhase::Completed;
                    self.log(WizardEvent::SubmitSucceeded {
                        expense_id: receipt.expense_id.to_string(),
                    });
                    return Ok(receipt);
                }
                Err(err) => {
                    if err.is_retryable() && attempt < policy.max_attempts {
                        std::thread::sleep(policy.backoff_for(attempt));
                        attempt += 1;
                        continue;
                    }

                    self.phase = WizardPhase::Editing;
                    self.log(WizardEvent::SubmitFailed {
                        reason: err.to_string(),
                    });
                    return Err(OnSplitError::Commit(err.to_string()));
                }
            }
        }
    }

    /// Abandon the session: clear the stored draft and reset in place
    pub fn cancel_draft(&mut self) -> OnSplitResult<()> {
        if self.phase == WizardPhase::Submitting {
            return Err(OnSplitError::Draft("A submit is in progress".into()));
        }

        self.store.clear();
        self.draft = ExpenseDraft::default();
        self.phase = WizardPhase::Editing;
        self.log(WizardEvent::DraftCancelled);
        Ok(())
    }

    fn guard_editable(&self) -> OnSplitResult<()> {
        match self.phase {
            WizardPhase::Editing => Ok(()),
            WizardPhase::Submitting => {
                Err(OnSplitError::Draft("A submit is in progress".into()))
            }
            WizardPhase::Completed => Err(OnSplitError::Draft(
                "This expense was already submitted".into(),
            )),
        }
    }

    // Activity logging is best-effort; failures never interrupt the flow
    fn log(&self, event: WizardEvent) {
        if let Some(logger) = &self.activity {
            let _ = logger.log(&ActivityEntry::now(event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SplitData};
    use crate::storage::MemoryDraftStore;
    use crate::wizard::gateway::CommitError;
    use std::cell::Cell;

    /// Gateway that fails a configured number of times before succeeding
    struct FlakyGateway {
        failures_left: Cell<u32>,
        error: CommitError,
        committed: Cell<u32>,
    }

    impl FlakyGateway {
        fn failing(times: u32, error: CommitError) -> Self {
            Self {
                failures_left: Cell::new(times),
                error,
                committed: Cell::new(0),
            }
        }

        fn reliable() -> Self {
            Self::failing(0, CommitError::Unavailable("unused".into()))
        }
    }

    impl SettlementGateway for FlakyGateway {
        fn commit(&self, request: &CommitRequest) -> Result<CommitReceipt, CommitError> {
            let left = self.failures_left.get();
            if left > 0 {
                self.failures_left.set(left - 1);
                return Err(self.error.clone());
            }
            self.committed.set(self.committed.get() + 1);
            Ok(CommitReceipt {
                expense_id: request.expense.id,
                message: "ok".to_string(),
                committed_at: request.expense.committed_at,
            })
        }
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_backoff: std::time::Duration::ZERO,
        }
    }

    fn fill_valid_draft(controller: &mut WizardController<MemoryDraftStore>) -> Vec<MemberId> {
        let members = vec![MemberId::new(), MemberId::new(), MemberId::new(), MemberId::new()];
        controller
            .apply(DraftUpdate::Details(DetailsPatch {
                title: Some("Dinner".to_string()),
                amount: Some(Money::from_cents(10000)),
                ..Default::default()
            }))
            .unwrap();
        controller
            .apply(DraftUpdate::SetSplit(SplitData::equal(
                Money::from_cents(10000),
                &members,
            )))
            .unwrap();
        controller
            .apply(DraftUpdate::SetPaymentMethod("wallet-usdc".to_string()))
            .unwrap();
        members
    }

    #[test]
    fn test_fresh_controller_starts_at_step_one() {
        let controller = WizardController::new(MemoryDraftStore::new());
        assert_eq!(controller.current_step().ordinal, 1);
        assert_eq!(controller.phase(), WizardPhase::Editing);
        assert!(controller.draft().expense_data.title.is_empty());
    }

    #[test]
    fn test_apply_persists_every_mutation() {
        let mut controller = WizardController::new(MemoryDraftStore::new());

        controller
            .apply(DraftUpdate::Details(DetailsPatch {
                title: Some("Dinner".to_string()),
                ..Default::default()
            }))
            .unwrap();
        assert_eq!(controller.store.load().unwrap(), *controller.draft());

        controller
            .apply(DraftUpdate::SetPaymentMethod("card".to_string()))
            .unwrap();
        assert_eq!(controller.store.load().unwrap(), *controller.draft());
    }

    #[test]
    fn test_go_next_blocked_by_validation() {
        let mut controller = WizardController::new(MemoryDraftStore::new());

        let outcome = controller.go_next().unwrap();
        match outcome {
            NextOutcome::Invalid(errors) => {
                assert!(errors.get("title").is_some());
                assert!(errors.get("amount").is_some());
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
        // Index unchanged and nothing persisted
        assert_eq!(controller.current_step().ordinal, 1);
        assert!(controller.store.load().is_none());
    }

    #[test]
    fn test_go_next_advances_when_valid() {
        let mut controller = WizardController::new(MemoryDraftStore::new());
        fill_valid_draft(&mut controller);

        let outcome = controller.go_next().unwrap();
        match outcome {
            NextOutcome::Advanced(step) => assert_eq!(step.ordinal, 2),
            other => panic!("expected Advanced, got {:?}", other),
        }
        assert_eq!(controller.store.load().unwrap().current_step, 1);
    }

    #[test]
    fn test_go_back_floors_at_first_step() {
        let mut controller = WizardController::new(MemoryDraftStore::new());

        let step = controller.go_back().unwrap();
        assert_eq!(step.ordinal, 1);
        assert_eq!(controller.current_step().ordinal, 1);
    }

    #[test]
    fn test_go_back_never_validates() {
        let mut controller = WizardController::new(MemoryDraftStore::new());
        fill_valid_draft(&mut controller);
        controller.go_next().unwrap();

        // Wreck the details slice, then navigate backward anyway
        controller
            .apply(DraftUpdate::Details(DetailsPatch {
                title: Some(String::new()),
                ..Default::default()
            }))
            .unwrap();
        let step = controller.go_back().unwrap();
        assert_eq!(step.ordinal, 1);
    }

    #[test]
    fn test_go_to_step_rules() {
        let mut controller = WizardController::new(MemoryDraftStore::new());
        fill_valid_draft(&mut controller);
        controller.go_next().unwrap();
        controller.go_next().unwrap();
        assert_eq!(controller.current_step().ordinal, 3);

        // Backward to a visited step is allowed
        controller.go_to_step(1).unwrap();
        assert_eq!(controller.current_step().ordinal, 1);

        // The immediate next step is allowed
        controller.go_to_step(2).unwrap();
        assert_eq!(controller.current_step().ordinal, 2);

        // Skipping ahead is rejected with state unchanged
        let err = controller.go_to_step(5).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(controller.current_step().ordinal, 2);

        // Out-of-range ordinals are rejected
        assert!(controller.go_to_step(0).is_err());
        assert!(controller.go_to_step(7).is_err());
        assert_eq!(controller.current_step().ordinal, 2);
    }

    #[test]
    fn test_reload_resumes_where_left_off() {
        let mut controller = WizardController::new(MemoryDraftStore::new());
        fill_valid_draft(&mut controller);
        controller.go_next().unwrap();
        controller.go_next().unwrap();
        assert_eq!(controller.current_step().ordinal, 3);

        // Simulate a reload: rebuild the controller over the same store
        let store = controller.into_store();
        let revived = WizardController::new(store);

        assert_eq!(revived.current_step().ordinal, 3);
        assert_eq!(revived.draft().expense_data.title, "Dinner");
        assert_eq!(
            revived.draft().expense_data.amount,
            Some(Money::from_cents(10000))
        );
    }

    #[test]
    fn test_hydrated_step_index_is_clamped() {
        let mut draft = ExpenseDraft::default();
        draft.current_step = 99;
        let store = MemoryDraftStore::with_draft(&draft);

        let controller = WizardController::new(store);
        assert_eq!(controller.current_step().ordinal, step_count());
    }

    #[test]
    fn test_equal_split_scenario() {
        // Dinner, $100, equal across 4 members: each share $25.00 / 25%
        let mut controller = WizardController::new(MemoryDraftStore::new());
        let members = fill_valid_draft(&mut controller);

        controller.go_next().unwrap(); // details -> receipts (no receipts added)
        controller.go_next().unwrap(); // receipts -> split

        let split = &controller.draft().split_data;
        assert_eq!(split.shares.len(), 4);
        for member in &members {
            let share = &split.shares[member];
            assert_eq!(share.amount, Money::from_cents(2500));
            assert!((share.percentage - 25.0).abs() < f64::EPSILON);
        }
        assert_eq!(split.total(), Money::from_cents(10000));
    }

    #[test]
    fn test_submit_success_clears_draft() {
        let mut controller = WizardController::new(MemoryDraftStore::new());
        fill_valid_draft(&mut controller);

        let gateway = FlakyGateway::reliable();
        let receipt = controller
            .submit(&gateway, &fast_policy(), &CancelToken::new())
            .unwrap();
        assert_eq!(receipt.message, "ok");
        assert!(controller.is_completed());

        // A fresh session finds no persisted draft
        let revived = WizardController::new(controller.into_store());
        assert!(revived.draft().expense_data.title.is_empty());
        assert_eq!(revived.current_step().ordinal, 1);
    }

    #[test]
    fn test_submit_validation_failure_aborts_before_attempt() {
        let mut controller = WizardController::new(MemoryDraftStore::new());

        let gateway = FlakyGateway::reliable();
        let err = controller
            .submit(&gateway, &fast_policy(), &CancelToken::new())
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(gateway.committed.get(), 0);
        assert_eq!(controller.phase(), WizardPhase::Editing);
    }

    #[test]
    fn test_submit_retries_unavailable_then_succeeds() {
        let mut controller = WizardController::new(MemoryDraftStore::new());
        fill_valid_draft(&mut controller);

        let gateway =
            FlakyGateway::failing(2, CommitError::Unavailable("settlement down".into()));
        controller
            .submit(&gateway, &fast_policy(), &CancelToken::new())
            .unwrap();
        assert_eq!(gateway.committed.get(), 1);
        assert!(controller.is_completed());
    }

    #[test]
    fn test_submit_failure_preserves_draft_and_resets_latch() {
        let mut controller = WizardController::new(MemoryDraftStore::new());
        fill_valid_draft(&mut controller);

        let gateway =
            FlakyGateway::failing(3, CommitError::Unavailable("settlement down".into()));
        let err = controller
            .submit(&gateway, &fast_policy(), &CancelToken::new())
            .unwrap_err();
        assert!(matches!(err, OnSplitError::Commit(_)));

        // Draft preserved, latch reset, retry possible
        assert_eq!(controller.phase(), WizardPhase::Editing);
        assert!(controller.store.load().is_some());
        assert_eq!(controller.draft().expense_data.title, "Dinner");

        let gateway = FlakyGateway::reliable();
        controller
            .submit(&gateway, &fast_policy(), &CancelToken::new())
            .unwrap();
        assert!(controller.is_completed());
    }

    #[test]
    fn test_rejected_commit_is_not_retried() {
        let mut controller = WizardController::new(MemoryDraftStore::new());
        fill_valid_draft(&mut controller);

        let gateway = FlakyGateway::failing(1, CommitError::Rejected("bad expense".into()));
        let err = controller
            .submit(&gateway, &fast_policy(), &CancelToken::new())
            .unwrap_err();
        assert!(matches!(err, OnSplitError::Commit(_)));
        // Only the single rejected attempt happened
        assert_eq!(gateway.failures_left.get(), 0);
        assert_eq!(gateway.committed.get(), 0);
    }

    #[test]
    fn test_cancelled_submit_preserves_draft() {
        let mut controller = WizardController::new(MemoryDraftStore::new());
        fill_valid_draft(&mut controller);

        let cancel = CancelToken::new();
        cancel.cancel();

        let gateway = FlakyGateway::reliable();
        let err = controller
            .submit(&gateway, &fast_policy(), &cancel)
            .unwrap_err();
        assert!(matches!(err, OnSplitError::Commit(_)));
        assert_eq!(gateway.committed.get(), 0);
        assert_eq!(controller.phase(), WizardPhase::Editing);
        assert!(controller.store.load().is_some());
    }

    #[test]
    fn test_completed_session_rejects_mutation() {
        let mut controller = WizardController::new(MemoryDraftStore::new());
        fill_valid_draft(&mut controller);
        controller
            .submit(&FlakyGateway::reliable(), &fast_policy(), &CancelToken::new())
            .unwrap();

        let err = controller
            .apply(DraftUpdate::SetPaymentMethod("card".to_string()))
            .unwrap_err();
        assert!(matches!(err, OnSplitError::Draft(_)));
        assert!(controller.go_next().is_err());
        assert!(controller.go_back().is_err());

        let err = controller
            .submit(&FlakyGateway::reliable(), &fast_policy(), &CancelToken::new())
            .unwrap_err();
        assert!(matches!(err, OnSplitError::Draft(_)));
    }

    #[test]
    fn test_go_next_on_last_step_reports_ready() {
        let mut controller = WizardController::new(MemoryDraftStore::new());
        fill_valid_draft(&mut controller);
        for _ in 0..step_count() - 1 {
            controller.go_next().unwrap();
        }
        assert_eq!(controller.current_step().ordinal, step_count());

        match controller.go_next().unwrap() {
            NextOutcome::ReadyToSubmit => {}
            other => panic!("expected ReadyToSubmit, got {:?}", other),
        }
        assert_eq!(controller.current_step().ordinal, step_count());
    }

    #[test]
    fn test_cancel_draft_clears_store() {
        let mut controller = WizardController::new(MemoryDraftStore::new());
        fill_valid_draft(&mut controller);

        controller.cancel_draft().unwrap();
        assert!(controller.store.load().is_none());
        assert!(controller.draft().expense_data.title.is_empty());
        assert_eq!(controller.current_step().ordinal, 1);
    }

    #[test]
    fn test_remove_missing_receipt_errors_without_persisting() {
        let mut controller = WizardController::new(MemoryDraftStore::new());

        let err = controller
            .apply(DraftUpdate::RemoveReceipt(ReceiptId::new()))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(controller.store.load().is_none());
    }

    #[test]
    fn test_assign_item_through_update_path() {
        let mut controller = WizardController::new(MemoryDraftStore::new());
        let item = LineItem::new("Pasta", Money::from_cents(1850));
        let item_id = item.id;
        controller.apply(DraftUpdate::UpsertItem(item)).unwrap();

        let members = vec![MemberId::new(), MemberId::new()];
        controller
            .apply(DraftUpdate::AssignItem {
                item: item_id,
                members: members.clone(),
            })
            .unwrap();

        let shares = controller
            .draft()
            .find_item(item_id)
            .unwrap()
            .member_shares();
        assert_eq!(shares.len(), 2);
        assert!(shares.values().all(|s| *s == Money::from_cents(925)));
    }
}
