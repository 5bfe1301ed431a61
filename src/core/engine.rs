//! Transaction processing engine
//!
//! This module provides the `LedgerEngine`, the single entry point for every
//! state change in the ledger. It coordinates the `SessionManager`, the
//! `LedgerStore`, the clock and the reference generator.
//!
//! The engine enforces business rules such as:
//! - An active session for every financial operation
//! - Positive amounts and sane fees
//! - `amount + fee <= balance` for every debit, including an agent's float
//! - Recipient and target resolution before any balance moves
//!
//! Every operation is planned on copies of the affected users first and only
//! written back once all checks passed, so a rejected operation leaves the
//! store exactly as it was.

use crate::config::AppConfig;
use crate::core::clock::{ReferenceGenerator, SystemClock};
use crate::core::fee_calculator::{calculate_fee, FeeKind, STATEMENT_DOWNLOAD_FEE};
use crate::core::ledger_store::LedgerStore;
use crate::core::notifications::{self, STATEMENT_TAG};
use crate::core::session::SessionManager;
use crate::core::traits::{Clock, CodeVerifier, VerificationChannel};
use crate::core::verification::StaticCodeVerifier;
use crate::types::{
    Currency, KycStatus, LedgerError, Notification, Outcome, PaymentMethod, Role, Transaction,
    TransactionIntent, TransactionKind, TransactionStatus, User, UserUpdate, WalletId,
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// A fully validated operation, ready to be written to the store
struct Commit {
    actor: User,
    counterparty: Option<User>,
    kind: TransactionKind,
    method: Option<PaymentMethod>,
    network: Option<String>,
    amount: Decimal,
    fee: Decimal,
    reference: String,
    recipient_wallet: Option<WalletId>,
    /// (user id, message, tag)
    notifications: Vec<(String, String, String)>,
    message: String,
}

/// The wallet ledger: session, store and transaction processor in one place
pub struct LedgerEngine {
    store: LedgerStore,
    session: SessionManager,
    clock: Box<dyn Clock>,
    verifier: Box<dyn CodeVerifier>,
    references: ReferenceGenerator,
}

impl LedgerEngine {
    /// Create an engine over `store` using the system clock and demo codes
    pub fn new(store: LedgerStore) -> Self {
        LedgerEngine {
            store,
            session: SessionManager::new(),
            clock: Box::new(SystemClock),
            verifier: Box::new(StaticCodeVerifier::default()),
            references: ReferenceGenerator::new(),
        }
    }

    /// Build an engine from application configuration
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Conflict` if the configured seed violates a
    /// uniqueness rule.
    pub fn from_config(config: &AppConfig) -> Result<Self, LedgerError> {
        let store = LedgerStore::from_seed(config.seed())?;
        info!(
            users = store.users().len(),
            transactions = store.transaction_count(),
            currencies = store.currencies().len(),
            "Ledger seeded"
        );
        Ok(LedgerEngine::new(store).with_verifier(StaticCodeVerifier::new(
            config.verification.otp.clone(),
            config.verification.pin.clone(),
        )))
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_verifier(mut self, verifier: impl CodeVerifier + 'static) -> Self {
        self.verifier = Box::new(verifier);
        self
    }

    /// Read-only view of all collections
    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    // ---- session ----

    /// Authenticate and start a session
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidCredentials` if no user matches; the
    /// previous session (if any) is kept.
    pub fn login(&mut self, phone: &str, password: &str) -> Result<&User, LedgerError> {
        match self.session.login(&self.store, phone, password) {
            Ok(user) => {
                info!(user = %user.id, role = %user.role, "Login succeeded");
                Ok(user)
            }
            Err(e) => {
                warn!(phone = %phone, "Login failed");
                Err(e)
            }
        }
    }

    /// End the session; idempotent
    pub fn logout(&mut self) {
        if let Some(id) = self.session.active_user_id() {
            info!(user = %id, "Logout");
        }
        self.session.logout();
    }

    /// The authenticated user, read from the user collection
    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user(&self.store)
    }

    // ---- verification gate ----

    pub fn verify_otp(&self, code: &str) -> Result<(), LedgerError> {
        self.verifier.verify(VerificationChannel::Otp, code)
    }

    pub fn verify_pin(&self, code: &str) -> Result<(), LedgerError> {
        self.verifier.verify(VerificationChannel::Pin, code)
    }

    /// Generate a fresh `TXN-YYYYMMDD-NNN` reference
    pub fn next_reference(&mut self) -> String {
        let now = self.clock.now();
        let highest = self.store.highest_reference_sequence(now.date_naive());
        self.references.next(now, highest)
    }

    // ---- transaction processor ----

    /// Commit one ledger event for the active user
    ///
    /// Routes the intent to the deposit, agent-deposit or debit path based on
    /// its kind and whether it names a target user.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the ledger unchanged, if:
    /// - No session is active (`Unauthenticated`)
    /// - The amount is not positive or the fee is negative (`Validation`)
    /// - The acting wallet cannot cover `amount + fee` (`InsufficientBalance`)
    /// - A recipient or target cannot be resolved (`NotFound`)
    /// - A non-agent attempts an agent-mediated deposit (`PermissionDenied`)
    pub fn process_transaction(
        &mut self,
        intent: TransactionIntent,
    ) -> Result<Outcome, LedgerError> {
        let actor_id = self.session.require()?.to_string();

        let planned = self.plan(&actor_id, intent);
        match planned {
            Ok(commit) => Ok(self.apply(commit)),
            Err(e) => {
                warn!(user = %actor_id, error = %e, "Transaction rejected");
                Err(e)
            }
        }
    }

    /// Deposit into the active user's own wallet, charging the deposit fee
    pub fn deposit(
        &mut self,
        amount: Decimal,
        method: PaymentMethod,
    ) -> Result<Outcome, LedgerError> {
        self.session.require()?;
        let fee = calculate_fee(amount, FeeKind::Deposit);
        let reference = self.next_reference();
        self.process_transaction(
            TransactionIntent::new(TransactionKind::Deposit, amount, fee, reference)
                .with_method(method),
        )
    }

    /// Withdraw from the active user's wallet, charging the fixed withdrawal fee
    pub fn withdraw(
        &mut self,
        amount: Decimal,
        method: PaymentMethod,
    ) -> Result<Outcome, LedgerError> {
        self.session.require()?;
        let fee = calculate_fee(amount, FeeKind::Withdrawal);
        let reference = self.next_reference();
        self.process_transaction(
            TransactionIntent::new(TransactionKind::Withdrawal, amount, fee, reference)
                .with_method(method),
        )
    }

    /// Cash out through the agent registered under `agent_phone`
    ///
    /// Runs the withdrawal path with the withdrawal fee; the agent's wallet is
    /// recorded on the transaction but not credited, since the agent hands
    /// over cash.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no agent is registered under `agent_phone`, plus
    /// every error of [`LedgerEngine::withdraw`].
    pub fn withdraw_to_agent(
        &mut self,
        amount: Decimal,
        agent_phone: &str,
    ) -> Result<Outcome, LedgerError> {
        self.session.require()?;
        let agent_wallet = self
            .store
            .find_by_phone(agent_phone.trim())
            .filter(|user| user.role == Role::Agent)
            .map(|agent| agent.wallet_id.clone())
            .ok_or_else(|| LedgerError::not_found("Agent", agent_phone))?;
        let fee = calculate_fee(amount, FeeKind::Withdrawal);
        let reference = self.next_reference();
        self.process_transaction(
            TransactionIntent::new(TransactionKind::Withdrawal, amount, fee, reference)
                .with_method(PaymentMethod::Mpesa)
                .with_recipient_wallet(agent_wallet),
        )
    }

    /// Wallet-to-wallet transfer to the user registered under `recipient_phone`
    pub fn transfer(
        &mut self,
        amount: Decimal,
        recipient_phone: &str,
    ) -> Result<Outcome, LedgerError> {
        self.session.require()?;
        let fee = calculate_fee(amount, FeeKind::Transfer);
        let reference = self.next_reference();
        self.process_transaction(
            TransactionIntent::new(TransactionKind::Transfer, amount, fee, reference)
                .with_recipient_phone(recipient_phone),
        )
    }

    /// Transfer addressed by the recipient's wallet id
    pub fn send_to_wallet(
        &mut self,
        amount: Decimal,
        wallet_id: &str,
    ) -> Result<Outcome, LedgerError> {
        self.session.require()?;
        let recipient_phone = self
            .store
            .find_by_wallet(wallet_id)
            .map(|user| user.phone.clone())
            .ok_or_else(|| LedgerError::not_found("Wallet", wallet_id))?;
        let fee = calculate_fee(amount, FeeKind::Transfer);
        let reference = self.next_reference();
        self.process_transaction(
            TransactionIntent::new(TransactionKind::Transfer, amount, fee, reference)
                .with_recipient_phone(recipient_phone)
                .with_recipient_wallet(wallet_id),
        )
    }

    /// Send money to a phone number, charging the transfer fee
    pub fn send_money(
        &mut self,
        amount: Decimal,
        recipient_phone: &str,
    ) -> Result<Outcome, LedgerError> {
        self.session.require()?;
        let recipient_wallet = self
            .store
            .find_by_phone(recipient_phone)
            .map(|user| user.wallet_id.clone())
            .ok_or_else(|| LedgerError::not_found("Recipient", recipient_phone))?;
        let fee = calculate_fee(amount, FeeKind::Transfer);
        let reference = self.next_reference();
        self.process_transaction(
            TransactionIntent::new(TransactionKind::SendMoney, amount, fee, reference)
                .with_recipient_phone(recipient_phone)
                .with_recipient_wallet(recipient_wallet),
        )
    }

    /// Buy airtime from the active wallet; no fee is charged
    pub fn buy_airtime(
        &mut self,
        amount: Decimal,
        network: Option<&str>,
    ) -> Result<Outcome, LedgerError> {
        self.session.require()?;
        let reference = self.next_reference();
        let mut intent =
            TransactionIntent::new(TransactionKind::Airtime, amount, Decimal::ZERO, reference);
        if let Some(network) = network {
            intent = intent.with_network(network);
        }
        self.process_transaction(intent)
    }

    /// Agent funds the wallet `wallet_id` from their own float
    pub fn agent_deposit(
        &mut self,
        amount: Decimal,
        wallet_id: &str,
        method: Option<PaymentMethod>,
    ) -> Result<Outcome, LedgerError> {
        self.session.require()?;
        let target_id = self
            .store
            .find_by_wallet(wallet_id)
            .map(|user| user.id.clone())
            .ok_or_else(|| LedgerError::not_found("Wallet", wallet_id))?;
        let reference = self.next_reference();
        let mut intent =
            TransactionIntent::new(TransactionKind::Deposit, amount, Decimal::ZERO, reference)
                .with_target_user(target_id)
                .with_recipient_wallet(wallet_id);
        if let Some(method) = method {
            intent = intent.with_method(method);
        }
        self.process_transaction(intent)
    }

    /// Debit the fixed statement-download fee from the active wallet
    ///
    /// # Errors
    ///
    /// Returns `InsufficientBalance` if the balance is below the fee, and
    /// `Unauthenticated` without a session.
    pub fn charge_statement_download(&mut self) -> Result<Outcome, LedgerError> {
        let actor_id = self.session.require()?.to_string();
        let actor = self.acting_user(&actor_id)?;

        let mut updated = actor.clone();
        if let Err(e) = debit(&mut updated, STATEMENT_DOWNLOAD_FEE, "statement") {
            warn!(user = %actor_id, error = %e, "Statement download rejected");
            return Err(e);
        }

        let message = notifications::statement_message(&updated, STATEMENT_DOWNLOAD_FEE);
        let reference = self.next_reference();
        Ok(self.apply(Commit {
            notifications: vec![(
                updated.id.clone(),
                message.clone(),
                STATEMENT_TAG.to_string(),
            )],
            actor: updated,
            counterparty: None,
            kind: TransactionKind::Withdrawal,
            method: None,
            network: None,
            amount: STATEMENT_DOWNLOAD_FEE,
            fee: Decimal::ZERO,
            reference,
            recipient_wallet: None,
            message,
        }))
    }

    /// Ledger records visible on the active user's statement, newest first
    ///
    /// Admins see the whole ledger.
    pub fn statement(&self) -> Result<Vec<&Transaction>, LedgerError> {
        let user = self.current_user().ok_or(LedgerError::Unauthenticated)?;
        Ok(if user.role == Role::Admin {
            self.store.transactions()
        } else {
            self.store.transactions_for_user(&user.id)
        })
    }

    // ---- administration ----

    /// Merge `update` into user `user_id`
    ///
    /// The session stores only the user id, so the active user observes the
    /// change immediately.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the user or the requested currency does not exist
    /// - `Conflict` if the new phone belongs to another user
    /// - `Validation` if the new balance is negative
    pub fn update_user(
        &mut self,
        user_id: &str,
        update: UserUpdate,
    ) -> Result<&User, LedgerError> {
        if self.store.user(user_id).is_none() {
            return Err(LedgerError::not_found("User", user_id));
        }
        if let Some(phone) = &update.phone {
            if self
                .store
                .find_by_phone(phone)
                .is_some_and(|other| other.id != user_id)
            {
                return Err(LedgerError::conflict("Phone number", phone));
            }
        }
        if let Some(balance) = update.balance {
            if balance.is_sign_negative() && !balance.is_zero() {
                return Err(LedgerError::validation("balance cannot be negative"));
            }
        }
        if let Some(code) = &update.currency {
            if self.store.currency(code).is_none() {
                return Err(LedgerError::not_found("Currency", code));
            }
        }

        let user = self
            .store
            .user_mut(user_id)
            .ok_or_else(|| LedgerError::not_found("User", user_id))?;
        update.apply_to(user);
        info!(user = %user_id, ?update, "User updated");
        Ok(user)
    }

    /// Set the balance of `user_id` to zero
    pub fn freeze_wallet(&mut self, user_id: &str) -> Result<&User, LedgerError> {
        self.update_user(
            user_id,
            UserUpdate {
                balance: Some(Decimal::ZERO),
                ..Default::default()
            },
        )
    }

    pub fn set_kyc_status(
        &mut self,
        user_id: &str,
        status: KycStatus,
    ) -> Result<&User, LedgerError> {
        self.update_user(
            user_id,
            UserUpdate {
                kyc_status: Some(status),
                ..Default::default()
            },
        )
    }

    /// Register a new currency
    ///
    /// # Errors
    ///
    /// - `Validation` if the code or name is blank
    /// - `Conflict` if the code is already registered
    pub fn add_currency(&mut self, currency: Currency) -> Result<(), LedgerError> {
        if currency.code.trim().is_empty() || currency.name.trim().is_empty() {
            return Err(LedgerError::validation(
                "currency code and name are required",
            ));
        }
        let currency = Currency {
            code: currency.code.trim().to_uppercase(),
            ..currency
        };
        let code = currency.code.clone();
        self.store.add_currency(currency)?;
        info!(code = %code, "Currency added");
        Ok(())
    }

    /// Flip the enabled flag of currency `code`; `None` if no currency matched
    pub fn toggle_currency(&mut self, code: &str) -> Option<bool> {
        let enabled = self.store.toggle_currency(code);
        if let Some(enabled) = enabled {
            info!(code = %code, enabled, "Currency toggled");
        }
        enabled
    }

    /// Flip the active flag of fee entry `id`; `None` if no entry matched
    pub fn toggle_fee(&mut self, id: &str) -> Option<bool> {
        let active = self.store.toggle_fee(id);
        if let Some(active) = active {
            info!(fee = %id, active, "Fee toggled");
        }
        active
    }

    // ---- internals ----

    fn acting_user(&self, actor_id: &str) -> Result<User, LedgerError> {
        self.store
            .user(actor_id)
            .cloned()
            .ok_or_else(|| LedgerError::not_found("User", actor_id))
    }

    fn plan(&self, actor_id: &str, intent: TransactionIntent) -> Result<Commit, LedgerError> {
        if intent.amount <= Decimal::ZERO {
            return Err(LedgerError::validation("amount must be positive"));
        }
        if intent.fee.is_sign_negative() && !intent.fee.is_zero() {
            return Err(LedgerError::validation("fee cannot be negative"));
        }

        let actor = self.acting_user(actor_id)?;
        debug!(
            user = %actor.id,
            kind = %intent.kind,
            amount = %intent.amount,
            fee = %intent.fee,
            "Planning transaction"
        );

        match intent.kind {
            TransactionKind::Deposit if intent.target_user_id.is_some() => {
                self.plan_agent_deposit(actor, intent)
            }
            TransactionKind::Deposit => Self::plan_deposit(actor, intent),
            kind if kind.is_debit() => self.plan_debit(actor, intent),
            kind => Err(LedgerError::validation(format!(
                "{} is not a ledger movement",
                kind
            ))),
        }
    }

    fn plan_deposit(actor: User, intent: TransactionIntent) -> Result<Commit, LedgerError> {
        if intent.fee > intent.amount {
            return Err(LedgerError::validation("deposit fee exceeds amount"));
        }

        let mut updated = actor;
        credit(&mut updated, intent.amount - intent.fee, "deposit")?;
        updated.total_deposits = add_counter(
            updated.total_deposits,
            intent.amount,
            "deposit",
            &updated.wallet_id,
        )?;

        let message = notifications::actor_message(&updated, intent.kind, intent.amount);
        Ok(Commit {
            notifications: vec![(
                updated.id.clone(),
                message.clone(),
                intent.kind.as_str().to_string(),
            )],
            actor: updated,
            counterparty: None,
            kind: intent.kind,
            method: intent.method,
            network: intent.network,
            amount: intent.amount,
            fee: intent.fee,
            reference: intent.reference,
            recipient_wallet: intent.recipient_wallet,
            message,
        })
    }

    fn plan_agent_deposit(
        &self,
        actor: User,
        intent: TransactionIntent,
    ) -> Result<Commit, LedgerError> {
        let target_id = intent.target_user_id.as_deref().unwrap_or_default();
        if actor.role != Role::Agent {
            return Err(LedgerError::permission_denied(&actor.id, "agent deposit"));
        }
        let target = self
            .store
            .user(target_id)
            .cloned()
            .ok_or_else(|| LedgerError::not_found("User", target_id))?;
        if target.id == actor.id {
            return Err(LedgerError::validation(
                "agent cannot deposit into their own wallet",
            ));
        }

        // The agent's float funds the deposit; no fee is deducted from either side.
        let mut agent = actor;
        debit(&mut agent, intent.amount, "agent deposit")?;

        let mut customer = target;
        credit(&mut customer, intent.amount, "agent deposit")?;
        customer.total_deposits = add_counter(
            customer.total_deposits,
            intent.amount,
            "agent deposit",
            &customer.wallet_id,
        )?;

        let message = notifications::agent_deposit_message(&agent, &customer, intent.amount);
        let tag = intent.kind.as_str().to_string();
        Ok(Commit {
            notifications: vec![
                (agent.id.clone(), message.clone(), tag.clone()),
                (
                    customer.id.clone(),
                    notifications::agent_credit_message(&agent, intent.amount),
                    tag,
                ),
            ],
            recipient_wallet: intent
                .recipient_wallet
                .or_else(|| Some(customer.wallet_id.clone())),
            actor: agent,
            counterparty: Some(customer),
            kind: intent.kind,
            method: intent.method,
            network: intent.network,
            amount: intent.amount,
            fee: intent.fee,
            reference: intent.reference,
            message,
        })
    }

    fn plan_debit(&self, actor: User, intent: TransactionIntent) -> Result<Commit, LedgerError> {
        let recipient = match (intent.kind, intent.recipient_phone.as_deref()) {
            (TransactionKind::SendMoney, None) => {
                return Err(LedgerError::validation("recipient phone is required"));
            }
            (TransactionKind::SendMoney | TransactionKind::Transfer, Some(phone)) => {
                let recipient = self
                    .store
                    .find_by_phone(phone.trim())
                    .cloned()
                    .ok_or_else(|| LedgerError::not_found("Recipient", phone))?;
                if recipient.id == actor.id {
                    return Err(LedgerError::validation(
                        "cannot send money to your own wallet",
                    ));
                }
                Some(recipient)
            }
            _ => None,
        };

        let total = intent.amount.checked_add(intent.fee).ok_or_else(|| {
            LedgerError::arithmetic_overflow(intent.kind.as_str(), &actor.wallet_id)
        })?;

        let mut sender = actor;
        debit(&mut sender, total, intent.kind.as_str())?;
        match intent.kind {
            TransactionKind::Withdrawal => {
                sender.total_withdrawn = add_counter(
                    sender.total_withdrawn,
                    intent.amount,
                    "withdrawal",
                    &sender.wallet_id,
                )?;
            }
            TransactionKind::Transfer | TransactionKind::SendMoney => {
                sender.total_transfers = add_counter(
                    sender.total_transfers,
                    intent.amount,
                    intent.kind.as_str(),
                    &sender.wallet_id,
                )?;
            }
            _ => {}
        }

        let tag = intent.kind.as_str().to_string();
        let mut messages = Vec::with_capacity(2);
        let counterparty = match recipient {
            Some(mut recipient) => {
                // Only the amount reaches the recipient; the fee leaves circulation.
                credit(&mut recipient, intent.amount, intent.kind.as_str())?;
                let sender_message = if intent.kind == TransactionKind::Transfer {
                    notifications::transfer_sent_message(&sender, &recipient, intent.amount)
                } else {
                    notifications::actor_message(&sender, intent.kind, intent.amount)
                };
                messages.push((sender.id.clone(), sender_message, tag.clone()));
                messages.push((
                    recipient.id.clone(),
                    notifications::received_message(&sender, intent.amount),
                    tag.clone(),
                ));
                Some(recipient)
            }
            None => {
                messages.push((
                    sender.id.clone(),
                    notifications::actor_message(&sender, intent.kind, intent.amount),
                    tag.clone(),
                ));
                None
            }
        };

        let message = messages[0].1.clone();
        Ok(Commit {
            recipient_wallet: intent
                .recipient_wallet
                .or_else(|| counterparty.as_ref().map(|r| r.wallet_id.clone())),
            actor: sender,
            counterparty,
            kind: intent.kind,
            method: intent.method,
            network: intent.network,
            amount: intent.amount,
            fee: intent.fee,
            reference: intent.reference,
            notifications: messages,
            message,
        })
    }

    /// Write a validated commit to the store; cannot fail
    fn apply(&mut self, commit: Commit) -> Outcome {
        let now = self.clock.now();
        let millis = now.timestamp_millis();

        let sequence = self.store.next_sequence();
        let transaction = Transaction {
            id: format!("txn-{}-{}", millis, sequence),
            date: now,
            user_id: commit.actor.id.clone(),
            user_name: commit.actor.name.clone(),
            kind: commit.kind,
            method: commit.method,
            network: commit.network,
            amount: commit.amount,
            fee: commit.fee,
            status: TransactionStatus::Completed,
            reference: commit.reference,
            sender_wallet: Some(commit.actor.wallet_id.clone()),
            recipient_wallet: commit.recipient_wallet,
        };

        for (user_id, message, tag) in commit.notifications {
            let sequence = self.store.next_sequence();
            self.store.push_notification(Notification {
                id: format!("notif-{}-{}", millis, sequence),
                user_id,
                date: now,
                message,
                tag,
                read: false,
            });
        }

        if let Some(counterparty) = commit.counterparty {
            replace_user(&mut self.store, counterparty);
        }
        replace_user(&mut self.store, commit.actor);
        self.store.append_transaction(transaction.clone());

        info!(
            id = %transaction.id,
            reference = %transaction.reference,
            kind = %transaction.kind,
            user = %transaction.user_id,
            amount = %transaction.amount,
            fee = %transaction.fee,
            "Transaction committed"
        );

        Outcome {
            transaction,
            message: commit.message,
        }
    }
}

fn replace_user(store: &mut LedgerStore, updated: User) {
    if let Some(slot) = store.user_mut(&updated.id) {
        *slot = updated;
    }
}

/// Add `amount` to the user's balance
fn credit(user: &mut User, amount: Decimal, operation: &str) -> Result<(), LedgerError> {
    user.balance = user
        .balance
        .checked_add(amount)
        .ok_or_else(|| LedgerError::arithmetic_overflow(operation, &user.wallet_id))?;
    Ok(())
}

/// Take `amount` from the user's balance, refusing to go below zero
fn debit(user: &mut User, amount: Decimal, operation: &str) -> Result<(), LedgerError> {
    if user.balance < amount {
        return Err(LedgerError::insufficient_balance(
            &user.wallet_id,
            user.balance,
            amount,
        ));
    }
    user.balance = user
        .balance
        .checked_sub(amount)
        .ok_or_else(|| LedgerError::arithmetic_overflow(operation, &user.wallet_id))?;
    Ok(())
}

fn add_counter(
    counter: Decimal,
    amount: Decimal,
    operation: &str,
    wallet: &str,
) -> Result<Decimal, LedgerError> {
    counter
        .checked_add(amount)
        .ok_or_else(|| LedgerError::arithmetic_overflow(operation, wallet))
}
