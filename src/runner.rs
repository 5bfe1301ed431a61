//! Action-script runner
//!
//! Replays an action script against a `LedgerEngine` and writes the final
//! user table as CSV. This is the pipeline behind the binary.
//!
//! The runner plays the role of the presentation layer: it applies the PIN
//! gate when a step carries a PIN, resolves wallet ids for admin actions and
//! enforces role-restricted actions: `transfer` is for agents, `freeze` and
//! `kyc` are for admins. Malformed rows and rejected
//! operations are logged and skipped; only I/O failures abort a run.

use crate::config::AppConfig;
use crate::core::LedgerEngine;
use crate::io::csv_format::{write_statement_csv, write_users_csv, ScriptAction, ScriptStep};
use crate::io::ScriptReader;
use crate::types::{LedgerError, Role};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Counts of what happened during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub rejected: usize,
    pub malformed: usize,
}

/// Replays scripts against one engine
pub struct ScriptRunner<'a> {
    engine: LedgerEngine,
    statements: Option<&'a mut dyn Write>,
    summary: RunSummary,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(engine: LedgerEngine) -> Self {
        ScriptRunner {
            engine,
            statements: None,
            summary: RunSummary::default(),
        }
    }

    /// Write a statement CSV to `sink` after every successful `statement` action
    pub fn with_statement_sink(mut self, sink: &'a mut dyn Write) -> Self {
        self.statements = Some(sink);
        self
    }

    pub fn engine(&self) -> &LedgerEngine {
        &self.engine
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Apply every step yielded by `steps`
    ///
    /// # Errors
    ///
    /// Returns an error only when writing a statement export fails.
    pub fn run<I>(&mut self, steps: I) -> Result<RunSummary, LedgerError>
    where
        I: IntoIterator<Item = Result<ScriptStep, LedgerError>>,
    {
        for result in steps {
            match result {
                Ok(step) => match self.apply(step) {
                    Ok(message) => {
                        self.summary.applied += 1;
                        debug!(%message, "Step applied");
                    }
                    Err(e) if e.is_rejection() => {
                        self.summary.rejected += 1;
                        warn!(error = %e, "Step rejected");
                    }
                    Err(e) => return Err(e),
                },
                Err(e) => {
                    self.summary.malformed += 1;
                    warn!(error = %e, "Skipping malformed row");
                }
            }
        }
        Ok(self.summary)
    }

    /// Apply one step; the returned string is the user-facing outcome
    pub fn apply(&mut self, step: ScriptStep) -> Result<String, LedgerError> {
        if let Some(pin) = &step.pin {
            self.engine.verify_pin(pin)?;
        }

        let engine = &mut self.engine;
        match step.action {
            ScriptAction::Login { phone, password } => {
                let user = engine.login(&phone, &password)?;
                Ok(format!("Welcome back, {}", user.name))
            }
            ScriptAction::Logout => {
                engine.logout();
                Ok("Logged out".to_string())
            }
            ScriptAction::Deposit { amount, method } => {
                Ok(engine.deposit(amount, method)?.message)
            }
            ScriptAction::Withdraw { amount, method } => {
                Ok(engine.withdraw(amount, method)?.message)
            }
            ScriptAction::WithdrawToAgent {
                amount,
                agent_phone,
            } => Ok(engine.withdraw_to_agent(amount, &agent_phone)?.message),
            ScriptAction::Transfer {
                amount,
                recipient_phone,
            } => {
                self.require_role(Role::Agent, "transfer")?;
                Ok(self.engine.transfer(amount, &recipient_phone)?.message)
            }
            ScriptAction::SendMoney {
                amount,
                recipient_phone,
            } => Ok(engine.send_money(amount, &recipient_phone)?.message),
            ScriptAction::SendToWallet { amount, wallet_id } => {
                Ok(engine.send_to_wallet(amount, &wallet_id)?.message)
            }
            ScriptAction::Airtime { amount, network } => {
                Ok(engine.buy_airtime(amount, network.as_deref())?.message)
            }
            ScriptAction::AgentDeposit {
                amount,
                wallet_id,
                method,
            } => Ok(engine.agent_deposit(amount, &wallet_id, method)?.message),
            ScriptAction::Statement => {
                let outcome = engine.charge_statement_download()?;
                if let Some(sink) = self.statements.as_deref_mut() {
                    let rows = self.engine.statement()?;
                    write_statement_csv(&rows, sink)?;
                }
                Ok(outcome.message)
            }
            ScriptAction::Freeze { wallet_id } => {
                let user_id = self.admin_target(&wallet_id, "freeze")?;
                self.engine.freeze_wallet(&user_id)?;
                Ok(format!("Wallet {} frozen", wallet_id))
            }
            ScriptAction::Kyc { wallet_id, status } => {
                let user_id = self.admin_target(&wallet_id, "kyc")?;
                self.engine.set_kyc_status(&user_id, status)?;
                Ok(format!("KYC for {} set to {}", wallet_id, status))
            }
        }
    }

    /// Check that the session user holds `role`
    fn require_role(&self, role: Role, operation: &str) -> Result<(), LedgerError> {
        let user = self
            .engine
            .current_user()
            .ok_or(LedgerError::Unauthenticated)?;
        if user.role != role {
            return Err(LedgerError::permission_denied(&user.id, operation));
        }
        Ok(())
    }

    /// Resolve `wallet_id` for an admin action, checking the session's role
    fn admin_target(&self, wallet_id: &str, operation: &str) -> Result<String, LedgerError> {
        self.require_role(Role::Admin, operation)?;
        self.engine
            .store()
            .find_by_wallet(wallet_id)
            .map(|user| user.id.clone())
            .ok_or_else(|| LedgerError::not_found("Wallet", wallet_id))
    }

    /// Write the final user table
    pub fn write_users(&self, output: &mut dyn Write) -> Result<(), LedgerError> {
        write_users_csv(&self.engine.store().users(), output)
    }
}

/// Replay the script at `input_path` on a ledger built from `config`
///
/// # Arguments
///
/// * `config` - Seed and verification settings
/// * `input_path` - Path to the action script CSV
/// * `output` - Writer receiving the final user table
/// * `statements` - Optional writer receiving statement exports
///
/// # Errors
///
/// Fatal errors (script not found, invalid seed, write failures) are
/// returned. Rejected operations and malformed rows are logged and skipped.
pub fn run_script(
    config: &AppConfig,
    input_path: &Path,
    output: &mut dyn Write,
    statements: Option<&mut dyn Write>,
) -> Result<RunSummary, LedgerError> {
    let engine = LedgerEngine::from_config(config)?;
    let reader = ScriptReader::from_path(input_path)?;

    let mut runner = ScriptRunner::new(engine);
    if let Some(sink) = statements {
        runner = runner.with_statement_sink(sink);
    }

    let summary = runner.run(reader)?;
    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        malformed = summary.malformed,
        "Script finished"
    );

    runner.write_users(output)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ScriptReader;
    use rust_decimal::Decimal;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    const HEADER: &str = "action,phone,password,amount,method,counterparty,detail,pin\n";

    fn runner<'a>() -> ScriptRunner<'a> {
        ScriptRunner::new(LedgerEngine::from_config(&AppConfig::default()).unwrap())
    }

    fn run_body(runner: &mut ScriptRunner<'_>, body: &str) -> RunSummary {
        let content = format!("{}{}", HEADER, body);
        runner
            .run(ScriptReader::from_reader(content.as_bytes()))
            .unwrap()
    }

    fn balance(runner: &ScriptRunner<'_>, id: &str) -> Decimal {
        runner.engine().store().user(id).unwrap().balance
    }

    #[test]
    fn test_run_counts_outcomes() {
        let mut runner = runner();
        let summary = run_body(
            &mut runner,
            "deposit,,,100,mpesa,,,\n\
             login,0700000001,user1234,,,,,\n\
             deposit,,,1000,mpesa,,,\n\
             teleport,,,,,,,\n",
        );

        assert_eq!(
            summary,
            RunSummary {
                applied: 2,
                rejected: 1,
                malformed: 1,
            }
        );
        assert_eq!(balance(&runner, "usr-001"), Decimal::from(15985));
    }

    #[test]
    fn test_wrong_pin_blocks_step() {
        let mut runner = runner();
        let summary = run_body(
            &mut runner,
            "login,0700000001,user1234,,,,,\n\
             send_money,,,2500,,0700000002,,9999\n\
             send_money,,,2500,,0700000002,,1234\n",
        );

        assert_eq!(summary.rejected, 1);
        assert_eq!(balance(&runner, "usr-001"), Decimal::from(12455));
        assert_eq!(balance(&runner, "usr-002"), Decimal::from(87500));
    }

    #[test]
    fn test_admin_actions_require_admin_role() {
        let mut runner = runner();
        let summary = run_body(
            &mut runner,
            "login,0700000001,user1234,,,,,\n\
             freeze,,,,,WLT-2024-0004,,\n\
             login,0700000003,admin1234,,,,,\n\
             freeze,,,,,WLT-2024-0004,,\n\
             kyc,,,,,WLT-2024-0004,rejected,\n\
             kyc,,,,,WLT-9999,approved,\n",
        );

        assert_eq!(summary.rejected, 2);
        let jane = runner.engine().store().user("usr-004").unwrap();
        assert_eq!(jane.balance, Decimal::ZERO);
        assert_eq!(jane.kyc_status, crate::types::KycStatus::Rejected);
    }

    #[test]
    fn test_transfer_is_reserved_for_agents() {
        let mut runner = runner();
        let summary = run_body(
            &mut runner,
            "login,0700000001,user1234,,,,,\n\
             transfer,,,1000,,0700000004,,\n\
             login,0700000002,agent1234,,,,,\n\
             transfer,,,1000,,0700000004,,\n",
        );

        assert_eq!(summary.rejected, 1);
        assert_eq!(balance(&runner, "usr-001"), Decimal::from(15000));
        assert_eq!(balance(&runner, "usr-002"), Decimal::from(83982));
        assert_eq!(balance(&runner, "usr-004"), Decimal::from(4200));
    }

    #[test]
    fn test_user_transfer_reports_permission_denied() {
        let mut runner = runner();
        runner.engine.login("0700000001", "user1234").unwrap();

        let err = runner
            .apply(ScriptStep {
                action: ScriptAction::Transfer {
                    amount: Decimal::from(1000),
                    recipient_phone: "0700000004".to_string(),
                },
                pin: None,
            })
            .unwrap_err();
        assert_eq!(err, LedgerError::permission_denied("usr-001", "transfer"));
    }

    #[test]
    fn test_withdraw_to_agent_step() {
        let mut runner = runner();
        let summary = run_body(
            &mut runner,
            "login,0700000001,user1234,,,,,\n\
             withdraw_agent,,,2000,,0700000002,,1234\n\
             withdraw_agent,,,2000,,0700000004,,1234\n",
        );

        assert_eq!(summary.applied, 2);
        assert_eq!(summary.rejected, 1);
        assert_eq!(balance(&runner, "usr-001"), Decimal::from(12900));
    }

    #[test]
    fn test_statement_sink_receives_export() {
        let mut sink = Vec::new();
        {
            let mut runner = runner().with_statement_sink(&mut sink);
            run_body(
                &mut runner,
                "login,0700000002,agent1234,,,,,\nstatement,,,,,,,\n",
            );
            assert_eq!(balance(&runner, "usr-002"), Decimal::from(84950));
        }

        let text = String::from_utf8(sink).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "date,reference,type,amount,fee,status");
        // the statement charge itself plus the agent's two seed deposits
        assert_eq!(lines.len(), 4);
        assert!(lines[1].ends_with(",withdrawal,50.00,0.00,completed"));
    }

    #[test]
    fn test_run_script_writes_user_table() {
        let mut script = NamedTempFile::new().unwrap();
        write!(
            script,
            "{}login,0700000004,user5678,,,,,\nwithdraw,,,3000,card,,,\n",
            HEADER
        )
        .unwrap();
        script.flush().unwrap();

        let mut output = Vec::new();
        let summary =
            run_script(&AppConfig::default(), script.path(), &mut output, None).unwrap();

        assert_eq!(summary.applied, 2);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(
            "usr-004,WLT-2024-0004,Jane Mwangi,user,100.00,9000.00,7800.00,1000.00,pending"
        ));
    }

    #[test]
    fn test_run_script_missing_file() {
        let mut output = Vec::new();
        let result = run_script(
            &AppConfig::default(),
            Path::new("nonexistent.csv"),
            &mut output,
            None,
        );
        assert!(matches!(result, Err(LedgerError::IoError { .. })));
        assert!(output.is_empty());
    }
}
