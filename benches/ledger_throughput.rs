//! Benchmark suite for ledger throughput
//!
//! Measures how fast the engine commits operations and how fast a generated
//! action script replays end to end, using the divan benchmarking framework.
//!
//! ```bash
//! cargo bench
//! ```

use abanremit_ledger::io::ScriptReader;
use abanremit_ledger::{AppConfig, LedgerEngine, PaymentMethod, ScriptRunner};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

fn demo_engine() -> LedgerEngine {
    LedgerEngine::from_config(&AppConfig::default()).expect("demo seed is valid")
}

/// A script cycling through deposits, sends and withdrawals for one user
fn script(rows: usize) -> String {
    let mut script =
        String::from("action,phone,password,amount,method,counterparty,detail,pin\n");
    script.push_str("login,0700000002,agent1234,,,,,\n");
    for i in 0..rows {
        match i % 3 {
            0 => script.push_str("deposit,,,1000,mpesa,,,\n"),
            1 => script.push_str("send_money,,,250,,0700000001,,1234\n"),
            _ => script.push_str("withdraw,,,300,card,,,\n"),
        }
    }
    script
}

/// Commit deposit/withdraw pairs directly through the engine
#[divan::bench(args = [100, 1_000, 10_000])]
fn engine_deposit_withdraw(bencher: divan::Bencher, operations: usize) {
    bencher
        .with_inputs(|| {
            let mut engine = demo_engine();
            engine
                .login("0700000002", "agent1234")
                .expect("demo agent exists");
            engine
        })
        .bench_local_values(|mut engine| {
            for _ in 0..operations / 2 {
                let _ = engine.deposit(Decimal::from(1000), PaymentMethod::Mpesa);
                let _ = engine.withdraw(Decimal::from(500), PaymentMethod::Card);
            }
            engine
        });
}

/// Parse and replay a generated action script
#[divan::bench(args = [100, 1_000, 10_000])]
fn script_replay(bencher: divan::Bencher, rows: usize) {
    let content = script(rows);
    bencher
        .with_inputs(|| ScriptRunner::new(demo_engine()))
        .bench_local_values(|mut runner| {
            runner
                .run(ScriptReader::from_reader(content.as_bytes()))
                .expect("replay succeeds");
            runner
        });
}
