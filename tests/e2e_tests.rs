//! End-to-end integration tests
//!
//! These tests validate the complete script replay pipeline using predefined
//! CSV fixtures. Each test:
//! 1. Reads input.csv (an action script) from a fixture directory
//! 2. Replays it against the demo ledger
//! 3. Writes the final user table to a temporary file
//! 4. Compares actual output with expected.csv
//!
//! Fixtures live in tests/fixtures/ and cover:
//! - Happy paths (deposit, withdraw, send money, agent deposit)
//! - Rejections (insufficient funds, missing session, wrong PIN, unknown recipient)
//! - Admin actions (freeze, KYC)
//! - Malformed script rows

#[cfg(test)]
mod tests {
    use abanremit_ledger::{run_script, AppConfig};
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Replay tests/fixtures/{fixture_name}/input.csv and compare with expected.csv
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        run_script(
            &AppConfig::default(),
            Path::new(&input_path),
            &mut temp_output,
            None,
        )
        .unwrap_or_else(|e| panic!("Failed to replay script: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output.replace("\r\n", "\n"),
            expected_output.replace("\r\n", "\n"),
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name,
            actual_output,
            expected_output
        );
    }

    #[rstest]
    #[case("send_money")]
    #[case("agent_deposit")]
    #[case("insufficient_funds")]
    #[case("deposit_and_withdraw")]
    #[case("unauthenticated")]
    #[case("admin_actions")]
    #[case("malformed_data")]
    #[case("wrong_pin")]
    #[case("transfer_by_wallet")]
    #[case("agent_channels")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[test]
    fn test_statement_export_written() {
        let mut statement = NamedTempFile::new().unwrap();
        let mut output = Vec::new();

        let summary = run_script(
            &AppConfig::default(),
            Path::new("tests/fixtures/insufficient_funds/input.csv"),
            &mut output,
            Some(&mut statement as &mut dyn Write),
        )
        .unwrap();
        statement.flush().unwrap();

        // one rejected withdrawal and one rejected statement
        assert_eq!(summary.rejected, 2);
        let text = fs::read_to_string(statement.path()).unwrap();
        let headers = text
            .lines()
            .filter(|line| *line == "date,reference,type,amount,fee,status")
            .count();
        assert_eq!(headers, 2);
    }
}
