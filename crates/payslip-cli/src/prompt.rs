//! Interactive fallback and run-parameter validation.
//!
//! When the CLI is started without any run arguments it asks for the
//! five values on the console, in the same order the original prompts
//! used. With arguments, all five must be present; a missing one is a
//! caller validation error raised before the pipeline runs.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use payslip_model::RunHeader;

use crate::cli::Cli;

/// Everything one run needs from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub register: PathBuf,
    pub header: RunHeader,
}

/// Build the run request from CLI flags, or prompt when none were given.
pub fn request_from_cli(cli: &Cli) -> Result<RunRequest> {
    if cli.wants_prompts() {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        return prompt_request(&mut stdin.lock(), &mut stdout.lock());
    }
    let header = RunHeader {
        company: cli.company.clone().context("missing --company")?,
        address: cli.address.clone().context("missing --address")?,
        month: cli.month.clone().context("missing --month")?,
        location: cli.location.clone().context("missing --location")?,
    };
    let register = cli.register.clone().context("missing --register")?;
    validate(&register, &header)?;
    Ok(RunRequest { register, header })
}

/// Ask for the five run values on the given streams.
pub fn prompt_request(input: &mut impl BufRead, output: &mut impl Write) -> Result<RunRequest> {
    let company = ask(input, output, "1. Company name: ")?;
    let address = ask(input, output, "2. Company address: ")?;
    let month = ask(input, output, "3. Payslip for the month (e.g. 'August 2025'): ")?;
    let location = ask(input, output, "4. Work location of employees: ")?;
    let register = ask(input, output, "5. Path to the salary register: ")?;

    let header = RunHeader {
        company,
        address,
        month,
        location,
    };
    let register = PathBuf::from(register);
    validate(&register, &header)?;
    Ok(RunRequest { register, header })
}

fn ask(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<String> {
    write!(output, "{prompt}").context("write prompt")?;
    output.flush().context("flush prompt")?;
    let mut line = String::new();
    input.read_line(&mut line).context("read answer")?;
    Ok(line.trim().to_string())
}

/// The address may be empty; everything else must carry a value.
fn validate(register: &std::path::Path, header: &RunHeader) -> Result<()> {
    if register.as_os_str().is_empty() {
        bail!("the salary register path is required");
    }
    if header.company.trim().is_empty() {
        bail!("the company name is required");
    }
    if header.month.trim().is_empty() {
        bail!("the payslip month is required");
    }
    if header.location.trim().is_empty() {
        bail!("the work location is required");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompts_collect_the_five_values_in_order() {
        let mut input = Cursor::new("Acme\n1 Main St\nAugust 2025\nHQ\nreg.csv\n");
        let mut output = Vec::new();

        let request = prompt_request(&mut input, &mut output).expect("request");

        assert_eq!(request.register, PathBuf::from("reg.csv"));
        assert_eq!(request.header.company, "Acme");
        assert_eq!(request.header.address, "1 Main St");
        assert_eq!(request.header.month, "August 2025");
        assert_eq!(request.header.location, "HQ");

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("1. Company name: "));
        assert!(shown.contains("5. Path to the salary register: "));
    }

    #[test]
    fn answers_are_trimmed_and_empty_address_is_accepted() {
        let mut input = Cursor::new("  Acme  \n\nAugust 2025\nHQ\nreg.csv\n");
        let mut output = Vec::new();

        let request = prompt_request(&mut input, &mut output).expect("request");
        assert_eq!(request.header.company, "Acme");
        assert_eq!(request.header.address, "");
    }

    #[test]
    fn blank_month_is_rejected_before_the_run() {
        let mut input = Cursor::new("Acme\naddr\n\nHQ\nreg.csv\n");
        let mut output = Vec::new();

        let result = prompt_request(&mut input, &mut output);
        assert!(result.is_err());
    }
}
