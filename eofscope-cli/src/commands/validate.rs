use eofscope::validate_eof;
use serde::Serialize;

use crate::{
    app::{GlobalOptions, InputArgs},
    commands::common::load_input,
    output::print_output,
};

#[derive(Debug, Serialize)]
pub struct ValidationResult {
    pub source: String,
    pub revision: String,
    pub size: usize,
    pub valid: bool,
    pub verdict: String,
}

pub fn run(input: &InputArgs, opts: &GlobalOptions) -> anyhow::Result<()> {
    let loaded = load_input(input)?;
    let verdict = validate_eof(input.revision, &loaded.bytes);

    let result = ValidationResult {
        source: loaded.source,
        revision: input.revision.to_string(),
        size: loaded.bytes.len(),
        valid: verdict.is_success(),
        verdict: verdict.to_string(),
    };

    print_output(&result, opts, |r| {
        let status = if r.valid { "PASS" } else { "FAIL" };
        println!(
            "{status}  {source}  (revision: {revision}, {size} bytes)",
            source = r.source,
            revision = r.revision,
            size = r.size
        );
        if !r.valid {
            println!("  Verdict: {}", r.verdict);
        }
    })?;

    if !result.valid {
        std::process::exit(1);
    }
    Ok(())
}
