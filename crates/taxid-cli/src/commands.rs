//! Argument handling for each subcommand.

use anyhow::Result;

use taxid_cli::pipeline::{
    CleanJob, CleanRun, CleanSettings, Execution, IdentifierKind, ValidateJob, ValidateRun,
    run_clean, run_validate,
};
use taxid_model::{RucCleanOptions, VatCleanOptions};

use crate::cli::{CleanArgs, KindArg, RucArgs, ValidateArgs, VatArgs};

pub fn run_ruc(args: &RucArgs) -> Result<CleanRun> {
    let options = RucCleanOptions::new()
        .with_output_format(args.output_format)
        .with_inplace(args.common.inplace)
        .with_errors(args.common.errors)
        .with_progress(!args.common.no_progress);
    run_clean(&clean_job(&args.common, CleanSettings::Ruc(options)))
}

pub fn run_vat(args: &VatArgs) -> Result<CleanRun> {
    let options = VatCleanOptions::new()
        .with_output_format(args.output_format)
        .with_split(args.split)
        .with_inplace(args.common.inplace)
        .with_errors(args.common.errors)
        .with_progress(!args.common.no_progress);
    run_clean(&clean_job(&args.common, CleanSettings::Vat(options)))
}

pub fn run_validate_command(args: &ValidateArgs) -> Result<ValidateRun> {
    let kind = match args.kind {
        KindArg::Ruc => IdentifierKind::Ruc,
        KindArg::Vat => IdentifierKind::Vat,
    };
    run_validate(&ValidateJob {
        input: args.input.clone(),
        kind,
        column: args.column.clone(),
        output: args.output.clone(),
    })
}

fn clean_job(args: &CleanArgs, settings: CleanSettings) -> CleanJob {
    let execution = if args.sequential {
        Execution::Sequential
    } else {
        Execution::Parallel {
            chunk_size: args.chunk_size,
        }
    };
    CleanJob {
        input: args.input.clone(),
        column: args.column.clone(),
        settings,
        execution,
        output: args.output.clone(),
    }
}
