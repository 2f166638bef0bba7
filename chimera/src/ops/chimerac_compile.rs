use crate::{
    cli::Command,
    utils::{
        diagnostics::format_err,
        printers::{ast_outline, token_listing},
    },
};
use anyhow::{bail, Context};
use chimera_core::{compile_to_ast, TypedProgram};
use chimera_tracing::{println_green, println_yellow_err};
use std::{fs, path::Path, sync::Arc};
use tracing::{debug, info};

/// Compiles every file of `command`, failing if any of them does not check.
pub fn compile(command: &Command) -> anyhow::Result<()> {
    let mut failed = Vec::new();
    for path in &command.files {
        if !compile_file(command, path)? {
            failed.push(path.display().to_string());
        }
    }
    if !failed.is_empty() {
        bail!("could not compile {}", failed.join(", "));
    }
    Ok(())
}

/// Returns whether the file is free of errors. I/O failures are errors of their own.
fn compile_file(command: &Command, path: &Path) -> anyhow::Result<bool> {
    let src = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let src: Arc<str> = Arc::from(src);
    debug!(path = %path.display(), bytes = src.len(), "compiling");

    if command.print_tokens {
        info!("{}", token_listing(&src));
    }

    match compile_to_ast(src) {
        Ok(typed) => {
            report_success(command, &typed);
            Ok(true)
        }
        Err(err) => {
            format_err(Some(path), &err);
            println_yellow_err(&format!("{} has errors.", path.display()));
            Ok(false)
        }
    }
}

fn report_success(command: &Command, typed: &TypedProgram) {
    if command.print_ast {
        info!("{}", ast_outline(&typed.program));
    }
    println_green("Semantics OK.");
    if !command.no_tables {
        info!("{}", typed.symbols);
        info!("{}", typed.procedures);
    }
}
