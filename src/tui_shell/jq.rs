//! jq queries for the details filter, run by jaq with its standard library.

use anyhow::{Result, anyhow};
use jaq_core::load::{Arena, File, Loader};
use jaq_core::{Compiler, Ctx, FilterT, RcIter};
use jaq_json::Val;
use serde_json::Value;

/// A details filter starting with `.` is a jq query; anything else matches
/// lines as text.
pub(in crate::tui_shell) fn is_query(filter: &str) -> bool {
    filter.starts_with('.')
}

/// Runs `query` against `doc` and returns every output. The first runtime
/// error ends the run.
pub(in crate::tui_shell) fn run(query: &str, doc: &Value) -> Result<Vec<Value>> {
    let program = File {
        code: query,
        path: (),
    };
    let loader = Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = Arena::default();
    let modules = loader
        .load(&arena, program)
        .map_err(|errs| anyhow!("jq parse error: {} error(s) in {:?}", errs.len(), query))?;
    let filter = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(|errs| {
            anyhow!(
                "jq parse error: {} undefined name(s) in {:?}",
                errs.len(),
                query
            )
        })?;

    let inputs = RcIter::new(core::iter::empty());
    let outputs: Result<Vec<Value>> = filter
        .run((Ctx::new([], &inputs), Val::from(doc.clone())))
        .map(|out| out.map(Value::from).map_err(|err| anyhow!("jq error: {}", err)))
        .collect();
    outputs
}

#[cfg(test)]
#[path = "../tests/tui_shell/jq_tests.rs"]
mod tests;
