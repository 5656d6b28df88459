//! Drives the declaration walker across every local module of a program.

use crate::checker::Checker;
use crate::program::{describe_node, Program};

use super::error::{SurfaceError, SurfaceResult};
use super::graph::SurfaceGraph;
use super::walker::DeclarationWalker;

pub struct SurfaceBuilder<'a, C: Checker + ?Sized> {
    program: &'a Program,
    checker: &'a C,
}

impl<'a, C: Checker + ?Sized> SurfaceBuilder<'a, C> {
    pub fn new(program: &'a Program, checker: &'a C) -> Self {
        Self { program, checker }
    }

    /// Either the whole graph is returned or the first fatal error; never a partial graph.
    pub fn build(&self) -> SurfaceResult<SurfaceGraph> {
        let mut walker = DeclarationWalker::new(self.program, self.checker);
        let mut local_modules = 0usize;
        for module in self.program.modules() {
            if module.foreign {
                log::debug!("skipping foreign module `{}`", module.name);
                continue;
            }
            self.checker
                .check_module(module)
                .map_err(|rejection| SurfaceError::RejectedModule {
                    module: module.name.clone(),
                    node: rejection.node,
                    label: describe_node(self.program, rejection.node).to_string(),
                    reason: rejection.reason,
                })?;
            log::debug!("walking module `{}`", module.name);
            let emitted = walker.walk_module(module)?;
            log::debug!("module `{}` contributed {emitted} record(s)", module.name);
            local_modules += 1;
        }
        let graph = SurfaceGraph::from_records(walker.into_records());
        log::info!(
            "extracted {} record(s) from {local_modules} local module(s)",
            graph.len()
        );
        Ok(graph)
    }
}

pub fn build_surface<C: Checker + ?Sized>(
    program: &Program,
    checker: &C,
) -> SurfaceResult<SurfaceGraph> {
    SurfaceBuilder::new(program, checker).build()
}
