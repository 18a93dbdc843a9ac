//! Inspector
//!
//! Runs one invocation through the pipeline: locate the caller, parse its
//! file, match the call, name the arguments, format the values, compose the
//! line. Every failure degrades to unnamed values.
//!
//! The parse and match run on a short-lived scoped thread. `proc-macro2`
//! keeps its span table per thread, so the table for the caller's file is
//! dropped with the worker and spans held by the host stay valid.

use crate::application::composer::{LineComposer, OutputLine};
use crate::application::formatter::ValueFormatter;
use crate::config::Config;
use crate::domain::callsite::CallSite;
use crate::domain::value::Value;
use crate::error::{Error, Result};
use crate::infrastructure::call_matcher::{find_call, CalleeSet};
use crate::infrastructure::namer::name_arguments;
use crate::infrastructure::source_parser::SynSourceParser;
use crate::ports::{Locate, Render, SourceParser};

pub struct Inspector<'a> {
    parser: &'a dyn SourceParser,
    callees: CalleeSet,
    config: Config,
}

impl Inspector<'static> {
    /// Reads source from disk and matches `d` / `dprobe::d`.
    pub fn new(config: Config) -> Self {
        Self::with_parser(&SynSourceParser, config)
    }
}

impl<'a> Inspector<'a> {
    pub fn with_parser(parser: &'a dyn SourceParser, config: Config) -> Self {
        Self {
            parser,
            callees: CalleeSet::default(),
            config,
        }
    }

    pub fn callees(mut self, callees: CalleeSet) -> Self {
        self.callees = callees;
        self
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Names for the call at `site`, or `None` if no call matches there.
    pub fn try_argument_names(&self, site: &CallSite) -> Result<Option<Vec<String>>> {
        std::thread::scope(|scope| {
            let worker = std::thread::Builder::new()
                .name("dprobe-lookup".to_string())
                .spawn_scoped(scope, || self.lookup(site))
                .map_err(|err| Error::worker(err.to_string()))?;
            worker
                .join()
                .map_err(|_| Error::worker("lookup thread panicked"))?
        })
    }

    fn lookup(&self, site: &CallSite) -> Result<Option<Vec<String>>> {
        let tree = self.parser.parse(&site.file)?;
        let names = find_call(&tree, site.line, site.anchor, &self.callees)
            .map(|call| name_arguments(&tree, &call));
        Ok(names)
    }

    /// Names for the call at `site`; empty when anything goes wrong.
    pub fn argument_names(&self, site: &CallSite) -> Vec<String> {
        match self.try_argument_names(site) {
            Ok(Some(names)) => names,
            Ok(None) => {
                tracing::debug!(
                    file = %site.file.display(),
                    line = site.line,
                    "no matching call on line, printing values without names"
                );
                Vec::new()
            }
            Err(err) => {
                tracing::debug!(error = %err, "argument lookup failed, printing values without names");
                Vec::new()
            }
        }
    }

    /// The complete output line for one invocation.
    pub fn line(&self, locator: &dyn Locate, values: &[&dyn Render]) -> OutputLine {
        let values = ValueFormatter::new(self.config).format(values);
        self.compose(locator, values)
    }

    /// Like [`Inspector::line`], for values already rendered.
    pub fn line_for_values(&self, locator: &dyn Locate, values: &[Value]) -> OutputLine {
        let formatter = ValueFormatter::new(self.config);
        let values = values.iter().map(|v| formatter.format_value(v)).collect();
        self.compose(locator, values)
    }

    fn compose(&self, locator: &dyn Locate, values: Vec<String>) -> OutputLine {
        let site = match locator.locate() {
            Ok(site) => Some(site),
            Err(err) => {
                tracing::debug!(error = %err, "caller not located, printing values without names");
                None
            }
        };

        let names = site
            .as_ref()
            .map(|site| self.argument_names(site))
            .unwrap_or_default();

        LineComposer::new(self.config).compose(site.as_ref(), &names, values)
    }
}
