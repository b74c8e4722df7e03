//! Shared state for one CLI invocation.

use tally_ast::{CompileOptions, CompiledProgram, Compiler, Value};
use tally_common::Span;
use tally_diagnostic::{Diagnostic, emit};
use tally_eval::{Environment, ExecOptions, Executor};

/// Settings gathered from the command line.
pub struct Settings {
    pub max_depth: Option<usize>,
    pub vars: Vec<(String, f64)>,
    pub prelude: bool,
    pub quiet: bool,
}

/// A compiler, an environment and the options to run them with.
pub struct Session {
    compiler: Compiler,
    exec: ExecOptions,
    env: Environment,
    quiet: bool,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let mut compile = CompileOptions::default();
        let mut exec = ExecOptions::default();
        if let Some(depth) = settings.max_depth {
            compile.max_depth = depth;
            exec.max_depth = depth;
        }

        let mut env = if settings.prelude {
            tally_std::environment()
        } else {
            Environment::new()
        };
        env.extend(
            settings
                .vars
                .into_iter()
                .map(|(name, n)| (name, Value::Number(n))),
        );

        Self {
            compiler: Compiler::with_options(compile),
            exec,
            env,
            quiet: settings.quiet,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Compile `source`, rendering any syntax error.
    pub fn compile(&self, source: &str, filename: &str) -> Result<CompiledProgram, String> {
        self.compiler.compile(source).map_err(|err| {
            self.report(source, filename, &err.to_diagnostic());
            "syntax error".to_string()
        })
    }

    /// Compile and execute `source`, rendering any error.
    pub fn evaluate(&self, source: &str, filename: &str) -> Result<Value, String> {
        let program = self.compile(source, filename)?;
        Executor::new(&self.env)
            .with_options(self.exec)
            .execute(&program)
            .map_err(|err| {
                let whole = Span::from_usize(0, source.len());
                self.report(source, filename, &err.to_diagnostic(whole));
                "evaluation error".to_string()
            })
    }

    fn report(&self, source: &str, filename: &str, diagnostic: &Diagnostic) {
        if self.quiet {
            return;
        }
        if let Err(e) = emit(source, filename, diagnostic) {
            tracing::warn!(error = %e, "failed to render diagnostic");
        }
    }
}
