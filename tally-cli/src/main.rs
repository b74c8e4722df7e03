//! tally CLI - evaluate arithmetic expressions from the command line.
//! tally CLI - 在命令行中求值算术表达式。

mod commands;
mod output;
mod session;

use clap::{Parser, Subcommand};
use session::{Session, Settings};

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "tally - an arithmetic expression calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Maximum expression nesting depth. / 表达式最大嵌套深度。
    #[arg(long, global = true, value_name = "N")]
    max_depth: Option<usize>,

    /// Bind a variable, e.g. `--var x=2`. / 绑定变量。
    #[arg(long = "var", global = true, value_name = "NAME=NUMBER", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Start without the built-in functions and constants. / 不加载内置函数和常量。
    #[arg(long, global = true)]
    no_prelude: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression. / 求值表达式。
    Eval {
        /// The expression to evaluate. / 要求值的表达式。
        expr: String,
    },

    /// Start an interactive REPL. / 启动交互式 REPL。
    Repl,

    /// Print the compiled expression tree. / 打印编译后的表达式树。
    Tree {
        /// The expression to compile. / 要编译的表达式。
        expr: String,
    },

    /// Print an expression with syntax colouring. / 以语法着色打印表达式。
    Highlight {
        /// The expression to highlight. / 要着色的表达式。
        expr: String,
    },
}

/// Parse a `NAME=NUMBER` binding.
fn parse_binding(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=NUMBER, got `{arg}`"))?;
    let name = name.trim();

    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(format!("`{name}` is not a valid variable name"));
    }

    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number for `{name}`: {e}"))?;
    Ok((name.to_string(), value))
}

/// Install the log subscriber. `TALLY_LOG` takes an `EnvFilter` directive.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TALLY_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let session = Session::new(Settings {
        max_depth: cli.max_depth,
        vars: cli.vars,
        prelude: !cli.no_prelude,
        quiet: cli.quiet,
    });

    let result = match cli.command {
        Commands::Eval { expr } => commands::eval::run(&session, &expr),
        Commands::Repl => commands::repl::run(&session),
        Commands::Tree { expr } => commands::tree::run(&session, &expr),
        Commands::Highlight { expr } => commands::highlight::run(&session, &expr),
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
