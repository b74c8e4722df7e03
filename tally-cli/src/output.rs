//! Output formatting utilities.
//! 输出格式化工具。
//!
//! These functions provide colored terminal output for the CLI.
//! 这些函数为 CLI 提供彩色终端输出。

use tally_ast::Category;

const RESET: &str = "\x1b[0m";

/// Print an evaluation result.
/// 打印求值结果。
pub fn result(msg: &str) {
    println!("{msg}");
}

/// Print an info message in blue.
/// 以蓝色打印信息消息。
pub fn info(msg: &str) {
    println!("\x1b[34minfo:\x1b[0m {msg}");
}

/// ANSI colour for a node category, `None` for the terminal default.
/// 节点类别对应的 ANSI 颜色。
pub fn colour(category: Category) -> Option<&'static str> {
    match category {
        Category::Number => Some("\x1b[34m"),
        Category::Variable => Some("\x1b[32m"),
        Category::Operator => Some("\x1b[35m"),
        Category::Call | Category::Other => None,
    }
}

/// Wrap `text` in the colour for `category`.
pub fn paint(text: &str, category: Option<Category>) -> String {
    match category.and_then(colour) {
        Some(code) => format!("{code}{text}{RESET}"),
        None => text.to_string(),
    }
}
