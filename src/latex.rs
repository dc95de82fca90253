//! LaTeX rendering: underscore escaping and the itemize block.

pub const BEGIN_ITEMIZE: &str = r"\begin{itemize}";
pub const END_ITEMIZE: &str = r"\end{itemize}";
pub const ITEM: &str = r"\item ";

/// Escape underscores so LaTeX does not read them as subscripts.
///
/// Only `_` is touched; other special characters pass through unchanged.
pub fn escape(text: &str) -> String {
    text.replace('_', r"\_")
}

/// Render `items` as an itemize block, one tab-indented `\item` per entry.
///
/// The block ends with a newline after `\end{itemize}`. An empty slice gives
/// just the begin and end lines.
pub fn itemize<S: AsRef<str>>(items: &[S]) -> String {
    let mut block = String::new();
    block.push_str(BEGIN_ITEMIZE);
    block.push('\n');
    for item in items {
        block.push('\t');
        block.push_str(ITEM);
        block.push_str(item.as_ref());
        block.push('\n');
    }
    block.push_str(END_ITEMIZE);
    block.push('\n');
    block
}
