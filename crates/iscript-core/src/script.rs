//! Install-script rendering.
//!
//! The script form turns a name and an install command into a minimal
//! bash script. Nothing is written to disk; the caller displays the text.

/// Interpreter line every generated script starts with.
pub const SHEBANG: &str = "#!/bin/bash";

/// Renders the install script for `name` and `command`.
///
/// Both strings are inserted verbatim: the name becomes a comment line and
/// the command the script body. The result always ends with a newline.
///
/// # Examples
///
/// ```
/// use iscript_core::render_script;
///
/// let script = render_script("ripgrep", "cargo install ripgrep");
/// assert_eq!(script, "#!/bin/bash\n\n# ripgrep\ncargo install ripgrep\n");
/// ```
pub fn render_script(name: &str, command: &str) -> String {
    format!("{SHEBANG}\n\n# {name}\n{command}\n")
}
