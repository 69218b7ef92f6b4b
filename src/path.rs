//! Path helpers shared by the template engine.
//! Computes template-relative paths and resolves `[key]` placeholders.

use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::LazyLock;

/// Flat key/value map used for `[key]` placeholder substitution.
pub type Substitutions = IndexMap<String, String>;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("placeholder pattern is valid"));

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '\\']).filter(|part| !part.is_empty() && *part != ".")
}

/// Converts a path to a string using forward slashes only.
pub fn normalize_separators<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Returns `file` relative to `root`.
///
/// Both inputs are split on `/` and `\`, dropping empty and `.` segments. The
/// leading segments shared with `root` are stripped and the remainder is joined
/// with `/`.
///
/// # Example
/// ```
/// use switch_cli::path::relative_path;
/// assert_eq!(relative_path("./templates/env/", "templates/env/.github/ci.yml"), ".github/ci.yml");
/// ```
pub fn relative_path(root: &str, file: &str) -> String {
    let root_parts: Vec<&str> = segments(root).collect();
    let file_parts: Vec<&str> = segments(file).collect();

    let shared = root_parts
        .iter()
        .zip(file_parts.iter())
        .take_while(|(root_part, file_part)| root_part == file_part)
        .count();

    file_parts[shared..].join("/")
}

/// Replaces every `[key]` in `template` with `data[key]`.
///
/// Keys missing from `data` are left verbatim so that an unresolved
/// placeholder stays visible in the resulting path.
pub fn resolve_placeholders(template: &str, data: &Substitutions) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match data.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Builds a substitution map from the scalar top-level members of a JSON object.
///
/// Strings are used as-is, numbers and booleans are stringified, everything else
/// (null, arrays, objects) is skipped.
pub fn placeholder_map(value: &serde_json::Value) -> Substitutions {
    let mut map = Substitutions::new();
    if let Some(object) = value.as_object() {
        for (key, member) in object {
            let rendered = match member {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => continue,
            };
            map.insert(key.clone(), rendered);
        }
    }
    map
}
