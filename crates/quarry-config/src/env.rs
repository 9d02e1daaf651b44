use std::sync::OnceLock;

use regex::Regex;

/// Matches `{{ env.VAR }}` with an optional `| default("fallback")` clause
fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\)\s*)?\}\}"#)
            .expect("placeholder pattern is valid")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw config text
///
/// A placeholder without a default clause fails when the variable is
/// unset; with `{{ env.VAR | default("fallback") }}` the fallback is
/// substituted instead. Expansion happens before TOML parsing, so config
/// structs deserialize plain `String`/`SecretString` values.
pub(crate) fn expand_env(raw: &str) -> Result<String, String> {
    let mut expanded = String::with_capacity(raw.len());
    let mut last_end = 0;

    for captures in placeholder().captures_iter(raw) {
        let whole = captures.get(0).expect("capture 0 is the whole match");
        let var_name = &captures[1];

        expanded.push_str(&raw[last_end..whole.start()]);

        match std::env::var(var_name) {
            Ok(value) => expanded.push_str(&value),
            Err(_) => match captures.get(2) {
                Some(fallback) => expanded.push_str(fallback.as_str()),
                None => return Err(format!("environment variable not set: `{var_name}`")),
            },
        }

        last_end = whole.end();
    }

    expanded.push_str(&raw[last_end..]);

    Ok(expanded)
}
