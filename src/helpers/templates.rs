use std::fs;

use anyhow::Context;
use minijinja::Environment;

pub const INDEX_TEMPLATE: &str = "index.html";

const TEMPLATE_DIR: &str = "templates";

// Parse the index template up front so a broken template stops
// startup instead of the first request
pub fn load_templates() -> anyhow::Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_filter("fmt_date", fmt_date);

    let path = format!("{TEMPLATE_DIR}/{INDEX_TEMPLATE}");
    let source = fs::read_to_string(&path).with_context(|| format!("reading template {path}"))?;
    env.add_template_owned(INDEX_TEMPLATE.to_string(), source)
        .with_context(|| format!("parsing template {path}"))?;

    Ok(env)
}

// Timestamps arrive as RFC 3339, keep the date and minutes
fn fmt_date(value: String) -> String {
    match value.split_once('T') {
        Some((date, time)) => {
            let minutes = time.get(..5).unwrap_or(time);
            format!("{date} {minutes}")
        }
        None => value,
    }
}
