//! YAML rendering for reports.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_yaml::Value;
use yaml_rust_davvid::yaml::Hash;
use yaml_rust_davvid::{Yaml, YamlEmitter};

/// Renders a value as YAML, emitting multi-line strings as literal blocks.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    let value = serde_yaml::to_value(data).context("Failed to serialize to YAML value")?;
    let document = to_emitter_yaml(&value);

    let mut output = String::new();
    let mut emitter = YamlEmitter::new(&mut output);
    emitter.multiline_strings(true);
    emitter.dump(&document).context("Failed to emit YAML")?;

    Ok(output)
}

/// Converts a serde_yaml tree into the emitter's representation.
fn to_emitter_yaml(value: &Value) -> Yaml {
    match value {
        Value::Null => Yaml::Null,
        Value::Bool(b) => Yaml::Boolean(*b),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Yaml::Integer(i),
            (None, Some(f)) => Yaml::Real(f.to_string()),
            (None, None) => Yaml::String(n.to_string()),
        },
        Value::String(s) => Yaml::String(s.clone()),
        Value::Sequence(items) => Yaml::Array(items.iter().map(to_emitter_yaml).collect()),
        Value::Mapping(map) => {
            let mut hash = Hash::new();
            for (k, v) in map {
                hash.insert(to_emitter_yaml(k), to_emitter_yaml(v));
            }
            Yaml::Hash(hash)
        }
        Value::Tagged(tagged) => to_emitter_yaml(&tagged.value),
    }
}
