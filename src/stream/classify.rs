use serde_yaml::Value;
use std::fmt;

/// The three fields that decide where a rendered document lands.
///
/// Document shape:
/// ```yaml
/// schema: promenade/Certificate/v1
/// metadata:
///   name: kubelet
///   layeringDefinition:
///     layer: site
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub schema: String,
    pub name: String,
    pub layer: String,
}

impl Classification {
    /// Project the classification fields out of a decoded document.
    ///
    /// Total over any YAML value: absent keys, non-mapping documents and
    /// non-scalar fields all come back as empty strings.
    pub fn from_value(doc: &Value) -> Self {
        let metadata = field(doc, "metadata");
        let layering = metadata.and_then(|m| field(m, "layeringDefinition"));

        Self {
            schema: scalar_text(field(doc, "schema")),
            name: scalar_text(metadata.and_then(|m| field(m, "name"))),
            layer: scalar_text(layering.and_then(|l| field(l, "layer"))),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with name: {} and layer: {}",
            self.schema, self.name, self.layer
        )
    }
}

fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Mapping(map) => map.get(key),
        Value::Tagged(tagged) => field(&tagged.value, key),
        _ => None,
    }
}

fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Tagged(tagged)) => scalar_text(Some(&tagged.value)),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classify(text: &str) -> Classification {
        let value: Value = serde_yaml::from_str(text).unwrap();
        Classification::from_value(&value)
    }

    #[test]
    fn extracts_all_three_fields() {
        let got = classify(
            "schema: armada/Chart/v1\n\
             metadata:\n  name: ingress\n  layeringDefinition:\n    layer: global\n\
             data:\n  release: ingress\n",
        );
        assert_eq!(
            got,
            Classification {
                schema: "armada/Chart/v1".into(),
                name: "ingress".into(),
                layer: "global".into(),
            }
        );
        assert_eq!(got.to_string(), "armada/Chart/v1 with name: ingress and layer: global");
    }

    #[test]
    fn missing_fields_are_empty() {
        assert_eq!(classify("data: {}\n"), Classification::default());
        assert_eq!(
            classify("schema: a/b\nmetadata:\n  name: only-name\n"),
            Classification {
                schema: "a/b".into(),
                name: "only-name".into(),
                layer: String::new(),
            }
        );
    }

    #[test]
    fn non_mapping_documents_project_to_empty() {
        assert_eq!(classify("just a scalar\n"), Classification::default());
        assert_eq!(classify("- schema: a\n- b\n"), Classification::default());
        assert_eq!(classify("~\n"), Classification::default());
    }

    #[test]
    fn non_string_scalars_use_their_text_and_collections_are_empty() {
        let got = classify(
            "schema: [not, a, string]\nmetadata:\n  name: 42\n  layeringDefinition:\n    layer: true\n",
        );
        assert_eq!(got.schema, "");
        assert_eq!(got.name, "42");
        assert_eq!(got.layer, "true");
    }

    #[test]
    fn metadata_of_wrong_shape_is_tolerated() {
        let got = classify("schema: x\nmetadata: plain\n");
        assert_eq!(got.name, "");
        assert_eq!(got.layer, "");
    }
}
