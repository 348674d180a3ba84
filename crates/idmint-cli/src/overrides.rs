use serde_json::{Map, Value};

use idmint_generate::generators::GeneratorRegistry;
use idmint_generate::params::ParamKind;
use idmint_generate::{GenerationError, GeneratorRequest};

/// A `-p` argument: `KEY=VALUE`, or `ID.KEY=VALUE` to target one generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamOverride {
    pub scope: Option<String>,
    pub key: String,
    pub raw: String,
}

pub fn parse_param(arg: &str) -> Result<ParamOverride, String> {
    let (name, raw) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))?;
    let name = name.trim();

    // Generator ids contain dots; param keys never do.
    let (scope, key) = match name.rsplit_once('.') {
        Some((scope, key)) => (Some(scope), key),
        None => (None, name),
    };
    if key.is_empty() || scope.is_some_and(str::is_empty) {
        return Err(format!("empty parameter name in '{arg}'"));
    }

    Ok(ParamOverride {
        scope: scope.map(str::to_string),
        key: key.to_string(),
        raw: raw.to_string(),
    })
}

/// Turn generator ids and `-p` overrides into batch requests.
///
/// Unscoped overrides go to every requested generator that declares the
/// key; with a single id they always apply, so unknown keys surface as that
/// generator's validation error.
pub fn build_requests(
    registry: &GeneratorRegistry,
    ids: &[String],
    overrides: &[ParamOverride],
) -> Result<Vec<GeneratorRequest>, GenerationError> {
    for item in overrides {
        if let Some(scope) = &item.scope {
            if !ids.iter().any(|id| id == scope) {
                return Err(GenerationError::InvalidParams(format!(
                    "'{scope}.{}' targets a generator that was not requested",
                    item.key
                )));
            }
        }
    }

    let mut used = vec![false; overrides.len()];
    let mut requests = Vec::with_capacity(ids.len());

    for id in ids {
        let generator = registry.require(id)?;
        let mut params = Map::new();

        for (index, item) in overrides.iter().enumerate() {
            let kind = generator
                .params()
                .iter()
                .find(|spec| spec.key == item.key)
                .map(|spec| spec.kind);
            let applies = match &item.scope {
                Some(scope) => scope == id,
                None => kind.is_some() || ids.len() == 1,
            };
            if applies {
                used[index] = true;
                params.insert(item.key.clone(), param_value(kind, &item.raw));
            }
        }

        let request = GeneratorRequest::new(id.clone());
        requests.push(if params.is_empty() {
            request
        } else {
            request.with_params(Value::Object(params))
        });
    }

    if let Some(index) = used.iter().position(|used| !used) {
        return Err(GenerationError::InvalidParams(format!(
            "no requested generator accepts '{}'",
            overrides[index].key
        )));
    }

    Ok(requests)
}

/// String-typed params keep the raw text so masks like `1234` stay masks;
/// everything else is read as JSON when it parses.
fn param_value(kind: Option<ParamKind>, raw: &str) -> Value {
    match kind {
        Some(ParamKind::String | ParamKind::Char) => Value::String(raw.to_string()),
        _ => serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn params(values: &[&str]) -> Vec<ParamOverride> {
        values
            .iter()
            .map(|value| parse_param(value).expect("valid param"))
            .collect()
    }

    #[test]
    fn parses_plain_and_scoped_params() {
        assert_eq!(
            parse_param("format=isbn-13").expect("plain"),
            ParamOverride {
                scope: None,
                key: "format".to_string(),
                raw: "isbn-13".to_string(),
            }
        );

        let scoped = parse_param("code.isbn.locale=de").expect("scoped");
        assert_eq!(scoped.scope.as_deref(), Some("code.isbn"));
        assert_eq!(scoped.key, "locale");

        let with_equals = parse_param("mask=A=@#").expect("value with '='");
        assert_eq!(with_equals.raw, "A=@#");
    }

    #[test]
    fn rejects_malformed_params() {
        assert!(parse_param("format").is_err());
        assert!(parse_param("=x").is_err());
        assert!(parse_param("code.isbn.=x").is_err());
        assert!(parse_param(".format=x").is_err());
    }

    #[test]
    fn values_follow_declared_kinds() {
        let registry = GeneratorRegistry::new();
        let requests = build_requests(
            &registry,
            &ids(&["code.custom"]),
            &params(&["mask=1234", "digit=9"]),
        )
        .expect("requests");
        assert_eq!(
            requests[0].params,
            Some(json!({"mask": "1234", "digit": "9"}))
        );

        let requests = build_requests(&registry, &ids(&["file.size"]), &params(&["min=5"]))
            .expect("requests");
        assert_eq!(requests[0].params, Some(json!({"min": 5})));
    }

    #[test]
    fn unscoped_params_go_to_generators_that_declare_them() {
        let registry = GeneratorRegistry::new();
        let requests = build_requests(
            &registry,
            &ids(&["code.imei", "code.isbn", "code.ean"]),
            &params(&["format=isbn-13", "code.ean.format=ean-8"]),
        )
        .expect("requests");

        assert_eq!(requests[0].params, None);
        assert_eq!(requests[1].params, Some(json!({"format": "isbn-13"})));
        assert_eq!(requests[2].params, Some(json!({"format": "ean-8"})));
    }

    #[test]
    fn unmatched_params_are_rejected() {
        let registry = GeneratorRegistry::new();
        let result = build_requests(
            &registry,
            &ids(&["code.imei", "code.pin"]),
            &params(&["format=isbn-13"]),
        );
        assert!(matches!(result, Err(GenerationError::InvalidParams(_))));

        let result = build_requests(
            &registry,
            &ids(&["code.pin"]),
            &params(&["code.isbn.format=isbn-13"]),
        );
        assert!(matches!(result, Err(GenerationError::InvalidParams(_))));

        let result = build_requests(&registry, &ids(&["code.asin"]), &[]);
        assert!(matches!(result, Err(GenerationError::UnknownGenerator(_))));
    }
}
