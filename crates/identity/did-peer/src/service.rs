/*!
 * DID Service handling for Peer DID
 *
 * Services are embedded in numalgo 2 identifiers as `.S` segments holding
 * base64url encoded JSON with abbreviated field names.
 */

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::{BASE64_URL_LENIENT, errors::CoreError, validation::validate_json};

pub const DIDCOMM_MESSAGING: &str = "DIDCommMessaging";
pub const DIDCOMM_MESSAGING_SHORT: &str = "dm";

/// Long name to abbreviation, applied to every service
const SERVICE_FIELDS: [(&str, &str); 2] = [("type", "t"), ("serviceEndpoint", "s")];

/// Long name to abbreviation, applied to DIDComm services only
const DIDCOMM_FIELDS: [(&str, &str); 2] = [("routingKeys", "r"), ("accept", "a")];

/// Structured DIDComm endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoint {
    pub uri: String,
    pub routing_keys: Vec<String>,
    pub accept: Vec<String>,
}

impl ServiceEndpoint {
    /// Reads an endpoint in structured form, or in the legacy flat form where
    /// `serviceEndpoint` is the uri and `routingKeys`/`accept` sit on `service`
    pub fn from_value(endpoint: &Value, service: &Map<String, Value>) -> Result<Self, CoreError> {
        match endpoint {
            Value::String(uri) => {
                debug!("normalizing flat serviceEndpoint ({uri})");
                Ok(ServiceEndpoint {
                    uri: uri.clone(),
                    routing_keys: string_list(service, "routingKeys")?,
                    accept: string_list(service, "accept")?,
                })
            }
            Value::Object(map) => {
                let Some(uri) = map.get("uri").and_then(Value::as_str) else {
                    return Err(CoreError::InvalidService(format!(
                        "serviceEndpoint has no uri: {endpoint}"
                    )));
                };
                Ok(ServiceEndpoint {
                    uri: uri.to_string(),
                    routing_keys: string_list(map, "routingKeys")?,
                    accept: string_list(map, "accept")?,
                })
            }
            other => Err(CoreError::InvalidService(format!(
                "unrecognized serviceEndpoint: {other}"
            ))),
        }
    }

    pub fn to_dict(&self) -> Value {
        json!({
            "uri": self.uri,
            "routingKeys": self.routing_keys,
            "accept": self.accept,
        })
    }
}

/// Reads an optional list of strings
fn string_list(map: &Map<String, Value>, key: &str) -> Result<Vec<String>, CoreError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    CoreError::InvalidService(format!("{key} must only hold strings"))
                })
            })
            .collect(),
        Some(other) => Err(CoreError::InvalidService(format!(
            "{key} must be a list: {other}"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DIDCommService {
    pub id: String,
    pub service_endpoint: ServiceEndpoint,
}

/// A service of a peer DID Document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Service {
    DIDCommMessaging(DIDCommService),
    /// Any other service, kept verbatim
    Other(Map<String, Value>),
}

impl Service {
    pub fn id(&self) -> Option<&str> {
        match self {
            Service::DIDCommMessaging(service) => Some(&service.id),
            Service::Other(map) => map.get("id").and_then(Value::as_str),
        }
    }

    pub fn type_name(&self) -> Option<&str> {
        match self {
            Service::DIDCommMessaging(_) => Some(DIDCOMM_MESSAGING),
            Service::Other(map) => map.get("type").and_then(Value::as_str),
        }
    }

    pub fn to_dict(&self) -> Value {
        match self {
            Service::DIDCommMessaging(service) => json!({
                "id": service.id,
                "type": DIDCOMM_MESSAGING,
                "serviceEndpoint": service.service_endpoint.to_dict(),
            }),
            Service::Other(map) => Value::Object(map.clone()),
        }
    }

    /// Parses a service from DID Document JSON
    pub fn from_value(value: &Value) -> Result<Self, CoreError> {
        let Value::Object(map) = value else {
            return Err(CoreError::InvalidService(format!(
                "service is not an object: {value}"
            )));
        };
        let Some(id) = map.get("id").and_then(Value::as_str) else {
            return Err(CoreError::MissingField("service id".to_string()));
        };
        let Some(type_name) = map.get("type").and_then(Value::as_str) else {
            return Err(CoreError::MissingField("service type".to_string()));
        };

        if type_name != DIDCOMM_MESSAGING {
            return Ok(Service::Other(map.clone()));
        }

        let Some(endpoint) = map.get("serviceEndpoint") else {
            return Err(CoreError::MissingField("serviceEndpoint".to_string()));
        };

        Ok(Service::DIDCommMessaging(DIDCommService {
            id: id.to_string(),
            service_endpoint: ServiceEndpoint::from_value(endpoint, map)?,
        }))
    }
}

impl Serialize for Service {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_dict().serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Abbreviate,
    Expand,
}

impl Direction {
    fn rename<'a>(self, table: &[(&'static str, &'static str)], key: &'a str) -> &'a str {
        table
            .iter()
            .find_map(|(long, short)| match self {
                Direction::Abbreviate if *long == key => Some(*short),
                Direction::Expand if *short == key => Some(*long),
                _ => None,
            })
            .unwrap_or(key)
    }

    fn type_name(self, type_name: &str) -> &str {
        match self {
            Direction::Abbreviate if type_name == DIDCOMM_MESSAGING => DIDCOMM_MESSAGING_SHORT,
            Direction::Expand if type_name == DIDCOMM_MESSAGING_SHORT => DIDCOMM_MESSAGING,
            _ => type_name,
        }
    }

    /// Type key and DIDComm type name of a service before renaming
    fn didcomm_marker(self) -> (&'static str, &'static str) {
        match self {
            Direction::Abbreviate => ("type", DIDCOMM_MESSAGING),
            Direction::Expand => ("t", DIDCOMM_MESSAGING_SHORT),
        }
    }
}

/// Renames the field names of one service
///
/// `type` and `serviceEndpoint` are renamed on every service. The DIDComm
/// fields (at the top level or inside an endpoint object) only on DIDComm
/// services, so other services keep their own fields as they are.
fn rename_service(service: &Map<String, Value>, direction: Direction) -> Map<String, Value> {
    let (type_key, didcomm_type) = direction.didcomm_marker();
    let didcomm = service.get(type_key).and_then(Value::as_str) == Some(didcomm_type);

    service
        .iter()
        .map(|(key, value)| {
            let mut key = direction.rename(&SERVICE_FIELDS, key);
            if didcomm {
                key = direction.rename(&DIDCOMM_FIELDS, key);
            }
            let value = match (key, value) {
                ("t" | "type", Value::String(t)) => {
                    Value::String(direction.type_name(t).to_string())
                }
                ("s" | "serviceEndpoint", Value::Object(endpoint)) if didcomm => Value::Object(
                    endpoint
                        .iter()
                        .map(|(key, value)| {
                            (direction.rename(&DIDCOMM_FIELDS, key).to_string(), value.clone())
                        })
                        .collect(),
                ),
                _ => value.clone(),
            };
            (key.to_string(), value)
        })
        .collect()
}

fn abbreviate(service: &Map<String, Value>) -> Map<String, Value> {
    rename_service(service, Direction::Abbreviate)
}

fn expand(service: &Map<String, Value>) -> Map<String, Value> {
    rename_service(service, Direction::Expand)
}

/// Encodes service JSON (an object or an array of objects) as `.S` segments
///
/// Each object becomes its own segment. Every service must decode again, so
/// a missing `type` or an unusable DIDComm `serviceEndpoint` is rejected.
pub fn encode_service(service: &str) -> Result<String, CoreError> {
    let services = match validate_json(service)? {
        Value::Object(map) => vec![map],
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map),
                other => Err(CoreError::MalformedJson(format!(
                    "service is not an object: {other}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?,
        other => {
            return Err(CoreError::MalformedJson(format!(
                "service is not an object: {other}"
            )));
        }
    };

    let mut encoded = String::new();
    for service in services {
        let compact = abbreviate(&service);
        convert_service("", &compact, 0)?;

        let compact = serde_json::to_string(&Value::Object(compact))
            .map_err(|e| CoreError::MalformedJson(e.to_string()))?;
        encoded.push_str(".S");
        encoded.push_str(&BASE64_URL_SAFE_NO_PAD.encode(compact));
    }

    Ok(encoded)
}

/// Service id for the `idx`th service of `did`
pub fn service_id(did: &str, idx: usize) -> String {
    if idx == 0 {
        [did, "#service"].concat()
    } else {
        [did, "#service-", &idx.to_string()].concat()
    }
}

/// Decodes the payloads of `.S` segments (without the `S` marker)
///
/// A payload may hold a single service or an array of them.
pub fn decode_services(did: &str, encoded: &[&str]) -> Result<Vec<Service>, CoreError> {
    let mut compact = Vec::new();
    for segment in encoded {
        let raw = BASE64_URL_LENIENT.decode(segment).map_err(|e| {
            CoreError::InvalidService(format!(
                "Failed to decode base64 string: ({segment}) Reason: {e}"
            ))
        })?;

        match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Object(map)) => compact.push(map),
            Ok(Value::Array(items)) => {
                for item in items {
                    let Value::Object(map) = item else {
                        return Err(CoreError::InvalidService(format!(
                            "service is not an object: {item}"
                        )));
                    };
                    compact.push(map);
                }
            }
            Ok(other) => {
                return Err(CoreError::InvalidService(format!(
                    "service is not an object: {other}"
                )));
            }
            Err(e) => {
                return Err(CoreError::InvalidService(format!(
                    "Failed to deserialize service: ({}) Reason: {e}",
                    String::from_utf8_lossy(&raw)
                )));
            }
        }
    }

    compact
        .iter()
        .enumerate()
        .map(|(idx, service)| convert_service(did, service, idx))
        .collect()
}

/// Expands one abbreviated service and assigns its id
pub(crate) fn convert_service(
    did: &str,
    compact: &Map<String, Value>,
    service_idx: usize,
) -> Result<Service, CoreError> {
    let service = expand(compact);

    let Some(type_name) = service.get("type").and_then(Value::as_str) else {
        return Err(CoreError::InvalidService(format!(
            "service doesn't contain a type: {}",
            Value::Object(compact.clone())
        )));
    };

    let id = match service.get("id").and_then(Value::as_str) {
        Some(id) if id.starts_with('#') => [did, id].concat(),
        Some(id) => id.to_string(),
        None => service_id(did, service_idx),
    };

    if type_name == DIDCOMM_MESSAGING {
        let Some(endpoint) = service.get("serviceEndpoint") else {
            return Err(CoreError::InvalidService(
                "DIDCommMessaging service has no serviceEndpoint".to_string(),
            ));
        };
        return Ok(Service::DIDCommMessaging(DIDCommService {
            id,
            service_endpoint: ServiceEndpoint::from_value(endpoint, &service)?,
        }));
    }

    let mut other = Map::new();
    other.insert("id".to_string(), Value::String(id));
    for (key, value) in service {
        if key != "id" {
            other.insert(key, value);
        }
    }
    Ok(Service::Other(other))
}
