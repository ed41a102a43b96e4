use derive_more::{Display, From};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Identifier the detection service assigns to a result.
///
/// The service may hand out numbers or strings; whichever it sent is echoed
/// back unchanged on rename. Numbers keep their exact JSON form, so
/// unsigned ids past `i64::MAX` and fractional ids survive the trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(untagged)]
pub enum DetectionId {
    #[display(fmt = "{}", _0)]
    Number(Number),
    #[display(fmt = "{}", _0)]
    Text(String),
}

impl From<i64> for DetectionId {
    fn from(value: i64) -> Self {
        DetectionId::Number(value.into())
    }
}

impl From<&str> for DetectionId {
    fn from(value: &str) -> Self {
        DetectionId::Text(value.to_string())
    }
}

/// Result of `POST /api/detect`, displayed as-is by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_id: Option<DetectionId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medicine_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_authentic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Any other fields the service sent, kept so the record round-trips.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DetectionRecord {
    pub fn display_name(&self) -> &str {
        non_empty(Some(&self.medicine_name)).unwrap_or("N/A")
    }

    pub fn display_composition(&self) -> &str {
        non_empty(self.composition.as_ref()).unwrap_or("Unknown")
    }

    pub fn display_side_effects(&self) -> &str {
        non_empty(self.side_effects.as_ref()).unwrap_or("Not Available")
    }

    pub fn authenticity_label(&self) -> &'static str {
        if self.is_authentic {
            "Authentic Drug ✅"
        } else {
            "Counterfeit Drug ❌"
        }
    }

    /// OCR confidence as a percentage, when the service reported one.
    pub fn confidence_percent(&self) -> Option<String> {
        self.confidence.map(|c| format!("{:.1}%", c * 100.0))
    }

    pub fn with_name(&self, medicine_name: &str) -> Self {
        Self {
            medicine_name: medicine_name.to_string(),
            ..self.clone()
        }
    }

    /// Overwrites composition and side effects with whatever the lookup
    /// returned, including absent values.
    pub fn with_info(&self, info: &MedicineInfo) -> Self {
        Self {
            composition: info.composition.clone(),
            side_effects: info.side_effects.clone(),
            ..self.clone()
        }
    }
}

/// Reads `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateNameRequest {
    pub detection_id: DetectionId,
    pub new_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateNameResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

/// Body of `GET /api/get-medicine-info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicineInfo {
    #[serde(default)]
    pub composition: Option<String>,
    #[serde(default)]
    pub side_effects: Option<String>,
}
