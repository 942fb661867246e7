use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::FALLBACK_LABEL;

/// Prize as the spin API describes it. Every field may be missing.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct PrizeDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl PrizeDescriptor {
    /// `value` as a number, accepting numeric strings.
    pub fn numeric_value(&self) -> Option<f64> {
        match self.value.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrizeKind {
    Cash(f64),
    Bonus(f64),
    Points(u64),
    ExtraSpin,
    Special(String),
}

impl PrizeKind {
    /// `None` when the type needs an amount the payload does not carry.
    pub fn from_descriptor(descriptor: &PrizeDescriptor) -> Option<Self> {
        let kind = descriptor.kind.as_deref()?.trim().to_ascii_lowercase();
        let amount = descriptor.numeric_value();
        match kind.as_str() {
            "cash" => amount.map(PrizeKind::Cash),
            "bonus" => amount.map(PrizeKind::Bonus),
            "points" => amount.filter(|a| *a >= 0.0).map(|a| PrizeKind::Points(a.round() as u64)),
            "spin" | "extra_spin" | "free_spin" => Some(PrizeKind::ExtraSpin),
            "" => None,
            _ => Some(PrizeKind::Special(kind)),
        }
    }

    pub fn value_label(&self) -> String {
        match self {
            PrizeKind::Cash(amount) => format!("${:.2}", amount),
            PrizeKind::Bonus(percentage) => format!("{}%", percentage),
            PrizeKind::Points(points) => format!("{} pts", points),
            PrizeKind::ExtraSpin => "1 spin".to_string(),
            PrizeKind::Special(_) => FALLBACK_LABEL.to_string(),
        }
    }

    pub fn category_label(&self) -> &str {
        match self {
            PrizeKind::Cash(_) => "Cash",
            PrizeKind::Bonus(_) => "Deposit bonus",
            PrizeKind::Points(_) => "Club points",
            PrizeKind::ExtraSpin => "Extra spin",
            PrizeKind::Special(label) => label,
        }
    }
}

/// Response of `POST /api/roulette/spin`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SpinResultPayload {
    pub success: bool,
    pub prize: Option<PrizeDescriptor>,
    pub is_real: bool,
    pub spin_type: Option<String>,
    pub message: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub timestamp: u64,
}

/// Display view of a server-resolved prize.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedPrize {
    pub name: Option<String>,
    pub kind: Option<PrizeKind>,
    pub is_real: bool,
    pub spin_type: Option<String>,
    pub redemption_code: Option<String>,
}

impl ResolvedPrize {
    pub fn from_payload(payload: &SpinResultPayload) -> Self {
        let descriptor = payload.prize.clone().unwrap_or_default();
        Self {
            name: descriptor.name.clone().filter(|n| !n.trim().is_empty()),
            kind: PrizeKind::from_descriptor(&descriptor),
            is_real: payload.is_real,
            spin_type: payload.spin_type.clone(),
            redemption_code: payload.code.clone(),
        }
    }

    pub fn title(&self) -> String {
        self.name.clone().unwrap_or_else(|| FALLBACK_LABEL.to_string())
    }

    pub fn value_label(&self) -> String {
        self.kind
            .as_ref()
            .map(PrizeKind::value_label)
            .unwrap_or_else(|| FALLBACK_LABEL.to_string())
    }

    pub fn category_label(&self) -> String {
        self.kind
            .as_ref()
            .map(|k| k.category_label().to_string())
            .unwrap_or_else(|| FALLBACK_LABEL.to_string())
    }

    pub fn is_demo(&self) -> bool {
        !self.is_real
    }
}

/// Row of the admin prize table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdminPrize {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: f64,
    pub probability: f64,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(kind: &str, value: Value) -> PrizeDescriptor {
        PrizeDescriptor {
            name: Some("Prize".to_string()),
            kind: Some(kind.to_string()),
            value: Some(value),
        }
    }

    #[test]
    fn test_kind_mapping() {
        use serde_json::json;
        let kind = |name: &str, value: Value| PrizeKind::from_descriptor(&descriptor(name, value));
        assert_eq!(kind("cash", json!(50)), Some(PrizeKind::Cash(50.0)));
        assert_eq!(kind("Bonus", json!("20")), Some(PrizeKind::Bonus(20.0)));
        assert_eq!(kind("points", json!(499.6)), Some(PrizeKind::Points(500)));
        assert_eq!(kind("spin", Value::Null), Some(PrizeKind::ExtraSpin));
        assert_eq!(kind("ticket", Value::Null), Some(PrizeKind::Special("ticket".to_string())));
        assert_eq!(kind("cash", json!("lots")), None);
    }

    #[test]
    fn test_payload_decodes_camel_case() {
        let payload: SpinResultPayload = serde_json::from_str(
            r#"{"success":true,"prize":{"name":"$50 Cash","type":"cash","value":"50"},"isReal":true,"spinType":"daily","code":"RX-1"}"#,
        )
        .unwrap();
        let prize = ResolvedPrize::from_payload(&payload);
        assert_eq!(prize.title(), "$50 Cash");
        assert_eq!(prize.value_label(), "$50.00");
        assert_eq!(prize.category_label(), "Cash");
        assert_eq!(prize.redemption_code.as_deref(), Some("RX-1"));
        assert!(!prize.is_demo());
    }

    #[test]
    fn test_incomplete_payload_falls_back() {
        let payload: SpinResultPayload = serde_json::from_str(r#"{"prize":{"name":"  "}}"#).unwrap();
        let prize = ResolvedPrize::from_payload(&payload);
        assert_eq!(prize.title(), FALLBACK_LABEL);
        assert_eq!(prize.value_label(), FALLBACK_LABEL);
        assert_eq!(prize.category_label(), FALLBACK_LABEL);
        assert!(prize.is_demo());

        let empty = ResolvedPrize::from_payload(&SpinResultPayload::default());
        assert_eq!(empty.title(), FALLBACK_LABEL);
    }

    #[test]
    fn test_spin_request_omits_missing_code() {
        let body = serde_json::to_string(&SpinRequest { code: None, timestamp: 5 }).unwrap();
        assert_eq!(body, r#"{"timestamp":5}"#);
    }

    #[test]
    fn test_admin_prize_defaults_active() {
        let row: AdminPrize =
            serde_json::from_str(r#"{"id":3,"name":"Ticket","type":"special","probability":12.5}"#).unwrap();
        assert!(row.active);
        assert_eq!(row.value, 0.0);
        assert!(row.image.is_none());
    }
}
