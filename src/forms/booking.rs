use serde_json::{Map, Value};

use crate::domain::booking::LockSlotPayload;
use crate::forms::FormError;

/// Fields a lock request must carry, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "shop_id",
    "specialist_id",
    "user_id",
    "booking_date_time",
    "services_id",
];

/// Raw JSON body of `POST /booking` before validation.
#[derive(Clone, Debug)]
pub struct LockSlotForm {
    fields: Map<String, Value>,
}

impl LockSlotForm {
    /// Parses the request body. Any valid JSON is accepted here; a body that
    /// is not an object simply has no fields.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from(value))
    }

    /// Required fields that are absent or empty, in [`REQUIRED_FIELDS`] order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .into_iter()
            .filter(|field| self.present(field).is_none())
            .collect()
    }

    /// Validates the form and builds the payload forwarded downstream.
    pub fn into_payload(mut self) -> Result<LockSlotPayload, FormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let services_id = match self.fields.remove("services_id") {
            Some(Value::Array(services)) => services,
            _ => return Err(FormError::ServicesNotArray),
        };

        let reservation_name = self.take_present("reservation_name");
        let reservation_phone = self.take_present("reservation_phone");
        let reservation_email = self.take_present("reservation_email");

        Ok(LockSlotPayload {
            shop_id: self.take_required("shop_id"),
            specialist_id: self.take_required("specialist_id"),
            user_id: self.take_required("user_id"),
            booking_date_time: self.take_required("booking_date_time"),
            services_id,
            reservation_name,
            reservation_phone,
            reservation_email,
        })
    }

    fn present(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|value| is_provided(value))
    }

    fn take_present(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field).filter(is_provided)
    }

    fn take_required(&mut self, field: &str) -> Value {
        self.fields.remove(field).unwrap_or(Value::Null)
    }
}

impl From<Value> for LockSlotForm {
    fn from(value: Value) -> Self {
        let fields = match value {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        Self { fields }
    }
}

/// `null`, `false`, `0` and `""` count as not provided.
fn is_provided(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
